use std::env;
use std::path::PathBuf;

use anyhow::Result;

use crate::git::GitRepo;
use crate::purger::Purger;

pub fn run(path: Option<PathBuf>) -> Result<()> {
    let repo_path = path.map(Ok).unwrap_or_else(env::current_dir)?;
    let purger = Purger::new(GitRepo::new(repo_path));
    purger.run()?;
    Ok(())
}
