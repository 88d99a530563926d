use std::env;
use std::path::PathBuf;

use anyhow::Result;

use crate::git::{GitRepo, GitRunner};

/// Fetch from every remote and drop remote-tracking branches that no longer
/// exist there. Git's own output streams straight through; the returned exit
/// code is git's.
pub fn run(path: Option<PathBuf>) -> Result<i32> {
    let repo_path = path.map(Ok).unwrap_or_else(env::current_dir)?;
    let repo = GitRepo::new(repo_path);
    repo.run_streaming(&["fetch", "--all", "--prune"])
}
