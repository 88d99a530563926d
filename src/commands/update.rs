use std::env;
use std::path::PathBuf;

use anyhow::Result;

use crate::updater;

pub fn run(path: Option<PathBuf>) -> Result<()> {
    let path = path
        .map(Ok)
        .unwrap_or_else(env::current_dir)?
        .canonicalize()?;
    updater::update_all(&path)
}
