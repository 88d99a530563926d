use std::fmt;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::git::{GitRepo, GitRunner};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateStatus {
    InvalidRepo,
    FetchFailed(String),
    Dirty,
    NoUpstream,
    UpToDate,
    FastForwarded,
    CannotFastForward,
}

impl fmt::Display for UpdateStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpdateStatus::InvalidRepo => write!(f, "invalid repo, skipped"),
            UpdateStatus::FetchFailed(stderr) => write!(f, "error: {stderr}"),
            UpdateStatus::Dirty => write!(f, "dirty, skipped"),
            UpdateStatus::NoUpstream => write!(f, "no upstream, skipped"),
            UpdateStatus::UpToDate => write!(f, "up to date"),
            UpdateStatus::FastForwarded => write!(f, "updated, fast-forwarded"),
            UpdateStatus::CannotFastForward => write!(f, "cannot fast-forward, skipped"),
        }
    }
}

/// Walk the child directories of `path` and bring every clean repository up
/// to date with its upstream. One status line per entry; per-repository
/// failures never stop the walk.
pub fn update_all(path: &Path) -> Result<()> {
    let mut entries = fs::read_dir(path)
        .with_context(|| format!("failed to read directory {}", path.display()))?
        .collect::<std::io::Result<Vec<_>>>()?;
    entries.sort_by_key(|entry| entry.file_name());

    for entry in entries {
        let entry_path = entry.path();
        if is_globally_ignored(&entry_path) {
            continue;
        }

        let name = entry.file_name().to_string_lossy().into_owned();
        let repo = GitRepo::new(entry_path.clone());
        let status = if !entry_path.is_dir() || !repo.is_git_repository() {
            UpdateStatus::InvalidRepo
        } else {
            update_repo(&repo)?
        };
        println!("- {name} - {status}");
    }

    Ok(())
}

/// Decide what to do with a single repository. Runs one subprocess at a
/// time; every non-zero git exit maps to a status instead of an error.
pub fn update_repo<G: GitRunner>(git: &G) -> Result<UpdateStatus> {
    let fetch = git.run_captured(&["fetch"])?;
    if !fetch.success {
        return Ok(UpdateStatus::FetchFailed(
            fetch.stderr.trim_end().to_string(),
        ));
    }

    let status = git.run_captured(&["status", "--porcelain", "-unormal"])?;
    if !status.stdout.is_empty() {
        return Ok(UpdateStatus::Dirty);
    }

    let upstream_lookup = git.run_captured(&["rev-parse", "--abbrev-ref", "@{upstream}"])?;
    if !upstream_lookup.success {
        return Ok(UpdateStatus::NoUpstream);
    }
    let upstream = upstream_lookup.stdout.trim().to_string();

    let diff = git.run_captured(&["diff", &upstream, "--exit-code", "--quiet"])?;
    if diff.success {
        return Ok(UpdateStatus::UpToDate);
    }

    let pull = git.run_captured(&["pull", "--ff-only"])?;
    if pull.success {
        Ok(UpdateStatus::FastForwarded)
    } else {
        Ok(UpdateStatus::CannotFastForward)
    }
}

fn is_globally_ignored(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(|name| name.eq_ignore_ascii_case(".DS_Store"))
        .unwrap_or(false)
}
