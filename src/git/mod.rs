use std::path::PathBuf;
use std::process::{Command, Stdio};

use anyhow::{Context, Result, anyhow};

/// Outcome of a single captured git invocation. A non-zero exit is not an
/// error at this level; callers inspect `success`.
#[derive(Debug, Clone)]
pub struct Execution {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

#[derive(Debug, Clone, Default)]
pub struct BranchList {
    pub branches: Vec<String>,
    pub current: Option<String>,
}

pub trait GitRunner {
    /// Run git with the given arguments, capturing stdout and stderr.
    /// Errors only when git cannot be spawned at all.
    fn run_captured(&self, args: &[&str]) -> Result<Execution>;

    /// Run git with stdio inherited from this process and return its exit
    /// code.
    fn run_streaming(&self, args: &[&str]) -> Result<i32>;
}

pub struct GitRepo {
    dir: PathBuf,
}

impl GitRepo {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn is_git_repository(&self) -> bool {
        self.dir.join(".git").exists()
    }

    fn command(&self) -> Command {
        let mut command = Command::new("git");
        command.current_dir(&self.dir);
        command
    }
}

impl GitRunner for GitRepo {
    fn run_captured(&self, args: &[&str]) -> Result<Execution> {
        let output = self
            .command()
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .with_context(|| format!("failed to run {}", format_command(args)))?;

        Ok(Execution {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }

    fn run_streaming(&self, args: &[&str]) -> Result<i32> {
        let status = self
            .command()
            .args(args)
            .status()
            .with_context(|| format!("failed to run {}", format_command(args)))?;

        match status.code() {
            Some(code) => Ok(code),
            None => Err(anyhow!("{} terminated by signal", format_command(args))),
        }
    }
}

/// Parse `git branch` output, with or without `-r`. Listing lines carry a
/// two-column marker prefix: `"* "` on the checked-out branch, spaces
/// otherwise. Blank lines are dropped.
pub fn parse_branch_list(output: &str) -> BranchList {
    let mut branches = Vec::new();
    let mut current = None;

    for line in output.lines() {
        let name = line.get(2..).unwrap_or("").trim();
        if name.is_empty() {
            continue;
        }
        if line.starts_with("* ") {
            current = Some(name.to_string());
        }
        branches.push(name.to_string());
    }

    BranchList { branches, current }
}

fn format_command(args: &[&str]) -> String {
    let parts: Vec<&str> = std::iter::once("git").chain(args.iter().copied()).collect();
    parts.join(" ")
}

#[cfg(test)]
mod tests;
