use std::fmt;

use anyhow::Result;

use crate::git::{Execution, GitRunner, parse_branch_list};

/// Deletes fully merged local branches, one at a time, skipping the branch
/// that is currently checked out. Failures are reported per branch and never
/// stop the loop.
pub struct Purger<G: GitRunner> {
    git: G,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeletionOutcome {
    Deleted,
    NotFullyMerged,
    Failed(String),
}

impl fmt::Display for DeletionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeletionOutcome::Deleted => write!(f, "ok"),
            DeletionOutcome::NotFullyMerged => write!(f, "not fully merged, skipping"),
            DeletionOutcome::Failed(stderr) => write!(f, "error: {stderr}"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct BranchDeletion {
    pub branch: String,
    pub outcome: DeletionOutcome,
}

impl BranchDeletion {
    pub fn report_line(&self) -> String {
        format!("- {} - {}", self.branch, self.outcome)
    }
}

impl<G: GitRunner> Purger<G> {
    pub fn new(git: G) -> Self {
        Self { git }
    }

    pub fn run(&self) -> Result<Vec<BranchDeletion>> {
        let listing = self.git.run_captured(&["branch"])?;
        let list = parse_branch_list(&listing.stdout);

        let mut deletions = Vec::new();
        for branch in list.branches {
            if list.current.as_deref() == Some(branch.as_str()) {
                continue;
            }
            let deletion = self.delete_branch(branch)?;
            println!("{}", deletion.report_line());
            deletions.push(deletion);
        }
        Ok(deletions)
    }

    fn delete_branch(&self, branch: String) -> Result<BranchDeletion> {
        let execution = self.git.run_captured(&["branch", "-d", &branch])?;
        let outcome = classify_deletion(&execution);
        Ok(BranchDeletion { branch, outcome })
    }
}

fn classify_deletion(execution: &Execution) -> DeletionOutcome {
    if execution.success {
        DeletionOutcome::Deleted
    } else if execution.stderr.contains(" is not fully merged.") {
        DeletionOutcome::NotFullyMerged
    } else {
        DeletionOutcome::Failed(execution.stderr.trim_end().to_string())
    }
}
