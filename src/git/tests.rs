#[cfg(test)]
mod tests {
    use super::super::parse_branch_list;
    use crate::git::{GitRepo, GitRunner};
    use crate::purger::{DeletionOutcome, Purger};
    use anyhow::Result;
    use std::fs;
    use std::path::{Path, PathBuf};
    use std::process::Command;

    #[test]
    fn parse_picks_up_current_branch_and_order() {
        let list = parse_branch_list("* main\n  dev\n  feature/x\n");
        assert_eq!(list.current.as_deref(), Some("main"));
        assert_eq!(list.branches, vec!["main", "dev", "feature/x"]);
    }

    #[test]
    fn parse_without_current_marker() {
        let list = parse_branch_list("  dev\n  feature/x\n");
        assert_eq!(list.current, None);
        assert_eq!(list.branches, vec!["dev", "feature/x"]);
    }

    #[test]
    fn parse_empty_output_yields_empty_list() {
        let list = parse_branch_list("");
        assert_eq!(list.current, None);
        assert!(list.branches.is_empty());

        let list = parse_branch_list("\n\n  \n");
        assert_eq!(list.current, None);
        assert!(list.branches.is_empty());
    }

    #[test]
    fn parse_remote_listing() {
        let list = parse_branch_list("  origin/main\n  origin/dev\n");
        assert_eq!(list.current, None);
        assert_eq!(list.branches, vec!["origin/main", "origin/dev"]);
    }

    #[test]
    fn detects_git_repository_by_dot_git() -> Result<()> {
        let temp = tempfile::tempdir()?;
        let repo = GitRepo::new(temp.path().to_path_buf());
        assert!(!repo.is_git_repository());

        fs::create_dir(temp.path().join(".git"))?;
        assert!(repo.is_git_repository());
        Ok(())
    }

    #[test]
    fn missing_directory_is_a_spawn_error() {
        let repo = GitRepo::new(PathBuf::from("/definitely/not/a/real/directory"));
        assert!(repo.run_captured(&["branch"]).is_err());
    }

    fn git(path: &Path, args: &[&str]) {
        let output = Command::new("git")
            .args(args)
            .current_dir(path)
            .output()
            .unwrap_or_else(|e| panic!("git {}: {e}", args.join(" ")));
        assert!(
            output.status.success(),
            "git {} failed: {}",
            args.join(" "),
            String::from_utf8_lossy(&output.stderr)
        );
    }

    /// A throwaway repository on branch `main` with one fully merged branch
    /// (`merged`) and one carrying an extra commit (`unmerged`).
    fn fixture_repo() -> Result<(tempfile::TempDir, PathBuf)> {
        let temp = tempfile::tempdir()?;
        let path = temp.path().to_path_buf();

        git(&path, &["init", "-b", "main"]);
        git(&path, &["config", "user.email", "test@example.com"]);
        git(&path, &["config", "user.name", "Test User"]);

        fs::write(path.join("README.md"), "# fixture\n")?;
        git(&path, &["add", "."]);
        git(&path, &["commit", "-m", "initial"]);
        git(&path, &["branch", "merged"]);

        git(&path, &["checkout", "-b", "unmerged"]);
        fs::write(path.join("extra.txt"), "extra\n")?;
        git(&path, &["add", "."]);
        git(&path, &["commit", "-m", "extra"]);
        git(&path, &["checkout", "main"]);

        Ok((temp, path))
    }

    #[test]
    fn captured_listing_parses_into_branches() -> Result<()> {
        let (_temp, path) = fixture_repo()?;
        let repo = GitRepo::new(path);

        let listing = repo.run_captured(&["branch"])?;
        assert!(listing.success);

        let list = parse_branch_list(&listing.stdout);
        assert_eq!(list.current.as_deref(), Some("main"));
        let mut names = list.branches.clone();
        names.sort();
        assert_eq!(names, vec!["main", "merged", "unmerged"]);
        Ok(())
    }

    #[test]
    fn captured_failure_does_not_error() -> Result<()> {
        let (_temp, path) = fixture_repo()?;
        let repo = GitRepo::new(path);

        // Deleting the checked-out branch fails, but only through the flag.
        let execution = repo.run_captured(&["branch", "-d", "main"])?;
        assert!(!execution.success);
        assert!(!execution.stderr.is_empty());
        Ok(())
    }

    #[test]
    fn streaming_reports_exit_code() -> Result<()> {
        let (_temp, path) = fixture_repo()?;
        let repo = GitRepo::new(path);

        assert_eq!(
            repo.run_streaming(&["rev-parse", "--quiet", "--verify", "HEAD"])?,
            0
        );
        assert_ne!(
            repo.run_streaming(&["rev-parse", "--quiet", "--verify", "no-such-ref"])?,
            0
        );
        Ok(())
    }

    #[test]
    fn purge_deletes_only_fully_merged_branches() -> Result<()> {
        let (_temp, path) = fixture_repo()?;

        let purger = Purger::new(GitRepo::new(path.clone()));
        let deletions = purger.run()?;

        assert_eq!(deletions.len(), 2);
        assert_eq!(deletions[0].branch, "merged");
        assert_eq!(deletions[0].outcome, DeletionOutcome::Deleted);
        assert_eq!(deletions[1].branch, "unmerged");
        assert_eq!(deletions[1].outcome, DeletionOutcome::NotFullyMerged);

        let listing = GitRepo::new(path).run_captured(&["branch"])?;
        let remaining = parse_branch_list(&listing.stdout);
        assert_eq!(remaining.branches, vec!["main", "unmerged"]);
        Ok(())
    }
}
