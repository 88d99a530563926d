use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod git;
mod purger;
mod updater;

#[derive(Parser)]
#[command(name = "git-ass")]
#[command(about = "Assistant commands for keeping git branches tidy", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Prune remote-tracking branches that were deleted on the remote.
    Prune {
        /// Path to the git repository (defaults to current directory)
        #[arg(short, long)]
        path: Option<PathBuf>,
    },
    /// Delete local branches that are fully merged.
    Purge {
        /// Path to the git repository (defaults to current directory)
        #[arg(short, long)]
        path: Option<PathBuf>,
    },
    /// Fetch and fast-forward every repository below a directory.
    Update {
        /// Directory containing git repositories (defaults to current directory)
        path: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Prune { path } => {
            let exit_code = commands::prune::run(path)?;
            std::process::exit(exit_code);
        }
        Command::Purge { path } => commands::purge::run(path)?,
        Command::Update { path } => commands::update::run(path)?,
    }

    Ok(())
}
