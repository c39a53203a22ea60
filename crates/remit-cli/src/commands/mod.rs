//! CLI command definitions and dispatch.

use clap::{Parser, Subcommand};
use clap_complete::Shell;

pub mod branch;
pub mod cat;
pub mod commit;
pub mod completions;
pub mod utils;

/// Push commits to GitHub repositories without a local clone.
#[derive(Parser)]
#[command(name = "remit", version, about)]
pub struct Cli {
    /// Target repository as `owner/name` (overrides `.remit.toml`).
    #[arg(long, global = true, value_name = "OWNER/NAME")]
    pub repo: Option<String>,

    /// Suppress informational output.
    #[arg(long, short, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Create a branch pointing at the current head of the base branch.
    Branch {
        /// Name of the branch to create.
        name: String,

        /// Branch to fork from (defaults to the configured base branch).
        #[arg(long)]
        base: Option<String>,
    },

    /// Read local files and commit them to a branch on the remote.
    Commit {
        /// File to commit, as `local` or `local:remote`. Repeatable.
        #[arg(short, long = "file", value_name = "LOCAL[:REMOTE]", required = true)]
        files: Vec<String>,

        /// Commit message.
        #[arg(short, long)]
        message: String,

        /// Branch to commit to (defaults to the configured base branch).
        #[arg(short, long)]
        branch: Option<String>,
    },

    /// Print the raw content of a blob to stdout.
    Cat {
        /// Blob SHA.
        sha: String,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}
