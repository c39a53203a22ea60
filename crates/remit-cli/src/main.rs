//! Remit CLI - push commits to GitHub without a local clone.

use clap::Parser;

mod commands;
mod config;
mod filespec;
mod output;
mod services;

use commands::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    output::set_quiet(cli.quiet);

    let repo = cli.repo.as_deref();
    let result = match cli.command {
        Commands::Branch { name, base } => commands::branch::run(repo, &name, base.as_deref()),
        Commands::Commit {
            files,
            message,
            branch,
        } => commands::commit::run(repo, &files, &message, branch.as_deref()),
        Commands::Cat { sha } => commands::cat::run(repo, &sha),
        Commands::Completions { shell } => commands::completions::run(shell),
    };

    if let Err(e) = result {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}
