//! `remit commit` command - commit local files to a branch on the remote.

use anyhow::Result;

use crate::commands::utils;
use crate::filespec::FileSpec;
use crate::output;
use crate::services::Session;

/// Run the commit command.
pub fn run(
    repo_flag: Option<&str>,
    files: &[String],
    message: &str,
    branch: Option<&str>,
) -> Result<()> {
    let (config, owner, repo, client) = utils::setup(repo_flag)?;
    let branch = branch.unwrap_or(&config.general.base_branch);
    let specs: Vec<FileSpec> = files.iter().map(|arg| FileSpec::parse(arg)).collect();

    output::info(&format!(
        "Committing {} file(s) to {owner}/{repo} on '{branch}'...",
        specs.len()
    ));

    let rt = tokio::runtime::Runtime::new()?;
    let mut session = rt.block_on(Session::open(&client, owner, repo, branch))?;

    let commit = rt.block_on(session.commit(&specs, message))?;
    output::success(&format!(
        "Created commit {} on '{branch}'",
        output::short_sha(&commit.sha)
    ));

    Ok(())
}
