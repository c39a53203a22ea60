//! `remit branch` command - create a branch on the remote.

use anyhow::Result;

use crate::commands::utils;
use crate::output;
use crate::services::Session;

/// Run the branch command.
pub fn run(repo_flag: Option<&str>, name: &str, base: Option<&str>) -> Result<()> {
    let (config, owner, repo, client) = utils::setup(repo_flag)?;
    let base = base.unwrap_or(&config.general.base_branch);

    let rt = tokio::runtime::Runtime::new()?;
    let mut session = rt.block_on(Session::open(&client, owner, repo, base))?;

    rt.block_on(session.create_branch(name))?;
    output::success(&format!(
        "Created branch '{name}' at {} (from '{base}')",
        output::short_sha(&session.head().sha)
    ));

    Ok(())
}
