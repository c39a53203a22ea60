//! `remit cat` command - print raw blob content.

use std::io::{self, Write};

use anyhow::Result;

use crate::commands::utils;

/// Run the cat command.
///
/// Blob content is written to stdout byte-for-byte so output can be
/// redirected into a file.
pub fn run(repo_flag: Option<&str>, sha: &str) -> Result<()> {
    let (_config, owner, repo, client) = utils::setup(repo_flag)?;

    let rt = tokio::runtime::Runtime::new()?;
    let content = rt.block_on(client.get_blob_raw(&owner, &repo, sha))?;

    io::stdout().write_all(&content)?;
    Ok(())
}
