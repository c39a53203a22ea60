//! Session service - branch and commit operations against one repository.
//!
//! A [`Session`] tracks the head reference of a single branch and runs the
//! remote sequences against it: branch creation (new ref at the current
//! head) and commit creation (tree, parent lookup, commit, ref update).
//! The stored head always reflects the last successful ref-changing
//! response; a failed step returns early and leaves it untouched.

use anyhow::{Context, Result, bail};
use remit_github::{Commit, GitHubApi, Reference};

use crate::filespec::FileSpec;

/// An authenticated view onto one branch of one repository.
///
/// Not shared across threads; mutating operations take `&mut self` and
/// replace the head from API responses only.
pub struct Session<'a, H: GitHubApi> {
    github: &'a H,
    owner: String,
    repo: String,
    head: Reference,
}

impl<'a, H: GitHubApi> Session<'a, H> {
    /// Open a session on a branch, fetching its current head reference.
    ///
    /// # Errors
    /// Returns error if the ref lookup fails; there is no recovery path.
    pub async fn open(github: &'a H, owner: String, repo: String, branch: &str) -> Result<Self> {
        let head = github
            .get_ref(&owner, &repo, branch)
            .await
            .with_context(|| format!("Failed to look up refs/heads/{branch} on {owner}/{repo}"))?;

        Ok(Self {
            github,
            owner,
            repo,
            head,
        })
    }

    /// The head reference from the last successful ref-changing call.
    #[must_use]
    pub const fn head(&self) -> &Reference {
        &self.head
    }

    /// Create a branch pointing at the session's current head commit and
    /// switch the session onto it.
    ///
    /// # Errors
    /// Returns error if the name is empty or already taken, or the API
    /// call fails. The session head is unchanged on failure.
    pub async fn create_branch(&mut self, name: &str) -> Result<()> {
        if name.is_empty() {
            bail!("branch name must not be empty");
        }

        self.head = self
            .github
            .create_ref(&self.owner, &self.repo, name, &self.head.sha)
            .await?;

        Ok(())
    }

    /// Commit staged files to the session's branch.
    ///
    /// Builds a tree rooted at the current head, fetches the head commit as
    /// the single parent, creates the commit, then advances the branch ref.
    /// Each step short-circuits on failure with the head untouched; objects
    /// already created on the remote are not rolled back.
    ///
    /// # Errors
    /// Returns error if the file list is empty, a local file cannot be
    /// read, or any API call fails.
    pub async fn commit(&mut self, specs: &[FileSpec], message: &str) -> Result<Commit> {
        if specs.is_empty() {
            bail!("no files to commit");
        }

        let mut entries = Vec::with_capacity(specs.len());
        for spec in specs {
            let entry = spec
                .stage()
                .with_context(|| format!("Failed to read {}", spec.local.display()))?;
            entries.push(entry);
        }

        let tree = self
            .github
            .create_tree(&self.owner, &self.repo, &self.head.sha, &entries)
            .await?;

        let parent = self
            .github
            .get_commit(&self.owner, &self.repo, &self.head.sha)
            .await?;

        let commit = self
            .github
            .create_commit(&self.owner, &self.repo, message, &tree.sha, &[parent.sha])
            .await?;

        let branch = self.head.branch().to_string();
        self.head = self
            .github
            .update_ref(&self.owner, &self.repo, &branch, &commit.sha, false)
            .await?;

        Ok(commit)
    }
}
