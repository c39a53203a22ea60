//! GitHub git-data API types.

use serde::{Deserialize, Serialize};

/// A git reference: a named pointer to a commit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    /// Fully qualified ref name (e.g., `refs/heads/main`).
    pub name: String,

    /// SHA of the commit the ref points to.
    pub sha: String,
}

impl Reference {
    /// The branch name with the `refs/heads/` prefix stripped.
    ///
    /// Returns the full name unchanged for refs outside `refs/heads/`.
    #[must_use]
    pub fn branch(&self) -> &str {
        self.name.strip_prefix("refs/heads/").unwrap_or(&self.name)
    }
}

/// A git commit object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Commit {
    /// Commit SHA.
    pub sha: String,

    /// SHA of the tree the commit snapshots.
    pub tree_sha: String,

    /// Parent commit SHAs.
    pub parents: Vec<String>,

    /// Commit message.
    pub message: String,
}

/// A created tree, addressed by SHA.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tree {
    /// Tree SHA.
    pub sha: String,
}

/// A file staged for tree creation.
///
/// Entries are always written as regular, non-executable blobs
/// (mode `100644`); the client fixes mode and type on the wire.
#[derive(Debug, Clone)]
pub struct TreeEntry {
    /// Path of the file within the tree.
    pub path: String,

    /// File content (UTF-8 text).
    pub content: String,
}
