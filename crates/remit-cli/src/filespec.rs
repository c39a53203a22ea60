//! File-argument parsing and staging.
//!
//! Commit arguments name files as `local` or `local:remote`, where `local`
//! is the path read from disk and `remote` is the path the file gets in the
//! uploaded tree. Without a `:` the same path is used on both sides.

use std::fs;
use std::io;
use std::path::PathBuf;

use remit_github::TreeEntry;

/// A file to commit: where to read it and where it lands in the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSpec {
    /// Local path to read.
    pub local: PathBuf,

    /// Target path in the remote tree.
    pub target: String,
}

impl FileSpec {
    /// Parse a `local[:remote]` argument.
    ///
    /// Splitting always yields at least one segment, so parsing cannot
    /// fail; a lone segment is used for both sides, and segments past the
    /// second are ignored.
    #[must_use]
    pub fn parse(arg: &str) -> Self {
        let mut parts = arg.split(':');
        let local = parts.next().unwrap_or(arg);
        let target = parts.next().unwrap_or(local);

        Self {
            local: PathBuf::from(local),
            target: target.to_string(),
        }
    }

    /// Read the local file and stage it as a tree entry at the target path.
    ///
    /// Content is decoded lossily: tree entries travel as JSON strings, so
    /// invalid UTF-8 sequences become U+FFFD.
    ///
    /// # Errors
    /// Returns error if the local file cannot be read.
    pub fn stage(&self) -> io::Result<TreeEntry> {
        let bytes = fs::read(&self.local)?;

        Ok(TreeEntry {
            path: self.target.clone(),
            content: String::from_utf8_lossy(&bytes).into_owned(),
        })
    }
}
