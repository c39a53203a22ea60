//! Trait abstractions for GitHub API operations.
//!
//! This module defines the `GitHubApi` trait which abstracts the git-data
//! API operations, enabling dependency injection and testability.

use crate::{Commit, Reference, Result, Tree, TreeEntry};

/// Trait for GitHub git-data API operations.
///
/// This trait abstracts GitHub API calls, allowing for:
/// - Dependency injection in commands/services
/// - Mock implementations for testing
///
/// All methods take `owner` and `repo` as parameters to support
/// operations across different repositories.
pub trait GitHubApi: Send + Sync {
    // === Reference Operations ===

    /// Get the reference for a branch.
    fn get_ref(
        &self,
        owner: &str,
        repo: &str,
        branch: &str,
    ) -> impl std::future::Future<Output = Result<Reference>> + Send;

    /// Create a branch reference pointing at a commit.
    fn create_ref(
        &self,
        owner: &str,
        repo: &str,
        branch: &str,
        sha: &str,
    ) -> impl std::future::Future<Output = Result<Reference>> + Send;

    /// Move a branch reference to a new commit.
    fn update_ref(
        &self,
        owner: &str,
        repo: &str,
        branch: &str,
        sha: &str,
        force: bool,
    ) -> impl std::future::Future<Output = Result<Reference>> + Send;

    // === Tree Operations ===

    /// Create a tree of blob entries on top of a base tree.
    fn create_tree(
        &self,
        owner: &str,
        repo: &str,
        base_tree: &str,
        entries: &[TreeEntry],
    ) -> impl std::future::Future<Output = Result<Tree>> + Send;

    // === Commit Operations ===

    /// Get a commit object by SHA.
    fn get_commit(
        &self,
        owner: &str,
        repo: &str,
        sha: &str,
    ) -> impl std::future::Future<Output = Result<Commit>> + Send;

    /// Create a commit object referencing a tree and its parents.
    fn create_commit(
        &self,
        owner: &str,
        repo: &str,
        message: &str,
        tree: &str,
        parents: &[String],
    ) -> impl std::future::Future<Output = Result<Commit>> + Send;

    // === Blob Operations ===

    /// Fetch the raw content of a blob by SHA.
    fn get_blob_raw(
        &self,
        owner: &str,
        repo: &str,
        sha: &str,
    ) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
}
