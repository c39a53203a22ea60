//! Mock implementations for testing services.
//!
//! `MockGitHub` implements the `GitHubApi` trait over in-memory maps and
//! supports injecting a failure into any single operation. State lives
//! behind `Mutex` (rather than `RefCell`) because the trait's futures must
//! be `Send`.

#![allow(clippy::unwrap_used)]

use std::collections::HashMap;
use std::sync::Mutex;

use remit_github::{Commit, Error, GitHubApi, Reference, Result, Tree, TreeEntry};

/// Mock implementation of `GitHubApi` for testing.
pub struct MockGitHub {
    /// Full ref name → commit SHA.
    pub refs: Mutex<HashMap<String, String>>,
    /// Commit SHA → commit object.
    pub commits: Mutex<HashMap<String, Commit>>,
    /// Blob SHA → raw content.
    pub blobs: Mutex<HashMap<String, Vec<u8>>>,
    /// `(path, content)` pairs captured by the last `create_tree` call.
    pub staged: Mutex<Vec<(String, String)>>,
    /// Operation name that should fail with a server error.
    fail_on: Mutex<Option<&'static str>>,
    /// Counter for generated SHAs.
    counter: Mutex<u32>,
}

impl Default for MockGitHub {
    fn default() -> Self {
        Self::new()
    }
}

impl MockGitHub {
    pub fn new() -> Self {
        Self {
            refs: Mutex::new(HashMap::new()),
            commits: Mutex::new(HashMap::new()),
            blobs: Mutex::new(HashMap::new()),
            staged: Mutex::new(Vec::new()),
            fail_on: Mutex::new(None),
            counter: Mutex::new(0),
        }
    }

    pub fn with_ref(self, branch: &str, sha: &str) -> Self {
        self.refs
            .lock()
            .unwrap()
            .insert(format!("refs/heads/{branch}"), sha.to_string());
        self
    }

    pub fn with_commit(self, sha: &str, tree_sha: &str) -> Self {
        self.commits.lock().unwrap().insert(
            sha.to_string(),
            Commit {
                sha: sha.to_string(),
                tree_sha: tree_sha.to_string(),
                parents: vec![],
                message: "seed".to_string(),
            },
        );
        self
    }

    #[allow(dead_code)]
    pub fn with_blob(self, sha: &str, content: &[u8]) -> Self {
        self.blobs
            .lock()
            .unwrap()
            .insert(sha.to_string(), content.to_vec());
        self
    }

    pub fn with_failure(self, op: &'static str) -> Self {
        *self.fail_on.lock().unwrap() = Some(op);
        self
    }

    fn check_fail(&self, op: &'static str) -> Result<()> {
        if *self.fail_on.lock().unwrap() == Some(op) {
            return Err(Error::ApiError {
                status: 500,
                message: format!("injected failure in {op}"),
            });
        }
        Ok(())
    }

    fn next_sha(&self, kind: &str) -> String {
        let mut counter = self.counter.lock().unwrap();
        *counter += 1;
        format!("{kind}{counter:06}")
    }

    fn not_found() -> Error {
        Error::ApiError {
            status: 404,
            message: "Not Found".to_string(),
        }
    }
}

impl GitHubApi for MockGitHub {
    async fn get_ref(&self, _owner: &str, _repo: &str, branch: &str) -> Result<Reference> {
        self.check_fail("get_ref")?;
        let name = format!("refs/heads/{branch}");
        self.refs
            .lock()
            .unwrap()
            .get(&name)
            .map(|sha| Reference {
                name: name.clone(),
                sha: sha.clone(),
            })
            .ok_or_else(Self::not_found)
    }

    async fn create_ref(
        &self,
        _owner: &str,
        _repo: &str,
        branch: &str,
        sha: &str,
    ) -> Result<Reference> {
        self.check_fail("create_ref")?;
        let name = format!("refs/heads/{branch}");
        let mut refs = self.refs.lock().unwrap();
        if refs.contains_key(&name) {
            return Err(Error::RefAlreadyExists(branch.to_string()));
        }
        refs.insert(name.clone(), sha.to_string());
        Ok(Reference {
            name,
            sha: sha.to_string(),
        })
    }

    async fn update_ref(
        &self,
        _owner: &str,
        _repo: &str,
        branch: &str,
        sha: &str,
        _force: bool,
    ) -> Result<Reference> {
        self.check_fail("update_ref")?;
        let name = format!("refs/heads/{branch}");
        let mut refs = self.refs.lock().unwrap();
        if !refs.contains_key(&name) {
            return Err(Error::ApiError {
                status: 422,
                message: "Reference does not exist".to_string(),
            });
        }
        refs.insert(name.clone(), sha.to_string());
        Ok(Reference {
            name,
            sha: sha.to_string(),
        })
    }

    async fn create_tree(
        &self,
        _owner: &str,
        _repo: &str,
        _base_tree: &str,
        entries: &[TreeEntry],
    ) -> Result<Tree> {
        self.check_fail("create_tree")?;
        *self.staged.lock().unwrap() = entries
            .iter()
            .map(|e| (e.path.clone(), e.content.clone()))
            .collect();
        Ok(Tree {
            sha: self.next_sha("tree"),
        })
    }

    async fn get_commit(&self, _owner: &str, _repo: &str, sha: &str) -> Result<Commit> {
        self.check_fail("get_commit")?;
        self.commits
            .lock()
            .unwrap()
            .get(sha)
            .cloned()
            .ok_or_else(Self::not_found)
    }

    async fn create_commit(
        &self,
        _owner: &str,
        _repo: &str,
        message: &str,
        tree: &str,
        parents: &[String],
    ) -> Result<Commit> {
        self.check_fail("create_commit")?;
        let commit = Commit {
            sha: self.next_sha("commit"),
            tree_sha: tree.to_string(),
            parents: parents.to_vec(),
            message: message.to_string(),
        };
        self.commits
            .lock()
            .unwrap()
            .insert(commit.sha.clone(), commit.clone());
        Ok(commit)
    }

    async fn get_blob_raw(&self, _owner: &str, _repo: &str, sha: &str) -> Result<Vec<u8>> {
        self.check_fail("get_blob_raw")?;
        self.blobs
            .lock()
            .unwrap()
            .get(sha)
            .cloned()
            .ok_or_else(Self::not_found)
    }
}
