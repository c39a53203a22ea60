//! GitHub API client.

use reqwest::Client;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;

use crate::auth::Auth;
use crate::error::{Error, Result};
use crate::traits::GitHubApi;
use crate::types::{Commit, Reference, Tree, TreeEntry};

/// Accept header for raw blob content.
const RAW_CONTENT_TYPE: &str = "application/vnd.github.raw+json";

/// File mode for regular, non-executable blobs.
const BLOB_MODE: &str = "100644";

// === Internal API response types (shared across methods) ===

/// Internal representation of a git reference from the GitHub API.
#[derive(serde::Deserialize)]
struct ApiReference {
    #[serde(rename = "ref")]
    ref_name: String,
    object: ApiGitObject,
}

/// The object a reference points at.
#[derive(serde::Deserialize)]
struct ApiGitObject {
    sha: String,
}

impl ApiReference {
    /// Convert API response to domain type.
    fn into_reference(self) -> Reference {
        Reference {
            name: self.ref_name,
            sha: self.object.sha,
        }
    }
}

/// Internal representation of a git commit from the GitHub API.
#[derive(serde::Deserialize)]
struct ApiCommit {
    sha: String,
    message: String,
    tree: ApiObjectRef,
    #[serde(default)]
    parents: Vec<ApiObjectRef>,
}

/// A SHA-only object reference nested in commit responses.
#[derive(serde::Deserialize)]
struct ApiObjectRef {
    sha: String,
}

impl ApiCommit {
    /// Convert API response to domain type, flattening nested objects.
    fn into_commit(self) -> Commit {
        Commit {
            sha: self.sha,
            tree_sha: self.tree.sha,
            parents: self.parents.into_iter().map(|p| p.sha).collect(),
            message: self.message,
        }
    }
}

#[derive(serde::Deserialize)]
struct ApiTree {
    sha: String,
}

// === Request body types ===

#[derive(serde::Serialize)]
struct CreateRefRequest<'a> {
    #[serde(rename = "ref")]
    ref_name: String,
    sha: &'a str,
}

#[derive(serde::Serialize)]
struct UpdateRefRequest<'a> {
    sha: &'a str,
    force: bool,
}

#[derive(serde::Serialize)]
struct CreateTreeRequest<'a> {
    base_tree: &'a str,
    tree: Vec<ApiTreeEntry<'a>>,
}

/// Wire form of a tree entry: path and content from the caller,
/// mode and type fixed.
#[derive(serde::Serialize)]
struct ApiTreeEntry<'a> {
    path: &'a str,
    mode: &'static str,
    #[serde(rename = "type")]
    entry_type: &'static str,
    content: &'a str,
}

#[derive(serde::Serialize)]
struct CreateCommitRequest<'a> {
    message: &'a str,
    tree: &'a str,
    parents: &'a [String],
}

/// GitHub API client.
pub struct GitHubClient {
    client: Client,
    base_url: String,
    /// Token stored as `SecretString` for automatic zeroization on drop.
    token: SecretString,
}

impl GitHubClient {
    /// Default GitHub API URL.
    pub const DEFAULT_API_URL: &'static str = "https://api.github.com";

    /// Create a new GitHub client.
    ///
    /// # Errors
    /// Returns error if authentication fails.
    pub fn new(auth: &Auth) -> Result<Self> {
        Self::with_base_url(auth, Self::DEFAULT_API_URL)
    }

    /// Create a new GitHub client with a custom API URL (for GitHub Enterprise).
    ///
    /// # Errors
    /// Returns error if authentication fails.
    pub fn with_base_url(auth: &Auth, base_url: impl Into<String>) -> Result<Self> {
        let token = auth.resolve()?;

        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(USER_AGENT, HeaderValue::from_static("remit-cli"));
        headers.insert(
            "X-GitHub-Api-Version",
            HeaderValue::from_static("2022-11-28"),
        );

        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            token,
        })
    }

    /// Make a GET request.
    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .get(&url)
            .header(
                AUTHORIZATION,
                format!("Bearer {}", self.token.expose_secret()),
            )
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Make a GET request returning the raw response body.
    async fn get_raw(&self, path: &str, accept: &'static str) -> Result<Vec<u8>> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .get(&url)
            .header(ACCEPT, accept)
            .header(
                AUTHORIZATION,
                format!("Bearer {}", self.token.expose_secret()),
            )
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(response.bytes().await?.to_vec());
        }

        let status_code = status.as_u16();
        match status_code {
            401 => Err(Error::AuthenticationFailed),
            403 if response
                .headers()
                .get("x-ratelimit-remaining")
                .is_some_and(|v| v == "0") =>
            {
                Err(Error::RateLimited)
            }
            _ => {
                let text = response.text().await.unwrap_or_default();
                Err(Error::ApiError {
                    status: status_code,
                    message: text,
                })
            }
        }
    }

    /// Make a POST request.
    async fn post<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .post(&url)
            .header(
                AUTHORIZATION,
                format!("Bearer {}", self.token.expose_secret()),
            )
            .json(body)
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Make a PATCH request.
    async fn patch<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .patch(&url)
            .header(
                AUTHORIZATION,
                format!("Bearer {}", self.token.expose_secret()),
            )
            .json(body)
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Handle API response.
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if status.is_success() {
            let body = response.json().await?;
            return Ok(body);
        }

        // Handle error responses
        let status_code = status.as_u16();

        match status_code {
            401 => Err(Error::AuthenticationFailed),
            403 if response
                .headers()
                .get("x-ratelimit-remaining")
                .is_some_and(|v| v == "0") =>
            {
                Err(Error::RateLimited)
            }
            _ => {
                let text = response.text().await.unwrap_or_default();
                Err(Error::ApiError {
                    status: status_code,
                    message: text,
                })
            }
        }
    }

    // === Reference Operations ===

    /// Get the reference for a branch.
    ///
    /// # Errors
    /// Returns error if the ref does not exist or the API call fails.
    pub async fn get_ref(&self, owner: &str, repo: &str, branch: &str) -> Result<Reference> {
        let api_ref: ApiReference = self
            .get(&format!("/repos/{owner}/{repo}/git/ref/heads/{branch}"))
            .await?;

        Ok(api_ref.into_reference())
    }

    /// Create a branch reference pointing at a commit.
    ///
    /// # Errors
    /// Returns [`Error::RefAlreadyExists`] if the branch already exists,
    /// or another error if the API call fails.
    pub async fn create_ref(
        &self,
        owner: &str,
        repo: &str,
        branch: &str,
        sha: &str,
    ) -> Result<Reference> {
        let request = CreateRefRequest {
            ref_name: format!("refs/heads/{branch}"),
            sha,
        };

        let result: Result<ApiReference> = self
            .post(&format!("/repos/{owner}/{repo}/git/refs"), &request)
            .await;

        match result {
            Ok(api_ref) => Ok(api_ref.into_reference()),
            Err(Error::ApiError { status: 422, message }) if message.contains("already exists") => {
                Err(Error::RefAlreadyExists(branch.to_string()))
            }
            Err(e) => Err(e),
        }
    }

    /// Move a branch reference to a new commit.
    ///
    /// With `force` false the update must be a fast-forward, which is all
    /// remit ever needs: the new commit's parent is the ref's current target.
    ///
    /// # Errors
    /// Returns error if the update is rejected or the API call fails.
    pub async fn update_ref(
        &self,
        owner: &str,
        repo: &str,
        branch: &str,
        sha: &str,
        force: bool,
    ) -> Result<Reference> {
        let request = UpdateRefRequest { sha, force };

        let api_ref: ApiReference = self
            .patch(
                &format!("/repos/{owner}/{repo}/git/refs/heads/{branch}"),
                &request,
            )
            .await?;

        Ok(api_ref.into_reference())
    }

    // === Tree Operations ===

    /// Create a tree on top of a base tree.
    ///
    /// Every entry is written as a regular, non-executable blob with inline
    /// content.
    ///
    /// # Errors
    /// Returns error if tree creation fails.
    pub async fn create_tree(
        &self,
        owner: &str,
        repo: &str,
        base_tree: &str,
        entries: &[TreeEntry],
    ) -> Result<Tree> {
        let request = CreateTreeRequest {
            base_tree,
            tree: entries
                .iter()
                .map(|entry| ApiTreeEntry {
                    path: &entry.path,
                    mode: BLOB_MODE,
                    entry_type: "blob",
                    content: &entry.content,
                })
                .collect(),
        };

        let api_tree: ApiTree = self
            .post(&format!("/repos/{owner}/{repo}/git/trees"), &request)
            .await?;

        Ok(Tree { sha: api_tree.sha })
    }

    // === Commit Operations ===

    /// Get a commit object by SHA.
    ///
    /// # Errors
    /// Returns error if the commit does not exist or the API call fails.
    pub async fn get_commit(&self, owner: &str, repo: &str, sha: &str) -> Result<Commit> {
        let api_commit: ApiCommit = self
            .get(&format!("/repos/{owner}/{repo}/git/commits/{sha}"))
            .await?;

        Ok(api_commit.into_commit())
    }

    /// Create a commit object referencing a tree and its parents.
    ///
    /// # Errors
    /// Returns error if commit creation fails.
    pub async fn create_commit(
        &self,
        owner: &str,
        repo: &str,
        message: &str,
        tree: &str,
        parents: &[String],
    ) -> Result<Commit> {
        let request = CreateCommitRequest {
            message,
            tree,
            parents,
        };

        let api_commit: ApiCommit = self
            .post(&format!("/repos/{owner}/{repo}/git/commits"), &request)
            .await?;

        Ok(api_commit.into_commit())
    }

    // === Blob Operations ===

    /// Fetch the raw content of a blob by SHA.
    ///
    /// # Errors
    /// Returns error if the blob does not exist or the API call fails.
    pub async fn get_blob_raw(&self, owner: &str, repo: &str, sha: &str) -> Result<Vec<u8>> {
        self.get_raw(
            &format!("/repos/{owner}/{repo}/git/blobs/{sha}"),
            RAW_CONTENT_TYPE,
        )
        .await
    }
}

impl std::fmt::Debug for GitHubClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitHubClient")
            .field("base_url", &self.base_url)
            .field("token", &"[redacted]")
            .finish_non_exhaustive()
    }
}

// === Trait Implementation ===

impl GitHubApi for GitHubClient {
    async fn get_ref(&self, owner: &str, repo: &str, branch: &str) -> Result<Reference> {
        self.get_ref(owner, repo, branch).await
    }

    async fn create_ref(
        &self,
        owner: &str,
        repo: &str,
        branch: &str,
        sha: &str,
    ) -> Result<Reference> {
        self.create_ref(owner, repo, branch, sha).await
    }

    async fn update_ref(
        &self,
        owner: &str,
        repo: &str,
        branch: &str,
        sha: &str,
        force: bool,
    ) -> Result<Reference> {
        self.update_ref(owner, repo, branch, sha, force).await
    }

    async fn create_tree(
        &self,
        owner: &str,
        repo: &str,
        base_tree: &str,
        entries: &[TreeEntry],
    ) -> Result<Tree> {
        self.create_tree(owner, repo, base_tree, entries).await
    }

    async fn get_commit(&self, owner: &str, repo: &str, sha: &str) -> Result<Commit> {
        self.get_commit(owner, repo, sha).await
    }

    async fn create_commit(
        &self,
        owner: &str,
        repo: &str,
        message: &str,
        tree: &str,
        parents: &[String],
    ) -> Result<Commit> {
        self.create_commit(owner, repo, message, tree, parents)
            .await
    }

    async fn get_blob_raw(&self, owner: &str, repo: &str, sha: &str) -> Result<Vec<u8>> {
        self.get_blob_raw(owner, repo, sha).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use secrecy::SecretString;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    /// Create a test client pointing to the mock server.
    fn test_client(base_url: &str) -> GitHubClient {
        let auth = Auth::Token(SecretString::from("test-token"));
        GitHubClient::with_base_url(&auth, base_url).unwrap()
    }

    /// Standard reference response JSON for testing.
    fn ref_response_json(branch: &str, sha: &str) -> serde_json::Value {
        serde_json::json!({
            "ref": format!("refs/heads/{branch}"),
            "node_id": "MDM6UmVmcmVmcy9oZWFkcy9tYXN0ZXI=",
            "url": format!("https://api.github.com/repos/owner/repo/git/refs/heads/{branch}"),
            "object": {
                "type": "commit",
                "sha": sha,
                "url": format!("https://api.github.com/repos/owner/repo/git/commits/{sha}")
            }
        })
    }

    /// Standard commit response JSON for testing.
    fn commit_response_json(sha: &str, tree_sha: &str, parent: Option<&str>) -> serde_json::Value {
        let parents: Vec<serde_json::Value> = parent
            .map(|p| serde_json::json!({ "sha": p }))
            .into_iter()
            .collect();

        serde_json::json!({
            "sha": sha,
            "message": "test commit",
            "tree": { "sha": tree_sha },
            "parents": parents
        })
    }

    // === Get Ref Tests ===

    #[tokio::test]
    async fn test_get_ref_success() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/repos/owner/repo/git/ref/heads/master"))
            .and(header("authorization", "Bearer test-token"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(ref_response_json("master", "abc123")),
            )
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri());
        let reference = client.get_ref("owner", "repo", "master").await.unwrap();

        assert_eq!(reference.name, "refs/heads/master");
        assert_eq!(reference.sha, "abc123");
        assert_eq!(reference.branch(), "master");
    }

    #[tokio::test]
    async fn test_get_ref_not_found() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/repos/owner/repo/git/ref/heads/missing"))
            .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
                "message": "Not Found"
            })))
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri());
        let result = client.get_ref("owner", "repo", "missing").await;

        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(matches!(err, Error::ApiError { status: 404, .. }));
    }

    // === Authentication Error Tests ===

    #[tokio::test]
    async fn test_unauthorized_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/repos/owner/repo/git/ref/heads/master"))
            .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
                "message": "Bad credentials"
            })))
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri());
        let result = client.get_ref("owner", "repo", "master").await;

        assert!(matches!(result, Err(Error::AuthenticationFailed)));
    }

    #[tokio::test]
    async fn test_rate_limited_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/repos/owner/repo/git/ref/heads/master"))
            .respond_with(
                ResponseTemplate::new(403)
                    .insert_header("x-ratelimit-remaining", "0")
                    .set_body_json(serde_json::json!({
                        "message": "API rate limit exceeded"
                    })),
            )
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri());
        let result = client.get_ref("owner", "repo", "master").await;

        assert!(matches!(result, Err(Error::RateLimited)));
    }

    // === Create Ref Tests ===

    #[tokio::test]
    async fn test_create_ref_success() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/repos/owner/repo/git/refs"))
            .and(header("authorization", "Bearer test-token"))
            .and(body_partial_json(serde_json::json!({
                "ref": "refs/heads/feature",
                "sha": "abc123"
            })))
            .respond_with(
                ResponseTemplate::new(201).set_body_json(ref_response_json("feature", "abc123")),
            )
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri());
        let reference = client
            .create_ref("owner", "repo", "feature", "abc123")
            .await
            .unwrap();

        assert_eq!(reference.name, "refs/heads/feature");
        assert_eq!(reference.sha, "abc123");
    }

    #[tokio::test]
    async fn test_create_ref_already_exists() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/repos/owner/repo/git/refs"))
            .respond_with(ResponseTemplate::new(422).set_body_json(serde_json::json!({
                "message": "Reference already exists",
                "documentation_url": "https://docs.github.com/rest/git/refs#create-a-reference"
            })))
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri());
        let result = client.create_ref("owner", "repo", "feature", "abc123").await;

        match result {
            Err(Error::RefAlreadyExists(branch)) => assert_eq!(branch, "feature"),
            other => panic!("expected RefAlreadyExists, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_create_ref_bad_sha_stays_api_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/repos/owner/repo/git/refs"))
            .respond_with(ResponseTemplate::new(422).set_body_json(serde_json::json!({
                "message": "Object does not exist"
            })))
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri());
        let result = client.create_ref("owner", "repo", "feature", "bogus").await;

        assert!(matches!(result, Err(Error::ApiError { status: 422, .. })));
    }

    // === Update Ref Tests ===

    #[tokio::test]
    async fn test_update_ref_success() {
        let mock_server = MockServer::start().await;

        Mock::given(method("PATCH"))
            .and(path("/repos/owner/repo/git/refs/heads/feature"))
            .and(body_partial_json(serde_json::json!({
                "sha": "def456",
                "force": false
            })))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(ref_response_json("feature", "def456")),
            )
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri());
        let reference = client
            .update_ref("owner", "repo", "feature", "def456", false)
            .await
            .unwrap();

        assert_eq!(reference.sha, "def456");
    }

    #[tokio::test]
    async fn test_update_ref_non_fast_forward() {
        let mock_server = MockServer::start().await;

        Mock::given(method("PATCH"))
            .and(path("/repos/owner/repo/git/refs/heads/feature"))
            .respond_with(ResponseTemplate::new(422).set_body_json(serde_json::json!({
                "message": "Update is not a fast forward"
            })))
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri());
        let result = client
            .update_ref("owner", "repo", "feature", "def456", false)
            .await;

        assert!(matches!(result, Err(Error::ApiError { status: 422, .. })));
    }

    // === Create Tree Tests ===

    #[tokio::test]
    async fn test_create_tree_success() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/repos/owner/repo/git/trees"))
            .and(body_partial_json(serde_json::json!({
                "base_tree": "abc123",
                "tree": [
                    {
                        "path": "src/main.rs",
                        "mode": "100644",
                        "type": "blob",
                        "content": "fn main() {}\n"
                    }
                ]
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
                "sha": "tree789",
                "tree": [
                    { "path": "src/main.rs", "mode": "100644", "type": "blob", "sha": "blob1" }
                ]
            })))
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri());
        let entries = vec![TreeEntry {
            path: "src/main.rs".into(),
            content: "fn main() {}\n".into(),
        }];

        let tree = client
            .create_tree("owner", "repo", "abc123", &entries)
            .await
            .unwrap();

        assert_eq!(tree.sha, "tree789");
    }

    // === Commit Tests ===

    #[tokio::test]
    async fn test_get_commit_success() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/repos/owner/repo/git/commits/abc123"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(commit_response_json("abc123", "tree111", Some("parent0"))),
            )
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri());
        let commit = client.get_commit("owner", "repo", "abc123").await.unwrap();

        assert_eq!(commit.sha, "abc123");
        assert_eq!(commit.tree_sha, "tree111");
        assert_eq!(commit.parents, vec!["parent0".to_string()]);
    }

    #[tokio::test]
    async fn test_get_commit_root_has_no_parents() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/repos/owner/repo/git/commits/root00"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(commit_response_json("root00", "tree000", None)),
            )
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri());
        let commit = client.get_commit("owner", "repo", "root00").await.unwrap();

        assert!(commit.parents.is_empty());
    }

    #[tokio::test]
    async fn test_create_commit_success() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/repos/owner/repo/git/commits"))
            .and(body_partial_json(serde_json::json!({
                "message": "new commit",
                "tree": "tree789",
                "parents": ["abc123"]
            })))
            .respond_with(
                ResponseTemplate::new(201)
                    .set_body_json(commit_response_json("def456", "tree789", Some("abc123"))),
            )
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri());
        let commit = client
            .create_commit(
                "owner",
                "repo",
                "new commit",
                "tree789",
                &["abc123".to_string()],
            )
            .await
            .unwrap();

        assert_eq!(commit.sha, "def456");
        assert_eq!(commit.parents, vec!["abc123".to_string()]);
    }

    // === Blob Tests ===

    #[tokio::test]
    async fn test_get_blob_raw_success() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/repos/owner/repo/git/blobs/blob1"))
            .and(header("accept", "application/vnd.github.raw+json"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(b"hello blob\n".to_vec()))
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri());
        let content = client.get_blob_raw("owner", "repo", "blob1").await.unwrap();

        assert_eq!(content, b"hello blob\n");
    }

    #[tokio::test]
    async fn test_get_blob_raw_not_found() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/repos/owner/repo/git/blobs/missing"))
            .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
                "message": "Not Found"
            })))
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri());
        let result = client.get_blob_raw("owner", "repo", "missing").await;

        assert!(matches!(result, Err(Error::ApiError { status: 404, .. })));
    }

    #[tokio::test]
    async fn test_get_blob_raw_rate_limited() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/repos/owner/repo/git/blobs/blob1"))
            .respond_with(
                ResponseTemplate::new(403)
                    .insert_header("x-ratelimit-remaining", "0")
                    .set_body_json(serde_json::json!({ "message": "Rate limited" })),
            )
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri());
        let result = client.get_blob_raw("owner", "repo", "blob1").await;

        assert!(matches!(result, Err(Error::RateLimited)));
    }

    // === Debug Implementation Test ===

    #[test]
    fn test_github_client_debug_redacts_token() {
        let auth = Auth::Token(SecretString::from("super-secret-token"));
        let client = GitHubClient::with_base_url(&auth, "https://api.example.com").unwrap();

        let debug_output = format!("{client:?}");

        assert!(debug_output.contains("[redacted]"));
        assert!(!debug_output.contains("super-secret-token"));
    }
}
