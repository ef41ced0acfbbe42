use crate::audit::domain::{ManifestFetch, OwnerKind, RepositoryRecord, ScanTarget};
use crate::ports::outbound::RepositoryHost;
use crate::shared::error::AuditError;
use crate::shared::Result;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use reqwest::blocking::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

/// Default base URL for the GitHub REST API
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Environment variables searched for a token, in order
pub const TOKEN_ENV_VARS: [&str; 2] = ["GITHUB_TOKEN", "GH_TOKEN"];

#[derive(Debug, Deserialize)]
struct GitHubUser {
    login: String,
}

#[derive(Debug, Deserialize)]
struct GitHubRepository {
    name: String,
    html_url: String,
    #[serde(default)]
    private: bool,
    #[serde(default)]
    default_branch: Option<String>,
}

impl From<GitHubRepository> for RepositoryRecord {
    fn from(repo: GitHubRepository) -> Self {
        RepositoryRecord::new(repo.name, repo.html_url, repo.private, repo.default_branch)
    }
}

/// Response of the contents endpoint for a single file
#[derive(Debug, Deserialize)]
struct GitHubContent {
    #[serde(default)]
    content: Option<String>,
    #[serde(default)]
    encoding: Option<String>,
}

/// GitHubClient adapter for the GitHub REST API
///
/// Implements the RepositoryHost port with a blocking reqwest client.
/// Requests are authenticated with a bearer token and issued one at a time.
///
/// # Security
/// - Implements timeout (30 seconds)
/// - Path components are URL-encoded before being placed in a request
/// - Does not retry failed requests
pub struct GitHubClient {
    client: Client,
    api_url: String,
    token: String,
}

impl GitHubClient {
    const TIMEOUT_SECONDS: u64 = 30;
    const PER_PAGE: usize = 100;
    const API_VERSION: &'static str = "2022-11-28";

    /// Creates a client for `api_url` authenticated with `token`
    pub fn new(api_url: &str, token: impl Into<String>) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("dep-audit/{}", version);
        let client = Client::builder()
            .timeout(Duration::from_secs(Self::TIMEOUT_SECONDS))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
            token: token.into(),
        })
    }

    /// Creates a client using the token found in the environment
    ///
    /// # Errors
    /// Returns `AuditError::MissingToken` when neither `GITHUB_TOKEN` nor
    /// `GH_TOKEN` is set to a non-empty value
    pub fn from_env(api_url: Option<&str>) -> Result<Self> {
        let token = Self::find_token(|key| std::env::var(key).ok()).ok_or(AuditError::MissingToken)?;
        Self::new(api_url.unwrap_or(DEFAULT_API_URL), token)
    }

    /// Looks up the first non-empty token among `TOKEN_ENV_VARS`
    pub fn find_token<F>(lookup: F) -> Option<String>
    where
        F: Fn(&str) -> Option<String>,
    {
        TOKEN_ENV_VARS
            .iter()
            .filter_map(|key| lookup(key))
            .map(|token| token.trim().to_string())
            .find(|token| !token.is_empty())
    }

    fn get(&self, path_and_query: &str) -> RequestBuilder {
        self.client
            .get(format!("{}{}", self.api_url, path_and_query))
            .bearer_auth(&self.token)
            .header("Accept", "application/vnd.github+json")
            .header("X-GitHub-Api-Version", Self::API_VERSION)
    }

    fn get_json<T: DeserializeOwned>(&self, path_and_query: &str) -> Result<T> {
        let response = self.get(path_and_query).send()?;

        if !response.status().is_success() {
            anyhow::bail!(
                "GitHub API returned status code {} for {}",
                response.status(),
                path_and_query
            );
        }

        Ok(response.json()?)
    }

    /// First-page-less listing path for the target, always carrying a query
    fn repositories_path(target: &ScanTarget, viewer: &str) -> String {
        let owner = urlencoding::encode(target.owner());
        match target.kind() {
            OwnerKind::Organization => format!("/orgs/{}/repos?type=all", owner),
            OwnerKind::User => {
                if viewer.eq_ignore_ascii_case(target.owner()) {
                    // Only this endpoint includes the caller's private repositories
                    "/user/repos?affiliation=owner&visibility=all".to_string()
                } else {
                    format!("/users/{}/repos?type=owner", owner)
                }
            }
        }
    }

    /// Decodes a contents-endpoint payload
    fn decode_content(body: GitHubContent) -> ManifestFetch {
        if body.encoding.as_deref() != Some("base64") {
            debug!(encoding = ?body.encoding, "unsupported content encoding");
            return ManifestFetch::ParseError;
        }

        let Some(content) = body.content else {
            return ManifestFetch::ParseError;
        };

        // GitHub wraps base64 payloads at 60 columns
        let cleaned: String = content
            .chars()
            .filter(|c| !c.is_ascii_whitespace())
            .collect();

        match STANDARD.decode(cleaned) {
            Ok(bytes) => match String::from_utf8(bytes) {
                Ok(text) => ManifestFetch::Content(text),
                Err(_) => ManifestFetch::ParseError,
            },
            Err(e) => {
                debug!("failed to decode base64 content: {}", e);
                ManifestFetch::ParseError
            }
        }
    }
}

impl RepositoryHost for GitHubClient {
    fn authenticated_user(&self) -> Result<String> {
        let user: GitHubUser = self.get_json("/user")?;
        Ok(user.login)
    }

    fn is_organization(&self, name: &str) -> bool {
        let path = format!("/orgs/{}", urlencoding::encode(name));
        match self.get(&path).send() {
            Ok(response) => {
                debug!(name, status = %response.status(), "organization probe");
                response.status().is_success()
            }
            Err(e) => {
                debug!(name, "organization probe failed: {}", e);
                false
            }
        }
    }

    fn list_repositories(
        &self,
        target: &ScanTarget,
        viewer: &str,
        limit: usize,
    ) -> Result<Vec<RepositoryRecord>> {
        let base = Self::repositories_path(target, viewer);
        let mut repositories: Vec<RepositoryRecord> = Vec::new();
        let mut page = 1;

        while repositories.len() < limit {
            let path = format!("{}&per_page={}&page={}", base, Self::PER_PAGE, page);
            let batch: Vec<GitHubRepository> = self.get_json(&path)?;
            let batch_len = batch.len();
            debug!(page, batch_len, "fetched repository page");

            repositories.extend(batch.into_iter().map(RepositoryRecord::from));

            if batch_len < Self::PER_PAGE {
                break;
            }
            page += 1;
        }

        repositories.truncate(limit);
        Ok(repositories)
    }

    fn fetch_file(
        &self,
        owner: &str,
        repository: &str,
        branch: &str,
        path: &str,
    ) -> ManifestFetch {
        let url = format!(
            "/repos/{}/{}/contents/{}?ref={}",
            urlencoding::encode(owner),
            urlencoding::encode(repository),
            urlencoding::encode(path),
            urlencoding::encode(branch)
        );

        let response = match self.get(&url).send() {
            Ok(response) => response,
            Err(e) => {
                warn!("Request for {} failed: {}", url, e);
                return ManifestFetch::Missing;
            }
        };

        if !response.status().is_success() {
            debug!(status = %response.status(), "no manifest at {}", url);
            return ManifestFetch::Missing;
        }

        match response.json::<GitHubContent>() {
            Ok(body) => Self::decode_content(body),
            Err(e) => {
                warn!("Unexpected contents response for {}: {}", url, e);
                ManifestFetch::Missing
            }
        }
    }
}
