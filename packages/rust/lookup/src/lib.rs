//! Remote lookups against public APIs.
//!
//! Two calls, both plain GETs with no caching or retry:
//! - GitHub users API: does a username exist?
//! - Devicon `devicon.json`: the icon catalog used to render tools.

mod devicon;

use std::time::Duration;

use profilegen_shared::{ProfileGenError, RemoteConfig, Result, ToolCatalog};
use reqwest::{Client, StatusCode};
use tracing::{debug, info, instrument};
use url::Url;

pub use devicon::parse_devicon_json;

/// Default timeout in seconds for remote requests.
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Maximum catalog size we accept (10 MB).
const MAX_RESPONSE_SIZE: u64 = 10 * 1024 * 1024;

/// User-Agent string; GitHub rejects API requests without one.
const USER_AGENT: &str = concat!("profilegen/", env!("CARGO_PKG_VERSION"));

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// Endpoints and timeout for remote lookups.
#[derive(Debug, Clone)]
pub struct LookupOptions {
    /// GitHub REST API root (e.g. `https://api.github.com`).
    pub github_api_url: String,
    /// Full URL of the Devicon catalog JSON.
    pub devicon_url: String,
    /// Timeout for HTTP requests in seconds.
    pub timeout_secs: u64,
}

impl Default for LookupOptions {
    fn default() -> Self {
        Self::from(&RemoteConfig::default())
    }
}

impl From<&RemoteConfig> for LookupOptions {
    fn from(config: &RemoteConfig) -> Self {
        Self {
            github_api_url: config.github_api_url.clone(),
            devicon_url: config.devicon_url.clone(),
            timeout_secs: if config.timeout_secs == 0 {
                DEFAULT_TIMEOUT_SECS
            } else {
                config.timeout_secs
            },
        }
    }
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

/// HTTP client bound to a set of [`LookupOptions`].
#[derive(Debug, Clone)]
pub struct Lookup {
    client: Client,
    opts: LookupOptions,
}

impl Lookup {
    pub fn new(opts: LookupOptions) -> Result<Self> {
        let client = build_client(&opts)?;
        Ok(Self { client, opts })
    }

    /// Check whether `username` is an existing GitHub account.
    ///
    /// 200 → `true`, 404 → `false`; any other status is a network error
    /// (rate limiting shows up here as 403).
    #[instrument(skip(self))]
    pub async fn user_exists(&self, username: &str) -> Result<bool> {
        let url = user_url(&self.opts.github_api_url, username)?;
        debug!(%url, "checking GitHub user");

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| ProfileGenError::Network(format!("{url}: {e}")))?;

        match response.status() {
            StatusCode::OK => Ok(true),
            StatusCode::NOT_FOUND => Ok(false),
            status => Err(ProfileGenError::Network(format!("{url}: HTTP {status}"))),
        }
    }

    /// Download the Devicon catalog and map every icon name to its SVG path.
    #[instrument(skip(self), fields(url = %self.opts.devicon_url))]
    pub async fn fetch_catalog(&self) -> Result<ToolCatalog> {
        let url = &self.opts.devicon_url;
        info!("fetching icon catalog");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ProfileGenError::Network(format!("{url}: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProfileGenError::Network(format!("{url}: HTTP {status}")));
        }

        if let Some(len) = response.content_length() {
            if len > MAX_RESPONSE_SIZE {
                return Err(ProfileGenError::validation(format!(
                    "{url}: response too large ({len} bytes, max {MAX_RESPONSE_SIZE})"
                )));
            }
        }

        let body = response
            .text()
            .await
            .map_err(|e| ProfileGenError::Network(format!("{url}: failed to read body: {e}")))?;

        let catalog = parse_devicon_json(&body)?;
        info!(tools = catalog.len(), "icon catalog fetched");
        Ok(catalog)
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Build a reqwest client with appropriate settings.
fn build_client(opts: &LookupOptions) -> Result<Client> {
    Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(opts.timeout_secs))
        .build()
        .map_err(|e| ProfileGenError::Network(format!("failed to build HTTP client: {e}")))
}

/// `{api}/users/{username}`, with the username percent-encoded as one segment.
fn user_url(api: &str, username: &str) -> Result<Url> {
    let mut url = Url::parse(api)
        .map_err(|e| ProfileGenError::config(format!("invalid GitHub API URL '{api}': {e}")))?;

    url.path_segments_mut()
        .map_err(|()| ProfileGenError::config(format!("GitHub API URL '{api}' cannot be a base")))?
        .pop_if_empty()
        .push("users")
        .push(username.trim());

    Ok(url)
}
