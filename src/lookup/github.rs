//! GitHub REST client for `GET /users/<username>`.
//!
//! The username is appended as one percent-encoded path segment, so input
//! such as `a/b` or `x?y` asks for that literal user instead of another
//! endpoint. The dot segments `.` and `..` are refused outright since URL
//! normalization would drop them. No retries; a failure is reported once and the caller decides.

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info, warn};
use reqwest::Url;
use reqwest::header::ACCEPT;
use serde::Deserialize;

use crate::core::profile::ProfileRecord;
use crate::lookup::{LookupError, ProfileLookup};

const GITHUB_JSON: &str = "application/vnd.github+json";

/// Error body GitHub sends with 4xx/5xx responses.
#[derive(Deserialize, Debug)]
struct ApiErrorBody {
    message: String,
}

/// Profile lookup against the GitHub REST API (or a compatible server).
pub struct GithubLookup {
    base_url: Url,
    token: Option<String>,
    client: reqwest::Client,
}

impl GithubLookup {
    pub fn new(
        base_url: &str,
        token: Option<String>,
        timeout: Duration,
    ) -> Result<Self, LookupError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| LookupError::Config(format!("invalid base URL '{base_url}': {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(LookupError::Config(format!(
                "base URL '{base_url}' cannot carry a path"
            )));
        }

        let client = reqwest::Client::builder()
            .user_agent(concat!("github-cards/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(|e| LookupError::Config(e.to_string()))?;

        Ok(Self {
            base_url,
            token,
            client,
        })
    }

    /// Builds `<base>/users/<username>`, keeping any path the base already has.
    pub fn users_url(&self, username: &str) -> Result<Url, LookupError> {
        if username == "." || username == ".." {
            return Err(LookupError::InvalidUsername(username.to_string()));
        }
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| LookupError::Config(format!("base URL '{}' cannot carry a path", self.base_url)))?
            .pop_if_empty()
            .push("users")
            .push(username);
        Ok(url)
    }
}

#[async_trait]
impl ProfileLookup for GithubLookup {
    fn name(&self) -> &str {
        "github"
    }

    async fn fetch_profile(&self, username: &str) -> Result<ProfileRecord, LookupError> {
        let url = self.users_url(username)?;
        info!("Profile lookup: GET {}", url);

        let mut request = self.client.get(url).header(ACCEPT, GITHUB_JSON);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                LookupError::Network(format!("request timed out: {e}"))
            } else {
                LookupError::Network(e.to_string())
            }
        })?;

        let status = response.status();
        debug!("Profile lookup response status: {}", status);

        let body = response
            .text()
            .await
            .map_err(|e| LookupError::Network(e.to_string()))?;

        if !status.is_success() {
            let message = serde_json::from_str::<ApiErrorBody>(&body)
                .map(|b| b.message)
                .unwrap_or(body);
            warn!("Profile lookup for '{}' failed: {} - {}", username, status, message);
            return Err(LookupError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let profile: ProfileRecord =
            serde_json::from_str(&body).map_err(|e| LookupError::Parse(e.to_string()))?;
        info!(
            "Profile lookup for '{}' succeeded: id={}, login={}",
            username, profile.id, profile.login
        );
        Ok(profile)
    }
}
