use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

use crate::error::{TipError, TipResult};

/// Public profile of an Audius creator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub display_name: String,
    pub bio: String,
    pub avatar_url: String,
    /// Raw `spl_wallet` value; parsed into an address where it is used.
    pub token_wallet: String,
}

/// Resolves a creator handle to its profile.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProfileResolver: Send + Sync {
    async fn resolve_profile(&self, handle: &str) -> TipResult<Profile>;
}

#[derive(Debug, Deserialize)]
struct UserResponse {
    data: User,
}

#[derive(Debug, Deserialize)]
struct User {
    name: String,
    #[serde(default)]
    bio: Option<String>,
    spl_wallet: String,
    profile_picture: ProfilePicture,
}

#[derive(Debug, Deserialize)]
struct ProfilePicture {
    #[serde(rename = "1000x1000")]
    large: String,
}

impl From<User> for Profile {
    fn from(user: User) -> Self {
        Self {
            display_name: user.name,
            bio: user.bio.unwrap_or_default(),
            avatar_url: user.profile_picture.large,
            token_wallet: user.spl_wallet,
        }
    }
}

/// Parse the body of `GET /v1/users/handle/{handle}`.
pub fn parse_user_response(body: &[u8]) -> TipResult<Profile> {
    serde_json::from_slice::<UserResponse>(body)
        .map(|response| response.data.into())
        .map_err(|e| TipError::ProfileMalformed(e.to_string()))
}

/// `ProfileResolver` backed by the Audius discovery API.
pub struct AudiusProfileResolver {
    base_url: String,
    http_client: reqwest::Client,
}

impl AudiusProfileResolver {
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> TipResult<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http_client = builder
            .build()
            .map_err(|e| TipError::UpstreamUnavailable(e.to_string()))?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http_client,
        })
    }

    fn user_url(&self, handle: &str) -> TipResult<reqwest::Url> {
        let mut url = reqwest::Url::parse(&self.base_url)
            .map_err(|e| TipError::UpstreamUnavailable(format!("bad profile API url: {}", e)))?;
        url.path_segments_mut()
            .map_err(|_| TipError::UpstreamUnavailable("profile API url cannot be a base".into()))?
            .pop_if_empty()
            .extend(["v1", "users", "handle", handle]);
        Ok(url)
    }
}

#[async_trait]
impl ProfileResolver for AudiusProfileResolver {
    async fn resolve_profile(&self, handle: &str) -> TipResult<Profile> {
        let url = self.user_url(handle)?;
        debug!("Resolving Audius profile: {}", url);

        let response = self.http_client.get(url).send().await.map_err(|e| {
            warn!("Profile lookup for '{}' failed: {}", handle, e);
            TipError::UpstreamUnavailable(e.to_string())
        })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(TipError::ProfileNotFound(handle.to_string()));
        }
        if !status.is_success() {
            warn!("Profile lookup for '{}' returned {}", handle, status);
            return Err(TipError::UpstreamUnavailable(format!("profile API returned {}", status)));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| TipError::UpstreamUnavailable(e.to_string()))?;
        parse_user_response(&body)
    }
}
