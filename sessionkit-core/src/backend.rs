use reqwest::Url;
use serde::Deserialize;

use crate::{config::NetworkConfig, error::SessionError};

/// The backend's user record, validated against the expected schema on
/// deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AuthorizedUser {
    /// The authorization role assigned to the user.
    pub role: Role,
}

/// An authorization role as resolved by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Role {
    /// The role name checked against [`crate::REQUIRED_ROLE`].
    pub name: String,
}

#[derive(Debug, Deserialize)]
struct UserEnvelope {
    data: AuthorizedUser,
}

/// A thin client for the same-origin backend API.
///
/// Sets sensible defaults such as a versioned User-Agent and ensures HTTPS
/// for non-loopback hosts. Requests are single-shot: failures propagate
/// immediately to the caller, which reacts by forcing a logout.
#[derive(Debug, Clone)]
pub struct BackendClient {
    client: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    /// Initializes a new `BackendClient` from the app's network config.
    #[must_use]
    pub fn new(config: &NetworkConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.backend_base_url().trim_end_matches('/').to_owned(),
        }
    }

    /// Resolves the user record for the holder of `token`.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Backend`] on network failure or a non-success
    /// status, and [`SessionError::InvalidResponse`] when the payload does
    /// not match the expected `{ data: { role: { name } } }` schema.
    pub async fn get_user(&self, token: &str) -> Result<AuthorizedUser, SessionError> {
        let url = format!("{}/api/user", self.base_url);
        ensure_https(&url)?;

        let response = self
            .client
            .get(&url)
            .header(
                "User-Agent",
                format!("sessionkit-core/{}", env!("CARGO_PKG_VERSION")),
            )
            .bearer_auth(token)
            .send()
            .await
            .map_err(|err| SessionError::Backend {
                url: url.clone(),
                status: None,
                error: format!("request failed: {err}"),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(SessionError::Backend {
                url,
                status: Some(status.as_u16()),
                error: format!("request error with bad status code {status}"),
            });
        }

        let envelope: UserEnvelope =
            response
                .json()
                .await
                .map_err(|err| SessionError::InvalidResponse {
                    reason: format!("user payload does not match schema: {err}"),
                })?;
        Ok(envelope.data)
    }
}

/// Rejects plaintext URLs, excepting loopback hosts used by local backends.
fn ensure_https(url: &str) -> Result<(), SessionError> {
    let parsed = Url::parse(url).map_err(|err| SessionError::Backend {
        url: url.to_owned(),
        status: None,
        error: format!("invalid url: {err}"),
    })?;

    let is_loopback = matches!(
        parsed.host_str(),
        Some("localhost" | "127.0.0.1" | "[::1]" | "::1")
    );
    if parsed.scheme() == "https" || is_loopback {
        Ok(())
    } else {
        Err(SessionError::Backend {
            url: url.to_owned(),
            status: None,
            error: "plaintext http is only allowed for loopback hosts".to_owned(),
        })
    }
}
