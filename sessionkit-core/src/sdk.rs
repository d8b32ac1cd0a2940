//! Contracts for the external login and wallet collaborators.
//!
//! The hosted passwordless-login SDK and the chain-signing provider it hands
//! out are vendor black boxes. They are modeled as traits so the embedding
//! application binds them to the real vendor SDKs while tests substitute
//! in-memory doubles.

use std::sync::Arc;

use alloy_primitives::Address;
use async_trait::async_trait;

use crate::error::SessionError;

/// Profile information the login SDK holds for the active session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserMetadata {
    /// The email address the session was established with.
    pub email: String,
}

/// The hosted passwordless-login SDK.
///
/// A single instance is constructed by the host at application start with a
/// fixed [`crate::NetworkConfig`] and shared for the lifetime of the process.
/// Session persistence, if any, lives entirely inside the vendor SDK.
#[async_trait]
pub trait AuthSdk: Send + Sync {
    /// Starts a passwordless login for `email`, suspending until the user
    /// completes the out-of-band verification flow.
    ///
    /// # Errors
    ///
    /// Returns an error if the user cancels, the flow times out, or the
    /// vendor service is unreachable.
    async fn login_with_link(&self, email: &str) -> Result<(), SessionError>;

    /// Revokes the active session.
    ///
    /// # Errors
    ///
    /// Returns an error if the revoke call fails, typically on network
    /// failure. The session may or may not still be valid afterwards.
    async fn logout(&self) -> Result<(), SessionError>;

    /// Reports whether the SDK currently holds a valid session.
    ///
    /// # Errors
    ///
    /// Rarely errors; vendor SDKs may fail here on corrupted local state.
    async fn is_logged_in(&self) -> Result<bool, SessionError>;

    /// Fetches the profile metadata for the active session.
    ///
    /// # Errors
    ///
    /// Returns an error if no session is active.
    async fn user_metadata(&self) -> Result<UserMetadata, SessionError>;

    /// Issues a fresh bearer token for the active session.
    ///
    /// # Errors
    ///
    /// Returns an error if no session is active.
    async fn id_token(&self) -> Result<String, SessionError>;

    /// Wraps the SDK's RPC handle into a chain-signing provider.
    ///
    /// # Errors
    ///
    /// Returns an error if the handle cannot be constructed.
    fn wallet_provider(&self) -> Result<Arc<dyn WalletProvider>, SessionError>;
}

/// A chain-signing handle derived from the login SDK's RPC connection.
///
/// Created alongside a session and held for the same lifetime.
#[async_trait]
pub trait WalletProvider: Send + Sync {
    /// Derives the signer's on-chain address.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying provider fails.
    async fn signer_address(&self) -> Result<Address, SessionError>;
}
