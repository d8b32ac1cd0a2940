//! The session context: the single logged-in-user object and the operations
//! that populate and clear it.

use std::sync::Arc;

use alloy_primitives::Address;
use tokio::sync::RwLock;

use crate::{
    backend::BackendClient,
    error::SessionError,
    observer::SessionObserver,
    sdk::{AuthSdk, WalletProvider},
};

/// The role name the backend must return for a session to be considered
/// valid. Any other role forces a logout.
pub const REQUIRED_ROLE: &str = "Market Creator";

/// The authenticated user, held in process memory only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Email the session was established with.
    pub email: String,
    /// The signer address derived from the session's wallet provider.
    pub address: Address,
}

/// A populated session. The user and the provider handle share one lifecycle:
/// they are stored and cleared together, never one without the other.
struct ActiveSession {
    user: User,
    provider: Arc<dyn WalletProvider>,
}

/// Client-side session management over the passwordless-login SDK, the
/// wallet provider and the backend role check.
///
/// One instance is constructed at application start with its collaborators
/// injected, and shared across the component tree. Accessors are cheap
/// shared reads; operations are strictly sequential async calls with no
/// retries and no cancellation. Concurrent operations are not mutually
/// excluded — the last writer wins.
pub struct SessionContext {
    auth: Arc<dyn AuthSdk>,
    backend: BackendClient,
    observer: Arc<dyn SessionObserver>,
    state: RwLock<Option<ActiveSession>>,
}

impl SessionContext {
    /// Initializes an anonymous session context.
    #[must_use]
    pub fn new(
        auth: Arc<dyn AuthSdk>,
        backend: BackendClient,
        observer: Arc<dyn SessionObserver>,
    ) -> Self {
        Self {
            auth,
            backend,
            observer,
            state: RwLock::new(None),
        }
    }

    /// Logs the user in.
    ///
    /// Runs the passwordless flow for `email`, constructs the wallet
    /// provider, enforces the backend role check and populates the session.
    /// On success the observer is asked to navigate home.
    ///
    /// # Errors
    ///
    /// Any failure — including a failed role check — forces a full logout
    /// (state cleared, SDK session revoked, navigate home), surfaces the
    /// error through the observer and returns it. No partial state is
    /// retained.
    pub async fn login(&self, email: &str) -> Result<User, SessionError> {
        let outcome = async {
            self.auth.login_with_link(email).await?;
            self.authorize_and_store(email.to_owned()).await
        }
        .await;

        match outcome {
            Ok(user) => {
                log::info!("login succeeded for {email}");
                self.observer.navigate_home();
                Ok(user)
            }
            Err(err) => {
                log::warn!("login failed for {email}: {err}");
                self.force_logout().await;
                self.observer.session_error(err.to_string());
                Err(err)
            }
        }
    }

    /// Logs the user out: revokes the SDK session, clears the session state
    /// and asks the observer to navigate home.
    ///
    /// # Errors
    ///
    /// If the revoke call fails, local state is deliberately left unchanged
    /// and [`SessionError::RevokeFailed`] is returned — the session state is
    /// uncertain and the caller decides how to proceed.
    pub async fn logout(&self) -> Result<(), SessionError> {
        if let Err(err) = self.auth.logout().await {
            log::warn!("session revoke failed, local state kept: {err}");
            return Err(SessionError::RevokeFailed {
                error: err.to_string(),
            });
        }
        self.state.write().await.take();
        self.observer.navigate_home();
        Ok(())
    }

    /// Restores the session on startup, if the SDK still holds one.
    ///
    /// When the SDK reports no session this is a no-op and returns
    /// `Ok(None)`. When a session exists, the same population path as
    /// [`Self::login`] runs — metadata, provider, token, role check — and
    /// the resulting user is returned. No navigation happens on success.
    ///
    /// # Errors
    ///
    /// Any failure forces a full logout, surfaces the error through the
    /// observer and returns it.
    pub async fn check_session(&self) -> Result<Option<User>, SessionError> {
        let outcome = async {
            if !self.auth.is_logged_in().await? {
                return Ok(None);
            }
            let metadata = self.auth.user_metadata().await?;
            self.authorize_and_store(metadata.email).await.map(Some)
        }
        .await;

        match outcome {
            Ok(user) => Ok(user),
            Err(err) => {
                log::warn!("session check failed: {err}");
                self.force_logout().await;
                self.observer.session_error(err.to_string());
                Err(err)
            }
        }
    }

    /// Fetches a fresh bearer token for authenticated backend requests.
    ///
    /// # Errors
    ///
    /// On failure a logout is triggered (once) and the error is returned;
    /// no token is available to the caller. Unlike login and session-check
    /// failures, this path does not notify the observer's error channel.
    pub async fn get_token(&self) -> Result<String, SessionError> {
        match self.auth.id_token().await {
            Ok(token) => Ok(token),
            Err(err) => {
                log::warn!("token fetch failed, logging out: {err}");
                if let Err(logout_err) = self.logout().await {
                    log::warn!("logout after token failure also failed: {logout_err}");
                }
                Err(err)
            }
        }
    }

    /// The current user, if a session is populated.
    pub async fn user(&self) -> Option<User> {
        self.state.read().await.as_ref().map(|s| s.user.clone())
    }

    /// The current user's signer address, if a session is populated.
    pub async fn address(&self) -> Option<Address> {
        self.state.read().await.as_ref().map(|s| s.user.address)
    }

    /// The current wallet provider handle, if a session is populated.
    pub async fn provider(&self) -> Option<Arc<dyn WalletProvider>> {
        self.state
            .read()
            .await
            .as_ref()
            .map(|s| Arc::clone(&s.provider))
    }

    /// Shared tail of the login and session-check paths: construct the
    /// provider, fetch a token, enforce the role check, derive the signer
    /// address and store the session.
    async fn authorize_and_store(&self, email: String) -> Result<User, SessionError> {
        let provider = self.auth.wallet_provider()?;
        let token = self.auth.id_token().await?;
        let authorized = self.backend.get_user(&token).await?;
        if authorized.role.name != REQUIRED_ROLE {
            return Err(SessionError::NotAuthorized {
                role: authorized.role.name,
            });
        }
        let address = provider.signer_address().await?;

        let user = User { email, address };
        *self.state.write().await = Some(ActiveSession {
            user: user.clone(),
            provider,
        });
        Ok(user)
    }

    /// Failure-path logout: revoke best-effort, always clear state and
    /// navigate home.
    async fn force_logout(&self) {
        if let Err(err) = self.auth.logout().await {
            log::warn!("session revoke failed during forced logout: {err}");
        }
        self.state.write().await.take();
        self.observer.navigate_home();
    }
}
