use thiserror::Error;

/// Error outputs from `sessionkit`.
#[derive(Debug, Error)]
pub enum SessionError {
    /// A call into the passwordless-login SDK failed.
    #[error("sdk_error during {operation}: {error}")]
    Sdk {
        /// The SDK call that failed (e.g. `login_with_link`).
        operation: &'static str,
        /// Failure details as reported by the SDK.
        error: String,
    },
    /// Constructing the chain-signing handle or deriving the signer address failed.
    #[error("provider_error: {error}")]
    Provider {
        /// Failure details as reported by the wallet provider.
        error: String,
    },
    /// The backend role-fetch request failed at the HTTP or network layer.
    #[error("backend_error ({url}): {error}")]
    Backend {
        /// The URL that was requested.
        url: String,
        /// HTTP status code, when a response was received at all.
        status: Option<u16>,
        /// Failure details.
        error: String,
    },
    /// The backend responded, but the payload did not match the expected schema.
    #[error("invalid_response: {reason}")]
    InvalidResponse {
        /// Why the payload was rejected.
        reason: String,
    },
    /// The backend role check did not return the required role.
    #[error("not_authorized: role '{role}' cannot access this app")]
    NotAuthorized {
        /// The role name the backend actually returned.
        role: String,
    },
    /// Revoking the SDK session failed; local session state is uncertain.
    #[error("revoke_failed: {error}")]
    RevokeFailed {
        /// Failure details from the revoke call.
        error: String,
    },
}
