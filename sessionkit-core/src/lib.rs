#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
//! Client-side session management for passwordless wallet logins.
//!
//! The embedding application constructs its collaborators once at startup —
//! an [`AuthSdk`] implementation backed by the hosted passwordless-login
//! vendor, a [`BackendClient`] pointed at the same-origin API, and a
//! [`SessionObserver`] wired into its navigation and notification surfaces —
//! and injects them into a [`SessionContext`]. All downstream components read
//! the logged-in user through the context's accessors.

use strum::EnumString;

/// The hosted-SDK environment against which sessions are established.
///
/// Generally an app/client runs against a single environment for its entire
/// lifetime.
#[derive(Debug, Clone, PartialEq, Eq, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Environment {
    /// Test networks and staging backend deployments.
    Staging,
    /// Polygon mainnet and the production backend.
    Production,
}

mod backend;
pub use backend::*;

mod config;
pub use config::*;

mod error;
pub use error::*;

mod observer;
pub use observer::*;

mod sdk;
pub use sdk::*;

mod session;
pub use session::*;

pub mod logger;
