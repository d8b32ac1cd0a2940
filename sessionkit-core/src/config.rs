use secrecy::SecretString;

use crate::Environment;

/// Fixed network configuration with which the passwordless-login SDK and the
/// backend client are constructed.
///
/// Built once at application start and injected; none of the fields change
/// for the lifetime of the process.
#[derive(Debug, Clone)]
pub struct NetworkConfig {
    chain_id: u64,
    rpc_url: String,
    publishable_key: SecretString,
    backend_base_url: String,
}

impl NetworkConfig {
    /// Initializes a config from explicit values.
    #[must_use]
    pub fn new(
        chain_id: u64,
        rpc_url: impl Into<String>,
        publishable_key: SecretString,
        backend_base_url: impl Into<String>,
    ) -> Self {
        Self {
            chain_id,
            rpc_url: rpc_url.into(),
            publishable_key,
            backend_base_url: backend_base_url.into(),
        }
    }

    /// Initializes a config with the chain defaults for the given environment.
    ///
    /// The publishable key is issued per-app by the login vendor and the
    /// backend base URL is deployment-specific, so both are always supplied
    /// by the caller.
    #[must_use]
    pub fn from_environment(
        environment: &Environment,
        publishable_key: SecretString,
        backend_base_url: impl Into<String>,
    ) -> Self {
        match environment {
            Environment::Staging => Self::new(
                80_002, // Polygon Amoy
                "https://rpc-amoy.polygon.technology",
                publishable_key,
                backend_base_url,
            ),
            Environment::Production => Self::new(
                137, // Polygon mainnet
                "https://polygon-rpc.com",
                publishable_key,
                backend_base_url,
            ),
        }
    }

    /// The chain ID against which wallet providers are constructed.
    #[must_use]
    pub const fn chain_id(&self) -> u64 {
        self.chain_id
    }

    /// The RPC endpoint for the configured chain.
    #[must_use]
    pub fn rpc_url(&self) -> &str {
        &self.rpc_url
    }

    /// The login vendor's publishable API key for this app.
    #[must_use]
    pub const fn publishable_key(&self) -> &SecretString {
        &self.publishable_key
    }

    /// Base URL of the same-origin backend API.
    #[must_use]
    pub fn backend_base_url(&self) -> &str {
        &self.backend_base_url
    }
}
