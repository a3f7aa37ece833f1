//! Vault client configuration.

use crate::error::{VaultError, VaultResult};
use secrecy::SecretString;
use std::time::Duration;

/// Default Vault server address.
pub const DEFAULT_ADDRESS: &str = "https://127.0.0.1:8200";

/// Vault client configuration.
#[derive(Debug, Clone)]
pub struct VaultConfig {
    /// Vault server address
    pub address: String,
    /// Client token sent as `X-Vault-Token`
    pub token: Option<SecretString>,
    /// Enterprise namespace sent as `X-Vault-Namespace`
    pub namespace: Option<String>,
    /// Request timeout
    pub timeout: Duration,
}

impl Default for VaultConfig {
    fn default() -> Self {
        Self {
            address: DEFAULT_ADDRESS.to_string(),
            token: None,
            namespace: None,
            timeout: Duration::from_secs(60),
        }
    }
}

impl VaultConfig {
    /// Create a configuration for the given address.
    #[must_use]
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            ..Default::default()
        }
    }

    /// Build a configuration from `VAULT_ADDR`, `VAULT_TOKEN`,
    /// `VAULT_NAMESPACE` and `VAULT_CLIENT_TIMEOUT` (seconds).
    ///
    /// # Errors
    ///
    /// Returns [`VaultError::InvalidConfig`] if `VAULT_CLIENT_TIMEOUT` is not
    /// a whole number of seconds.
    pub fn from_env() -> VaultResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> VaultResult<Self> {
        let mut config = Self::default();

        if let Some(address) = lookup("VAULT_ADDR") {
            config.address = address;
        }
        config.token = lookup("VAULT_TOKEN")
            .filter(|t| !t.is_empty())
            .map(SecretString::from);
        config.namespace = lookup("VAULT_NAMESPACE").filter(|n| !n.is_empty());

        if let Some(raw) = lookup("VAULT_CLIENT_TIMEOUT") {
            let secs: u64 = raw.trim().parse().map_err(|_| {
                VaultError::invalid_config(format!(
                    "VAULT_CLIENT_TIMEOUT: {raw:?} is not a number of seconds"
                ))
            })?;
            config.timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }

    /// Set the client token.
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(SecretString::from(token.into()));
        self
    }

    /// Set the namespace.
    #[must_use]
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Set request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
