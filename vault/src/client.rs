//! Vault HTTP client construction and logical reads.

use crate::{
    config::VaultConfig,
    error::{VaultError, VaultResult},
    path::sanitize_path,
    secrets::{ErrorResponse, HealthResponse, Secret},
};
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use tracing::{Span, debug, field, instrument, warn};
use url::Url;

/// Query used for `sys/health` so standby, sealed and uninitialized servers
/// all answer with a parseable success body.
const HEALTH_QUERY: [(&str, &str); 5] = [
    ("standbyok", "true"),
    ("uninitcode", "299"),
    ("sealedcode", "299"),
    ("drsecondarycode", "299"),
    ("performancestandbycode", "299"),
];

/// Handle to a Vault server.
///
/// Construction does no network I/O. The token, if any, is redacted from
/// `Debug` output.
#[derive(Debug, Clone)]
pub struct VaultClient {
    address: Url,
    http: Client,
    token: Option<SecretString>,
    namespace: Option<String>,
}

impl VaultClient {
    /// Create a client for `address`.
    ///
    /// `VAULT_TOKEN` and `VAULT_NAMESPACE`, when set, are attached to the
    /// client. Otherwise call [`VaultClient::set_token`].
    ///
    /// # Errors
    ///
    /// Returns whatever [`VaultClient::new`] returns for the configuration,
    /// e.g. [`VaultError::InvalidAddress`] for a malformed address.
    pub fn from_address(address: &str) -> VaultResult<Self> {
        Self::from_address_with(address, |name| std::env::var(name).ok())
    }

    fn from_address_with(
        address: &str,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> VaultResult<Self> {
        let mut config = VaultConfig::new(address);
        config.token = lookup("VAULT_TOKEN")
            .filter(|t| !t.is_empty())
            .map(SecretString::from);
        config.namespace = lookup("VAULT_NAMESPACE").filter(|n| !n.is_empty());
        Self::new(config)
    }

    /// Create a client from a full configuration.
    ///
    /// # Errors
    ///
    /// [`VaultError::InvalidAddress`] with the parser's error if the address
    /// is not a URL, [`VaultError::Http`] if the HTTP client cannot be built.
    /// Any query or fragment in the address is dropped.
    pub fn new(config: VaultConfig) -> VaultResult<Self> {
        let mut address = Url::parse(&config.address)?;
        address.set_query(None);
        address.set_fragment(None);

        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(VaultError::Http)?;

        debug!(address = %address, "Created Vault client");

        Ok(Self {
            address,
            http,
            token: config.token,
            namespace: config.namespace,
        })
    }

    /// Parsed server address.
    #[must_use]
    pub const fn address(&self) -> &Url {
        &self.address
    }

    /// Current client token.
    #[must_use]
    pub const fn token(&self) -> Option<&SecretString> {
        self.token.as_ref()
    }

    /// Replace the client token.
    pub fn set_token(&mut self, token: impl Into<String>) {
        self.token = Some(SecretString::from(token.into()));
    }

    /// Drop the client token; later requests are sent unauthenticated.
    pub fn clear_token(&mut self) {
        self.token = None;
    }

    /// Configured namespace.
    #[must_use]
    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    /// Read the secret at `path`. Returns `None` if nothing exists there.
    ///
    /// # Errors
    ///
    /// Transport failures, non-success statuses other than 404, and
    /// malformed bodies.
    #[instrument(skip(self, path), fields(path = field::Empty))]
    pub async fn read(&self, path: &str) -> VaultResult<Option<Secret>> {
        let path = sanitize_path(path);
        Span::current().record("path", path.as_str());
        let response = self.request(Method::GET, &path).send().await?;
        Self::optional_secret(&path, response).await
    }

    /// List keys below `path`. Returns `None` if there is nothing to list.
    ///
    /// # Errors
    ///
    /// Same as [`VaultClient::read`].
    #[instrument(skip(self, path), fields(path = field::Empty))]
    pub async fn list(&self, path: &str) -> VaultResult<Option<Secret>> {
        let path = sanitize_path(path);
        Span::current().record("path", path.as_str());
        let response = self
            .request(Method::GET, &path)
            .query(&[("list", "true")])
            .send()
            .await?;
        Self::optional_secret(&path, response).await
    }

    /// Query `sys/health`.
    ///
    /// # Errors
    ///
    /// Transport failures, non-success statuses and malformed bodies.
    #[instrument(skip(self))]
    pub async fn health(&self) -> VaultResult<HealthResponse> {
        let path = "sys/health";
        let response = self
            .request(Method::GET, path)
            .query(&HEALTH_QUERY)
            .send()
            .await?;
        let response = Self::check_status(path, response).await?;
        Ok(serde_json::from_slice(&response.bytes().await?)?)
    }

    fn url_for(&self, path: &str) -> String {
        format!("{}/v1/{}", self.address.as_str().trim_end_matches('/'), path)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let mut request = self
            .http
            .request(method, self.url_for(path))
            .header("X-Vault-Request", "true");

        if let Some(token) = &self.token {
            request = request.header("X-Vault-Token", token.expose_secret());
        }
        if let Some(namespace) = &self.namespace {
            request = request.header("X-Vault-Namespace", namespace);
        }

        request
    }

    async fn optional_secret(path: &str, response: Response) -> VaultResult<Option<Secret>> {
        if response.status() == StatusCode::NOT_FOUND {
            debug!(path, "No secret at path");
            return Ok(None);
        }

        let response = Self::check_status(path, response).await?;
        let body = response.bytes().await?;
        Ok(Some(serde_json::from_slice(&body)?))
    }

    async fn check_status(path: &str, response: Response) -> VaultResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        warn!(path, status = status.as_u16(), "Vault request failed");

        if status == StatusCode::FORBIDDEN {
            return Err(VaultError::PermissionDenied(path.to_string()));
        }

        let errors = response
            .bytes()
            .await
            .ok()
            .and_then(|body| serde_json::from_slice::<ErrorResponse>(&body).ok())
            .map(|body| body.errors)
            .unwrap_or_default();

        Err(VaultError::Api {
            status: status.as_u16(),
            errors,
        })
    }
}
