//! HashiCorp Vault client helpers
//!
//! Builds a [`VaultClient`] from an address string and normalizes Vault
//! paths with [`sanitize_path`].

pub mod client;
pub mod config;
pub mod error;
pub mod path;
pub mod secrets;

pub use client::VaultClient;
pub use config::VaultConfig;
pub use error::{VaultError, VaultResult};
pub use path::sanitize_path;
pub use secrets::{HealthResponse, Secret};
