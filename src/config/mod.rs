//
//  clockify-rs
//  config/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/18.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Configuration
//!
//! Client configuration, loadable from TOML.
//!
//! ## File Format
//!
//! ```toml
//! api_key = "your-api-key"
//! user_agent = "my-app/1.0"        # optional
//!
//! [endpoint]                       # optional, each field optional
//! base = "https://api.clockify.me/api/v1"
//! time_off = "https://pto.api.clockify.me/v1"
//! report = "https://reports.api.clockify.me/v1"
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use clockify::config::ClientConfig;
//!
//! let config = ClientConfig::from_toml_str(r#"
//! api_key = "secret"
//!
//! [endpoint]
//! base = "http://localhost:8080/api/v1/"
//! "#).unwrap();
//!
//! assert_eq!(config.endpoint.base, "http://localhost:8080/api/v1");
//! assert_eq!(config.endpoint.report, "https://reports.api.clockify.me/v1");
//! ```

mod endpoint;

pub use endpoint::*;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::auth::ApiKey;

/// Errors raised while loading configuration or constructing a client from it.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("missing API key")]
    MissingApiKey,

    /// The HTTP client could not be built (e.g. TLS initialisation failed).
    #[error("http client: {0}")]
    Client(#[source] reqwest::Error),
}

/// Everything needed to construct a [`Clockify`](crate::Clockify) client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    pub api_key: ApiKey,

    #[serde(default)]
    pub endpoint: Endpoint,

    /// Overrides the default `clockify-rs/<version>` user agent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}

impl ClientConfig {
    /// A configuration with the default endpoints.
    pub fn new(api_key: impl Into<ApiKey>) -> Self {
        Self {
            api_key: api_key.into(),
            endpoint: Endpoint::default(),
            user_agent: None,
        }
    }

    /// Applies a partial endpoint override; blank fields keep their current value.
    pub fn with_endpoint(mut self, endpoint: Endpoint) -> Self {
        self.endpoint = self.endpoint.merge(endpoint);
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Parses a TOML document.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::Parse`] when the document is not valid TOML or lacks `api_key`
    /// - [`ConfigError::MissingApiKey`] when `api_key` is blank
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validated()
    }

    /// Reads and parses a TOML file.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Io`] when the file cannot be read, plus everything
    /// [`ClientConfig::from_toml_str`] returns.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Checks the API key and normalizes the endpoints.
    pub(crate) fn validated(mut self) -> Result<Self, ConfigError> {
        if self.api_key.is_empty() {
            return Err(ConfigError::MissingApiKey);
        }
        self.endpoint = self.endpoint.normalized();
        Ok(self)
    }
}
