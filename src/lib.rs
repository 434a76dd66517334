//
//  clockify-rs
//  lib.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/18.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Clockify Client Library
//!
//! An async client for the Clockify time-tracking REST API.
//!
//! ## Overview
//!
//! The [`Clockify`] entry point hands out one node per resource. Each node
//! method takes a slice of [`RequestOption`]s: composable, named modifiers that
//! set listing filters, body fields on create and update calls, or the call's
//! cancellation and deadline.
//!
//! ## Features
//!
//! - **Resources**: workspaces, clients, projects (with estimates, memberships
//!   and templates) and tasks
//! - **Composable options**: one option type for filters and fields; options an
//!   operation does not use are ignored
//! - **Per-call control**: cancellation tokens, deadlines and timeouts
//! - **Descriptive errors**: every failure names the stage it happened in, and
//!   decoding errors name the offending field
//!
//! ## Module Structure
//!
//! - [`api`]: request options, builder, transport and resource nodes
//! - [`auth`]: API key handling
//! - [`config`]: client configuration and endpoints
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use clockify::{Clockify, RequestOption};
//! use std::time::Duration;
//!
//! # async fn run() -> clockify::Result<()> {
//! let clockify = Clockify::new("your-api-key")?;
//!
//! let workspaces = clockify.workspaces().all(&[]).await?;
//! let clients = clockify
//!     .clients(&workspaces[0].id)
//!     .all(&[
//!         RequestOption::Archived(true),
//!         RequestOption::PageSize(100),
//!         RequestOption::Timeout(Duration::from_secs(10)),
//!     ])
//!     .await?;
//! println!("{} archived clients", clients.len());
//! # Ok(())
//! # }
//! ```

/// HTTP plumbing and resource nodes for the Clockify API.
pub mod api;

/// API key handling.
pub mod auth;

/// Client configuration and endpoint defaults.
pub mod config;

pub use api::common::{ClockifyError, Result};
pub use api::request::RequestOption;
pub use api::resources::{
    Client, ClientNode, Project, ProjectNode, Task, TaskNode, Workspace, WorkspaceNode,
};
pub use auth::ApiKey;
pub use config::{ClientConfig, Endpoint};

use api::client::HttpTransport;
use api::resources::NodeBase;
use config::ConfigError;

/// Library version, sent in the default user agent.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Entry point to the Clockify API.
///
/// Holds one shared HTTP client; every node it hands out reuses it. Cloning
/// is cheap.
///
/// # Example
///
/// ```rust
/// use clockify::{Clockify, Endpoint};
///
/// let clockify = Clockify::new("api-key")
///     .unwrap()
///     .with_endpoint(Endpoint {
///         base: "http://localhost:8080/api/v1".to_string(),
///         ..Endpoint::empty()
///     });
/// assert_eq!(clockify.endpoint().base, "http://localhost:8080/api/v1");
/// assert_eq!(clockify.endpoint().report, "https://reports.api.clockify.me/v1");
/// ```
#[derive(Debug, Clone)]
pub struct Clockify {
    transport: HttpTransport,
    endpoint: Endpoint,
}

impl Clockify {
    /// Creates a client for the public Clockify endpoints.
    ///
    /// # Errors
    ///
    /// [`ConfigError::MissingApiKey`] for a blank key, or
    /// [`ConfigError::Client`] when the HTTP client cannot be built.
    pub fn new(api_key: impl Into<ApiKey>) -> Result<Self> {
        Self::from_config(ClientConfig::new(api_key))
    }

    /// Creates a client from a loaded configuration.
    pub fn from_config(config: ClientConfig) -> Result<Self> {
        let config = config.validated()?;
        let transport = match &config.user_agent {
            Some(user_agent) => HttpTransport::with_user_agent(config.api_key, user_agent),
            None => HttpTransport::new(config.api_key),
        }
        .map_err(ConfigError::Client)?;

        Ok(Self {
            transport,
            endpoint: config.endpoint,
        })
    }

    /// Overrides endpoints; blank fields keep their current value.
    pub fn with_endpoint(mut self, endpoint: Endpoint) -> Self {
        self.endpoint = self.endpoint.merge(endpoint);
        self
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    pub fn workspaces(&self) -> WorkspaceNode {
        WorkspaceNode::new(NodeBase::new(self.transport.clone(), &self.endpoint.base))
    }

    pub fn clients(&self, workspace_id: impl Into<String>) -> ClientNode {
        self.workspaces().clients(workspace_id)
    }

    pub fn projects(&self, workspace_id: impl Into<String>) -> ProjectNode {
        self.workspaces().projects(workspace_id)
    }

    pub fn tasks(
        &self,
        workspace_id: impl Into<String>,
        project_id: impl Into<String>,
    ) -> TaskNode {
        self.workspaces().tasks(workspace_id, project_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_api_key_is_rejected() {
        let err = Clockify::new("").unwrap_err();
        assert!(matches!(err, ClockifyError::Config(ConfigError::MissingApiKey)));
    }

    #[test]
    fn test_nodes_carry_ids() {
        let clockify = Clockify::new("k").unwrap();
        assert_eq!(clockify.clients("ws").workspace_id(), "ws");

        let tasks = clockify.projects("ws").tasks("p1");
        assert_eq!(tasks.workspace_id(), "ws");
        assert_eq!(tasks.project_id(), "p1");
    }

    #[test]
    fn test_from_config_normalizes_endpoint() {
        let config = ClientConfig {
            api_key: ApiKey::new("k"),
            endpoint: Endpoint {
                base: "http://localhost:1/api/v1/".to_string(),
                ..Endpoint::empty()
            },
            user_agent: Some("custom/1.0".to_string()),
        };
        let clockify = Clockify::from_config(config).unwrap();
        assert_eq!(clockify.endpoint().base, "http://localhost:1/api/v1");
        assert_eq!(clockify.endpoint().time_off, config::DEFAULT_TIME_OFF_ENDPOINT);
    }
}
