//
//  clockify-rs
//  api/resources/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/18.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Resource Nodes
//!
//! One node per Clockify resource. A node holds only configuration (the
//! shared transport, the base endpoint and its parent IDs) and exposes the
//! resource's operations as async methods.
//!
//! ## Hierarchy
//!
//! ```text
//! WorkspaceNode                       /workspaces
//! ├── ClientNode                      /workspaces/{ws}/clients
//! └── ProjectNode                     /workspaces/{ws}/projects
//!     └── TaskNode                    /workspaces/{ws}/projects/{p}/tasks
//! ```
//!
//! Every operation follows the same pipeline: build the descriptor from the
//! operation's declaration and the caller's options, send it with the
//! operation's verb, then decode the body. Failures carry the stage they
//! happened in (`build request:`, `get:`, `json unmarshal:`, ...).

pub mod clients;
pub mod projects;
pub mod tasks;
pub mod workspaces;

pub use clients::{Client, ClientNode};
pub use projects::{Project, ProjectNode};
pub use tasks::{Task, TaskNode};
pub use workspaces::{AutomaticLock, Round, Workspace, WorkspaceNode, WorkspaceSettings};

use bytes::Bytes;
use serde::de::DeserializeOwned;

use crate::api::client::HttpTransport;
use crate::api::common::{decode_list, decode_one, Result, Verb};
use crate::api::request::{build, resource_url, Operation, ParamKey, RequestOption};

/// Configuration shared by every node derived from one entry point.
#[derive(Debug, Clone)]
pub(crate) struct NodeBase {
    pub(crate) transport: HttpTransport,
    pub(crate) endpoint: String,
}

impl NodeBase {
    pub(crate) fn new(transport: HttpTransport, endpoint: impl Into<String>) -> Self {
        Self {
            transport,
            endpoint: endpoint.into(),
        }
    }

    async fn send(
        &self,
        verb: Verb,
        operation: &Operation,
        segments: &[&str],
        required: &[(ParamKey, String)],
        options: &[RequestOption],
    ) -> Result<Bytes> {
        let url = resource_url(&self.endpoint, segments)?;
        let request = build(operation, url, required, options)?;
        self.transport.send(verb, request).await
    }

    /// Runs an operation that returns a single resource.
    pub(crate) async fn one<T: DeserializeOwned>(
        &self,
        verb: Verb,
        operation: &Operation,
        segments: &[&str],
        required: &[(ParamKey, String)],
        options: &[RequestOption],
    ) -> Result<T> {
        let body = self
            .send(verb, operation, segments, required, options)
            .await?;
        Ok(decode_one(&body)?)
    }

    /// Runs an operation that returns a list of resources.
    pub(crate) async fn list<T: DeserializeOwned>(
        &self,
        operation: &Operation,
        segments: &[&str],
        options: &[RequestOption],
    ) -> Result<Vec<T>> {
        let body = self
            .send(Verb::Get, operation, segments, &[], options)
            .await?;
        Ok(decode_list(&body)?)
    }
}
