//
//  clockify-rs
//  api/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/18.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # API Client Layer
//!
//! HTTP plumbing and resource nodes for the Clockify REST API.
//!
//! ## Architecture
//!
//! - [`request`]: composable request options and the request builder
//! - [`client`]: the HTTP transport (headers, status checks, cancellation)
//! - [`common`]: shared value types, error types and response decoders
//! - [`resources`]: workspace, client, project and task nodes
//!
//! ## Error Handling
//!
//! Every node method returns [`ClockifyError`], labelled with the stage that
//! failed:
//!
//! - `build request:` an option value could not be converted
//! - `get:` / `post:` / `put:` / `patch:` / `del:` the call failed or returned
//!   an unexpected status
//! - `json unmarshal:` the response body did not match the resource type

/// HTTP transport for the Clockify API.
pub mod client;

/// Shared value types, errors and decoders.
pub mod common;

/// Request options and the request builder.
pub mod request;

/// Resource nodes and entity types.
pub mod resources;

pub use client::HttpTransport;
pub use common::{ClockifyError, Result};
