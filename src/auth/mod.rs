//
//  clockify-rs
//  auth/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/18.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Authentication
//!
//! Clockify authenticates every request with a workspace-independent API key
//! sent in the `X-Api-Key` header. Key acquisition is left to the caller.

use std::fmt;

use reqwest::RequestBuilder;
use serde::{Deserialize, Serialize};

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "X-Api-Key";

/// A Clockify API key.
///
/// The `Debug` implementation never prints the key itself.
///
/// # Example
///
/// ```rust
/// use clockify::auth::ApiKey;
///
/// let key = ApiKey::new("secret-key");
/// assert_eq!(format!("{key:?}"), "ApiKey(****)");
/// assert!(!key.is_empty());
/// ```
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// Adds the `X-Api-Key` header to a request.
    pub fn apply_to_request(&self, request: RequestBuilder) -> RequestBuilder {
        request.header(API_KEY_HEADER, &self.0)
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(****)")
    }
}

impl From<&str> for ApiKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl From<String> for ApiKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}
