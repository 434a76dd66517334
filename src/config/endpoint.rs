//
//  clockify-rs
//  config/endpoint.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/18.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Endpoint Configuration
//!
//! Clockify serves its API from three hosts:
//!
//! | Endpoint | Default | Used for |
//! |----------|---------|----------|
//! | `base` | `https://api.clockify.me/api/v1` | workspaces, clients, projects, tasks |
//! | `time_off` | `https://pto.api.clockify.me/v1` | time-off policies and requests |
//! | `report` | `https://reports.api.clockify.me/v1` | reports |
//!
//! Regional and self-hosted installations use different hosts, so every
//! endpoint can be overridden individually.
//!
//! ## Usage
//!
//! ```rust
//! use clockify::config::{Endpoint, DEFAULT_BASE_ENDPOINT, DEFAULT_REPORT_ENDPOINT};
//!
//! let endpoint = Endpoint::default().merge(Endpoint {
//!     base: "http://localhost:8080/api/v1/".to_string(),
//!     ..Endpoint::empty()
//! });
//! assert_eq!(endpoint.base, "http://localhost:8080/api/v1");
//! assert_eq!(endpoint.report, DEFAULT_REPORT_ENDPOINT);
//! assert_ne!(endpoint.base, DEFAULT_BASE_ENDPOINT);
//! ```

use serde::{Deserialize, Serialize};

/// Default endpoint for the core API.
pub const DEFAULT_BASE_ENDPOINT: &str = "https://api.clockify.me/api/v1";

/// Default endpoint for the time-off API.
pub const DEFAULT_TIME_OFF_ENDPOINT: &str = "https://pto.api.clockify.me/v1";

/// Default endpoint for the reports API.
pub const DEFAULT_REPORT_ENDPOINT: &str = "https://reports.api.clockify.me/v1";

/// The set of API endpoints a client talks to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoint {
    #[serde(default = "default_base")]
    pub base: String,

    #[serde(default = "default_time_off")]
    pub time_off: String,

    #[serde(default = "default_report")]
    pub report: String,
}

fn default_base() -> String {
    DEFAULT_BASE_ENDPOINT.to_string()
}

fn default_time_off() -> String {
    DEFAULT_TIME_OFF_ENDPOINT.to_string()
}

fn default_report() -> String {
    DEFAULT_REPORT_ENDPOINT.to_string()
}

impl Default for Endpoint {
    fn default() -> Self {
        Self {
            base: default_base(),
            time_off: default_time_off(),
            report: default_report(),
        }
    }
}

impl Endpoint {
    /// An endpoint set with every field blank.
    ///
    /// Useful as the base of a partial override passed to [`Endpoint::merge`].
    pub fn empty() -> Self {
        Self {
            base: String::new(),
            time_off: String::new(),
            report: String::new(),
        }
    }

    /// Overrides each field of `self` with the non-blank fields of `other`.
    ///
    /// # Parameters
    ///
    /// * `other` - Partial override; blank fields keep the current value
    ///
    /// # Returns
    ///
    /// The merged set, with every field normalized by [`normalize_endpoint`].
    pub fn merge(self, other: Endpoint) -> Self {
        let pick = |current: String, candidate: String| {
            if candidate.trim().is_empty() {
                normalize_endpoint(&current)
            } else {
                normalize_endpoint(&candidate)
            }
        };

        Self {
            base: pick(self.base, other.base),
            time_off: pick(self.time_off, other.time_off),
            report: pick(self.report, other.report),
        }
    }

    /// Normalizes every field in place.
    pub fn normalized(self) -> Self {
        Self::default().merge(self)
    }
}

/// Normalizes an endpoint URL for consistent path joining.
///
/// Surrounding whitespace and trailing slashes are removed. The scheme and
/// case are preserved because path segments are case-sensitive.
///
/// # Examples
///
/// ```rust
/// use clockify::config::normalize_endpoint;
///
/// assert_eq!(normalize_endpoint(" https://api.clockify.me/api/v1// "), "https://api.clockify.me/api/v1");
/// ```
pub fn normalize_endpoint(endpoint: &str) -> String {
    endpoint.trim().trim_end_matches('/').to_string()
}
