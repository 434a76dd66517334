//
//  clockify-rs
//  api/common/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/18.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Common API Types for the Clockify client
//!
//! This module provides the error taxonomy shared by every stage of a call and
//! the small value objects (rates, memberships, estimates) that several
//! resources embed.
//!
//! # Overview
//!
//! - [`ClockifyError`] - Top-level error returned by every node operation
//! - [`BuildError`] - Request construction failures (invalid option values, bad endpoints)
//! - [`TransportError`] - Network failures and non-success status codes
//! - [`DecodeError`] - Response bodies that do not match the resource schema
//! - [`decode_one`] and [`decode_list`] response decoders
//!
//! # Error Stages
//!
//! | Stage | Variant | Display prefix |
//! |-------|---------|----------------|
//! | Request construction | `ClockifyError::Build` | `build request:` |
//! | Transport | `ClockifyError::Transport` | `get:`, `post:`, `put:`, `patch:`, `del:` |
//! | Decoding | `ClockifyError::Decode` | `json unmarshal:` |
//!
//! # Example
//!
//! ```rust
//! use clockify::api::common::{ClockifyError, TransportError, Verb};
//!
//! fn describe(err: &ClockifyError) -> String {
//!     if err.is_not_found() {
//!         return "no such resource".to_string();
//!     }
//!     match err.status() {
//!         Some(code) => format!("server answered {code}"),
//!         None => err.to_string(),
//!     }
//! }
//!
//! let err = ClockifyError::transport(
//!     Verb::Get,
//!     TransportError::Status { status: 404, message: None },
//! );
//! assert_eq!(describe(&err), "no such resource");
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::ConfigError;

mod decode;

pub use decode::*;

/// Convenience alias used by every node operation.
pub type Result<T, E = ClockifyError> = std::result::Result<T, E>;

/// The HTTP verb a transport failure happened on.
///
/// Used as the stage label of [`ClockifyError::Transport`] so a failure reads
/// `get: http error: status code 404` rather than a bare status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Verb {
    /// Returns the short stage label for this verb.
    pub fn label(self) -> &'static str {
        match self {
            Self::Get => "get",
            Self::Post => "post",
            Self::Put => "put",
            Self::Patch => "patch",
            Self::Delete => "del",
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Unified error type for all Clockify API operations.
///
/// Every operation either returns a fully decoded value or exactly one of these
/// variants. Nothing is retried and nothing partial is returned.
///
/// # Variants
///
/// | Variant | Description |
/// |---------|-------------|
/// | `Build` | An option value could not be converted, or the endpoint is not a valid base URL |
/// | `Transport` | Network failure, cancellation, deadline, or non-success status |
/// | `Decode` | The response body did not match the expected resource shape |
/// | `Config` | The client could not be constructed from its configuration |
#[derive(Error, Debug)]
pub enum ClockifyError {
    /// The request could not be assembled.
    #[error("build request: {0}")]
    Build(#[from] BuildError),

    /// The request failed in transit or the server rejected it.
    ///
    /// # Parameters
    ///
    /// - `verb` - The HTTP verb of the failed call, used as the stage label
    /// - `source` - The underlying transport failure
    #[error("{verb}: {source}")]
    Transport {
        verb: Verb,
        #[source]
        source: TransportError,
    },

    /// The response body could not be decoded.
    #[error("json unmarshal: {0}")]
    Decode(#[from] DecodeError),

    /// The client configuration is unusable.
    #[error("config: {0}")]
    Config(#[from] ConfigError),
}

impl ClockifyError {
    /// Wraps a transport failure with the verb it happened on.
    pub fn transport(verb: Verb, source: TransportError) -> Self {
        Self::Transport { verb, source }
    }

    /// Returns the HTTP status code when the server answered with a non-success status.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Transport {
                source: TransportError::Status { status, .. },
                ..
            } => Some(*status),
            _ => None,
        }
    }

    /// Returns `true` when the server answered 404.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Returns `true` when the call was aborted through its cancellation token.
    pub fn is_cancelled(&self) -> bool {
        matches!(
            self,
            Self::Transport {
                source: TransportError::Cancelled,
                ..
            }
        )
    }

    /// Returns `true` when the call ran past its deadline.
    pub fn is_deadline_exceeded(&self) -> bool {
        matches!(
            self,
            Self::Transport {
                source: TransportError::DeadlineExceeded,
                ..
            }
        )
    }
}

/// Failures while turning a node call and its options into a request.
#[derive(Error, Debug)]
pub enum BuildError {
    /// An option carried a value that cannot be converted to its body field type.
    ///
    /// # Parameters
    ///
    /// - `key` - The query-encoding key of the option
    /// - `value` - The raw value that failed to convert
    /// - `expected` - The type the body field requires
    #[error("invalid value {value:?} for option `{key}`: expected {expected}")]
    InvalidOptionValue {
        key: &'static str,
        value: String,
        expected: &'static str,
    },

    /// A structured option payload could not be encoded as JSON.
    #[error("encode option `{key}`: {source}")]
    Encode {
        key: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// The configured endpoint cannot serve as a base for resource paths.
    #[error("invalid endpoint {endpoint:?}: {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },
}

/// Failures while executing a request.
#[derive(Error, Debug)]
pub enum TransportError {
    /// DNS, connection, TLS or body-read failure.
    #[error("do: {0}")]
    Network(#[from] reqwest::Error),

    /// The server answered with a status outside the operation's success set.
    ///
    /// # Parameters
    ///
    /// - `status` - The numeric HTTP status code
    /// - `message` - The API's error message, or the raw body when it is not JSON
    #[error("http error: status code {status}{}", describe_message(.message))]
    Status {
        status: u16,
        message: Option<String>,
    },

    /// The caller's cancellation token fired before or during the call.
    #[error("request cancelled")]
    Cancelled,

    /// The call's deadline passed before or during the call.
    #[error("context deadline exceeded")]
    DeadlineExceeded,

    /// The request body could not be serialized.
    #[error("json marshal: {0}")]
    Encode(#[source] serde_json::Error),
}

fn describe_message(message: &Option<String>) -> String {
    match message {
        Some(message) if !message.is_empty() => format!(": {message}"),
        _ => String::new(),
    }
}

/// Failures while decoding a response body.
#[derive(Error, Debug)]
pub enum DecodeError {
    /// A field held a value of the wrong type.
    ///
    /// # Parameters
    ///
    /// - `field` - JSON path of the offending field (e.g. `[2].hourlyRate.amount`)
    /// - `message` - What was found and what was expected
    #[error("unmarshal field `{field}`: {message}")]
    Field { field: String, message: String },

    /// The body is not well-formed JSON.
    #[error("{0}")]
    Syntax(#[source] serde_json::Error),
}

/// A monetary rate attached to a workspace, project, membership or task.
///
/// `amount` is expressed in the smallest currency unit (cents).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HourlyRate {
    #[serde(default)]
    pub amount: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

impl HourlyRate {
    /// Creates a rate without an explicit currency (the workspace currency applies).
    pub fn new(amount: i64) -> Self {
        Self {
            amount,
            currency: None,
        }
    }
}

/// The internal cost of an hour of work, mirroring [`HourlyRate`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostRate {
    #[serde(default)]
    pub amount: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

/// A user's or group's access to a workspace or project.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Membership {
    #[serde(default)]
    pub user_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hourly_rate: Option<HourlyRate>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost_rate: Option<CostRate>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_id: Option<String>,

    /// `WORKSPACE`, `PROJECT` or `USERGROUP`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub membership_type: Option<String>,

    /// `PENDING`, `ACTIVE`, `DECLINED` or `INACTIVE`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub membership_status: Option<String>,
}

/// Legacy project estimate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Estimate {
    /// ISO 8601 duration, e.g. `PT1H30M`.
    #[serde(default, deserialize_with = "nullable")]
    pub estimate: String,

    /// `AUTO` or `MANUAL`.
    #[serde(default, rename = "type", deserialize_with = "nullable")]
    pub kind: String,
}

/// Time-based project estimate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeEstimate {
    /// ISO 8601 duration, e.g. `PT40H`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimate: Option<String>,

    /// `AUTO` or `MANUAL`.
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    /// `MONTHLY` when the estimate resets every month.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reset_option: Option<String>,

    #[serde(default)]
    pub active: bool,

    #[serde(default)]
    pub include_non_billable: bool,
}

/// Budget-based project estimate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetEstimate {
    /// Budget in the smallest currency unit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimate: Option<u64>,

    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reset_option: Option<String>,

    #[serde(default)]
    pub active: bool,
}

/// A custom field value attached to a project.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomField {
    #[serde(default)]
    pub custom_field_id: String,

    #[serde(default)]
    pub name: String,

    #[serde(default, rename = "type")]
    pub kind: String,

    /// Free-form value; its shape depends on `kind`.
    #[serde(default)]
    pub value: serde_json::Value,

    #[serde(default)]
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_error_labels() {
        let err = ClockifyError::transport(
            Verb::Delete,
            TransportError::Status {
                status: 500,
                message: Some("boom".to_string()),
            },
        );
        assert_eq!(err.to_string(), "del: http error: status code 500: boom");
        assert_eq!(err.status(), Some(500));
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_status_without_message() {
        let err = ClockifyError::transport(
            Verb::Get,
            TransportError::Status {
                status: 404,
                message: None,
            },
        );
        assert_eq!(err.to_string(), "get: http error: status code 404");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_decode_error_names_field() {
        let err = ClockifyError::from(DecodeError::Field {
            field: "[0].name".to_string(),
            message: "invalid type: integer `5`, expected a string".to_string(),
        });
        assert_eq!(
            err.to_string(),
            "json unmarshal: unmarshal field `[0].name`: invalid type: integer `5`, expected a string"
        );
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_cancel_and_deadline_predicates() {
        let cancelled = ClockifyError::transport(Verb::Put, TransportError::Cancelled);
        assert!(cancelled.is_cancelled());
        assert!(!cancelled.is_deadline_exceeded());

        let expired = ClockifyError::transport(Verb::Patch, TransportError::DeadlineExceeded);
        assert!(expired.is_deadline_exceeded());
        assert_eq!(expired.to_string(), "patch: context deadline exceeded");
    }

    #[test]
    fn test_estimate_accepts_null_fields() {
        let estimate: Estimate =
            serde_json::from_str(r#"{"estimate": null, "type": null}"#).unwrap();
        assert_eq!(estimate, Estimate::default());
    }

    #[test]
    fn test_hourly_rate_omits_missing_currency() {
        let json = serde_json::to_value(HourlyRate::new(2500)).unwrap();
        assert_eq!(json, serde_json::json!({ "amount": 2500 }));
    }
}
