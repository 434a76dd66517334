//
//  clockify-rs
//  api/client.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/18.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # HTTP Transport for the Clockify API
//!
//! This module executes [`RequestDescriptor`]s. It owns the single shared
//! `reqwest::Client` so connections are reused across calls.
//!
//! ## Features
//!
//! - One function per verb: [`get`](HttpTransport::get), [`post`](HttpTransport::post),
//!   [`put`](HttpTransport::put), [`patch`](HttpTransport::patch), [`delete`](HttpTransport::delete)
//! - API key and JSON content-type headers on every call
//! - Cooperative cancellation and deadlines from the descriptor's context
//! - Success-status enforcement with the API's error message extracted from the body

use std::future::Future;

use bytes::Bytes;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method, StatusCode};
use tracing::{debug, warn};

use crate::api::common::{ClockifyError, TransportError, Verb};
use crate::api::request::{RequestContext, RequestDescriptor};
use crate::auth::ApiKey;

/// Parses a Clockify error response and builds a status error from it.
///
/// Clockify returns errors in the format:
/// ```json
/// {"message": "Client doesn't belong to Workspace", "code": 501}
/// ```
///
/// A body that is not JSON is used as the message after trimming. JSON
/// without a `message` field, such as a resource returned under an unexpected
/// status, and an empty body both yield no message.
///
/// # Example
///
/// ```rust
/// use clockify::api::client::format_api_error;
/// use clockify::api::common::TransportError;
/// use reqwest::StatusCode;
///
/// let err = format_api_error(StatusCode::BAD_REQUEST, br#"{"message": "Invalid name", "code": 501}"#);
/// assert!(matches!(
///     err,
///     TransportError::Status { status: 400, message: Some(ref m) } if m == "Invalid name"
/// ));
/// ```
pub fn format_api_error(status: StatusCode, body: &[u8]) -> TransportError {
    let message = match serde_json::from_slice::<serde_json::Value>(body) {
        Ok(json) => json
            .get("message")
            .and_then(|m| m.as_str())
            .map(str::to_string),
        Err(_) => {
            let raw = String::from_utf8_lossy(body).trim().to_string();
            (!raw.is_empty()).then_some(raw)
        }
    };

    TransportError::Status {
        status: status.as_u16(),
        message,
    }
}

/// Executes requests against the Clockify API.
///
/// Cloning is cheap: the underlying `reqwest::Client` is reference counted, so
/// every resource node shares one connection pool.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: Client,
    api_key: ApiKey,
}

impl HttpTransport {
    /// Creates a transport with the default `clockify-rs/<version>` user agent.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialised (e.g. the TLS
    /// backend fails to load).
    pub fn new(api_key: ApiKey) -> Result<Self, reqwest::Error> {
        Self::with_user_agent(api_key, &default_user_agent())
    }

    pub fn with_user_agent(api_key: ApiKey, user_agent: &str) -> Result<Self, reqwest::Error> {
        Ok(Self {
            http: Client::builder().user_agent(user_agent).build()?,
            api_key,
        })
    }

    /// Sends a GET request; expects 200.
    pub async fn get(&self, request: RequestDescriptor) -> Result<Bytes, TransportError> {
        self.execute(Method::GET, &[StatusCode::OK], request).await
    }

    /// Sends a POST request; expects 200 or 201.
    pub async fn post(&self, request: RequestDescriptor) -> Result<Bytes, TransportError> {
        self.execute(Method::POST, &[StatusCode::OK, StatusCode::CREATED], request)
            .await
    }

    /// Sends a PUT request; expects 200.
    pub async fn put(&self, request: RequestDescriptor) -> Result<Bytes, TransportError> {
        self.execute(Method::PUT, &[StatusCode::OK], request).await
    }

    /// Sends a PATCH request; expects 200.
    pub async fn patch(&self, request: RequestDescriptor) -> Result<Bytes, TransportError> {
        self.execute(Method::PATCH, &[StatusCode::OK], request).await
    }

    /// Sends a DELETE request; expects 200.
    pub async fn delete(&self, request: RequestDescriptor) -> Result<Bytes, TransportError> {
        self.execute(Method::DELETE, &[StatusCode::OK], request).await
    }

    /// Dispatches on `verb` and labels any failure with it.
    pub(crate) async fn send(
        &self,
        verb: Verb,
        request: RequestDescriptor,
    ) -> Result<Bytes, ClockifyError> {
        let result = match verb {
            Verb::Get => self.get(request).await,
            Verb::Post => self.post(request).await,
            Verb::Put => self.put(request).await,
            Verb::Patch => self.patch(request).await,
            Verb::Delete => self.delete(request).await,
        };
        result.map_err(|source| ClockifyError::transport(verb, source))
    }

    async fn execute(
        &self,
        method: Method,
        expected: &[StatusCode],
        request: RequestDescriptor,
    ) -> Result<Bytes, TransportError> {
        if request.context.is_cancelled() {
            return Err(TransportError::Cancelled);
        }
        if request.context.is_expired() {
            return Err(TransportError::DeadlineExceeded);
        }

        let url = request.full_url();
        let mut builder = self
            .http
            .request(method.clone(), url.clone())
            .header(CONTENT_TYPE, "application/json");
        builder = self.api_key.apply_to_request(builder);

        if let Some(body) = &request.body {
            builder = builder.body(serde_json::to_vec(body).map_err(TransportError::Encode)?);
        }

        debug!(%method, %url, query_keys = request.query.len(), "sending request");

        let exchange = async {
            let response = builder.send().await?;
            let status = response.status();
            let body = response.bytes().await?;
            Ok::<_, TransportError>((status, body))
        };
        let (status, body) = with_context(&request.context, exchange).await?;

        if !expected.contains(&status) {
            warn!(%method, %url, %status, "unexpected response status");
            return Err(format_api_error(status, &body));
        }

        debug!(%status, bytes = body.len(), "received response");
        Ok(body)
    }
}

/// Runs `future` until it completes, the context is cancelled, or its deadline passes.
async fn with_context<T, F>(context: &RequestContext, future: F) -> Result<T, TransportError>
where
    F: Future<Output = Result<T, TransportError>>,
{
    let cancelled = async {
        match context.cancellation() {
            Some(token) => token.cancelled().await,
            None => std::future::pending::<()>().await,
        }
    };
    let expired = async {
        match context.deadline() {
            Some(deadline) => {
                tokio::time::sleep_until(tokio::time::Instant::from_std(deadline)).await
            }
            None => std::future::pending::<()>().await,
        }
    };

    tokio::select! {
        result = future => result,
        () = cancelled => Err(TransportError::Cancelled),
        () = expired => Err(TransportError::DeadlineExceeded),
    }
}

fn default_user_agent() -> String {
    format!("clockify-rs/{}", crate::VERSION)
}
