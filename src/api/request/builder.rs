//
//  clockify-rs
//  api/request/builder.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/18.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Request builder.
//!
//! Turns an [`Operation`] declaration, a resource URL, the operation's
//! required positional fields and the caller's options into a
//! [`RequestDescriptor`].
//!
//! # Algorithm
//!
//! 1. Seed a [`QueryParams`] collection with the operation's query defaults,
//!    its body defaults and the required fields.
//! 2. Apply each option in order (last write wins per key).
//! 3. If the operation has a body, move every declared body field out of the
//!    collection, converting it to its native JSON type.
//! 4. Keep only the query keys the operation consumes. Anything else written
//!    by an option is dropped and logged at debug level.
//!
//! Step 3 and 4 together guarantee that a body-only key never reaches the
//! query string of a mutation.

use std::collections::BTreeMap;

use serde_json::{Map, Value};
use url::Url;

use super::options::{ParamKey, RequestContext, RequestOption, ValueKind};
use crate::api::common::BuildError;

/// Query parameter multi-map keyed by query name.
///
/// Keys render in lexical order so the same inputs always produce the same
/// query string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    inner: BTreeMap<&'static str, Vec<String>>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the values stored under `key`.
    pub fn set(&mut self, key: ParamKey, values: Vec<String>) {
        self.inner.insert(key.query_name(), values);
    }

    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.inner.get(name).map(Vec::as_slice)
    }

    /// The last value stored under `name`.
    pub fn first(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(|values| values.last()).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.inner.contains_key(name)
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.inner.keys().copied()
    }

    /// Flattened `(name, value)` pairs, one per value.
    pub fn pairs(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.inner
            .iter()
            .flat_map(|(name, values)| values.iter().map(move |value| (*name, value.as_str())))
    }

    /// Renders the collection as an `application/x-www-form-urlencoded` string.
    pub fn to_query_string(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs())
            .finish()
    }

    fn take(&mut self, key: ParamKey) -> Option<Vec<String>> {
        self.inner.remove(key.query_name())
    }
}

/// Static description of one node operation.
///
/// Declared as constants next to each resource node, e.g. `CLIENT_ALL`.
#[derive(Debug, Clone, Copy)]
pub struct Operation {
    /// Name used in log events, e.g. `client.update`.
    pub name: &'static str,
    /// Query parameters sent unless an option overrides them.
    pub defaults: &'static [(ParamKey, &'static str)],
    /// Query keys this operation sends.
    pub query: &'static [ParamKey],
    /// Body field values used unless an option overrides them.
    pub body_defaults: &'static [(ParamKey, &'static str)],
    /// Body fields this operation accepts. `None` means no body at all.
    pub body: Option<&'static [ParamKey]>,
}

impl Operation {
    /// A listing: query defaults and filters, no body.
    pub const fn listing(
        name: &'static str,
        defaults: &'static [(ParamKey, &'static str)],
        query: &'static [ParamKey],
    ) -> Self {
        Self {
            name,
            defaults,
            query,
            body_defaults: &[],
            body: None,
        }
    }

    /// A single fetch or delete: no query, no body.
    pub const fn bare(name: &'static str) -> Self {
        Self {
            name,
            defaults: &[],
            query: &[],
            body_defaults: &[],
            body: None,
        }
    }

    /// A create: body fields only.
    pub const fn create(
        name: &'static str,
        body_defaults: &'static [(ParamKey, &'static str)],
        body: &'static [ParamKey],
    ) -> Self {
        Self {
            name,
            defaults: &[],
            query: &[],
            body_defaults,
            body: Some(body),
        }
    }

    /// An update: query flags plus body fields.
    pub const fn update(
        name: &'static str,
        defaults: &'static [(ParamKey, &'static str)],
        query: &'static [ParamKey],
        body: &'static [ParamKey],
    ) -> Self {
        Self {
            name,
            defaults,
            query,
            body_defaults: &[],
            body: Some(body),
        }
    }

    fn consumes(&self, name: &str) -> bool {
        self.query.iter().any(|key| key.query_name() == name)
    }
}

/// A fully resolved request, ready for the transport.
#[derive(Debug, Clone)]
pub struct RequestDescriptor {
    /// Resource URL without query string.
    pub url: Url,
    pub query: QueryParams,
    /// JSON body; `None` sends no body at all.
    pub body: Option<Value>,
    pub context: RequestContext,
}

impl RequestDescriptor {
    /// The URL with the query string attached.
    pub fn full_url(&self) -> Url {
        let mut url = self.url.clone();
        if !self.query.is_empty() {
            url.query_pairs_mut().extend_pairs(self.query.pairs());
        }
        url
    }
}

/// Builds the descriptor for one call.
///
/// `required` holds the operation's positional fields (e.g. the name of a new
/// client); they are applied before options.
///
/// # Errors
///
/// - [`BuildError::InvalidOptionValue`] when a body-bound value cannot be
///   converted to its field type
/// - [`BuildError::Encode`] when a structured option cannot be encoded
pub fn build(
    operation: &Operation,
    url: Url,
    required: &[(ParamKey, String)],
    options: &[RequestOption],
) -> Result<RequestDescriptor, BuildError> {
    let mut params = QueryParams::new();
    for (key, value) in operation.defaults.iter().chain(operation.body_defaults) {
        params.set(*key, vec![(*value).to_string()]);
    }
    for (key, value) in required {
        params.set(*key, vec![value.clone()]);
    }

    let mut context = RequestContext::background();
    for option in options {
        option.apply(&mut params, &mut context)?;
    }

    let body = match operation.body {
        Some(fields) => Some(extract_body(&mut params, fields)?),
        None => None,
    };

    let dropped: Vec<&'static str> = params
        .keys()
        .filter(|name| !operation.consumes(name))
        .collect();
    for name in dropped {
        tracing::debug!(operation = operation.name, key = name, "dropping unused option");
        params.inner.remove(name);
    }

    Ok(RequestDescriptor {
        url,
        query: params,
        body,
        context,
    })
}

/// Moves each declared body field out of `params` into a JSON object.
fn extract_body(params: &mut QueryParams, fields: &[ParamKey]) -> Result<Value, BuildError> {
    let mut body = Map::new();
    for &key in fields {
        let Some(field) = key.body_field() else {
            continue;
        };
        let Some(values) = params.take(key) else {
            continue;
        };
        body.insert(field.to_string(), convert(key, values)?);
    }
    Ok(Value::Object(body))
}

fn convert(key: ParamKey, mut values: Vec<String>) -> Result<Value, BuildError> {
    let kind = key.kind();
    if kind == ValueKind::StrList {
        return Ok(Value::Array(values.into_iter().map(Value::String).collect()));
    }

    let raw = values.pop().unwrap_or_default();
    let invalid = |raw: String| BuildError::InvalidOptionValue {
        key: key.query_name(),
        value: raw,
        expected: kind.describe(),
    };

    match kind {
        ValueKind::Bool => raw.parse::<bool>().map(Value::Bool).map_err(|_| invalid(raw)),
        ValueKind::Int => raw.parse::<i64>().map(Value::from).map_err(|_| invalid(raw)),
        ValueKind::Str => Ok(Value::String(raw)),
        ValueKind::Json => serde_json::from_str(&raw).map_err(|_| invalid(raw)),
        ValueKind::StrList => Ok(Value::Array(vec![Value::String(raw)])),
    }
}

/// Joins path segments onto the base endpoint, percent-encoding each segment.
pub(crate) fn resource_url(base: &str, segments: &[&str]) -> Result<Url, BuildError> {
    let invalid = |reason: String| BuildError::InvalidEndpoint {
        endpoint: base.to_string(),
        reason,
    };

    let mut url = Url::parse(base).map_err(|e| invalid(e.to_string()))?;
    url.path_segments_mut()
        .map_err(|()| invalid("cannot be a base URL".to_string()))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::common::HourlyRate;

    const LISTING: Operation = Operation::listing(
        "thing.all",
        &[(ParamKey::Page, "1"), (ParamKey::PageSize, "50")],
        &[ParamKey::Page, ParamKey::PageSize, ParamKey::Name],
    );

    const UPDATE: Operation = Operation::update(
        "thing.update",
        &[(ParamKey::ArchiveProjects, "false")],
        &[ParamKey::ArchiveProjects],
        &[ParamKey::Name, ParamKey::Archived, ParamKey::HourlyRate],
    );

    fn url() -> Url {
        resource_url("http://localhost:8080/api/v1", &["things"]).unwrap()
    }

    #[test]
    fn test_listing_without_options_sends_defaults() {
        let request = build(&LISTING, url(), &[], &[]).unwrap();
        assert_eq!(request.query.to_query_string(), "page=1&page-size=50");
        assert!(request.body.is_none());
    }

    #[test]
    fn test_option_overrides_default() {
        let request = build(
            &LISTING,
            url(),
            &[],
            &[RequestOption::Page(4), RequestOption::Page(5)],
        )
        .unwrap();
        assert_eq!(request.query.first("page"), Some("5"));
    }

    #[test]
    fn test_unconsumed_keys_are_dropped() {
        let request = build(
            &LISTING,
            url(),
            &[],
            &[RequestOption::Color("#fff".to_string()), RequestOption::Hydrated(true)],
        )
        .unwrap();
        assert!(!request.query.contains("color"));
        assert!(!request.query.contains("hydrated"));
    }

    #[test]
    fn test_update_routes_fields_into_body() {
        let request = build(
            &UPDATE,
            url(),
            &[],
            &[
                RequestOption::Name("Renamed".to_string()),
                RequestOption::ArchiveProjects(true),
                RequestOption::Archived(true),
                RequestOption::HourlyRate(HourlyRate::new(100)),
            ],
        )
        .unwrap();

        assert_eq!(request.query.to_query_string(), "archive-projects=true");
        assert_eq!(
            request.body,
            Some(serde_json::json!({
                "name": "Renamed",
                "archived": true,
                "hourlyRate": { "amount": 100 }
            }))
        );
    }

    #[test]
    fn test_update_without_fields_sends_empty_object() {
        let request = build(&UPDATE, url(), &[], &[]).unwrap();
        assert_eq!(request.body, Some(serde_json::json!({})));
        assert_eq!(request.query.to_query_string(), "archive-projects=false");
    }

    #[test]
    fn test_required_fields_and_body_defaults() {
        const CREATE: Operation = Operation::create(
            "thing.add",
            &[(ParamKey::Billable, "true")],
            &[ParamKey::Name, ParamKey::Billable, ParamKey::AssigneeIds],
        );
        let request = build(
            &CREATE,
            url(),
            &[(ParamKey::Name, "New thing".to_string())],
            &[RequestOption::AssigneeIds(vec!["u1".to_string(), "u2".to_string()])],
        )
        .unwrap();

        assert!(request.query.is_empty());
        assert_eq!(
            request.body,
            Some(serde_json::json!({
                "name": "New thing",
                "billable": true,
                "assigneeIds": ["u1", "u2"]
            }))
        );
    }

    #[test]
    fn test_invalid_value_is_fatal() {
        let err = convert(ParamKey::Billable, vec!["maybe".to_string()]).unwrap_err();
        assert!(matches!(
            err,
            BuildError::InvalidOptionValue { key: "billable", expected: "a boolean", .. }
        ));

        let err = convert(ParamKey::HourlyRate, vec!["{not json".to_string()]).unwrap_err();
        assert!(matches!(err, BuildError::InvalidOptionValue { key: "hourly-rate", .. }));
    }

    #[test]
    fn test_int_conversion() {
        assert_eq!(
            convert(ParamKey::Page, vec!["12".to_string()]).unwrap(),
            serde_json::json!(12)
        );
    }

    #[test]
    fn test_resource_url_encodes_segments() {
        let url = resource_url("https://api.example.com/api/v1/", &["workspaces", "a b"]).unwrap();
        assert_eq!(url.as_str(), "https://api.example.com/api/v1/workspaces/a%20b");
    }

    #[test]
    fn test_resource_url_rejects_non_base() {
        let err = resource_url("mailto:someone@example.com", &["x"]).unwrap_err();
        assert!(matches!(err, BuildError::InvalidEndpoint { .. }));
    }

    #[test]
    fn test_full_url_appends_query() {
        let request = build(&LISTING, url(), &[], &[RequestOption::Name("a&b".to_string())]).unwrap();
        assert_eq!(
            request.full_url().as_str(),
            "http://localhost:8080/api/v1/things?name=a%26b&page=1&page-size=50"
        );
    }
}
