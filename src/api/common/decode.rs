//
//  clockify-rs
//  api/common/decode.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/18.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Response decoders.
//!
//! Raw response bytes are turned into resource values here. Deserialization is
//! tracked with `serde_path_to_error` so that a type mismatch names the field
//! that caused it instead of only a line and column.
//!
//! | Function | Shape | Empty body handling |
//! |----------|-------|---------------------|
//! | [`decode_one`] | single resource | error |
//! | [`decode_list`] | list of resources | `[]` and `null` both yield an empty `Vec` |

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::error::Category;

use super::DecodeError;

/// Decodes a single resource.
///
/// # Errors
///
/// - [`DecodeError::Field`] when a field has the wrong type, naming the field's JSON path
/// - [`DecodeError::Syntax`] when the body is not valid JSON
///
/// # Example
///
/// ```rust
/// use clockify::api::common::{decode_one, DecodeError};
/// use clockify::api::resources::Client;
///
/// let client: Client = decode_one(br#"{"id": "c1", "name": "Acme"}"#).unwrap();
/// assert_eq!(client.name, "Acme");
///
/// let err = decode_one::<Client>(br#"{"id": "c1", "name": 5}"#).unwrap_err();
/// assert!(matches!(err, DecodeError::Field { ref field, .. } if field == "name"));
/// ```
pub fn decode_one<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, DecodeError> {
    let deserializer = &mut serde_json::Deserializer::from_slice(bytes);
    serde_path_to_error::deserialize(deserializer).map_err(into_decode_error)
}

/// Decodes a list of resources, never yielding an absent collection.
pub fn decode_list<T: DeserializeOwned>(bytes: &[u8]) -> Result<Vec<T>, DecodeError> {
    let list: Option<Vec<T>> = decode_one(bytes)?;
    Ok(list.unwrap_or_default())
}

fn into_decode_error(err: serde_path_to_error::Error<serde_json::Error>) -> DecodeError {
    let field = err.path().to_string();
    let inner = err.into_inner();
    match inner.classify() {
        Category::Data => DecodeError::Field {
            field,
            message: strip_position(&inner.to_string()),
        },
        Category::Io | Category::Syntax | Category::Eof => DecodeError::Syntax(inner),
    }
}

/// Drops serde_json's trailing ` at line X column Y`; the field path is more useful.
fn strip_position(message: &str) -> String {
    match message.rfind(" at line ") {
        Some(index) => message[..index].to_string(),
        None => message.to_string(),
    }
}

/// Treats an explicit JSON `null` the same as a missing field.
///
/// The API sends `null` for empty collections and unset strings on some
/// endpoints; pair with `#[serde(default)]`.
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Sample {
        id: String,
        #[serde(default)]
        count: u32,
        #[serde(default, deserialize_with = "nullable")]
        tags: Vec<String>,
    }

    #[test]
    fn test_decode_empty_list() {
        let items: Vec<Sample> = decode_list(b"[]").unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn test_decode_null_list() {
        let items: Vec<Sample> = decode_list(b"null").unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn test_decode_list_preserves_order() {
        let items: Vec<Sample> =
            decode_list(br#"[{"id": "a"}, {"id": "b", "count": 2}]"#).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id, "a");
        assert_eq!(items[1].count, 2);
    }

    #[test]
    fn test_type_mismatch_names_field() {
        let err = decode_list::<Sample>(br#"[{"id": "a"}, {"id": "b", "count": "many"}]"#)
            .unwrap_err();
        match err {
            DecodeError::Field { field, message } => {
                assert_eq!(field, "[1].count");
                assert!(message.contains("expected u32"), "{message}");
                assert!(!message.contains("line"), "{message}");
            }
            other => panic!("expected field error, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_json_is_syntax_error() {
        let err = decode_one::<Sample>(b"{\"id\": ").unwrap_err();
        assert!(matches!(err, DecodeError::Syntax(_)));
    }

    #[test]
    fn test_nullable_collection() {
        let sample: Sample = decode_one(br#"{"id": "a", "tags": null}"#).unwrap();
        assert!(sample.tags.is_empty());
    }
}
