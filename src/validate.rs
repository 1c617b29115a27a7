//! Environment document parsing with unknown-key capture.
//!
//! Uses `serde_ignored` to deserialize into [`Env`] (all-optional fields)
//! while collecting every key the record doesn't consume, in one pass.
//! Strict mode turns the collected keys into errors; lenient mode logs
//! them. The decision lives in the resolve pipeline, not here.

use serde_json::Value;

use crate::env::Env;
use crate::error::EnvbaseError;

/// Parse a JSON environment document, returning the record together with
/// the dotted paths of any keys it ignored (for example `api.rpcURL`).
///
/// `origin` is a human-readable label for error messages: a file path or
/// a phrase like `inline environment document`.
pub fn parse_document(content: &str, origin: &str) -> Result<(Env, Vec<String>), EnvbaseError> {
    let mut unknown_keys: Vec<String> = Vec::new();

    let mut deserializer = serde_json::Deserializer::from_str(content);
    let env: Env = serde_ignored::deserialize(&mut deserializer, |ignored_path| {
        unknown_keys.push(ignored_path.to_string());
    })
    .map_err(|e| EnvbaseError::ParseError {
        origin: origin.to_string(),
        source: e,
    })?;
    deserializer.end().map_err(|e| EnvbaseError::ParseError {
        origin: origin.to_string(),
        source: e,
    })?;

    Ok((env, unknown_keys))
}

/// Same as [`parse_document`] for a document the host already parsed into
/// a [`serde_json::Value`].
pub fn parse_value(value: Value, origin: &str) -> Result<(Env, Vec<String>), EnvbaseError> {
    let mut unknown_keys: Vec<String> = Vec::new();

    let env: Env = serde_ignored::deserialize(value, |ignored_path| {
        unknown_keys.push(ignored_path.to_string());
    })
    .map_err(|e| EnvbaseError::ParseError {
        origin: origin.to_string(),
        source: e,
    })?;

    Ok((env, unknown_keys))
}

/// Turn collected unknown keys into the strict-mode error.
pub fn unknown_keys_error(keys: Vec<String>, origin: &str) -> EnvbaseError {
    let errors = keys
        .into_iter()
        .map(|key| EnvbaseError::UnknownKey {
            key,
            origin: origin.to_string(),
        })
        .collect();
    EnvbaseError::UnknownKeys(errors)
}
