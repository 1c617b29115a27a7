//! Core resolution pipeline: parse the injected document, apply the
//! unknown-key policy, and adopt the result as the active record.
//!
//! Operates on pre-loaded data (`ResolveInput`) with no I/O, making the
//! full pipeline testable with synthetic inputs. The builder handles
//! reading the document from disk. Steps:
//!
//! 1. Parse the document (if any), capturing unknown keys
//! 2. Strict mode: fail on unknown keys; lenient mode: log and continue
//! 3. Shallow-adopt the document (or compiled defaults) as the active record

use serde_json::Value;
use tracing::warn;

use crate::env::Env;
use crate::error::EnvbaseError;
use crate::platform::Platform;
use crate::validate;

/// A pre-loaded environment document, tagged with an origin label used in
/// error messages.
#[derive(Debug, Clone)]
pub enum EnvDocument {
    /// Raw JSON text.
    Json { origin: String, content: String },
    /// A document the host already parsed.
    Value { origin: String, value: Value },
}

/// All pre-loaded data needed to resolve the platform record. No I/O
/// happens here.
#[derive(Debug, Clone)]
pub struct ResolveInput {
    /// The injected document. `None` means the deployment provided nothing
    /// and the compiled defaults become the active record.
    pub document: Option<EnvDocument>,
    /// Whether to reject unknown keys instead of logging them.
    pub strict: bool,
}

/// Resolve the active platform record from pre-loaded inputs.
pub fn resolve(input: ResolveInput) -> Result<Platform, EnvbaseError> {
    let overlay = match input.document {
        Some(document) => Some(parse_overlay(document, input.strict)?),
        None => None,
    };
    Ok(Platform::resolve(overlay))
}

fn parse_overlay(document: EnvDocument, strict: bool) -> Result<Env, EnvbaseError> {
    let (env, unknown, origin) = match document {
        EnvDocument::Json { origin, content } => {
            let (env, unknown) = validate::parse_document(&content, &origin)?;
            (env, unknown, origin)
        }
        EnvDocument::Value { origin, value } => {
            let (env, unknown) = validate::parse_value(value, &origin)?;
            (env, unknown, origin)
        }
    };

    if !unknown.is_empty() {
        if strict {
            return Err(validate::unknown_keys_error(unknown, &origin));
        }
        warn!(origin = %origin, keys = ?unknown, "ignoring unknown environment keys");
    }

    Ok(env)
}
