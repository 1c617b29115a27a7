use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EnvbaseError {
    #[error("Unknown key '{key}' in {origin}")]
    UnknownKey { key: String, origin: String },

    #[error("Unknown keys in environment document")]
    UnknownKeys(Vec<EnvbaseError>),

    #[error("Failed to parse {origin}: {source}")]
    ParseError {
        origin: String,
        source: serde_json::Error,
    },

    #[error("Failed to read {path}: {source}")]
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Setting not found: {0}")]
    KeyNotFound(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_key_formats_correctly() {
        let err = EnvbaseError::UnknownKey {
            key: "sentryEnabld".into(),
            origin: "/srv/frontend/env.json".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("sentryEnabld"));
        assert!(msg.contains("env.json"));
    }

    #[test]
    fn key_not_found_formats() {
        let err = EnvbaseError::KeyNotFound("api.authzURL".into());
        assert!(err.to_string().contains("api.authzURL"));
    }

    #[test]
    fn parse_error_names_origin() {
        let source = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err = EnvbaseError::ParseError {
            origin: "inline environment document".into(),
            source,
        };
        assert!(err.to_string().contains("inline environment document"));
    }
}
