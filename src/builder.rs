use std::path::PathBuf;

use serde_json::Value;
use tracing::debug;

use crate::error::EnvbaseError;
use crate::ops::{self, EnvReport};
use crate::platform::Platform;
use crate::resolve::{self, EnvDocument, ResolveInput};
use crate::types::EnvAction;

impl Platform {
    /// Entry point for loading the platform record.
    pub fn builder() -> PlatformBuilder {
        PlatformBuilder::new()
    }
}

/// Builder for configuring and resolving the platform record.
///
/// Controls two orthogonal axes:
///
/// - **Source**: [`env_json()`](Self::env_json) /
///   [`env_file()`](Self::env_file) / [`env_value()`](Self::env_value) —
///   where the injected document comes from. Without one, the compiled
///   defaults become the active record.
/// - **Policy**: [`strict()`](Self::strict) — whether unknown keys in the
///   document fail the load or are merely logged.
pub struct PlatformBuilder {
    source: EnvSource,
    strict: bool,
}

enum EnvSource {
    None,
    Inline(String),
    File(PathBuf),
    Value(Value),
}

impl PlatformBuilder {
    fn new() -> Self {
        Self {
            source: EnvSource::None,
            strict: false,
        }
    }

    /// Use a raw JSON document as the injected environment.
    pub fn env_json(mut self, content: &str) -> Self {
        self.source = EnvSource::Inline(content.to_string());
        self
    }

    /// Read the injected environment from a JSON file.
    ///
    /// A missing file is not an error: the deployment simply injected
    /// nothing, and the compiled defaults become the active record.
    pub fn env_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.source = EnvSource::File(path.into());
        self
    }

    /// Use a document the host already parsed into a [`serde_json::Value`].
    pub fn env_value(mut self, value: Value) -> Self {
        self.source = EnvSource::Value(value);
        self
    }

    /// Enable or disable strict mode (default: `false`).
    /// In strict mode, unknown keys in the document produce errors; in
    /// lenient mode they are logged and dropped.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Build the `ResolveInput` from current builder state. All I/O
    /// happens here; the resolve step is pure.
    fn build_input(&self) -> Result<ResolveInput, EnvbaseError> {
        let document = match &self.source {
            EnvSource::None => {
                debug!("no environment document configured; using compiled defaults");
                None
            }
            EnvSource::Inline(content) => Some(EnvDocument::Json {
                origin: "inline environment document".to_string(),
                content: content.clone(),
            }),
            EnvSource::File(path) => match std::fs::read_to_string(path) {
                Ok(content) => Some(EnvDocument::Json {
                    origin: path.display().to_string(),
                    content,
                }),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                    debug!(
                        path = %path.display(),
                        "environment document missing; using compiled defaults"
                    );
                    None
                }
                Err(e) => {
                    return Err(EnvbaseError::IoError {
                        path: path.clone(),
                        source: e,
                    });
                }
            },
            EnvSource::Value(value) => Some(EnvDocument::Value {
                origin: "pre-parsed environment document".to_string(),
                value: value.clone(),
            }),
        };

        Ok(ResolveInput {
            document,
            strict: self.strict,
        })
    }

    /// Load and resolve the platform record.
    pub fn load(self) -> Result<Platform, EnvbaseError> {
        let input = self.build_input()?;
        resolve::resolve(input)
    }

    /// Handle an `EnvAction` and print the result to stdout.
    pub fn handle_and_print(self, action: &EnvAction) -> Result<(), EnvbaseError> {
        let result = self.handle(action)?;
        print!("{result}");
        Ok(())
    }

    /// Handle an `EnvAction` (list / get / gen).
    pub fn handle(self, action: &EnvAction) -> Result<EnvReport, EnvbaseError> {
        match action {
            EnvAction::List => {
                let platform = self.load()?;
                Ok(ops::list_settings(&platform))
            }
            EnvAction::Get { key } => {
                let platform = self.load()?;
                ops::get_setting(&platform, key)
            }
            EnvAction::Gen { output } => {
                let template = ops::generate_template();
                match output {
                    Some(path) => {
                        if let Some(parent) = path.parent() {
                            std::fs::create_dir_all(parent).map_err(|e| EnvbaseError::IoError {
                                path: parent.to_path_buf(),
                                source: e,
                            })?;
                        }
                        std::fs::write(path, &template).map_err(|e| EnvbaseError::IoError {
                            path: path.clone(),
                            source: e,
                        })?;
                        Ok(EnvReport::TemplateWritten { path: path.clone() })
                    }
                    None => Ok(EnvReport::Template(template)),
                }
            }
        }
    }
}
