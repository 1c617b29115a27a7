use std::path::PathBuf;

/// An environment inspection operation, independent of any CLI framework.
/// The CLI layer converts parsed clap args into this.
#[derive(Debug, Clone, PartialEq)]
pub enum EnvAction {
    /// Print every resolved setting.
    List,
    /// Print one setting by its dotted wire key, e.g. `api.authzURL`.
    Get { key: String },
    /// Emit the compiled-default document, to stdout or a file.
    Gen { output: Option<PathBuf> },
}
