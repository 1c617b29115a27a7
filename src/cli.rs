//! Clap adapter for envbase.
//!
//! This module is the **optional integration layer** between envbase's
//! framework-agnostic core and the [clap](https://docs.rs/clap) CLI
//! parser. It is compiled only when the `clap` Cargo feature is enabled
//! (on by default).
//!
//! The module provides two clap derive types — [`EnvArgs`] and
//! [`EnvSubcommand`] — that you can embed directly into your clap
//! `#[derive(Parser)]` struct to get `env list|get|gen` subcommands with
//! no boilerplate.
//!
//! The only bridge to the core is [`EnvArgs::into_action()`], which
//! converts clap-parsed arguments into an [`EnvAction`](crate::EnvAction).
//! From there, all logic flows through the clap-free
//! [`PlatformBuilder::handle()`](crate::PlatformBuilder::handle) API.
//!
//! If you use a different CLI parser (or no CLI at all), you can skip this
//! module entirely and construct [`EnvAction`](crate::EnvAction) values
//! directly.

use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::types::EnvAction;

/// Clap-derived args for the `env` subcommand group.
///
/// Embed this into your app's clap derive:
/// ```ignore
/// #[derive(Parser)]
/// struct Cli {
///     #[command(subcommand)]
///     command: Commands,
/// }
///
/// #[derive(Subcommand)]
/// enum Commands {
///     Env(EnvArgs),
/// }
/// ```
#[derive(Debug, Args)]
pub struct EnvArgs {
    #[command(subcommand)]
    pub action: Option<EnvSubcommand>,
}

/// Available env subcommands.
#[derive(Debug, Subcommand)]
pub enum EnvSubcommand {
    /// Show every resolved setting as wire-key/value pairs.
    List,
    /// Show the resolved value for one setting.
    Get {
        /// Dotted wire key (e.g. "api.authzURL").
        key: String,
    },
    /// Generate a compiled-default environment document.
    Gen {
        /// Write to a file instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

impl EnvArgs {
    /// Convert clap-parsed args into a framework-agnostic `EnvAction`.
    ///
    /// Bare `env` (no subcommand) and explicit `env list` both map to
    /// `EnvAction::List`.
    pub fn into_action(self) -> EnvAction {
        match self.action {
            None | Some(EnvSubcommand::List) => EnvAction::List,
            Some(EnvSubcommand::Get { key }) => EnvAction::Get { key },
            Some(EnvSubcommand::Gen { output }) => EnvAction::Gen { output },
        }
    }
}
