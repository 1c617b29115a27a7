//! Runtime environment resolution and sign-in flow for exchange web
//! front-ends. Point at the deployment's injected document and go.
//!
//! Envbase turns the JSON record a hosting deployment injects at startup
//! into a typed, immutable [`Platform`] whose accessors always answer,
//! plus the framework-agnostic pieces of the first screen that record
//! feeds: the sign-in form controller and the locale string tables.
//!
//! ```ignore
//! let platform = Platform::builder()
//!     .env_file("/srv/frontend/env.json")
//!     .load()?;
//!
//! let ws = platform.downstream_url();
//! let langs = platform.languages();
//! ```
//!
//! That single call reads the document (a missing file just means the
//! deployment injected nothing), applies the unknown-key policy, adopts
//! the record, and hands you the resolved platform.
//!
//! # Why envbase
//!
//! Exchange front-ends are deployed as static bundles: one build, many
//! deployments, each injecting its own endpoints and feature switches at
//! startup. The setting surface is wide (endpoints, intervals, limits,
//! feature flags, language lists) and every consumer needs a usable value
//! even when the deployment's document is sparse, stale, or slightly
//! wrong. Envbase centralizes that tolerance in one resolution step and
//! one accessor surface, so the rest of the application never looks at
//! the raw document.
//!
//! # Adoption semantics
//!
//! The injected document is adopted **wholesale and shallowly**. It is
//! not merged key-by-key over the compiled defaults:
//!
//! ```text
//! document injected?   active record          absent field resolves to
//! ------------------   --------------------   ------------------------
//! no                   compiled defaults      the compiled value
//! yes                  the document itself    the accessor fallback
//! ```
//!
//! The practical consequence: a deployment that injects `{"finex": true}`
//! gets the *accessor fallback* for every other setting, not the compiled
//! default. Several fallbacks deliberately differ from the compiled
//! values (auto-logout is `"15"` minutes against a compiled `"3600"`,
//! alert display `"10000"` ms against `"5000"`), so the two columns above
//! are genuinely different records.
//!
//! Two fixups run at adoption: the `api` and `storage` blocks are
//! materialized when absent, and an empty IEO endpoint becomes the path
//! default `/api/v2/ieoURL`.
//!
//! # Accessor fallbacks
//!
//! Every accessor is total. String settings treat the empty string as
//! absent, numeric limits treat zero as absent, and the reconnect period
//! swallows unparseable values:
//!
//! | Setting | Absent or falsy resolves to |
//! |---------|------------------------------|
//! | `minutesUntilAutoLogout` | `"15"` |
//! | `msAlertDisplayTime` | `"10000"` |
//! | `rangerReconnectPeriod` | `1` (also on parse failure) |
//! | `storage.defaultStorageLimit` | `50` |
//! | `storage.orderBookSideLimit` | `25` |
//! | `languages` | `["pt"]` (even when present but empty) |
//! | `kycSteps` | default steps only when wholly absent |
//!
//! The `languages`/`kycSteps` asymmetry is load-bearing: a deployment can
//! turn KYC off by injecting an empty list, while an empty language list
//! still yields a working interface.
//!
//! # Strict mode
//!
//! Strict mode is **off by default**: this record rides along with
//! whatever the deployment tooling produces, so unknown keys are logged
//! and dropped rather than fatal. Turn it on with
//! [`.strict(true)`](PlatformBuilder::strict) in environments where the
//! document is under your control and a typo should fail the load:
//!
//! ```text
//! Unknown key 'sentryEnabld' in /srv/frontend/env.json
//! ```
//!
//! # Inspection operations
//!
//! [`EnvAction`] covers the operational surface: `List` prints every
//! setting post-fallback (what the application will actually use), `Get`
//! looks one up by its dotted wire key (`api.authzURL`,
//! `storage.defaultStorageLimit`), and `Gen` emits the compiled-default
//! document as a starting point for a new deployment. All three flow
//! through [`PlatformBuilder::handle`] and return an [`EnvReport`] for
//! display.
//!
//! For [clap](https://docs.rs/clap) users, the `cli` module (behind the
//! `clap` Cargo feature, on by default) provides drop-in derive types
//! that give your operational binary `env list|get|gen` subcommands. To
//! use envbase without clap:
//!
//! ```toml
//! envbase = { version = "...", default-features = false }
//! ```
//!
//! # Sign-in controller
//!
//! The [`LoginForm`] controller owns the sign-in protocol and nothing
//! else. The embedding container keeps the field state ([`LoginValues`])
//! and the business effects ([`LoginActions`]); the controller decides
//! validity, what a submit does (invalid forms get flagged, valid forms
//! clear stale errors and hand off), and the Enter-key contract.
//! [`link_layout`] captures the one mobile/desktop layout branch, and the
//! label helpers carry the platform's default wording. Rendering stays
//! entirely with the host.
//!
//! # Locale tables
//!
//! The [`i18n`] module holds the flat dotted-key message tables the host
//! formatter consumes, Portuguese first. Lookup is by locale code and
//! key; misses return `None` so the host can run its own fallback chain.
//!
//! # Error handling
//!
//! All fallible operations return [`EnvbaseError`]. Errors are designed
//! to be user-facing: unknown keys name the offending key and the
//! document it came from, parse failures carry the underlying JSON error,
//! and lookups echo the key that missed. See the [`error`] module for
//! the full set.

pub mod error;
pub mod i18n;
pub mod types;

mod builder;
#[cfg(feature = "clap")]
mod cli;
mod email;
mod env;
mod login;
pub(crate) mod merge;
mod ops;
mod platform;
mod resolve;
mod validate;

#[cfg(test)]
mod fixtures;

pub use builder::PlatformBuilder;
#[cfg(feature = "clap")]
pub use cli::{EnvArgs, EnvSubcommand};
pub use email::is_valid_email;
pub use env::{ApiEndpoints, Env, StorageLimits};
pub use error::EnvbaseError;
pub use login::{
    LinkLayout, LoginActions, LoginField, LoginForm, LoginValues, email_label, link_layout,
    password_label, submit_label,
};
pub use ops::EnvReport;
pub use platform::{
    ALERT_DISPLAY_TIME_FALLBACK, AUTO_LOGOUT_MINUTES_FALLBACK, BALANCES_FETCH_INTERVAL_FALLBACK,
    DEFAULT_KYC_STEPS, DEFAULT_LANGUAGE, ORDER_BOOK_DEFAULT_SIDE_LIMIT,
    PASSWORD_ENTROPY_STEP_DEFAULT, Platform, RANGER_RECONNECT_PERIOD_FALLBACK,
    SESSION_CHECK_INTERVAL_FALLBACK, STORAGE_DEFAULT_LIMIT,
};
pub use types::EnvAction;
