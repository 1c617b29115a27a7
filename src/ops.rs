//! Environment operations: template generation, setting lookup, listing,
//! and the result type callers use to display outcomes.
//!
//! Provides the logic behind `env list`, `env get`, and `env gen`. All
//! values are reported post-fallback, so the listing shows what the
//! application will actually use, not what the document literally said.

use std::fmt;
use std::path::PathBuf;

use crate::env::Env;
use crate::error::EnvbaseError;
use crate::platform::Platform;

/// Result of an environment operation. Returned to the caller for display.
#[derive(Debug, Clone, PartialEq)]
pub enum EnvReport {
    /// A generated JSON template string.
    Template(String),
    /// Confirmation that a template was written to a file.
    TemplateWritten { path: PathBuf },
    /// A single setting's resolved value.
    KeyValue { key: String, value: String },
    /// All resolved settings as wire-key/value pairs.
    Listing { entries: Vec<(String, String)> },
}

impl fmt::Display for EnvReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnvReport::Template(t) => write!(f, "{t}"),
            EnvReport::TemplateWritten { path } => {
                write!(f, "Environment template written to {}", path.display())
            }
            EnvReport::KeyValue { key, value } => write!(f, "{key} = {value}"),
            EnvReport::Listing { entries } => {
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{key} = {value}")?;
                }
                Ok(())
            }
        }
    }
}

/// Every setting by its dotted wire key, with its resolved value.
///
/// This is the canonical inspection table: one row per accessor, in the
/// record's field order.
pub fn settings(platform: &Platform) -> Vec<(&'static str, String)> {
    vec![
        ("api.authzURL", platform.authz_url().to_string()),
        ("api.switchURL", platform.switch_url().to_string()),
        ("api.transactionURL", platform.transaction_url().to_string()),
        ("api.ieoURL", platform.ieo_url().to_string()),
        ("api.downstreamURL", platform.downstream_url().to_string()),
        (
            "minutesUntilAutoLogout",
            platform.minutes_until_auto_logout().to_string(),
        ),
        (
            "rangerReconnectPeriod",
            platform.ranger_reconnect_period().to_string(),
        ),
        ("withCredentials", platform.with_credentials().to_string()),
        (
            "storage.defaultStorageLimit",
            platform.default_storage_limit().to_string(),
        ),
        (
            "storage.orderBookSideLimit",
            platform.order_book_side_limit().to_string(),
        ),
        ("gaTrackerKey", platform.ga_tracker_key().to_string()),
        (
            "msAlertDisplayTime",
            platform.ms_alert_display_time().to_string(),
        ),
        (
            "incrementalOrderBook",
            platform.incremental_order_book().to_string(),
        ),
        ("finex", platform.is_finex_enabled().to_string()),
        ("isResizable", platform.is_resizable_grid().to_string()),
        ("isDraggable", platform.is_draggable_grid().to_string()),
        ("languages", format_list(&platform.languages())),
        ("usernameEnabled", platform.is_username_enabled().to_string()),
        (
            "sessionCheckInterval",
            platform.session_check_interval().to_string(),
        ),
        (
            "balancesFetchInterval",
            platform.balances_fetch_interval().to_string(),
        ),
        (
            "passwordEntropyStep",
            platform.password_entropy_step().to_string(),
        ),
        ("showLanding", platform.show_landing().to_string()),
        ("sentryEnabled", platform.sentry_enabled().to_string()),
        ("kycSteps", format_list(&platform.kyc_steps())),
    ]
}

/// Generate a JSON template of the compiled default record, suitable as a
/// starting point for a deployment's injected document.
pub fn generate_template() -> String {
    let defaults = Env::compiled_defaults();
    let mut template =
        serde_json::to_string_pretty(&defaults).unwrap_or_else(|_| "{}".to_string());
    template.push('\n');
    template
}

/// Look up one setting's resolved value by its dotted wire key.
pub fn get_setting(platform: &Platform, key: &str) -> Result<EnvReport, EnvbaseError> {
    settings(platform)
        .into_iter()
        .find(|(k, _)| *k == key)
        .map(|(key, value)| EnvReport::KeyValue {
            key: key.to_string(),
            value,
        })
        .ok_or_else(|| EnvbaseError::KeyNotFound(key.to_string()))
}

/// List every resolved setting.
pub fn list_settings(platform: &Platform) -> EnvReport {
    let entries = settings(platform)
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect();
    EnvReport::Listing { entries }
}

fn format_list(list: &[String]) -> String {
    serde_json::to_string(list).unwrap_or_else(|_| format!("{list:?}"))
}
