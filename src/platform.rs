use crate::env::{ApiEndpoints, Env};
use crate::merge;

/// Minutes before auto logout when the active record has none.
pub const AUTO_LOGOUT_MINUTES_FALLBACK: &str = "15";
/// Alert display time when the active record has none, in milliseconds.
pub const ALERT_DISPLAY_TIME_FALLBACK: &str = "10000";
/// Session check interval when the active record has none, in milliseconds.
pub const SESSION_CHECK_INTERVAL_FALLBACK: &str = "15000";
/// Balances fetch interval when the active record has none, in milliseconds.
pub const BALANCES_FETCH_INTERVAL_FALLBACK: &str = "3000";
/// Websocket reconnect period when the active record has none or an
/// unparseable value, in seconds.
pub const RANGER_RECONNECT_PERIOD_FALLBACK: u64 = 1;
/// Per-market cache entries when the active record sets no limit.
pub const STORAGE_DEFAULT_LIMIT: u32 = 50;
/// Order book depth per side when the active record sets no limit.
pub const ORDER_BOOK_DEFAULT_SIDE_LIMIT: u32 = 25;
/// Password entropy step when the active record has none.
pub const PASSWORD_ENTROPY_STEP_DEFAULT: u32 = 14;
/// Language served when the active record lists none.
pub const DEFAULT_LANGUAGE: &str = "pt";
/// KYC steps when the active record carries no `kycSteps` field at all.
pub const DEFAULT_KYC_STEPS: &[&str] = &["email", "phone", "profile", "document", "address"];

/// The resolved platform record.
///
/// Built once at startup by the resolve pipeline and only read afterwards.
/// Every accessor is total: whatever document the host injected, the
/// fallback chain produces a usable value. String settings treat the empty
/// string as absent, so a deployment cannot blank out a setting that has a
/// fallback.
#[derive(Debug, Clone, PartialEq)]
pub struct Platform {
    env: Env,
}

impl Platform {
    /// Adopt `overlay` (or the compiled defaults when `None`) as the
    /// active record. This is the pure core of the pipeline; the builder
    /// layers document loading and strict-mode validation on top.
    pub fn resolve(overlay: Option<Env>) -> Self {
        Platform {
            env: merge::adopt(overlay),
        }
    }

    /// The active record, post adoption fixups.
    pub fn env(&self) -> &Env {
        &self.env
    }

    fn api(&self) -> Option<&ApiEndpoints> {
        self.env.api.as_ref()
    }

    /// Authorization service endpoint.
    pub fn authz_url(&self) -> &str {
        self.api().map_or("", |api| api.authz_url.as_str())
    }

    /// Application logic service endpoint.
    pub fn switch_url(&self) -> &str {
        self.api().map_or("", |api| api.switch_url.as_str())
    }

    /// Trade and accounting service endpoint.
    pub fn transaction_url(&self) -> &str {
        self.api().map_or("", |api| api.transaction_url.as_str())
    }

    /// IEO service endpoint. Never empty: adoption substitutes the path
    /// default when the document carried none.
    pub fn ieo_url(&self) -> &str {
        self.api().map_or("", |api| api.ieo_url.as_str())
    }

    /// Websocket streaming endpoint.
    pub fn downstream_url(&self) -> &str {
        self.api().map_or("", |api| api.downstream_url.as_str())
    }

    /// Minutes of inactivity before automatic logout, as a numeric string.
    pub fn minutes_until_auto_logout(&self) -> &str {
        non_empty_or(
            self.env.minutes_until_auto_logout.as_deref(),
            AUTO_LOGOUT_MINUTES_FALLBACK,
        )
    }

    /// Whether API requests carry session credentials.
    pub fn with_credentials(&self) -> bool {
        self.env.with_credentials.unwrap_or(false)
    }

    /// How many entries the per-market cache keeps.
    pub fn default_storage_limit(&self) -> u32 {
        non_zero_or(
            self.env
                .storage
                .as_ref()
                .and_then(|s| s.default_storage_limit),
            STORAGE_DEFAULT_LIMIT,
        )
    }

    /// How many levels each order book side keeps.
    pub fn order_book_side_limit(&self) -> u32 {
        non_zero_or(
            self.env
                .storage
                .as_ref()
                .and_then(|s| s.order_book_side_limit),
            ORDER_BOOK_DEFAULT_SIDE_LIMIT,
        )
    }

    /// Analytics tracker key; empty means tracking is off.
    pub fn ga_tracker_key(&self) -> &str {
        self.env.ga_tracker_key.as_deref().unwrap_or("")
    }

    /// Milliseconds an alert stays on screen, as a numeric string.
    pub fn ms_alert_display_time(&self) -> &str {
        non_empty_or(
            self.env.ms_alert_display_time.as_deref(),
            ALERT_DISPLAY_TIME_FALLBACK,
        )
    }

    /// Seconds between websocket reconnect attempts. Absent, empty, or
    /// unparseable values resolve to the fallback.
    pub fn ranger_reconnect_period(&self) -> u64 {
        match self.env.ranger_reconnect_period.as_deref() {
            Some(raw) if !raw.is_empty() => {
                raw.parse().unwrap_or(RANGER_RECONNECT_PERIOD_FALLBACK)
            }
            _ => RANGER_RECONNECT_PERIOD_FALLBACK,
        }
    }

    /// Whether the order book uses the incremental update stream.
    pub fn incremental_order_book(&self) -> bool {
        self.env.incremental_order_book.unwrap_or(false)
    }

    /// Whether trading-layout panels can be resized.
    pub fn is_resizable_grid(&self) -> bool {
        self.env.is_resizable.unwrap_or(false)
    }

    /// Whether trading-layout panels can be dragged.
    pub fn is_draggable_grid(&self) -> bool {
        self.env.is_draggable.unwrap_or(false)
    }

    /// Enabled interface languages. An absent or empty list resolves to
    /// the default language alone.
    pub fn languages(&self) -> Vec<String> {
        match &self.env.languages {
            Some(list) if !list.is_empty() => list.clone(),
            _ => vec![DEFAULT_LANGUAGE.to_string()],
        }
    }

    /// Milliseconds between session liveness checks, as a numeric string.
    pub fn session_check_interval(&self) -> &str {
        non_empty_or(
            self.env.session_check_interval.as_deref(),
            SESSION_CHECK_INTERVAL_FALLBACK,
        )
    }

    /// Milliseconds between balance refreshes, as a numeric string.
    pub fn balances_fetch_interval(&self) -> &str {
        non_empty_or(
            self.env.balances_fetch_interval.as_deref(),
            BALANCES_FETCH_INTERVAL_FALLBACK,
        )
    }

    /// Whether the deployment runs against the finex engine.
    pub fn is_finex_enabled(&self) -> bool {
        self.env.finex.unwrap_or(false)
    }

    /// Entropy step used by the password strength meter.
    pub fn password_entropy_step(&self) -> u32 {
        self.env
            .password_entropy_step
            .unwrap_or(PASSWORD_ENTROPY_STEP_DEFAULT)
    }

    /// Whether the marketing landing page is served.
    pub fn show_landing(&self) -> bool {
        self.env.show_landing.unwrap_or(false)
    }

    /// Whether client-side error reporting is on.
    pub fn sentry_enabled(&self) -> bool {
        self.env.sentry_enabled.unwrap_or(false)
    }

    /// Ordered KYC verification steps. Unlike [`Platform::languages`], a
    /// present-but-empty list is honored as empty; only a wholly absent
    /// field resolves to the default steps.
    pub fn kyc_steps(&self) -> Vec<String> {
        match &self.env.kyc_steps {
            Some(list) => list.clone(),
            None => DEFAULT_KYC_STEPS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Whether sign-up asks for a username.
    pub fn is_username_enabled(&self) -> bool {
        self.env.username_enabled.unwrap_or(false)
    }
}

fn non_empty_or<'a>(value: Option<&'a str>, fallback: &'a str) -> &'a str {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => fallback,
    }
}

fn non_zero_or(value: Option<u32>, fallback: u32) -> u32 {
    match value {
        Some(v) if v != 0 => v,
        _ => fallback,
    }
}
