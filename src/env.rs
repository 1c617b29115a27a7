use serde::{Deserialize, Serialize};

use crate::platform::{DEFAULT_LANGUAGE, PASSWORD_ENTROPY_STEP_DEFAULT};

/// The raw environment record a deployment injects at startup.
///
/// Every top-level field is optional: the host document is sparse, and the
/// adoption rule in [`crate::merge`] is shallow, so an absent field stays
/// absent and resolves through the accessor fallback chain instead of
/// inheriting the compiled value. Numeric-looking settings that the wire
/// carries as strings (`minutesUntilAutoLogout`, intervals) stay strings
/// here; conversion happens in the accessors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Env {
    /// Backend endpoint block.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api: Option<ApiEndpoints>,
    /// Minutes of inactivity before automatic logout, as a numeric string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minutes_until_auto_logout: Option<String>,
    /// Seconds between websocket reconnect attempts, as a numeric string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ranger_reconnect_period: Option<String>,
    /// Whether API requests carry session credentials.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_credentials: Option<bool>,
    /// Per-market storage limits block.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage: Option<StorageLimits>,
    /// Analytics tracker key; empty disables tracking.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ga_tracker_key: Option<String>,
    /// Milliseconds an alert stays on screen, as a numeric string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ms_alert_display_time: Option<String>,
    /// Whether the order book uses the incremental update stream.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub incremental_order_book: Option<bool>,
    /// Whether the deployment runs against the finex engine.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finex: Option<bool>,
    /// Whether trading-layout panels can be resized.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_resizable: Option<bool>,
    /// Whether trading-layout panels can be dragged.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_draggable: Option<bool>,
    /// Enabled interface languages, by two-letter code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub languages: Option<Vec<String>>,
    /// Whether sign-up asks for a username.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username_enabled: Option<bool>,
    /// Milliseconds between session liveness checks, as a numeric string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_check_interval: Option<String>,
    /// Milliseconds between balance refreshes, as a numeric string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub balances_fetch_interval: Option<String>,
    /// Entropy step used by the password strength meter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_entropy_step: Option<u32>,
    /// Whether the marketing landing page is served.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_landing: Option<bool>,
    /// Whether client-side error reporting is on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentry_enabled: Option<bool>,
    /// Ordered KYC verification steps.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kyc_steps: Option<Vec<String>>,
}

/// Backend API endpoints. The wire spells these with an uppercase `URL`
/// suffix, which `rename_all` cannot produce, so each field carries an
/// explicit rename.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiEndpoints {
    /// Authorization service (sessions, identity).
    #[serde(rename = "authzURL")]
    pub authz_url: String,
    /// Application logic service.
    #[serde(rename = "switchURL")]
    pub switch_url: String,
    /// Trade and accounting service.
    #[serde(rename = "transactionURL")]
    pub transaction_url: String,
    /// IEO service. Empty is rewritten to a path default at adoption.
    #[serde(rename = "ieoURL")]
    pub ieo_url: String,
    /// Websocket streaming endpoint.
    #[serde(rename = "downstreamURL")]
    pub downstream_url: String,
}

/// Client-side storage limits for market data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageLimits {
    /// How many entries the per-market cache keeps.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_storage_limit: Option<u32>,
    /// How many levels each order book side keeps.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_book_side_limit: Option<u32>,
}

impl Env {
    /// The compiled default record, used verbatim when the host injects no
    /// document. Note that several accessor fallbacks deliberately differ
    /// from these values: a sparse host document bypasses this record
    /// entirely, so an absent field resolves to the accessor fallback, not
    /// to the compiled value.
    pub fn compiled_defaults() -> Self {
        Env {
            api: Some(ApiEndpoints {
                authz_url: "https://exchange.example.com/api/v2/barong".into(),
                switch_url: "https://exchange.example.com/api/v2/applogic".into(),
                transaction_url: "https://exchange.example.com/api/v2/peatio".into(),
                ieo_url: "https://exchange.example.com/api/v2/peatio".into(),
                downstream_url: "wss://exchange.example.com/api/v2/ranger".into(),
            }),
            minutes_until_auto_logout: Some("3600".into()),
            ranger_reconnect_period: Some("1".into()),
            with_credentials: Some(true),
            storage: Some(StorageLimits::default()),
            ga_tracker_key: Some(String::new()),
            ms_alert_display_time: Some("5000".into()),
            incremental_order_book: Some(true),
            finex: Some(false),
            is_resizable: Some(false),
            is_draggable: Some(false),
            languages: Some(vec![DEFAULT_LANGUAGE.into()]),
            username_enabled: Some(true),
            session_check_interval: Some("15000".into()),
            balances_fetch_interval: Some("3000".into()),
            password_entropy_step: Some(PASSWORD_ENTROPY_STEP_DEFAULT),
            show_landing: Some(true),
            sentry_enabled: Some(false),
            kyc_steps: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sparse_document_leaves_fields_unset() {
        let env: Env = serde_json::from_str(r#"{"finex": true}"#).unwrap();
        assert_eq!(env.finex, Some(true));
        assert_eq!(env.minutes_until_auto_logout, None);
        assert_eq!(env.api, None);
        assert_eq!(env.storage, None);
    }

    #[test]
    fn wire_keys_are_camel_case() {
        let env: Env = serde_json::from_str(
            r#"{"minutesUntilAutoLogout": "30", "sessionCheckInterval": "9000"}"#,
        )
        .unwrap();
        assert_eq!(env.minutes_until_auto_logout.as_deref(), Some("30"));
        assert_eq!(env.session_check_interval.as_deref(), Some("9000"));
    }

    #[test]
    fn endpoint_keys_use_upper_url_suffix() {
        let env: Env = serde_json::from_str(
            r#"{"api": {"authzURL": "https://h/barong", "downstreamURL": "wss://h/ranger"}}"#,
        )
        .unwrap();
        let api = env.api.unwrap();
        assert_eq!(api.authz_url, "https://h/barong");
        assert_eq!(api.downstream_url, "wss://h/ranger");
        assert_eq!(api.switch_url, "");
    }

    #[test]
    fn serialization_skips_absent_fields() {
        let env = Env {
            show_landing: Some(false),
            ..Env::default()
        };
        let json = serde_json::to_string(&env).unwrap();
        assert_eq!(json, r#"{"showLanding":false}"#);
    }

    #[test]
    fn compiled_defaults_round_trip() {
        let defaults = Env::compiled_defaults();
        let json = serde_json::to_string(&defaults).unwrap();
        let back: Env = serde_json::from_str(&json).unwrap();
        assert_eq!(back, defaults);
    }

    #[test]
    fn compiled_defaults_have_empty_storage_block() {
        let defaults = Env::compiled_defaults();
        assert_eq!(defaults.storage, Some(StorageLimits::default()));
        assert_eq!(defaults.kyc_steps, None);
    }
}
