use crate::env::Env;

/// Path substituted when the adopted record carries no IEO endpoint.
pub(crate) const IEO_URL_PATH: &str = "/api/v2/ieoURL";

/// Adopt the host document as the active record, or fall back to the
/// compiled defaults when the host injected nothing.
///
/// Adoption is shallow and single-level: the overlay replaces the whole
/// record, so top-level fields it omits stay unset and resolve through the
/// accessor fallbacks rather than inheriting compiled values. Never a deep
/// merge. Two fixups run afterwards: the `api` and `storage` blocks are
/// materialized when absent, and an empty IEO endpoint is rewritten to its
/// path default.
pub fn adopt(overlay: Option<Env>) -> Env {
    let mut active = overlay.unwrap_or_else(Env::compiled_defaults);

    let mut api = active.api.take().unwrap_or_default();
    if api.ieo_url.is_empty() {
        api.ieo_url = IEO_URL_PATH.to_string();
    }
    active.api = Some(api);

    active.storage = Some(active.storage.take().unwrap_or_default());
    active
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{ApiEndpoints, StorageLimits};

    fn doc(json: &str) -> Env {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn no_overlay_adopts_compiled_defaults() {
        let active = adopt(None);
        let defaults = Env::compiled_defaults();
        assert_eq!(active.minutes_until_auto_logout, defaults.minutes_until_auto_logout);
        assert_eq!(active.languages, defaults.languages);
        assert_eq!(active.api.unwrap().authz_url, defaults.api.unwrap().authz_url);
    }

    #[test]
    fn adoption_is_shallow() {
        // One present field; everything else stays unset instead of
        // inheriting a compiled value.
        let active = adopt(Some(doc(r#"{"finex": true}"#)));
        assert_eq!(active.finex, Some(true));
        assert_eq!(active.minutes_until_auto_logout, None);
        assert_eq!(active.languages, None);
        assert_eq!(active.sentry_enabled, None);
    }

    #[test]
    fn absent_api_block_becomes_empty_endpoints() {
        let active = adopt(Some(doc("{}")));
        let api = active.api.unwrap();
        assert_eq!(api.authz_url, "");
        assert_eq!(api.downstream_url, "");
    }

    #[test]
    fn absent_storage_block_becomes_empty_limits() {
        let active = adopt(Some(doc("{}")));
        assert_eq!(active.storage, Some(StorageLimits::default()));
    }

    #[test]
    fn empty_ieo_url_gets_path_default() {
        let active = adopt(Some(doc(r#"{"api": {"authzURL": "https://h/barong"}}"#)));
        let api = active.api.unwrap();
        assert_eq!(api.ieo_url, IEO_URL_PATH);
        assert_eq!(api.authz_url, "https://h/barong");
    }

    #[test]
    fn populated_ieo_url_is_kept() {
        let active = adopt(Some(doc(r#"{"api": {"ieoURL": "https://h/peatio"}}"#)));
        assert_eq!(active.api.unwrap().ieo_url, "https://h/peatio");
    }

    #[test]
    fn compiled_defaults_keep_their_ieo_url() {
        let active = adopt(None);
        assert_eq!(
            active.api.unwrap().ieo_url,
            "https://exchange.example.com/api/v2/peatio"
        );
    }

    #[test]
    fn overlay_endpoint_block_replaces_wholesale() {
        let overlay = Env {
            api: Some(ApiEndpoints {
                authz_url: "https://host/barong".into(),
                ..ApiEndpoints::default()
            }),
            ..Env::default()
        };
        let api = adopt(Some(overlay)).api.unwrap();
        // Sibling endpoints are empty, not the compiled ones.
        assert_eq!(api.switch_url, "");
        assert_eq!(api.transaction_url, "");
    }

    #[test]
    fn present_storage_block_survives() {
        let active = adopt(Some(doc(r#"{"storage": {"defaultStorageLimit": 99}}"#)));
        let storage = active.storage.unwrap();
        assert_eq!(storage.default_storage_limit, Some(99));
        assert_eq!(storage.order_book_side_limit, None);
    }
}
