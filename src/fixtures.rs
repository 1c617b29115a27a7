#[cfg(test)]
pub mod test {
    use crate::login::{LoginActions, LoginField};

    /// Records every forwarded action in call order, so tests can assert
    /// on both the set and the sequence of effects.
    #[derive(Debug, Default)]
    pub struct RecordingActions {
        pub calls: Vec<String>,
    }

    impl LoginActions for RecordingActions {
        fn change_email(&mut self, value: &str) {
            self.calls.push(format!("change_email:{value}"));
        }

        fn change_password(&mut self, value: &str) {
            self.calls.push(format!("change_password:{value}"));
        }

        fn focus_field(&mut self, field: LoginField) {
            let name = match field {
                LoginField::Email => "email",
                LoginField::Password => "password",
            };
            self.calls.push(format!("focus:{name}"));
        }

        fn mark_invalid(&mut self) {
            self.calls.push("mark_invalid".to_string());
        }

        fn clear_error(&mut self) {
            self.calls.push("clear_error".to_string());
        }

        fn forgot_password(&mut self, email: &str) {
            self.calls.push(format!("forgot_password:{email}"));
        }

        fn sign_up(&mut self) {
            self.calls.push("sign_up".to_string());
        }

        fn sign_in(&mut self) {
            self.calls.push("sign_in".to_string());
        }
    }

    /// A full deployment document with every field present and every
    /// value distinct from both the compiled defaults and the accessor
    /// fallbacks, so tests can tell the three apart.
    pub fn full_deployment_json() -> &'static str {
        r#"{
            "api": {
                "authzURL": "https://trade.test/api/v2/barong",
                "switchURL": "https://trade.test/api/v2/applogic",
                "transactionURL": "https://trade.test/api/v2/peatio",
                "ieoURL": "https://trade.test/api/v2/ieo",
                "downstreamURL": "wss://trade.test/api/v2/ranger"
            },
            "minutesUntilAutoLogout": "60",
            "rangerReconnectPeriod": "7",
            "withCredentials": false,
            "storage": {"defaultStorageLimit": 120, "orderBookSideLimit": 30},
            "gaTrackerKey": "UA-000000-2",
            "msAlertDisplayTime": "2500",
            "incrementalOrderBook": false,
            "finex": true,
            "isResizable": true,
            "isDraggable": true,
            "languages": ["en", "pt", "es"],
            "usernameEnabled": false,
            "sessionCheckInterval": "20000",
            "balancesFetchInterval": "4000",
            "passwordEntropyStep": 20,
            "showLanding": false,
            "sentryEnabled": true,
            "kycSteps": ["email", "document"]
        }"#
    }

    #[test]
    fn full_deployment_document_covers_every_field() {
        let env: crate::env::Env = serde_json::from_str(full_deployment_json()).unwrap();
        assert!(env.api.is_some());
        assert!(env.storage.is_some());
        assert!(env.kyc_steps.is_some());
        assert_eq!(env.languages.map(|l| l.len()), Some(3));
    }
}
