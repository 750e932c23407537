//! Runtime settings loaded via OrthoConfig.
//!
//! Every value is optional: with nothing set, the SDK resolves region and
//! credentials from the Lambda environment and logs are emitted as JSON.

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::telemetry::LogFormat;

/// Configuration values for the directory client and log output.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "PRESIGNUP")]
pub struct PreSignupSettings {
    /// Region override for the Cognito client.
    pub region: Option<String>,
    /// Endpoint override for the Cognito client, e.g. a local emulator.
    pub endpoint_url: Option<String>,
    /// Log line format: `json` or `pretty`.
    #[ortho_config(default = LogFormat::Json)]
    pub log_format: LogFormat,
}

#[cfg(test)]
mod tests {
    //! Unit tests for settings parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    fn load_from_empty_args() -> PreSignupSettings {
        PreSignupSettings::load_from_iter([OsString::from("presignup")])
            .expect("config should load")
    }

    #[rstest]
    fn defaults_defer_to_the_sdk_environment() {
        let _guard = lock_env([
            ("PRESIGNUP_REGION", None::<String>),
            ("PRESIGNUP_ENDPOINT_URL", None::<String>),
            ("PRESIGNUP_LOG_FORMAT", None::<String>),
        ]);

        let settings = load_from_empty_args();
        assert!(settings.region.is_none());
        assert!(settings.endpoint_url.is_none());
        assert_eq!(settings.log_format, LogFormat::Json);
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("PRESIGNUP_REGION", Some("eu-west-2".to_owned())),
            (
                "PRESIGNUP_ENDPOINT_URL",
                Some("http://localhost:9229".to_owned()),
            ),
            ("PRESIGNUP_LOG_FORMAT", Some("pretty".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(settings.region.as_deref(), Some("eu-west-2"));
        assert_eq!(
            settings.endpoint_url.as_deref(),
            Some("http://localhost:9229")
        );
        assert_eq!(settings.log_format, LogFormat::Pretty);
    }

    #[rstest]
    #[case::json("json", LogFormat::Json)]
    #[case::pretty("pretty", LogFormat::Pretty)]
    fn log_format_flag_selects_the_format(#[case] value: &str, #[case] expected: LogFormat) {
        let _guard = lock_env([("PRESIGNUP_LOG_FORMAT", None::<String>)]);

        let settings = PreSignupSettings::load_from_iter([
            OsString::from("presignup"),
            OsString::from("--log-format"),
            OsString::from(value),
        ])
        .expect("config should load");
        assert_eq!(settings.log_format, expected);
    }
}
