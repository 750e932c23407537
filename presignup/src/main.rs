//! Lambda entry point: wires settings, tracing, the Cognito directory, and
//! the pre-signup handler, then serves invocations until the runtime stops.

use std::env;
use std::sync::Arc;

use color_eyre::eyre::{Result, eyre};
use ortho_config::OrthoConfig;
use tracing::error;

use presignup::PreSignupSettings;
use presignup::domain::PreSignupValidator;
use presignup::inbound::lambda::{PreSignupHandler, serve};
use presignup::outbound::cognito::{CognitoClientOptions, CognitoUserDirectory};
use presignup::telemetry::{self, LogFormat};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let settings = match PreSignupSettings::load_from_iter(env::args_os()) {
        Ok(settings) => settings,
        Err(err) => {
            // The configured format is unknown; fall back to the default one.
            telemetry::init(LogFormat::default());
            error!(error = %err, "failed to load settings");
            return Err(eyre!("failed to load settings: {err}"));
        }
    };
    telemetry::init(settings.log_format);

    let directory = CognitoUserDirectory::from_environment(CognitoClientOptions {
        region: settings.region,
        endpoint_url: settings.endpoint_url,
    })
    .await;
    let validator = PreSignupValidator::new(Arc::new(directory));
    let handler = PreSignupHandler::new(Arc::new(validator));

    serve(handler)
        .await
        .map_err(|err| eyre!("lambda runtime stopped: {err}"))
}
