use std::process::ExitCode;

use anyhow::Error;
use tracing::warn;

use crate::{
    cli::{resolve_launch, Resolution, USAGE},
    launcher::{config::LauncherConfig, probe::SystemServiceProbe},
};

use super::{handoff::hand_off, readiness::ensure_service};

/// Bundles a launcher error message with an exit code.
#[derive(Debug)]
pub struct LaunchExit {
    message: String,
    exit_code: ExitCode,
}

impl LaunchExit {
    pub fn from_error(err: impl Into<Error>) -> Self {
        let err = err.into();
        Self {
            message: format!("{err:?}"),
            exit_code: ExitCode::FAILURE,
        }
    }

    pub fn report(self) -> ExitCode {
        eprintln!("{}", self.message);
        self.exit_code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn exit_code(&self) -> ExitCode {
        self.exit_code
    }
}

/// Resolve arguments, bring up the daemon and hand the process over to Aider.
///
/// Help and invalid modes return before any configuration is read or any
/// process is started.
pub async fn run_launcher<I, S>(args: I) -> Result<ExitCode, LaunchExit>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let launch = match resolve_launch(args).map_err(LaunchExit::from_error)? {
        Resolution::Help => {
            print!("{USAGE}");
            return Ok(ExitCode::SUCCESS);
        }
        Resolution::Launch(launch) => launch,
    };

    let config = LauncherConfig::load_from_env_or_default().map_err(LaunchExit::from_error)?;

    let probe = SystemServiceProbe::new(&config.service);
    if let Err(err) = ensure_service(&probe, &config.service).await {
        warn!(
            target: "aider_local::service",
            reason = %err,
            "Continuing without a confirmed model-serving daemon"
        );
    }

    hand_off(launch, &config).map_err(LaunchExit::from_error)
}
