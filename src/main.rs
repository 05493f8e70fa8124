//! Entry point for `aider-local`.
use std::process::ExitCode;

use aider_local::{
    launcher::runtime::{self, LaunchExit},
    lib::telemetry,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    match bootstrap().await {
        Ok(code) => code,
        Err(exit) => exit.report(),
    }
}

async fn bootstrap() -> Result<ExitCode, LaunchExit> {
    telemetry::init_tracing().map_err(LaunchExit::from_error)?;
    runtime::run_launcher(std::env::args().skip(1)).await
}
