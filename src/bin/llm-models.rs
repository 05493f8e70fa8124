//! Entry point for `llm-models`.
use std::process::ExitCode;

use aider_local::{
    cli::ModelsArgs,
    launcher::{config::LauncherConfig, runtime::LaunchExit},
    lib::telemetry,
    tools::execute_models_command,
};
use clap::Parser;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    match bootstrap().await {
        Ok(_) => ExitCode::SUCCESS,
        Err(exit) => exit.report(),
    }
}

async fn bootstrap() -> Result<(), LaunchExit> {
    telemetry::init_tracing().map_err(LaunchExit::from_error)?;
    let args = ModelsArgs::parse();
    let config = LauncherConfig::load_from_env_or_default().map_err(LaunchExit::from_error)?;

    let message = execute_models_command(args.command, &config.service.binary)
        .await
        .map_err(LaunchExit::from_error)?;
    println!("{message}");
    Ok(())
}
