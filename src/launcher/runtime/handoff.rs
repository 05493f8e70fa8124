use std::process::{Command, ExitCode};

use crate::{
    cli::LaunchConfig,
    launcher::config::LauncherConfig,
    lib::{
        aider::{build_aider_command, AiderCommandConfig, HostEnv},
        errors::LaunchError,
        telemetry::{emit_launch, LaunchTelemetry},
    },
};

/// Build the Aider command for `launch` under `config`.
pub fn prepare_command(launch: &LaunchConfig, config: &LauncherConfig, host: &HostEnv) -> Command {
    build_aider_command(
        AiderCommandConfig {
            binary: &config.aider.binary,
            model_prefix: &config.aider.model_prefix,
            venv: config.aider.venv.as_deref(),
            api_base: &config.service.api_base,
        },
        launch,
        host,
    )
}

/// Replace the current process with Aider.
///
/// On Unix this only returns if `exec` fails. Elsewhere Aider runs as a child
/// and its exit code is returned.
pub fn hand_off(launch: LaunchConfig, config: &LauncherConfig) -> Result<ExitCode, LaunchError> {
    let mut command = prepare_command(&launch, config, &HostEnv::capture());
    let program = command.get_program().to_string_lossy().into_owned();
    let args: Vec<String> = command
        .get_args()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();

    emit_launch(&LaunchTelemetry {
        mode: launch.mode.as_str(),
        model_id: launch.model_id,
        edit_format: launch.edit_format.as_str(),
        architect: launch.architect_enabled,
        auto_commits: launch.auto_commits_enabled,
        program: &program,
        args: &args,
    });

    run(&mut command, program)
}

#[cfg(unix)]
fn run(command: &mut Command, program: String) -> Result<ExitCode, LaunchError> {
    use std::os::unix::process::CommandExt;

    let source = command.exec();
    Err(LaunchError::Exec { program, source })
}

#[cfg(not(unix))]
fn run(command: &mut Command, program: String) -> Result<ExitCode, LaunchError> {
    let status = command
        .status()
        .map_err(|source| LaunchError::Exec { program, source })?;
    Ok(status
        .code()
        .and_then(|code| u8::try_from(code).ok())
        .map(ExitCode::from)
        .unwrap_or(ExitCode::FAILURE))
}
