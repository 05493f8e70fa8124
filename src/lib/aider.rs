//! Shared helpers for building the `aider` command line.

use std::{
    env,
    ffi::OsString,
    path::{Path, PathBuf},
    process::Command,
};

use crate::cli::LaunchConfig;

use super::paths::{prepend_search_path, venv_bin_dir};

pub const OLLAMA_API_BASE_ENV: &str = "OLLAMA_API_BASE";
const PATH_ENV: &str = "PATH";
const VIRTUAL_ENV: &str = "VIRTUAL_ENV";

pub struct AiderCommandConfig<'a> {
    pub binary: &'a str,
    pub model_prefix: &'a str,
    pub venv: Option<&'a Path>,
    pub api_base: &'a str,
}

/// The parts of the parent environment the command builder looks at.
#[derive(Debug, Clone, Default)]
pub struct HostEnv {
    pub path: Option<OsString>,
    pub ollama_api_base: Option<OsString>,
}

impl HostEnv {
    pub fn capture() -> Self {
        Self {
            path: env::var_os(PATH_ENV),
            ollama_api_base: env::var_os(OLLAMA_API_BASE_ENV),
        }
    }
}

/// Aider arguments for a resolved launch, passthrough arguments last.
pub fn build_aider_args(launch: &LaunchConfig, model_prefix: &str) -> Vec<String> {
    let mut args = vec![
        "--model".to_string(),
        format!("{model_prefix}{}", launch.model_id),
        "--edit-format".to_string(),
        launch.edit_format.as_str().to_string(),
    ];
    if launch.architect_enabled {
        args.push("--architect".to_string());
    }
    args.push(if launch.auto_commits_enabled {
        "--auto-commits".to_string()
    } else {
        "--no-auto-commits".to_string()
    });
    args.extend(launch.passthrough_args.iter().cloned());
    args
}

/// Program to execute: a bare binary name is looked up in the venv first.
pub fn resolve_program(binary: &str, venv: Option<&Path>) -> PathBuf {
    let candidate = Path::new(binary);
    if let Some(venv) = venv {
        if candidate.components().count() == 1 {
            let in_venv = venv_bin_dir(venv).join(candidate);
            if in_venv.is_file() {
                return in_venv;
            }
        }
    }
    candidate.to_path_buf()
}

/// Build the `aider` command with inherited stdio.
pub fn build_aider_command(
    config: AiderCommandConfig<'_>,
    launch: &LaunchConfig,
    host: &HostEnv,
) -> Command {
    let mut command = Command::new(resolve_program(config.binary, config.venv));
    command.args(build_aider_args(launch, config.model_prefix));

    if host.ollama_api_base.is_none() {
        command.env(OLLAMA_API_BASE_ENV, config.api_base);
    }

    if let Some(venv) = config.venv {
        command.env(VIRTUAL_ENV, venv);
        command.env(
            PATH_ENV,
            prepend_search_path(&venv_bin_dir(venv), host.path.as_ref()),
        );
    }

    command
}
