#![allow(dead_code)]

use std::{
    fs,
    path::{Path, PathBuf},
    process::{Command, Output, Stdio},
};

use tempfile::TempDir;

pub const LAUNCHER_PATH: &str = env!("CARGO_BIN_EXE_aider-local");
pub const MODELS_PATH: &str = env!("CARGO_BIN_EXE_llm-models");
pub const CONFIG_ENV: &str = "AIDER_LOCAL_CONFIG";

pub fn fixture(relative: &str) -> String {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    root.join(relative).display().to_string()
}

/// Run a binary with the given config file and no inherited stdin.
pub fn run_with_config(binary: &str, config: &str, args: &[&str]) -> Output {
    Command::new(binary)
        .args(args)
        .env(CONFIG_ENV, config)
        .env_remove("OLLAMA_API_BASE")
        .env_remove("RUST_LOG")
        .stdin(Stdio::null())
        .output()
        .expect("binary should start")
}

#[cfg(unix)]
pub fn write_script(path: &Path, body: &str) {
    use std::os::unix::fs::PermissionsExt;

    fs::write(path, format!("#!/bin/sh\n{body}\n")).expect("can write script");
    fs::set_permissions(path, fs::Permissions::from_mode(0o755))
        .expect("can mark script executable");
}

/// Fake Ollama and Aider installs inside a temporary directory.
///
/// The fake `aider` lives in a virtualenv layout, records its arguments one per
/// line, and exits with code 7. The fake `ollama` lists no models and records
/// every `pull` it is asked for.
pub struct FakeInstall {
    pub temp: TempDir,
    pub config_path: PathBuf,
    pub args_file: PathBuf,
    pub env_file: PathBuf,
    pub pulls_file: PathBuf,
    pub venv: PathBuf,
}

#[cfg(unix)]
impl FakeInstall {
    pub fn new() -> Self {
        let temp = tempfile::tempdir().expect("can create temporary directory");
        let venv = temp.path().join("aider-env");
        let bin = venv.join("bin");
        fs::create_dir_all(&bin).expect("can create venv bin");

        let args_file = temp.path().join("aider-args.txt");
        let env_file = temp.path().join("aider-env.txt");
        write_script(
            &bin.join("aider"),
            &format!(
                "for arg in \"$@\"; do printf '%s\\n' \"$arg\" >> '{args}'; done\n\
                 printf '%s\\n%s\\n' \"$OLLAMA_API_BASE\" \"$VIRTUAL_ENV\" > '{env}'\n\
                 exit 7",
                args = args_file.display(),
                env = env_file.display()
            ),
        );

        let pulls_file = temp.path().join("ollama-pulls.txt");
        let ollama = temp.path().join("ollama");
        write_script(
            &ollama,
            &format!(
                "case \"$1\" in\n  serve) exit 0 ;;\n  list) echo 'NAME ID SIZE MODIFIED' ;;\n  pull) printf '%s\\n' \"$2\" >> '{pulls}' ;;\n  *) exit 0 ;;\nesac",
                pulls = pulls_file.display()
            ),
        );

        let config_path = temp.path().join("launcher.toml");
        fs::write(
            &config_path,
            format!(
                "[service]\nbinary = \"{ollama}\"\nprocess_name = \"aider-local-it-daemon\"\nreadiness_attempts = 3\nreadiness_interval_ms = 50\n\n[aider]\nvenv = \"{venv}\"\n",
                ollama = ollama.display(),
                venv = venv.display()
            ),
        )
        .expect("can write launcher config");

        Self {
            temp,
            config_path,
            args_file,
            env_file,
            pulls_file,
            venv,
        }
    }

    pub fn config(&self) -> String {
        self.config_path.display().to_string()
    }

    pub fn recorded_args(&self) -> Vec<String> {
        read_lines(&self.args_file)
    }

    pub fn recorded_env(&self) -> Vec<String> {
        read_lines(&self.env_file)
    }

    pub fn recorded_pulls(&self) -> Vec<String> {
        read_lines(&self.pulls_file)
    }
}

#[cfg(unix)]
fn read_lines(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .unwrap_or_default()
        .lines()
        .map(str::to_string)
        .collect()
}
