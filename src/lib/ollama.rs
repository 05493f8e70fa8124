//! Shared helpers for building `ollama` commands.
//!
//! Builders return `std::process::Command`; async callers convert with
//! `tokio::process::Command::from`.

use std::process::{Command, Stdio};

/// Prefix prepended to the user prompt for `ollama run` smoke tests.
pub const COMPLETION_PREAMBLE: &str = "Complete this code:\n";

fn base_command(binary: &str) -> Command {
    let mut command = Command::new(binary);
    command.stdin(Stdio::null());
    command
}

/// `ollama --version`, used to confirm the binary exists.
pub fn version_command(binary: &str) -> Command {
    let mut command = base_command(binary);
    command.arg("--version");
    command
}

/// `ollama list`; also serves as the daemon readiness query.
pub fn list_command(binary: &str) -> Command {
    let mut command = base_command(binary);
    command.arg("list");
    command
}

/// `ollama pull <model>` with progress shown on the terminal.
pub fn pull_command(binary: &str, model_id: &str) -> Command {
    let mut command = base_command(binary);
    command.arg("pull").arg(model_id);
    command.stdout(Stdio::inherit()).stderr(Stdio::inherit());
    command
}

/// `ollama run <model> <prompt>` asking the model to complete `code`.
pub fn run_command(binary: &str, model_id: &str, code: &str) -> Command {
    let mut command = base_command(binary);
    command
        .arg("run")
        .arg(model_id)
        .arg(format!("{COMPLETION_PREAMBLE}{code}"));
    command
}

/// `ollama serve` (or configured args), detached from the launcher's stdio.
pub fn serve_command(binary: &str, serve_args: &[String]) -> Command {
    let mut command = Command::new(binary);
    command.args(serve_args);
    command
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());
    command
}
