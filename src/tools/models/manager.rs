//! Async wrappers around the `ollama` CLI for the preset table.
use std::{
    process::{Command as StdCommand, Output},
    time::{Duration, Instant},
};

use chrono::Utc;
use tokio::{process::Command, time};
use tracing::{info, warn};

use crate::{
    cli::Mode,
    lib::{errors::ModelError, ollama, presets::is_listed, telemetry::ModelRunSpan},
};

use super::report::{
    missing_modes, BenchmarkEntry, BenchmarkOutcome, BenchmarkReport, RunReport, SetupAction,
};

const STDERR_EXCERPT_LIMIT: usize = 2_000;

/// Handle on a working `ollama` binary.
#[derive(Debug, Clone)]
pub struct ModelManager {
    binary: String,
}

impl ModelManager {
    /// Confirm `binary --version` runs before handing out a manager.
    pub async fn connect(binary: impl Into<String>) -> Result<Self, ModelError> {
        let binary = binary.into();
        let output = Command::from(ollama::version_command(&binary))
            .output()
            .await
            .map_err(|_| ModelError::OllamaMissing {
                binary: binary.clone(),
            })?;
        if !output.status.success() {
            return Err(ModelError::OllamaMissing { binary });
        }
        Ok(Self { binary })
    }

    pub fn binary(&self) -> &str {
        &self.binary
    }

    /// Raw `ollama list` output.
    pub async fn list_models(&self) -> Result<String, ModelError> {
        let output = self
            .output_of(ollama::list_command(&self.binary), "ollama list")
            .await?;
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    pub async fn is_installed(&self, model_id: &str) -> Result<bool, ModelError> {
        Ok(is_listed(model_id, &self.list_models().await?))
    }

    /// `ollama pull`, streaming its progress to the terminal.
    pub async fn pull(&self, model_id: &str) -> Result<(), ModelError> {
        info!(target: "aider_local::models", model_id, "Pulling model");
        let command_label = format!("ollama pull {model_id}");
        let status = Command::from(ollama::pull_command(&self.binary, model_id))
            .status()
            .await
            .map_err(|err| ModelError::CommandFailed {
                command: command_label.clone(),
                exit_code: None,
                message: err.to_string(),
            })?;
        if !status.success() {
            return Err(ModelError::CommandFailed {
                command: command_label,
                exit_code: status.code(),
                message: "pull did not complete".into(),
            });
        }
        Ok(())
    }

    /// Pull every missing preset for which `confirm` returns true.
    ///
    /// A failed pull is recorded for its preset and the remaining presets are
    /// still handled. `on_action` sees each outcome as soon as it is known.
    pub async fn setup<C, R>(
        &self,
        mut confirm: C,
        mut on_action: R,
    ) -> Result<Vec<(Mode, SetupAction)>, ModelError>
    where
        C: FnMut(Mode) -> bool,
        R: FnMut(Mode, &SetupAction),
    {
        let missing = missing_modes(&self.list_models().await?);
        let mut actions = Vec::with_capacity(Mode::ALL.len());
        for mode in Mode::ALL {
            let action = if !missing.contains(&mode) {
                SetupAction::AlreadyInstalled
            } else if !confirm(mode) {
                SetupAction::Declined
            } else {
                match self.pull(mode.model_id()).await {
                    Ok(()) => SetupAction::Pulled,
                    Err(err) => {
                        warn!(
                            target: "aider_local::models",
                            model_id = mode.model_id(),
                            error = %err,
                            "Pull failed; continuing with the next preset"
                        );
                        SetupAction::Failed(err.summary())
                    }
                }
            };
            on_action(mode, &action);
            actions.push((mode, action));
        }
        Ok(actions)
    }

    /// Ask the mode's model to complete `prompt` and measure the run.
    pub async fn run_model(
        &self,
        mode: Mode,
        prompt: &str,
        timeout: Duration,
    ) -> Result<RunReport, ModelError> {
        let model_id = mode.model_id();
        let span = ModelRunSpan::start(model_id, "completion");
        let started_at = Instant::now();
        let command_label = format!("ollama run {model_id}");

        let result = time::timeout(
            timeout,
            self.output_of(
                ollama::run_command(&self.binary, model_id, prompt),
                &command_label,
            ),
        )
        .await;

        match result {
            Err(_) => {
                span.finish("timeout", None);
                Err(ModelError::Timeout {
                    command: command_label,
                    duration_secs: timeout.as_secs(),
                })
            }
            Ok(Err(err)) => {
                let exit_code = match &err {
                    ModelError::CommandFailed { exit_code, .. } => *exit_code,
                    _ => None,
                };
                span.finish("failed", exit_code);
                Err(err)
            }
            Ok(Ok(output)) => {
                span.finish("succeeded", output.status.code());
                Ok(RunReport::new(
                    model_id,
                    String::from_utf8_lossy(&output.stdout).into_owned(),
                    started_at.elapsed(),
                ))
            }
        }
    }

    /// Run every installed preset once; missing presets are skipped.
    ///
    /// `on_run` receives each run as it finishes.
    pub async fn benchmark<F>(
        &self,
        prompt: &str,
        timeout: Duration,
        mut on_run: F,
    ) -> Result<BenchmarkReport, ModelError>
    where
        F: FnMut(Mode, &Result<RunReport, ModelError>),
    {
        let listed = self.list_models().await?;
        let mut results = Vec::new();
        let mut skipped = Vec::new();

        for mode in Mode::ALL {
            if !is_listed(mode.model_id(), &listed) {
                warn!(
                    target: "aider_local::models",
                    mode = mode.as_str(),
                    "Skipping benchmark; model not installed"
                );
                skipped.push(mode.as_str());
                continue;
            }

            let result = self.run_model(mode, prompt, timeout).await;
            on_run(mode, &result);
            let outcome = match result {
                Ok(report) => BenchmarkOutcome::Succeeded {
                    duration_secs: report.duration_secs,
                    tokens_per_sec: report.tokens_per_sec,
                },
                Err(err) => BenchmarkOutcome::Failed {
                    error: err.summary(),
                },
            };
            results.push(BenchmarkEntry {
                mode: mode.as_str(),
                model_id: mode.model_id(),
                outcome,
            });
        }

        Ok(BenchmarkReport {
            generated_at: Utc::now(),
            prompt: prompt.to_string(),
            results,
            skipped,
        })
    }

    async fn output_of(&self, command: StdCommand, label: &str) -> Result<Output, ModelError> {
        let mut command = Command::from(command);
        command.kill_on_drop(true);
        let output = command
            .output()
            .await
            .map_err(|err| ModelError::CommandFailed {
                command: label.to_string(),
                exit_code: None,
                message: err.to_string(),
            })?;
        if !output.status.success() {
            return Err(ModelError::CommandFailed {
                command: label.to_string(),
                exit_code: output.status.code(),
                message: stderr_excerpt(&output.stderr),
            });
        }
        Ok(output)
    }
}

fn stderr_excerpt(stderr: &[u8]) -> String {
    let text = String::from_utf8_lossy(stderr);
    let trimmed = text.trim();
    match trimmed.char_indices().rev().nth(STDERR_EXCERPT_LIMIT - 1) {
        Some((start, _)) => trimmed[start..].to_string(),
        None => trimmed.to_string(),
    }
}
