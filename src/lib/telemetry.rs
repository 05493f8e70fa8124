//! Telemetry initialization and model-run span helpers.

use std::time::Instant;

use anyhow::Result;
use tracing::{info, info_span, Span};
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize `tracing`; logs go to stderr so Aider keeps stdout to itself.
pub fn init_tracing() -> Result<()> {
    if tracing::dispatcher::has_been_set() {
        return Ok(());
    }

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to initialize tracing: {err}"))
}

/// Span helper recording start and finish of one `ollama run`.
pub struct ModelRunSpan {
    span: Span,
    started_at: Instant,
    model_id: &'static str,
}

impl ModelRunSpan {
    /// Start a run span.
    pub fn start(model_id: &'static str, run_kind: &'static str) -> Self {
        let span = info_span!(
            target: "aider_local::models",
            "model_run",
            model_id,
            run_kind
        );
        Self {
            span,
            started_at: Instant::now(),
            model_id,
        }
    }

    /// Close the span while recording status and duration.
    pub fn finish(self, status: &'static str, exit_code: Option<i32>) {
        let elapsed_ms = self.started_at.elapsed().as_millis();
        let _entered = self.span.enter();
        info!(
            target: "aider_local::models",
            model_id = self.model_id,
            status = status,
            exit_code = exit_code,
            elapsed_ms = elapsed_ms,
            "Completed model run"
        );
    }
}

/// Payload for logging the resolved launch as structured telemetry.
#[derive(Debug)]
pub struct LaunchTelemetry<'a> {
    pub mode: &'a str,
    pub model_id: &'a str,
    pub edit_format: &'a str,
    pub architect: bool,
    pub auto_commits: bool,
    pub program: &'a str,
    pub args: &'a [String],
}

/// Emit the launch decision to `tracing`.
pub fn emit_launch(telemetry: &LaunchTelemetry<'_>) {
    info!(
        target: "aider_local::launch",
        mode = telemetry.mode,
        model_id = telemetry.model_id,
        edit_format = telemetry.edit_format,
        architect = telemetry.architect,
        auto_commits = telemetry.auto_commits,
        program = telemetry.program,
        args = ?telemetry.args,
        "Handing off to aider"
    );
}
