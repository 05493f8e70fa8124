//! Model run results and their text/JSON renderings.
use std::{fmt::Write as _, time::Duration};

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::{
    cli::Mode,
    lib::presets::{is_listed, ModelPreset},
};

/// Result of one successful `ollama run`.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub model_id: &'static str,
    pub duration_secs: f64,
    pub tokens_per_sec: f64,
    pub output: String,
}

impl RunReport {
    pub fn new(model_id: &'static str, output: String, duration: Duration) -> Self {
        let duration_secs = duration.as_secs_f64();
        Self {
            model_id,
            duration_secs,
            tokens_per_sec: estimate_tokens_per_sec(&output, duration_secs),
            output,
        }
    }
}

/// Timing footer printed under a model's output.
pub fn render_run_report(report: &RunReport) -> String {
    let rule = "-".repeat(50);
    format!(
        "{output}\n{rule}\nTime taken: {duration:.2} seconds\nEstimated speed: {speed:.1} tok/s",
        output = report.output.trim_end(),
        duration = report.duration_secs,
        speed = report.tokens_per_sec,
    )
}

/// Rough speed estimate: whitespace-separated words per second.
pub fn estimate_tokens_per_sec(output: &str, duration_secs: f64) -> f64 {
    if duration_secs <= 0.0 {
        return 0.0;
    }
    output.split_whitespace().count() as f64 / duration_secs
}

/// Per-mode benchmark outcome.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum BenchmarkOutcome {
    Succeeded {
        duration_secs: f64,
        tokens_per_sec: f64,
    },
    Failed {
        error: String,
    },
}

#[derive(Debug, Clone, Serialize)]
pub struct BenchmarkEntry {
    pub mode: &'static str,
    pub model_id: &'static str,
    #[serde(flatten)]
    pub outcome: BenchmarkOutcome,
}

#[derive(Debug, Clone, Serialize)]
pub struct BenchmarkReport {
    pub generated_at: DateTime<Utc>,
    pub prompt: String,
    pub results: Vec<BenchmarkEntry>,
    /// Modes skipped because their model is not installed.
    pub skipped: Vec<&'static str>,
}

impl BenchmarkReport {
    /// One line per tested mode, in table order.
    pub fn render_summary(&self) -> String {
        let mut out = String::new();
        for entry in &self.results {
            let label = entry.mode.to_uppercase();
            let _ = match &entry.outcome {
                BenchmarkOutcome::Succeeded {
                    duration_secs,
                    tokens_per_sec,
                } => writeln!(
                    out,
                    "{label:12} - {tokens_per_sec:.1} tok/s ({duration_secs:.1}s)"
                ),
                BenchmarkOutcome::Failed { error } => {
                    writeln!(out, "{label:12} - Failed: {error}")
                }
            };
        }
        out
    }
}

/// Title framed by `=` rules, as printed above each report.
pub fn banner(title: &str) -> String {
    let rule = "=".repeat(60);
    format!("\n{rule}\n{title}\n{rule}\n")
}

/// `llm-models info` text for every preset against `ollama list` output.
pub fn render_info(list_output: &str) -> String {
    let mut out = banner("Available Model Configurations");
    out.push('\n');
    for mode in Mode::ALL {
        let preset: &ModelPreset = mode.preset();
        let marker = if is_listed(preset.model_id, list_output) {
            "✓"
        } else {
            "✗"
        };
        let _ = writeln!(
            out,
            "{marker} {}: {}",
            mode.as_str().to_uppercase(),
            preset.model_id
        );
        let _ = writeln!(
            out,
            "   Size: {} | Quantization: {}",
            preset.size, preset.quantization
        );
        let _ = writeln!(out, "   {}", preset.description);
        let _ = writeln!(out, "   Use case: {}\n", preset.use_case);
    }
    out
}

/// What `setup` did for one preset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetupAction {
    AlreadyInstalled,
    Pulled,
    Declined,
    /// The pull ran and failed; holds a short reason.
    Failed(String),
}

pub fn render_setup_action(mode: Mode, action: &SetupAction) -> String {
    match action {
        SetupAction::AlreadyInstalled => format!("✓ {} model already installed", mode.as_str()),
        SetupAction::Pulled => format!("✓ Successfully pulled {}", mode.model_id()),
        SetupAction::Declined => format!("- Skipped {} ({})", mode.as_str(), mode.model_id()),
        SetupAction::Failed(reason) => {
            format!("✗ Error pulling {}: {reason}", mode.model_id())
        }
    }
}

/// Modes whose model does not appear in `ollama list` output.
pub fn missing_modes(list_output: &str) -> Vec<Mode> {
    Mode::ALL
        .into_iter()
        .filter(|mode| !is_listed(mode.model_id(), list_output))
        .collect()
}

/// `[Y/n]` prompt answer: anything but `n` pulls.
pub fn confirms_pull(answer: &str) -> bool {
    !answer.trim().eq_ignore_ascii_case("n")
}
