//! Launch modes, edit formats and the resolved `LaunchConfig`.
use clap::ValueEnum;

use crate::lib::presets::{
    ModelPreset, COMPLEX_PRESET, EXTENDED_PRESET, FAST_PRESET, PRIMARY_PRESET,
};

/// Named preset selecting which model Aider talks to.
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq, Hash)]
pub enum Mode {
    #[default]
    Primary,
    Fast,
    Extended,
    Complex,
}

impl Mode {
    pub const ALL: [Mode; 4] = [Mode::Primary, Mode::Fast, Mode::Extended, Mode::Complex];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Mode::Primary => "primary",
            Mode::Fast => "fast",
            Mode::Extended => "extended",
            Mode::Complex => "complex",
        }
    }

    /// The preset this mode is bound to.
    pub fn preset(&self) -> &'static ModelPreset {
        match self {
            Mode::Primary => &PRIMARY_PRESET,
            Mode::Fast => &FAST_PRESET,
            Mode::Extended => &EXTENDED_PRESET,
            Mode::Complex => &COMPLEX_PRESET,
        }
    }

    pub fn model_id(&self) -> &'static str {
        self.preset().model_id
    }

    /// Case-sensitive lookup of a mode token.
    pub fn parse(token: &str) -> Option<Self> {
        <Mode as ValueEnum>::from_str(token, false).ok()
    }
}

/// How Aider proposes file changes.
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum EditFormat {
    #[default]
    Diff,
    Whole,
    Udiff,
}

impl EditFormat {
    pub const fn as_str(&self) -> &'static str {
        match self {
            EditFormat::Diff => "diff",
            EditFormat::Whole => "whole",
            EditFormat::Udiff => "udiff",
        }
    }
}

/// Fully resolved launch request. Built once per invocation and consumed by the handoff.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchConfig {
    pub mode: Mode,
    pub model_id: &'static str,
    pub edit_format: EditFormat,
    pub architect_enabled: bool,
    pub auto_commits_enabled: bool,
    pub passthrough_args: Vec<String>,
}

impl LaunchConfig {
    /// Defaults for `mode`: `diff` edits, architect and auto-commits off.
    pub fn for_mode(mode: Mode) -> Self {
        Self {
            mode,
            model_id: mode.model_id(),
            edit_format: EditFormat::default(),
            architect_enabled: false,
            auto_commits_enabled: false,
            passthrough_args: Vec::new(),
        }
    }
}
