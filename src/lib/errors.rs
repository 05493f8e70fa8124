use std::{io, path::PathBuf};

use config::ConfigError as ConfigLoaderError;
use thiserror::Error;

/// Errors that can occur while loading or validating the launcher configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to build (read) the configuration file.
    #[error("Failed to read configuration file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: ConfigLoaderError,
    },
    /// Failed to deserialize TOML into a struct.
    #[error("Failed to parse configuration file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ConfigLoaderError,
    },
    /// Field failed validation.
    #[error("Configuration file {path} has invalid `{field}`: {message}")]
    InvalidField {
        path: PathBuf,
        field: &'static str,
        message: String,
    },
}

impl ConfigError {
    /// Helper to wrap `config::ConfigError` as a read failure.
    pub fn from_read_error(path: PathBuf, source: ConfigLoaderError) -> Self {
        Self::FileRead { path, source }
    }

    /// Helper to wrap `config::ConfigError` as a parse failure.
    pub fn from_parse_error(path: PathBuf, source: ConfigLoaderError) -> Self {
        Self::Parse { path, source }
    }
}

/// Failures on the path from arguments to the Aider handoff.
#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("Unknown mode `{token}` (expected one of: primary, fast, extended, complex). Run with --help for usage.")]
    InvalidMode { token: String },
    #[error("Failed to start `{binary}`: {source}")]
    ServiceStart {
        binary: String,
        #[source]
        source: io::Error,
    },
    #[error("`{binary}` did not become ready after {attempts} checks ({waited_ms} ms)")]
    ServiceStartTimeout {
        binary: String,
        attempts: u32,
        waited_ms: u128,
    },
    #[error("Failed to launch `{program}`: {source}")]
    Exec {
        program: String,
        #[source]
        source: io::Error,
    },
}

/// Failures reported by the `llm-models` commands.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("Ollama is not installed or not in PATH ({binary})")]
    OllamaMissing { binary: String },
    #[error("Unknown model key `{key}` (available keys: primary, fast, extended, complex)")]
    UnknownMode { key: String },
    #[error("Model {model_id} is not installed. Run: ollama pull {model_id}")]
    NotInstalled { model_id: String },
    #[error("`{command}` failed (exit={exit_code:?}): {message}")]
    CommandFailed {
        command: String,
        exit_code: Option<i32>,
        message: String,
    },
    #[error("`{command}` timed out after {duration_secs} seconds")]
    Timeout { command: String, duration_secs: u64 },
}

impl ModelError {
    /// Short reason used in benchmark summaries.
    pub fn summary(&self) -> String {
        match self {
            ModelError::Timeout { .. } => "timeout".to_string(),
            ModelError::CommandFailed {
                exit_code: Some(code),
                ..
            } => format!("exit {code}"),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_mode_message_names_the_token() {
        let error = LaunchError::InvalidMode {
            token: "bogus".into(),
        };
        let message = error.to_string();
        assert!(message.contains("`bogus`"), "message: {message}");
        assert!(message.contains("--help"), "message: {message}");
    }

    #[test]
    fn model_error_summary_is_short_for_known_failures() {
        let timeout = ModelError::Timeout {
            command: "ollama run".into(),
            duration_secs: 60,
        };
        assert_eq!(timeout.summary(), "timeout");

        let failed = ModelError::CommandFailed {
            command: "ollama run".into(),
            exit_code: Some(2),
            message: "boom".into(),
        };
        assert_eq!(failed.summary(), "exit 2");
    }

    #[test]
    fn not_installed_suggests_pull_command() {
        let error = ModelError::NotInstalled {
            model_id: "qwen2.5-coder:7b-instruct-q8_0".into(),
        };
        assert!(error
            .to_string()
            .ends_with("Run: ollama pull qwen2.5-coder:7b-instruct-q8_0"));
    }
}
