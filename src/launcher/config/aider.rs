use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::lib::{errors::ConfigError, paths::is_nonempty_absolute};

pub const DEFAULT_AIDER_BINARY: &str = "aider";
pub const DEFAULT_MODEL_PREFIX: &str = "ollama/";

/// Aider invocation settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AiderSection {
    pub binary: String,
    pub model_prefix: String,
    /// Pre-existing virtualenv Aider is installed in, activated for the handoff.
    pub venv: Option<PathBuf>,
}

impl Default for AiderSection {
    fn default() -> Self {
        Self {
            binary: DEFAULT_AIDER_BINARY.to_string(),
            model_prefix: DEFAULT_MODEL_PREFIX.to_string(),
            venv: None,
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct RawAiderSection {
    pub binary: Option<String>,
    pub model_prefix: Option<String>,
    pub venv: Option<PathBuf>,
}

pub fn parse_aider_section(
    raw: Option<RawAiderSection>,
    path: &Path,
) -> Result<AiderSection, ConfigError> {
    let raw = raw.unwrap_or_default();
    let defaults = AiderSection::default();

    let binary = raw
        .binary
        .filter(|value| !value.trim().is_empty())
        .unwrap_or(defaults.binary);
    let model_prefix = raw.model_prefix.unwrap_or(defaults.model_prefix);

    if let Some(venv) = &raw.venv {
        if !is_nonempty_absolute(venv) {
            return Err(ConfigError::InvalidField {
                path: path.to_path_buf(),
                field: "aider.venv",
                message: format!("Use an absolute path (got {})", venv.display()),
            });
        }
    }

    Ok(AiderSection {
        binary,
        model_prefix,
        venv: raw.venv,
    })
}
