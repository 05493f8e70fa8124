use std::path::Path;

use serde::Deserialize;

use crate::lib::errors::ConfigError;

pub const DEFAULT_SERVICE_BINARY: &str = "ollama";
pub const DEFAULT_SERVE_ARGS: &[&str] = &["serve"];
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:11434";
pub const DEFAULT_READINESS_ATTEMPTS: u32 = 20;
pub const DEFAULT_READINESS_INTERVAL_MS: u64 = 500;

const MAX_READINESS_ATTEMPTS: u32 = 600;
const READINESS_INTERVAL_RANGE_MS: std::ops::RangeInclusive<u64> = 50..=10_000;

/// Model-serving daemon settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceSection {
    pub binary: String,
    pub process_name: String,
    pub serve_args: Vec<String>,
    pub api_base: String,
    pub readiness_attempts: u32,
    pub readiness_interval_ms: u64,
}

impl Default for ServiceSection {
    fn default() -> Self {
        Self {
            binary: DEFAULT_SERVICE_BINARY.to_string(),
            process_name: DEFAULT_SERVICE_BINARY.to_string(),
            serve_args: DEFAULT_SERVE_ARGS.iter().map(|arg| arg.to_string()).collect(),
            api_base: DEFAULT_API_BASE.to_string(),
            readiness_attempts: DEFAULT_READINESS_ATTEMPTS,
            readiness_interval_ms: DEFAULT_READINESS_INTERVAL_MS,
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct RawServiceSection {
    pub binary: Option<String>,
    pub process_name: Option<String>,
    pub serve_args: Option<Vec<String>>,
    pub api_base: Option<String>,
    pub readiness_attempts: Option<u32>,
    pub readiness_interval_ms: Option<u64>,
}

pub fn parse_service_section(
    raw: Option<RawServiceSection>,
    path: &Path,
) -> Result<ServiceSection, ConfigError> {
    let raw = raw.unwrap_or_default();
    let defaults = ServiceSection::default();

    let binary = raw.binary.unwrap_or(defaults.binary);
    validate_non_empty(&binary, "service.binary", path)?;

    // The daemon is usually found under the binary's own name.
    let process_name = raw.process_name.unwrap_or_else(|| binary_stem(&binary));
    validate_non_empty(&process_name, "service.process_name", path)?;

    let serve_args = raw.serve_args.unwrap_or(defaults.serve_args);

    let api_base = raw.api_base.unwrap_or(defaults.api_base);
    validate_api_base(&api_base, path)?;

    let readiness_attempts = raw
        .readiness_attempts
        .unwrap_or(defaults.readiness_attempts);
    if !(1..=MAX_READINESS_ATTEMPTS).contains(&readiness_attempts) {
        return Err(ConfigError::InvalidField {
            path: path.to_path_buf(),
            field: "service.readiness_attempts",
            message: format!("Use a value in the range 1-{MAX_READINESS_ATTEMPTS}"),
        });
    }

    let readiness_interval_ms = raw
        .readiness_interval_ms
        .unwrap_or(defaults.readiness_interval_ms);
    if !READINESS_INTERVAL_RANGE_MS.contains(&readiness_interval_ms) {
        return Err(ConfigError::InvalidField {
            path: path.to_path_buf(),
            field: "service.readiness_interval_ms",
            message: format!(
                "Use a value in the range {}-{}",
                READINESS_INTERVAL_RANGE_MS.start(),
                READINESS_INTERVAL_RANGE_MS.end()
            ),
        });
    }

    Ok(ServiceSection {
        binary,
        process_name,
        serve_args,
        api_base,
        readiness_attempts,
        readiness_interval_ms,
    })
}

fn binary_stem(binary: &str) -> String {
    Path::new(binary)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(binary)
        .to_string()
}

fn validate_non_empty(value: &str, field: &'static str, path: &Path) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::InvalidField {
            path: path.to_path_buf(),
            field,
            message: "Must not be empty".into(),
        });
    }
    Ok(())
}

fn validate_api_base(api_base: &str, path: &Path) -> Result<(), ConfigError> {
    if api_base.starts_with("http://") || api_base.starts_with("https://") {
        return Ok(());
    }

    Err(ConfigError::InvalidField {
        path: path.to_path_buf(),
        field: "service.api_base",
        message: "Use an http:// or https:// URL".into(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn process_name_follows_binary_file_name() {
        let raw = RawServiceSection {
            binary: Some("/usr/local/bin/ollama".into()),
            ..Default::default()
        };
        let section = parse_service_section(Some(raw), Path::new("launcher.toml"))
            .expect("absolute binary should be accepted");
        assert_eq!(section.process_name, "ollama");
        assert_eq!(section.serve_args, vec!["serve"]);
    }

    #[test]
    fn zero_interval_is_rejected() {
        let raw = RawServiceSection {
            readiness_interval_ms: Some(0),
            ..Default::default()
        };
        let error = parse_service_section(Some(raw), Path::new("launcher.toml"))
            .expect_err("interval below range");
        match error {
            ConfigError::InvalidField { field, .. } => {
                assert_eq!(field, "service.readiness_interval_ms")
            }
            other => panic!("Unexpected error: {other:?}"),
        }
    }
}
