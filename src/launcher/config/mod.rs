//! Load and validate launcher configuration.
use std::{env, path::PathBuf};

use serde::Deserialize;
use tracing::{error, info};

use crate::lib::errors::ConfigError;

pub mod aider;
pub mod service;
pub mod telemetry;

pub use aider::{
    parse_aider_section, AiderSection, RawAiderSection, DEFAULT_AIDER_BINARY,
    DEFAULT_MODEL_PREFIX,
};
pub use service::{
    parse_service_section, RawServiceSection, ServiceSection, DEFAULT_API_BASE,
    DEFAULT_READINESS_ATTEMPTS, DEFAULT_READINESS_INTERVAL_MS, DEFAULT_SERVICE_BINARY,
};

pub(crate) const CONFIG_ENV_KEY: &str = "AIDER_LOCAL_CONFIG";

/// Top-level configuration container.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LauncherConfig {
    pub service: ServiceSection,
    pub aider: AiderSection,
    /// `None` when running on built-in defaults.
    pub source_path: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
struct RawLauncherConfig {
    service: Option<RawServiceSection>,
    aider: Option<RawAiderSection>,
}

impl LauncherConfig {
    /// Read `AIDER_LOCAL_CONFIG` if set; otherwise use built-in defaults.
    pub fn load_from_env_or_default() -> Result<Self, ConfigError> {
        let path = env::var_os(CONFIG_ENV_KEY)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from);
        Self::load_optional(path)
    }

    /// Load from `path` when given, defaults otherwise.
    pub fn load_optional(path: Option<PathBuf>) -> Result<Self, ConfigError> {
        telemetry::log_env_source(path.as_deref());
        let config = match path {
            Some(path) => Self::load_from_path(path)?,
            None => Self::default(),
        };
        telemetry::log_loaded(&config);
        Ok(config)
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: PathBuf) -> Result<Self, ConfigError> {
        info!(
            target: "aider_local::config",
            path = %path.display(),
            "Starting configuration load"
        );

        let builder = config::Config::builder().add_source(config::File::from(path.clone()));
        let document = builder.build().map_err(|err| {
            let error = ConfigError::from_read_error(path.clone(), err);
            error!(
                target: "aider_local::config",
                path = %path.display(),
                reason = %error,
                "Failed to read configuration file"
            );
            error
        })?;

        let raw: RawLauncherConfig = document.try_deserialize().map_err(|err| {
            let error = ConfigError::from_parse_error(path.clone(), err);
            error!(
                target: "aider_local::config",
                path = %path.display(),
                reason = %error,
                "Failed to parse configuration file"
            );
            error
        })?;

        Self::from_raw(raw, path.clone()).map_err(|err| {
            error!(
                target: "aider_local::config",
                path = %path.display(),
                reason = %err,
                "Failed to validate configuration file"
            );
            err
        })
    }

    fn from_raw(raw: RawLauncherConfig, path: PathBuf) -> Result<Self, ConfigError> {
        let service = parse_service_section(raw.service, &path)?;
        let aider = parse_aider_section(raw.aider, &path)?;

        Ok(Self {
            service,
            aider,
            source_path: Some(path),
        })
    }
}
