use tracing::{debug, info};

use super::{LauncherConfig, CONFIG_ENV_KEY};

pub fn log_env_source(path: Option<&std::path::Path>) {
    match path {
        Some(path) => info!(
            target: "aider_local::config",
            path = %path.display(),
            "Loading configuration using AIDER_LOCAL_CONFIG environment variable"
        ),
        None => debug!(
            target: "aider_local::config",
            env = CONFIG_ENV_KEY,
            "AIDER_LOCAL_CONFIG not set; using built-in defaults"
        ),
    }
}

pub fn log_loaded(config: &LauncherConfig) {
    info!(
        target: "aider_local::config",
        path = %config
            .source_path
            .as_deref()
            .map(|path| path.display().to_string())
            .unwrap_or_else(|| "<defaults>".into()),
        service_binary = %config.service.binary,
        process_name = %config.service.process_name,
        readiness_attempts = config.service.readiness_attempts,
        readiness_interval_ms = config.service.readiness_interval_ms,
        aider_binary = %config.aider.binary,
        venv = ?config.aider.venv,
        "Configuration loaded"
    );
}
