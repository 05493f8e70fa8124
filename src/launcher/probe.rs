//! Environment access for the model-serving daemon.
use std::process::{Command, Stdio};

use crate::lib::{errors::LaunchError, ollama};

use super::config::ServiceSection;

/// Abstraction over daemon lookup, start and readiness checks.
pub trait ServiceProbe {
    /// Whether a process with the daemon's name exists.
    fn is_running(&self) -> bool;
    /// Spawn the daemon in the background without waiting for it.
    fn start(&self) -> Result<(), LaunchError>;
    /// Whether the daemon answers a status query.
    fn is_ready(&self) -> bool;
}

/// Probe that operates against the real environment.
pub struct SystemServiceProbe<'a> {
    service: &'a ServiceSection,
}

impl<'a> SystemServiceProbe<'a> {
    pub fn new(service: &'a ServiceSection) -> Self {
        Self { service }
    }
}

fn succeeds(mut command: Command) -> bool {
    command
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|status| status.success())
        .unwrap_or(false)
}

impl ServiceProbe for SystemServiceProbe<'_> {
    #[cfg(unix)]
    fn is_running(&self) -> bool {
        let mut command = Command::new("pgrep");
        command.arg("-x").arg(&self.service.process_name);
        succeeds(command)
    }

    #[cfg(not(unix))]
    fn is_running(&self) -> bool {
        self.is_ready()
    }

    fn start(&self) -> Result<(), LaunchError> {
        ollama::serve_command(&self.service.binary, &self.service.serve_args)
            .spawn()
            .map(|child| {
                tracing::debug!(
                    target: "aider_local::service",
                    pid = child.id(),
                    "Spawned model-serving daemon"
                );
            })
            .map_err(|source| LaunchError::ServiceStart {
                binary: self.service.binary.clone(),
                source,
            })
    }

    fn is_ready(&self) -> bool {
        succeeds(ollama::list_command(&self.service.binary))
    }
}
