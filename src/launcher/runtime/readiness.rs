use std::time::{Duration, Instant};

use tokio::time::sleep;
use tracing::{debug, info};

use crate::{
    launcher::{config::ServiceSection, probe::ServiceProbe},
    lib::errors::LaunchError,
};

/// How the daemon came to be available.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceStatus {
    AlreadyRunning,
    /// Started by the launcher; ready on the `attempts`-th check.
    Started { attempts: u32 },
}

/// Make sure the daemon is running, starting it and polling readiness if needed.
///
/// Polls at most `readiness_attempts` times, sleeping `readiness_interval_ms`
/// between checks.
pub async fn ensure_service<P: ServiceProbe>(
    probe: &P,
    service: &ServiceSection,
) -> Result<ServiceStatus, LaunchError> {
    if probe.is_running() {
        debug!(
            target: "aider_local::service",
            process_name = %service.process_name,
            "Model-serving daemon already running"
        );
        return Ok(ServiceStatus::AlreadyRunning);
    }

    info!(
        target: "aider_local::service",
        binary = %service.binary,
        args = ?service.serve_args,
        "Model-serving daemon not running; starting it"
    );
    probe.start()?;

    let interval = Duration::from_millis(service.readiness_interval_ms);
    let started_at = Instant::now();
    for attempt in 1..=service.readiness_attempts {
        if probe.is_ready() {
            info!(
                target: "aider_local::service",
                attempts = attempt,
                elapsed_ms = started_at.elapsed().as_millis(),
                "Model-serving daemon is ready"
            );
            return Ok(ServiceStatus::Started { attempts: attempt });
        }
        if attempt < service.readiness_attempts {
            sleep(interval).await;
        }
    }

    Err(LaunchError::ServiceStartTimeout {
        binary: service.binary.clone(),
        attempts: service.readiness_attempts,
        waited_ms: started_at.elapsed().as_millis(),
    })
}
