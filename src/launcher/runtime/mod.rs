//! Service readiness and the handoff to Aider.
mod handoff;
mod readiness;
mod startup;

pub use handoff::{hand_off, prepare_command};
pub use readiness::{ensure_service, ServiceStatus};
pub use startup::{run_launcher, LaunchExit};
