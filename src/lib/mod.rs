//! Shared library modules providing error types, presets, command builders and telemetry.

pub mod aider;
pub mod errors;
pub mod ollama;
pub mod paths;
pub mod presets;
pub mod telemetry;
