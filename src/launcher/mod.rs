//! Launcher configuration, daemon probing and runtime.
pub mod config;
pub mod probe;
pub mod runtime;
