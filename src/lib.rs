//! Library crate root re-exporting the launcher, CLI and model-manager modules.

#[path = "lib/mod.rs"]
pub mod lib_mod;
pub use lib_mod as lib;
pub mod cli;
pub mod launcher;
pub mod tools;
