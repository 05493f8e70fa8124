//! Tools built on the mode preset table.
pub mod models;

pub use models::{execute_models_command, ModelManager};
