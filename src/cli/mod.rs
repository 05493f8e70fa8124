//! CLI entrypoint module structure.
pub mod args;
pub mod models;
pub mod profile;

pub use args::{resolve_launch, Resolution, USAGE};
pub use models::{
    BenchmarkArgs, ModelsArgs, ModelsCommand, SetupArgs, TestArgs, DEFAULT_BENCHMARK_PROMPT,
    DEFAULT_RUN_TIMEOUT_SECS, DEFAULT_TEST_PROMPT,
};
pub use profile::{EditFormat, LaunchConfig, Mode};
