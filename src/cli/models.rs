//! Argument definitions for the `llm-models` binary.
use clap::{Args, Parser, Subcommand};

/// Default prompt for `llm-models test`.
pub const DEFAULT_TEST_PROMPT: &str = "def fibonacci(n):";
/// Prompt used for every model during `llm-models benchmark`.
pub const DEFAULT_BENCHMARK_PROMPT: &str = "def quicksort(arr):";
/// Upper bound for a single `ollama run` during tests and benchmarks.
pub const DEFAULT_RUN_TIMEOUT_SECS: u64 = 60;

/// Command-line arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "llm-models",
    author,
    version,
    about = "Manage the Ollama models behind aider-local modes",
    long_about = None
)]
pub struct ModelsArgs {
    #[command(subcommand)]
    pub command: ModelsCommand,
}

/// `llm-models` subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum ModelsCommand {
    /// List installed Ollama models.
    List,
    /// Show every mode preset and whether it is installed.
    Info,
    /// Pull the presets that are not installed yet.
    Setup(SetupArgs),
    /// Run a short completion against one preset and report its speed.
    Test(TestArgs),
    /// Test every installed preset and print a summary.
    Benchmark(BenchmarkArgs),
}

/// Arguments for `setup`.
#[derive(Debug, Clone, Args)]
pub struct SetupArgs {
    /// Pull missing models without asking.
    #[arg(long, short = 'y', default_value_t = false)]
    pub yes: bool,
}

/// Arguments for `test`.
#[derive(Debug, Clone, Args)]
pub struct TestArgs {
    /// Mode whose model should be tested (primary, fast, extended, complex).
    #[arg(value_name = "MODE")]
    pub mode: String,
    /// Code prefix the model is asked to complete.
    #[arg(long, default_value = DEFAULT_TEST_PROMPT)]
    pub prompt: String,
    /// Abort the run after this many seconds.
    #[arg(long, default_value_t = DEFAULT_RUN_TIMEOUT_SECS)]
    pub timeout_secs: u64,
}

/// Arguments for `benchmark`.
#[derive(Debug, Clone, Args)]
pub struct BenchmarkArgs {
    /// Code prefix every model is asked to complete.
    #[arg(long, default_value = DEFAULT_BENCHMARK_PROMPT)]
    pub prompt: String,
    /// Print the summary as JSON.
    #[arg(long, default_value_t = false)]
    pub json: bool,
}
