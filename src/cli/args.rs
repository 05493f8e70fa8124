//! Token resolver for `aider-local`.
//!
//! The grammar is deliberately permissive: an optional leading mode, a handful of
//! recognized flags, and everything else forwarded to Aider untouched. clap's
//! strict parsing would reject the unknown flags this launcher must forward.
use crate::lib::errors::LaunchError;

use super::{EditFormat, LaunchConfig, Mode};

const HELP_TOKENS: [&str; 3] = ["help", "-h", "--help"];
const FLAG_PREFIX: char = '-';

/// Usage text printed for `help`, `-h` and `--help`.
pub const USAGE: &str = "\
aider-local: launch Aider against a local Ollama model

Usage: aider-local [MODE] [OPTIONS] [AIDER ARGS...]

Modes:
  primary    qwen2.5-coder:7b-instruct-q8_0     highest quality (default)
  fast       qwen2.5-coder:7b-instruct-q4_K_M   quick iterations
  extended   qwen2.5-coder:7b-instruct-q6_K     multi-file refactoring
  complex    qwen2.5-coder:14b-instruct-q4_K_M  architecture and hard problems

Options:
  --architect      Enable Aider architect mode
  --diff           Use the diff edit format (default)
  --whole          Use the whole-file edit format
  --udiff          Use the unified diff edit format
  --auto-commits   Let Aider commit its edits
  -h, --help       Show this help

Any other argument is passed to Aider unchanged.

Environment:
  AIDER_LOCAL_CONFIG   Launcher config file (TOML)
  RUST_LOG             Log filter for launcher messages (stderr)
";

/// Outcome of resolving the invocation's arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Print usage and exit 0.
    Help,
    /// Launch with this configuration.
    Launch(LaunchConfig),
}

fn is_flag_shaped(token: &str) -> bool {
    token.starts_with(FLAG_PREFIX)
}

fn is_help(token: &str) -> bool {
    HELP_TOKENS.contains(&token)
}

/// Resolve process arguments (without argv[0]) into a launch decision.
pub fn resolve_launch<I, S>(args: I) -> Result<Resolution, LaunchError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let tokens: Vec<String> = args.into_iter().map(Into::into).collect();

    if tokens.iter().any(|token| is_help(token)) {
        return Ok(Resolution::Help);
    }

    let mut rest = tokens.into_iter().peekable();
    let mode = match rest.next_if(|first| !is_flag_shaped(first)) {
        Some(first) => {
            Mode::parse(&first).ok_or(LaunchError::InvalidMode { token: first })?
        }
        None => Mode::default(),
    };

    let mut config = LaunchConfig::for_mode(mode);
    for token in rest {
        match token.as_str() {
            "--architect" => config.architect_enabled = true,
            "--diff" => config.edit_format = EditFormat::Diff,
            "--whole" => config.edit_format = EditFormat::Whole,
            "--udiff" => config.edit_format = EditFormat::Udiff,
            "--auto-commits" => config.auto_commits_enabled = true,
            _ => config.passthrough_args.push(token),
        }
    }

    Ok(Resolution::Launch(config))
}
