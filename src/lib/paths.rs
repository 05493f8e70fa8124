//! Path helpers shared by config validation and the Aider handoff.

use std::{
    env,
    ffi::OsString,
    path::{Path, PathBuf},
};

#[cfg(windows)]
const VENV_BIN_DIR: &str = "Scripts";
#[cfg(not(windows))]
const VENV_BIN_DIR: &str = "bin";

/// Returns true if the path is non-empty and absolute.
pub fn is_nonempty_absolute(path: &Path) -> bool {
    !path.as_os_str().is_empty() && path.is_absolute()
}

/// Directory holding a virtualenv's executables.
pub fn venv_bin_dir(venv: &Path) -> PathBuf {
    venv.join(VENV_BIN_DIR)
}

/// `PATH` value with `dir` placed in front of `current`.
///
/// Falls back to `current` unchanged if the joined value cannot be represented.
pub fn prepend_search_path(dir: &Path, current: Option<&OsString>) -> OsString {
    let mut entries = vec![dir.to_path_buf()];
    if let Some(current) = current {
        entries.extend(env::split_paths(current));
    }
    env::join_paths(entries)
        .unwrap_or_else(|_| current.cloned().unwrap_or_else(|| dir.as_os_str().to_owned()))
}
