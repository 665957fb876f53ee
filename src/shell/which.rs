//! PATH-based executable lookup.

use std::path::{Path, PathBuf};

/// Locate a command by searching the directories in `PATH`.
///
/// Returns the first entry containing an executable file with the given
/// name, or `None` when `PATH` is unset or no entry matches. Does NOT
/// shell out to `which` — its behavior varies across systems and it is
/// sometimes a shell builtin with inconsistent error handling.
pub fn which(command: &str) -> Option<PathBuf> {
    let entries: Vec<PathBuf> = std::env::var_os("PATH")
        .map(|path| std::env::split_paths(&path).collect())
        .unwrap_or_default();
    which_in(command, &entries)
}

/// Locate a command within an explicit list of directories.
pub fn which_in(command: &str, path_entries: &[PathBuf]) -> Option<PathBuf> {
    for dir in path_entries {
        let candidate = dir.join(command);
        if candidate.is_file() && is_executable(&candidate) {
            return Some(candidate);
        }
    }
    None
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    std::fs::metadata(path)
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, executability is determined by file extension, not
/// permission bits.
#[cfg(not(unix))]
fn is_executable(_path: &Path) -> bool {
    true
}
