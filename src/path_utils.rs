//! Path validation helpers for the config layer

use std::path::Path;

/// Rejects path strings that are empty or only whitespace
pub fn validate_path_str(path_str: &str) -> Result<(), String> {
    if path_str.trim().is_empty() {
        return Err("Path cannot be empty or contain only whitespace".to_string());
    }
    Ok(())
}

/// Parent directory worth creating before writing `path`.
/// Returns None for bare file names such as "config.toml".
pub fn safe_parent_for_creation(path: &Path) -> Option<&Path> {
    path.parent().filter(|p| !p.as_os_str().is_empty())
}
