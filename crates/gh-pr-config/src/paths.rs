//! Configuration file paths
//!
//! Uses XDG directories via `dirs` crate.
//!
//! Platform-specific locations of the global config file:
//! - Linux: `~/.config/gh-pr-chores/config.toml`
//! - macOS: `~/Library/Application Support/gh-pr-chores/config.toml`
//! - Windows: `%APPDATA%\gh-pr-chores\config.toml`

use std::path::PathBuf;

const APP_NAME: &str = "gh-pr-chores";
const LOCAL_CONFIG_FILE: &str = ".gh-pr-chores.toml";
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Get the application config directory, if the platform has one
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|base| base.join(APP_NAME))
}

/// Path of the per-project config file (relative to CWD)
pub fn local_config_path() -> PathBuf {
    PathBuf::from(LOCAL_CONFIG_FILE)
}

/// Path of the per-user config file
pub fn global_config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(GLOBAL_CONFIG_FILE))
}

/// Config file candidates, highest precedence first
pub fn config_search_paths() -> Vec<PathBuf> {
    let mut paths = vec![local_config_path()];
    paths.extend(global_config_path());
    paths
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_config_is_searched_first() {
        let paths = config_search_paths();
        assert_eq!(paths[0], PathBuf::from(LOCAL_CONFIG_FILE));
    }

    #[test]
    fn test_global_config_path() {
        if let Some(path) = global_config_path() {
            assert!(path.ends_with("gh-pr-chores/config.toml"));
        }
    }
}
