//! Optional TOML config file
//!
//! Searched in the current directory first (`.gh-pr-chores.toml`), then in
//! the per-user config directory. The first file found wins; values are
//! never merged across files.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Values a config file may provide
///
/// The access token is deliberately absent: it only comes from the
/// environment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    /// Default repository as `owner/name`
    pub repository: Option<String>,
    /// Branch PRs are opened against and refreshed from
    pub base_branch: Option<String>,
    /// Issue tracker key used in the `Fixes` line
    pub issue_prefix: Option<String>,
}

/// Load the first config file found in the default search paths
pub fn load_config_file() -> ConfigFile {
    load_config_file_from(&crate::paths::config_search_paths())
}

/// Load the first readable and parseable file of `paths`
///
/// A file that exists but fails to parse is logged and skipped, falling
/// back to the next candidate and finally to an empty config.
pub fn load_config_file_from(paths: &[PathBuf]) -> ConfigFile {
    for path in paths {
        let Ok(content) = std::fs::read_to_string(path) else {
            continue;
        };
        match parse(path, &content) {
            Some(config) => return config,
            None => continue,
        }
    }

    log::debug!("No config file found, using environment and defaults");
    ConfigFile::default()
}

fn parse(path: &Path, content: &str) -> Option<ConfigFile> {
    match toml::from_str(content) {
        Ok(config) => {
            log::debug!("Loaded config from {}", path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!("Failed to parse config file {}: {}", path.display(), e);
            None
        }
    }
}
