//! Configuration loading
//!
//! Reads `~/.config/bookdesk/config.toml`. A missing file means defaults; a
//! broken file also means defaults, plus a warning for the status line so a
//! typo never prevents the app from starting.

use std::fs;
use std::path::{Path, PathBuf};

mod types;

pub use types::{
    ApiConfig, AutocompleteConfig, Config, DEFAULT_BASE_URL, PAGE_SIZE_OPTIONS, SearchConfig,
    SortDirection, SortField,
};

use crate::error::BookdeskError;

const CONFIG_DIR: &str = "bookdesk";
const CONFIG_FILE: &str = "config.toml";

/// Outcome of loading the configuration
#[derive(Debug, Clone, Default)]
pub struct ConfigResult {
    pub config: Config,
    /// Set when the file existed but could not be used
    pub warning: Option<String>,
}

/// Default config file location
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load config from the default location
pub fn load_config() -> ConfigResult {
    match config_path() {
        Some(path) => load_config_from(&path),
        None => ConfigResult::default(),
    }
}

/// Load config from an explicit path
pub fn load_config_from(path: &Path) -> ConfigResult {
    match read_config(path) {
        Ok(Some(config)) => ConfigResult {
            config,
            warning: None,
        },
        Ok(None) => ConfigResult::default(),
        Err(e) => {
            log::warn!("{}", e);
            ConfigResult {
                config: Config::default(),
                warning: Some(e.to_string()),
            }
        }
    }
}

/// Read and parse a config file; `Ok(None)` when the file does not exist
fn read_config(path: &Path) -> Result<Option<Config>, BookdeskError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    let config: Config = toml::from_str(&content).map_err(|e| BookdeskError::InvalidConfig {
        path: path.display().to_string(),
        message: e.message().to_string(),
    })?;
    validate(&config, path)?;
    Ok(Some(config))
}

fn validate(config: &Config, path: &Path) -> Result<(), BookdeskError> {
    if config.autocomplete.limit == 0 {
        return Err(BookdeskError::InvalidConfig {
            path: path.display().to_string(),
            message: "autocomplete.limit must be at least 1".to_string(),
        });
    }
    if config.search.page_size == 0 {
        return Err(BookdeskError::InvalidConfig {
            path: path.display().to_string(),
            message: "search.page_size must be at least 1".to_string(),
        });
    }
    Ok(())
}

/// Check that a base URL is usable by the HTTP client
pub fn validate_base_url(url: &str) -> Result<(), BookdeskError> {
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(())
    } else {
        Err(BookdeskError::InvalidBaseUrl(url.to_string()))
    }
}
