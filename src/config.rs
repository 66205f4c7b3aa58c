//! Per-user configuration from `.makernote.toml`.
//!
//! The file is looked up in the current directory first, then in the home
//! directory. It holds plain `[section]` tables of `key = value` pairs, e.g.
//! user-supplied lens names:
//!
//! ```toml
//! [nikon]
//! "0x92 0x48 0x2a 0x2a" = "My lens"
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::debug;
use thiserror::Error;

/// Name of the configuration file.
pub const CONFIG_FILE_NAME: &str = ".makernote.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Sections of key/value settings.
#[derive(Debug, Clone, Default)]
pub struct Config {
    sections: toml::Table,
}

impl Config {
    /// Load and parse a configuration file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse configuration text.
    pub fn parse(text: &str) -> Result<Self, toml::de::Error> {
        Ok(Self {
            sections: text.parse::<toml::Table>()?,
        })
    }

    /// Value of `key` in `[section]`. Non-string scalars are returned in their TOML form.
    pub fn get(&self, section: &str, key: &str) -> Option<String> {
        let value = self.sections.get(section)?.as_table()?.get(key)?;
        Some(match value {
            toml::Value::String(s) => s.clone(),
            other => other.to_string(),
        })
    }
}

/// Path of the configuration file: `./.makernote.toml` if it exists, else in the home directory.
pub fn config_path() -> PathBuf {
    let local = std::env::current_dir()
        .map(|d| d.join(CONFIG_FILE_NAME))
        .unwrap_or_else(|_| PathBuf::from(CONFIG_FILE_NAME));
    if local.is_file() {
        return local;
    }
    dirs::home_dir()
        .map(|h| h.join(CONFIG_FILE_NAME))
        .unwrap_or(local)
}

/// Look up `key` in `[section]` of the file at `path`, or `default` if the file
/// is missing, unreadable, or has no such entry.
pub fn read_config_from(path: &Path, section: &str, key: &str, default: &str) -> String {
    match Config::load(path) {
        Ok(config) => config.get(section, key).unwrap_or_else(|| default.to_string()),
        Err(e) => {
            debug!("{e}");
            default.to_string()
        }
    }
}

/// [`read_config_from`] on the file found by [`config_path`].
pub fn read_config(section: &str, key: &str, default: &str) -> String {
    read_config_from(&config_path(), section, key, default)
}
