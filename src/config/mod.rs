//! TOML configuration for building a logger without code.
//!
//! Every field is optional; an empty or missing file yields a stdout logger with the
//! same defaults as the programmatic API.

mod structs;

pub use structs::{LoggerConfig, SizeValue};

use crate::fmt::{self, FormatToken};
use crate::handler::Handler;
use crate::level::Level;
use crate::logger::LoggerBuilder;
use crate::rotate::{self, RotateStrategy};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Top-level config file.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub logger: LoggerConfig,
}

impl Config {
    /// Loads `<config dir>/rotolog/rotolog.toml`, or defaults when it does not exist.
    ///
    /// # Errors
    /// Fails if the config directory can't be determined, the file can't be read, or the
    /// TOML is malformed.
    pub fn load() -> Result<Self, crate::Error> {
        let path = Self::get_config_path()?;
        if !path.exists() {
            crate::internal::debug("CONFIG", "Config file not found, using defaults");
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    /// Loads an explicit file.
    ///
    /// # Errors
    /// Returns error if the file cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, crate::Error> {
        let content = fs::read_to_string(path)?;
        let config = Self::parse(&content)?;
        crate::internal::debug("CONFIG", &format!("Config loaded from {}", path.display()));
        Ok(config)
    }

    /// Parses TOML text.
    ///
    /// # Errors
    /// Returns error on TOML syntax or type errors.
    pub fn parse(content: &str) -> Result<Self, crate::Error> {
        Ok(toml::from_str(content)?)
    }

    /// `~/.config/rotolog/rotolog.toml` on Linux.
    ///
    /// # Errors
    /// Fails when the platform has no concept of a config directory.
    pub fn get_config_path() -> Result<PathBuf, crate::Error> {
        directories::BaseDirs::new()
            .map(|dirs| dirs.config_dir().join("rotolog").join("rotolog.toml"))
            .ok_or(crate::Error::ConfigDirNotFound)
    }
}

impl LoggerConfig {
    /// # Errors
    /// Unknown handler name.
    pub fn parse_handler(&self) -> Result<Handler, crate::Error> {
        self.handler
            .iter()
            .try_fold(Handler::NONE, |acc, name| -> Result<Handler, crate::Error> {
                Ok(acc | name.parse::<Handler>()?)
            })
    }

    /// # Errors
    /// Unknown level name.
    pub fn parse_level(&self) -> Result<Level, crate::Error> {
        Ok(self.level.parse::<Level>()?)
    }

    /// # Errors
    /// Unknown strategy name.
    pub fn parse_rotate(&self) -> Result<RotateStrategy, crate::Error> {
        Ok(self.rotate.parse::<RotateStrategy>()?)
    }

    /// # Errors
    /// Size text that is neither a number nor a number with a unit suffix.
    pub fn parse_rotate_size(&self) -> Result<u64, crate::Error> {
        match &self.rotate_size {
            SizeValue::Bytes(n) => Ok(*n),
            SizeValue::Text(s) => {
                rotate::parse_size(s).ok_or_else(|| crate::Error::InvalidSize(s.clone()))
            }
        }
    }

    /// Unknown token names are skipped, as with `set_log_format`.
    #[must_use]
    pub fn parse_format(&self) -> Vec<FormatToken> {
        fmt::parse_tokens(&self.format)
    }

    /// Validates every field and returns a builder carrying them.
    ///
    /// # Errors
    /// The first invalid field.
    pub fn to_builder(&self) -> Result<LoggerBuilder, crate::Error> {
        Ok(LoggerBuilder::new()
            .handler(self.parse_handler()?)
            .dir(self.dir.clone())
            .level(self.parse_level()?)
            .format_tokens(&self.parse_format())
            .rotate(self.parse_rotate()?)
            .rotate_size(self.parse_rotate_size()?)
            .queue_capacity(self.queue_capacity))
    }
}
