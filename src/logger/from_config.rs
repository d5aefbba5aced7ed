//! Logger construction from a loaded config file.

use super::Logger;
use crate::config::Config;
use crate::internal;

impl Logger {
    /// Validates `config` and starts a logger with it.
    ///
    /// # Errors
    /// The first invalid field (unknown handler, level, or strategy name; malformed size).
    pub fn from_config(config: &Config) -> Result<Self, crate::Error> {
        let builder = config.logger.to_builder()?;
        internal::debug(
            "LOGGER",
            &format!(
                "Logger from config: handler=[{}] level={} rotate={} dir={}",
                config.logger.handler.join(", "),
                config.logger.level,
                config.logger.rotate,
                config.logger.dir
            ),
        );
        Ok(builder.build())
    }

    /// Loads the default config file (defaults when absent) and starts a logger with it.
    ///
    /// # Errors
    /// Config loading or validation errors.
    pub fn from_default_config() -> Result<Self, crate::Error> {
        Self::from_config(&Config::load()?)
    }
}
