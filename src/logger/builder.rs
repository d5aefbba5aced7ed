//! Sets every field before the writer thread starts, so the first record already sees
//! the intended configuration.

use super::{Logger, Settings};
use crate::fmt::{self, FormatToken};
use crate::handler::Handler;
use crate::level::Level;
use crate::rotate::RotateStrategy;
use crate::writer::DEFAULT_QUEUE_CAPACITY;

/// Stepwise construction of a [`Logger`].
#[derive(Debug, Clone)]
pub struct LoggerBuilder {
    settings: Settings,
    queue_capacity: usize,
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggerBuilder {
    /// Same defaults as [`Logger::new`]: no sink, `DEBUG`, hourly rotation under `/tmp`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            settings: Settings::default(),
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
        }
    }

    #[must_use]
    pub const fn handler(mut self, handler: Handler) -> Self {
        self.settings.handler = handler;
        self
    }

    #[must_use]
    pub fn dir(mut self, dir: impl Into<String>) -> Self {
        self.settings.dir = dir.into();
        self
    }

    #[must_use]
    pub const fn level(mut self, level: Level) -> Self {
        self.settings.level = level;
        self
    }

    /// Token names; unknown ones are skipped.
    #[must_use]
    pub fn format<S: AsRef<str>>(mut self, names: &[S]) -> Self {
        self.settings.format = fmt::parse_tokens(names);
        self
    }

    #[must_use]
    pub fn format_tokens(mut self, tokens: &[FormatToken]) -> Self {
        self.settings.format = tokens.to_vec();
        self
    }

    #[must_use]
    pub fn rotate(mut self, strategy: RotateStrategy) -> Self {
        self.settings.rotate = strategy.into();
        self
    }

    #[must_use]
    pub const fn rotate_size(mut self, bytes: u64) -> Self {
        self.settings.rotate_size = bytes;
        self
    }

    /// Records that may wait before producers start blocking. Clamped to at least 1.
    #[must_use]
    pub const fn queue_capacity(mut self, capacity: usize) -> Self {
        self.queue_capacity = capacity;
        self
    }

    /// Starts the writer thread.
    #[must_use]
    pub fn build(self) -> Logger {
        Logger::with_settings(self.settings, self.queue_capacity)
    }
}
