//! Configuration struct definitions.

use crate::fmt::{DEFAULT_FORMAT, FormatToken};
use crate::output::DEFAULT_LOG_DIR;
use crate::writer::DEFAULT_QUEUE_CAPACITY;
use serde::Deserialize;

/// `[logger]` section.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LoggerConfig {
    /// Sink names: `stdout`, `stderr`, `file`. Empty disables logging.
    pub handler: Vec<String>,
    /// Log directory; `~` is expanded.
    pub dir: String,
    /// Minimum level name.
    pub level: String,
    /// Ordered token names.
    pub format: Vec<String>,
    /// `none`, `day`, `hour`, `minute` or `size`.
    pub rotate: String,
    /// Ceiling for size rotation.
    pub rotate_size: SizeValue,
    /// Queue depth before producers block.
    pub queue_capacity: usize,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            handler: vec!["stdout".to_string()],
            dir: DEFAULT_LOG_DIR.to_string(),
            level: "debug".to_string(),
            format: DEFAULT_FORMAT
                .iter()
                .map(|t| FormatToken::as_str(*t).to_string())
                .collect(),
            rotate: "hour".to_string(),
            rotate_size: SizeValue::Text("1G".to_string()),
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
        }
    }
}

/// `rotate_size = 1048576` or `rotate_size = "1M"`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum SizeValue {
    Bytes(u64),
    Text(String),
}

impl Default for SizeValue {
    fn default() -> Self {
        Self::Bytes(0)
    }
}
