//! Unified error type for configuration and parsing.
//!
//! The logging path itself never returns these: sink faults are absorbed by the writer thread.

/// Error type for rotolog operations.
#[derive(Debug)]
pub enum Error {
    /// I/O error.
    Io(std::io::Error),
    /// TOML config parsing error.
    ConfigParse(toml::de::Error),
    /// Config directory not found.
    ConfigDirNotFound,
    /// Invalid log level string.
    InvalidLevel(String),
    /// Invalid handler name.
    InvalidHandler(String),
    /// Invalid rotation strategy name.
    InvalidRotation(String),
    /// Invalid size string (e.g. `rotate_size = "ten"`).
    InvalidSize(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::ConfigParse(e) => write!(f, "parse error: {e}"),
            Self::ConfigDirNotFound => write!(f, "config directory not found"),
            Self::InvalidLevel(level) => write!(f, "invalid level: {level}"),
            Self::InvalidHandler(name) => write!(f, "invalid handler: {name}"),
            Self::InvalidRotation(name) => write!(f, "invalid rotation strategy: {name}"),
            Self::InvalidSize(s) => write!(f, "invalid size: {s}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::ConfigParse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Self::ConfigParse(e)
    }
}

impl From<crate::level::ParseLevelError> for Error {
    fn from(e: crate::level::ParseLevelError) -> Self {
        Self::InvalidLevel(e.to_string())
    }
}

impl From<crate::handler::ParseHandlerError> for Error {
    fn from(e: crate::handler::ParseHandlerError) -> Self {
        Self::InvalidHandler(e.to_string())
    }
}

impl From<crate::rotate::ParseRotateError> for Error {
    fn from(e: crate::rotate::ParseRotateError) -> Self {
        Self::InvalidRotation(e.to_string())
    }
}
