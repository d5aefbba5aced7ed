//! Rotation strategies and the policy engine that maps a record to a physical file.

mod policy;
mod size;

pub use policy::{RotationHint, Target, file_size, next_file_name, resolve};
pub use size::{parse_size, size_label};

use std::fmt;
use std::str::FromStr;

/// Fixed name used when rotation is disabled.
pub const DEFAULT_FILE_NAME: &str = "default.log";
/// Prefix of size-rotated files: `rotating-<size>.<index>.log`.
pub const SIZE_FILE_PREFIX: &str = "rotating";
/// Ceiling applied when size rotation is active but no ceiling was set.
pub const DEFAULT_ROTATE_SIZE: u64 = 1 << 30;

/// When the file sink switches to a new physical file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum RotateStrategy {
    /// Always `default.log`.
    None = 0,
    /// `YYYY-MM-DD.log`
    Day = 1,
    /// `YYYY-MM-DD_HH.log`
    #[default]
    Hour = 2,
    /// `YYYY-MM-DD_HH-MM.log`
    Minute = 3,
    /// `rotating-<size>.<index>.log`, advancing when the ceiling would be exceeded.
    Size = 4,
}

impl RotateStrategy {
    /// Maps a raw strategy code, or `None` for codes outside the known set.
    #[must_use]
    pub const fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(Self::None),
            1 => Some(Self::Day),
            2 => Some(Self::Hour),
            3 => Some(Self::Minute),
            4 => Some(Self::Size),
            _ => None,
        }
    }

    /// Unknown codes fall back to hourly rotation. Applied by the writer, never at set time.
    #[must_use]
    pub fn resolve(raw: u8) -> Self {
        Self::from_raw(raw).unwrap_or_default()
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Day => "day",
            Self::Hour => "hour",
            Self::Minute => "minute",
            Self::Size => "size",
        }
    }

    /// Calendar strategies rotate on the record's timestamp; only `Size` rotates on bytes.
    #[must_use]
    pub const fn is_size_based(self) -> bool {
        matches!(self, Self::Size)
    }

    /// strftime pattern of the file name for time-keyed strategies.
    const fn calendar_pattern(self) -> Option<&'static str> {
        match self {
            Self::Day => Some("%Y-%m-%d.log"),
            Self::Hour => Some("%Y-%m-%d_%H.log"),
            Self::Minute => Some("%Y-%m-%d_%H-%M.log"),
            Self::None | Self::Size => None,
        }
    }
}

impl From<RotateStrategy> for u8 {
    fn from(strategy: RotateStrategy) -> Self {
        strategy as Self
    }
}

impl fmt::Display for RotateStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown strategy name in config or CLI input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseRotateError(String);

impl fmt::Display for ParseRotateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown rotation strategy: '{}'", self.0)
    }
}

impl std::error::Error for ParseRotateError {}

impl FromStr for RotateStrategy {
    type Err = ParseRotateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "none" | "off" => Ok(Self::None),
            "day" | "daily" => Ok(Self::Day),
            "hour" | "hourly" => Ok(Self::Hour),
            "minute" => Ok(Self::Minute),
            "size" => Ok(Self::Size),
            _ => Err(ParseRotateError(s.to_string())),
        }
    }
}
