//! Selection of sink kinds a logger writes to.

use std::fmt;
use std::ops::{BitOr, BitOrAssign};
use std::str::FromStr;

/// Bitset over {stdout, stderr, file}. `Handler::NONE` disables logging entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Handler(u8);

impl Handler {
    /// No sink: every log call returns before touching the queue.
    pub const NONE: Self = Self(0);
    /// Process stdout.
    pub const STDOUT: Self = Self(1);
    /// Process stderr.
    pub const STDERR: Self = Self(1 << 1);
    /// Rotating file under the configured log directory.
    pub const FILE: Self = Self(1 << 2);

    const ALL_BITS: u8 = 0b111;

    /// Builds a handler from raw bits, ignoring bits outside the known set.
    #[must_use]
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits & Self::ALL_BITS)
    }

    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }

    #[must_use]
    pub const fn is_none(self) -> bool {
        self.0 == 0
    }

    /// True when every bit of `other` is set in `self`.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        other.0 != 0 && self.0 & other.0 == other.0
    }

    /// Lowercase names of the active kinds, in stdout/stderr/file order.
    #[must_use]
    pub fn names(self) -> Vec<&'static str> {
        [(Self::STDOUT, "stdout"), (Self::STDERR, "stderr"), (Self::FILE, "file")]
            .into_iter()
            .filter(|(kind, _)| self.contains(*kind))
            .map(|(_, name)| name)
            .collect()
    }
}

impl BitOr for Handler {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for Handler {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl fmt::Display for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_none() {
            return f.write_str("none");
        }
        f.write_str(&self.names().join("|"))
    }
}

/// Unknown sink name in config or CLI input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseHandlerError(String);

impl fmt::Display for ParseHandlerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown handler: '{}'", self.0)
    }
}

impl std::error::Error for ParseHandlerError {}

impl FromStr for Handler {
    type Err = ParseHandlerError;

    /// Accepts a single name or several joined by `|` or `,` (`"stdout|file"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut handler = Self::NONE;
        for part in s.split(['|', ',']).map(str::trim).filter(|p| !p.is_empty()) {
            handler |= match part.to_lowercase().as_str() {
                "none" => Self::NONE,
                "stdout" => Self::STDOUT,
                "stderr" => Self::STDERR,
                "file" => Self::FILE,
                _ => return Err(ParseHandlerError(part.to_string())),
            };
        }
        Ok(handler)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_checks_each_bit() {
        let h = Handler::STDOUT | Handler::FILE;
        assert!(h.contains(Handler::STDOUT));
        assert!(h.contains(Handler::FILE));
        assert!(!h.contains(Handler::STDERR));
        assert!(!h.contains(Handler::NONE));
    }

    #[test]
    fn parses_joined_names() {
        let h: Handler = "stdout | file".parse().unwrap();
        assert_eq!(h, Handler::STDOUT | Handler::FILE);
        assert_eq!(h.to_string(), "stdout|file");
        assert_eq!("none".parse::<Handler>().unwrap(), Handler::NONE);
        assert!("syslog".parse::<Handler>().is_err());
    }

    #[test]
    fn from_bits_masks_unknown_bits() {
        assert_eq!(Handler::from_bits(0xff).bits(), 0b111);
    }
}
