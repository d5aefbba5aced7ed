//! Decides which file a record lands in and whether that file must be created first.
//!
//! Only looks at the filesystem through `stat`; opening and closing handles is the
//! destination set's job.

use super::{DEFAULT_FILE_NAME, RotateStrategy, SIZE_FILE_PREFIX, size_label};
use chrono::{DateTime, Local};
use std::fs;
use std::path::Path;

/// Computed by the producer at enqueue time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationHint {
    /// Byte length of the terminated record (size rotation).
    Bytes(u64),
    /// Wall-clock time the record was formatted (calendar rotation).
    Time(DateTime<Local>),
}

impl RotationHint {
    #[must_use]
    pub const fn bytes(&self) -> Option<u64> {
        match self {
            Self::Bytes(n) => Some(*n),
            Self::Time(_) => None,
        }
    }

    #[must_use]
    pub const fn time(&self) -> Option<DateTime<Local>> {
        match self {
            Self::Time(t) => Some(*t),
            Self::Bytes(_) => None,
        }
    }
}

/// Outcome of one policy evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    /// File name relative to the log directory.
    pub filename: String,
    /// Create (truncate) instead of appending.
    pub need_new_file: bool,
}

impl Target {
    fn new(filename: impl Into<String>, need_new_file: bool) -> Self {
        Self {
            filename: filename.into(),
            need_new_file,
        }
    }
}

/// Size of a regular file, or `None` when it does not exist.
#[must_use]
pub fn file_size(path: &Path) -> Option<u64> {
    fs::metadata(path)
        .ok()
        .filter(fs::Metadata::is_file)
        .map(|m| m.len())
}

/// `rotating-100B.3.log` becomes `rotating-100B.4.log`.
#[must_use]
pub fn next_file_name(current: &str) -> String {
    let Some((prefix, rest)) = current.split_once('.') else {
        return format!("{current}.1.log");
    };
    let index = rest
        .split('.')
        .next()
        .and_then(|n| n.parse::<u64>().ok())
        .unwrap_or(0);
    format!("{prefix}.{}.log", index.saturating_add(1))
}

/// Maps `(strategy, current file, directory, hint)` to the file the record belongs in.
///
/// `current` is the name the writer last wrote to, `None` after startup or after the
/// directory or strategy changed. Calendar-keyed and `None` strategies create the file
/// exactly when it is missing on disk.
#[must_use]
pub fn resolve(
    strategy: RotateStrategy,
    current: Option<&str>,
    dir: &Path,
    hint: &RotationHint,
    max_size: u64,
) -> Target {
    if strategy.is_size_based() {
        return resolve_by_size(current, dir, hint.bytes().unwrap_or(0), max_size);
    }

    let filename = strategy.calendar_pattern().map_or_else(
        || DEFAULT_FILE_NAME.to_string(),
        |pattern| {
            hint.time()
                .unwrap_or_else(Local::now)
                .format(pattern)
                .to_string()
        },
    );
    let need_new_file = file_size(&dir.join(&filename)).is_none();
    Target::new(filename, need_new_file)
}

fn resolve_by_size(current: Option<&str>, dir: &Path, record_size: u64, max_size: u64) -> Target {
    let Some(current) = current else {
        // Cold start: first index that is missing or still has room. Linear in the
        // number of rotated files already on disk.
        let mut candidate = format!("{SIZE_FILE_PREFIX}-{}.0.log", size_label(max_size));
        loop {
            match file_size(&dir.join(&candidate)) {
                None => return Target::new(candidate, true),
                Some(size) if size.saturating_add(record_size) <= max_size => {
                    return Target::new(candidate, false);
                }
                Some(_) => candidate = next_file_name(&candidate),
            }
        }
    };

    match file_size(&dir.join(current)) {
        None => Target::new(current, true),
        Some(size) if size.saturating_add(record_size) > max_size => {
            Target::new(next_file_name(current), true)
        }
        Some(_) => Target::new(current, false),
    }
}
