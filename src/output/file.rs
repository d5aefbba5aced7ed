//! The one destination that owns an OS handle. Opening, truncating, reusing and closing
//! all happen here, steered by the rotation policy.

use crate::internal;
use crate::rotate::{self, DEFAULT_ROTATE_SIZE, RotateStrategy, RotationHint};

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Used when the configured directory is empty.
pub const DEFAULT_LOG_DIR: &str = "/tmp";

/// File-sink settings as the writer sees them for one record.
#[derive(Debug, Clone, Copy)]
pub struct FileOptions<'a> {
    /// May start with `~`.
    pub dir: &'a str,
    /// Raw strategy code; unknown codes mean hourly.
    pub rotate: u8,
    /// Ceiling for size rotation; 0 means the 1 GiB default.
    pub max_size: u64,
}

impl FileOptions<'_> {
    #[must_use]
    pub fn strategy(&self) -> RotateStrategy {
        RotateStrategy::resolve(self.rotate)
    }

    #[must_use]
    pub fn resolved_dir(&self) -> PathBuf {
        if self.dir.is_empty() {
            return PathBuf::from(DEFAULT_LOG_DIR);
        }
        PathBuf::from(shellexpand::tilde(self.dir).as_ref())
    }

    #[must_use]
    pub const fn resolved_max_size(&self) -> u64 {
        if self.max_size == 0 {
            DEFAULT_ROTATE_SIZE
        } else {
            self.max_size
        }
    }
}

#[derive(Debug)]
struct OpenFile {
    path: PathBuf,
    file: File,
}

/// Which directory/strategy/ceiling the recorded file name belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
struct RotationKey {
    dir: PathBuf,
    strategy: RotateStrategy,
    max_size: u64,
}

/// Rotating file sink. At most one handle is open at any time.
#[derive(Debug, Default)]
pub struct FileDestination {
    handle: Option<OpenFile>,
    current: Option<String>,
    key: Option<RotationKey>,
}

impl FileDestination {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Name of the file the last record was routed to.
    #[must_use]
    pub fn current_file(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Path of the open handle, if any.
    #[must_use]
    pub fn open_path(&self) -> Option<&Path> {
        self.handle.as_ref().map(|h| h.path.as_path())
    }

    /// Points the handle at the file this record belongs in.
    ///
    /// Returns `false` when no usable file could be produced; the caller then sends the
    /// record to stderr for this cycle and the next record retries.
    pub fn prepare(&mut self, options: &FileOptions<'_>, hint: &RotationHint) -> bool {
        let dir = options.resolved_dir();
        let key = RotationKey {
            dir: dir.clone(),
            strategy: options.strategy(),
            max_size: options.resolved_max_size(),
        };

        if self.key.as_ref() != Some(&key) {
            if self.key.is_some() {
                internal::debug(
                    "FILE",
                    &format!(
                        "Rotation reset: dir={} strategy={}",
                        key.dir.display(),
                        key.strategy
                    ),
                );
            }
            self.current = None;
            self.key = Some(key.clone());
        }

        if !dir.is_dir() {
            match fs::create_dir_all(&dir) {
                Ok(()) => internal::debug("FILE", &format!("Created directory: {}", dir.display())),
                Err(e) => {
                    internal::warn(
                        "FILE",
                        &format!("Failed to create directory {}: {e}", dir.display()),
                    );
                    return false;
                }
            }
        }

        let target = rotate::resolve(
            key.strategy,
            self.current.as_deref(),
            &dir,
            hint,
            key.max_size,
        );
        let path = dir.join(&target.filename);
        self.current = Some(target.filename);

        if target.need_new_file {
            self.close();
            internal::debug("FILE", &format!("Creating {}", path.display()));
            return self.open_with(path, |p| File::create(p));
        }

        if self.open_path() == Some(path.as_path()) {
            return true;
        }

        self.close();
        self.open_with(path, |p| OpenOptions::new().append(true).open(p))
    }

    fn open_with(&mut self, path: PathBuf, open: impl FnOnce(&Path) -> io::Result<File>) -> bool {
        match open(&path) {
            Ok(file) => {
                self.handle = Some(OpenFile { path, file });
                true
            }
            Err(e) => {
                internal::warn(
                    "FILE",
                    &format!("Cannot open {}: {e}; falling back to stderr", path.display()),
                );
                false
            }
        }
    }

    /// Writes to the open handle.
    ///
    /// # Errors
    /// `NotConnected` when no file is open, otherwise the underlying write error.
    pub fn write_all(&mut self, bytes: &[u8]) -> io::Result<()> {
        match self.handle.as_mut() {
            Some(open) => open.file.write_all(bytes),
            None => Err(io::Error::from(io::ErrorKind::NotConnected)),
        }
    }

    /// Releases the handle. The recorded file name survives so rotation resumes in place.
    pub fn close(&mut self) {
        if let Some(mut open) = self.handle.take() {
            let _ = open.file.flush();
        }
    }
}
