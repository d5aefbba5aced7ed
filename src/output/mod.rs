//! Turns the handler bitset into live write destinations, once per record.
//!
//! Console sinks are process-wide and only referenced. The file sink is owned here and
//! may be swapped between two records when the rotation policy says so.

mod file;

pub use file::{DEFAULT_LOG_DIR, FileDestination, FileOptions};

use crate::handler::Handler;
use crate::internal;
use crate::rotate::RotationHint;
use std::io::{self, Write};

/// Closed set of sink kinds, in write order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DestinationKind {
    Stdout,
    Stderr,
    File,
}

impl DestinationKind {
    pub const ALL: [Self; 3] = [Self::Stdout, Self::Stderr, Self::File];

    const fn handler(self) -> Handler {
        match self {
            Self::Stdout => Handler::STDOUT,
            Self::Stderr => Handler::STDERR,
            Self::File => Handler::FILE,
        }
    }
}

/// What a slot writes to for the current record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sink {
    Stdout,
    Stderr,
    /// The rotating file handle held by [`FileDestination`].
    File,
    /// The file could not be produced this cycle; the record goes to stderr instead.
    FallbackStderr,
}

/// Fixed, ordered `(kind, sink)` slots plus the owned file handle.
#[derive(Debug)]
pub struct Destinations {
    slots: [(DestinationKind, Option<Sink>); 3],
    file: FileDestination,
}

impl Default for Destinations {
    fn default() -> Self {
        Self::new()
    }
}

impl Destinations {
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: DestinationKind::ALL.map(|kind| (kind, None)),
            file: FileDestination::new(),
        }
    }

    /// Re-materializes every slot for the next record.
    ///
    /// A cleared file bit releases the file handle, so at most one file is ever open and
    /// none is open while file output is off.
    pub fn rebuild(&mut self, handler: Handler, options: &FileOptions<'_>, hint: &RotationHint) {
        for (kind, sink) in &mut self.slots {
            *sink = if !handler.contains(kind.handler()) {
                None
            } else {
                match kind {
                    DestinationKind::Stdout => Some(Sink::Stdout),
                    DestinationKind::Stderr => Some(Sink::Stderr),
                    DestinationKind::File => Some(if self.file.prepare(options, hint) {
                        Sink::File
                    } else {
                        Sink::FallbackStderr
                    }),
                }
            };
        }

        if !handler.contains(Handler::FILE) {
            self.file.close();
        }
    }

    /// Writes `record` to every active slot. Write failures are reported, never returned.
    pub fn write(&mut self, record: &str) {
        let bytes = record.as_bytes();
        for (kind, sink) in self.slots {
            let Some(sink) = sink else { continue };
            let result = match sink {
                Sink::Stdout => io::stdout().lock().write_all(bytes),
                Sink::Stderr | Sink::FallbackStderr => io::stderr().lock().write_all(bytes),
                Sink::File => self.file.write_all(bytes),
            };

            if let Err(e) = result {
                internal::error("WRITER", &format!("Write to {kind:?} failed: {e}"));
                if sink == Sink::File {
                    let _ = io::stderr().lock().write_all(bytes);
                }
            }
        }
    }

    /// Kinds with a live sink after the last rebuild.
    #[must_use]
    pub fn active(&self) -> Vec<(DestinationKind, Sink)> {
        self.slots
            .iter()
            .filter_map(|(kind, sink)| sink.map(|s| (*kind, s)))
            .collect()
    }

    #[must_use]
    pub const fn file(&self) -> &FileDestination {
        &self.file
    }

    /// Flushes the consoles and releases the file handle.
    pub fn close(&mut self) {
        let _ = io::stdout().lock().flush();
        self.file.close();
        for (_, sink) in &mut self.slots {
            *sink = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rotate::RotateStrategy;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn slots_follow_handler_bits() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().to_string_lossy().into_owned();
        let options = FileOptions {
            dir: &dir,
            rotate: RotateStrategy::None.into(),
            max_size: 0,
        };
        let hint = RotationHint::Time(chrono::Local::now());
        let mut dests = Destinations::new();

        dests.rebuild(Handler::STDERR | Handler::FILE, &options, &hint);
        assert_eq!(
            dests.active(),
            vec![
                (DestinationKind::Stderr, Sink::Stderr),
                (DestinationKind::File, Sink::File)
            ]
        );

        dests.rebuild(Handler::STDOUT, &options, &hint);
        assert_eq!(dests.active(), vec![(DestinationKind::Stdout, Sink::Stdout)]);
        assert!(dests.file().open_path().is_none());
    }

    #[test]
    fn unusable_file_falls_back_to_stderr() {
        let tmp = TempDir::new().unwrap();
        let blocker = tmp.path().join("not-a-dir");
        fs::write(&blocker, "").unwrap();
        let dir = blocker.to_string_lossy().into_owned();
        let options = FileOptions {
            dir: &dir,
            rotate: RotateStrategy::None.into(),
            max_size: 0,
        };
        let mut dests = Destinations::new();

        dests.rebuild(
            Handler::FILE,
            &options,
            &RotationHint::Time(chrono::Local::now()),
        );
        assert_eq!(
            dests.active(),
            vec![(DestinationKind::File, Sink::FallbackStderr)]
        );
    }
}
