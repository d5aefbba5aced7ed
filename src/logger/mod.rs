//! The public logging surface: per-level calls, setters, and lifecycle.
//!
//! Producers filter, format and enqueue on their own thread; everything that touches a
//! sink happens on the writer thread. Setters swap a new settings snapshot in, so a
//! change applies to the next record processed and never to one already written.

mod builder;
mod from_config;

pub use builder::LoggerBuilder;

use crate::fmt::{self, DEFAULT_FORMAT, FormatToken, Location, Record};
use crate::handler::Handler;
use crate::level::Level;
use crate::output::DEFAULT_LOG_DIR;
use crate::rotate::{DEFAULT_ROTATE_SIZE, RotateStrategy, RotationHint};
use crate::writer::{DEFAULT_QUEUE_CAPACITY, WriteJob, Writer};

use arc_swap::ArcSwap;
use chrono::Local;
use std::fmt::{Debug, Display, Formatter};
use std::sync::Arc;

/// Everything a setter can change. Producers and the writer each read their own snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub handler: Handler,
    pub level: Level,
    pub format: Vec<FormatToken>,
    /// Empty means [`DEFAULT_LOG_DIR`]. `~` is expanded when the file is opened.
    pub dir: String,
    /// Raw [`RotateStrategy`] code. Unknown codes are treated as hourly by the writer.
    pub rotate: u8,
    /// Size ceiling in bytes; 0 means the 1 GiB default.
    pub rotate_size: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            handler: Handler::NONE,
            level: Level::Debug,
            format: DEFAULT_FORMAT.to_vec(),
            dir: DEFAULT_LOG_DIR.to_string(),
            rotate: RotateStrategy::Hour.into(),
            rotate_size: DEFAULT_ROTATE_SIZE,
        }
    }
}

impl Settings {
    /// The only early exit on the logging path.
    #[must_use]
    pub fn accepts(&self, level: Level) -> bool {
        !self.handler.is_none() && level >= self.level
    }

    #[must_use]
    pub fn rotate_strategy(&self) -> RotateStrategy {
        RotateStrategy::resolve(self.rotate)
    }
}

/// Asynchronous rotating logger. Share it by reference or `Arc`; every method takes `&self`.
pub struct Logger {
    settings: Arc<ArcSwap<Settings>>,
    writer: Writer,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Debug for Logger {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("settings", &*self.settings.load())
            .field("closed", &self.writer.is_closed())
            .finish_non_exhaustive()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        self.writer.close();
    }
}

impl Logger {
    /// Starts a logger with no sink selected; nothing is written until `set_handler`.
    #[must_use]
    pub fn new() -> Self {
        Self::with_settings(Settings::default(), DEFAULT_QUEUE_CAPACITY)
    }

    /// Configures every field before the writer thread starts.
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    pub(crate) fn with_settings(settings: Settings, queue_capacity: usize) -> Self {
        let settings = Arc::new(ArcSwap::from_pointee(settings));
        let writer = Writer::spawn(queue_capacity, Arc::clone(&settings));
        Self { settings, writer }
    }

    fn update(&self, apply: impl Fn(&mut Settings)) {
        self.settings.rcu(|current| {
            let mut next = Settings::clone(current);
            apply(&mut next);
            Arc::new(next)
        });
    }

    /// Selects the sinks. [`Handler::NONE`] turns every log call into a no-op.
    pub fn set_handler(&self, handler: Handler) {
        self.update(|s| s.handler = handler);
    }

    /// Directory for the rotating file. The recorded file name is dropped, so the next
    /// record starts fresh there.
    pub fn set_log_dir(&self, dir: impl Into<String>) {
        let dir = dir.into();
        self.update(|s| s.dir.clone_from(&dir));
    }

    /// Minimum level that gets enqueued.
    pub fn set_log_level(&self, level: Level) {
        self.update(|s| s.level = level);
    }

    /// Token names as in config files (`level`, `ltime`, `time`, `location`, `msg`).
    /// Unknown names are skipped.
    pub fn set_log_format<S: AsRef<str>>(&self, names: &[S]) {
        self.set_format_tokens(fmt::parse_tokens(names));
    }

    /// Like [`Logger::set_log_format`] with already parsed tokens.
    pub fn set_format_tokens(&self, tokens: Vec<FormatToken>) {
        self.update(|s| s.format.clone_from(&tokens));
    }

    /// When the file sink switches to a new file.
    pub fn set_rotate_type(&self, strategy: RotateStrategy) {
        self.set_rotate_type_raw(strategy.into());
    }

    /// Stores the code as given; codes outside the known set behave as hourly when the
    /// next record is written.
    pub fn set_rotate_type_raw(&self, code: u8) {
        self.update(|s| s.rotate = code);
    }

    /// Ceiling for [`RotateStrategy::Size`]; 0 means 1 GiB.
    pub fn set_rotate_size(&self, bytes: u64) {
        self.update(|s| s.rotate_size = bytes);
    }

    /// Snapshot of the current configuration.
    #[must_use]
    pub fn settings(&self) -> Settings {
        Settings::clone(&self.settings.load())
    }

    /// True when a record at `level` would be enqueued.
    #[must_use]
    pub fn enabled(&self, level: Level) -> bool {
        self.settings.load().accepts(level)
    }

    /// Formats and enqueues one record. Blocks only while the queue is full.
    pub fn log_at(&self, level: Level, location: Location, msg: impl Display) {
        let settings = self.settings.load();
        if !settings.accepts(level) {
            return;
        }

        let time = Local::now();
        let message = msg.to_string();
        let record = fmt::render(
            &settings.format,
            &Record {
                level,
                time,
                location: &location,
                message: &message,
            },
        );
        let hint = if RotateStrategy::from_raw(settings.rotate) == Some(RotateStrategy::Size) {
            RotationHint::Bytes(record.len() as u64)
        } else {
            RotationHint::Time(time)
        };
        drop(settings);

        self.writer.send(WriteJob { record, hint });
    }

    /// Logs at `level`. The location carries file and line; use the macros for the function.
    #[track_caller]
    pub fn log(&self, level: Level, msg: impl Display) {
        self.log_at(level, Location::caller(), msg);
    }

    /// Joins `values` with single spaces into the message body.
    #[track_caller]
    pub fn log_values(&self, level: Level, values: &[&dyn Display]) {
        let location = Location::caller();
        if !self.enabled(level) {
            return;
        }
        self.log_at(level, location, concat(values));
    }

    /// Logs at `TRACE`.
    #[track_caller]
    pub fn trace(&self, msg: impl Display) {
        self.log(Level::Trace, msg);
    }

    /// Logs at `DEBUG`.
    #[track_caller]
    pub fn debug(&self, msg: impl Display) {
        self.log(Level::Debug, msg);
    }

    /// Logs at `INFO`.
    #[track_caller]
    pub fn info(&self, msg: impl Display) {
        self.log(Level::Info, msg);
    }

    /// Logs at `WARN`.
    #[track_caller]
    pub fn warn(&self, msg: impl Display) {
        self.log(Level::Warn, msg);
    }

    /// Logs at `ERROR`.
    #[track_caller]
    pub fn error(&self, msg: impl Display) {
        self.log(Level::Error, msg);
    }

    /// Logs at `FATAL`. Does not terminate anything.
    #[track_caller]
    pub fn fatal(&self, msg: impl Display) {
        self.log(Level::Fatal, msg);
    }

    /// Enqueues the record at `PANIC`, then panics with the rendered message.
    ///
    /// The record is fully formatted and queued before unwinding starts, even when the
    /// level is filtered out the panic still happens.
    #[track_caller]
    pub fn panic(&self, msg: impl Display) -> ! {
        self.panic_at(Location::caller(), msg)
    }

    /// [`Logger::panic`] with an explicit location, used by `panic_log!`.
    #[track_caller]
    pub fn panic_at(&self, location: Location, msg: impl Display) -> ! {
        let message = msg.to_string();
        self.log_at(Level::Panic, location, &message);
        panic!("{message}");
    }

    /// Requests shutdown and returns without waiting. Records enqueued after this call
    /// may be dropped. Calling it again is a no-op.
    pub fn close(&self) {
        self.writer.close();
    }

    /// Blocks until a requested shutdown has drained and the file handle is released.
    /// Returns immediately when `close` was never called.
    pub fn wait(&self) {
        self.writer.wait();
    }

    /// Non-blocking: has the writer finished shutting down?
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.writer.is_closed()
    }

    /// Records waiting in the queue.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.writer.pending()
    }
}

/// `Info(a, b, c)` style body: values joined by a single space.
#[must_use]
pub fn concat(values: &[&dyn Display]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
