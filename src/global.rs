//! Process-wide default logger.
//!
//! Built on first use with stdout output and otherwise default settings. Library code
//! that has no logger of its own logs here; the application configures it through the
//! free setters and calls [`shutdown`] before exiting so queued records are written.
//!
//! ```no_run
//! use rotolog::{Handler, Level, RotateStrategy, global};
//!
//! global::set_handler(Handler::STDOUT | Handler::FILE);
//! global::set_log_dir("/var/log/myapp");
//! global::set_rotate_type(RotateStrategy::Day);
//! global::set_log_level(Level::Info);
//!
//! rotolog::info!("started with {} workers", 4);
//! global::shutdown();
//! ```

use crate::fmt::FormatToken;
use crate::handler::Handler;
use crate::level::Level;
use crate::logger::Logger;
use crate::rotate::RotateStrategy;
use std::fmt::Display;
use std::sync::OnceLock;

static DEFAULT_LOGGER: OnceLock<Logger> = OnceLock::new();

/// The default logger, starting its writer thread on first call.
pub fn logger() -> &'static Logger {
    DEFAULT_LOGGER.get_or_init(|| Logger::builder().handler(Handler::STDOUT).build())
}

/// Closes the default logger and waits for the queue to drain. Later log calls are
/// dropped. Does nothing if the default logger was never used.
pub fn shutdown() {
    if let Some(logger) = DEFAULT_LOGGER.get() {
        logger.close();
        logger.wait();
    }
}

pub fn set_handler(handler: Handler) {
    logger().set_handler(handler);
}

pub fn set_log_dir(dir: impl Into<String>) {
    logger().set_log_dir(dir);
}

pub fn set_log_level(level: Level) {
    logger().set_log_level(level);
}

pub fn set_log_format<S: AsRef<str>>(names: &[S]) {
    logger().set_log_format(names);
}

pub fn set_format_tokens(tokens: Vec<FormatToken>) {
    logger().set_format_tokens(tokens);
}

pub fn set_rotate_type(strategy: RotateStrategy) {
    logger().set_rotate_type(strategy);
}

pub fn set_rotate_size(bytes: u64) {
    logger().set_rotate_size(bytes);
}

#[track_caller]
pub fn trace(msg: impl Display) {
    logger().trace(msg);
}

#[track_caller]
pub fn debug(msg: impl Display) {
    logger().debug(msg);
}

#[track_caller]
pub fn info(msg: impl Display) {
    logger().info(msg);
}

#[track_caller]
pub fn warn(msg: impl Display) {
    logger().warn(msg);
}

#[track_caller]
pub fn error(msg: impl Display) {
    logger().error(msg);
}

#[track_caller]
pub fn fatal(msg: impl Display) {
    logger().fatal(msg);
}

#[track_caller]
pub fn panic(msg: impl Display) -> ! {
    logger().panic(msg)
}
