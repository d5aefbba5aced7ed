//! `rotolog` - asynchronous rotating logger for client libraries.
//!
//! Log calls format the record on the calling thread and hand it to a bounded queue;
//! a single writer thread per logger owns every sink and the rotating file. A full
//! queue blocks the producer instead of dropping records.
//!
//! - Sinks: stdout, stderr and one rotating file, selected by a [`Handler`] bitset
//! - Rotation: none, per day/hour/minute, or by size (`rotating-<size>.<index>.log`)
//! - Format: ordered tokens (`level`, `ltime`, `time`, `location`, `msg`)
//! - Process-wide default logger in [`global`]
//!
//! # Example
//!
//! ```no_run
//! use rotolog::{Handler, Level, Logger, RotateStrategy};
//!
//! let logger = Logger::builder()
//!     .handler(Handler::STDOUT | Handler::FILE)
//!     .dir("/tmp/sdk-logs")
//!     .level(Level::Info)
//!     .rotate(RotateStrategy::Size)
//!     .rotate_size(64 << 20)
//!     .build();
//!
//! rotolog::info!(logger; "request id={} status={}", "abc", 200);
//! logger.warn("plain method call");
//!
//! logger.close();
//! logger.wait();
//! ```
//!
//! # Features
//!
//! - `cli` (default): the `rotolog` command-line front end

mod error;
mod handler;
mod macros;

pub mod config;
pub mod fmt;
pub mod global;
pub mod internal;
pub mod level;
pub mod logger;
pub mod output;
pub mod rotate;
pub mod writer;

#[cfg(feature = "cli")]
pub mod cli;

pub use config::Config;
pub use error::Error;
pub use fmt::{FormatToken, Location};
pub use handler::{Handler, ParseHandlerError};
pub use level::Level;
pub use logger::{Logger, LoggerBuilder, Settings};
pub use output::{DestinationKind, Destinations};
pub use rotate::{RotateStrategy, RotationHint};
pub use writer::WriteJob;
