//! Command-line front end: log one message, or every stdin line, through a logger built
//! from the config file plus flag overrides.

use crate::config::Config;
use crate::handler::Handler;
use crate::internal;
use crate::level::Level;
use crate::logger::Logger;
use crate::rotate::{self, RotateStrategy};

use clap::Parser;
use std::io::{self, BufRead};
use std::path::PathBuf;
use std::process::ExitCode;

/// Log level for CLI arguments. `panic` is not offered; it would abort the tool itself.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    Fatal,
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => Self::Trace,
            LogLevel::Debug => Self::Debug,
            LogLevel::Info => Self::Info,
            LogLevel::Warn => Self::Warn,
            LogLevel::Error => Self::Error,
            LogLevel::Fatal => Self::Fatal,
        }
    }
}

/// Rotation strategy for CLI arguments.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum RotateArg {
    None,
    Day,
    Hour,
    Minute,
    Size,
}

impl From<RotateArg> for RotateStrategy {
    fn from(arg: RotateArg) -> Self {
        match arg {
            RotateArg::None => Self::None,
            RotateArg::Day => Self::Day,
            RotateArg::Hour => Self::Hour,
            RotateArg::Minute => Self::Minute,
            RotateArg::Size => Self::Size,
        }
    }
}

/// rotolog - write log records through a rotating logger.
#[derive(Debug, Parser)]
#[command(
    name = "rotolog",
    version,
    about = "Write log records through a rotating logger"
)]
pub struct Cli {
    /// Config file (default: ~/.config/rotolog/rotolog.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Sinks, e.g. "stdout|file" or "stderr,file" or "none"
    #[arg(long)]
    pub handler: Option<String>,

    /// Log directory
    #[arg(short, long)]
    pub dir: Option<String>,

    /// Minimum level that gets written
    #[arg(short, long, value_enum)]
    pub level: Option<LogLevel>,

    /// Rotation strategy
    #[arg(short, long, value_enum)]
    pub rotate: Option<RotateArg>,

    /// Size ceiling for size rotation (e.g. 100B, 10M, 1G)
    #[arg(long)]
    pub rotate_size: Option<String>,

    /// Level of the records written by this invocation
    #[arg(short, long, value_enum, default_value = "info")]
    pub at: LogLevel,

    /// Log every line read from stdin instead of the positional message
    #[arg(long)]
    pub stdin: bool,

    /// Message words, joined with spaces
    pub message: Vec<String>,
}

/// Runs one invocation and reports failures through the internal channel.
#[must_use]
pub fn run(cli: &Cli) -> ExitCode {
    let logger = match build_logger(cli) {
        Ok(logger) => logger,
        Err(e) => {
            internal::error("CLI", &e.to_string());
            return ExitCode::FAILURE;
        }
    };

    let level = Level::from(cli.at);
    let status = if cli.stdin {
        log_stdin(&logger, level)
    } else if cli.message.is_empty() {
        internal::error("CLI", "Nothing to log: pass a message or --stdin");
        ExitCode::FAILURE
    } else {
        crate::log!(logger; level, "{}", cli.message.join(" "));
        ExitCode::SUCCESS
    };

    logger.close();
    logger.wait();
    status
}

fn log_stdin(logger: &Logger, level: Level) -> ExitCode {
    for line in io::stdin().lock().lines() {
        match line {
            Ok(line) => crate::log!(logger; level, "{line}"),
            Err(e) => {
                internal::error("CLI", &format!("Failed to read stdin: {e}"));
                return ExitCode::FAILURE;
            }
        }
    }
    ExitCode::SUCCESS
}

/// Config file first, then flag overrides.
///
/// # Errors
/// Config loading, or an invalid handler or size flag.
pub fn build_logger(cli: &Cli) -> Result<Logger, crate::Error> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let mut builder = config.logger.to_builder()?;

    if let Some(handler) = &cli.handler {
        builder = builder.handler(handler.parse::<Handler>()?);
    }
    if let Some(dir) = &cli.dir {
        builder = builder.dir(dir.clone());
    }
    if let Some(level) = cli.level {
        builder = builder.level(level.into());
    }
    if let Some(strategy) = cli.rotate {
        builder = builder.rotate(strategy.into());
    }
    if let Some(size) = &cli.rotate_size {
        let bytes = rotate::parse_size(size).ok_or_else(|| crate::Error::InvalidSize(size.clone()))?;
        builder = builder.rotate_size(bytes);
    }

    Ok(builder.build())
}
