//! Renders one record into a single text line from an ordered token list.
//!
//! The list is parsed once when it is configured, so the per-record path only walks an
//! enum slice.

mod location;
mod token;

pub use location::Location;
pub use token::{DEFAULT_FORMAT, FormatToken, parse_tokens};

use crate::level::Level;
use chrono::{DateTime, Local};
use std::fmt::Write as _;

/// `2006-01-02 15:04:05.000000`
pub const LONG_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";
/// `2006-01-02 15:04:05`
pub const SHORT_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Everything a token may need, captured on the producer side.
#[derive(Debug, Clone, Copy)]
pub struct Record<'a> {
    pub level: Level,
    pub time: DateTime<Local>,
    pub location: &'a Location,
    pub message: &'a str,
}

/// Joins the rendered tokens with single spaces and terminates the line with one `\n`.
#[must_use]
pub fn render(tokens: &[FormatToken], record: &Record<'_>) -> String {
    let mut line = String::with_capacity(64 + record.message.len());

    for (i, token) in tokens.iter().enumerate() {
        if i > 0 {
            line.push(' ');
        }
        // Writing into a String cannot fail.
        let _ = match token {
            FormatToken::Level => write!(line, "[{}]", record.level),
            FormatToken::LongTime => write!(line, "{}", record.time.format(LONG_TIME_FORMAT)),
            FormatToken::Time => write!(line, "{}", record.time.format(SHORT_TIME_FORMAT)),
            FormatToken::Location => write!(line, "{}", record.location),
            FormatToken::Msg => {
                line.push_str(record.message);
                Ok(())
            }
        };
    }

    while line.ends_with('\n') {
        line.pop();
    }
    line.push('\n');
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn record<'a>(location: &'a Location, message: &'a str) -> Record<'a> {
        let time = Local.with_ymd_and_hms(2024, 5, 1, 8, 30, 15).unwrap();
        Record {
            level: Level::Warn,
            time,
            location,
            message,
        }
    }

    #[test]
    fn default_order() {
        let loc = Location::new("src/client/retry.rs", 42, "demo::client::send");
        let line = render(DEFAULT_FORMAT, &record(&loc, "retrying"));
        assert_eq!(
            line,
            "[WARN] 2024-05-01 08:30:15.000000 retry.rs:42:send: retrying\n"
        );
    }

    #[test]
    fn custom_order_and_short_time() {
        let loc = Location::new("a.rs", 1, "f");
        let tokens = [FormatToken::Msg, FormatToken::Time, FormatToken::Level];
        assert_eq!(
            render(&tokens, &record(&loc, "hi")),
            "hi 2024-05-01 08:30:15 [WARN]\n"
        );
    }

    #[test]
    fn empty_token_list_still_terminates() {
        let loc = Location::new("a.rs", 1, "f");
        assert_eq!(render(&[], &record(&loc, "hi")), "\n");
    }

    #[test]
    fn trailing_newlines_collapse() {
        let loc = Location::new("a.rs", 1, "f");
        assert_eq!(
            render(&[FormatToken::Msg], &record(&loc, "done\n\n")),
            "done\n"
        );
    }
}
