//! Location capture through the macros versus plain method calls.

use rotolog::{Handler, Level, Logger, RotateStrategy};
use std::fs;
use tempfile::TempDir;

fn location_logger(tmp: &TempDir) -> Logger {
    Logger::builder()
        .handler(Handler::FILE)
        .dir(tmp.path().to_string_lossy())
        .rotate(RotateStrategy::None)
        .format(&["location", "msg"])
        .build()
}

fn read(tmp: &TempDir, logger: &Logger) -> Vec<String> {
    logger.close();
    logger.wait();
    fs::read_to_string(tmp.path().join("default.log"))
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn macro_records_enclosing_function() {
    let tmp = TempDir::new().unwrap();
    let logger = location_logger(&tmp);

    let line = line!() + 1;
    rotolog::info!(logger; "user {} signed in", "ada");

    let lines = read(&tmp, &logger);
    assert_eq!(
        lines,
        vec![format!(
            "macros.rs:{line}:macro_records_enclosing_function: user ada signed in"
        )]
    );
}

#[test]
fn closure_frames_are_skipped() {
    let tmp = TempDir::new().unwrap();
    let logger = location_logger(&tmp);

    let emit = || rotolog::warn!(logger; "inside");
    emit();

    let lines = read(&tmp, &logger);
    assert!(
        lines[0].contains(":closure_frames_are_skipped: inside"),
        "{lines:?}"
    );
}

#[test]
fn method_call_has_file_and_line_only() {
    let tmp = TempDir::new().unwrap();
    let logger = location_logger(&tmp);

    let line = line!() + 1;
    logger.error("plain");

    let lines = read(&tmp, &logger);
    assert_eq!(lines, vec![format!("macros.rs:{line}:???: plain")]);
}

#[test]
fn every_level_macro_uses_its_level() {
    let tmp = TempDir::new().unwrap();
    let logger = Logger::builder()
        .handler(Handler::FILE)
        .dir(tmp.path().to_string_lossy())
        .rotate(RotateStrategy::None)
        .level(Level::Trace)
        .format(&["level"])
        .build();

    rotolog::trace!(logger; "t");
    rotolog::debug!(logger; "d");
    rotolog::info!(logger; "i");
    rotolog::warn!(logger; "w");
    rotolog::error!(logger; "e");
    rotolog::fatal!(logger; "f");
    rotolog::log!(logger; Level::Warn, "explicit");

    assert_eq!(
        read(&tmp, &logger),
        vec![
            "[TRACE]", "[DEBUG]", "[INFO]", "[WARN]", "[ERROR]", "[FATAL]", "[WARN]"
        ]
    );
}
