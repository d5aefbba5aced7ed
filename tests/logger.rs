//! Facade behavior: filtering, setters, formatting of what reaches the file.

use rotolog::{Handler, Level, Logger, RotateStrategy};
use std::fs;
use std::path::Path;
use std::thread;
use std::time::{Duration, Instant};
use tempfile::TempDir;

fn file_logger(dir: &Path) -> Logger {
    Logger::builder()
        .handler(Handler::FILE)
        .dir(dir.to_string_lossy())
        .rotate(RotateStrategy::None)
        .format(&["level", "msg"])
        .build()
}

fn finish(logger: &Logger) {
    logger.close();
    logger.wait();
}

fn lines(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .unwrap_or_default()
        .lines()
        .map(str::to_string)
        .collect()
}

/// The writer reads settings when it processes a record, so tests that reconfigure
/// mid-stream wait for the earlier record to land first.
fn wait_for_line(path: &Path, line: &str) {
    let deadline = Instant::now() + Duration::from_secs(5);
    while Instant::now() < deadline {
        if lines(path).iter().any(|l| l == line) {
            return;
        }
        thread::sleep(Duration::from_millis(5));
    }
    panic!("{line:?} never reached {}", path.display());
}

#[test]
fn builder_defaults() {
    let logger = Logger::builder().build();
    let settings = logger.settings();
    assert_eq!(settings.handler, Handler::NONE);
    assert_eq!(settings.level, Level::Debug);
    assert_eq!(settings.dir, "/tmp");
    assert_eq!(settings.rotate_strategy(), RotateStrategy::Hour);
    assert_eq!(settings.rotate_size, 1 << 30);
    finish(&logger);
}

#[test]
fn threshold_filters_lower_levels() {
    for threshold in Level::all() {
        let tmp = TempDir::new().unwrap();
        let logger = file_logger(tmp.path());
        logger.set_log_level(threshold);

        let mut expected = Vec::new();
        for level in Level::all() {
            assert_eq!(logger.enabled(level), level >= threshold, "{level} at {threshold}");
            if level == Level::Panic {
                continue;
            }
            logger.log(level, "x");
            if level >= threshold {
                expected.push(format!("[{level}] x"));
            }
        }
        finish(&logger);

        assert_eq!(lines(&tmp.path().join("default.log")), expected, "threshold {threshold}");
    }
}

#[test]
fn no_handler_filters_every_level() {
    for threshold in Level::all() {
        let tmp = TempDir::new().unwrap();
        let logger = file_logger(tmp.path());
        logger.set_handler(Handler::NONE);
        logger.set_log_level(threshold);

        for level in Level::all() {
            assert!(!logger.enabled(level));
            if level != Level::Panic {
                logger.log(level, "x");
            }
        }
        assert_eq!(logger.pending(), 0);
        finish(&logger);

        assert!(!tmp.path().join("default.log").exists());
    }
}

#[test]
fn values_are_space_joined() {
    let tmp = TempDir::new().unwrap();
    let logger = file_logger(tmp.path());

    logger.log_values(Level::Info, &[&"status", &200, &1.5]);
    finish(&logger);

    assert_eq!(
        lines(&tmp.path().join("default.log")),
        vec!["[INFO] status 200 1.5"]
    );
}

#[test]
fn format_change_applies_to_later_records() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("default.log");
    let logger = file_logger(tmp.path());

    logger.info("first");
    wait_for_line(&path, "[INFO] first");
    logger.set_log_format(&["msg", "level"]);
    logger.info("second");
    finish(&logger);

    assert_eq!(lines(&path), vec!["[INFO] first", "second [INFO]"]);
}

#[test]
fn directory_change_moves_next_record() {
    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();
    let logger = file_logger(first.path());

    logger.info("a");
    wait_for_line(&first.path().join("default.log"), "[INFO] a");
    logger.set_log_dir(second.path().to_string_lossy());
    logger.info("b");
    finish(&logger);

    assert_eq!(lines(&first.path().join("default.log")), vec!["[INFO] a"]);
    assert_eq!(lines(&second.path().join("default.log")), vec!["[INFO] b"]);
}

#[test]
fn existing_default_log_is_appended() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("default.log");
    fs::write(&path, "earlier run\n").unwrap();

    let logger = file_logger(tmp.path());
    logger.info("this run");
    finish(&logger);

    assert_eq!(lines(&path), vec!["earlier run", "[INFO] this run"]);
}

#[test]
fn default_format_has_level_time_location_message() {
    let tmp = TempDir::new().unwrap();
    let logger = Logger::builder()
        .handler(Handler::FILE)
        .dir(tmp.path().to_string_lossy())
        .rotate(RotateStrategy::None)
        .build();

    logger.warn("slow response");
    finish(&logger);

    let line = lines(&tmp.path().join("default.log")).remove(0);
    let parts: Vec<&str> = line.splitn(5, ' ').collect();
    assert_eq!(parts[0], "[WARN]");
    // date, then time with microseconds
    assert_eq!(parts[1].len(), "2006-01-02".len());
    assert_eq!(parts[2].len(), "15:04:05.000000".len());
    assert!(parts[3].starts_with("logger.rs:"));
    assert!(parts[3].ends_with(":???:"));
    assert_eq!(parts[4], "slow response");
}

#[test]
fn unknown_rotation_code_falls_back_to_hourly() {
    let tmp = TempDir::new().unwrap();
    let logger = file_logger(tmp.path());
    logger.set_rotate_type_raw(42);

    let before = chrono::Local::now().format("%Y-%m-%d_%H.log").to_string();
    logger.info("x");
    finish(&logger);
    let after = chrono::Local::now().format("%Y-%m-%d_%H.log").to_string();

    let names: Vec<String> = fs::read_dir(tmp.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names.len(), 1);
    assert!(names[0] == before || names[0] == after, "got {names:?}");
}

#[test]
fn unwritable_directory_degrades_to_stderr() {
    let tmp = TempDir::new().unwrap();
    let blocker = tmp.path().join("file-not-dir");
    fs::write(&blocker, "").unwrap();

    let logger = file_logger(&blocker);
    logger.error("still accepted");
    finish(&logger);

    assert!(logger.is_closed());
    assert_eq!(fs::read_to_string(&blocker).unwrap(), "");
}

#[test]
fn file_output_recovers_after_fault() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path().join("logs");
    fs::write(&dir, "").unwrap();

    let logger = Logger::builder()
        .handler(Handler::FILE)
        .dir(dir.to_string_lossy())
        .rotate(RotateStrategy::None)
        .format(&["msg"])
        .queue_capacity(1)
        .build();

    logger.info("lost");
    // With one slot, the second filler is accepted only after "lost" has been handled.
    logger.info("filler");
    logger.info("filler");
    fs::remove_file(&dir).unwrap();
    logger.info("recovered");
    finish(&logger);

    let written = lines(&dir.join("default.log"));
    assert!(!written.iter().any(|l| l == "lost"), "{written:?}");
    assert!(written.iter().all(|l| l == "filler" || l == "recovered"));
    assert_eq!(written.last().map(String::as_str), Some("recovered"));
}
