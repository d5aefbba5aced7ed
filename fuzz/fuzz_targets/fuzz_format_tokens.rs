#![no_main]
use chrono::Local;
use libfuzzer_sys::fuzz_target;
use rotolog::Level;
use rotolog::fmt::{Location, Record, parse_tokens, render};

const LOCATION: Location = Location::new("src/fuzz.rs", 1, "fuzz::target::{{closure}}");

fuzz_target!(|data: &str| {
    let (names, message) = data.split_once('\n').unwrap_or((data, ""));
    let names: Vec<&str> = names.split(',').collect();
    let tokens = parse_tokens(&names);

    let line = render(
        &tokens,
        &Record {
            level: Level::Info,
            time: Local::now(),
            location: &LOCATION,
            message,
        },
    );
    assert!(line.ends_with('\n'));
    assert!(!line.ends_with("\n\n"));
});
