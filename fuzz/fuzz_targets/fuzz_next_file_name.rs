#![no_main]
use libfuzzer_sys::fuzz_target;
use rotolog::rotate::next_file_name;

fuzz_target!(|data: &str| {
    // Must not panic or overflow on any recorded name
    let next = next_file_name(data);
    assert!(next.ends_with(".log"));
});
