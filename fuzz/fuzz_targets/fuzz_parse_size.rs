#![no_main]
use libfuzzer_sys::fuzz_target;
use rotolog::rotate::{parse_size, size_label};

fuzz_target!(|data: &str| {
    if let Some(bytes) = parse_size(data) {
        // Every label parses back to a value no larger than the input
        let label = size_label(bytes);
        let back = parse_size(&label).expect("label must parse");
        assert!(back <= bytes);
    }
});
