#![no_main]
use libfuzzer_sys::fuzz_target;
use rotolog::Config;

fuzz_target!(|data: &str| {
    // Must not panic on any TOML input; invalid fields surface as errors
    if let Ok(config) = Config::parse(data) {
        let _ = config.logger.to_builder();
    }
});
