use std::fmt;
use std::path::Path;

const UNKNOWN: &str = "???";

/// Source position of the code that called into the logger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    file: &'static str,
    line: u32,
    function: &'static str,
}

impl Location {
    /// `function` is a full path such as `my_crate::client::send`; the macros fill it in.
    #[must_use]
    pub const fn new(file: &'static str, line: u32, function: &'static str) -> Self {
        Self {
            file,
            line,
            function,
        }
    }

    /// File and line of the caller. The function is not available without the macros.
    #[must_use]
    #[track_caller]
    pub fn caller() -> Self {
        let loc = std::panic::Location::caller();
        Self::new(loc.file(), loc.line(), UNKNOWN)
    }

    /// Base name of the source file.
    #[must_use]
    pub fn file_name(&self) -> &'static str {
        Path::new(self.file)
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(self.file)
    }

    #[must_use]
    pub const fn line(&self) -> u32 {
        self.line
    }

    /// Last path segment of the enclosing function, skipping closure frames.
    #[must_use]
    pub fn function_name(&self) -> &'static str {
        let mut path = self.function;
        while let Some(outer) = path.strip_suffix("::{{closure}}") {
            path = outer;
        }
        match path.rsplit("::").next() {
            Some(name) if !name.is_empty() => name,
            _ => UNKNOWN,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}:",
            self.file_name(),
            self.line,
            self.function_name()
        )
    }
}
