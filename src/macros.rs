//! Logging macros that capture file, line and the enclosing function.
//!
//! Each macro takes an optional `logger;` prefix. Without it the record goes to the
//! process-wide default logger.
//!
//! ```no_run
//! let logger = rotolog::Logger::builder()
//!     .handler(rotolog::Handler::STDERR)
//!     .build();
//! rotolog::warn!(logger; "retry {} of {}", 2, 3);
//! rotolog::info!("to the default logger");
//! ```

#[doc(hidden)]
#[macro_export]
macro_rules! __function_path {
    () => {{
        fn __here() {}
        fn __type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        let name = __type_name_of(__here);
        match name.strip_suffix("::__here") {
            ::std::option::Option::Some(path) => path,
            ::std::option::Option::None => name,
        }
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __location {
    () => {
        $crate::fmt::Location::new(::std::file!(), ::std::line!(), $crate::__function_path!())
    };
}

/// Logs at an explicit level: `log!(logger; Level::Warn, "x = {}", x)` or `log!(Level::Warn, ...)`.
#[macro_export]
macro_rules! log {
    ($logger:expr; $level:expr, $($arg:tt)+) => {
        $logger.log_at($level, $crate::__location!(), ::std::format_args!($($arg)+))
    };
    ($level:expr, $($arg:tt)+) => {
        $crate::global::logger().log_at($level, $crate::__location!(), ::std::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! trace {
    ($logger:expr; $($arg:tt)+) => { $crate::log!($logger; $crate::Level::Trace, $($arg)+) };
    ($($arg:tt)+) => { $crate::log!($crate::Level::Trace, $($arg)+) };
}

#[macro_export]
macro_rules! debug {
    ($logger:expr; $($arg:tt)+) => { $crate::log!($logger; $crate::Level::Debug, $($arg)+) };
    ($($arg:tt)+) => { $crate::log!($crate::Level::Debug, $($arg)+) };
}

#[macro_export]
macro_rules! info {
    ($logger:expr; $($arg:tt)+) => { $crate::log!($logger; $crate::Level::Info, $($arg)+) };
    ($($arg:tt)+) => { $crate::log!($crate::Level::Info, $($arg)+) };
}

#[macro_export]
macro_rules! warn {
    ($logger:expr; $($arg:tt)+) => { $crate::log!($logger; $crate::Level::Warn, $($arg)+) };
    ($($arg:tt)+) => { $crate::log!($crate::Level::Warn, $($arg)+) };
}

#[macro_export]
macro_rules! error {
    ($logger:expr; $($arg:tt)+) => { $crate::log!($logger; $crate::Level::Error, $($arg)+) };
    ($($arg:tt)+) => { $crate::log!($crate::Level::Error, $($arg)+) };
}

/// Logs at `FATAL`; execution continues.
#[macro_export]
macro_rules! fatal {
    ($logger:expr; $($arg:tt)+) => { $crate::log!($logger; $crate::Level::Fatal, $($arg)+) };
    ($($arg:tt)+) => { $crate::log!($crate::Level::Fatal, $($arg)+) };
}

/// Enqueues the record at `PANIC`, then panics with the message. Evaluates to `!`.
#[macro_export]
macro_rules! panic_log {
    ($logger:expr; $($arg:tt)+) => {
        $logger.panic_at($crate::__location!(), ::std::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::global::logger().panic_at($crate::__location!(), ::std::format_args!($($arg)+))
    };
}
