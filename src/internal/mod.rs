//! The logger's own diagnostics: sink faults, recovered writer panics, rotation events.
//!
//! These go straight to the process stderr and never through a `Logger`, since the
//! logger being reported on may be the broken one. Debug lines appear only when
//! `ROTOLOG_DEBUG` is set.

use std::io::Write;
use std::sync::OnceLock;

static VERBOSE: OnceLock<bool> = OnceLock::new();

fn verbose() -> bool {
    *VERBOSE.get_or_init(|| std::env::var_os("ROTOLOG_DEBUG").is_some())
}

/// Best-effort: a failing stderr is ignored.
fn emit(tag: &str, scope: &str, msg: &str) {
    let _ = writeln!(std::io::stderr().lock(), "[rotolog] {tag} {scope}: {msg}");
}

/// File rotation, directory creation and similar chatter.
pub fn debug(scope: &str, msg: &str) {
    if verbose() {
        emit("debug", scope, msg);
    }
}

/// Degraded but working, e.g. a record written to stderr instead of the file.
pub fn warn(scope: &str, msg: &str) {
    emit("warn", scope, msg);
}

/// A record or a sink was lost.
pub fn error(scope: &str, msg: &str) {
    emit("error", scope, msg);
}
