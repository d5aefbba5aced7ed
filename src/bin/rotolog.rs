//! `rotolog` binary.
//!
//! Usage:
//!   rotolog [OPTIONS] <MESSAGE>...       Log one message
//!   rotolog [OPTIONS] --stdin            Log every stdin line
//!
//! Examples:
//!   rotolog --handler file --dir /tmp/logs --rotate size --rotate-size 10M "deploy done"
//!   journalctl -f | rotolog --stdin --handler file --rotate hour

use clap::Parser;
use rotolog::cli::{Cli, run};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    run(&cli)
}
