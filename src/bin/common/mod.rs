// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Common utilities shared by the two CLI entry points.

pub use anyhow::Result as CliResult;
pub type Result<T = ()> = CliResult<T>;

/// Install the tracing subscriber. Diagnostics stay quiet unless RUST_LOG
/// raises the filter; user-facing output goes to stdout via println.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}

/// Print the tool's usage line to stdout and exit with status 1.
///
/// Missing-argument handling predates the library error path: no file I/O
/// has happened yet, so this is a plain usage message, not an error report.
pub fn usage_exit(usage: &str) -> ! {
    println!("{usage}");
    std::process::exit(1);
}
