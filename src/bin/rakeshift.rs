// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! # Rakeshift CLI
//!
//! Comprehensive in-place rewriter: applies the full train_id ->
//! rake_serial_number rule list to one source file, saving a verbatim
//! backup first.
//!
//! ## Usage
//!
//! ```sh
//! rakeshift queries.sql
//! # queries.sql rewritten in place, original saved to queries.sql.backup
//! ```

mod common;

use std::path::PathBuf;
use std::process;

use clap::Parser;
use common::Result;
use rakeshift::{rewrite_in_place, RuleSet};

/// Rakeshift - rewrite train_id references to rake_serial_number
///
/// Rewrites the input file in place with the comprehensive rule list.
/// A byte-identical copy of the original is saved to `<input>.backup`
/// before anything is overwritten.
#[derive(Parser, Clone)]
#[command(name = "rakeshift")]
#[command(about = "Rewrite train_id references to rake_serial_number in place", long_about = None)]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    /// Source file to rewrite in place
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let Some(input) = cli.input else {
        common::usage_exit("Usage: rakeshift <input_file>");
    };

    let rules = RuleSet::comprehensive()?;
    let outcome = rewrite_in_place(&rules, &input)?;

    println!("Processed {}", outcome.input.display());
    if let Some(backup) = &outcome.backup {
        println!("Backup saved to {}", backup.display());
    }
    Ok(())
}

fn main() {
    common::init_tracing();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
