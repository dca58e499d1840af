// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! # Rakeshift-lite CLI
//!
//! Conservative rewriter: applies the basic rule list (WHERE/JOIN collapses
//! and the SELECT projection only) and writes the result to a separate
//! output path. The input file is never mutated and no backup is written.
//!
//! ## Usage
//!
//! ```sh
//! rakeshift-lite index.js              # writes index.js.new
//! rakeshift-lite index.js rewritten.js # writes rewritten.js
//! ```

mod common;

use std::path::PathBuf;
use std::process;

use clap::Parser;
use common::Result;
use rakeshift::{rewrite_to, RuleSet};

/// Rakeshift-lite - conservative train_id rewriter
///
/// Applies the basic rule list and writes to `output_file`, defaulting to
/// `<input>.new`. The input file is left untouched.
#[derive(Parser, Clone)]
#[command(name = "rakeshift-lite")]
#[command(about = "Rewrite train_id references with the conservative rule list", long_about = None)]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    /// Source file to read
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,

    /// Output path (defaults to `<input>.new`)
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let Some(input) = cli.input else {
        common::usage_exit("Usage: rakeshift-lite <input_file> [output_file]");
    };

    let rules = RuleSet::basic()?;
    let outcome = rewrite_to(&rules, &input, cli.output.as_deref())?;

    println!("Processed {}", outcome.input.display());
    println!("Output written to {}", outcome.written.display());
    Ok(())
}

fn main() {
    common::init_tracing();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
