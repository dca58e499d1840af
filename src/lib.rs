// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! # Rakeshift
//!
//! Migration rewriter for the train_id -> rake_serial_number column rename.
//!
//! The core is an ordered list of regular-expression rewrite rules applied
//! strictly in sequence over the text of one source file, plus a thin file
//! I/O wrapper around it. Two rule tables exist with divergent coverage:
//!
//! - **Basic** — collapses defensive-OR `WHERE` clauses, the two hard-coded
//!   join alias pairs, and the backward-compatible `SELECT` projection.
//! - **Comprehensive** — the full rule list, adding `INSERT` column-list
//!   stripping, `UPDATE ... SET` assignment stripping, JS identifier token
//!   renames, and qualified column renames.
//!
//! Both are preserved as distinct entry points; callers may depend on the
//! narrower basic behavior.
//!
//! ## Example
//!
//! ```
//! use rakeshift::RuleSet;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let rules = RuleSet::comprehensive()?;
//! let out = rules.rewrite("SELECT train_id, name FROM trains");
//! assert_eq!(out, "SELECT rake_serial_number AS train_id, name FROM trains");
//! # Ok(())
//! # }
//! ```

// Error types
pub mod error;

pub use error::{Result, RewriteError};

// Rule definitions and the ordered rule tables
pub mod rules;

pub use rules::Rule;

// Ordered rule application
pub mod rewriter;

pub use rewriter::{RewriteStats, RuleSet, Variant};

// File-level read/transform/write operations
pub mod io;

pub use io::{
    rewrite_in_place, rewrite_to, RewriteOutcome, BACKUP_SUFFIX, DEFAULT_OUTPUT_SUFFIX,
};
