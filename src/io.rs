// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! File-level rewrite operations.
//!
//! Two write strategies exist, matching the two tool variants:
//! - [`rewrite_in_place`] writes a verbatim backup to `<input>.backup` and
//!   then overwrites the input file (comprehensive tool).
//! - [`rewrite_to`] writes the transformed content to a separate output path,
//!   defaulting to `<input>.new`, and never touches the input (basic tool).
//!
//! Each invocation processes exactly one file from start to finish: read
//! once, transform once, write once.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, RewriteError};
use crate::rewriter::{RewriteStats, RuleSet};

/// Suffix appended to the input path for the pre-transform backup copy.
pub const BACKUP_SUFFIX: &str = ".backup";

/// Suffix appended to the input path when no output path is given.
pub const DEFAULT_OUTPUT_SUFFIX: &str = ".new";

/// Result of one file-level rewrite operation.
#[derive(Debug, Clone)]
pub struct RewriteOutcome {
    /// Input file that was read
    pub input: PathBuf,
    /// Path the transformed content was written to
    pub written: PathBuf,
    /// Backup path, if a backup was written
    pub backup: Option<PathBuf>,
    /// Per-rule replacement counts for the pass
    pub stats: RewriteStats,
}

impl RewriteOutcome {
    /// Check whether the transformed content differs from the input.
    pub fn changed(&self) -> bool {
        !self.stats.is_empty()
    }
}

/// Append a suffix to a path without touching its extension.
fn append_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut os = path.as_os_str().to_os_string();
    os.push(suffix);
    PathBuf::from(os)
}

/// Rewrite a file in place, saving a verbatim backup first.
///
/// The backup at `<input>.backup` is byte-identical to the pre-run content
/// and is written before the input is mutated, so a failed overwrite never
/// leaves the original content unrecoverable.
pub fn rewrite_in_place(rules: &RuleSet, input: &Path) -> Result<RewriteOutcome> {
    let content = fs::read_to_string(input).map_err(|e| RewriteError::read(input, &e))?;
    let (rewritten, stats) = rules.rewrite_with_stats(&content);

    let backup = append_suffix(input, BACKUP_SUFFIX);
    fs::write(&backup, &content).map_err(|e| RewriteError::write(&backup, &e))?;
    fs::write(input, &rewritten).map_err(|e| RewriteError::write(input, &e))?;

    tracing::info!(
        input = %input.display(),
        backup = %backup.display(),
        replacements = stats.total_replacements(),
        bytes_in = content.len(),
        bytes_out = rewritten.len(),
        "rewrote file in place"
    );

    Ok(RewriteOutcome {
        input: input.to_path_buf(),
        written: input.to_path_buf(),
        backup: Some(backup),
        stats,
    })
}

/// Rewrite a file to a separate output path, leaving the input untouched.
///
/// When `output` is `None` the transformed content goes to `<input>.new`.
/// No backup is written; the input file is never mutated.
pub fn rewrite_to(rules: &RuleSet, input: &Path, output: Option<&Path>) -> Result<RewriteOutcome> {
    let content = fs::read_to_string(input).map_err(|e| RewriteError::read(input, &e))?;
    let (rewritten, stats) = rules.rewrite_with_stats(&content);

    let written = match output {
        Some(path) => path.to_path_buf(),
        None => append_suffix(input, DEFAULT_OUTPUT_SUFFIX),
    };
    fs::write(&written, &rewritten).map_err(|e| RewriteError::write(&written, &e))?;

    tracing::info!(
        input = %input.display(),
        output = %written.display(),
        replacements = stats.total_replacements(),
        bytes_in = content.len(),
        bytes_out = rewritten.len(),
        "rewrote file to output path"
    );

    Ok(RewriteOutcome {
        input: input.to_path_buf(),
        written,
        backup: None,
        stats,
    })
}
