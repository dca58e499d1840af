// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! The ordered rule tables for the train_id -> rake_serial_number migration.
//!
//! Each [`Rule`] pairs one compiled pattern with a replacement action. Rules
//! are not independent: later rules operate on text already transformed by
//! earlier rules, so the table order is part of the contract. The tables
//! document the migration rule set exactly as it behaves in production,
//! including its known blind spots (stripping a column from an `INSERT`
//! column list never touches the matching `VALUES` tuple).

use regex::{Captures, Regex, RegexBuilder};

use crate::error::{Result, RewriteError};

/// Replacement action applied to every match of a rule's pattern.
enum Action {
    /// Capture-template replacement (`${1}` style).
    Template(&'static str),
    /// Replacement computed from the captures. Returning `None` leaves the
    /// match untouched, which is how the defensive-OR collapse refuses to
    /// fire when the two placeholder indices disagree.
    Guarded(fn(&Captures) -> Option<String>),
}

/// One pattern-and-replacement text transformation.
pub struct Rule {
    /// Short stable name used in stats and logging
    name: &'static str,
    /// Compiled match pattern
    pattern: Regex,
    /// Replacement action
    action: Action,
}

impl Rule {
    /// Compile a case-insensitive rule (SQL keyword matching).
    fn insensitive(name: &'static str, pattern: &str, action: Action) -> Result<Self> {
        let compiled = RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .map_err(|e| RewriteError::invalid_rule(name, e.to_string()))?;
        Ok(Self {
            name,
            pattern: compiled,
            action,
        })
    }

    /// Compile a case-sensitive rule (identifier token matching).
    fn sensitive(name: &'static str, pattern: &str, action: Action) -> Result<Self> {
        let compiled = Regex::new(pattern)
            .map_err(|e| RewriteError::invalid_rule(name, e.to_string()))?;
        Ok(Self {
            name,
            pattern: compiled,
            action,
        })
    }

    /// Get the rule's name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Apply this rule to text, returning the rewritten text and the number
    /// of matches that were actually replaced.
    pub fn apply(&self, text: &str) -> (String, usize) {
        let mut hits = 0usize;
        let rewritten = self.pattern.replace_all(text, |caps: &Captures| {
            match &self.action {
                Action::Template(template) => {
                    hits += 1;
                    let mut out = String::new();
                    caps.expand(template, &mut out);
                    out
                }
                Action::Guarded(guard) => match guard(caps) {
                    Some(replacement) => {
                        hits += 1;
                        replacement
                    }
                    None => caps[0].to_string(),
                },
            }
        });
        (rewritten.into_owned(), hits)
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("pattern", &self.pattern.as_str())
            .finish()
    }
}

/// Collapse a defensive-OR WHERE clause only when both captured placeholder
/// indices refer to the same bind parameter.
fn collapse_matching_placeholders(caps: &Captures) -> Option<String> {
    if caps[1] == caps[2] {
        Some(format!("WHERE rake_serial_number = ${}", &caps[1]))
    } else {
        None
    }
}

/// Rules 1-4: WHERE clause collapses shared by both variants.
///
/// Order matters within this group: the parenthesized and bare defensive-OR
/// forms must run before the broad `WHERE train_id = $N` catch-all, which
/// would otherwise mangle the left half of an OR clause.
fn where_rules() -> Result<Vec<Rule>> {
    Ok(vec![
        Rule::insensitive(
            "where-paren-or",
            r"WHERE\s+\(train_id\s*=\s*\$(\d+)\s+OR\s+rake_serial_number\s*=\s*\$(\d+)\)",
            Action::Guarded(collapse_matching_placeholders),
        )?,
        Rule::insensitive(
            "where-or",
            r"WHERE\s+train_id\s*=\s*\$(\d+)\s+OR\s+rake_serial_number\s*=\s*\$(\d+)",
            Action::Guarded(collapse_matching_placeholders),
        )?,
        Rule::insensitive(
            "where-bare",
            r"WHERE\s+train_id\s*=\s*\$(\d+)",
            Action::Template("WHERE rake_serial_number = $$${1}"),
        )?,
        Rule::insensitive(
            "join-or-w",
            r"\(w\.train_id\s*=\s*d\.train_id\s+OR\s+w\.rake_serial_number\s*=\s*d\.rake_serial_number\)",
            Action::Template("w.rake_serial_number = d.rake_serial_number"),
        )?,
        Rule::insensitive(
            "join-or-a",
            r"\(a\.train_id\s*=\s*d\.train_id\s+OR\s+a\.rake_serial_number\s*=\s*d\.rake_serial_number\)",
            Action::Template("a.rake_serial_number = d.rake_serial_number"),
        )?,
    ])
}

/// Rule 7: backward-compatible SELECT projection rewrite.
///
/// Keeps the old output column name visible to callers while sourcing the
/// data from the renamed column.
fn select_rule() -> Result<Rule> {
    Rule::insensitive(
        "select-alias",
        r"SELECT\s+train_id\s*,",
        Action::Template("SELECT rake_serial_number AS train_id,"),
    )
}

/// The basic rule table: WHERE/JOIN collapses plus the SELECT projection.
pub fn basic_rules() -> Result<Vec<Rule>> {
    let mut rules = where_rules()?;
    rules.push(select_rule()?);
    Ok(rules)
}

/// The comprehensive rule table: the basic rules plus INSERT column-list
/// stripping, UPDATE SET stripping, JS token renames, and qualified column
/// renames for the four hard-coded table aliases.
pub fn comprehensive_rules() -> Result<Vec<Rule>> {
    let mut rules = where_rules()?;

    // INSERT column-list stripping: leading, middle, and trailing position.
    // The matching VALUES tuple is intentionally left alone.
    rules.push(Rule::insensitive(
        "insert-lead",
        r"INSERT INTO (\w+)\s*\(\s*train_id\s*,\s*",
        Action::Template("INSERT INTO ${1} ("),
    )?);
    rules.push(Rule::insensitive(
        "insert-mid",
        r"INSERT INTO (\w+)\s*\(\s*([^)]*?),\s*train_id\s*,\s*",
        Action::Template("INSERT INTO ${1} (${2}, "),
    )?);
    rules.push(Rule::insensitive(
        "insert-tail",
        r"INSERT INTO (\w+)\s*\(\s*([^)]*?),\s*train_id\s*\)",
        Action::Template("INSERT INTO ${1} (${2})"),
    )?);

    // UPDATE ... SET assignment stripping: trailing and leading position.
    rules.push(Rule::insensitive(
        "update-set-tail",
        r",\s*train_id\s*=\s*\$(\d+)",
        Action::Template(""),
    )?);
    rules.push(Rule::insensitive(
        "update-set-lead",
        r"SET\s+train_id\s*=\s*\$(\d+)\s*,",
        Action::Template("SET "),
    )?);

    rules.push(select_rule()?);

    // JS identifier token renames. Whole-word and case-sensitive, not tied
    // to SQL syntax. Both legacy spellings converge on rakeSerialNumber.
    rules.push(Rule::sensitive(
        "token-actual-train-id",
        r"\bactualTrainId\b",
        Action::Template("rakeSerialNumber"),
    )?);
    rules.push(Rule::sensitive(
        "token-actual-rake-serial",
        r"\bactualRakeSerialNumber\b",
        Action::Template("rakeSerialNumber"),
    )?);

    // Qualified column renames for the four aliases the queries use.
    for (name, pattern, replacement) in [
        ("qualified-d", r"\bd\.train_id\b", "d.rake_serial_number"),
        ("qualified-w", r"\bw\.train_id\b", "w.rake_serial_number"),
        ("qualified-a", r"\ba\.train_id\b", "a.rake_serial_number"),
        ("qualified-d2", r"\bd2\.train_id\b", "d2.rake_serial_number"),
    ] {
        rules.push(Rule::sensitive(name, pattern, Action::Template(replacement))?);
    }

    Ok(rules)
}
