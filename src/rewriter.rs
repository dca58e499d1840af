// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Ordered application of the migration rule set.
//!
//! A [`RuleSet`] holds the compiled rules for one tool variant and applies
//! them strictly in sequence: each rule's output feeds the next. The rewrite
//! itself is a pure string-to-string function; unmatched text passes through
//! unchanged.
//!
//! # Example
//!
//! ```
//! use rakeshift::RuleSet;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let rules = RuleSet::basic()?;
//! let out = rules.rewrite("WHERE (train_id = $3 OR rake_serial_number = $3)");
//! assert_eq!(out, "WHERE rake_serial_number = $3");
//! # Ok(())
//! # }
//! ```

use std::fmt;

use crate::error::Result;
use crate::rules::{basic_rules, comprehensive_rules, Rule};

/// Which of the two divergent rule tables a [`RuleSet`] carries.
///
/// Both variants are preserved as distinct entry points because downstream
/// callers may depend on the narrower, more conservative basic behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// WHERE/JOIN collapses and the SELECT projection only
    Basic,
    /// The full rule list, including INSERT/UPDATE stripping and token renames
    Comprehensive,
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variant::Basic => write!(f, "basic"),
            Variant::Comprehensive => write!(f, "comprehensive"),
        }
    }
}

/// Statistics from a rewrite pass.
#[derive(Debug, Clone, Default)]
pub struct RewriteStats {
    /// (rule name, replacement count) for every rule that fired
    pub rule_hits: Vec<(&'static str, usize)>,
}

impl RewriteStats {
    /// Total number of replacements across all rules.
    pub fn total_replacements(&self) -> usize {
        self.rule_hits.iter().map(|(_, n)| n).sum()
    }

    /// Check whether any rule fired.
    pub fn is_empty(&self) -> bool {
        self.rule_hits.is_empty()
    }
}

/// The complete ordered rule list for one tool variant.
pub struct RuleSet {
    variant: Variant,
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Build the basic rule set (WHERE/JOIN collapses plus the SELECT
    /// projection).
    pub fn basic() -> Result<Self> {
        Ok(Self {
            variant: Variant::Basic,
            rules: basic_rules()?,
        })
    }

    /// Build the comprehensive rule set (the full rule list).
    pub fn comprehensive() -> Result<Self> {
        Ok(Self {
            variant: Variant::Comprehensive,
            rules: comprehensive_rules()?,
        })
    }

    /// Build the rule set for a given variant.
    pub fn for_variant(variant: Variant) -> Result<Self> {
        match variant {
            Variant::Basic => Self::basic(),
            Variant::Comprehensive => Self::comprehensive(),
        }
    }

    /// Which variant this rule set implements.
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Number of rules in the table.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if the rule table is empty.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Apply every rule in order and return the transformed text.
    pub fn rewrite(&self, text: &str) -> String {
        self.rewrite_with_stats(text).0
    }

    /// Apply every rule in order, returning the transformed text and the
    /// per-rule replacement counts.
    pub fn rewrite_with_stats(&self, text: &str) -> (String, RewriteStats) {
        let mut current = text.to_string();
        let mut stats = RewriteStats::default();

        for rule in &self.rules {
            let (rewritten, hits) = rule.apply(&current);
            if hits > 0 {
                tracing::debug!(rule = rule.name(), hits, "rule fired");
                stats.rule_hits.push((rule.name(), hits));
            }
            current = rewritten;
        }

        (current, stats)
    }
}

impl fmt::Debug for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleSet")
            .field("variant", &self.variant)
            .field("rule_count", &self.rules.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_display() {
        assert_eq!(Variant::Basic.to_string(), "basic");
        assert_eq!(Variant::Comprehensive.to_string(), "comprehensive");
    }

    #[test]
    fn test_for_variant() {
        let basic = RuleSet::for_variant(Variant::Basic).unwrap();
        let full = RuleSet::for_variant(Variant::Comprehensive).unwrap();
        assert_eq!(basic.variant(), Variant::Basic);
        assert_eq!(full.variant(), Variant::Comprehensive);
        assert!(basic.len() < full.len());
        assert!(!basic.is_empty());
    }

    #[test]
    fn test_unmatched_text_passes_through() {
        let rules = RuleSet::comprehensive().unwrap();
        let input = "SELECT name FROM wagons ORDER BY created_at";
        let (out, stats) = rules.rewrite_with_stats(input);
        assert_eq!(out, input);
        assert!(stats.is_empty());
        assert_eq!(stats.total_replacements(), 0);
    }

    #[test]
    fn test_specific_rules_win_over_catch_all() {
        // The defensive-OR collapse must run before the bare WHERE rule,
        // otherwise the left half of the OR would be rewritten in place.
        let rules = RuleSet::basic().unwrap();
        let out = rules.rewrite("WHERE train_id = $2 OR rake_serial_number = $2");
        assert_eq!(out, "WHERE rake_serial_number = $2");
    }

    #[test]
    fn test_stats_count_hits_per_rule() {
        let rules = RuleSet::basic().unwrap();
        let input = "WHERE train_id = $1; WHERE train_id = $2";
        let (_, stats) = rules.rewrite_with_stats(input);
        assert_eq!(stats.rule_hits, vec![("where-bare", 2)]);
        assert_eq!(stats.total_replacements(), 2);
    }

    #[test]
    fn test_basic_skips_comprehensive_rules() {
        let rules = RuleSet::basic().unwrap();
        let input = "const actualTrainId = 1; // d.train_id";
        assert_eq!(rules.rewrite(input), input);
    }

    #[test]
    fn test_comprehensive_rewrites_tokens() {
        let rules = RuleSet::comprehensive().unwrap();
        let out = rules.rewrite("actualTrainId || actualRakeSerialNumber");
        assert_eq!(out, "rakeSerialNumber || rakeSerialNumber");
    }

    #[test]
    fn test_rewrite_is_idempotent() {
        let rules = RuleSet::comprehensive().unwrap();
        let input = "\
            SELECT train_id, name FROM trains WHERE (train_id = $1 OR rake_serial_number = $1);\n\
            UPDATE trains SET status = $1, train_id = $2 WHERE train_id = $3;\n\
            JOIN dispatches d ON (w.train_id = d.train_id OR w.rake_serial_number = d.rake_serial_number)\n\
            const id = actualTrainId;\n";
        let once = rules.rewrite(input);
        let twice = rules.rewrite(&once);
        assert_eq!(once, twice);
    }
}
