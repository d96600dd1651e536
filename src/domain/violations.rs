//! Core domain models for lint findings and lint run results
//!
//! A violation is a finding, not a fault: rules report violations by value,
//! and `LintError` is reserved for genuine failures such as unloadable
//! configuration or an invalid rule pattern.

use serde::{Deserialize, Serialize};

/// A lint finding produced by a commit rule
///
/// Immutable once constructed; rules build one per finding and hand it back
/// to the host by value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Short code of the rule that produced this finding (e.g. "SD1")
    pub rule_id: String,
    /// Human-readable description of the finding
    pub message: String,
    /// Line of the commit message the finding refers to (1-indexed;
    /// title rules always report line 1)
    pub line_number: u32,
}

impl Violation {
    /// Create a new violation
    pub fn new(rule_id: impl Into<String>, message: impl Into<String>, line_number: u32) -> Self {
        Self {
            rule_id: rule_id.into(),
            message: message.into(),
            line_number,
        }
    }

    /// Format violation for display
    pub fn format_display(&self) -> String {
        format!("{}: [{}] {}", self.line_number, self.rule_id, self.message)
    }
}

/// Result of linting one or more commits
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LintReport {
    /// All violations found during the run
    pub violations: Vec<Violation>,
    /// Number of commits that were checked
    pub commits_checked: usize,
}

impl LintReport {
    /// Create a new empty report
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a violation to the report
    pub fn add_violation(&mut self, violation: Violation) {
        self.violations.push(violation);
    }

    /// Whether the report contains any violations
    pub fn has_violations(&self) -> bool {
        !self.violations.is_empty()
    }

    /// Get violations produced by a specific rule
    pub fn violations_for_rule<'a>(
        &'a self,
        rule_id: &'a str,
    ) -> impl Iterator<Item = &'a Violation> {
        self.violations.iter().filter(move |v| v.rule_id == rule_id)
    }

    /// Merge another report into this one
    pub fn merge(&mut self, other: LintReport) {
        self.violations.extend(other.violations);
        self.commits_checked += other.commits_checked;
    }
}

/// Error types that can occur while setting up or running the linter
#[derive(Debug, thiserror::Error)]
pub enum LintError {
    /// Configuration file could not be loaded or parsed
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// A rule pattern failed to compile
    #[error("Pattern error: {message}")]
    Pattern { message: String },

    /// File could not be read or accessed
    #[error("IO error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl LintError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a pattern error
    pub fn pattern(message: impl Into<String>) -> Self {
        Self::Pattern {
            message: message.into(),
        }
    }
}

/// Result type for linter operations
pub type LintResult<T> = Result<T, LintError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_violation_creation() {
        let violation = Violation::new("SD1", "Test message", 1);

        assert_eq!(violation.rule_id, "SD1");
        assert_eq!(violation.message, "Test message");
        assert_eq!(violation.line_number, 1);
    }

    #[test]
    fn test_violation_display() {
        let violation = Violation::new("SD1", "Missing reference", 1);
        assert_eq!(violation.format_display(), "1: [SD1] Missing reference");
    }

    #[test]
    fn test_violation_serialization_shape() {
        let violation = Violation::new("SD1", "msg", 1);
        let json = serde_json::to_value(&violation).unwrap();

        assert_eq!(json["rule_id"], "SD1");
        assert_eq!(json["message"], "msg");
        assert_eq!(json["line_number"], 1);
    }

    #[test]
    fn test_report_aggregation() {
        let mut report = LintReport::new();
        assert!(!report.has_violations());

        report.add_violation(Violation::new("SD1", "first", 1));
        report.add_violation(Violation::new("XX9", "second", 1));
        report.commits_checked = 1;

        assert!(report.has_violations());
        assert_eq!(report.violations_for_rule("SD1").count(), 1);
    }

    #[test]
    fn test_report_merge() {
        let mut left = LintReport::new();
        left.add_violation(Violation::new("SD1", "a", 1));
        left.commits_checked = 1;

        let mut right = LintReport::new();
        right.add_violation(Violation::new("SD1", "b", 1));
        right.commits_checked = 2;

        left.merge(right);
        assert_eq!(left.violations.len(), 2);
        assert_eq!(left.commits_checked, 3);
    }
}
