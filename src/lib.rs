//! Commit Guardian - commit message lint rules for host linting tools
//!
//! This crate is a rule library, not a linter of its own: commit loading,
//! repository traversal, and output formatting belong to the host tool that
//! embeds it. The crate supplies the rules (currently the SD1
//! issue-tracker-reference rule), a registry the host consults by rule code
//! or name, and a thin [`CommitLinter`] that runs the enabled rules over
//! commits the host hands in.

pub mod config;
pub mod domain;
pub mod rules;

// Re-export main types for convenient access
pub use config::{LinterConfig, RuleSettings};
pub use domain::{CommitMessage, LintError, LintReport, LintResult, Violation};
pub use rules::{CommitRule, IssueTrackerReference, RuleBox, RuleRegistry};

/// Runs the enabled rules over commits supplied by the host
pub struct CommitLinter {
    config: LinterConfig,
    registry: RuleRegistry,
}

impl CommitLinter {
    /// Create a linter with the given configuration and the built-in rules
    ///
    /// Fails if the configuration references a rule that does not exist, so
    /// a typo in a config file surfaces immediately rather than silently
    /// leaving the intended rule enabled.
    pub fn new(config: LinterConfig) -> LintResult<Self> {
        Self::with_registry(config, RuleRegistry::with_defaults()?)
    }

    /// Create a linter with default configuration
    pub fn with_defaults() -> LintResult<Self> {
        Self::new(LinterConfig::default())
    }

    /// Create a linter loading configuration from a YAML file
    pub fn from_config_file<P: AsRef<std::path::Path>>(path: P) -> LintResult<Self> {
        let config = LinterConfig::load_from_file(path)?;
        Self::new(config)
    }

    /// Create a linter over a caller-supplied rule registry
    pub fn with_registry(config: LinterConfig, registry: RuleRegistry) -> LintResult<Self> {
        for key in config.rules.keys() {
            if registry.get(key).is_none() {
                return Err(LintError::config(format!(
                    "Config references unknown rule '{key}'"
                )));
            }
        }

        Ok(Self { config, registry })
    }

    /// The rule registry backing this linter
    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    /// Lint a single commit, running every enabled rule
    pub fn lint_commit(&self, commit: &CommitMessage) -> LintReport {
        let mut report = LintReport::new();

        for rule in self.registry.iter() {
            if !self.config.is_enabled(rule.code(), rule.name()) {
                tracing::debug!(code = rule.code(), "rule disabled by config, skipping");
                continue;
            }

            let violations = rule.validate(commit);
            tracing::debug!(
                code = rule.code(),
                violations = violations.len(),
                "rule evaluated"
            );
            for violation in violations {
                report.add_violation(violation);
            }
        }

        report.commits_checked = 1;
        report
    }

    /// Lint a full commit message, taking its first line as the title
    pub fn lint_message(&self, full_message: &str) -> LintReport {
        self.lint_commit(&CommitMessage::parse(full_message))
    }

    /// Lint a bare commit title
    pub fn lint_title(&self, title: &str) -> LintReport {
        self.lint_commit(&CommitMessage::new(title, ""))
    }

    /// Lint a batch of commits, merging the per-commit reports
    pub fn lint_commits<'a, I>(&self, commits: I) -> LintReport
    where
        I: IntoIterator<Item = &'a CommitMessage>,
    {
        let mut report = LintReport::new();
        for commit in commits {
            report.merge(self.lint_commit(commit));
        }
        report
    }
}

/// Convenience function to lint one title with the default rule set
pub fn lint_title(title: &str) -> LintResult<LintReport> {
    let linter = CommitLinter::with_defaults()?;
    Ok(linter.lint_title(title))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linter_passes_valid_title() {
        let linter = CommitLinter::with_defaults().unwrap();
        let report = linter.lint_title("Fixed the blub (bsc#999000, jsc#SLE-9900)");

        assert!(!report.has_violations());
        assert_eq!(report.commits_checked, 1);
    }

    #[test]
    fn test_linter_flags_missing_reference() {
        let linter = CommitLinter::with_defaults().unwrap();
        let report = linter.lint_title("Fixed the blub");

        assert_eq!(report.violations.len(), 1);
        assert_eq!(report.violations[0].rule_id, "SD1");
        assert_eq!(report.violations[0].line_number, 1);
    }

    #[test]
    fn test_lint_message_checks_first_line_only() {
        let linter = CommitLinter::with_defaults().unwrap();

        let report = linter.lint_message("Changed the blab (trivial)\n\nDetails here.");
        assert!(!report.has_violations());

        let report = linter.lint_message("Changed the blab\n\nMentions (bsc#1) in the body.");
        assert!(report.has_violations());
    }

    #[test]
    fn test_disabled_rule_is_skipped() {
        let config = LinterConfig::load_from_str("rules:\n  SD1:\n    enabled: false\n").unwrap();
        let linter = CommitLinter::new(config).unwrap();

        let report = linter.lint_title("no reference anywhere");
        assert!(!report.has_violations());
    }

    #[test]
    fn test_unknown_rule_in_config_rejected() {
        let config =
            LinterConfig::load_from_str("rules:\n  SD99:\n    enabled: false\n").unwrap();

        assert!(matches!(
            CommitLinter::new(config),
            Err(LintError::Configuration { .. })
        ));
    }

    #[test]
    fn test_lint_commits_merges_reports() {
        let linter = CommitLinter::with_defaults().unwrap();
        let commits = vec![
            CommitMessage::new("Fixed the blub (bsc#1)", ""),
            CommitMessage::new("Broke the rules", ""),
        ];

        let report = linter.lint_commits(&commits);
        assert_eq!(report.commits_checked, 2);
        assert_eq!(report.violations.len(), 1);
    }

    #[test]
    fn test_convenience_lint_title() {
        let report = lint_title("Changed the blab (trivial)").unwrap();
        assert!(!report.has_violations());
    }
}
