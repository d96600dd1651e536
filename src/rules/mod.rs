//! Commit rules and the registry the host orchestration consumes
//!
//! Each rule is a small stateless struct implementing [`CommitRule`]. The
//! [`RuleRegistry`] maps rule codes and names to rule instances so host
//! configuration can enable, disable, or reference rules by either key.

pub mod title_reference;

pub use title_reference::IssueTrackerReference;

use crate::domain::{CommitMessage, LintResult, Violation};

/// A single commit message lint rule
///
/// Rules are pure functions over the commit they receive: no shared state,
/// no side effects, the same commit always yields the same violations.
pub trait CommitRule: Send + Sync {
    /// Kebab-case name of this rule (e.g. "issue-tracker-reference")
    fn name(&self) -> &'static str;

    /// Short rule code (e.g. "SD1")
    fn code(&self) -> &'static str;

    /// Brief description of what this rule checks
    fn description(&self) -> &'static str {
        ""
    }

    /// Check a commit and return any violations found
    fn validate(&self, commit: &CommitMessage) -> Vec<Violation>;
}

/// Type alias for boxed rule trait objects
pub type RuleBox = Box<dyn CommitRule>;

/// Registry of available rules, addressable by code or name
///
/// Registration order is preserved so violation output stays deterministic
/// across runs.
pub struct RuleRegistry {
    rules: Vec<RuleBox>,
}

impl RuleRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Create a registry populated with the built-in rules
    pub fn with_defaults() -> LintResult<Self> {
        let mut registry = Self::new();
        for rule in default_rules()? {
            registry.register(rule);
        }
        Ok(registry)
    }

    /// Register a rule, replacing any existing rule with the same code
    pub fn register(&mut self, rule: RuleBox) {
        tracing::debug!(code = rule.code(), name = rule.name(), "registering rule");
        self.rules.retain(|existing| existing.code() != rule.code());
        self.rules.push(rule);
    }

    /// Look up a rule by its code or name
    pub fn get(&self, key: &str) -> Option<&dyn CommitRule> {
        self.rules
            .iter()
            .find(|rule| rule.code() == key || rule.name() == key)
            .map(AsRef::as_ref)
    }

    /// Iterate over all registered rules in registration order
    pub fn iter(&self) -> impl Iterator<Item = &dyn CommitRule> {
        self.rules.iter().map(AsRef::as_ref)
    }

    /// Number of registered rules
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// The built-in rule set
pub fn default_rules() -> LintResult<Vec<RuleBox>> {
    Ok(vec![Box::new(IssueTrackerReference::new()?)])
}
