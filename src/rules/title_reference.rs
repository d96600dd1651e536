//! The issue-tracker-reference rule (SD1)
//!
//! Requires a commit title to end with one or more recognized issue tracker
//! references, or with a single keyword explaining why none is given.

use regex::Regex;

use crate::domain::{CommitMessage, LintError, LintResult, Violation};
use crate::rules::CommitRule;

/// Tracker prefixes accepted at the end of a title, as shown to users
const TRACKER_REFERENCES: &[&str] = &["bsc#", "boo#", "jsc#", "FATE#", "SOC-"];

/// Keywords that explain the omission of a tracker reference
const OMISSION_KEYWORDS: &[&str] = &["trivial", "typo", "noref"];

/// Full-title pattern: a trailing parenthesized group holding either a
/// comma-separated reference list or exactly one omission keyword.
///
/// Known gap, kept on purpose: a reference at the beginning or in the middle
/// of the title does not count, and mixing a keyword with references does not
/// match. Revisit only if product intent changes.
const TITLE_PATTERN: &str =
    r"^.*\((((bsc#|boo#|FATE#|jsc#[A-Z]+-|SOC-)[0-9]+(,\s)?)+|trivial|typo|noref)\)$";

/// Rule SD1: commit titles must end with a tracker reference or an
/// explanation of its omission
pub struct IssueTrackerReference {
    pattern: Regex,
    message: String,
}

impl IssueTrackerReference {
    /// Create the rule, compiling its title pattern
    pub fn new() -> LintResult<Self> {
        let pattern = Regex::new(TITLE_PATTERN)
            .map_err(|e| LintError::pattern(format!("Invalid regex '{TITLE_PATTERN}': {e}")))?;

        Ok(Self {
            pattern,
            message: violation_message(),
        })
    }
}

impl CommitRule for IssueTrackerReference {
    fn name(&self) -> &'static str {
        "issue-tracker-reference"
    }

    fn code(&self) -> &'static str {
        "SD1"
    }

    fn description(&self) -> &'static str {
        "Title must end with an issue tracker reference or an omission keyword"
    }

    fn validate(&self, commit: &CommitMessage) -> Vec<Violation> {
        if self.pattern.is_match(&commit.title) {
            return Vec::new();
        }

        vec![Violation::new(self.code(), self.message.clone(), 1)]
    }
}

/// Build the fixed violation message from the static token lists
fn violation_message() -> String {
    let quoted: Vec<String> = OMISSION_KEYWORDS
        .iter()
        .map(|keyword| format!("\"{keyword}\""))
        .collect();
    let keywords = match quoted.as_slice() {
        [rest @ .., last] => format!("{}, or {}", rest.join(", "), last),
        [] => String::new(),
    };

    format!(
        "Title contains no bug tracker reference(s) or explanation of omission thereof at its end.\n\
         \x20 Recognized issue tracker references: {}.\n\
         \x20 Alternatively, explain the omission of a reference with any of the values {}.\n\
         \x20 Valid example 1: \"Fixed the blub (bsc#999000, jsc#SLE-9900)\"\n\
         \x20 Valid example 2: \"Changed the blab (trivial)\"",
        TRACKER_REFERENCES.join(", "),
        keywords,
    )
}
