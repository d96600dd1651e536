//! Commit message value type handed in by the host tool

use serde::{Deserialize, Serialize};

/// A parsed commit message
///
/// The title is the first line of the message; everything after the first
/// line break is the body. Hosts that already split messages can construct
/// one directly with [`CommitMessage::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitMessage {
    /// First line of the commit message
    pub title: String,
    /// Remainder of the message, without the separating newline
    pub body: String,
}

impl CommitMessage {
    /// Create a commit message from an already-split title and body
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }

    /// Parse a full commit message, taking the first line as the title
    pub fn parse(full_message: &str) -> Self {
        match full_message.split_once('\n') {
            Some((title, body)) => Self::new(title.trim_end_matches('\r'), body),
            None => Self::new(full_message, ""),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_title_only() {
        let commit = CommitMessage::parse("Fixed the blub (bsc#123)");
        assert_eq!(commit.title, "Fixed the blub (bsc#123)");
        assert_eq!(commit.body, "");
    }

    #[test]
    fn test_parse_title_and_body() {
        let commit = CommitMessage::parse("Fixed the blub (bsc#123)\n\nLonger explanation.");
        assert_eq!(commit.title, "Fixed the blub (bsc#123)");
        assert_eq!(commit.body, "\nLonger explanation.");
    }

    #[test]
    fn test_parse_strips_carriage_return() {
        let commit = CommitMessage::parse("Fixed the blub (trivial)\r\nbody");
        assert_eq!(commit.title, "Fixed the blub (trivial)");
        assert_eq!(commit.body, "body");
    }

    #[test]
    fn test_parse_empty_message() {
        let commit = CommitMessage::parse("");
        assert_eq!(commit.title, "");
        assert_eq!(commit.body, "");
    }
}
