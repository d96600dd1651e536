//! Domain layer for Commit Guardian
//!
//! Pure business logic for commit message linting: the commit value type,
//! lint findings, and the error surface. Independent of how the host tool
//! loads commits or renders results.

pub mod commit;
pub mod violations;

// Re-export main domain types for convenience
pub use commit::CommitMessage;
pub use violations::*;
