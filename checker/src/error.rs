//! Checker Error Types
//!
//! Comparisons themselves never fail: a missing delimiter or an unknown checker
//! name becomes a `FAILED` verdict or the fallback checker. [`CheckerError`] only
//! covers the plumbing around them, such as loading testcases or joining the
//! worker tasks of a [`crate::CheckingJob`].

use util::error::UtilError;

#[derive(Debug, thiserror::Error)]
pub enum CheckerError {
    /// A name that is not one of the registered checker identifiers.
    #[error("Unknown checker: {0}")]
    UnknownChecker(String),

    /// Reading problem metadata or testcases failed.
    #[error(transparent)]
    Problem(#[from] UtilError),

    /// A comparison task panicked or was cancelled.
    #[error("Checking task failed: {0}")]
    TaskFailed(#[from] tokio::task::JoinError),
}
