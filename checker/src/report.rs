//! # Check Report Module
//!
//! Serializable summary of a [`crate::CheckingJob`] run. Testcases appear in
//! the order they were added to the job.
//!
//! ```json
//! {
//!   "checker": "elastic",
//!   "implemented": true,
//!   "total": 2,
//!   "passed": 1,
//!   "failed": 1,
//!   "testcases": [
//!     { "name": "sample-1", "verdict": "PASSED" },
//!     { "name": "sample-2", "verdict": "FAILED" }
//!   ]
//! }
//! ```

use serde::Serialize;

use crate::registry::CheckerInfo;
use crate::types::{Checker, Verdict};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestcaseReport {
    pub name: String,
    pub verdict: Verdict,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    /// Checker that produced the verdicts.
    pub checker: Checker,
    /// Whether that checker has its own semantics or fell back to exact comparison.
    pub implemented: bool,
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub testcases: Vec<TestcaseReport>,
}

impl CheckReport {
    pub fn new(info: &CheckerInfo, testcases: Vec<TestcaseReport>) -> Self {
        let passed = testcases.iter().filter(|t| t.verdict.is_passed()).count();
        Self {
            checker: info.checker,
            implemented: info.implemented,
            total: testcases.len(),
            passed,
            failed: testcases.len() - passed,
            testcases,
        }
    }

    /// True when at least one testcase ran and none failed.
    pub fn all_passed(&self) -> bool {
        self.total > 0 && self.failed == 0
    }

    /// `passed/total`, e.g. `3/4`.
    pub fn summary(&self) -> String {
        format!("{}/{}", self.passed, self.total)
    }
}
