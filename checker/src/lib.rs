//! # Checker Library
//!
//! Decides whether a program's captured output matches a problem's expected
//! solution under the comparison mode the problem is configured with.
//!
//! ## Key Concepts
//! - **Checkers**: a closed set of comparison modes ([`types::Checker`]), each
//!   bound in the [`registry`] to a [`traits::runner::CheckerRunner`].
//! - **Resolution**: [`resolve`] turns the checker name from problem metadata
//!   into a registry entry. It never fails; unknown names fall back to exact
//!   comparison.
//! - **CheckingJob**: compares a batch of captured outputs and produces a
//!   [`report::CheckReport`].
//!
//! Running the student's program is not part of this crate; it only consumes
//! the text that program produced.

pub mod comparators;
pub mod error;
pub mod registry;
pub mod report;
pub mod traits;
pub mod types;
pub mod utilities;

use std::path::Path;
use std::sync::Arc;

use futures::future::join_all;
use util::problem_handler::{ComparisonConfig, ProblemHandler};
use util::testcases::{CapturedOutput, load_testcases, read_output, require_dir};

use crate::error::CheckerError;
use crate::registry::{CheckerInfo, checker_info, checker_info_by_name};
use crate::report::{CheckReport, TestcaseReport};
use crate::types::{Checker, Verdict};

/// Resolves a checker name from problem metadata to its registry entry.
///
/// `None` selects `std`; an unrecognised name selects `unk`.
pub fn resolve(checker_name: Option<&str>) -> &'static CheckerInfo {
    checker_info_by_name(checker_name)
}

/// Compares one captured output against one expected solution.
pub fn compare(
    info: &CheckerInfo,
    actual: &str,
    expected: &str,
    config: &ComparisonConfig,
) -> Verdict {
    info.run(actual, expected, config)
}

#[derive(Debug, Clone)]
struct PendingComparison {
    name: String,
    expected: String,
    actual: CapturedOutput,
}

/// A batch of captured outputs to check against their expected solutions.
///
/// The checker and delimiters are resolved once from the problem handler.
/// Comparisons run as independent blocking tasks; the report lists them in the
/// order they were added.
#[derive(Debug)]
pub struct CheckingJob {
    info: &'static CheckerInfo,
    config: ComparisonConfig,
    outputs: Vec<PendingComparison>,
}

impl CheckingJob {
    pub fn new(handler: Option<&ProblemHandler>) -> Self {
        let info = resolve(handler.and_then(|h| h.checker.as_deref()));
        let config = handler
            .map(ProblemHandler::comparison_config)
            .unwrap_or_default();
        tracing::debug!(checker = %info.checker, "resolved checker for job");
        Self {
            info,
            config,
            outputs: Vec::new(),
        }
    }

    /// Builds a job from a testcase directory (`<name>.inp` / `<name>.cor`)
    /// and a directory of captured `<name>.out` files. Testcases whose output
    /// is missing or not UTF-8 are kept and will fail; a missing outputs
    /// directory is an error.
    pub fn from_directories<P, Q>(
        handler: Option<&ProblemHandler>,
        testcases_dir: P,
        outputs_dir: Q,
    ) -> Result<Self, CheckerError>
    where
        P: AsRef<Path>,
        Q: AsRef<Path>,
    {
        let testcases = load_testcases(testcases_dir)?;
        let outputs_dir = outputs_dir.as_ref();
        require_dir(outputs_dir)?;

        let mut job = Self::new(handler);
        for testcase in testcases {
            let actual = read_output(outputs_dir, &testcase.name)?;
            if actual == CapturedOutput::Missing {
                tracing::warn!(testcase = %testcase.name, "no captured output");
            }
            job.push_captured(testcase.name, testcase.expected, actual);
        }
        Ok(job)
    }

    /// Overrides the checker resolved from the handler.
    pub fn with_checker(mut self, checker: Checker) -> Self {
        self.info = checker_info(checker);
        self
    }

    /// Overrides the delimiters taken from the handler.
    pub fn with_config(mut self, config: ComparisonConfig) -> Self {
        self.config = config;
        self
    }

    pub fn push(
        &mut self,
        name: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) {
        self.push_captured(name, expected, CapturedOutput::Text(actual.into()));
    }

    /// Adds a testcase whose program produced no output at all.
    pub fn push_missing(&mut self, name: impl Into<String>, expected: impl Into<String>) {
        self.push_captured(name, expected, CapturedOutput::Missing);
    }

    /// Adds a testcase in whatever state the runner left it. Anything but
    /// [`CapturedOutput::Text`] is judged `FAILED`.
    pub fn push_captured(
        &mut self,
        name: impl Into<String>,
        expected: impl Into<String>,
        actual: CapturedOutput,
    ) {
        self.outputs.push(PendingComparison {
            name: name.into(),
            expected: expected.into(),
            actual,
        });
    }

    pub fn checker(&self) -> &'static CheckerInfo {
        self.info
    }

    pub fn config(&self) -> &ComparisonConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.outputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outputs.is_empty()
    }

    /// Runs every comparison and collects the verdicts.
    ///
    /// # Errors
    /// [`CheckerError::TaskFailed`] if a comparison task could not complete.
    pub async fn run(self) -> Result<CheckReport, CheckerError> {
        let info = self.info;
        if !info.implemented {
            tracing::warn!(
                checker = %info.checker,
                "checker is not implemented locally, comparing outputs exactly"
            );
        }

        let config = Arc::new(self.config);
        let tasks = self.outputs.into_iter().map(|pending| {
            let config = Arc::clone(&config);
            tokio::task::spawn_blocking(move || {
                let verdict = match pending.actual.as_text() {
                    Some(actual) => info.run(actual, &pending.expected, &config),
                    None => Verdict::Failed,
                };
                tracing::debug!(testcase = %pending.name, %verdict, "compared output");
                TestcaseReport {
                    name: pending.name,
                    verdict,
                }
            })
        });

        let testcases = join_all(tasks)
            .await
            .into_iter()
            .collect::<Result<Vec<_>, _>>()?;

        let report = CheckReport::new(info, testcases);
        tracing::info!(
            checker = %report.checker,
            passed = report.passed,
            total = report.total,
            "checking complete"
        );
        Ok(report)
    }
}
