use std::fmt;

use util::problem_handler::ComparisonConfig;

use crate::types::Verdict;

/// CheckerRunner is a strategy trait for deciding whether a program's output
/// matches the expected solution.
///
/// Implementations must be pure: same inputs, same verdict, no shared state.
/// A runner that needs a delimiter missing from `config` returns
/// [`Verdict::Failed`] rather than panicking.
pub trait CheckerRunner: fmt::Debug + Send + Sync {
    /// - `output`: text captured from the student's program.
    /// - `solution`: the reference output.
    /// - `config`: delimiters from the problem metadata.
    fn run(&self, output: &str, solution: &str, config: &ComparisonConfig) -> Verdict;
}
