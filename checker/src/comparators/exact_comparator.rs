//! A comparator that passes only when the output is identical to the solution,
//! including whitespace and line terminators.

use util::problem_handler::ComparisonConfig;

use crate::traits::runner::CheckerRunner;
use crate::types::Verdict;

/// Byte-for-byte comparison. Ignores the configuration entirely.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactComparator;

impl CheckerRunner for ExactComparator {
    fn run(&self, output: &str, solution: &str, _config: &ComparisonConfig) -> Verdict {
        Verdict::from_bool(output == solution)
    }
}
