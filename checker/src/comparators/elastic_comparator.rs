//! A comparator where **record order does not matter**.
//!
//! Both texts are split on the configured `separator` into records. The output
//! passes when it holds the same multiset of records as the solution.

use util::problem_handler::ComparisonConfig;

use crate::traits::runner::CheckerRunner;
use crate::types::Verdict;
use crate::utilities::records::{delimiter, split_records};

/// Line-set comparison.
///
/// 1. Identical texts pass straight away, even without a separator.
/// 2. No separator configured: fail.
/// 3. Split both texts and drop the final piece of each (see [`split_records`]).
/// 4. Different record counts fail.
/// 5. Sort both record lists, rejoin with the separator and compare.
#[derive(Debug, Clone, Copy, Default)]
pub struct ElasticComparator;

impl CheckerRunner for ElasticComparator {
    fn run(&self, output: &str, solution: &str, config: &ComparisonConfig) -> Verdict {
        if output == solution {
            return Verdict::Passed;
        }

        let Some(separator) = delimiter(&config.separator) else {
            tracing::debug!("elastic checker has no separator configured");
            return Verdict::Failed;
        };

        let mut output_records = split_records(output, separator);
        let mut solution_records = split_records(solution, separator);

        if output_records.len() != solution_records.len() {
            return Verdict::Failed;
        }

        output_records.sort_unstable();
        solution_records.sort_unstable();

        Verdict::from_bool(output_records.join(separator) == solution_records.join(separator))
    }
}
