//! A comparator where **record order does not matter**, and neither does token
//! order inside a wrapped region of each record.
//!
//! Records come from splitting on `separator1`. A record of the form
//! `starting` + tokens joined by `separator2` + `ending` has its tokens sorted
//! before comparing, so `{c,a,b}` and `{a,b,c}` are the same record.

use util::problem_handler::ComparisonConfig;

use crate::traits::runner::CheckerRunner;
use crate::types::Verdict;
use crate::utilities::records::{delimiter, split_records};

/// Bounded token-set comparison.
///
/// Needs all four of `separator1`, `separator2`, `starting` and `ending`;
/// any missing one fails the comparison unless the texts are identical.
/// A record that is not wrapped in `starting`/`ending` normalises to the empty
/// string, so it can only match another unwrapped record.
#[derive(Debug, Clone, Copy, Default)]
pub struct Elastic2Comparator;

struct Wrapping<'a> {
    tokens: &'a str,
    starting: &'a str,
    ending: &'a str,
}

impl Wrapping<'_> {
    fn normalize(&self, record: &str) -> String {
        let Some(interior) = record
            .strip_prefix(self.starting)
            .and_then(|rest| rest.strip_suffix(self.ending))
        else {
            return String::new();
        };

        let mut tokens: Vec<&str> = interior.split(self.tokens).collect();
        tokens.sort_unstable();
        format!("{}{}{}", self.starting, tokens.join(self.tokens), self.ending)
    }
}

impl CheckerRunner for Elastic2Comparator {
    fn run(&self, output: &str, solution: &str, config: &ComparisonConfig) -> Verdict {
        if output == solution {
            return Verdict::Passed;
        }

        let (Some(records), Some(tokens), Some(starting), Some(ending)) = (
            delimiter(&config.separator1),
            delimiter(&config.separator2),
            delimiter(&config.starting),
            delimiter(&config.ending),
        ) else {
            tracing::debug!("elastic2 checker is missing one of its delimiters");
            return Verdict::Failed;
        };

        let output_records = split_records(output, records);
        let solution_records = split_records(solution, records);

        if output_records.len() != solution_records.len() {
            return Verdict::Failed;
        }

        let wrapping = Wrapping {
            tokens,
            starting,
            ending,
        };
        let normalize_all = |list: Vec<&str>| {
            let mut normalized: Vec<String> =
                list.into_iter().map(|r| wrapping.normalize(r)).collect();
            normalized.sort_unstable();
            normalized.join(records)
        };

        Verdict::from_bool(normalize_all(output_records) == normalize_all(solution_records))
    }
}
