//! # Checker Registry
//!
//! The fixed catalogue binding every [`Checker`] identifier to its comparison
//! strategy and metadata. The table is built once on first use and never
//! mutated, so it can be read from any thread without locking.
//!
//! Every lookup here is total. An unknown identifier resolves to the `unk`
//! entry, whose runner is exact comparison, so callers never handle a
//! resolution error; a misconfigured problem shows up as a `FAILED` verdict.

use once_cell::sync::Lazy;
use util::problem_handler::ComparisonConfig;

use crate::comparators::elastic_comparator::ElasticComparator;
use crate::comparators::elastic2_comparator::Elastic2Comparator;
use crate::comparators::exact_comparator::ExactComparator;
use crate::traits::runner::CheckerRunner;
use crate::types::{Checker, Driver, Verdict};

/// One registry entry.
#[derive(Debug, Clone, Copy)]
pub struct CheckerInfo {
    pub checker: Checker,
    pub runner: &'static dyn CheckerRunner,
    /// False when the mode has no behaviour of its own and falls back to
    /// exact comparison.
    pub implemented: bool,
    pub driver: Driver,
}

impl CheckerInfo {
    pub fn run(&self, output: &str, solution: &str, config: &ComparisonConfig) -> Verdict {
        self.runner.run(output, solution, config)
    }
}

/// Entries are identified by their checker; there is exactly one per identifier.
impl PartialEq for CheckerInfo {
    fn eq(&self, other: &Self) -> bool {
        self.checker == other.checker
    }
}

impl Eq for CheckerInfo {}

static REGISTRY: Lazy<Vec<CheckerInfo>> = Lazy::new(|| {
    vec![
        CheckerInfo {
            checker: Checker::Std,
            runner: &ExactComparator,
            implemented: true,
            driver: Driver::Std,
        },
        CheckerInfo {
            checker: Checker::Loose,
            runner: &ExactComparator,
            implemented: false,
            driver: Driver::Std,
        },
        CheckerInfo {
            checker: Checker::Elastic,
            runner: &ElasticComparator,
            implemented: true,
            driver: Driver::Std,
        },
        CheckerInfo {
            checker: Checker::Elastic2,
            runner: &Elastic2Comparator,
            implemented: true,
            driver: Driver::Std,
        },
        CheckerInfo {
            checker: Checker::Unk,
            runner: &ExactComparator,
            implemented: false,
            driver: Driver::Std,
        },
    ]
});

/// All entries in declaration order.
pub fn registry() -> &'static [CheckerInfo] {
    &REGISTRY
}

// `unk` is always registered; it is the last entry.
fn unknown() -> &'static CheckerInfo {
    &REGISTRY[REGISTRY.len() - 1]
}

/// Entry for `checker`, or the `unk` entry if it has none.
pub fn checker_info(checker: Checker) -> &'static CheckerInfo {
    REGISTRY
        .iter()
        .find(|info| info.checker == checker)
        .unwrap_or_else(unknown)
}

/// Entry for a raw identifier string; anything unrecognised maps to `unk`.
pub fn checker_info_by_id(id: &str) -> &'static CheckerInfo {
    match id.parse::<Checker>() {
        Ok(checker) => checker_info(checker),
        Err(_) => {
            tracing::debug!(checker = id, "unrecognised checker, using fallback");
            unknown()
        }
    }
}

/// Resolves the checker named in problem metadata.
///
/// No name (or an empty one) means no checker was configured and selects
/// `std`. A name that is present but not understood selects `unk`.
pub fn checker_info_by_name(name: Option<&str>) -> &'static CheckerInfo {
    match name {
        None | Some("") => checker_info(Checker::Std),
        Some(name) => checker_info_by_id(name),
    }
}

/// First checker, in declaration order, whose entry satisfies `predicate`;
/// `std` when none does.
pub fn checker_find_if<F>(predicate: F) -> Checker
where
    F: Fn(&CheckerInfo) -> bool,
{
    REGISTRY
        .iter()
        .find(|&info| predicate(info))
        .map(|info| info.checker)
        .unwrap_or(Checker::Std)
}
