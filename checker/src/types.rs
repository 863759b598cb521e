//! # Types Module
//!
//! Core value types shared by the comparators, the registry and the reports.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CheckerError;

/// Outcome of comparing one captured output against one expected solution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Verdict {
    Passed,
    Failed,
}

impl Verdict {
    pub fn from_bool(passed: bool) -> Self {
        if passed { Verdict::Passed } else { Verdict::Failed }
    }

    pub fn is_passed(self) -> bool {
        self == Verdict::Passed
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Passed => f.write_str("PASSED"),
            Verdict::Failed => f.write_str("FAILED"),
        }
    }
}

/// Closed set of comparison modes known to the judge.
///
/// `Unk` is not a real judge checker: it stands for any name the registry does
/// not recognise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Checker {
    Std,
    Loose,
    Elastic,
    Elastic2,
    Unk,
}

impl Checker {
    /// Declaration order, also the registry scan order.
    pub const ALL: [Checker; 5] = [
        Checker::Std,
        Checker::Loose,
        Checker::Elastic,
        Checker::Elastic2,
        Checker::Unk,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Checker::Std => "std",
            Checker::Loose => "loose",
            Checker::Elastic => "elastic",
            Checker::Elastic2 => "elastic2",
            Checker::Unk => "unk",
        }
    }
}

impl fmt::Display for Checker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Checker {
    type Err = CheckerError;

    /// Case-sensitive, like the judge's own identifiers.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Checker::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| CheckerError::UnknownChecker(s.to_string()))
    }
}

/// Execution strategy a checker is meant to be driven by. Only the standard
/// in-process driver exists today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Driver {
    Std,
}

impl Driver {
    pub fn as_str(self) -> &'static str {
        match self {
            Driver::Std => "std",
        }
    }
}

impl fmt::Display for Driver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}
