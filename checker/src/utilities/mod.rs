//! Helpers shared by the record-based comparators.

pub mod records;
