//! Traits Module
//!
//! - [`runner`]: the comparison strategy every checker implements.

pub mod runner;
