//! # Comparators
//!
//! The comparison strategies behind the registered checkers. Each one
//! implements [`crate::traits::runner::CheckerRunner`] and is bound to one or
//! more checker identifiers in [`crate::registry`].
//!
//! - [`exact_comparator`]: byte-for-byte equality (`std`, and the fallback for
//!   `loose` and unknown names).
//! - [`elastic_comparator`]: equality up to reordering of records (`elastic`).
//! - [`elastic2_comparator`]: record reordering plus token reordering inside
//!   wrapper markers (`elastic2`).

pub mod elastic2_comparator;
pub mod elastic_comparator;
pub mod exact_comparator;
