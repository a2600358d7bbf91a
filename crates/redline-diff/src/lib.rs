//! Line-level diff engine for contract comparison.
//!
//! Computes an ordered, tagged alignment between two versions of a contract
//! document: one entry per visited line, tagged unchanged, removed, or added.
//!
//! # Key Types
//!
//! - [`DiffLine`] -- Single annotated output line
//! - [`LineDiff`] -- Ordered sequence of [`DiffLine`] for a full comparison
//! - [`DiffError`] -- Validation failure at the comparison boundary

pub mod error;
pub mod line_diff;

pub use error::{DiffError, DiffResult};
pub use line_diff::{compare_contracts, diff_lines, DiffLine, LineDiff};
