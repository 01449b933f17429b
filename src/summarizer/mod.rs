//! Summary selection.
//!
//! Turns finalized sentence scores into the selected summary under a
//! word-count budget.

pub mod selector;

pub use selector::{SummarySelector, UNREACHABLE_THRESHOLD};
