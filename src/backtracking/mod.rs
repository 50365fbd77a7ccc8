//! Exhaustive backtracking search.
//!
//! Depth-first enumeration of every packing, pruning only branches that
//! would exceed capacity. Visits up to 2^n complete packings; exact for
//! every non-negative instance, independent of item order.

mod runner;

pub use runner::{BacktrackingResult, BacktrackingRunner};
