//! Branch-and-bound search with root-restart.
//!
//! Depth-first search over a ratio-ordered item list that prunes both
//! infeasible branches and branches whose optimistic bound cannot beat
//! the incumbent. An outer driver forces each item in turn to be the
//! root decision and re-runs the subtree search while it keeps raising
//! the incumbent, so nodes near the root are pruned against the
//! tightest best value available.

mod config;
mod runner;
mod search;

pub use config::BranchBoundConfig;
pub use runner::{BranchBoundResult, BranchBoundRunner};
