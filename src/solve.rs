//! Algorithm selection and the solve entry point.

use crate::backtracking::BacktrackingRunner;
use crate::branch_bound::{BranchBoundConfig, BranchBoundRunner};
use crate::error::Error;
use crate::problem::KnapsackProblem;
use std::str::FromStr;

/// The exact algorithms this crate ships.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    /// Exhaustive search with feasibility pruning only.
    Backtracking,

    /// Bound-pruned search with the root-restart strategy.
    BranchAndBound,
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self, Error> {
        match name {
            "backtracking" => Ok(Algorithm::Backtracking),
            "branchAndBound" | "branch-and-bound" => Ok(Algorithm::BranchAndBound),
            other => Err(Error::UnknownAlgorithm(other.to_string())),
        }
    }
}

/// Solves the instance with the given algorithm, returning the optimal
/// total value.
pub fn solve(problem: &KnapsackProblem, algorithm: Algorithm) -> f64 {
    match algorithm {
        Algorithm::Backtracking => BacktrackingRunner::run(problem).best_value,
        Algorithm::BranchAndBound => {
            BranchBoundRunner::run_with_config(problem, &BranchBoundConfig::default()).best_value
        }
    }
}

/// Solves the instance with an algorithm selected by name.
///
/// Accepted names are `"backtracking"` and `"branchAndBound"` (alias
/// `"branch-and-bound"`). Any other name fails with
/// [`Error::UnknownAlgorithm`] before any search state is created.
pub fn solve_by_name(problem: &KnapsackProblem, name: &str) -> Result<f64, Error> {
    let algorithm = name.parse::<Algorithm>()?;
    Ok(solve(problem, algorithm))
}
