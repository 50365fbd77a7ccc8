//! Exact solvers for the 0/1 knapsack problem.
//!
//! Given items with values and weights and a capacity limit, both
//! algorithms return the provably maximum total value packable without
//! exceeding the capacity:
//!
//! - **Backtracking**: exhaustive depth-first search that prunes only
//!   branches exceeding capacity.
//! - **Branch-and-bound**: depth-first search that additionally prunes
//!   branches whose optimistic upper bound cannot beat the best value
//!   found so far, driven by a root-restart loop that re-searches a
//!   subtree whenever it improved the incumbent.
//!
//! # Example
//!
//! ```
//! use u_knapsack::problem::{Item, KnapsackProblem};
//! use u_knapsack::solve::solve_by_name;
//!
//! let problem = KnapsackProblem::new(
//!     vec![
//!         Item::new(60.0, 10.0),
//!         Item::new(100.0, 20.0),
//!         Item::new(120.0, 30.0),
//!     ],
//!     50.0,
//! ).unwrap();
//!
//! let best = solve_by_name(&problem, "branchAndBound").unwrap();
//! assert_eq!(best, 220.0);
//! ```
//!
//! # Architecture
//!
//! `problem` holds the immutable instance and the per-solve search
//! context; `bound` computes optimistic upper bounds; `backtracking`
//! and `branch_bound` are the two search engines; `solve` dispatches by
//! algorithm name; `io` reads the plain-text instance format. Search
//! loops run on explicit frame stacks, so recursion depth never tracks
//! the item count and a run can be cancelled between frames.

pub mod backtracking;
pub mod bound;
pub mod branch_bound;
pub mod error;
pub mod io;
pub mod problem;
pub mod solve;

pub use error::Error;
