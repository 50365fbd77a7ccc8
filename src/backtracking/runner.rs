//! Backtracking execution loop.

use crate::problem::{KnapsackProblem, SearchContext};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Result of a backtracking run.
#[derive(Debug, Clone)]
pub struct BacktrackingResult {
    /// The optimal total value (best proven so far, if cancelled early).
    pub best_value: f64,

    /// Number of search frames expanded.
    pub nodes_expanded: usize,

    /// Number of complete packings reached.
    pub leaves_reached: usize,

    /// Number of include branches cut for exceeding capacity.
    pub infeasible_pruned: usize,

    /// Whether cancelled externally.
    pub cancelled: bool,
}

/// A decision point: items before `pos` are decided, the rest are open.
struct Frame {
    pos: usize,
    cum_value: f64,
    cum_weight: f64,
}

/// Executes the backtracking algorithm.
pub struct BacktrackingRunner;

impl BacktrackingRunner {
    /// Solves the instance exactly.
    pub fn run(problem: &KnapsackProblem) -> BacktrackingResult {
        Self::run_with_cancel(problem, None)
    }

    /// Solves with an optional cancellation token, checked between frames.
    pub fn run_with_cancel(
        problem: &KnapsackProblem,
        cancel: Option<Arc<AtomicBool>>,
    ) -> BacktrackingResult {
        let items = problem.items();
        let capacity = problem.capacity();

        let mut ctx = SearchContext::new();
        let mut nodes_expanded = 0usize;
        let mut leaves_reached = 0usize;
        let mut infeasible_pruned = 0usize;
        let mut cancelled = false;

        // The frame stack replaces native recursion, so search depth
        // never grows the call stack.
        let mut stack = vec![Frame {
            pos: 0,
            cum_value: 0.0,
            cum_weight: 0.0,
        }];

        while let Some(frame) = stack.pop() {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }

            nodes_expanded += 1;
            ctx.offer(frame.cum_value);

            if frame.pos == items.len() {
                leaves_reached += 1;
                continue;
            }

            let item = &items[frame.pos];

            // Exclude branch, always open. Pushed first so the include
            // branch is explored first.
            stack.push(Frame {
                pos: frame.pos + 1,
                cum_value: frame.cum_value,
                cum_weight: frame.cum_weight,
            });

            let inc_weight = frame.cum_weight + item.weight;
            if inc_weight <= capacity {
                stack.push(Frame {
                    pos: frame.pos + 1,
                    cum_value: frame.cum_value + item.value,
                    cum_weight: inc_weight,
                });
            } else {
                infeasible_pruned += 1;
            }
        }

        log::debug!(
            "backtracking: best {} after {} nodes ({} leaves, {} infeasible cuts)",
            ctx.best_value(),
            nodes_expanded,
            leaves_reached,
            infeasible_pruned
        );

        BacktrackingResult {
            best_value: ctx.best_value(),
            nodes_expanded,
            leaves_reached,
            infeasible_pruned,
            cancelled,
        }
    }
}
