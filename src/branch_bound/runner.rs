//! Root-restart driver.

use super::config::BranchBoundConfig;
use super::search::{search_subtree, SearchStats};
use crate::bound::BoundEstimator;
use crate::problem::{KnapsackProblem, SearchContext};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

/// Result of a branch-and-bound run.
#[derive(Debug, Clone)]
pub struct BranchBoundResult {
    /// The optimal total value (best proven so far, if cancelled early).
    pub best_value: f64,

    /// Number of search frames expanded across all subtree searches.
    pub nodes_expanded: usize,

    /// Number of branches cut by the bound-vs-incumbent comparison.
    pub bound_pruned: usize,

    /// Number of include branches cut for exceeding capacity.
    pub infeasible_pruned: usize,

    /// Number of forced roots searched. Roots that do not fit on their
    /// own are skipped and not counted.
    pub roots_tried: usize,

    /// Number of subtree re-searches triggered by an improved incumbent.
    pub restarts: usize,

    /// Whether cancelled externally.
    pub cancelled: bool,
}

/// Executes branch-and-bound with the root-restart strategy.
///
/// Items are ordered by descending value/weight ratio. Each item in
/// turn is forced to be the root decision (always packed) and the rest
/// of the list is searched with bound pruning; the subtree search
/// repeats as long as it keeps raising the incumbent, so the re-search
/// prunes near the root against the improved best value. The forced
/// item is restored to its position before the next one is tried.
pub struct BranchBoundRunner;

impl BranchBoundRunner {
    /// Solves the instance exactly with the default configuration.
    pub fn run(problem: &KnapsackProblem) -> BranchBoundResult {
        Self::run_with_config(problem, &BranchBoundConfig::default())
    }

    /// Solves with an explicit configuration.
    pub fn run_with_config(
        problem: &KnapsackProblem,
        config: &BranchBoundConfig,
    ) -> BranchBoundResult {
        Self::run_with_cancel(problem, config, None)
    }

    /// Solves with an optional cancellation token, checked between frames.
    pub fn run_with_cancel(
        problem: &KnapsackProblem,
        config: &BranchBoundConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> BranchBoundResult {
        let items = problem.items();
        let capacity = problem.capacity();
        let bound = BoundEstimator::new(items, capacity, config.bound_mode);

        let mut ctx = SearchContext::new();
        let mut stats = SearchStats::default();
        let mut roots_tried = 0usize;
        let mut restarts = 0usize;
        let mut cancelled = false;

        let mut working = problem.ratio_order();

        for pos in 0..working.len() {
            let root = working.remove(pos);
            let item = &items[root];

            // A root that does not fit on its own belongs to no feasible
            // packing; forcing it in would admit over-capacity values.
            if item.weight <= capacity {
                roots_tried += 1;
                let mut passes = 0usize;
                loop {
                    ctx.clear_improved();
                    let completed = search_subtree(
                        items,
                        capacity,
                        &working,
                        item.value,
                        item.weight,
                        &bound,
                        &mut ctx,
                        &mut stats,
                        cancel.as_ref(),
                    );
                    passes += 1;
                    if !completed {
                        cancelled = true;
                        break;
                    }
                    if !ctx.improved() {
                        break;
                    }
                }
                restarts += passes - 1;
            }

            working.insert(pos, root);
            if cancelled {
                break;
            }
        }

        log::debug!(
            "branch-and-bound: best {} after {} nodes ({} bound cuts, {} infeasible cuts, {} roots, {} restarts)",
            ctx.best_value(),
            stats.nodes_expanded,
            stats.bound_pruned,
            stats.infeasible_pruned,
            roots_tried,
            restarts
        );

        BranchBoundResult {
            best_value: ctx.best_value(),
            nodes_expanded: stats.nodes_expanded,
            bound_pruned: stats.bound_pruned,
            infeasible_pruned: stats.infeasible_pruned,
            roots_tried,
            restarts,
            cancelled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bound::BoundMode;
    use crate::problem::Item;

    fn problem(items: Vec<Item>, capacity: f64) -> KnapsackProblem {
        KnapsackProblem::new(items, capacity).unwrap()
    }

    #[test]
    fn test_three_item_instance() {
        let problem = problem(
            vec![
                Item::new(60.0, 10.0),
                Item::new(100.0, 20.0),
                Item::new(120.0, 30.0),
            ],
            50.0,
        );

        let result = BranchBoundRunner::run(&problem);

        assert_eq!(result.best_value, 220.0);
        assert_eq!(result.roots_tried, 3);
        assert!(result.bound_pruned > 0);
        assert!(!result.cancelled);
    }

    #[test]
    fn test_restarts_after_improvement() {
        let problem = problem(
            vec![
                Item::new(60.0, 10.0),
                Item::new(100.0, 20.0),
                Item::new(120.0, 30.0),
            ],
            50.0,
        );

        let result = BranchBoundRunner::run(&problem);

        // Roots 1 and 2 each improve the incumbent once and re-search.
        assert_eq!(result.restarts, 2);
    }

    #[test]
    fn test_single_infeasible_item() {
        let problem = problem(vec![Item::new(10.0, 5.0)], 4.0);

        let result = BranchBoundRunner::run(&problem);

        assert_eq!(result.best_value, 0.0);
        assert_eq!(result.roots_tried, 0);
    }

    #[test]
    fn test_unit_items() {
        let problem = problem(
            vec![Item::new(1.0, 1.0), Item::new(1.0, 1.0), Item::new(1.0, 1.0)],
            2.0,
        );

        let result = BranchBoundRunner::run(&problem);

        assert_eq!(result.best_value, 2.0);
    }

    #[test]
    fn test_everything_fits() {
        let problem = problem(vec![Item::new(1.0, 1.0), Item::new(2.0, 1.0)], 10.0);

        let result = BranchBoundRunner::run(&problem);

        assert_eq!(result.best_value, problem.total_value());
    }

    #[test]
    fn test_empty_problem() {
        let problem = problem(vec![], 10.0);

        let result = BranchBoundRunner::run(&problem);

        assert_eq!(result.best_value, 0.0);
        assert_eq!(result.roots_tried, 0);
        assert_eq!(result.nodes_expanded, 0);
    }

    #[test]
    fn test_fractional_bound_same_result() {
        let problem = problem(
            vec![
                Item::new(60.0, 10.0),
                Item::new(100.0, 20.0),
                Item::new(120.0, 30.0),
            ],
            50.0,
        );

        let config = BranchBoundConfig::default().with_bound_mode(BoundMode::Fractional);
        let result = BranchBoundRunner::run_with_config(&problem, &config);

        assert_eq!(result.best_value, 220.0);
    }

    #[test]
    fn test_mixed_infeasible_roots() {
        // The heavy item fits in no packing; its value must not leak
        // into the result through the forced-root seeding.
        let problem = problem(vec![Item::new(10.0, 5.0), Item::new(1.0, 1.0)], 4.0);

        let result = BranchBoundRunner::run(&problem);

        assert_eq!(result.best_value, 1.0);
        assert_eq!(result.roots_tried, 1);
    }

    #[test]
    fn test_cancellation() {
        let problem = problem(vec![Item::new(5.0, 1.0), Item::new(3.0, 2.0)], 10.0);

        // Set the flag before running so cancellation is deterministic.
        let cancel = Arc::new(AtomicBool::new(true));

        let result =
            BranchBoundRunner::run_with_cancel(&problem, &BranchBoundConfig::default(), Some(cancel));

        assert!(result.cancelled);
        assert_eq!(result.best_value, 0.0);
    }
}
