//! Bound-gated subtree search.

use crate::bound::BoundEstimator;
use crate::problem::{Item, SearchContext};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Counters accumulated across subtree searches.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct SearchStats {
    pub nodes_expanded: usize,
    pub bound_pruned: usize,
    pub infeasible_pruned: usize,
}

/// A decision point inside one subtree search.
struct Frame {
    pos: usize,
    cum_value: f64,
    cum_weight: f64,
}

/// Searches the subtree rooted at a forced first decision.
///
/// `order` lists the still-open item indices, best ratio first; the seed
/// value/weight account for the forced root item, which must fit within
/// capacity. Realized values are offered to the context as frames are
/// expanded, raising the improvement flag on every new best.
///
/// A frame's bound is checked when it is taken off the stack, not when
/// it is pushed: a sibling branch is thereby pruned against any best
/// value found in the subtrees explored before it.
///
/// Returns false when the cancellation token fired mid-search.
pub(crate) fn search_subtree(
    items: &[Item],
    capacity: f64,
    order: &[usize],
    seed_value: f64,
    seed_weight: f64,
    bound: &BoundEstimator<'_>,
    ctx: &mut SearchContext,
    stats: &mut SearchStats,
    cancel: Option<&Arc<AtomicBool>>,
) -> bool {
    let mut stack = vec![Frame {
        pos: 0,
        cum_value: seed_value,
        cum_weight: seed_weight,
    }];

    while let Some(frame) = stack.pop() {
        if let Some(flag) = cancel {
            if flag.load(Ordering::Relaxed) {
                return false;
            }
        }

        // The defining branch-and-bound prune: a branch whose optimistic
        // bound cannot beat the incumbent is never entered.
        let estimate = bound.estimate(&order[frame.pos..], frame.cum_value, frame.cum_weight);
        if estimate <= ctx.best_value() {
            stats.bound_pruned += 1;
            continue;
        }

        stats.nodes_expanded += 1;
        ctx.offer(frame.cum_value);

        if frame.pos == order.len() {
            continue;
        }

        let item = &items[order[frame.pos]];

        // Exclude branch, pushed first so include is explored first.
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
            stats.infeasible_pruned += 1;
        }
    }

    true
}
