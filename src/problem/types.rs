//! Item and instance types.

use crate::error::Error;

/// A single knapsack item.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    /// Profit gained by packing this item.
    pub value: f64,

    /// Capacity consumed by packing this item.
    pub weight: f64,
}

impl Item {
    pub fn new(value: f64, weight: f64) -> Self {
        Self { value, weight }
    }

    /// Value density used for branch ordering and bound extrapolation.
    pub fn ratio(&self) -> f64 {
        self.value / self.weight
    }

    /// Whether this item is excluded from the search space
    /// (zero value or zero weight).
    pub fn is_degenerate(&self) -> bool {
        self.value == 0.0 || self.weight == 0.0
    }
}

/// An immutable 0/1 knapsack instance.
///
/// Construction drops degenerate items with a warning and rejects
/// negative entries; after that, every item has strictly positive value
/// and weight, so value/weight ratios are always finite.
///
/// # Examples
///
/// ```
/// use u_knapsack::problem::{Item, KnapsackProblem};
///
/// let problem = KnapsackProblem::new(
///     vec![Item::new(60.0, 10.0), Item::new(100.0, 20.0)],
///     50.0,
/// ).unwrap();
///
/// assert_eq!(problem.len(), 2);
/// assert_eq!(problem.capacity(), 50.0);
/// ```
#[derive(Debug, Clone)]
pub struct KnapsackProblem {
    items: Vec<Item>,
    capacity: f64,
}

impl KnapsackProblem {
    /// Builds an instance, dropping degenerate items.
    ///
    /// Returns an error when the capacity or any item entry is negative.
    pub fn new(items: Vec<Item>, capacity: f64) -> Result<Self, Error> {
        if capacity < 0.0 {
            return Err(Error::NegativeCapacity(capacity));
        }
        for (index, item) in items.iter().enumerate() {
            if item.value < 0.0 {
                return Err(Error::InvalidItem {
                    index,
                    field: "value",
                    amount: item.value,
                });
            }
            if item.weight < 0.0 {
                return Err(Error::InvalidItem {
                    index,
                    field: "weight",
                    amount: item.weight,
                });
            }
        }

        let before = items.len();
        let items: Vec<Item> = items.into_iter().filter(|it| !it.is_degenerate()).collect();
        let dropped = before - items.len();
        if dropped > 0 {
            log::warn!("dropped {dropped} item(s) with zero value or weight");
        }

        Ok(Self { items, capacity })
    }

    /// The packable items, in input order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Number of packable items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether no packable items remain.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The capacity limit.
    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    /// Sum of all item values. No solve result can exceed this.
    pub fn total_value(&self) -> f64 {
        self.items.iter().map(|it| it.value).sum()
    }

    /// Item indices ordered by descending value/weight ratio.
    ///
    /// Ties keep the original index order (stable sort).
    pub fn ratio_order(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.items.len()).collect();
        order.sort_by(|&a, &b| self.items[b].ratio().total_cmp(&self.items[a].ratio()));
        order
    }
}
