//! Page-indexed probability mass

use std::collections::{BTreeMap, btree_map};

use serde::{Deserialize, Serialize};

use crate::identifiers::PageId;

/// Non-negative weights over every page of a corpus, summing to 1.
///
/// Used both for the one-step transition distribution and for the final
/// rank tables. Iteration is always in page id order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageDistribution(BTreeMap<PageId, f64>);

/// One-step distribution over the next page.
pub type ProbabilityDistribution = PageDistribution;

/// Estimated stationary importance per page.
pub type RankTable = PageDistribution;

impl PageDistribution {
    /// Mass assigned to `page`, if the page is present.
    pub fn get(&self, page: &str) -> Option<f64> {
        self.0.get(page).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, PageId, f64> {
        self.0.iter()
    }

    /// Sum of all values.
    pub fn total(&self) -> f64 {
        self.0.values().sum()
    }

    /// Largest absolute per-page difference against `other`.
    ///
    /// Pages missing from either side count as zero.
    pub fn max_abs_diff(&self, other: &PageDistribution) -> f64 {
        self.0
            .iter()
            .map(|(page, value)| (value - other.get(page.as_str()).unwrap_or(0.0)).abs())
            .chain(
                other
                    .0
                    .iter()
                    .filter(|(page, _)| !self.0.contains_key(*page))
                    .map(|(_, value)| value.abs()),
            )
            .fold(0.0, f64::max)
    }

    /// Page with the highest mass; ties resolve to the smallest id.
    pub fn top(&self) -> Option<(&PageId, f64)> {
        self.0
            .iter()
            .fold(None, |best: Option<(&PageId, f64)>, (page, &value)| match best {
                Some((_, best_value)) if best_value >= value => best,
                _ => Some((page, value)),
            })
    }
}

impl FromIterator<(PageId, f64)> for PageDistribution {
    fn from_iter<I: IntoIterator<Item = (PageId, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a PageDistribution {
    type Item = (&'a PageId, &'a f64);
    type IntoIter = btree_map::Iter<'a, PageId, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
