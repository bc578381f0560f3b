//! Utility functions shared by the estimators

use rand::{Rng, distr::StandardUniform, prelude::IndexedRandom};

/// Draw one item from `(item, weight)` pairs with probability proportional
/// to its weight.
///
/// A threshold is drawn uniformly in `[0, total)` and the weights are
/// walked until it is crossed, so a single random number is consumed per
/// call. Weights need not be normalized. If every weight is zero the draw
/// falls back to a uniform choice.
///
/// Returns `None` only for an empty slice.
///
/// # Examples
///
/// ```
/// use rand::{SeedableRng, rngs::StdRng};
/// use rankmax::utils::weighted_sample;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let items = [("only", 1.0)];
/// assert_eq!(weighted_sample(&mut rng, &items), Some(&"only"));
/// ```
pub fn weighted_sample<'a, R, T>(rng: &mut R, items: &'a [(T, f64)]) -> Option<&'a T>
where
    R: Rng,
{
    if items.is_empty() {
        return None;
    }

    let total: f64 = items.iter().map(|(_, w)| *w).sum();
    if total <= 0.0 || !total.is_finite() {
        return items.choose(rng).map(|(item, _)| item);
    }

    let mut threshold = rng.sample::<f64, _>(StandardUniform) * total;
    for (item, weight) in items {
        if threshold < *weight {
            return Some(item);
        }
        threshold -= weight;
    }

    // Rounding can leave a sliver of threshold after the last weight
    items.last().map(|(item, _)| item)
}
