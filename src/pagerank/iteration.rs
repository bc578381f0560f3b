//! Fixed-point iteration of the PageRank recurrence

use std::collections::BTreeMap;

use serde::Serialize;

use super::{Corpus, RankConfig, RankTable};
use crate::{Error, Result, identifiers::PageId};

/// Converged ranks plus how the solver got there.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IterationOutcome {
    pub ranks: RankTable,
    /// Rounds of the recurrence applied
    pub iterations: usize,
    /// Largest per-page change in the final round
    pub residual: f64,
}

/// Compute PageRank by iterating the recurrence until no page's rank moves
/// by more than `config.tolerance`.
///
/// # Errors
///
/// See [`iterate_pagerank_detailed`].
pub fn iterate_pagerank(corpus: &Corpus, config: &RankConfig) -> Result<RankTable> {
    iterate_pagerank_detailed(corpus, config).map(|outcome| outcome.ranks)
}

/// Compute PageRank and report the iteration count and final residual.
///
/// Every page starts at `1/N`. Each round sets
///
/// ```text
/// PR(p) = (1 - d)/N + d * dead/N + d * sum(PR(i) / |out(i)| for i linking to p)
/// ```
///
/// where `dead` is the current total rank held by dead ends, spread evenly
/// over every page. The round whose largest change is within tolerance is
/// kept. Deterministic: identical inputs give identical tables.
///
/// # Errors
///
/// - [`Error::InvalidConfiguration`] for an invalid `config`
/// - [`Error::EmptyCorpus`] if there are no pages
/// - [`Error::NotConverged`] if `config.max_iterations` rounds pass first
pub fn iterate_pagerank_detailed(corpus: &Corpus, config: &RankConfig) -> Result<IterationOutcome> {
    config.validate_iteration()?;
    if corpus.is_empty() {
        return Err(Error::EmptyCorpus);
    }

    let d = config.damping_factor;
    let n = corpus.len() as f64;
    let incoming = corpus.incoming();
    let dead_ends = corpus.dead_ends();
    let out_degree: BTreeMap<&PageId, f64> = corpus
        .iter()
        .map(|(page, links)| (page, links.len() as f64))
        .collect();

    let teleport = (1.0 - d) / n;
    let mut ranks: BTreeMap<&PageId, f64> = corpus.pages().map(|page| (page, 1.0 / n)).collect();
    let mut residual = f64::INFINITY;

    for iteration in 1..=config.max_iterations {
        let dead_mass: f64 = dead_ends.iter().map(|page| ranks[page]).sum();
        let dead_share = d * dead_mass / n;

        let next: BTreeMap<&PageId, f64> = incoming
            .iter()
            .map(|(&page, sources)| {
                let inflow: f64 = sources
                    .iter()
                    .map(|source| ranks[source] / out_degree[source])
                    .sum();
                (page, teleport + dead_share + d * inflow)
            })
            .collect();

        residual = next
            .iter()
            .map(|(page, value)| (value - ranks[page]).abs())
            .fold(0.0, f64::max);
        ranks = next;

        if residual <= config.tolerance {
            return Ok(IterationOutcome {
                ranks: ranks
                    .into_iter()
                    .map(|(page, value)| (page.clone(), value))
                    .collect(),
                iterations: iteration,
                residual,
            });
        }
    }

    Err(Error::NotConverged {
        iterations: config.max_iterations,
        residual,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symmetric_cycle_is_uniform() {
        let corpus = Corpus::from_links([
            ("a", vec!["b"]),
            ("b", vec!["c"]),
            ("c", vec!["a"]),
        ]);
        let outcome = iterate_pagerank_detailed(&corpus, &RankConfig::default()).unwrap();
        assert_eq!(outcome.iterations, 1);
        for (_, &value) in &outcome.ranks {
            assert!((value - 1.0 / 3.0).abs() < 1e-12);
        }
    }

    #[test]
    fn all_dead_ends_stay_uniform() {
        let corpus = Corpus::from_links([("a", Vec::<&str>::new()), ("b", vec![])]);
        let ranks = iterate_pagerank(&corpus, &RankConfig::default()).unwrap();
        assert!((ranks.get("a").unwrap() - 0.5).abs() < 1e-12);
        assert!((ranks.get("b").unwrap() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn hub_outranks_leaves() {
        let corpus = Corpus::from_links([
            ("hub", vec!["x"]),
            ("x", vec!["hub"]),
            ("y", vec!["hub"]),
            ("z", vec!["hub"]),
        ]);
        let ranks = iterate_pagerank(&corpus, &RankConfig::default()).unwrap();
        let hub = ranks.get("hub").unwrap();
        for leaf in ["y", "z"] {
            assert!(hub > ranks.get(leaf).unwrap());
        }
        assert!((ranks.total() - 1.0).abs() < 1e-3);
    }

    #[test]
    fn iteration_cap_reports_non_convergence() {
        let corpus = Corpus::from_links([
            ("hub", vec!["x"]),
            ("x", vec!["hub"]),
            ("y", vec!["hub"]),
        ]);
        let config = RankConfig::default()
            .with_tolerance(1e-15)
            .with_max_iterations(2);
        let err = iterate_pagerank(&corpus, &config).unwrap_err();
        assert!(matches!(err, Error::NotConverged { iterations: 2, .. }));
    }
}
