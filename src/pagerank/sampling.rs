//! Markov chain Monte Carlo estimate of PageRank

use std::collections::BTreeMap;

use rand::{Rng, SeedableRng, prelude::IndexedRandom, rngs::StdRng};

use super::{Corpus, RankConfig, RankTable, transition_model};
use crate::{Error, Result, identifiers::PageId, ports::SampleObserver, utils::weighted_sample};

/// Estimate PageRank by walking `config.samples` pages.
///
/// The walk is driven by a [`StdRng`] seeded from `config.seed`, or from a
/// fresh random seed when none is set.
///
/// # Errors
///
/// Returns an error for an invalid configuration or an empty corpus.
pub fn sample_pagerank(corpus: &Corpus, config: &RankConfig) -> Result<RankTable> {
    let mut rng = seeded_rng(config.seed);
    sample_pagerank_observed(corpus, config, &mut rng, &mut ())
}

/// Random source for a sampling run: fixed by `seed`, or freshly seeded.
pub fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::seed_from_u64(rand::random::<u64>()),
    }
}

/// Estimate PageRank with a caller-supplied random source.
///
/// `config.seed` is ignored; the walk consumes `rng` directly.
///
/// # Errors
///
/// Returns an error for an invalid configuration or an empty corpus.
pub fn sample_pagerank_with_rng<R: Rng>(
    corpus: &Corpus,
    config: &RankConfig,
    rng: &mut R,
) -> Result<RankTable> {
    sample_pagerank_observed(corpus, config, rng, &mut ())
}

/// Estimate PageRank while reporting each visit to `observer`.
///
/// Starts on a uniformly random page, then takes `samples - 1` steps, each
/// one drawn from the [`transition_model`] of the current page. The rank of
/// a page is the fraction of samples that landed on it, so the result is
/// approximate and depends on the random source.
///
/// # Errors
///
/// Returns an error for an invalid configuration, an empty corpus, or any
/// error raised by the observer.
pub fn sample_pagerank_observed<R, O>(
    corpus: &Corpus,
    config: &RankConfig,
    rng: &mut R,
    observer: &mut O,
) -> Result<RankTable>
where
    R: Rng,
    O: SampleObserver + ?Sized,
{
    config.validate_sampling()?;
    let pages: Vec<&PageId> = corpus.pages().collect();
    let Some(&start) = pages.choose(rng) else {
        return Err(Error::EmptyCorpus);
    };

    let samples = config.samples;
    let mut visits: BTreeMap<&PageId, usize> = pages.iter().map(|&page| (page, 0)).collect();

    observer.on_sampling_start(samples)?;

    let mut current = start;
    record_visit(&mut visits, current);
    observer.on_visit(0, current)?;

    for step in 1..samples {
        let dist = transition_model(corpus, current.as_str(), config.damping_factor)?;
        let weights: Vec<(&PageId, f64)> = pages
            .iter()
            .map(|&page| (page, dist.get(page.as_str()).unwrap_or(0.0)))
            .collect();
        // Weights cover the whole corpus, so a draw always succeeds
        let Some(&next) = weighted_sample(rng, &weights) else {
            return Err(Error::EmptyCorpus);
        };

        record_visit(&mut visits, next);
        observer.on_visit(step, next)?;
        current = next;
    }

    observer.on_sampling_end()?;

    let n = samples as f64;
    Ok(visits
        .into_iter()
        .map(|(page, count)| (page.clone(), count as f64 / n))
        .collect())
}

fn record_visit(visits: &mut BTreeMap<&PageId, usize>, page: &PageId) {
    if let Some(count) = visits.get_mut(page) {
        *count += 1;
    }
}
