//! Link-graph ranking
//!
//! Two independent estimators of the random-surfer stationary distribution
//! over a [`Corpus`]: a Markov chain sampler and a fixed-point solver.

pub mod config;
pub mod corpus;
pub mod distribution;
pub mod iteration;
pub mod sampling;
pub mod transition;

pub use config::RankConfig;
pub use corpus::{Corpus, LinkExtractor};
pub use distribution::{PageDistribution, ProbabilityDistribution, RankTable};
pub use iteration::{IterationOutcome, iterate_pagerank, iterate_pagerank_detailed};
pub use sampling::{
    sample_pagerank, sample_pagerank_observed, sample_pagerank_with_rng, seeded_rng,
};
pub use transition::transition_model;
