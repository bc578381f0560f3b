//! PageRank command - Rank a directory of HTML pages

use std::{fs::File, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use serde_json::to_writer_pretty;

use crate::{
    cli::output::{SamplingProgress, print_kv, print_ranks, print_section},
    pagerank::{
        Corpus, IterationOutcome, RankConfig, RankTable, iterate_pagerank_detailed,
        sample_pagerank, sample_pagerank_observed, seeded_rng,
    },
};

#[derive(Parser, Debug)]
#[command(about = "Rank a corpus of HTML pages by sampling and by iteration")]
pub struct PagerankArgs {
    /// Directory containing the corpus `.html` files
    pub corpus: PathBuf,

    /// Probability of following a link instead of teleporting
    #[arg(long, short = 'd', default_value_t = crate::pagerank::config::DEFAULT_DAMPING_FACTOR)]
    pub damping: f64,

    /// Number of pages visited by the sampler
    #[arg(long, short = 'n', default_value_t = crate::pagerank::config::DEFAULT_SAMPLES)]
    pub samples: usize,

    /// Convergence threshold for the iterative solver
    #[arg(long, default_value_t = crate::pagerank::config::DEFAULT_TOLERANCE)]
    pub tolerance: f64,

    /// Give up iterating after this many rounds
    #[arg(long, default_value_t = crate::pagerank::config::DEFAULT_MAX_ITERATIONS)]
    pub max_iterations: usize,

    /// Random seed for reproducible sampling
    #[arg(long)]
    pub seed: Option<u64>,

    /// Show a progress bar while sampling
    #[arg(long)]
    pub progress: bool,

    /// Print corpus and solver details
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Write both rank tables to a JSON file
    #[arg(long)]
    pub export: Option<PathBuf>,
}

impl PagerankArgs {
    fn config(&self) -> RankConfig {
        let config = RankConfig::default()
            .with_damping_factor(self.damping)
            .with_samples(self.samples)
            .with_tolerance(self.tolerance)
            .with_max_iterations(self.max_iterations);
        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }
}

/// Heading printed above the iterative ranks
pub const ITERATION_TITLE: &str = "PageRank Results from Iteration";

/// Heading printed above the sampled ranks
pub fn sampling_title(samples: usize) -> String {
    format!("PageRank Results from Sampling (n = {samples})")
}

#[derive(Debug, Serialize)]
struct RankReport<'a> {
    corpus: String,
    config: &'a RankConfig,
    sampling: &'a RankTable,
    iteration: &'a IterationOutcome,
}

pub fn execute(args: PagerankArgs) -> Result<()> {
    let config = args.config();
    config.validate()?;

    let corpus = Corpus::crawl(&args.corpus)
        .with_context(|| format!("Failed to crawl corpus {}", args.corpus.display()))?;
    if corpus.is_empty() {
        anyhow::bail!("No .html pages found in {}", args.corpus.display());
    }

    if args.verbose {
        print_section("Corpus");
        print_kv("Directory", &args.corpus.display().to_string());
        print_kv("Pages", &corpus.len().to_string());
        print_kv("Dead ends", &corpus.dead_ends().len().to_string());
        print_kv("Damping factor", &config.damping_factor.to_string());
        println!();
    }

    let sampled = if args.progress {
        let mut progress = SamplingProgress::new()?;
        let mut rng = seeded_rng(config.seed);
        sample_pagerank_observed(&corpus, &config, &mut rng, &mut progress)?
    } else {
        sample_pagerank(&corpus, &config)?
    };
    print_ranks(&sampling_title(config.samples), &sampled);

    let iterated = iterate_pagerank_detailed(&corpus, &config)?;
    print_ranks(ITERATION_TITLE, &iterated.ranks);

    if args.verbose {
        println!();
        print_kv("Iterations", &iterated.iterations.to_string());
        print_kv("Final change", &format!("{:.6}", iterated.residual));
        if let Some((page, rank)) = iterated.ranks.top() {
            print_kv("Top page", &format!("{page} ({rank:.4})"));
        }
    }

    if let Some(path) = &args.export {
        let report = RankReport {
            corpus: args.corpus.display().to_string(),
            config: &config,
            sampling: &sampled,
            iteration: &iterated,
        };
        let file = File::create(path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
        to_writer_pretty(file, &report)?;
        println!("\nRanks exported to: {}", path.display());
    }

    Ok(())
}
