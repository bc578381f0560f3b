//! Output formatting and progress bars for CLI

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};

use crate::{identifiers::PageId, pagerank::RankTable, ports::SampleObserver, tictactoe::Board};

/// Progress bar that follows a sampling run
pub struct SamplingProgress {
    progress_bar: ProgressBar,
}

impl SamplingProgress {
    pub fn new() -> Result<Self> {
        let pb = ProgressBar::hidden();
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} samples ({msg})")
                .context("Invalid progress bar template")?
                .progress_chars("=>-"),
        );
        Ok(Self { progress_bar: pb })
    }
}

impl SampleObserver for SamplingProgress {
    fn on_sampling_start(&mut self, total_samples: usize) -> crate::Result<()> {
        self.progress_bar
            .set_draw_target(indicatif::ProgressDrawTarget::stderr());
        self.progress_bar.set_length(total_samples as u64);
        Ok(())
    }

    fn on_visit(&mut self, step: usize, page: &PageId) -> crate::Result<()> {
        self.progress_bar.set_position(step as u64 + 1);
        self.progress_bar.set_message(page.to_string());
        Ok(())
    }

    fn on_sampling_end(&mut self) -> crate::Result<()> {
        self.progress_bar.finish_with_message("done");
        Ok(())
    }
}

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Print a rank table under `title`, one page per line in id order with
/// four decimals.
pub fn print_ranks(title: &str, ranks: &RankTable) {
    println!("{title}");
    for line in format_ranks(ranks) {
        println!("{line}");
    }
}

/// Lines of the form `  page: 0.1234`, sorted by page id.
pub fn format_ranks(ranks: &RankTable) -> Vec<String> {
    ranks
        .iter()
        .map(|(page, value)| format!("  {page}: {value:.4}"))
        .collect()
}

/// Print a board indented under a label
pub fn print_board(label: &str, board: &Board) {
    println!("{label}:");
    for row in board.to_string().lines() {
        println!("  {row}");
    }
}

/// Format a number with thousands separators
pub fn format_number(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i.is_multiple_of(3) {
            result.insert(0, ',');
        }
        result.insert(0, c);
    }
    result
}
