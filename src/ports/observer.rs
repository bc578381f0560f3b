//! Observer port for the random-walk sampler
//!
//! Lets a caller watch a sampling run without coupling the sampler to a
//! particular output, e.g. a progress bar in the CLI or a visit trace in
//! tests.

use crate::{Result, identifiers::PageId};

/// Observer for [`sample_pagerank_observed`](crate::pagerank::sample_pagerank_observed).
///
/// # Event Sequence
///
/// 1. `on_sampling_start(total_samples)` - once
/// 2. `on_visit(step, page)` - once per sample, starting at step 0 with the
///    random starting page
/// 3. `on_sampling_end()` - once, only if the walk completed
///
/// An error returned from any method aborts the run and is passed back to
/// the caller.
///
/// # Examples
///
/// ```
/// use rankmax::{identifiers::PageId, ports::SampleObserver};
///
/// struct VisitCounter {
///     visits: usize,
/// }
///
/// impl SampleObserver for VisitCounter {
///     fn on_visit(&mut self, _step: usize, _page: &PageId) -> rankmax::Result<()> {
///         self.visits += 1;
///         Ok(())
///     }
/// }
/// ```
pub trait SampleObserver {
    /// Called before the first page is drawn.
    fn on_sampling_start(&mut self, _total_samples: usize) -> Result<()> {
        Ok(())
    }

    /// Called for every visited page.
    fn on_visit(&mut self, _step: usize, _page: &PageId) -> Result<()> {
        Ok(())
    }

    /// Called after the last page is counted.
    fn on_sampling_end(&mut self) -> Result<()> {
        Ok(())
    }
}

/// The unit observer ignores every event.
impl SampleObserver for () {}
