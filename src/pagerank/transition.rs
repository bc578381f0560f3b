//! Random-surfer transition model

use super::{Corpus, ProbabilityDistribution, config::validate_damping_factor};
use crate::{Error, Result};

/// Distribution over the page visited after `page`.
///
/// With probability `damping_factor` the surfer follows one of the page's
/// out-links chosen uniformly; otherwise it teleports to any page of the
/// corpus. A dead end behaves as if it linked to every page, giving a
/// uniform `1/N` distribution.
///
/// # Errors
///
/// - [`Error::EmptyCorpus`] if the corpus has no pages
/// - [`Error::UnknownPage`] if `page` is not in the corpus
/// - [`Error::InvalidConfiguration`] if `damping_factor` is outside `(0, 1)`
///
/// # Examples
///
/// ```
/// use rankmax::pagerank::{Corpus, transition_model};
///
/// let corpus = Corpus::from_links([
///     ("1.html", vec!["2.html", "3.html"]),
///     ("2.html", vec!["3.html"]),
///     ("3.html", vec!["2.html"]),
/// ]);
/// let dist = transition_model(&corpus, "1.html", 0.85).unwrap();
/// assert!((dist.get("1.html").unwrap() - 0.05).abs() < 1e-9);
/// assert!((dist.get("2.html").unwrap() - 0.475).abs() < 1e-9);
/// ```
pub fn transition_model(
    corpus: &Corpus,
    page: &str,
    damping_factor: f64,
) -> Result<ProbabilityDistribution> {
    if corpus.is_empty() {
        return Err(Error::EmptyCorpus);
    }
    validate_damping_factor(damping_factor)?;

    let outgoing = corpus.require(page)?;
    let n = corpus.len() as f64;

    if outgoing.is_empty() {
        let uniform = 1.0 / n;
        return Ok(corpus.pages().map(|p| (p.clone(), uniform)).collect());
    }

    let teleport = (1.0 - damping_factor) / n;
    let follow = damping_factor / outgoing.len() as f64;

    Ok(corpus
        .pages()
        .map(|p| {
            let mass = if outgoing.contains(p) {
                teleport + follow
            } else {
                teleport
            };
            (p.clone(), mass)
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus() -> Corpus {
        Corpus::from_links([
            ("1.html", vec!["2.html", "3.html"]),
            ("2.html", vec!["3.html"]),
            ("3.html", vec!["2.html"]),
            ("4.html", vec![]),
        ])
    }

    #[test]
    fn splits_teleport_and_follow_mass() {
        let dist = transition_model(&corpus(), "1.html", 0.85).unwrap();
        let teleport = 0.15 / 4.0;
        assert!((dist.get("1.html").unwrap() - teleport).abs() < 1e-12);
        assert!((dist.get("4.html").unwrap() - teleport).abs() < 1e-12);
        assert!((dist.get("2.html").unwrap() - (teleport + 0.425)).abs() < 1e-12);
        assert!((dist.get("3.html").unwrap() - (teleport + 0.425)).abs() < 1e-12);
        assert!((dist.total() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn dead_end_is_uniform() {
        let dist = transition_model(&corpus(), "4.html", 0.85).unwrap();
        assert_eq!(dist.len(), 4);
        for (_, &value) in &dist {
            assert_eq!(value, 0.25);
        }
    }

    #[test]
    fn unknown_page_is_rejected() {
        let err = transition_model(&corpus(), "missing.html", 0.85).unwrap_err();
        assert!(matches!(err, Error::UnknownPage { .. }));
    }

    #[test]
    fn empty_corpus_is_rejected() {
        let empty = Corpus::default();
        assert!(matches!(
            transition_model(&empty, "1.html", 0.85),
            Err(Error::EmptyCorpus)
        ));
    }
}
