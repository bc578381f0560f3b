//! Shared corpus fixtures for the integration tests.

#![allow(dead_code)]

use rankmax::pagerank::Corpus;

/// Three pages linking in a ring: 1 -> 2 -> 3 -> 1.
pub fn cycle_corpus() -> Corpus {
    Corpus::from_links([
        ("1.html", vec!["2.html"]),
        ("2.html", vec!["3.html"]),
        ("3.html", vec!["1.html"]),
    ])
}

/// Every page links to `hub.html`; `orphan.html` receives no links.
pub fn hub_corpus() -> Corpus {
    Corpus::from_links([
        ("hub.html", vec!["a.html"]),
        ("a.html", vec!["hub.html", "b.html"]),
        ("b.html", vec!["hub.html"]),
        ("c.html", vec!["hub.html", "a.html"]),
        ("orphan.html", vec!["hub.html"]),
    ])
}

/// Mix of dead ends, self-links, and links leaving the corpus.
pub fn irregular_corpus() -> Corpus {
    Corpus::from_links([
        ("1.html", vec!["2.html", "1.html", "missing.html"]),
        ("2.html", vec!["3.html", "4.html"]),
        ("3.html", vec![]),
        ("4.html", vec!["2.html"]),
        ("5.html", vec![]),
    ])
}

/// Every fixture, for properties that must hold on any corpus.
pub fn all_corpora() -> Vec<Corpus> {
    vec![cycle_corpus(), hub_corpus(), irregular_corpus()]
}

pub fn approx_eq(a: f64, b: f64, tolerance: f64) -> bool {
    (a - b).abs() <= tolerance
}
