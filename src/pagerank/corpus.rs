//! Link corpus: pages and the in-corpus pages each one links to

use std::{
    collections::{BTreeMap, BTreeSet},
    fs,
    path::Path,
};

use regex::Regex;
use serde::Serialize;
use walkdir::WalkDir;

use crate::{Error, Result, identifiers::PageId};

/// Anchor tags with a double-quoted `href` attribute.
pub const LINK_PATTERN: &str = r#"<a\s+(?:[^>]*?)href="([^"]*)""#;

const PAGE_EXTENSION: &str = ".html";

/// Immutable adjacency mapping from each page to its out-links.
///
/// Invariants upheld by every constructor:
/// - every link target is itself a page of the corpus
/// - no page links to itself
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Corpus {
    links: BTreeMap<PageId, BTreeSet<PageId>>,
}

impl Corpus {
    /// Build a corpus from `(page, links)` pairs.
    ///
    /// Links to pages that are not keys are discarded, as are self-links.
    /// Repeated keys have their link sets merged.
    ///
    /// # Examples
    ///
    /// ```
    /// use rankmax::pagerank::Corpus;
    ///
    /// let corpus = Corpus::from_links([
    ///     ("1.html", vec!["2.html", "1.html", "elsewhere.html"]),
    ///     ("2.html", vec![]),
    /// ]);
    /// assert_eq!(corpus.len(), 2);
    /// assert_eq!(corpus.links("1.html").unwrap().len(), 1);
    /// ```
    pub fn from_links<I, P, L, Q>(entries: I) -> Self
    where
        I: IntoIterator<Item = (P, L)>,
        P: Into<PageId>,
        L: IntoIterator<Item = Q>,
        Q: Into<PageId>,
    {
        let mut raw: BTreeMap<PageId, BTreeSet<PageId>> = BTreeMap::new();
        for (page, targets) in entries {
            raw.entry(page.into())
                .or_default()
                .extend(targets.into_iter().map(Into::into));
        }

        let universe: BTreeSet<PageId> = raw.keys().cloned().collect();
        let links = raw
            .into_iter()
            .map(|(page, targets)| {
                let kept = targets
                    .into_iter()
                    .filter(|target| target != &page && universe.contains(target))
                    .collect();
                (page, kept)
            })
            .collect();

        Self { links }
    }

    /// Read every `*.html` file directly inside `directory` and link pages
    /// through their anchor `href` targets.
    ///
    /// Page ids are file names. Subdirectories and other files are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the directory cannot be listed or a page
    /// cannot be read.
    pub fn crawl(directory: impl AsRef<Path>) -> Result<Self> {
        let directory = directory.as_ref();
        let extractor = LinkExtractor::new()?;
        let mut pages = Vec::new();

        let walker = WalkDir::new(directory)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name();
        for entry in walker {
            let entry = entry.map_err(|e| {
                Error::io(
                    format!("list corpus directory {}", directory.display()),
                    e.into(),
                )
            })?;
            if !entry.file_type().is_file() {
                continue;
            }
            let name = entry.file_name().to_string_lossy().into_owned();
            if !name.ends_with(PAGE_EXTENSION) {
                continue;
            }

            let contents = fs::read_to_string(entry.path())
                .map_err(|e| Error::io(format!("read page {}", entry.path().display()), e))?;
            pages.push((name, extractor.extract(&contents)));
        }

        Ok(Self::from_links(pages))
    }

    /// Number of pages.
    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    pub fn contains(&self, page: &str) -> bool {
        self.links.contains_key(page)
    }

    /// All pages in id order.
    pub fn pages(&self) -> impl Iterator<Item = &PageId> {
        self.links.keys()
    }

    /// Out-links of `page`, or `None` if the page is not in the corpus.
    pub fn links(&self, page: &str) -> Option<&BTreeSet<PageId>> {
        self.links.get(page)
    }

    /// Out-links of a page that must be present.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownPage`] for a page outside the corpus.
    pub fn require(&self, page: &str) -> Result<&BTreeSet<PageId>> {
        self.links.get(page).ok_or_else(|| Error::UnknownPage {
            page: page.to_string(),
        })
    }

    /// Pages and their out-links in id order.
    pub fn iter(&self) -> impl Iterator<Item = (&PageId, &BTreeSet<PageId>)> {
        self.links.iter()
    }

    /// Pages without any out-links.
    pub fn dead_ends(&self) -> BTreeSet<&PageId> {
        self.links
            .iter()
            .filter(|(_, targets)| targets.is_empty())
            .map(|(page, _)| page)
            .collect()
    }

    /// Reverse adjacency: for each page, the pages linking to it.
    ///
    /// Every page has an entry, possibly empty.
    pub fn incoming(&self) -> BTreeMap<&PageId, BTreeSet<&PageId>> {
        let mut incoming: BTreeMap<&PageId, BTreeSet<&PageId>> =
            self.links.keys().map(|page| (page, BTreeSet::new())).collect();
        for (source, targets) in &self.links {
            for target in targets {
                if let Some(sources) = incoming.get_mut(target) {
                    sources.insert(source);
                }
            }
        }
        incoming
    }
}

/// Pulls `href` targets out of raw page markup.
#[derive(Debug, Clone)]
pub struct LinkExtractor {
    pattern: Regex,
}

impl LinkExtractor {
    /// Compile the extractor for [`LINK_PATTERN`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLinkPattern`] if the pattern fails to compile.
    pub fn new() -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(LINK_PATTERN)?,
        })
    }

    /// Distinct link targets in `contents`.
    pub fn extract(&self, contents: &str) -> BTreeSet<String> {
        self.pattern
            .captures_iter(contents)
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
            .collect()
    }
}
