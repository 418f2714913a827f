//! Sign catalog: composition → sign text entries in codepoint order.
//!
//! The catalog is loaded once from a text file of `"composition"="text"`
//! lines and is read-only afterwards. Lookup is a pair of binary searches
//! yielding the contiguous range of entries sharing a composition prefix.

mod entry;

pub use entry::SignEntry;

use std::fs;
use std::io;
use std::ops::Range;
use std::path::Path;

use tracing::{debug, warn};

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug, Clone, Default)]
pub struct SignCatalog {
    entries: Vec<SignEntry>,
    skipped_lines: usize,
}

impl SignCatalog {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a catalog from already-parsed entries.
    pub fn from_entries(mut entries: Vec<SignEntry>) -> Self {
        entries.sort_by(|a, b| a.composition.cmp(&b.composition));
        Self {
            entries,
            skipped_lines: 0,
        }
    }

    /// Parse catalog records, skipping empty and malformed lines.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut entries = Vec::new();
        let mut skipped_lines = 0;
        for (lineno, line) in lines.into_iter().enumerate() {
            let line = line.as_ref();
            if line.is_empty() {
                continue;
            }
            match SignEntry::parse_line(line) {
                Some(entry) => entries.push(entry),
                None => {
                    debug!(lineno = lineno + 1, line, "skipping malformed catalog line");
                    skipped_lines += 1;
                }
            }
        }
        let mut catalog = Self::from_entries(entries);
        catalog.skipped_lines = skipped_lines;
        debug!(
            entries = catalog.len(),
            skipped = skipped_lines,
            "sign catalog loaded"
        );
        catalog
    }

    pub fn parse(content: &str) -> Self {
        Self::from_lines(content.lines())
    }

    pub fn open(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Ok(Self::parse(&content))
    }

    /// Like [`SignCatalog::open`], but an unreadable file yields an empty
    /// catalog: every composition then simply has no candidates.
    pub fn open_or_empty(path: impl AsRef<Path>) -> Self {
        match Self::open(path) {
            Ok(catalog) => catalog,
            Err(e) => {
                warn!(error = %e, "sign catalog unavailable, using an empty catalog");
                Self::empty()
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[SignEntry] {
        &self.entries
    }

    /// Number of non-empty lines dropped while parsing.
    pub fn skipped_lines(&self) -> usize {
        self.skipped_lines
    }

    /// Index range of all entries whose composition starts with `query`.
    ///
    /// Entries sharing a prefix are contiguous in codepoint order: the range
    /// starts at the lower bound of `query` and ends at the first entry past
    /// it that no longer has `query` as a prefix.
    pub fn prefix_range(&self, query: &str) -> Range<usize> {
        let begin = self
            .entries
            .partition_point(|e| e.composition.as_str() < query);
        let len = self.entries[begin..].partition_point(|e| e.composition.starts_with(query));
        begin..begin + len
    }

    pub fn prefix_matches(&self, query: &str) -> &[SignEntry] {
        &self.entries[self.prefix_range(query)]
    }
}
