//! Candidate ranking: prefix lookup followed by a collation sort.

use tracing::debug;

use crate::catalog::{SignCatalog, SignEntry};
use crate::collation::collation_key;

/// Prefix matches for one composition, in collation order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RankedCandidates {
    entries: Vec<SignEntry>,
}

impl RankedCandidates {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&SignEntry> {
        self.entries.get(index)
    }

    pub fn entries(&self) -> &[SignEntry] {
        &self.entries
    }
}

/// Rank every catalog entry whose composition starts with `query`.
///
/// An empty query yields no candidates rather than the whole catalog.
/// Entries with equal keys keep their catalog order.
pub fn rank(catalog: &SignCatalog, query: &str) -> RankedCandidates {
    if query.is_empty() {
        return RankedCandidates::default();
    }
    let mut entries = catalog.prefix_matches(query).to_vec();
    entries.sort_by_cached_key(|e| collation_key(&e.composition));
    debug!(query, count = entries.len(), "ranked candidates");
    RankedCandidates { entries }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> SignCatalog {
        SignCatalog::parse(
            "\"ṣaḫ5\"=\"𒄭\"\n\"ṣab\"=\"𒂟\"\n\"ṣa\"=\"𒊓\"\n\"ṣaḫ\"=\"𒄩\"\n\"ṣa3\"=\"𒍝\"\n\"ia\"=\"𒉿\"\n\"a\"=\"𒀀\"\n\"a2\"=\"𒀉\"\n\"a10\"=\"𒀀𒀀\"\n",
        )
    }

    fn compositions(ranked: &RankedCandidates) -> Vec<&str> {
        ranked
            .entries()
            .iter()
            .map(|e| e.composition.as_str())
            .collect()
    }

    #[test]
    fn test_rank_orders_prefix_matches() {
        let ranked = rank(&catalog(), "ṣa");
        assert_eq!(
            compositions(&ranked),
            vec!["ṣa", "ṣa3", "ṣab", "ṣaḫ", "ṣaḫ5"]
        );
        assert_eq!(ranked.get(0).map(|e| e.text.as_str()), Some("𒊓"));
    }

    #[test]
    fn test_rank_numeric_homophones() {
        // Codepoint order would put a10 before a2
        let ranked = rank(&catalog(), "a");
        assert_eq!(compositions(&ranked), vec!["a", "a2", "a10"]);
    }

    #[test]
    fn test_rank_empty_query() {
        let ranked = rank(&catalog(), "");
        assert!(ranked.is_empty());
        assert_eq!(ranked.len(), 0);
    }

    #[test]
    fn test_rank_no_match() {
        assert!(rank(&catalog(), "ṣe").is_empty());
        assert!(rank(&SignCatalog::empty(), "a").is_empty());
    }

    #[test]
    fn test_rank_is_idempotent() {
        let catalog = catalog();
        assert_eq!(rank(&catalog, "ṣa"), rank(&catalog, "ṣa"));
    }

    #[test]
    fn test_rank_stable_for_equal_keys() {
        let catalog = SignCatalog::parse("\"an\"=\"𒀭\"\n\"an\"=\"𒀮\"\n\"an(\"=\"𒀯\"\n");
        let ranked = rank(&catalog, "an");
        let texts: Vec<&str> = ranked
            .entries()
            .iter()
            .map(|e| e.text.as_str())
            .collect();
        assert_eq!(texts, vec!["𒀭", "𒀮", "𒀯"]);
    }
}
