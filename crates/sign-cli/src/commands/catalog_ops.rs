use serde::Serialize;
use unicode_width::UnicodeWidthStr;

use sign_core::catalog::{SignCatalog, SignEntry};
use sign_core::collation::{collation_key, CollationKey, LIST_MARKER};
use sign_core::pager::visible_page;
use sign_core::ranker::rank;
use sign_core::settings::settings;
use sign_core::unicode::scalar_count;

use super::load_catalog;

#[derive(Debug, Serialize)]
struct LookupReport<'a> {
    query: &'a str,
    total: usize,
    page: usize,
    pages: usize,
    page_size: usize,
    entries: &'a [SignEntry],
}

/// Rows of `entries` with compositions padded to a common display width.
pub fn format_rows(entries: &[SignEntry], first_index: usize) -> Vec<String> {
    let width = entries
        .iter()
        .map(|e| e.composition.width())
        .max()
        .unwrap_or(0);
    entries
        .iter()
        .enumerate()
        .map(|(i, e)| {
            let pad = width - e.composition.width();
            format!(
                "{:>4}  {}{}  {}",
                first_index + i,
                e.composition,
                " ".repeat(pad),
                e.text
            )
        })
        .collect()
}

/// Print page `page` (1-based) of the ranked candidates for `query`.
pub fn lookup(catalog_file: &str, query: &str, page: usize, json: bool) {
    let catalog = load_catalog(catalog_file);
    let ranked = rank(&catalog, query);
    let page_size = settings().candidates.page_size.max(1);
    let pages = ranked.len().div_ceil(page_size);
    let page = page.clamp(1, pages.max(1));
    let view = visible_page((page - 1) * page_size, page_size, ranked.len());
    let entries = ranked.entries().get(view.range.clone()).unwrap_or(&[]);

    if json {
        let report = LookupReport {
            query,
            total: ranked.len(),
            page,
            pages,
            page_size,
            entries,
        };
        println!(
            "{}",
            die!(serde_json::to_string_pretty(&report), "Error: {}")
        );
        return;
    }

    if ranked.is_empty() {
        println!("{query}: no candidates");
        return;
    }
    println!(
        "{query}: {} candidates (page {page}/{pages})",
        ranked.len()
    );
    for row in format_rows(entries, view.page_start) {
        println!("{row}");
    }
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct CatalogStats {
    pub entries: usize,
    pub skipped_lines: usize,
    pub duplicate_compositions: usize,
    pub multi_scalar_texts: usize,
    pub list_citations: usize,
}

pub fn catalog_stats(catalog: &SignCatalog) -> CatalogStats {
    let entries = catalog.entries();
    CatalogStats {
        entries: entries.len(),
        skipped_lines: catalog.skipped_lines(),
        duplicate_compositions: entries
            .windows(2)
            .filter(|w| w[0].composition == w[1].composition)
            .count(),
        multi_scalar_texts: entries.iter().filter(|e| scalar_count(&e.text) > 1).count(),
        list_citations: entries
            .iter()
            .filter(|e| e.composition.starts_with(LIST_MARKER))
            .count(),
    }
}

/// Distinct compositions that collate as equal, e.g. `a(a)` and `aa`
/// differing only in characters the key ignores.
pub fn collation_ties(catalog: &SignCatalog) -> Vec<(String, String)> {
    let mut keyed: Vec<(CollationKey, &str)> = catalog
        .entries()
        .iter()
        .map(|e| (collation_key(&e.composition), e.composition.as_str()))
        .collect();
    keyed.sort();
    keyed.dedup_by(|a, b| a.1 == b.1);
    keyed
        .windows(2)
        .filter(|w| w[0].0 == w[1].0)
        .map(|w| (w[0].1.to_string(), w[1].1.to_string()))
        .collect()
}

/// Summarise a catalog file.
pub fn check(catalog_file: &str) {
    let catalog = load_catalog(catalog_file);
    let stats = catalog_stats(&catalog);
    let ties = collation_ties(&catalog);

    println!("{catalog_file}:");
    println!("  entries:                {}", stats.entries);
    println!("  skipped lines:          {}", stats.skipped_lines);
    println!("  duplicate compositions: {}", stats.duplicate_compositions);
    println!("  multi-scalar signs:     {}", stats.multi_scalar_texts);
    println!("  list citations:         {}", stats.list_citations);
    println!("  collation ties:         {}", ties.len());
    for (a, b) in &ties {
        println!("    {a} = {b}");
    }
}
