//! Collation keys for transliterated sign values and sign-list citations.
//!
//! A composition is split into words: alphabetic runs (letters ranked by
//! their position in [`alphabet::ALPHABET`]), numbers, fractions and `+`/`-`
//! modifiers. Keys compare word by word at two levels: the primary level
//! ignores the soft letter, the secondary level does not. A trailing
//! `v<digits>` variant number breaks the remaining ties.
//!
//! Both builders are total: characters outside the grammar are ignored and
//! numeric accumulation saturates.

pub mod alphabet;

use std::cmp::Ordering;

use serde::Serialize;

use crate::catalog::SignEntry;

/// Marker introducing a sign-list citation (`xabzl123`) and, inside a value,
/// an indeterminate number.
pub const LIST_MARKER: char = 'x';

const VARIANT_MARKER: char = 'v';

/// Head of a `+`/`-` modifier word, below every real number.
const MODIFIER_SENTINEL: i64 = -1;

/// Indeterminate number, above every real number.
const INDETERMINATE: i64 = i64::MAX;

pub type WordKey = Vec<i64>;

/// Field order matters: the derived `Ord` compares primary, then secondary,
/// then variant.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct CollationKey {
    pub primary: Vec<WordKey>,
    pub secondary: Vec<WordKey>,
    pub variant: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Category {
    Numeric,
    FractionSlash,
    Alphabetic,
    Variant,
}

fn push_digit(n: i64, digit: u32) -> i64 {
    n.saturating_mul(10).saturating_add(i64::from(digit))
}

/// Key for an ordinary sign value such as `ṣaḫ5`, `1/2(diš)` or `an+v2`.
pub fn value_key(composition: &str) -> CollationKey {
    let mut words: Vec<WordKey> = Vec::new();
    let mut variant = 0i64;
    let mut last: Option<Category> = None;

    for c in composition.chars() {
        if let Some(rank) = alphabet::rank(c) {
            if last != Some(Category::Alphabetic) {
                words.push(Vec::new());
            }
            if let Some(word) = words.last_mut() {
                word.push(rank);
            }
            last = Some(Category::Alphabetic);
        } else if let Some(digit) = c.to_digit(10) {
            if last == Some(Category::Variant) {
                variant = push_digit(variant, digit);
                continue;
            }
            match (last, words.last_mut()) {
                (Some(Category::Numeric), Some(word)) if !word.is_empty() => {
                    let n = word.len() - 1;
                    word[n] = push_digit(word[n], digit);
                }
                (Some(Category::FractionSlash), Some(word)) => word.push(i64::from(digit)),
                _ => words.push(vec![i64::from(digit)]),
            }
            last = Some(Category::Numeric);
        } else if c == LIST_MARKER {
            words.push(vec![INDETERMINATE]);
            last = Some(Category::Numeric);
        } else if c == '+' || c == '-' {
            if last != Some(Category::Numeric) {
                words.push(vec![MODIFIER_SENTINEL]);
                last = Some(Category::Numeric);
            }
            if let Some(word) = words.last_mut() {
                word.push(if c == '-' { 0 } else { 1 });
            }
        } else if c == '/' {
            last = Some(Category::FractionSlash);
        } else if c == VARIANT_MARKER {
            last = Some(Category::Variant);
        }
    }

    let soft = alphabet::soft_letter_rank();
    let primary = words
        .iter()
        .map(|word| word.iter().copied().filter(|&k| k != soft).collect())
        .collect();
    CollationKey {
        primary,
        secondary: words,
        variant,
    }
}

/// Key for a sign-list citation `x<name><number><tail>[v<variant>]`.
///
/// Only the number and the tail take part in the ordering; the list name
/// is skipped.
pub fn list_key(composition: &str) -> CollationKey {
    let body = composition
        .strip_prefix(LIST_MARKER)
        .unwrap_or(composition);
    let number_start = body
        .find(|c: char| c.is_ascii_digit())
        .unwrap_or(body.len());
    let rest = &body[number_start..];
    let number_len = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let (number, rest) = rest.split_at(number_len);
    let (tail, variant) = match rest.find(VARIANT_MARKER) {
        Some(i) => (&rest[..i], &rest[i + VARIANT_MARKER.len_utf8()..]),
        None => (rest, ""),
    };

    let number = number
        .chars()
        .filter_map(|c| c.to_digit(10))
        .fold(0, push_digit);
    let variant = variant
        .chars()
        .map_while(|c| c.to_digit(10))
        .fold(0, push_digit);
    let words = vec![vec![number], tail.chars().map(|c| i64::from(u32::from(c))).collect()];
    CollationKey {
        primary: words.clone(),
        secondary: words,
        variant,
    }
}

/// Key for a composition of either kind.
pub fn collation_key(composition: &str) -> CollationKey {
    if composition.starts_with(LIST_MARKER) {
        list_key(composition)
    } else {
        value_key(composition)
    }
}

/// Candidate order: primary words, then secondary words, then variant.
pub fn compare_candidates(a: &SignEntry, b: &SignEntry) -> Ordering {
    collation_key(&a.composition).cmp(&collation_key(&b.composition))
}

/// Strict "a sorts before b".
pub fn candidates_ordered(a: &SignEntry, b: &SignEntry) -> bool {
    compare_candidates(a, b) == Ordering::Less
}
