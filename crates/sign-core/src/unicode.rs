//! Scalar-level helpers for text exchanged with the host, whose offsets are
//! counted in UTF-16 code units.

/// Length of `s` in UTF-16 code units.
pub fn utf16_len(s: &str) -> usize {
    s.chars().map(char::len_utf16).sum()
}

/// Number of Unicode scalar values in `s`.
pub fn scalar_count(s: &str) -> usize {
    s.chars().count()
}

/// `s` without its final scalar value. Empty input stays empty.
pub fn all_but_last_scalar(s: &str) -> &str {
    match s.char_indices().next_back() {
        Some((i, _)) => &s[..i],
        None => s,
    }
}

/// Private-use planes and the BMP private-use area. Hosts deliver function
/// keys (arrows, page up/down) as private-use scalars.
pub fn is_private_use(c: char) -> bool {
    ('\u{E000}'..='\u{F8FF}').contains(&c)
        || ('\u{F0000}'..='\u{FFFFD}').contains(&c)
        || ('\u{100000}'..='\u{10FFFD}').contains(&c)
}

/// True if `s` contains anything that must not enter a composition.
pub fn has_control_or_private_use(s: &str) -> bool {
    s.chars().any(|c| c.is_control() || is_private_use(c))
}
