/// Reference order of the transliteration alphabet. A letter's rank is its
/// position here, not its codepoint.
pub const ALPHABET: &str = "abdegŋḫijklmnpqrsṣšśtṭuwzʾ";

/// The glottal stop is ignored at the primary collation level.
pub const SOFT_LETTER: char = 'ʾ';

/// Rank of `c` in [`ALPHABET`], or `None` for anything outside it.
pub fn rank(c: char) -> Option<i64> {
    ALPHABET.chars().position(|a| a == c).map(|i| i as i64)
}

pub fn soft_letter_rank() -> i64 {
    (ALPHABET.chars().count() - 1) as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank() {
        assert_eq!(rank('a'), Some(0));
        assert_eq!(rank('ḫ'), Some(6));
        assert_eq!(rank('i'), Some(7));
        assert_eq!(rank('ṣ'), Some(17));
        assert_eq!(rank('x'), None);
        assert_eq!(rank('v'), None);
        assert_eq!(rank('c'), None);
        assert_eq!(rank(SOFT_LETTER), Some(soft_letter_rank()));
    }
}
