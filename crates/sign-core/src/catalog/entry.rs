use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SignEntry {
    /// Transliteration typed by the user, e.g. `ṣa3` or `xabzl123`.
    pub composition: String,
    /// Rendered sign text, one or more scalars.
    pub text: String,
}

impl SignEntry {
    pub fn new(composition: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            composition: composition.into(),
            text: text.into(),
        }
    }

    /// Parse one `"composition"="text"` record.
    ///
    /// Returns `None` for a record without `=` or with an empty field.
    /// Parts after the second `=` are ignored.
    pub fn parse_line(line: &str) -> Option<Self> {
        let mut parts = line.split('=');
        let composition = parts.next()?.trim_matches('"');
        let text = parts.next()?.trim_matches('"');
        if composition.is_empty() || text.is_empty() {
            return None;
        }
        Some(Self::new(composition, text))
    }
}
