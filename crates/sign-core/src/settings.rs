//! Global settings loaded from TOML.
//!
//! - `init_custom(toml_content)` sets a custom TOML before first `settings()` call
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`

use std::sync::OnceLock;

use serde::Deserialize;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Set custom TOML before first `settings()` call.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Get or initialize the global settings singleton.
///
/// A custom document is validated by `init_custom`, and the embedded
/// defaults are covered by tests, so parsing cannot fail here; the
/// compiled-in defaults are used if it somehow does.
pub fn settings() -> &'static Settings {
    static INSTANCE: OnceLock<Settings> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_SETTINGS_TOML);
        parse_settings_toml(toml_str).unwrap_or_default()
    })
}

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    pub candidates: CandidateSettings,
    pub ledger: LedgerSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CandidateSettings {
    pub page_size: usize,
}

impl Default for CandidateSettings {
    fn default() -> Self {
        Self {
            page_size: crate::pager::DEFAULT_PAGE_SIZE,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LedgerSettings {
    pub max_tracked: usize,
}

impl Default for LedgerSettings {
    fn default() -> Self {
        Self {
            max_tracked: crate::ledger::DEFAULT_MAX_TRACKED,
        }
    }
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    macro_rules! check_positive {
        ($section:ident . $field:ident) => {
            if s.$section.$field == 0 {
                return Err(SettingsError::InvalidValue {
                    field: concat!(stringify!($section), ".", stringify!($field)).to_string(),
                    reason: "must be positive".to_string(),
                });
            }
        };
    }

    check_positive!(candidates.page_size);
    check_positive!(ledger.max_tracked);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_parse() {
        let s = parse_settings_toml(DEFAULT_SETTINGS_TOML).unwrap();
        assert_eq!(s.candidates.page_size, 10);
        assert_eq!(s.ledger.max_tracked, 128);
    }

    #[test]
    fn test_defaults_match_embedded_toml() {
        let parsed = parse_settings_toml(DEFAULT_SETTINGS_TOML).unwrap();
        let fallback = Settings::default();
        assert_eq!(parsed.candidates.page_size, fallback.candidates.page_size);
        assert_eq!(parsed.ledger.max_tracked, fallback.ledger.max_tracked);
    }

    #[test]
    fn test_settings_singleton() {
        let s = settings();
        assert!(s.candidates.page_size > 0);
        assert!(s.ledger.max_tracked > 0);
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let toml = "[candidates]\npage_size = 0\n[ledger]\nmax_tracked = 128\n";
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(
            matches!(err, SettingsError::InvalidValue { ref field, .. } if field == "candidates.page_size")
        );
    }

    #[test]
    fn test_zero_max_tracked_rejected() {
        let toml = "[candidates]\npage_size = 5\n[ledger]\nmax_tracked = 0\n";
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(
            matches!(err, SettingsError::InvalidValue { ref field, .. } if field == "ledger.max_tracked")
        );
    }

    #[test]
    fn test_missing_section_rejected() {
        let err = parse_settings_toml("[candidates]\npage_size = 5\n").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn test_invalid_toml() {
        let err = parse_settings_toml("not valid toml {{{").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }
}
