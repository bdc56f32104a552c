//! Supported reading languages.
//!
//! The supported set is closed: `ko`, `en`, `zh`, `ja`, `es`. Any other
//! code normalizes to the Korean default at parse time. Partial template
//! subtables (zodiac fortunes, placeholder messages) apply their own
//! per-lookup fallback on top of this; see [`crate::templates`].

use serde::{Deserialize, Serialize};

/// A supported reading language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Ko,
    En,
    Zh,
    Ja,
    Es,
}

impl Language {
    /// Every supported language, in table order.
    pub const ALL: [Language; 5] = [
        Language::Ko,
        Language::En,
        Language::Zh,
        Language::Ja,
        Language::Es,
    ];

    /// The two-letter code for this language.
    pub fn code(self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
            Language::Zh => "zh",
            Language::Ja => "ja",
            Language::Es => "es",
        }
    }

    /// Parse a language code, returning `None` for unsupported codes.
    pub fn parse(code: &str) -> Option<Language> {
        match code {
            "ko" => Some(Language::Ko),
            "en" => Some(Language::En),
            "zh" => Some(Language::Zh),
            "ja" => Some(Language::Ja),
            "es" => Some(Language::Es),
            _ => None,
        }
    }

    /// Parse a language code, silently normalizing unsupported codes to
    /// the Korean default.
    pub fn parse_or_default(code: &str) -> Language {
        Language::parse(code).unwrap_or_default()
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::Ko
    }
}
