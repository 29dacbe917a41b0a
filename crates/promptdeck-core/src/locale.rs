//! Locale support
//!
//! The prompt catalog carries English and German variants of every
//! user-facing string. `LocalizedText` pairs the two; lookup falls back to
//! English when a translation is empty.

use serde::{Deserialize, Serialize};

/// Supported display languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English (the default/authoring language)
    #[default]
    En,
    /// German
    De,
}

impl Locale {
    /// All supported locales, default first
    pub const ALL: [Locale; 2] = [Locale::En, Locale::De];

    /// The label used for the free-text fallback option in choice fields
    pub fn other_label(self) -> &'static str {
        match self {
            Locale::En => "Other",
            Locale::De => "Andere",
        }
    }
}

/// A string with per-locale variants
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedText {
    pub en: String,
    pub de: String,
}

impl LocalizedText {
    /// Create with both variants
    pub fn new(en: impl Into<String>, de: impl Into<String>) -> Self {
        Self {
            en: en.into(),
            de: de.into(),
        }
    }

    /// Create from English only; German falls back to English on lookup
    pub fn english(en: impl Into<String>) -> Self {
        Self {
            en: en.into(),
            de: String::new(),
        }
    }

    /// Get the variant for a locale, falling back to English when the
    /// translation is empty
    pub fn get(&self, locale: Locale) -> &str {
        let text = match locale {
            Locale::En => &self.en,
            Locale::De => &self.de,
        };
        if text.is_empty() { &self.en } else { text }
    }
}
