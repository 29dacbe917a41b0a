//! Placeholder substitution
//!
//! Replaces bound placeholders in a prompt body, producing both a plain
//! string and a Markdown-annotated string in one pass over the raw body.

use super::extract::extract;
use super::pattern::PLACEHOLDER;
use crate::error::{PromptError, PromptResult};
use crate::locale::Locale;
use regex::Captures;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Marker wrapped around substituted values in the annotated rendering
const HIGHLIGHT: &str = "**";

/// Hard line break in the annotated rendering (Markdown convention)
const HARD_BREAK: &str = "  \n";

/// Values supplied by the caller for named placeholders
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bindings {
    values: HashMap<String, String>,
}

impl Bindings {
    /// Create an empty set of bindings
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a value to a placeholder name
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    /// Builder-style [`insert`](Self::insert)
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    /// Bind the outcome of a choice-field selection.
    ///
    /// When `selected` is the locale's "Other" label the free-text `custom`
    /// value is bound instead. This keeps sentinel resolution on the caller
    /// side; [`substitute`] only ever sees the final value.
    pub fn insert_selection(
        &mut self,
        name: impl Into<String>,
        selected: &str,
        custom: &str,
        locale: Locale,
    ) {
        let value = if selected == locale.other_label() {
            custom
        } else {
            selected
        };
        self.values.insert(name.into(), value.to_string());
    }

    /// Look up the value bound to a name
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Whether a name has a binding
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Number of bound names
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no names are bound
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Bindings {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl From<HashMap<String, String>> for Bindings {
    fn from(values: HashMap<String, String>) -> Self {
        Self { values }
    }
}

/// The two renderings produced by [`substitute`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderResult {
    /// Substituted body with raw values
    pub plain: String,
    /// Substituted body with highlighted values and hard line breaks
    pub annotated: String,
}

/// Substitute bound values into every placeholder occurrence of `body`.
///
/// The raw body is re-scanned, so repeated occurrences of one name are each
/// replaced. Names without a binding pass through unchanged in both
/// renderings. The annotated rendering wraps each substituted value in
/// `**…**` and turns every newline into a Markdown hard break; the plain
/// rendering is the body with raw values and untouched newlines.
pub fn substitute(body: &str, bindings: &Bindings) -> RenderResult {
    let plain = PLACEHOLDER.replace_all(body, |caps: &Captures| {
        match bindings.get(&caps[1]) {
            Some(value) => value.to_string(),
            None => caps[0].to_string(),
        }
    });

    let annotated = PLACEHOLDER.replace_all(body, |caps: &Captures| {
        match bindings.get(&caps[1]) {
            Some(value) => format!("{HIGHLIGHT}{value}{HIGHLIGHT}"),
            None => caps[0].to_string(),
        }
    });

    RenderResult {
        plain: plain.into_owned(),
        annotated: annotated.replace('\n', HARD_BREAK),
    }
}

/// Validated variant of [`substitute`]: every placeholder in `body` must
/// have a binding.
pub fn substitute_checked(body: &str, bindings: &Bindings) -> PromptResult<RenderResult> {
    for spec in extract(body) {
        if !bindings.contains(&spec.name) {
            return Err(PromptError::MissingBinding(spec.name));
        }
    }
    Ok(substitute(body, bindings))
}
