//! Placeholder extraction
//!
//! Scans a prompt body for `{name}` / `{name: a|b}` placeholders and
//! collects the distinct variables with their optional choice lists.

use super::pattern::PLACEHOLDER;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One distinct placeholder found in a prompt body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceholderSpec {
    /// Identifier inside the braces
    pub name: String,
    /// Enumerated options after the colon, empty for free-text placeholders
    pub choices: Vec<String>,
}

impl PlaceholderSpec {
    /// Create a free-text placeholder spec
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            choices: Vec::new(),
        }
    }

    /// Create a spec with enumerated choices
    pub fn with_choices(name: impl Into<String>, choices: Vec<String>) -> Self {
        Self {
            name: name.into(),
            choices,
        }
    }

    /// Whether this placeholder enumerates choices
    pub fn has_choices(&self) -> bool {
        !self.choices.is_empty()
    }
}

/// Extract the distinct placeholders from `body`, in order of first
/// appearance.
///
/// When a name occurs more than once, the choice list of the last
/// occurrence wins. Choice items are taken verbatim, without trimming.
pub fn extract(body: &str) -> Vec<PlaceholderSpec> {
    let mut specs: Vec<PlaceholderSpec> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for caps in PLACEHOLDER.captures_iter(body) {
        let name = &caps[1];
        let choices: Vec<String> = match caps.get(2) {
            Some(blob) if !blob.as_str().is_empty() => {
                blob.as_str().split('|').map(str::to_string).collect()
            }
            _ => Vec::new(),
        };

        match index.get(name) {
            Some(&i) => specs[i].choices = choices,
            None => {
                index.insert(name.to_string(), specs.len());
                specs.push(PlaceholderSpec::with_choices(name, choices));
            }
        }
    }

    specs
}

/// Check whether `body` contains at least one placeholder
pub fn has_placeholders(body: &str) -> bool {
    PLACEHOLDER.is_match(body)
}
