//! Prompt library
//!
//! In-memory catalog of prompts organized into categories, with
//! locale-aware listing, name filtering, and render-by-key. Persistence is
//! the caller's concern; the library is a plain owned value.

use crate::engine::{substitute, Bindings, RenderResult};
use crate::error::{PromptError, PromptResult};
use crate::locale::{Locale, LocalizedText};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// A reusable prompt: localized name, description, and templated body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prompt {
    /// Stable lookup key, locale-independent
    pub key: String,
    pub name: LocalizedText,
    pub description: LocalizedText,
    /// Template body with `{name}` placeholders
    pub body: LocalizedText,
    /// Keys of the categories this prompt belongs to
    pub categories: Vec<String>,
}

impl Prompt {
    /// Create a prompt with empty description and no categories
    pub fn new(key: impl Into<String>, name: LocalizedText, body: LocalizedText) -> Self {
        Self {
            key: key.into(),
            name,
            description: LocalizedText::default(),
            body,
            categories: Vec::new(),
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: LocalizedText) -> Self {
        self.description = description;
        self
    }

    /// Add a category key
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.categories.push(category.into());
        self
    }
}

/// A prompt category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub key: String,
    pub name: LocalizedText,
}

impl Category {
    pub fn new(key: impl Into<String>, name: LocalizedText) -> Self {
        Self {
            key: key.into(),
            name,
        }
    }
}

/// One row of a library listing, resolved for a locale
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptListing<'a> {
    pub key: &'a str,
    pub name: &'a str,
    pub description: &'a str,
    pub body: &'a str,
}

/// In-memory catalog of prompts and categories
#[derive(Debug, Clone, Default)]
pub struct PromptLibrary {
    /// Prompts by key
    prompts: HashMap<String, Prompt>,
    /// Insertion order of prompt keys, for stable listings
    order: Vec<String>,
    /// Categories in insertion order
    categories: Vec<Category>,
}

impl PromptLibrary {
    /// Create an empty library
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a category
    pub fn add_category(&mut self, category: Category) {
        debug!(key = %category.key, "registering category");
        self.categories.push(category);
    }

    /// Register a prompt, replacing any previous prompt under the same key
    pub fn register(&mut self, prompt: Prompt) {
        debug!(key = %prompt.key, "registering prompt");
        let key = prompt.key.clone();
        if self.prompts.insert(key.clone(), prompt).is_none() {
            self.order.push(key);
        }
    }

    /// Get a prompt by key
    pub fn get(&self, key: &str) -> Option<&Prompt> {
        self.prompts.get(key)
    }

    /// Remove a prompt by key
    pub fn remove(&mut self, key: &str) -> Option<Prompt> {
        let removed = self.prompts.remove(key);
        if removed.is_some() {
            debug!(key = %key, "removed prompt");
            self.order.retain(|k| k != key);
        }
        removed
    }

    /// Registered categories, in insertion order
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// All prompts resolved for a locale, in registration order
    pub fn list(&self, locale: Locale) -> Vec<PromptListing<'_>> {
        self.order
            .iter()
            .filter_map(|key| self.prompts.get(key))
            .map(|p| Self::listing(p, locale))
            .collect()
    }

    /// Prompts in one category, resolved for a locale
    pub fn list_by_category(&self, category: &str, locale: Locale) -> Vec<PromptListing<'_>> {
        self.order
            .iter()
            .filter_map(|key| self.prompts.get(key))
            .filter(|p| p.categories.iter().any(|c| c == category))
            .map(|p| Self::listing(p, locale))
            .collect()
    }

    /// Prompts whose localized name contains `query`, case-insensitively
    pub fn filter(&self, query: &str, locale: Locale) -> Vec<PromptListing<'_>> {
        let query = query.to_lowercase();
        self.order
            .iter()
            .filter_map(|key| self.prompts.get(key))
            .filter(|p| p.name.get(locale).to_lowercase().contains(&query))
            .map(|p| Self::listing(p, locale))
            .collect()
    }

    /// Substitute `bindings` into the localized body of the prompt at `key`
    pub fn render(
        &self,
        key: &str,
        locale: Locale,
        bindings: &Bindings,
    ) -> PromptResult<RenderResult> {
        let prompt = self
            .prompts
            .get(key)
            .ok_or_else(|| PromptError::unknown_prompt(key))?;
        Ok(substitute(prompt.body.get(locale), bindings))
    }

    /// Number of registered prompts
    pub fn len(&self) -> usize {
        self.prompts.len()
    }

    /// Whether the library has no prompts
    pub fn is_empty(&self) -> bool {
        self.prompts.is_empty()
    }

    fn listing(prompt: &Prompt, locale: Locale) -> PromptListing<'_> {
        PromptListing {
            key: &prompt.key,
            name: prompt.name.get(locale),
            description: prompt.description.get(locale),
            body: prompt.body.get(locale),
        }
    }
}
