//! Input form model
//!
//! Turns extracted placeholders into a declarative description of the input
//! controls a frontend should render: a select for choice placeholders
//! (with a trailing locale-specific "Other" option for free-text entry) and
//! a plain text input otherwise. No rendering happens here.

use crate::engine::PlaceholderSpec;
use crate::locale::Locale;
use serde::{Deserialize, Serialize};

/// The control kind for one placeholder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldControl {
    /// Drop-down over the placeholder's choices plus the "Other" option
    Select { options: Vec<String> },
    /// Free-text input
    Text,
}

/// Form descriptor for one placeholder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputField {
    /// Placeholder name, the key to bind the entered value under
    pub name: String,
    /// Human-readable label derived from the name
    pub label: String,
    /// Which control to render
    pub control: FieldControl,
}

/// Build the form descriptors for a set of placeholders, in spec order.
///
/// Choice placeholders get the locale's "Other" label appended to their
/// options; selecting it signals free-text entry, resolved by
/// [`Bindings::insert_selection`](crate::engine::Bindings::insert_selection).
pub fn fields(specs: &[PlaceholderSpec], locale: Locale) -> Vec<InputField> {
    specs
        .iter()
        .map(|spec| {
            let control = if spec.has_choices() {
                let mut options = spec.choices.clone();
                options.push(locale.other_label().to_string());
                FieldControl::Select { options }
            } else {
                FieldControl::Text
            };
            InputField {
                name: spec.name.clone(),
                label: label(&spec.name),
                control,
            }
        })
        .collect()
}

/// Derive a display label from a placeholder name: underscores become
/// spaces, the first character is upper-cased.
fn label(name: &str) -> String {
    let spaced = name.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
