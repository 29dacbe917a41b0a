//! Error types for Promptdeck

use thiserror::Error;

/// Result type alias for Promptdeck operations
pub type PromptResult<T> = Result<T, PromptError>;

/// Main error type for Promptdeck
///
/// The template engine itself is total: malformed placeholder syntax and
/// missing bindings degrade to literal pass-through text. Errors only arise
/// from the checked entry points.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PromptError {
    /// A placeholder in the body has no value in the supplied bindings
    #[error("Missing binding for placeholder: {0}")]
    MissingBinding(String),

    /// No prompt registered under the requested key
    #[error("Unknown prompt: {0}")]
    UnknownPrompt(String),
}

impl PromptError {
    /// Create a new missing-binding error
    pub fn missing_binding(name: impl Into<String>) -> Self {
        Self::MissingBinding(name.into())
    }

    /// Create a new unknown-prompt error
    pub fn unknown_prompt(key: impl Into<String>) -> Self {
        Self::UnknownPrompt(key.into())
    }
}
