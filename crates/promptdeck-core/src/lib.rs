//! Promptdeck Core Library
//!
//! A library of reusable text prompts with named variable slots. The core
//! is the template engine: it parses `{name}` and `{name: option1|option2}`
//! placeholders out of a prompt body, describes the input form for them,
//! and substitutes caller-supplied values back in, producing a plain string
//! and a Markdown-annotated one.
//!
//! # Example
//!
//! ```rust,ignore
//! use promptdeck_core::{extract, substitute, Bindings};
//!
//! let body = "Hello {name}, welcome to {place}!";
//! let specs = extract(body);
//! assert_eq!(specs.len(), 2);
//!
//! let bindings = Bindings::new().with("name", "Alice").with("place", "Promptdeck");
//! let result = substitute(body, &bindings);
//! assert_eq!(result.plain, "Hello Alice, welcome to Promptdeck!");
//! ```

pub mod engine;
pub mod error;
pub mod form;
pub mod library;
pub mod locale;

// Re-export commonly used types
pub use engine::{
    extract, has_placeholders, substitute, substitute_checked, Bindings, PlaceholderSpec,
    RenderResult,
};
pub use error::{PromptError, PromptResult};
pub use form::{fields, FieldControl, InputField};
pub use library::{Category, Prompt, PromptLibrary, PromptListing};
pub use locale::{Locale, LocalizedText};
