//! Template engine
//!
//! Parses `{name}` and `{name: option1|option2}` placeholders out of a
//! prompt body and substitutes caller-supplied values back in, producing a
//! plain rendering and a Markdown-annotated one.
//!
//! # Example
//!
//! ```rust,ignore
//! use promptdeck_core::engine::{extract, substitute, Bindings};
//!
//! let body = "Write a {length: short|long} post about {topic}.";
//! let specs = extract(body);
//! assert_eq!(specs.len(), 2);
//!
//! let bindings = Bindings::new().with("length", "short").with("topic", "Rust");
//! let result = substitute(body, &bindings);
//! assert_eq!(result.plain, "Write a short post about Rust.");
//! ```

mod extract;
mod pattern;
mod substitute;

pub use extract::{extract, has_placeholders, PlaceholderSpec};
pub use substitute::{substitute, substitute_checked, Bindings, RenderResult};
