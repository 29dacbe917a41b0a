//! Shared placeholder pattern
//!
//! Extraction and substitution must agree on what counts as a placeholder,
//! so both operate on this single compiled pattern.

use regex::Regex;
use std::sync::LazyLock;

/// Placeholder pattern: `{name}` or `{name: choice1|choice2}`.
///
/// Capture 1 is the name (word characters). Capture 2, when present, is the
/// choices blob after the colon with leading whitespace stripped; it may be
/// empty, in which case the placeholder behaves like the no-colon form.
/// Anything the pattern does not match (lone braces, nested braces) is
/// literal text.
pub static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{(\w+)(?::\s*([^}]*))?\}").unwrap());
