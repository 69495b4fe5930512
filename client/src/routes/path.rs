//! Path validation, normalization, and matching.
//!
//! Matching is non-strict and case-sensitive by default, the way
//! `leptos_router` compares static segments: a single trailing slash is
//! optional and letters must match exactly. Query strings and fragments never
//! take part in matching.

#[cfg(test)]
#[path = "path_test.rs"]
mod path_test;

use super::RouteError;

/// Knobs controlling how requested paths compare against route patterns.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MatchOptions {
    /// Require the trailing slash to match exactly.
    pub strict: bool,
    /// Compare letters case-sensitively.
    pub sensitive: bool,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self { strict: false, sensitive: true }
    }
}

/// Drop everything from the first `?` or `#` onward.
pub fn strip_query_and_fragment(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    &path[..end]
}

/// Canonical form used as the comparison key for `path`.
pub fn normalize(path: &str, options: MatchOptions) -> String {
    let mut key = strip_query_and_fragment(path);
    if key.is_empty() {
        key = "/";
    }
    if !options.strict && key.len() > 1 {
        key = key.strip_suffix('/').unwrap_or(key);
    }
    if options.sensitive {
        key.to_owned()
    } else {
        key.to_lowercase()
    }
}

/// Whether `requested` addresses the route declared as `pattern`.
pub fn matches(pattern: &str, requested: &str, options: MatchOptions) -> bool {
    normalize(pattern, options) == normalize(requested, options)
}

/// Check that a declared route path is well formed.
///
/// # Errors
///
/// Returns [`RouteError`] when the path is empty, lacks a leading `/`, or
/// contains whitespace, `?`, or `#`.
pub fn validate(path: &str) -> Result<(), RouteError> {
    if path.is_empty() {
        return Err(RouteError::EmptyPath);
    }
    if !path.starts_with('/') {
        return Err(RouteError::MissingLeadingSlash { path: path.to_owned() });
    }
    if let Some(ch) = path.chars().find(|c| c.is_whitespace() || matches!(c, '?' | '#')) {
        return Err(RouteError::InvalidCharacter { path: path.to_owned(), ch });
    }
    Ok(())
}
