//! Common assertion helpers for test output validation

#![allow(dead_code)]

use predicates::prelude::*;

/// Creates a predicate that checks for the error prefix printed on failure
pub fn has_error_prefix() -> impl Predicate<str> {
    predicates::str::contains("✕ Error:")
}

/// Creates a predicate that checks for selection validation failures
pub fn invalid_selection() -> impl Predicate<str> {
    predicates::str::contains("Invalid line selection")
}

/// Creates a predicate that checks for failures reported by the TfL API
pub fn upstream_error() -> impl Predicate<str> {
    predicates::str::contains("Upstream error")
}

/// Creates a predicate that checks for missing credential failures
pub fn missing_credentials() -> impl Predicate<str> {
    predicates::str::contains("Missing TfL credentials")
}

/// Counts status bullets in rendered output
pub fn bullet_count(text: &str) -> usize {
    text.matches('⦿').count()
}
