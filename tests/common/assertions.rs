//! Assertion helpers for CLI output validation

#![allow(dead_code)]

use predicates::prelude::*;

/// Creates a predicate that checks for the repository error message
pub fn not_in_git_repo() -> impl Predicate<str> {
    predicates::str::contains("Not in a git repository")
}

/// Creates a predicate that checks for an object lookup failure
pub fn object_not_found() -> impl Predicate<str> {
    predicates::str::contains("Object not found")
}

/// Creates a predicate that checks for a JSON boolean field
pub fn has_json_flag(field: &str, value: bool) -> impl Predicate<str> {
    predicates::str::contains(format!("\"{field}\": {value}"))
}

/// Creates a predicate that checks for a JSON string field
pub fn has_json_string(field: &str, value: &str) -> impl Predicate<str> {
    predicates::str::contains(format!("\"{field}\": \"{value}\""))
}
