//! Owner handles
//!
//! Ownership annotations carry one or more handles (`@user`, `@org/team`).
//! Tokens that do not look like handles are skipped rather than rejected,
//! so prose after the handles does not break the annotation.

use std::collections::HashSet;

use crate::annotation::Annotation;
use crate::error::{Result, ScanError};

/// Default annotation key for ownership
pub const DEFAULT_OWNER_KEY: &str = "CodeOwner";

/// Check that a handle is `@` followed by letters, digits, `-`, `_` or `/`
pub fn is_valid_owner(token: &str) -> bool {
    token.len() >= 2
        && token.starts_with('@')
        && token
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '@' | '-' | '_' | '/'))
}

/// Owners named by annotations with `key`, deduplicated in order of first
/// appearance
pub fn owners_from_annotations(annotations: &[Annotation], key: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut owners = Vec::new();

    for annotation in annotations.iter().filter(|a| a.key == key) {
        for token in annotation.value.split_whitespace() {
            push_unique(&mut seen, &mut owners, token);
        }
    }

    owners
}

/// Handles from a whitespace-separated owner list such as a directory-level
/// ownership file; invalid tokens are skipped
pub fn parse_owner_list(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut owners = Vec::new();

    for token in text.split_whitespace() {
        push_unique(&mut seen, &mut owners, token);
    }

    owners
}

/// Parse a required owner list where every token must be a valid handle
pub fn parse_protect(text: &str) -> Result<Vec<String>> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    if tokens.is_empty() {
        return Err(ScanError::InvalidOwner {
            token: String::new(),
            reason: "at least one owner is required".to_string(),
        });
    }

    for token in &tokens {
        if !token.starts_with('@') {
            return Err(ScanError::InvalidOwner {
                token: token.to_string(),
                reason: "must start with @".to_string(),
            });
        }
        if !is_valid_owner(token) {
            return Err(ScanError::InvalidOwner {
                token: token.to_string(),
                reason: "contains invalid characters".to_string(),
            });
        }
    }

    Ok(parse_owner_list(text))
}

fn push_unique(seen: &mut HashSet<String>, owners: &mut Vec<String>, token: &str) {
    if is_valid_owner(token) && seen.insert(token.to_string()) {
        owners.push(token.to_string());
    }
}
