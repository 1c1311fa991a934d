#![deny(missing_docs)]

//! # Naming Utilities
//!
//! Slug and ordering helpers shared by the tag grouper, the webhook extractor
//! and the navigation builder.

use regex::Regex;
use std::cmp::Ordering;
use std::sync::OnceLock;

/// Produces a URL/anchor-safe token.
///
/// The input is lowercased, every run of non-alphanumeric characters collapses
/// into a single `-`, and separators at either end are trimmed.
///
/// e.g. `/users/{id}` -> `users-id`, `listWidgets` -> `listwidgets`
pub fn slug(s: &str) -> String {
    static SEPARATOR_RE: OnceLock<Regex> = OnceLock::new();
    let separator_re =
        SEPARATOR_RE.get_or_init(|| Regex::new(r"[^\p{L}\p{N}]+").expect("Invalid regex"));

    let lowered = s.to_lowercase();
    separator_re
        .replace_all(&lowered, "-")
        .trim_matches('-')
        .to_string()
}

/// Compares two strings the way a human-facing list is expected to be sorted.
///
/// Letters compare case-insensitively first, with whitespace and punctuation
/// ranked before digits and digits before letters. Strings equal under that
/// view are ordered lowercase-first, and byte order settles anything left so
/// the result is a total order.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    primary_weights(a)
        .cmp(primary_weights(b))
        .then_with(|| case_weights(a).cmp(case_weights(b)))
        .then_with(|| a.cmp(b))
}

fn primary_weights(s: &str) -> impl Iterator<Item = (u8, char)> + '_ {
    s.chars()
        .flat_map(char::to_lowercase)
        .map(|c| (char_class(c), c))
}

fn case_weights(s: &str) -> impl Iterator<Item = bool> + '_ {
    s.chars().map(char::is_uppercase)
}

fn char_class(c: char) -> u8 {
    if c.is_whitespace() {
        0
    } else if c.is_numeric() {
        2
    } else if c.is_alphabetic() {
        3
    } else {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug() {
        assert_eq!(slug("/items"), "items");
        assert_eq!(slug("listWidgets"), "listwidgets");
        assert_eq!(slug("GET"), "get");
        assert_eq!(slug("/users/{id}/activate"), "users-id-activate");
        assert_eq!(slug("Pets & Owners"), "pets-owners");
        assert_eq!(slug("v2.1_release"), "v2-1-release");
        assert_eq!(slug("--"), "");
    }

    #[test]
    fn test_locale_compare_ignores_case_first() {
        assert_eq!(locale_compare("alpha", "Beta"), Ordering::Less);
        assert_eq!(locale_compare("Zeta", "alpha"), Ordering::Greater);
        assert_eq!(locale_compare("a", "A"), Ordering::Less);
        assert_eq!(locale_compare("same", "same"), Ordering::Equal);
    }

    #[test]
    fn test_locale_compare_classes() {
        assert_eq!(locale_compare("/items", "items"), Ordering::Less);
        assert_eq!(locale_compare("2fa", "auth"), Ordering::Less);
        assert_eq!(locale_compare("/items (GET)", "/items (POST)"), Ordering::Less);
        assert_eq!(locale_compare("item", "items"), Ordering::Less);
    }

    #[test]
    fn test_locale_compare_sorts_stably() {
        let mut names = vec!["pets", "Store", "user", "Admin", "admin"];
        names.sort_by(|a, b| locale_compare(a, b));
        assert_eq!(names, vec!["admin", "Admin", "pets", "Store", "user"]);
    }
}
