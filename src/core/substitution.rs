// src/core/substitution.rs

//! Expansion of `$(name)` references.
//!
//! The scan is deliberately permissive: anything between `$(` and the next `)`
//! is taken as a name, even if it is not a valid identifier. Names that do not
//! resolve are left in place untouched, so a half-typed form never fails.

use lazy_static::lazy_static;
use regex::{Captures, Regex};
use std::collections::HashMap;

use crate::core::commons::quote_if_needed;

lazy_static! {
    static ref REFERENCE_RE: Regex = Regex::new(r"\$\(([^)]+)\)").expect("valid regex");
}

/// Read access to variable values by name.
pub trait VariableLookup {
    fn lookup(&self, name: &str) -> Option<&str>;
}

impl VariableLookup for HashMap<String, String> {
    fn lookup(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

impl<T: VariableLookup + ?Sized> VariableLookup for &T {
    fn lookup(&self, name: &str) -> Option<&str> {
        (**self).lookup(name)
    }
}

/// Replaces every `$(name)` in `text` with the current value of `name`.
///
/// A value containing whitespace is wrapped in double quotes unless it is
/// already quoted. Unknown names keep their literal `$(name)` form. Values are
/// read on every call; nothing is cached.
pub fn substitute(text: &str, variables: &impl VariableLookup) -> String {
    if !text.contains("$(") {
        return text.to_string();
    }

    REFERENCE_RE
        .replace_all(text, |caps: &Captures<'_>| {
            let full_match = caps.get(0).map_or("", |m| m.as_str());
            let name = caps.get(1).map_or("", |m| m.as_str());
            match variables.lookup(name) {
                Some(value) => quote_if_needed(value),
                None => {
                    log::debug!("Variable '{}' is not defined; keeping '{}'.", name, full_match);
                    full_match.to_string()
                }
            }
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_text_without_references_is_identity() {
        let v = vars(&[("a", "1")]);
        for s in ["", "plain", "$ (a)", "$a", "(a)", "$(", "a)b", "$(unterminated"] {
            assert_eq!(substitute(s, &v), s);
        }
    }

    #[test]
    fn test_simple_value_is_not_quoted() {
        let v = vars(&[("default_host", "localhost")]);
        assert_eq!(substitute("$(default_host)", &v), "localhost");
    }

    #[test]
    fn test_value_with_space_is_quoted() {
        let v = vars(&[("path", r"C:\Program Files\1C\rac.exe")]);
        assert_eq!(
            substitute("$(path)", &v),
            r#""C:\Program Files\1C\rac.exe""#
        );
    }

    #[test]
    fn test_already_quoted_value_is_kept() {
        let v = vars(&[("q", "\"a b\"")]);
        assert_eq!(substitute("$(q)", &v), "\"a b\"");
    }

    #[test]
    fn test_unknown_reference_is_left_untouched() {
        let v = vars(&[("known", "x")]);
        assert_eq!(substitute("$(unknown)-$(known)", &v), "$(unknown)-x");
    }

    #[test]
    fn test_malformed_name_is_looked_up_verbatim() {
        let v = vars(&[("a b", "spaced")]);
        assert_eq!(substitute("$(a b)", &v), "spaced");
        assert_eq!(substitute("$(c d)", &v), "$(c d)");
    }

    #[test]
    fn test_multiple_and_embedded_references() {
        let v = vars(&[("host", "srv1"), ("port", "1541")]);
        assert_eq!(substitute("$(host):$(port)", &v), "srv1:1541");
        assert_eq!(substitute("pre-$(host)-post", &v), "pre-srv1-post");
    }

    #[test]
    fn test_empty_value_substitutes_empty() {
        let v = vars(&[("empty", "")]);
        assert_eq!(substitute("[$(empty)]", &v), "[]");
    }

    #[test]
    fn test_values_are_not_expanded_recursively() {
        let v = vars(&[("a", "$(b)"), ("b", "x")]);
        assert_eq!(substitute("$(a)", &v), "$(b)");
    }
}
