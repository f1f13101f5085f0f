//! Glob-style test name matching.
//!
//! Patterns use `*` (any run of characters) and `?` (exactly one
//! character); matching is case-insensitive and unanchored, so a bare
//! word behaves like a substring search. A pattern that fails to compile
//! degrades to literal substring containment rather than erroring.

use regex::{Regex, RegexBuilder};

use crate::errors::MtError;
use crate::registry::SUITE_NAME;

/// True when `pattern` matches `name`. The empty pattern matches
/// everything.
pub fn matches(pattern: &str, name: &str) -> bool {
    if pattern.is_empty() {
        return true;
    }
    match compile(pattern) {
        Ok(re) => re.is_match(name),
        Err(_) => name.contains(pattern),
    }
}

/// True when `pattern` selects the test under either its bare name or
/// the composite `<suite>.<name>` form used by gtest-driven CI tooling.
pub fn selects(pattern: &str, name: &str) -> bool {
    matches(pattern, name) || matches(pattern, &format!("{SUITE_NAME}.{name}"))
}

/// Translates the glob into an unanchored, case-insensitive regex.
fn compile(pattern: &str) -> Result<Regex, MtError> {
    let mut translated = String::with_capacity(pattern.len() * 2);
    for ch in pattern.chars() {
        match ch {
            '*' => translated.push_str(".*"),
            '?' => translated.push('.'),
            '.' | '+' | '(' | ')' | '[' | ']' | '{' | '}' | '|' | '^' | '$' | '\\' => {
                translated.push('\\');
                translated.push(ch);
            }
            _ => translated.push(ch),
        }
    }
    let re = RegexBuilder::new(&translated)
        .case_insensitive(true)
        .build()?;
    Ok(re)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_pattern_matches_everything() {
        assert!(matches("", "Math works"));
        assert!(matches("", ""));
    }

    #[test]
    fn star_matches_everything() {
        assert!(matches("*", "Math works"));
        assert!(matches("*", "x"));
    }

    #[test]
    fn bare_word_is_a_substring_match() {
        assert!(matches("Foo", "FooBar"));
        assert!(matches("oBa", "FooBar"));
        assert!(!matches("Baz", "FooBar"));
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert!(matches("foo", "FOOBAR"));
        assert!(matches("MATH*", "Math works"));
    }

    #[test]
    fn star_spans_arbitrary_text() {
        assert!(matches("Math*", "Math works"));
        assert!(!matches("Math*", "Vector matcher"));
        assert!(matches("M*works", "Math works"));
    }

    #[test]
    fn question_mark_matches_one_character() {
        assert!(matches("Ma?h", "Math works"));
        assert!(!matches("Ma?th", "Math works"));
    }

    #[test]
    fn regex_metacharacters_are_literal() {
        assert!(matches("a+b", "xa+by"));
        assert!(!matches("a+b", "aab"));
        assert!(matches("v[0]", "check v[0] bounds"));
        assert!(matches("(edge)", "an (edge) case"));
    }

    #[test]
    fn suite_qualified_names_are_selectable() {
        assert!(selects("mtest.Math*", "Math works"));
        assert!(selects("mtest.*", "anything at all"));
        assert!(!selects("othersuite.*", "Math works"));
    }
}
