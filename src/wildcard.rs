//! Wildcard pattern translation between the two escaping conventions used by
//! legacy desktop-database drivers.
//!
//! The legacy convention uses `*` (any sequence), `?` (any single character),
//! `#` (any digit) and `!` as class negation, with literal wildcards escaped
//! by bracket-wrapping (`[*]`, `[?]`, `[#]`, `[!]`). The driver's ANSI-mode
//! operator instead expects `%`, `_`, `[0-9]` and `^`, with literal `%`/`_`
//! escaped as `[%]`/`[_]`.
//!
//! Translation is one-directional (legacy to ANSI) and runs as three ordered
//! passes. Each pass's regex puts bracket groups first in its alternation, so
//! text escaped by an earlier pass is never re-matched by a later rule.

use std::sync::OnceLock;

use regex::{Captures, Regex};

/// Matches a bracket group, or a bare `%` / `_` that needs escaping.
fn escape_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\[[^\]]*\]|[%_]").expect("invalid built-in wildcard regex"))
}

/// Matches a bracket group, or a bare legacy wildcard.
fn remap_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\[[^\]]*\]|[*?#]").expect("invalid built-in wildcard regex"))
}

/// Matches a single-character legacy escape group.
fn unwrap_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\[([*?#!])\]").expect("invalid built-in wildcard regex"))
}

/// True for the four single-character escape groups of the legacy convention.
fn is_legacy_escape(group: &str) -> bool {
    matches!(group, "[*]" | "[?]" | "[#]" | "[!]")
}

/// Translate a legacy wildcard pattern into the ANSI-mode convention.
///
/// Pure and deterministic; not invertible (both `*` and an escaped `[%]`
/// input can end up as `%`-family output).
pub fn translate_pattern(pattern: &str) -> String {
    // Pass 1: bare % and _ are literals in the legacy convention; escape them
    // so the remap pass leaves them alone.
    let escaped = escape_re().replace_all(pattern, |caps: &Captures| {
        let m = &caps[0];
        if m.starts_with('[') {
            m.to_string()
        } else {
            format!("[{}]", m)
        }
    });

    // Pass 2: rewrite bare legacy wildcards; inside a real character class a
    // leading ! becomes ^. Escape groups pass through untouched.
    let remapped = remap_re().replace_all(&escaped, |caps: &Captures| {
        let m = &caps[0];
        if m.starts_with('[') {
            if is_legacy_escape(m) {
                m.to_string()
            } else if let Some(rest) = m.strip_prefix("[!") {
                format!("[^{}", rest)
            } else {
                m.to_string()
            }
        } else {
            match m {
                "*" => "%".to_string(),
                "?" => "_".to_string(),
                _ => "[0-9]".to_string(),
            }
        }
    });

    // Pass 3: the remaining legacy escape groups are unambiguous now; unwrap
    // them to their bare characters.
    unwrap_re().replace_all(&remapped, "$1").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_any_sequence_and_escaped_star() {
        assert_eq!(translate_pattern("Search*Term[*]"), "Search%Term*");
    }

    #[test]
    fn test_literal_percent_gets_escaped() {
        assert_eq!(translate_pattern("Search*Term%"), "Search%Term[%]");
    }

    #[test]
    fn test_digit_wildcard() {
        assert_eq!(translate_pattern("*#*"), "%[0-9]%");
    }

    #[test]
    fn test_single_char_wildcards() {
        assert_eq!(translate_pattern("H??p"), "H__p");
    }

    #[test]
    fn test_escaped_question_mark() {
        assert_eq!(translate_pattern("H?[?]p"), "H_?p");
    }

    #[test]
    fn test_negated_class() {
        assert_eq!(translate_pattern("[!3-9]"), "[^3-9]");
    }

    #[test]
    fn test_adjacent_wildcards() {
        assert_eq!(translate_pattern("**??##"), "%%__[0-9][0-9]");
    }

    #[test]
    fn test_escaped_bang_is_a_literal() {
        assert_eq!(translate_pattern("Hey[!]"), "Hey!");
    }

    #[test]
    fn test_literal_underscore() {
        assert_eq!(translate_pattern("user_name*"), "user[_]name%");
    }

    #[test]
    fn test_already_escaped_percent_is_untouched() {
        assert_eq!(translate_pattern("100[%]"), "100[%]");
    }

    #[test]
    fn test_plain_class_passes_through() {
        assert_eq!(translate_pattern("[a-f]*"), "[a-f]%");
    }

    #[test]
    fn test_empty_pattern() {
        assert_eq!(translate_pattern(""), "");
    }
}
