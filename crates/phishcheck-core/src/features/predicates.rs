//! Individual feature measurements.
//!
//! Each function looks at one thing: the raw URL, its lowercased form, or a
//! parsed component. Digit and word classes are Unicode-aware.

use regex::Regex;
use std::sync::LazyLock;

static LEADING_IPV4_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://\d+\.\d+\.\d+\.\d+").unwrap());

static DIGIT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d").unwrap());

/// Word characters are letters, numbers (any `N` category) and `_`. Combining
/// marks and connector punctuation other than `_` are not word characters.
static SPECIAL_CHAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\p{L}\p{N}_\-]").unwrap());

/// Raw prefix length skipped by [`has_double_slash_after_scheme`], the length of `https://`.
const SCHEME_PREFIX_CHARS: usize = 8;

/// Length in Unicode scalar values.
pub fn char_length(s: &str) -> u64 {
    s.chars().count() as u64
}

pub fn count_char(s: &str, needle: char) -> u64 {
    s.chars().filter(|&c| c == needle).count() as u64
}

/// Substring test against an already-lowercased URL.
pub fn contains_keyword(lowered: &str, keyword: &str) -> bool {
    lowered.contains(keyword)
}

/// Three or more dots in the domain.
pub fn has_deep_subdomains(domain: &str) -> bool {
    count_char(domain, '.') >= 3
}

pub fn has_digit(s: &str) -> bool {
    DIGIT_RE.is_match(s)
}

/// `http://` or `https://` immediately followed by a dotted quad of digit runs.
pub fn starts_with_ipv4(url: &str) -> bool {
    LEADING_IPV4_RE.is_match(url)
}

/// `//` anywhere after the first eight characters.
///
/// This is a fixed offset, not a parsed property: short or scheme-relative
/// URLs are measured the same way.
pub fn has_double_slash_after_scheme(url: &str) -> bool {
    match url.char_indices().nth(SCHEME_PREFIX_CHARS) {
        Some((offset, _)) => url[offset..].contains("//"),
        None => false,
    }
}

/// Any character that is neither a word character nor `-`.
pub fn has_special_character(url: &str) -> bool {
    SPECIAL_CHAR_RE.is_match(url)
}

pub fn is_http_only(lowered: &str) -> bool {
    lowered.starts_with("http://")
}

pub fn ends_with_literal(domain: &str, suffix: &str) -> bool {
    domain.ends_with(suffix)
}
