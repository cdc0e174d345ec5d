//! Best-effort URL decomposition.
//!
//! Splits an untrusted string into scheme, authority, path, query and fragment
//! using generic URL splitting rules. No normalization happens: components keep
//! their original case, userinfo and port stay in the domain, and percent
//! escapes are left alone. Anything that cannot be resolved comes back empty.

mod host;
mod split;

pub use host::is_valid_bracketed_host;
pub use split::{split_params, split_scheme};

/// Components of a URL as far as they could be resolved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedUrl {
    /// Lowercased scheme, or empty.
    pub scheme: String,
    /// Network location (authority), including userinfo and port.
    pub domain: String,
    /// Path with any trailing `;params` removed.
    pub path: String,
    pub query: String,
    pub fragment: String,
}

/// Leading bytes stripped before parsing (C0 controls and space).
fn is_c0_control_or_space(c: char) -> bool {
    c <= ' '
}

/// Decomposes `url` into its components. Never fails; malformed authorities
/// yield an all-empty [`ParsedUrl`].
///
/// # Examples
///
/// - `parse_url("https://a.example/x;p?q#f")` → domain `a.example`, path `/x`
/// - `parse_url("example.com/login")` → domain empty, path `example.com/login`
pub fn parse_url(url: &str) -> ParsedUrl {
    let cleaned: String = url
        .trim_start_matches(is_c0_control_or_space)
        .chars()
        .filter(|&c| !matches!(c, '\t' | '\r' | '\n'))
        .collect();

    let (scheme, mut rest) = split_scheme(&cleaned);

    let mut domain = "";
    if let Some(after) = rest.strip_prefix("//") {
        let end = after.find(|c: char| matches!(c, '/' | '?' | '#')).unwrap_or(after.len());
        domain = &after[..end];
        rest = &after[end..];
        if !authority_is_well_formed(domain) {
            tracing::trace!(url, "unparseable authority, using empty components");
            return ParsedUrl::default();
        }
    }

    let (rest, fragment) = rest.split_once('#').unwrap_or((rest, ""));
    let (rest, query) = rest.split_once('?').unwrap_or((rest, ""));

    let path = if scheme_uses_params(&scheme) {
        split_params(rest).0
    } else {
        rest
    };

    ParsedUrl {
        domain: domain.to_string(),
        path: path.to_string(),
        query: query.to_string(),
        fragment: fragment.to_string(),
        scheme,
    }
}

/// Bracket balance and literal validity for an authority component.
fn authority_is_well_formed(netloc: &str) -> bool {
    let open = netloc.contains('[');
    let close = netloc.contains(']');
    if open != close {
        return false;
    }
    if !open {
        return true;
    }
    let after_open = match netloc.split_once('[') {
        Some((_, tail)) => tail,
        None => return false,
    };
    let literal = after_open
        .split_once(']')
        .map(|(lit, _)| lit)
        .unwrap_or(after_open);
    is_valid_bracketed_host(literal)
}

/// Schemes whose last path segment may carry `;params`.
fn scheme_uses_params(scheme: &str) -> bool {
    matches!(
        scheme,
        "" | "ftp"
            | "hdl"
            | "prospero"
            | "http"
            | "imap"
            | "https"
            | "shttp"
            | "rtsp"
            | "rtsps"
            | "rtspu"
            | "sip"
            | "sips"
            | "mms"
            | "sftp"
            | "tel"
    )
}
