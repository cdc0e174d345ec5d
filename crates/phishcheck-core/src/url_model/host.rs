//! Bracketed host literal validation (`[v6]` / `[vX.future]`).

use std::net::Ipv6Addr;

/// Returns true if the text between `[` and `]` is an IPv6 address (with
/// optional non-empty `%zone` without further `%`) or an IPvFuture literal (`v<hex>.<anything>`, lowercase `v` only).
pub fn is_valid_bracketed_host(literal: &str) -> bool {
    if let Some(rest) = literal.strip_prefix('v') {
        return match rest.split_once('.') {
            Some((version, tail)) => {
                !version.is_empty()
                    && version.chars().all(|c| c.is_ascii_hexdigit())
                    && !tail.is_empty()
            }
            None => false,
        };
    }
    let addr = match literal.split_once('%') {
        Some((addr, zone)) if !zone.is_empty() && !zone.contains('%') => addr,
        Some(_) => return false,
        None => literal,
    };
    addr.parse::<Ipv6Addr>().is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ipv6_literals() {
        assert!(is_valid_bracketed_host("::1"));
        assert!(is_valid_bracketed_host("2001:db8::7"));
        assert!(is_valid_bracketed_host("fe80::1%eth0"));
        assert!(!is_valid_bracketed_host("fe80::1%"));
        assert!(!is_valid_bracketed_host("fe80::1%a%b"));
    }

    #[test]
    fn ipvfuture_literals() {
        assert!(is_valid_bracketed_host("v1.fe80::a+en1"));
        assert!(!is_valid_bracketed_host("v.x"));
        assert!(!is_valid_bracketed_host("vz.x"));
        assert!(!is_valid_bracketed_host("v1."));
        assert!(!is_valid_bracketed_host("V1.x"));
    }

    #[test]
    fn rejects_ipv4_and_names() {
        assert!(!is_valid_bracketed_host("127.0.0.1"));
        assert!(!is_valid_bracketed_host("example.com"));
        assert!(!is_valid_bracketed_host(""));
    }
}
