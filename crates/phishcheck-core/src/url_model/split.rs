//! Scheme and path-parameter splitting.

/// Splits a leading `scheme:` off `url`.
///
/// The scheme must be non-empty, start with an ASCII letter and contain only
/// ASCII letters, digits, `+`, `-` or `.`. Returns the lowercased scheme (or
/// empty) and the remainder.
pub fn split_scheme(url: &str) -> (String, &str) {
    let Some(colon) = url.find(':') else {
        return (String::new(), url);
    };
    let candidate = &url[..colon];
    let starts_alpha = candidate
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic());
    let valid = starts_alpha
        && candidate
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
    if valid {
        (candidate.to_ascii_lowercase(), &url[colon + 1..])
    } else {
        (String::new(), url)
    }
}

/// Splits `;params` off the last path segment. Returns `(path, params)`.
pub fn split_params(path: &str) -> (&str, &str) {
    let search_from = path.rfind('/').unwrap_or(0);
    match path[search_from..].find(';') {
        Some(i) => {
            let at = search_from + i;
            (&path[..at], &path[at + 1..])
        }
        None => (path, ""),
    }
}
