//! Markup helpers: escaping and small string utilities
//!
//! Escaping mirrors the host framework's conventions: HTML text and
//! attribute values are entity-encoded, URLs are scheme-checked and
//! sanitized. Rich-text attribute values bypass escaping by contract (see
//! [`crate::core::attribute::TextMode`]).

/// Schemes allowed in escaped URLs. A URL with any other explicit scheme
/// escapes to the empty string.
const ALLOWED_URL_SCHEMES: &[&str] = &["http", "https", "mailto", "tel", "ftp", "ftps"];

/// Entity-encode a string for use as HTML text content
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Entity-encode a string for use inside a quoted HTML attribute
pub fn escape_attr(value: &str) -> String {
    escape_html(value)
}

/// Sanitize a URL for use in an `href` or `url()` context.
///
/// Strips whitespace and control characters, rejects URLs with a
/// disallowed explicit scheme (returning the empty string), and
/// entity-encodes characters that would break out of the surrounding
/// markup. Scheme-relative, path-relative and fragment URLs pass through.
pub fn escape_url(url: &str) -> String {
    let cleaned: String = url
        .trim()
        .chars()
        .filter(|c| !c.is_control() && !c.is_whitespace())
        .collect();

    if cleaned.is_empty() {
        return cleaned;
    }

    if let Some(colon) = cleaned.find(':') {
        // Only treat the prefix as a scheme when it comes before any
        // path/query/fragment delimiter.
        let delim = cleaned.find(['/', '?', '#']).unwrap_or(cleaned.len());
        if colon < delim {
            let scheme = cleaned[..colon].to_ascii_lowercase();
            if !ALLOWED_URL_SCHEMES.contains(&scheme.as_str()) {
                return String::new();
            }
        }
    }

    let mut out = String::with_capacity(cleaned.len());
    for ch in cleaned.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Join class tokens with single spaces, preserving order.
///
/// Duplicates are not suppressed; the class list must stay deterministic
/// for a given input.
pub fn join_classes<S: AsRef<str>>(classes: &[S]) -> String {
    classes
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Strip a single trailing slash from a URL or path
pub fn trim_trailing_slash(value: &str) -> &str {
    value.strip_suffix('/').unwrap_or(value)
}
