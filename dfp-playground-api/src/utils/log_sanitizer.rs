//! Log sanitization utilities
//!
//! Response bodies can hold thousands of serialized entities and filter
//! clauses can be arbitrarily long; both are shortened before they reach
//! the log file.

/// Maximum number of bytes of a body included in log output.
const TRUNCATE_LIMIT: usize = 256;

/// Maximum number of bytes of a request URI included in log output.
const URI_LIMIT: usize = 160;

/// Largest char boundary `<= index`.
fn floor_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        return s.len();
    }
    (0..=index).rev().find(|&i| s.is_char_boundary(i)).unwrap_or(0)
}

fn truncate_to(s: &str, limit: usize) -> String {
    if s.len() <= limit {
        s.to_string()
    } else {
        format!(
            "{}... [truncated, total {} bytes]",
            &s[..floor_char_boundary(s, limit)],
            s.len()
        )
    }
}

/// Truncate a response body for logging.
pub fn truncate_for_log(s: &str) -> String {
    truncate_to(s, TRUNCATE_LIMIT)
}

/// Shorten a request URI for logging, keeping the path intact.
pub fn summarize_uri(uri: &str) -> String {
    match uri.split_once('?') {
        Some((path, query)) => format!("{path}?{}", truncate_to(query, URI_LIMIT)),
        None => uri.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_body_unchanged() {
        assert_eq!(truncate_for_log(r#"{"results":[]}"#), r#"{"results":[]}"#);
    }

    #[test]
    fn long_body_truncated() {
        let s = "x".repeat(TRUNCATE_LIMIT * 4);
        let result = truncate_for_log(&s);
        assert!(result.starts_with(&"x".repeat(TRUNCATE_LIMIT)));
        assert!(result.ends_with(&format!("total {} bytes]", TRUNCATE_LIMIT * 4)));
    }

    #[test]
    fn truncation_respects_multibyte_chars() {
        let s = "é".repeat(TRUNCATE_LIMIT);
        let result = truncate_for_log(&s);
        assert!(result.contains("... [truncated"));
    }

    #[test]
    fn uri_path_is_preserved() {
        let uri = format!("/api/pql?where={}", "A".repeat(URI_LIMIT * 2));
        let result = summarize_uri(&uri);
        assert!(result.starts_with("/api/pql?where="));
        assert!(result.contains("[truncated"));
        assert_eq!(summarize_uri("/api/networks"), "/api/networks");
    }
}
