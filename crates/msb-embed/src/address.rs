//! Address-field normalization.

const SECURE_PREFIX: &str = "https://";
const PLAIN_PREFIX: &str = "http://";

/// Trim `raw` and make sure it carries an http(s) scheme.
///
/// Empty input stays empty. Anything not starting with `http://` or
/// `https://` (any case) gets `https://` prepended. Nothing else is
/// checked; a malformed result only shows up as a frame that fails to load.
pub fn normalize_address(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    if has_http_scheme(trimmed) {
        trimmed.to_string()
    } else {
        format!("{SECURE_PREFIX}{trimmed}")
    }
}

fn has_http_scheme(value: &str) -> bool {
    starts_with_ignore_case(value, SECURE_PREFIX) || starts_with_ignore_case(value, PLAIN_PREFIX)
}

fn starts_with_ignore_case(value: &str, prefix: &str) -> bool {
    value
        .get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_stays_empty() {
        assert_eq!(normalize_address(""), "");
        assert_eq!(normalize_address("   \t\n"), "");
    }

    #[test]
    fn bare_host_gets_https() {
        assert_eq!(normalize_address("example.com"), "https://example.com");
        assert_eq!(
            normalize_address("  example.com/path?q=1 "),
            "https://example.com/path?q=1"
        );
    }

    #[test]
    fn existing_scheme_is_kept_case_insensitively() {
        assert_eq!(normalize_address("HTTP://X.com"), "HTTP://X.com");
        assert_eq!(normalize_address("https://a.org"), "https://a.org");
        assert_eq!(normalize_address("HtTpS://a.org"), "HtTpS://a.org");
        assert_eq!(normalize_address("http://localhost:3000"), "http://localhost:3000");
    }

    #[test]
    fn other_schemes_are_prefixed() {
        assert_eq!(normalize_address("ftp://files.org"), "https://ftp://files.org");
        assert_eq!(normalize_address("httpfoo.com"), "https://httpfoo.com");
    }

    #[test]
    fn normalization_is_idempotent() {
        let once = normalize_address(" news.ycombinator.com ");
        assert_eq!(normalize_address(&once), once);
    }

    #[test]
    fn multibyte_input_does_not_panic() {
        assert_eq!(normalize_address("bücher.de"), "https://bücher.de");
        assert_eq!(normalize_address("日本"), "https://日本");
    }
}
