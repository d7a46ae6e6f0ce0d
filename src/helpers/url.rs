//! URL helper functions

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::config::SiteConfig;

/// Everything but RFC 3986 unreserved characters
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Generate a URL with the root path
///
/// # Examples
/// ```ignore
/// url_for(&config, "/project/secure-api.html") // -> "/me/project/secure-api.html"
/// ```
pub fn url_for(config: &SiteConfig, path: &str) -> String {
    let root = config.root.trim_end_matches('/');
    let path = path.trim_start_matches('/');

    if path.is_empty() {
        format!("{}/", root)
    } else {
        format!("{}/{}", root, path)
    }
}

/// Encode a single URL path segment
pub fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, PATH_SEGMENT).to_string()
}

/// Whether a link leaves the site
pub fn is_external(href: &str) -> bool {
    href.starts_with("http://") || href.starts_with("https://") || href.starts_with("//")
}

/// Link target for a contact address; bare addresses become `mailto:`
pub fn mail_href(email: &str) -> String {
    if email.is_empty() || email.starts_with("mailto:") {
        email.to_string()
    } else {
        format!("mailto:{}", email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> SiteConfig {
        let mut config = SiteConfig::default();
        config.root = "/me/".to_string();
        config
    }

    #[test]
    fn test_url_for() {
        let config = test_config();
        assert_eq!(url_for(&config, "/api/data"), "/me/api/data");
        assert_eq!(url_for(&config, "project/a.html"), "/me/project/a.html");
        assert_eq!(url_for(&config, ""), "/me/");
        assert_eq!(url_for(&SiteConfig::default(), "api/data"), "/api/data");
    }

    #[test]
    fn test_encode_segment() {
        assert_eq!(encode_segment("secure-api_v1.0~x"), "secure-api_v1.0~x");
        assert_eq!(encode_segment("a?x"), "a%3Fx");
        assert_eq!(encode_segment("a#b c%"), "a%23b%20c%25");
    }

    #[test]
    fn test_is_external() {
        assert!(is_external("https://github.com/example"));
        assert!(!is_external("/project/a.html"));
    }

    #[test]
    fn test_mail_href() {
        assert_eq!(mail_href("me@example.com"), "mailto:me@example.com");
        assert_eq!(mail_href("mailto:me@example.com"), "mailto:me@example.com");
        assert_eq!(mail_href(""), "");
    }
}
