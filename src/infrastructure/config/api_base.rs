//! Backend API base URL detection.

use std::sync::LazyLock;

use regex::Regex;

/// API base used for local development and when no host is known.
pub const LOCAL_API_BASE: &str = "http://localhost:8000";

static APP_LABEL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(webapp|mini-app|app)\.?").expect("Invalid app label regex"));

/// Picks the backend API base.
///
/// An explicit non-empty value wins. Otherwise the Mini App host name is
/// mapped: local hosts use [`LOCAL_API_BASE`], `webapp.`/`mini-app.`/`app.`
/// hosts use `https://api.{domain}`, and anything else is its own origin.
#[must_use]
pub fn resolve_api_base(explicit: Option<&str>, hostname: Option<&str>) -> String {
    if let Some(base) = explicit.map(str::trim).filter(|b| !b.is_empty()) {
        return base.strip_suffix('/').unwrap_or(base).to_string();
    }

    let Some(hostname) = hostname.map(str::trim).filter(|h| !h.is_empty()) else {
        return LOCAL_API_BASE.to_string();
    };

    if hostname == "localhost" || hostname == "127.0.0.1" {
        return LOCAL_API_BASE.to_string();
    }

    if ["webapp", "mini-app", "app"]
        .iter()
        .any(|label| hostname.contains(label))
    {
        let base_domain = APP_LABEL_RE.replace(hostname, "");
        if !base_domain.is_empty() {
            return format!("https://api.{base_domain}");
        }
    }

    format!("https://{hostname}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(Some("https://api.example.com/"), Some("webapp.example.com"), "https://api.example.com" ; "explicit wins")]
    #[test_case(Some("  "), Some("localhost"), LOCAL_API_BASE ; "blank explicit ignored")]
    #[test_case(None, Some("127.0.0.1"), LOCAL_API_BASE ; "loopback")]
    #[test_case(None, Some("webapp.example.com"), "https://api.example.com" ; "webapp host")]
    #[test_case(None, Some("mini-app.example.com"), "https://api.example.com" ; "mini app host")]
    #[test_case(None, Some("app.example.com"), "https://api.example.com" ; "app host")]
    #[test_case(None, Some("myapp.example.com"), "https://api.myapp.example.com" ; "app inside label")]
    #[test_case(None, Some("persona.example.com"), "https://persona.example.com" ; "plain origin")]
    #[test_case(None, None, LOCAL_API_BASE ; "no host")]
    fn test_resolve_api_base(explicit: Option<&str>, host: Option<&str>, expected: &str) {
        assert_eq!(resolve_api_base(explicit, host), expected);
    }
}
