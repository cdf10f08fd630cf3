//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

use super::config::normalize_base_url;

/// Build a full API URL from a base URL and a path
///
/// # Arguments
/// * `base` - API base URL from [`super::config::ApiConfig`], e.g. "https://example.com"
/// * `path` - The API path (should start with "/api/"), may carry a query string
///
/// # Example
/// ```ignore
/// let url = api_url("https://example.com/", "/api/kpi");
/// assert_eq!(url, "https://example.com/api/kpi");
/// ```
pub fn api_url(base: &str, path: &str) -> String {
    let base = normalize_base_url(base);
    if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_url() {
        assert_eq!(
            api_url("https://example.com", "/api/kpi"),
            "https://example.com/api/kpi"
        );
        assert_eq!(
            api_url("https://example.com/", "/api/revenue-trend?days=30"),
            "https://example.com/api/revenue-trend?days=30"
        );
        assert_eq!(
            api_url("https://example.com", "api/kpi"),
            "https://example.com/api/kpi"
        );
    }

    #[test]
    fn test_api_url_with_empty_base_is_relative() {
        assert_eq!(api_url("", "/api/kpi"), "/api/kpi");
    }
}
