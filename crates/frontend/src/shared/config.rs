//! Analytics API configuration.
//!
//! The base URL is resolved once at startup. Sources, later ones win:
//!
//! 1. Embedded default TOML
//! 2. `SHOP_ANALYTICS_API_URL` at build time
//! 3. `<meta name="shop-analytics:api-url" content="...">` in the host page
//! 4. `window.__SHOP_ANALYTICS_CONFIG__ = { api_url: "..." }`
//!
//! If every source is empty the current window origin is used.

use serde::Deserialize;
use wasm_bindgen::JsCast;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    pub api: ApiConfig,
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct ApiConfig {
    /// Base URL of the analytics API, without trailing slash
    #[serde(default)]
    pub url: String,
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
url = ""
"#;

/// Name of the meta tag the host page can use to inject the API URL
pub const API_URL_META: &str = "shop-analytics:api-url";

/// Name of the global JS object the host page can use to inject config
pub const JS_CONFIG_GLOBAL: &str = "__SHOP_ANALYTICS_CONFIG__";

const BUILD_API_URL: Option<&str> = option_env!("SHOP_ANALYTICS_API_URL");

/// Parse a TOML configuration document
pub fn parse_config(contents: &str) -> Result<Config, toml::de::Error> {
    toml::from_str(contents)
}

impl ApiConfig {
    pub fn new(url: impl AsRef<str>) -> Self {
        Self {
            url: normalize_base_url(url.as_ref()),
        }
    }

    /// Resolve the configuration from all sources (see module docs)
    pub fn load() -> Self {
        let mut config = match parse_config(DEFAULT_CONFIG) {
            Ok(config) => config.api,
            Err(e) => {
                log::warn!("Embedded config is invalid, using empty defaults: {}", e);
                ApiConfig::default()
            }
        };

        config.apply_override("build environment", BUILD_API_URL.map(str::to_string));
        config.apply_override("meta tag", get_meta_content(API_URL_META));
        config.apply_override("window config", get_js_config("api_url"));

        if config.url.is_empty() {
            config.url = web_sys::window()
                .and_then(|w| w.location().origin().ok())
                .unwrap_or_default();
            log::info!("Analytics API url falls back to page origin: {}", config.url);
        }

        config
    }

    /// Base URL of the analytics API
    pub fn api_url(&self) -> &str {
        &self.url
    }

    fn apply_override(&mut self, source: &str, value: Option<String>) {
        let Some(url) = value.map(|v| normalize_base_url(&v)) else {
            return;
        };
        if url.is_empty() {
            return;
        }
        log::info!("Analytics API url from {}: {}", source, url);
        self.url = url;
    }
}

/// Trim whitespace and trailing slashes so paths can be appended directly
pub fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

/// Get content from a <meta name="..."> tag
fn get_meta_content(name: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let selector = format!("meta[name=\"{}\"]", name);
    document
        .query_selector(&selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web_sys::HtmlMetaElement>().ok())
        .map(|meta| meta.content())
}

/// Get a string value from the injected global config object
fn get_js_config(key: &str) -> Option<String> {
    let window = web_sys::window()?;
    let config = js_sys::Reflect::get(&window, &JS_CONFIG_GLOBAL.into()).ok()?;

    if config.is_undefined() || config.is_null() {
        return None;
    }

    js_sys::Reflect::get(&config, &key.into()).ok()?.as_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.api.url, "");
    }

    #[test]
    fn test_config_with_url() {
        let config = parse_config("[api]\nurl = \"https://analytics.example.com\"\n").unwrap();
        assert_eq!(config.api.url, "https://analytics.example.com");
    }

    #[test]
    fn test_config_without_api_section_is_rejected() {
        assert!(parse_config("[database]\npath = \"x\"\n").is_err());
    }

    #[test]
    fn test_override_ignores_empty_values() {
        let mut config = ApiConfig::new("https://a.example.com");
        config.apply_override("test", None);
        config.apply_override("test", Some("   ".to_string()));
        assert_eq!(config.api_url(), "https://a.example.com");

        config.apply_override("test", Some("https://b.example.com/".to_string()));
        assert_eq!(config.api_url(), "https://b.example.com");
    }

    #[test]
    fn test_normalize_base_url() {
        assert_eq!(
            normalize_base_url(" https://x.example.com// "),
            "https://x.example.com"
        );
        assert_eq!(normalize_base_url(""), "");
    }
}
