//! Build-time Configuration
//!
//! Values are baked in when the WASM bundle is built, read from the
//! environment with `option_env!`.

use log::LevelFilter;

/// Backend used when `GROUPYPAY_BASE_URL` is not set
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

/// PayPal.me root used when `GROUPYPAY_PAYPAL_BASE` is not set
pub const DEFAULT_PAYPAL_BASE: &str = "https://www.paypal.me";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Backend root, without a trailing slash
    pub base_url: String,
    /// PayPal.me root, without a trailing slash
    pub paypal_base: String,
    pub log_level: LevelFilter,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("GROUPYPAY_BASE_URL"),
            option_env!("GROUPYPAY_PAYPAL_BASE"),
            option_env!("GROUPYPAY_LOG"),
        )
    }

    /// Build from raw values; blank values fall back to the defaults
    pub fn from_values(
        base_url: Option<&str>,
        paypal_base: Option<&str>,
        log_level: Option<&str>,
    ) -> Self {
        Self {
            base_url: normalize_url(base_url, DEFAULT_BASE_URL),
            paypal_base: normalize_url(paypal_base, DEFAULT_PAYPAL_BASE),
            log_level: log_level
                .and_then(|level| level.trim().parse().ok())
                .unwrap_or(LevelFilter::Debug),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_values(None, None, None)
    }
}

fn normalize_url(value: Option<&str>, default: &str) -> String {
    match value.map(str::trim) {
        Some(url) if !url.is_empty() => url.trim_end_matches('/').to_string(),
        _ => default.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.base_url, "http://127.0.0.1:5000");
        assert_eq!(config.paypal_base, "https://www.paypal.me");
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn test_overrides_are_trimmed() {
        let config = AppConfig::from_values(Some("https://api.example.com/ "), Some(""), Some("warn"));
        assert_eq!(config.base_url, "https://api.example.com");
        assert_eq!(config.paypal_base, DEFAULT_PAYPAL_BASE);
        assert_eq!(config.log_level, LevelFilter::Warn);
    }

    #[test]
    fn test_bad_log_level_falls_back() {
        let config = AppConfig::from_values(None, None, Some("chatty"));
        assert_eq!(config.log_level, LevelFilter::Debug);
    }
}
