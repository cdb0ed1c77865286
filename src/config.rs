use crate::logging::LogLevel;
use std::time::Duration;
use url::Url;

const DEFAULT_CONTACT_FORM_ENDPOINT: &str = "https://formspree.io/f/xanpdgrl";
const DEFAULT_SPLASH_DELAY_MS: u64 = 2_000;
const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;

const SPLASH_DELAY_MS_BOUNDS: (u64, u64) = (0, 10_000);

#[derive(Clone, Debug, PartialEq)]
pub struct SiteConfig {
    pub recaptcha_site_key: Option<String>,
    pub contact_form_endpoint: Url,
    pub splash_delay: Duration,
    pub log_level: LogLevel,
}

impl SiteConfig {
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("RECAPTCHA_SITE_KEY"),
            option_env!("CONTACT_FORM_ENDPOINT"),
            option_env!("SPLASH_DELAY_MS"),
            option_env!("LOG_LEVEL"),
        )
    }

    pub fn from_values(
        recaptcha_site_key: Option<&str>,
        contact_form_endpoint: Option<&str>,
        splash_delay_ms: Option<&str>,
        log_level: Option<&str>,
    ) -> Self {
        let contact_form_endpoint = parse_http_url(contact_form_endpoint)
            .unwrap_or_else(default_contact_form_endpoint);
        let splash_delay_ms =
            parse_u64_with_bounds(splash_delay_ms, DEFAULT_SPLASH_DELAY_MS, SPLASH_DELAY_MS_BOUNDS);

        Self {
            recaptcha_site_key: parse_non_empty_string(recaptcha_site_key),
            contact_form_endpoint,
            splash_delay: Duration::from_millis(splash_delay_ms),
            log_level: parse_log_level(log_level, DEFAULT_LOG_LEVEL),
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::from_values(None, None, None, None)
    }
}

fn default_contact_form_endpoint() -> Url {
    Url::parse(DEFAULT_CONTACT_FORM_ENDPOINT).expect("default endpoint is a valid URL")
}

fn parse_non_empty_string(value: Option<&str>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_u64_with_bounds(value: Option<&str>, default: u64, bounds: (u64, u64)) -> u64 {
    value
        .and_then(|value| value.trim().parse::<u64>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn parse_http_url(value: Option<&str>) -> Option<Url> {
    let value = parse_non_empty_string(value)?;
    let parsed = Url::parse(&value).ok()?;

    if parsed.scheme() == "http" || parsed.scheme() == "https" {
        Some(parsed)
    } else {
        None
    }
}

fn parse_log_level(value: Option<&str>, default: LogLevel) -> LogLevel {
    parse_non_empty_string(value)
        .and_then(|value| LogLevel::from_str(&value))
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_nothing_is_injected() {
        let config = SiteConfig::default();

        assert_eq!(config.recaptcha_site_key, None);
        assert_eq!(config.contact_form_endpoint.as_str(), DEFAULT_CONTACT_FORM_ENDPOINT);
        assert_eq!(config.splash_delay, Duration::from_millis(2_000));
        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[test]
    fn blank_site_key_counts_as_missing() {
        let config = SiteConfig::from_values(Some("   "), None, None, None);
        assert_eq!(config.recaptcha_site_key, None);

        let config = SiteConfig::from_values(Some(" 6Lc-key "), None, None, None);
        assert_eq!(config.recaptcha_site_key.as_deref(), Some("6Lc-key"));
    }

    #[test]
    fn non_http_endpoint_falls_back_to_default() {
        let config = SiteConfig::from_values(None, Some("ftp://example.com/form"), None, None);
        assert_eq!(config.contact_form_endpoint.as_str(), DEFAULT_CONTACT_FORM_ENDPOINT);

        let config = SiteConfig::from_values(None, Some("not a url"), None, None);
        assert_eq!(config.contact_form_endpoint.as_str(), DEFAULT_CONTACT_FORM_ENDPOINT);

        let config = SiteConfig::from_values(None, Some("http://127.0.0.1:9000/f/test"), None, None);
        assert_eq!(config.contact_form_endpoint.as_str(), "http://127.0.0.1:9000/f/test");
    }

    #[test]
    fn splash_delay_outside_bounds_is_ignored() {
        let config = SiteConfig::from_values(None, None, Some("60000"), None);
        assert_eq!(config.splash_delay, Duration::from_millis(DEFAULT_SPLASH_DELAY_MS));

        let config = SiteConfig::from_values(None, None, Some(" 750 "), None);
        assert_eq!(config.splash_delay, Duration::from_millis(750));
    }

    #[test]
    fn log_level_is_case_insensitive() {
        let config = SiteConfig::from_values(None, None, None, Some("DEBUG"));
        assert_eq!(config.log_level, LogLevel::Debug);

        let config = SiteConfig::from_values(None, None, None, Some("verbose"));
        assert_eq!(config.log_level, LogLevel::Info);
    }
}
