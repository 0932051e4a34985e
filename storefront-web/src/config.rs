//! Frontend configuration module
//!
//! Settings are baked in at compile time from the build environment, the
//! same way `trunk` passes them to the wasm bundle.

use log::LevelFilter;
use strum::EnumString;

const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";
const LOGO_PATH: &str = "/media/logo.png";

/// How the private-route guard treats an unconfirmed session.
///
/// Parsed from `render-while-loading` or `hold-while-loading`, ignoring case.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, EnumString)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum GuardPolicy {
    /// Render protected content while the session check is in flight.
    /// Protected views may show briefly before authentication is confirmed.
    #[default]
    RenderWhileLoading,
    /// Show a loading placeholder until the session check settles.
    HoldWhileLoading,
}

/// Frontend configuration for the backend location and client behavior
#[derive(Debug, Clone, PartialEq)]
pub struct FrontendConfig {
    /// Backend base URL, also used to resolve media assets
    pub api_url: String,
    /// Route guard behavior during the session check
    pub guard_policy: GuardPolicy,
    /// Console log level
    pub log_level: LevelFilter,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self::from_values(
            option_env!("STOREFRONT_API_URL"),
            option_env!("STOREFRONT_GUARD_POLICY"),
            option_env!("STOREFRONT_LOG_LEVEL"),
        )
    }
}

impl FrontendConfig {
    /// Create a new frontend configuration instance
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a configuration from raw values, falling back to defaults for
    /// anything missing or unparseable.
    pub fn from_values(
        api_url: Option<&str>,
        guard_policy: Option<&str>,
        log_level: Option<&str>,
    ) -> Self {
        let api_url = api_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_URL)
            .trim_end_matches('/')
            .to_string();
        let guard_policy = guard_policy
            .and_then(|raw| match raw.trim().parse() {
                Ok(policy) => Some(policy),
                Err(err) => {
                    log::warn!("ignoring guard policy `{raw}`: {err}");
                    None
                }
            })
            .unwrap_or_default();
        let log_level = log_level
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(LevelFilter::Info);

        Self {
            api_url,
            guard_policy,
            log_level,
        }
    }

    /// Resolve a media path returned by the API against the backend base URL.
    /// Absolute URLs are returned untouched.
    pub fn media_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        format!("{}/{}", self.api_url, path.trim_start_matches('/'))
    }

    /// Location of the shop logo.
    pub fn logo_url(&self) -> String {
        self.media_url(LOGO_PATH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn defaults_apply_when_unset() {
        let config = FrontendConfig::from_values(None, None, None);
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.guard_policy, GuardPolicy::RenderWhileLoading);
        assert_eq!(config.log_level, LevelFilter::Info);
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let config = FrontendConfig::from_values(Some("https://shop.example.com/"), None, None);
        assert_eq!(config.api_url, "https://shop.example.com");
        assert_eq!(config.logo_url(), "https://shop.example.com/media/logo.png");
    }

    #[test_case("/media/photos/a.jpg", "http://127.0.0.1:8000/media/photos/a.jpg" ; "relative path")]
    #[test_case("media/photos/a.jpg", "http://127.0.0.1:8000/media/photos/a.jpg" ; "no leading slash")]
    #[test_case("https://cdn.example.com/a.jpg", "https://cdn.example.com/a.jpg" ; "absolute url")]
    fn media_urls(path: &str, expected: &str) {
        let config = FrontendConfig::from_values(None, None, None);
        assert_eq!(config.media_url(path), expected);
    }

    #[test_case("render-while-loading", GuardPolicy::RenderWhileLoading ; "kebab case")]
    #[test_case("HOLD-WHILE-LOADING", GuardPolicy::HoldWhileLoading ; "upper case")]
    #[test_case(" hold-while-loading ", GuardPolicy::HoldWhileLoading ; "padded")]
    fn guard_policy_names(raw: &str, expected: GuardPolicy) {
        let config = FrontendConfig::from_values(None, Some(raw), None);
        assert_eq!(config.guard_policy, expected);
    }

    #[test]
    fn unknown_guard_policy_is_an_error() {
        assert!("HoldWhileLoading".parse::<GuardPolicy>().is_err());
        assert_eq!(
            "hold-while-loading".parse::<GuardPolicy>(),
            Ok(GuardPolicy::HoldWhileLoading)
        );
    }

    #[test]
    fn guard_policy_parsing() {
        let config = FrontendConfig::from_values(None, Some("Hold-While-Loading"), Some("debug"));
        assert_eq!(config.guard_policy, GuardPolicy::HoldWhileLoading);
        assert_eq!(config.log_level, LevelFilter::Debug);

        let fallback = FrontendConfig::from_values(None, Some("sometimes"), Some("loud"));
        assert_eq!(fallback.guard_policy, GuardPolicy::RenderWhileLoading);
        assert_eq!(fallback.log_level, LevelFilter::Info);
    }
}
