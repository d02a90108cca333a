//! Client configuration resolved at boot.
//!
//! # Design
//! - Pure resolution from explicit inputs; the wasm layer reads the page location and storage.
//! - A compile-time API URL wins; otherwise the API shares the page host, with the dev port remapped.

use tracing::Level;

/// Dev-server port the bundle is usually served from.
pub const DEV_UI_PORT: &str = "3000";
/// API port paired with [`DEV_UI_PORT`].
pub const DEV_API_PORT: &str = "5000";
/// Base used when the page location cannot be read.
pub const FALLBACK_API_BASE: &str = "http://localhost:5000";

/// Parts of the page URL the API base derives from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageOrigin {
    /// Scheme including the colon, e.g. `https:`.
    pub protocol: String,
    /// Host name without port.
    pub hostname: String,
    /// Port, empty when implicit.
    pub port: String,
}

/// Resolved client settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Origin every `/api/...` path is appended to.
    pub api_base_url: String,
    /// Maximum log level forwarded to the console.
    pub log_level: Level,
}

impl ClientConfig {
    /// Resolve from the compile-time override, the page origin, and the stored log level.
    #[must_use]
    pub fn resolve(
        override_url: Option<&str>,
        origin: Option<&PageOrigin>,
        stored_level: Option<&str>,
    ) -> Self {
        Self {
            api_base_url: resolve_api_base(override_url, origin),
            log_level: parse_log_level(stored_level),
        }
    }
}

/// API origin without a trailing slash.
#[must_use]
pub fn resolve_api_base(override_url: Option<&str>, origin: Option<&PageOrigin>) -> String {
    if let Some(url) = override_url.map(str::trim).filter(|url| !url.is_empty()) {
        return url.trim_end_matches('/').to_string();
    }
    let Some(origin) = origin else {
        return FALLBACK_API_BASE.to_string();
    };
    let mut base = format!("{}//{}", origin.protocol, origin.hostname);
    match origin.port.as_str() {
        "" => {}
        DEV_UI_PORT => {
            base.push(':');
            base.push_str(DEV_API_PORT);
        }
        other => {
            base.push(':');
            base.push_str(other);
        }
    }
    base
}

/// Parse a stored level name; unknown or missing values mean `info`.
#[must_use]
pub fn parse_log_level(raw: Option<&str>) -> Level {
    match raw.map(|value| value.trim().to_ascii_lowercase()).as_deref() {
        Some("trace") => Level::TRACE,
        Some("debug") => Level::DEBUG,
        Some("warn" | "warning") => Level::WARN,
        Some("error") => Level::ERROR,
        _ => Level::INFO,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn origin(port: &str) -> PageOrigin {
        PageOrigin {
            protocol: "http:".into(),
            hostname: "localhost".into(),
            port: port.into(),
        }
    }

    #[test]
    fn override_wins_and_loses_trailing_slash() {
        assert_eq!(
            resolve_api_base(Some("https://api.example.test/"), Some(&origin("3000"))),
            "https://api.example.test"
        );
        assert_eq!(
            resolve_api_base(Some("   "), Some(&origin("3000"))),
            "http://localhost:5000"
        );
    }

    #[test]
    fn dev_port_maps_to_api_port() {
        assert_eq!(resolve_api_base(None, Some(&origin("3000"))), "http://localhost:5000");
        assert_eq!(resolve_api_base(None, Some(&origin("8443"))), "http://localhost:8443");
        assert_eq!(resolve_api_base(None, Some(&origin(""))), "http://localhost");
        assert_eq!(resolve_api_base(None, None), FALLBACK_API_BASE);
    }

    #[test]
    fn log_levels() {
        assert_eq!(parse_log_level(Some("DEBUG")), Level::DEBUG);
        assert_eq!(parse_log_level(Some("warning")), Level::WARN);
        assert_eq!(parse_log_level(Some("chatty")), Level::INFO);
        assert_eq!(parse_log_level(None), Level::INFO);
    }

    #[test]
    fn resolve_combines_inputs() {
        let config = ClientConfig::resolve(None, Some(&origin("3000")), Some("error"));
        assert_eq!(config.api_base_url, "http://localhost:5000");
        assert_eq!(config.log_level, Level::ERROR);
    }

    #[test]
    fn same_inputs_resolve_to_equal_configs() {
        let first = ClientConfig::resolve(None, Some(&origin("3000")), None);
        let again = ClientConfig::resolve(None, Some(&origin("3000")), None);
        assert_eq!(first, again);
        let elsewhere = ClientConfig::resolve(None, Some(&origin("8080")), None);
        assert_ne!(first, elsewhere);
    }
}
