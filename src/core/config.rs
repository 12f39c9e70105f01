//! Registration page configuration.
//!
//! On the server, load it using `RegistrationConfig::from_env()` after calling
//! `dotenvy::dotenv()`. The server embeds it into the page as JSON so the
//! browser bundle can read it back with `from_meta_content`.

use serde::{Deserialize, Serialize};

/// Name of the `<meta>` tag carrying the serialized config
pub const CONFIG_META_NAME: &str = "regpage-config";

/// Candidate registration endpoints, tried in order
pub const DEFAULT_ENDPOINTS: [&str; 2] = [
    "http://localhost:5000/api/register",
    "http://127.0.0.1:5000/api/register",
];

/// External form opened after a successful registration
pub const DEFAULT_REDIRECT_URL: &str = "https://docs.google.com/forms/d/e/1FAIpQLSfY44xU-aSEH4bwyf_rCIa2Vuy70MO9-50K2HpChibGjA9hPw/viewform?usp=header";

pub const DEFAULT_REDIRECT_DELAY_MS: u32 = 1000;

pub const DEFAULT_THEME_STORAGE_KEY: &str = "theme";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Embedded config is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Settings shared by the server render and the browser bundle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationConfig {
    /// Registration endpoints, first reachable one wins
    pub endpoints: Vec<String>,
    /// External form opened in a new tab after success
    pub redirect_url: String,
    /// Delay before opening `redirect_url`
    pub redirect_delay_ms: u32,
    /// localStorage key holding the theme preference
    pub theme_storage_key: String,
}

impl Default for RegistrationConfig {
    fn default() -> Self {
        Self {
            endpoints: DEFAULT_ENDPOINTS.iter().map(|s| s.to_string()).collect(),
            redirect_url: DEFAULT_REDIRECT_URL.to_string(),
            redirect_delay_ms: DEFAULT_REDIRECT_DELAY_MS,
            theme_storage_key: DEFAULT_THEME_STORAGE_KEY.to_string(),
        }
    }
}

impl RegistrationConfig {
    /// Build a config from an arbitrary key lookup.
    ///
    /// Missing, blank or unparseable values keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup("REGISTRATION_ENDPOINTS") {
            let endpoints: Vec<String> = raw
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect();
            if !endpoints.is_empty() {
                config.endpoints = endpoints;
            }
        }

        if let Some(url) = lookup("REGISTRATION_REDIRECT_URL").filter(|s| !s.trim().is_empty()) {
            config.redirect_url = url.trim().to_string();
        }

        if let Some(delay) = lookup("REGISTRATION_REDIRECT_DELAY_MS")
            .and_then(|s| s.trim().parse::<u32>().ok())
        {
            config.redirect_delay_ms = delay;
        }

        if let Some(key) = lookup("THEME_STORAGE_KEY").filter(|s| !s.trim().is_empty()) {
            config.theme_storage_key = key.trim().to_string();
        }

        config
    }

    /// Load configuration from environment variables.
    #[cfg(feature = "ssr")]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Serialize for the `<meta>` tag
    pub fn to_meta_content(&self) -> String {
        // A struct of strings and integers always serializes
        serde_json::to_string(self).unwrap_or_default()
    }

    pub fn from_meta_content(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    // ========================================================================
    // Lookup-based tests (no env var dependencies - thread safe)
    // ========================================================================

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = RegistrationConfig::default();

        assert_eq!(
            config.endpoints,
            vec![
                "http://localhost:5000/api/register".to_string(),
                "http://127.0.0.1:5000/api/register".to_string(),
            ]
        );
        assert_eq!(config.redirect_delay_ms, 1000);
        assert_eq!(config.theme_storage_key, "theme");
        assert!(config.redirect_url.starts_with("https://docs.google.com/forms/"));
    }

    #[test]
    fn test_empty_lookup_keeps_defaults() {
        let config = RegistrationConfig::from_lookup(|_| None);
        assert_eq!(config, RegistrationConfig::default());
    }

    #[test]
    fn test_endpoints_override() {
        let config = RegistrationConfig::from_lookup(lookup_from(&[(
            "REGISTRATION_ENDPOINTS",
            " http://a.local/api/register , ,http://b.local/api/register",
        )]));

        assert_eq!(
            config.endpoints,
            vec![
                "http://a.local/api/register".to_string(),
                "http://b.local/api/register".to_string(),
            ]
        );
    }

    #[test]
    fn test_blank_endpoints_fall_back() {
        let config =
            RegistrationConfig::from_lookup(lookup_from(&[("REGISTRATION_ENDPOINTS", " , ")]));
        assert_eq!(config.endpoints, RegistrationConfig::default().endpoints);
    }

    #[test]
    fn test_invalid_delay_falls_back() {
        let config = RegistrationConfig::from_lookup(lookup_from(&[(
            "REGISTRATION_REDIRECT_DELAY_MS",
            "soon",
        )]));
        assert_eq!(config.redirect_delay_ms, DEFAULT_REDIRECT_DELAY_MS);

        let config = RegistrationConfig::from_lookup(lookup_from(&[(
            "REGISTRATION_REDIRECT_DELAY_MS",
            "2500",
        )]));
        assert_eq!(config.redirect_delay_ms, 2500);
    }

    #[test]
    fn test_redirect_and_storage_key_override() {
        let config = RegistrationConfig::from_lookup(lookup_from(&[
            ("REGISTRATION_REDIRECT_URL", "https://forms.example.org/next"),
            ("THEME_STORAGE_KEY", "site-theme"),
        ]));

        assert_eq!(config.redirect_url, "https://forms.example.org/next");
        assert_eq!(config.theme_storage_key, "site-theme");
    }

    #[test]
    fn test_meta_content_restores_config() {
        let config = RegistrationConfig::from_lookup(lookup_from(&[(
            "REGISTRATION_ENDPOINTS",
            "http://only.local/api/register",
        )]));

        let restored = RegistrationConfig::from_meta_content(&config.to_meta_content()).unwrap();
        assert_eq!(restored, config);
    }

    #[test]
    fn test_malformed_meta_content() {
        let result = RegistrationConfig::from_meta_content("{not json");
        assert!(matches!(result, Err(ConfigError::Malformed(_))));
    }
}
