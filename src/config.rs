use std::str::FromStr;
use thiserror::Error;
use tracing::info;

pub const DEFAULT_API_URL: &str = "http://localhost:8000";

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Unknown page variant '{0}' (expected 'cards' or 'compact')")]
    InvalidVariant(String),
    #[error("API URL must start with http:// or https://, got '{0}'")]
    InvalidUrl(String),
}

/// Which view template renders the scout page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageVariant {
    /// One card per supplier, presets as chips
    #[default]
    Cards,
    /// Table of suppliers with a denser header
    Compact,
}

impl FromStr for PageVariant {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cards" => Ok(PageVariant::Cards),
            "compact" => Ok(PageVariant::Compact),
            other => Err(ConfigError::InvalidVariant(other.to_string())),
        }
    }
}

/// Application configuration
/// In debug builds: loads a .env file first, then reads environment variables
/// In release builds: environment variables only
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Base URL of the search/persistence service
    pub api_base_url: String,
    pub page_variant: PageVariant,
    /// Replaces the variant's built-in preset shortcuts when set
    pub presets: Option<Vec<String>>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            page_variant: PageVariant::default(),
            presets: None,
        }
    }
}

impl Config {
    /// Load configuration based on build mode
    pub fn load() -> Result<Self, ConfigError> {
        #[cfg(debug_assertions)]
        {
            if dotenvy::dotenv().is_ok() {
                info!("Config: Dev mode activated - loaded .env file");
            } else {
                info!("Config: No .env file found, using environment only");
            }
        }

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_base_url = lookup("SCOUT_API_URL")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        if !api_base_url.starts_with("http://") && !api_base_url.starts_with("https://") {
            return Err(ConfigError::InvalidUrl(api_base_url));
        }

        let page_variant = match lookup("SCOUT_PAGE_VARIANT") {
            Some(v) if !v.trim().is_empty() => v.parse()?,
            _ => PageVariant::default(),
        };

        let presets = lookup("SCOUT_PRESETS").map(|v| {
            v.split('|')
                .map(str::trim)
                .filter(|p| !p.is_empty())
                .map(str::to_string)
                .collect::<Vec<_>>()
        });

        info!(
            "Config: api={}, variant={:?}, preset override={}",
            api_base_url,
            page_variant,
            presets.is_some()
        );

        Ok(Self {
            api_base_url,
            page_variant,
            presets,
        })
    }
}

/// Hook to access the application configuration
pub fn use_config() -> Config {
    let context = dioxus::prelude::use_context::<crate::ui::AppContext>();
    context.config.clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_set() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.api_base_url, "http://localhost:8000");
    }

    #[test]
    fn test_reads_all_keys() {
        let config = Config::from_lookup(lookup_from(&[
            ("SCOUT_API_URL", "https://scout.example"),
            ("SCOUT_PAGE_VARIANT", "Compact"),
            ("SCOUT_PRESETS", "Steel mills | | Fastener vendors|"),
        ]))
        .unwrap();

        assert_eq!(config.api_base_url, "https://scout.example");
        assert_eq!(config.page_variant, PageVariant::Compact);
        assert_eq!(
            config.presets,
            Some(vec!["Steel mills".to_string(), "Fastener vendors".to_string()])
        );
    }

    #[test]
    fn test_rejects_unknown_variant() {
        let err = Config::from_lookup(lookup_from(&[("SCOUT_PAGE_VARIANT", "grid")])).unwrap_err();
        assert_eq!(err, ConfigError::InvalidVariant("grid".to_string()));
    }

    #[test]
    fn test_rejects_non_http_url() {
        let err = Config::from_lookup(lookup_from(&[("SCOUT_API_URL", "localhost:8000")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidUrl(_)));
    }
}
