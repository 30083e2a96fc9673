// Configuration type definitions

use serde::Deserialize;

/// Color theme selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    Dark,
    Light,
}

/// API endpoint configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_base_url() -> String {
    "https://api.tickscout.io".to_string()
}

fn default_timeout_ms() -> u64 {
    5_000
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            base_url: default_base_url(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

/// Search behavior configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct SearchConfig {
    /// Pause in typing (milliseconds) before a suggestion fetch fires
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    /// Result-count cap sent to the autocomplete endpoint
    #[serde(default = "default_max_suggestions")]
    pub max_suggestions: usize,
}

fn default_debounce_ms() -> u64 {
    180
}

fn default_max_suggestions() -> usize {
    8
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            debounce_ms: default_debounce_ms(),
            max_suggestions: default_max_suggestions(),
        }
    }
}

/// UI configuration section
#[derive(Debug, Clone, Deserialize, Default)]
pub struct UiConfig {
    #[serde(default)]
    pub theme: ThemePreference,
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.search.debounce_ms, 180);
        assert_eq!(config.search.max_suggestions, 8);
        assert_eq!(config.api.timeout_ms, 5_000);
        assert_eq!(config.ui.theme, ThemePreference::Dark);
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let config: Config = toml::from_str(
            r#"
[search]
debounce_ms = 250
"#,
        )
        .unwrap();
        assert_eq!(config.search.debounce_ms, 250);
        assert_eq!(config.search.max_suggestions, 8);
        assert_eq!(config.api.base_url, "https://api.tickscout.io");
    }

    #[test]
    fn test_theme_parsing() {
        let config: Config = toml::from_str(
            r#"
[ui]
theme = "light"
"#,
        )
        .unwrap();
        assert_eq!(config.ui.theme, ThemePreference::Light);
    }

    #[test]
    fn test_unknown_theme_is_rejected() {
        let result: Result<Config, _> = toml::from_str(
            r#"
[ui]
theme = "solarized"
"#,
        );
        assert!(result.is_err());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        // Any valid theme string round-trips to the matching variant.
        #[test]
        fn prop_valid_theme_parsing(theme in prop::sample::select(vec!["dark", "light"])) {
            let toml_content = format!(
                r#"
[ui]
theme = "{}"
"#,
                theme
            );

            let config: Result<Config, _> = toml::from_str(&toml_content);
            prop_assert!(config.is_ok(), "Failed to parse valid theme: {}", theme);

            let config = config.unwrap();
            let expected = match theme {
                "dark" => ThemePreference::Dark,
                "light" => ThemePreference::Light,
                _ => unreachable!(),
            };
            prop_assert_eq!(config.ui.theme, expected);
        }

        // Any positive debounce value survives parsing unchanged.
        #[test]
        fn prop_debounce_round_trip(ms in 1u64..10_000u64) {
            let toml_content = format!(
                r#"
[search]
debounce_ms = {}
"#,
                ms
            );

            let config: Config = toml::from_str(&toml_content).unwrap();
            prop_assert_eq!(config.search.debounce_ms, ms);
        }
    }
}
