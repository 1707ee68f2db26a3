use std::path::{Path, PathBuf};

use anyhow::Result;
use figment::{
    Figment,
    providers::{Env, Format, Json, Toml, Yaml},
};
use serde::{Deserialize, Serialize};

// Embed the default config at compile time
const DEFAULT_CONFIG: &str = include_str!("../../default-config.toml");

pub struct MutsiteConfig {
    figment: Figment,
}

impl MutsiteConfig {
    pub fn load() -> Result<Self> {
        Self::load_with_custom_config(None)
    }

    pub fn load_with_custom_config(custom_config: Option<&str>) -> Result<Self> {
        let mut figment = Figment::new().merge(Toml::string(DEFAULT_CONFIG)); // Embedded defaults

        // If custom config is specified, use only that + defaults + env vars
        if let Some(custom_path) = custom_config {
            figment = match Path::new(custom_path).extension().and_then(|e| e.to_str()) {
                Some("json") => figment.merge(Json::file(custom_path)),
                Some("yaml" | "yml") => figment.merge(Yaml::file(custom_path)),
                _ => figment.merge(Toml::file(custom_path)),
            };
        } else {
            // Standard priority: user config -> repo config
            figment = figment
                // User config - support multiple formats
                .merge(Toml::file(Self::user_config_path()))
                .merge(Json::file(Self::user_config_path().replace(".toml", ".json")))
                .merge(Yaml::file(Self::user_config_path().replace(".toml", ".yaml")))
                .merge(Yaml::file(Self::user_config_path().replace(".toml", ".yml")))
                // Repository config - support multiple formats
                .merge(Toml::file("mutsite.toml"))
                .merge(Json::file("mutsite.json"))
                .merge(Yaml::file("mutsite.yaml"))
                .merge(Yaml::file("mutsite.yml"));
        }

        // Environment variables always have highest priority
        figment = figment.merge(Env::prefixed("MUTSITE_"));

        Ok(MutsiteConfig { figment })
    }

    /// Extract the typed report settings from the merged configuration
    pub fn report_settings(&self) -> Result<ReportSettings> {
        Ok(self.figment.extract_inner("report")?)
    }

    /// Get a nested object/section as JSON
    pub fn get_section(&self, path: &str) -> Result<serde_json::Value> {
        Ok(self.figment.extract_inner(path)?)
    }

    /// Get the full merged configuration as a structured value
    pub fn get_full_config(&self) -> Result<serde_json::Value> {
        Ok(self.figment.extract()?)
    }

    fn user_config_path() -> String {
        match std::env::var("HOME") {
            Ok(home) => format!("{}/.config/mutsite/config.toml", home),
            Err(_) => "~/.config/mutsite/config.toml".to_string(),
        }
    }
}

/// Settings driving one report generation invocation.
///
/// Defaults mirror the embedded `default-config.toml`; the CLI applies its
/// flag overrides on top of the extracted values.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportSettings {
    /// When true, report generation is skipped (skipping is not a failure)
    pub skip: bool,
    /// Report name shown under the site's project reports section
    pub name: String,
    /// Report description shown under the site's project reports section
    pub description: String,
    /// Subdirectory of the site output root that receives the report
    pub site_directory: String,
    /// Accepted source formats, in priority order
    pub source_formats: Vec<String>,
    /// Directory the analysis run wrote its raw results to
    pub results_directory: PathBuf,
    /// Root of the generated project site
    pub site_output_root: PathBuf,
    /// Locale tag passed through to the site framework
    pub locale: String,
    /// Character encoding of the report sources; empty means UTF-8
    pub source_encoding: Option<String>,
    /// Character encoding of the report output; empty means UTF-8
    pub output_encoding: Option<String>,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            skip: false,
            name: "Mutation Test Report".to_string(),
            description: "Report of the mutation test coverage".to_string(),
            site_directory: "mutation-report".to_string(),
            source_formats: vec!["HTML".to_string()],
            results_directory: PathBuf::from("target/mutation-reports"),
            site_output_root: PathBuf::from("target/site"),
            locale: "en".to_string(),
            source_encoding: None,
            output_encoding: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_loading() {
        let config = MutsiteConfig::load();
        assert!(config.is_ok(), "Should load default config successfully");
    }

    #[test]
    fn test_config_loads_defaults() {
        let config = MutsiteConfig::load().expect("Should load default config");

        let settings = config.report_settings().unwrap();
        assert!(!settings.skip);
        assert_eq!(settings.name, "Mutation Test Report");
        assert_eq!(settings.site_directory, "mutation-report");
        assert_eq!(settings.source_formats, vec!["HTML".to_string()]);
        assert_eq!(settings.results_directory, PathBuf::from("target/mutation-reports"));
    }

    #[test]
    fn test_config_methods() {
        let config = MutsiteConfig::load().unwrap();

        // Test getting full config
        assert!(config.get_full_config().is_ok());
        assert!(config.get_section("report").is_ok());

        // Test environment variable support
        unsafe {
            std::env::set_var("MUTSITE_TEST_VALUE", "true");
        }
        let test_config = MutsiteConfig::load().unwrap();
        // Config should be loadable with environment variables
        assert!(test_config.get_full_config().is_ok());
    }

    #[test]
    fn test_custom_config_loading() {
        // Test with non-existent custom config (should fallback to defaults)
        let config = MutsiteConfig::load_with_custom_config(Some("non_existent.toml"));
        assert!(config.is_ok(), "Should handle missing custom config gracefully");
    }

    #[test]
    fn test_settings_defaults_match_embedded_config() {
        let extracted = MutsiteConfig::load().unwrap().report_settings().unwrap();
        let fallback = ReportSettings::default();
        assert_eq!(extracted.name, fallback.name);
        assert_eq!(extracted.description, fallback.description);
        assert_eq!(extracted.site_directory, fallback.site_directory);
        assert_eq!(extracted.source_formats, fallback.source_formats);
        assert_eq!(extracted.locale, fallback.locale);
    }
}
