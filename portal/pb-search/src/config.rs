//! Configuration loading for pb-search
//!
//! Configuration is loaded from:
//! 1. Environment variable SEARCH_SERVICE_URL (service URL only)
//! 2. Environment variable PB_SEARCH_CONFIG_PATH
//! 3. ~/.pds/pb-search.toml
//! 4. Default values

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Servlet requests go to when none is configured
pub const DEFAULT_SERVLET: &str = "search";

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Search service connection
    #[serde(default)]
    pub service: ServiceConfig,
    /// Pager widget settings
    #[serde(default)]
    pub pager: PagerConfig,
    /// Search profile driving the page
    #[serde(default)]
    pub profile: ProfileConfig,
}

/// Search service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Base URL of the search service
    #[serde(default = "default_service_url")]
    pub url: String,
    /// Servlet appended to the base URL for every request
    #[serde(default = "default_servlet")]
    pub servlet: String,
    /// HTTP request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

/// Pager configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PagerConfig {
    /// Rows per page when the service does not echo `rows`
    #[serde(default = "default_per_page")]
    pub per_page: u64,
    /// Page links shown on each side of the current page
    #[serde(default = "default_window")]
    pub inner_window: u64,
    /// Page links shown after the first and before the last page
    #[serde(default = "default_window")]
    pub outer_window: u64,
    #[serde(default = "default_prev_label")]
    pub prev_label: String,
    #[serde(default = "default_next_label")]
    pub next_label: String,
}

/// Search profile configuration
///
/// A profile names the record class the page searches and the parameters
/// seeded before the first request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileConfig {
    #[serde(default = "default_profile_name")]
    pub name: String,
    /// Parameters set before the initial request, in order
    #[serde(default = "default_params")]
    pub defaults: Vec<(String, String)>,
    /// Filter every query is restricted to
    #[serde(default = "default_class_filter")]
    pub class_filter: String,
    /// Field shown as the title of each result
    #[serde(default = "default_title_field")]
    pub title_field: String,
    /// Field identifying a record for detail lookups
    #[serde(default = "default_id_field")]
    pub id_field: String,
    /// Fields shown after the title of each result
    #[serde(default = "default_summary_fields")]
    pub summary_fields: Vec<String>,
}

// Default value functions
fn default_service_url() -> String {
    "http://localhost:8080/search-service/".to_string()
}

fn default_servlet() -> String {
    DEFAULT_SERVLET.to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_per_page() -> u64 {
    10
}

fn default_window() -> u64 {
    1
}

fn default_prev_label() -> String {
    "‹".to_string()
}

fn default_next_label() -> String {
    "›".to_string()
}

fn default_profile_name() -> String {
    "phonebook".to_string()
}

fn default_params() -> Vec<(String, String)> {
    vec![
        ("sort".to_string(), "person_sort_name asc".to_string()),
        ("q".to_string(), default_class_filter()),
    ]
}

fn default_class_filter() -> String {
    "data_class:PDS_Affiliate".to_string()
}

fn default_title_field() -> String {
    "person_sort_name".to_string()
}

fn default_id_field() -> String {
    "identifier".to_string()
}

fn default_summary_fields() -> Vec<String> {
    vec![
        "person_email".to_string(),
        "person_phone".to_string(),
        "person_institution".to_string(),
    ]
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            url: default_service_url(),
            servlet: default_servlet(),
            timeout_seconds: default_timeout(),
        }
    }
}

impl Default for PagerConfig {
    fn default() -> Self {
        Self {
            per_page: default_per_page(),
            inner_window: default_window(),
            outer_window: default_window(),
            prev_label: default_prev_label(),
            next_label: default_next_label(),
        }
    }
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            name: default_profile_name(),
            defaults: default_params(),
            class_filter: default_class_filter(),
            title_field: default_title_field(),
            id_field: default_id_field(),
            summary_fields: default_summary_fields(),
        }
    }
}

impl Config {
    /// Load configuration from the default locations
    pub fn load() -> Result<Self> {
        Self::load_from(Self::find_config_path().as_deref())
    }

    /// Load configuration from `path`, or defaults when there is none
    ///
    /// SEARCH_SERVICE_URL still overrides the file.
    pub fn load_from(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) if path.exists() => {
                tracing::info!("Loading config from: {}", path.display());
                Self::from_file(path)?
            }
            Some(path) => {
                tracing::info!(
                    "Config file {} not found, using defaults",
                    path.display()
                );
                Self::default()
            }
            None => {
                tracing::info!("No config path specified, using defaults");
                Self::default()
            }
        };

        // Service URL from environment (highest priority)
        if let Ok(url) = std::env::var("SEARCH_SERVICE_URL") {
            config.service.url = url;
        }

        Ok(config)
    }

    /// Parse a config file without applying environment overrides
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("parsing {}", path.display()))
    }

    /// Find the configuration file path
    fn find_config_path() -> Option<PathBuf> {
        // 1. Check environment variable
        if let Ok(path) = std::env::var("PB_SEARCH_CONFIG_PATH") {
            return Some(PathBuf::from(path));
        }

        // 2. Check ~/.pds/pb-search.toml
        dirs::home_dir().map(|home| home.join(".pds").join("pb-search.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.service.url, "http://localhost:8080/search-service/");
        assert_eq!(config.service.servlet, "search");
        assert_eq!(config.pager.per_page, 10);
        assert_eq!(config.pager.inner_window, 1);
        assert_eq!(
            config.profile.defaults,
            vec![
                ("sort".to_string(), "person_sort_name asc".to_string()),
                ("q".to_string(), "data_class:PDS_Affiliate".to_string()),
            ]
        );
    }

    #[test]
    fn test_from_file_partial() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[service]
url = "https://pds.example.org/search-service/"
timeout_seconds = 5

[pager]
per_page = 25
"#
        )
        .unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.service.url, "https://pds.example.org/search-service/");
        assert_eq!(config.service.timeout_seconds, 5);
        assert_eq!(config.service.servlet, "search");
        assert_eq!(config.pager.per_page, 25);
        assert_eq!(config.pager.outer_window, 1);
        assert_eq!(config.profile.name, "phonebook");
    }

    #[test]
    fn test_from_file_profile_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[profile]
name = "attributes"
defaults = [["product-class", "Product_Attribute_Definition"], ["sort", "attribute_name asc"]]
title_field = "attribute_name"
"#
        )
        .unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.profile.name, "attributes");
        assert_eq!(config.profile.defaults.len(), 2);
        assert_eq!(config.profile.defaults[0].0, "product-class");
        assert_eq!(config.profile.title_field, "attribute_name");
        assert_eq!(config.profile.class_filter, "data_class:PDS_Affiliate");
    }

    #[test]
    fn test_from_file_invalid() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[pager]\nper_page = \"many\"").unwrap();
        assert!(Config::from_file(file.path()).is_err());
    }

    #[test]
    fn test_load_from_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let config = Config::load_from(Some(path.as_path())).unwrap();
        assert_eq!(config.pager.per_page, 10);
        assert_eq!(config.profile.name, "phonebook");
    }
}
