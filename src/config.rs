//! Site configuration loader resolving the asset base URL.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

const DEFAULT_CONFIG_FILE: &str = "_config.yml";

/// Site configuration read from the generator's YAML configuration file.
///
/// Only the `url` key is consumed here; every other key in the file is
/// ignored so the loader can point at a full site configuration without
/// owning its schema.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SiteConfig {
    /// Absolute root URL under which the site's assets are served.
    pub url: Option<String>,
}

impl SiteConfig {
    /// Attempt to load configuration from the provided site directory.
    ///
    /// When the configuration file does not exist or fails to parse we fall
    /// back to default values so downstream callers can continue operating;
    /// a defaulted configuration yields an empty base URL.
    pub fn discover(site_dir: &Path) -> Self {
        let candidate = site_dir.join(DEFAULT_CONFIG_FILE);
        Self::from_path(&candidate).unwrap_or_default()
    }

    /// Read configuration from a specific YAML file.
    pub fn from_path(path: &Path) -> Option<Self> {
        let content = fs::read_to_string(path).ok()?;
        serde_yaml::from_str(&content).ok()
    }

    /// Read configuration from a specific YAML file, surfacing failures.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        serde_yaml::from_str(&content)
            .with_context(|| format!("failed to parse {}", path.display()))
    }

    /// The configured base URL, or the empty string when no `url` key is set.
    pub fn base_url(&self) -> &str {
        self.url.as_deref().unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::{SiteConfig, DEFAULT_CONFIG_FILE};
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn discover_falls_back_to_defaults_for_missing_file() {
        let dir = tempdir().expect("failed to create temp dir");
        let config = SiteConfig::discover(dir.path());
        assert_eq!(config.base_url(), "");
    }

    #[test]
    fn discover_falls_back_to_defaults_for_invalid_yaml() {
        let dir = tempdir().expect("failed to create temp dir");
        fs::write(dir.path().join(DEFAULT_CONFIG_FILE), "url: [unclosed").unwrap();
        let config = SiteConfig::discover(dir.path());
        assert_eq!(config.base_url(), "");
    }

    #[test]
    fn discover_reads_url_from_site_config() {
        let dir = tempdir().expect("failed to create temp dir");
        fs::write(
            dir.path().join(DEFAULT_CONFIG_FILE),
            "title: Example Site\nurl: https://example.github.io/assets/\n",
        )
        .unwrap();

        let config = SiteConfig::discover(dir.path());
        assert_eq!(config.base_url(), "https://example.github.io/assets/");
    }

    #[test]
    fn missing_url_key_yields_empty_base_url() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join(DEFAULT_CONFIG_FILE);
        fs::write(&path, "title: Example Site\n").unwrap();

        let config = SiteConfig::from_path(&path).expect("configuration should load");
        assert_eq!(config.base_url(), "");
    }

    #[test]
    fn from_path_returns_none_for_missing_file() {
        let dir = tempdir().expect("failed to create temp dir");
        assert!(SiteConfig::from_path(&dir.path().join("absent.yml")).is_none());
    }

    #[test]
    fn load_reports_read_failures_with_path() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("absent.yml");
        let err = SiteConfig::load(&path).expect_err("missing file should error");
        assert!(err.to_string().contains("failed to read"));
    }

    #[test]
    fn load_reports_parse_failures_with_path() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join(DEFAULT_CONFIG_FILE);
        fs::write(&path, "url: [unclosed").unwrap();
        let err = SiteConfig::load(&path).expect_err("invalid yaml should error");
        assert!(err.to_string().contains("failed to parse"));
    }
}
