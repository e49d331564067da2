use super::view::DependencyOrder;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};
use tracing::debug;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_BAR_WIDTH: usize = 40;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DependencyConfig {
    /// Sort rows by share before keeping the top ten.
    #[serde(default = "default_true")]
    pub sort_by_share: bool,
}

impl Default for DependencyConfig {
    fn default() -> Self {
        DependencyConfig {
            sort_by_share: true,
        }
    }
}

impl DependencyConfig {
    pub fn order(&self) -> DependencyOrder {
        if self.sort_by_share {
            DependencyOrder::ByShare
        } else {
            DependencyOrder::AsReceived
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ChartConfig {
    #[serde(default = "default_bar_width")]
    pub bar_width: usize,
}

impl Default for ChartConfig {
    fn default() -> Self {
        ChartConfig {
            bar_width: DEFAULT_BAR_WIDTH,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub dependency: DependencyConfig,
    #[serde(default)]
    pub chart: ChartConfig,
}

fn default_true() -> bool {
    true
}

fn default_bar_width() -> usize {
    DEFAULT_BAR_WIDTH
}

impl AppConfig {
    /// Loads the default config file, falling back to built-in defaults when
    /// none has been created yet.
    pub fn load() -> Result<Self> {
        debug!("Loading default config");
        let config_path = Self::default_config_path()?;
        if !config_path.exists() {
            debug!(
                "No config at {}, using defaults",
                config_path.display()
            );
            return Ok(Self::default());
        }
        Self::load_from_path(&config_path)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("ec", "observatorio", "observatorio")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        debug!("Successfully loaded config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_deserialization() {
        let yaml_str = r#"
api:
  base_url: "http://reports.internal:9000"
dependency:
  sort_by_share: false
chart:
  bar_width: 25
"#;

        let config: AppConfig = serde_yaml::from_str(yaml_str).expect("Failed to deserialize");
        assert_eq!(config.api.base_url, "http://reports.internal:9000");
        assert!(!config.dependency.sort_by_share);
        assert_eq!(config.dependency.order(), DependencyOrder::AsReceived);
        assert_eq!(config.chart.bar_width, 25);
    }

    #[test]
    fn test_config_defaults() {
        let config: AppConfig = serde_yaml::from_str("{}").expect("Failed to deserialize");
        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
        assert!(config.dependency.sort_by_share);
        assert_eq!(config.dependency.order(), DependencyOrder::ByShare);
        assert_eq!(config.chart.bar_width, DEFAULT_BAR_WIDTH);

        let partial = r#"
dependency: {}
chart: {}
"#;
        let config: AppConfig = serde_yaml::from_str(partial).expect("Failed to deserialize");
        assert!(config.dependency.sort_by_share);
        assert_eq!(config.chart.bar_width, DEFAULT_BAR_WIDTH);
    }

    #[test]
    fn test_load_from_missing_path_fails() {
        let dir = tempfile::TempDir::new().unwrap();
        let result = AppConfig::load_from_path(dir.path().join("missing.yaml"));
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Failed to read config file")
        );
    }
}
