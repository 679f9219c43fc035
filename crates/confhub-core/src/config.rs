//! Configuration management for confhub
//!
//! Supports feature-specific configuration sections:
//! - [diff] - Diff splitting and reconstruction settings
//! - [params] - Helm parameter comparison settings

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Current configuration version
pub const CURRENT_CONFIG_VERSION: &str = "1";

/// Supported configuration versions
pub const SUPPORTED_CONFIG_VERSIONS: &[&str] = &["1"];

/// Root configuration structure supporting multiple features
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Configuration version for tracking schema changes
    #[serde(default = "default_config_version")]
    pub version: String,

    /// Diff processing configuration
    #[serde(default)]
    pub diff: Option<DiffConfig>,

    /// Parameter comparison configuration
    #[serde(default)]
    pub params: Option<ParamsConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: default_config_version(),
            diff: None,
            params: None,
        }
    }
}

/// Configuration for diff splitting and content reconstruction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiffConfig {
    /// Default output directory for exported per-file chunks
    #[serde(default = "default_diff_output_dir")]
    pub output_dir: String,

    /// Whether reconstructed contents keep `@@` hunk headers as separators
    #[serde(default = "default_include_hunk_headers")]
    pub include_hunk_headers: bool,
}

impl Default for DiffConfig {
    fn default() -> Self {
        Self {
            output_dir: default_diff_output_dir(),
            include_hunk_headers: default_include_hunk_headers(),
        }
    }
}

/// Configuration for Helm parameter comparison
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParamsConfig {
    /// Value equality policy: "coerced" (string rendering) or "strict" (typed)
    #[serde(default = "default_equality_policy")]
    pub equality: String,
}

impl Default for ParamsConfig {
    fn default() -> Self {
        Self {
            equality: default_equality_policy(),
        }
    }
}

// Default value functions for root Config
fn default_config_version() -> String {
    CURRENT_CONFIG_VERSION.to_string()
}

// Default value functions for Diff
fn default_diff_output_dir() -> String {
    "confhub/diff".to_string()
}

fn default_include_hunk_headers() -> bool {
    true
}

// Default value functions for Params
fn default_equality_policy() -> String {
    "coerced".to_string()
}

impl Config {
    /// Check if the configuration version is supported
    pub fn is_version_supported(&self) -> bool {
        SUPPORTED_CONFIG_VERSIONS.contains(&self.version.as_str())
    }

    /// Get a warning message for unsupported versions
    pub fn version_warning(&self) -> Option<String> {
        if !self.is_version_supported() {
            Some(format!(
                "Configuration version '{}' is not supported. Supported versions: {}. Using defaults where needed.",
                self.version,
                SUPPORTED_CONFIG_VERSIONS.join(", ")
            ))
        } else {
            None
        }
    }

    /// Load configuration from file
    pub fn load_from_file(path: &PathBuf) -> Result<Self, Box<dyn std::error::Error>> {
        let content = fs::read_to_string(path)?;
        let mut config: Config = toml::from_str(&content)?;

        if let Some(warning) = config.version_warning() {
            tracing::warn!("{}", warning);
        }

        // Set to current version if empty or missing
        if config.version.is_empty() {
            config.version = CURRENT_CONFIG_VERSION.to_string();
        }

        Ok(config)
    }

    /// Get the default config directory path
    pub fn get_config_dir() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".config").join("confhub"))
    }

    /// Load configuration with priority:
    /// 1. Defaults
    /// 2. Global config (~/.config/confhub/config.toml)
    /// 3. Repo config (.confhub.toml)
    pub fn load() -> Self {
        let mut config = Self::default();

        // Try to load global config
        if let Some(config_dir) = Self::get_config_dir() {
            let global_config = config_dir.join("config.toml");
            if global_config.exists() {
                if let Ok(loaded) = Self::load_from_file(&global_config) {
                    config = config.merge(loaded);
                }
            }
        }

        // Try to load repo config
        let repo_config = PathBuf::from(".confhub.toml");
        if repo_config.exists() {
            if let Ok(loaded) = Self::load_from_file(&repo_config) {
                config = config.merge(loaded);
            }
        }

        config
    }

    /// Merge another config into this one (other takes precedence)
    pub fn merge(mut self, other: Config) -> Self {
        if other.version != CURRENT_CONFIG_VERSION || !other.version.is_empty() {
            self.version = other.version;
        }

        if other.diff.is_some() {
            self.diff = other.diff;
        }
        if other.params.is_some() {
            self.params = other.params;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.version, "1");
        assert!(config.diff.is_none());
        assert!(config.params.is_none());
    }

    #[test]
    fn test_config_version_validation() {
        let config = Config {
            version: "1".to_string(),
            diff: None,
            params: None,
        };
        assert!(config.is_version_supported());
        assert!(config.version_warning().is_none());

        let unsupported_config = Config {
            version: "999".to_string(),
            diff: None,
            params: None,
        };
        assert!(!unsupported_config.is_version_supported());
        assert!(unsupported_config.version_warning().is_some());
    }

    #[test]
    fn test_parse_config_with_sections() {
        let toml_str = r#"
version = "1"

[diff]
output_dir = "custom/diff"
include_hunk_headers = false

[params]
equality = "strict"
"#;

        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.version, "1");
        assert!(config.is_version_supported());

        let diff = config.diff.unwrap();
        assert_eq!(diff.output_dir, "custom/diff");
        assert!(!diff.include_hunk_headers);

        let params = config.params.unwrap();
        assert_eq!(params.equality, "strict");
    }

    #[test]
    fn test_diff_config_defaults() {
        let diff_config = DiffConfig::default();
        assert_eq!(diff_config.output_dir, "confhub/diff");
        assert!(diff_config.include_hunk_headers);
    }

    #[test]
    fn test_params_config_defaults() {
        let params_config = ParamsConfig::default();
        assert_eq!(params_config.equality, "coerced");
    }

    #[test]
    fn test_merge_prefers_other_sections() {
        let base = Config::default();
        let other = Config {
            version: "1".to_string(),
            diff: Some(DiffConfig {
                output_dir: "repo/diff".to_string(),
                include_hunk_headers: false,
            }),
            params: None,
        };

        let merged = base.merge(other);
        let diff = merged.diff.unwrap();
        assert_eq!(diff.output_dir, "repo/diff");
        assert!(merged.params.is_none());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "version = \"1\"\n\n[params]\nequality = \"strict\"\n",
        )
        .unwrap();

        let config = Config::load_from_file(&path).unwrap();
        assert_eq!(config.params.unwrap().equality, "strict");
    }
}
