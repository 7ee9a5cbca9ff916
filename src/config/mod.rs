//! Configuration loading and management

use crate::core::ConfigError;
use crate::view::{DEFAULT_PAGE_SIZE, PaginationPolicy, SortOrder};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Backend API access
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the REST API (e.g., "https://api.example.com/v1")
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    30
}

/// Default view settings for one list screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenConfig {
    /// Number of items per page
    pub page_size: usize,

    /// Initial sort key (must be registered on the screen's view spec)
    pub sort_key: Option<String>,

    pub sort_order: SortOrder,

    /// Initial grouping, if the screen groups by default
    pub group_by: Option<String>,

    /// Pagination override; the screen's own policy applies when unset
    pub pagination: Option<PaginationPolicy>,

    /// Label of the bucket for items without a group key
    pub unassigned_label: Option<String>,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            sort_key: None,
            sort_order: SortOrder::Asc,
            group_by: None,
            pagination: None,
            unassigned_label: None,
        }
    }
}

/// Complete configuration for the portal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortalConfig {
    pub api: ApiConfig,

    /// Screen settings keyed by screen name (e.g., "notices", "payments")
    #[serde(default)]
    pub screens: IndexMap<String, ScreenConfig>,
}

impl PortalConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        let config: Self = serde_yaml::from_str(&content).map_err(|e| ConfigError::Parse {
            file: Some(path.to_string()),
            message: e.to_string(),
        })?;
        config.validate()?;
        tracing::debug!(path, screens = config.screens.len(), "loaded portal config");
        Ok(config)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml).map_err(|e| ConfigError::Parse {
            file: None,
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would make the portal unusable
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api.base_url.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "api.base_url".to_string(),
                value: self.api.base_url.clone(),
                message: "must not be empty".to_string(),
            });
        }
        for (name, screen) in &self.screens {
            if screen.page_size == 0 {
                return Err(ConfigError::InvalidValue {
                    field: format!("screens.{}.page_size", name),
                    value: "0".to_string(),
                    message: "must be at least 1".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Settings for a screen, falling back to defaults when not configured
    pub fn screen(&self, name: &str) -> ScreenConfig {
        self.screens.get(name).cloned().unwrap_or_default()
    }

    /// Create a default configuration matching the portal's stock screens
    pub fn default_config() -> Self {
        let mut screens = IndexMap::new();
        screens.insert(
            "notices".to_string(),
            ScreenConfig {
                page_size: 5,
                sort_key: Some("createdAt".to_string()),
                sort_order: SortOrder::Desc,
                group_by: Some("property".to_string()),
                pagination: Some(PaginationPolicy::PerGroup),
                unassigned_label: Some("All Properties".to_string()),
            },
        );
        screens.insert(
            "documents".to_string(),
            ScreenConfig {
                page_size: 10,
                sort_key: Some("uploadedAt".to_string()),
                sort_order: SortOrder::Desc,
                group_by: Some("property".to_string()),
                pagination: Some(PaginationPolicy::PerGroup),
                unassigned_label: Some("General".to_string()),
            },
        );
        screens.insert(
            "payments".to_string(),
            ScreenConfig {
                page_size: 10,
                sort_key: Some("datePaid".to_string()),
                sort_order: SortOrder::Desc,
                ..ScreenConfig::default()
            },
        );
        screens.insert(
            "service-requests".to_string(),
            ScreenConfig {
                page_size: 10,
                sort_key: Some("createdAt".to_string()),
                sort_order: SortOrder::Desc,
                ..ScreenConfig::default()
            },
        );
        screens.insert(
            "spots".to_string(),
            ScreenConfig {
                page_size: 20,
                sort_key: Some("spotNumber".to_string()),
                ..ScreenConfig::default()
            },
        );
        screens.insert(
            "tenants".to_string(),
            ScreenConfig {
                page_size: 20,
                sort_key: Some("name".to_string()),
                ..ScreenConfig::default()
            },
        );

        Self {
            api: ApiConfig {
                base_url: "http://localhost:3000/api".to_string(),
                timeout_secs: default_timeout_secs(),
            },
            screens,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PortalConfig::default_config();

        assert_eq!(config.screens.len(), 6);
        assert!(config.validate().is_ok());
        assert_eq!(
            config.screen("notices").pagination,
            Some(PaginationPolicy::PerGroup)
        );
    }

    #[test]
    fn test_yaml_serialization() {
        let config = PortalConfig::default_config();
        let yaml = serde_yaml::to_string(&config).unwrap();

        // Should be able to parse it back
        let parsed = PortalConfig::from_yaml_str(&yaml).unwrap();
        assert_eq!(parsed.screens.len(), config.screens.len());
        assert_eq!(parsed.screen("payments"), config.screen("payments"));
    }

    #[test]
    fn test_unknown_screen_falls_back_to_defaults() {
        let config = PortalConfig::default_config();
        assert_eq!(config.screen("amenities"), ScreenConfig::default());
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let yaml = r#"
api:
  base_url: http://localhost:3000/api
screens:
  payments:
    page_size: 0
"#;
        let err = PortalConfig::from_yaml_str(yaml).unwrap_err();
        assert!(err.to_string().contains("screens.payments.page_size"));
    }

    #[test]
    fn test_partial_screen_uses_defaults() {
        let yaml = r#"
api:
  base_url: http://localhost:3000/api
screens:
  notices:
    sort_key: title
"#;
        let config = PortalConfig::from_yaml_str(yaml).unwrap();
        let notices = config.screen("notices");
        assert_eq!(notices.sort_key.as_deref(), Some("title"));
        assert_eq!(notices.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(notices.pagination, None);
        assert_eq!(config.api.timeout_secs, 30);
    }
}
