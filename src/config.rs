// Engine configuration, loadable from TOML
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{BookingError, Result};
use crate::ranking::SortKey;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    // Sort tab the flight selection step opens on
    pub default_sort_key: SortKey,
    // Flights with this many seats left or fewer get a warning badge
    pub low_seats_threshold: u32,
    pub min_travelers: u32,
    pub max_travelers: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_sort_key: SortKey::Price,
            low_seats_threshold: 5,
            min_travelers: 1,
            max_travelers: 9,
        }
    }
}

impl EngineConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: EngineConfig =
            toml::from_str(content).map_err(|e| BookingError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<()> {
        if self.min_travelers == 0 {
            return Err(BookingError::Config(
                "min_travelers must be at least 1".to_string(),
            ));
        }

        if self.min_travelers > self.max_travelers {
            return Err(BookingError::Config(format!(
                "min_travelers ({}) exceeds max_travelers ({})",
                self.min_travelers, self.max_travelers
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.default_sort_key, SortKey::Price);
        assert_eq!(config.low_seats_threshold, 5);
        assert_eq!((config.min_travelers, config.max_travelers), (1, 9));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = EngineConfig::from_toml_str("default_sort_key = \"time\"\n").unwrap();
        assert_eq!(config.default_sort_key, SortKey::Time);
        assert_eq!(config.low_seats_threshold, 5);
        assert_eq!(config.max_travelers, 9);
    }

    #[test]
    fn test_full_toml() {
        let content = r#"
            default_sort_key = "duration"
            low_seats_threshold = 3
            min_travelers = 2
            max_travelers = 6
        "#;

        let config = EngineConfig::from_toml_str(content).unwrap();
        assert_eq!(
            config,
            EngineConfig {
                default_sort_key: SortKey::Duration,
                low_seats_threshold: 3,
                min_travelers: 2,
                max_travelers: 6,
            }
        );
    }

    #[test_case("default_sort_key = \"rating\""; "#1 unknown sort key")]
    #[test_case("min_travelers = 5\nmax_travelers = 2"; "#2 inverted bounds")]
    #[test_case("min_travelers = 0"; "#3 zero travelers")]
    #[test_case("low_seats_threshold = -1"; "#4 negative threshold")]
    fn test_invalid_config_rejected(content: &str) {
        let result = EngineConfig::from_toml_str(content);
        assert!(matches!(result, Err(BookingError::Config(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = EngineConfig::from_file("does/not/exist.toml");
        assert!(matches!(result, Err(BookingError::IoError(_))));
    }
}
