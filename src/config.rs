use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::geometry::Viewport;
use crate::history::HistoryTrigger;
use crate::map::DrawControlConfig;

/// Environment variable naming a JSON config file.
pub const CONFIG_ENV_VAR: &str = "GEO_CAPTURE_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Startup settings. Every field is optional in the file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaptureConfig {
    /// Initial map view
    pub map: Viewport,
    /// Which draw tools are offered
    pub draw: DrawControlConfig,
    /// Result rows with a history button
    pub cards: Vec<ResultCard>,
}

/// One summarised result with the history behind it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResultCard {
    pub title: String,
    pub summary_value: String,
    pub history_headers: serde_json::Value,
    pub history: serde_json::Value,
}

impl ResultCard {
    /// The card's history as the raw attributes its button carries.
    pub fn trigger(&self) -> HistoryTrigger {
        HistoryTrigger::new(
            self.title.clone(),
            self.history_headers.to_string(),
            self.history.to_string(),
        )
    }
}

impl CaptureConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_owned(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Reads the file named by [`CONFIG_ENV_VAR`], or returns defaults when
    /// the variable is unset.
    pub fn load() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => {
                log::info!("loading config from {}", Path::new(&path).display());
                Self::from_path(path)
            }
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::LatLng;

    #[test]
    fn empty_object_gives_defaults() {
        let config = CaptureConfig::from_json("{}").unwrap();
        assert_eq!(config, CaptureConfig::default());
        assert!(config.draw.marker && config.draw.rectangle);
        assert_eq!(config.map.center, LatLng::new(-22.9068, -43.1729));
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = CaptureConfig::from_json(r#"{"map":{"zoom":8},"draw":{"remove":false}}"#).unwrap();
        assert_eq!(config.map.zoom, 8.0);
        assert_eq!(config.map.center, LatLng::new(-22.9068, -43.1729));
        assert!(!config.draw.remove);
        assert!(config.draw.marker);
    }

    #[test]
    fn card_trigger_carries_raw_json() {
        let config = CaptureConfig::from_json(
            r#"{"cards":[{"title":"UV Index","summary_value":"7.1","history_headers":["Year","Max UV"],"history":[{"year":2020,"value":"7.1"}]}]}"#,
        )
        .unwrap();
        let trigger = config.cards[0].trigger();
        assert_eq!(trigger.title, "UV Index");
        assert_eq!(trigger.headers, r#"["Year","Max UV"]"#);
        let history: serde_json::Value = serde_json::from_str(&trigger.history).unwrap();
        assert_eq!(history, serde_json::json!([{"year": 2020, "value": "7.1"}]));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = CaptureConfig::from_path("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(CaptureConfig::from_json("{"), Err(ConfigError::Parse(_))));
    }
}
