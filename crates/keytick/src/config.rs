use std::path::Path;

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Construction options for a key timer table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
pub struct KeyTimerConfig {
    /// Report raw keyboard events as consumed once queued, so the
    /// platform does not propagate them further.
    pub swallow_input: bool,
}

impl Default for KeyTimerConfig {
    fn default() -> Self {
        Self {
            swallow_input: true,
        }
    }
}

impl KeyTimerConfig {
    /// Read a config from a JSON file.
    pub fn read(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        let config: KeyTimerConfig = serde_json::from_str(&data)?;
        Ok(config)
    }

    /// Write this config to a JSON file.
    pub fn write(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = KeyTimerConfig::default();
        assert!(config.swallow_input);
    }

    #[test]
    fn test_empty_json_uses_defaults() {
        let config: KeyTimerConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, KeyTimerConfig::default());
    }

    #[test]
    fn test_field_names_are_camel_case() {
        let json = serde_json::to_string(&KeyTimerConfig::default()).unwrap();
        assert!(json.contains("\"swallowInput\":true"));
    }

    #[test]
    fn test_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("keytick.json");

        let config = KeyTimerConfig {
            swallow_input: false,
        };
        config.write(&path).unwrap();

        let back = KeyTimerConfig::read(&path).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_read_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(KeyTimerConfig::read(&dir.path().join("absent.json")).is_err());
    }
}
