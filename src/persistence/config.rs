use crate::domain::DurationTable;
use crate::error::ConfigError;
use serde::Deserialize;
use std::path::Path;

/// Marker left in the endpoint until the Apps Script is deployed
pub const ENDPOINT_PLACEHOLDER: &str = "YOUR_DEPLOYED_APP_SCRIPT_URL_HERE";

/// Written by `pomotrack init`
pub const CONFIG_TEMPLATE: &str = r#"# pomotrack configuration

# Web app URL of the deployed Google Apps Script that backs the project list.
endpoint = "YOUR_DEPLOYED_APP_SCRIPT_URL_HERE"

# Ring the terminal bell (and notify on macOS) when a session ends.
sound = true

[durations]
pomodoro_minutes = 25
short_break_minutes = 5
long_break_minutes = 15
sessions_until_long_break = 4
"#;

/// Settings from config.toml
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub endpoint: Option<String>,
    pub sound: bool,
    pub durations: DurationTable,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: None,
            sound: true,
            durations: DurationTable::default(),
        }
    }
}

impl Config {
    /// The remote store URL, or None while unset or still the placeholder
    pub fn endpoint(&self) -> Option<&str> {
        self.endpoint
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty() && !url.contains(ENDPOINT_PLACEHOLDER))
    }

    fn validate(self) -> Result<Self, ConfigError> {
        if let Some(key) = self.durations.invalid_field() {
            return Err(ConfigError::InvalidValue {
                key: format!("durations.{}", key),
                message: "must be at least 1".to_string(),
            });
        }
        Ok(self)
    }
}

/// Load config.toml; a missing file means defaults
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let path = path.as_ref();

    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Config::default()),
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let config: Config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    config.validate()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_uses_defaults() {
        let temp_dir = tempdir().unwrap();
        let config = load_config(temp_dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.endpoint(), None);
    }

    #[test]
    fn test_template_parses_as_unconfigured() {
        let config: Config = toml::from_str(CONFIG_TEMPLATE).unwrap();
        assert_eq!(config.durations, DurationTable::default());
        assert!(config.sound);
        assert_eq!(config.endpoint(), None);
    }

    #[test]
    fn test_partial_file() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(
            &path,
            "endpoint = \"https://example.test/exec\"\n[durations]\npomodoro_minutes = 50\n",
        )
        .unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.endpoint(), Some("https://example.test/exec"));
        assert_eq!(config.durations.pomodoro_minutes, 50);
        assert_eq!(config.durations.short_break_minutes, 5);
        assert!(config.sound);
    }

    #[test]
    fn test_zero_duration_is_rejected() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[durations]\nlong_break_minutes = 0\n").unwrap();

        match load_config(&path) {
            Err(ConfigError::InvalidValue { key, .. }) => {
                assert_eq!(key, "durations.long_break_minutes")
            }
            other => panic!("expected invalid value, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_file() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "endpoint = [").unwrap();

        assert!(matches!(load_config(&path), Err(ConfigError::Parse { .. })));
    }
}
