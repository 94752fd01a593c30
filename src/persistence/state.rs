use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Local state stored in state.json, independent of the remote store
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalState {
    #[serde(default)]
    pub active_project_id: Option<String>,
}

/// Load local state from state.json
pub fn load_state<P: AsRef<Path>>(path: P) -> Result<LocalState> {
    let content = crate::persistence::read_file(path)?;
    if content.trim().is_empty() {
        return Ok(LocalState::default());
    }
    Ok(serde_json::from_str(&content)?)
}

/// Save local state to state.json
pub fn save_state<P: AsRef<Path>>(path: P, state: &LocalState) -> Result<()> {
    let json = serde_json::to_string_pretty(state)?;
    crate::persistence::atomic_write(path, &json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_nonexistent_state() {
        let temp_dir = tempdir().unwrap();
        let state = load_state(temp_dir.path().join("state.json")).unwrap();
        assert_eq!(state.active_project_id, None);
    }

    #[test]
    fn test_save_and_load_state() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("state.json");

        let state = LocalState {
            active_project_id: Some("1712345678901".to_string()),
        };
        save_state(&path, &state).unwrap();

        assert_eq!(load_state(&path).unwrap(), state);
        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.contains("activeProjectId"));
    }

    #[test]
    fn test_null_active_project() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("state.json");
        std::fs::write(&path, r#"{"activeProjectId": null}"#).unwrap();

        assert_eq!(load_state(&path).unwrap().active_project_id, None);
    }

    #[test]
    fn test_corrupt_state_is_an_error() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("state.json");
        std::fs::write(&path, "not json").unwrap();

        assert!(load_state(&path).is_err());
    }
}
