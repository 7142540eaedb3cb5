use netview_graph::ViewSettings;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Persisted dashboard configuration.
///
/// Every field carries a serde default so a settings file written by an
/// older version still loads.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardSettings {
    pub host: String,
    pub enable_log: bool,
    pub map_opacity: f64,
    pub view: ViewSettings,
    pub log_poll_secs: u64,
    pub status_poll_secs: u64,
    pub layout_list_poll_secs: u64,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            enable_log: false,
            map_opacity: 0.4,
            view: ViewSettings::default(),
            log_poll_secs: 3,
            status_poll_secs: 3,
            layout_list_poll_secs: 30,
        }
    }
}

impl DashboardSettings {
    fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("netview").join("settings.json"))
    }

    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::info!(?path, "settings file not found, using defaults");
            return Self::default();
        }
        match std::fs::read_to_string(path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(settings) => settings,
                Err(e) => {
                    tracing::error!("failed to parse settings: {e}");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::error!("failed to read settings file: {e}");
                Self::default()
            }
        }
    }

    pub fn save(&self) {
        if let Some(path) = Self::config_path() {
            if let Err(e) = self.save_to(&path) {
                tracing::error!("failed to save settings: {e}");
            }
        }
    }

    pub fn save_to(&self, path: &Path) -> std::io::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        std::fs::write(path, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_round_trip_through_the_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");

        let mut settings = DashboardSettings::default();
        settings.host = "10.0.0.7".into();
        settings.enable_log = true;
        settings.view.map_zoom = 8.0;
        settings.save_to(&path).unwrap();

        let loaded = DashboardSettings::load_from(&path);
        assert_eq!(loaded.host, "10.0.0.7");
        assert!(loaded.enable_log);
        assert_eq!(loaded.view.map_zoom, 8.0);
    }

    #[test]
    fn missing_file_and_partial_json_fall_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.json");
        let loaded = DashboardSettings::load_from(&missing);
        assert_eq!(loaded.host, "localhost");
        assert_eq!(loaded.map_opacity, 0.4);

        let partial = dir.path().join("partial.json");
        std::fs::write(&partial, r#"{"host": "lab"}"#).unwrap();
        let loaded = DashboardSettings::load_from(&partial);
        assert_eq!(loaded.host, "lab");
        assert!(!loaded.enable_log);
        assert_eq!(loaded.layout_list_poll_secs, 30);
    }
}
