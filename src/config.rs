use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

pub const DEFAULT_PREFERENCES_PATH: &str = "config/preferences.json";

/// Display preferences persisted between runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub dark_mode: bool,
    #[serde(default = "default_sound_cues")]
    pub sound_cues: bool,
}

fn default_sound_cues() -> bool {
    true
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            dark_mode: false,
            sound_cues: true,
        }
    }
}

pub fn load_preferences(path: &str) -> Preferences {
    let path = Path::new(path);
    match fs::read_to_string(path) {
        Ok(content) => match serde_json::from_str::<Preferences>(&content) {
            Ok(preferences) => preferences,
            Err(err) => {
                log::warn!(
                    "Failed to parse preferences file {}: {err}",
                    path.display()
                );
                Preferences::default()
            }
        },
        Err(err) => {
            log::info!(
                "Preferences file {} not found ({err}); using defaults",
                path.display()
            );
            Preferences::default()
        }
    }
}

pub fn save_preferences(path: &str, preferences: &Preferences) -> std::io::Result<()> {
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let json = serde_json::to_string_pretty(preferences)?;
    fs::write(path, json)
}

/// Best-effort write used from the settings popup.
pub fn persist_preferences(path: &str, preferences: &Preferences) {
    if let Err(err) = save_preferences(path, preferences) {
        log::error!("Failed to write preferences to {path}: {err}");
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
