//! Player preferences
//!
//! Persisted in LocalStorage, separate from any session state.

use serde::{Deserialize, Serialize};

/// Player preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Silence every cue
    pub muted: bool,
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            muted: false,
            master_volume: 1.0,
        }
    }
}

impl Settings {
    /// LocalStorage key
    const STORAGE_KEY: &'static str = "rain_drop_rush_settings";

    /// Flip the mute flag, returning the new value
    pub fn toggle_mute(&mut self) -> bool {
        self.muted = !self.muted;
        self.muted
    }

    /// Parse stored JSON, falling back to defaults when it is unreadable
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str::<Settings>(json) {
            Ok(mut settings) => {
                settings.master_volume = settings.master_volume.clamp(0.0, 1.0);
                settings
            }
            Err(e) => {
                log::warn!("Ignoring stored settings: {}", e);
                Self::default()
            }
        }
    }

    /// Stored preferences, or defaults when there are none
    pub fn load() -> Self {
        match read_stored(Self::STORAGE_KEY) {
            Some(json) => {
                log::info!("Restored preferences");
                Self::from_json(&json)
            }
            None => Self::default(),
        }
    }

    pub fn save(&self) {
        match serde_json::to_string(self) {
            Ok(json) => write_stored(Self::STORAGE_KEY, &json),
            Err(e) => log::warn!("Could not encode preferences: {}", e),
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

#[cfg(target_arch = "wasm32")]
fn read_stored(key: &str) -> Option<String> {
    local_storage()?.get_item(key).ok().flatten()
}

#[cfg(target_arch = "wasm32")]
fn write_stored(key: &str, value: &str) {
    let Some(storage) = local_storage() else {
        log::warn!("LocalStorage unavailable, preferences not saved");
        return;
    };
    if storage.set_item(key, value).is_err() {
        log::warn!("LocalStorage rejected preferences");
    }
}

// Natively there is nowhere to persist to
#[cfg(not(target_arch = "wasm32"))]
fn read_stored(_key: &str) -> Option<String> {
    None
}

#[cfg(not(target_arch = "wasm32"))]
fn write_stored(_key: &str, _value: &str) {}
