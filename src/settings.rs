// User settings persisted across visits
use serde::{Deserialize, Serialize};

use crate::platform::storage;
use crate::state::grid::DEFAULT_GRID_SIZE;
use crate::state::transform::DEFAULT_OPACITY;

pub const SETTINGS_KEY: &str = "at_settings";

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub opacity: f64,
    pub grid_size: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            opacity: DEFAULT_OPACITY,
            grid_size: DEFAULT_GRID_SIZE,
        }
    }
}

impl Settings {
    pub fn from_json(raw: &str) -> Self {
        serde_json::from_str(raw).unwrap_or_default()
    }

    pub fn load() -> Self {
        storage::get(SETTINGS_KEY)
            .map(|raw| Self::from_json(&raw))
            .unwrap_or_default()
    }

    pub fn save(&self) {
        if let Ok(s) = serde_json::to_string(self) {
            storage::set(SETTINGS_KEY, &s);
        }
    }
}
