use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::config::{new_slider_settings, GlobalDefaults};
use crate::settings::SettingsMap;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SliderStatus {
    #[default]
    Draft,
    Published,
    Trashed,
}

/// A persisted slider: an opaque id, a lifecycle state, and its settings bag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slider {
    pub id: u64,
    #[serde(default)]
    pub status: SliderStatus,
    #[serde(default)]
    pub settings: SettingsMap,
}

impl Slider {
    /// A freshly created draft, seeded from the store-wide defaults.
    pub fn new(id: u64, globals: &GlobalDefaults) -> Slider {
        Slider {
            id,
            status: SliderStatus::Draft,
            settings: new_slider_settings(globals),
        }
    }

    pub fn is_published(&self) -> bool {
        self.status == SliderStatus::Published
    }
}

/// Read access to persisted sliders. The host's storage layer implements
/// this; the crate ships [`MemoryStore`] for tests and the CLI.
pub trait SliderStore {
    fn slider(&self, id: u64) -> Option<Slider>;
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    sliders: HashMap<u64, Slider>,
}

impl MemoryStore {
    pub fn new() -> MemoryStore {
        MemoryStore::default()
    }

    pub fn insert(&mut self, slider: Slider) {
        self.sliders.insert(slider.id, slider);
    }
}

impl SliderStore for MemoryStore {
    fn slider(&self, id: u64) -> Option<Slider> {
        self.sliders.get(&id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_sliders_start_as_drafts() {
        let slider = Slider::new(7, &GlobalDefaults::default());
        assert_eq!(slider.status, SliderStatus::Draft);
        assert!(!slider.is_published());
        assert!(!slider.settings.is_empty());
    }

    #[test]
    fn store_round_trip() {
        let mut store = MemoryStore::new();
        store.insert(Slider::new(3, &GlobalDefaults::default()));

        assert!(store.slider(3).is_some());
        assert!(store.slider(4).is_none());
    }
}
