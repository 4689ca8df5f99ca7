//! Player display preferences
//!
//! Persisted separately from gameplay configuration in LocalStorage.

use serde::{Deserialize, Serialize};

/// Display preferences (never affect the simulation)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Show fuel/velocity/angle readouts
    pub show_hud: bool,
    /// Draw the star background
    pub starfield: bool,
    /// Number of stars per frame
    pub star_count: usize,
    /// Randomize flame length every frame
    pub flame_flicker: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            show_hud: true,
            starfield: true,
            star_count: 100,
            flame_flicker: true,
        }
    }
}

impl Settings {
    /// Stars to draw this frame
    pub fn effective_star_count(&self) -> usize {
        if self.starfield { self.star_count } else { 0 }
    }

    /// Flip the preference bound to `key` (h, s or f). Returns whether one changed.
    pub fn toggle_for_key(&mut self, key: &str) -> bool {
        let flag = match key {
            "h" | "H" => &mut self.show_hud,
            "s" | "S" => &mut self.starfield,
            "f" | "F" => &mut self.flame_flicker,
            _ => return false,
        };
        *flag = !*flag;
        true
    }

    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "lunar_lander_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(settings) = serde_json::from_str(&json) {
                    log::info!("Loaded settings from LocalStorage");
                    return settings;
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Settings saved");
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starfield_toggle() {
        let mut settings = Settings::default();
        assert_eq!(settings.effective_star_count(), 100);
        settings.starfield = false;
        assert_eq!(settings.effective_star_count(), 0);
    }

    #[test]
    fn test_toggle_keys() {
        let mut settings = Settings::default();
        assert!(settings.toggle_for_key("h"));
        assert!(!settings.show_hud);
        assert!(settings.toggle_for_key("S"));
        assert!(!settings.starfield);
        assert!(settings.toggle_for_key("f"));
        assert!(!settings.flame_flicker);
        assert!(settings.toggle_for_key("H"));
        assert!(settings.show_hud);

        let before = settings.clone();
        assert!(!settings.toggle_for_key("ArrowUp"));
        assert_eq!(settings, before);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"flame_flicker": false}"#).unwrap();
        assert!(!settings.flame_flicker);
        assert!(settings.show_hud);
        assert_eq!(settings.star_count, 100);
    }
}
