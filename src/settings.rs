//! Game settings and preferences
//!
//! Presentation-side knobs only: nothing in here feeds back into the
//! simulation. Persisted as JSON next to the highscores file.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;

/// Player preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Background music volume (0.0 - 1.0)
    pub music_volume: f32,
    /// Mute toggle from the HUD
    pub muted: bool,

    // === HUD ===
    /// Show FPS counter
    pub show_fps: bool,

    // === Rendering ===
    /// How far ahead scenery is drawn (metres); matches the fog far plane
    pub draw_distance: f32,

    // === Accessibility ===
    /// Minimize camera shake and tilt effects
    pub reduced_motion: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            master_volume: 0.8,
            music_volume: 0.7,
            muted: false,
            show_fps: true,
            draw_distance: 800.0,
            reduced_motion: false,
        }
    }
}

impl Settings {
    /// Music volume after the mute toggle is applied
    pub fn effective_music_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            (self.master_volume * self.music_volume).clamp(0.0, 1.0)
        }
    }

    /// Load settings, falling back to defaults when missing or unreadable
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("loaded settings from {}", path.display());
                    settings
                }
                Err(err) => {
                    log::warn!("ignoring malformed settings {}: {err}", path.display());
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("using default settings");
                Self::default()
            }
        }
    }

    /// Persist settings
    pub fn save(&self, path: &Path) -> io::Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(io::Error::other)?;
        fs::write(path, json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mute_silences_music() {
        let mut settings = Settings::default();
        assert!(settings.effective_music_volume() > 0.0);
        settings.muted = true;
        assert_eq!(settings.effective_music_volume(), 0.0);
    }

    #[test]
    fn test_save_load_round_trip() {
        let mut settings = Settings::default();
        settings.draw_distance = 500.0;
        settings.muted = true;

        let path = std::env::temp_dir().join("lonely_highway_settings_test.json");
        settings.save(&path).unwrap();
        let restored = Settings::load(&path);
        fs::remove_file(&path).unwrap();

        assert_eq!(restored, settings);
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let path = Path::new("no-such-settings-file.json");
        assert_eq!(Settings::load(path), Settings::default());
    }
}
