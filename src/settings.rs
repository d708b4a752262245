//! Game settings and preferences
//!
//! Persisted as JSON next to the executable; the simulation itself is never
//! saved. Loading always succeeds - a missing or corrupt file falls back to
//! defaults so the game can start regardless.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Effect quality preset levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum QualityPreset {
    Low,
    #[default]
    Medium,
    High,
}

impl QualityPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            QualityPreset::Low => "Low",
            QualityPreset::Medium => "Medium",
            QualityPreset::High => "High",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "low" => Some(QualityPreset::Low),
            "medium" | "med" => Some(QualityPreset::Medium),
            "high" => Some(QualityPreset::High),
            _ => None,
        }
    }

    /// Particles per watering burst for this preset
    pub fn effect_burst_count(&self) -> usize {
        match self {
            QualityPreset::Low => 4,
            QualityPreset::Medium => 10,
            QualityPreset::High => 25,
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Effect quality preset
    pub quality: QualityPreset,
    /// Particle effects (watering sparkles)
    pub particles: bool,
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Reduced motion (minimize bursts and movement effects)
    pub reduced_motion: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            quality: QualityPreset::Medium,
            particles: true,
            master_volume: 0.8,
            sfx_volume: 1.0,
            reduced_motion: false,
        }
    }
}

impl Settings {
    /// Particles a front end should spawn per watering burst, respecting the
    /// particle toggle and reduced motion
    pub fn effect_burst_count(&self) -> usize {
        if !self.particles || self.reduced_motion {
            0
        } else {
            self.quality.effect_burst_count()
        }
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("loaded settings from {}", path.display());
                    settings
                }
                Err(err) => {
                    log::warn!("ignoring malformed settings file: {err}");
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("no settings file, using defaults");
                Self::default()
            }
        }
    }

    /// Save settings as JSON; failure is logged, never fatal
    pub fn save(&self, path: &Path) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(err) = std::fs::write(path, json) {
                    log::warn!("could not save settings: {err}");
                } else {
                    log::info!("settings saved");
                }
            }
            Err(err) => log::warn!("could not serialize settings: {err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_burst_count_respects_toggles() {
        let mut settings = Settings::default();
        assert_eq!(settings.effect_burst_count(), 10);

        settings.quality = QualityPreset::High;
        assert_eq!(settings.effect_burst_count(), 25);

        settings.reduced_motion = true;
        assert_eq!(settings.effect_burst_count(), 0);

        settings.reduced_motion = false;
        settings.particles = false;
        assert_eq!(settings.effect_burst_count(), 0);
    }

    #[test]
    fn test_preset_round_trip() {
        for preset in [QualityPreset::Low, QualityPreset::Medium, QualityPreset::High] {
            assert_eq!(QualityPreset::from_str(preset.as_str()), Some(preset));
        }
        assert_eq!(QualityPreset::from_str("ultra"), None);
    }

    #[test]
    fn test_load_missing_file_defaults() {
        let settings = Settings::load(Path::new("/nonexistent/settings.json"));
        assert_eq!(settings.quality, QualityPreset::Medium);
        assert!(settings.particles);
    }

    #[test]
    fn test_json_round_trip() {
        let mut settings = Settings::default();
        settings.quality = QualityPreset::Low;
        settings.master_volume = 0.25;

        let json = serde_json::to_string(&settings).unwrap();
        let back: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(back.quality, QualityPreset::Low);
        assert_eq!(back.master_volume, 0.25);
    }
}
