//! Audio preferences
//!
//! In-memory for the lifetime of the process; the pause popup toggles them.

use serde::{Deserialize, Serialize};

/// Sound preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Sound effects enabled
    pub fx_enabled: bool,
    /// Background music enabled
    pub music_enabled: bool,
    /// Sound effects volume (0.0 - 1.0)
    pub fx_volume: f32,
    /// Music volume (0.0 - 1.0)
    pub music_volume: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            fx_enabled: true,
            music_enabled: true,
            fx_volume: 0.1,
            music_volume: 0.3,
        }
    }
}

impl Settings {
    /// Effective sound effect volume, zero when muted
    pub fn effective_fx_volume(&self) -> f32 {
        if self.fx_enabled { self.fx_volume } else { 0.0 }
    }

    /// Effective music volume, zero when muted
    pub fn effective_music_volume(&self) -> f32 {
        if self.music_enabled {
            self.music_volume
        } else {
            0.0
        }
    }

    pub fn toggle_fx(&mut self) {
        self.fx_enabled = !self.fx_enabled;
    }

    pub fn toggle_music(&mut self) {
        self.music_enabled = !self.music_enabled;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_muted_fx_has_zero_volume() {
        let mut settings = Settings::default();
        assert_eq!(settings.effective_fx_volume(), 0.1);
        settings.toggle_fx();
        assert_eq!(settings.effective_fx_volume(), 0.0);
        assert_eq!(settings.fx_volume, 0.1, "mute does not clobber the level");
    }

    #[test]
    fn test_music_toggle_round_trips() {
        let mut settings = Settings::default();
        settings.toggle_music();
        settings.toggle_music();
        assert_eq!(settings.effective_music_volume(), 0.3);
    }
}
