//! Browser configuration

use serde::{Deserialize, Serialize};
use std::path::Path;

use jelajah_session::DEFAULT_HOME_TITLE;
use jelajah_tabs::PageKind;

use crate::error::CoreError;
use crate::Result;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Shown in the window header and as the first breadcrumb
    pub site_title: String,
    /// Title of the tab seeded at startup
    pub home_title: String,
    /// Page opened by the tab bar's "+" button
    pub new_tab_page: PageKind,
    /// Play interaction sounds
    pub sound_enabled: bool,
    /// Playback volume, 0.0 to 1.0
    pub sound_volume: f32,
    pub playback_rate: f32,
}

impl Config {
    /// Load configuration from a JSON file. Missing fields take their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&raw)?;
        config.validate()?;

        tracing::debug!(path = %path.display(), "Loaded configuration");

        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.home_title.trim().is_empty() {
            return Err(CoreError::Config("home_title cannot be empty".to_string()));
        }
        if !(0.0..=1.0).contains(&self.sound_volume) {
            return Err(CoreError::Config(format!(
                "sound_volume must be between 0.0 and 1.0, got {}",
                self.sound_volume
            )));
        }
        if self.playback_rate.is_nan() || self.playback_rate <= 0.0 {
            return Err(CoreError::Config(format!(
                "playback_rate must be positive, got {}",
                self.playback_rate
            )));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            site_title: "Jelajah Jakarta".to_string(),
            home_title: DEFAULT_HOME_TITLE.to_string(),
            new_tab_page: PageKind::Gallery,
            sound_enabled: true,
            sound_volume: 0.3,
            playback_rate: 1.0,
        }
    }
}
