//! Interaction sounds
//!
//! Cues are fire-and-forget. A failing audio backend is logged and
//! otherwise ignored.

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::config::Config;
use crate::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SoundCue {
    Click,
    Swoosh,
    Hover,
    TabSwitch,
    CardHover,
}

impl SoundCue {
    pub fn name(&self) -> &'static str {
        match self {
            SoundCue::Click => "click",
            SoundCue::Swoosh => "swoosh",
            SoundCue::Hover => "hover",
            SoundCue::TabSwitch => "tab-switch",
            SoundCue::CardHover => "card-hover",
        }
    }

    /// Asset path served alongside the page
    pub fn asset_path(&self) -> String {
        format!("/sounds/{}.mp3", self.name())
    }
}

/// Audio backend
pub trait SoundSink: Send + Sync {
    fn play(&self, cue: SoundCue, volume: f32, playback_rate: f32) -> Result<()>;
}

/// Discards every cue
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl SoundSink for NullSink {
    fn play(&self, _cue: SoundCue, _volume: f32, _playback_rate: f32) -> Result<()> {
        Ok(())
    }
}

/// Keeps the cues it was asked to play, in order
#[derive(Debug, Default)]
pub struct RecordingSink {
    played: Mutex<Vec<SoundCue>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn played(&self) -> Vec<SoundCue> {
        self.played.lock().clone()
    }

    pub fn clear(&self) {
        self.played.lock().clear();
    }
}

impl SoundSink for RecordingSink {
    fn play(&self, cue: SoundCue, _volume: f32, _playback_rate: f32) -> Result<()> {
        self.played.lock().push(cue);
        Ok(())
    }
}

pub struct SoundManager {
    sink: Arc<dyn SoundSink>,
    enabled: AtomicBool,
    volume: f32,
    playback_rate: f32,
}

impl SoundManager {
    pub fn new(sink: Arc<dyn SoundSink>) -> Self {
        Self::from_config(sink, &Config::default())
    }

    pub fn from_config(sink: Arc<dyn SoundSink>, config: &Config) -> Self {
        Self {
            sink,
            enabled: AtomicBool::new(config.sound_enabled),
            volume: config.sound_volume,
            playback_rate: config.playback_rate,
        }
    }

    pub fn play(&self, cue: SoundCue) {
        if !self.is_enabled() {
            return;
        }

        if let Err(e) = self.sink.play(cue, self.volume, self.playback_rate) {
            tracing::debug!(cue = cue.name(), error = %e, "Sound playback failed");
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Relaxed)
    }

    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::Relaxed);
    }

    /// Flip the enabled flag, returning the new value
    pub fn toggle(&self) -> bool {
        !self.enabled.fetch_xor(true, Ordering::Relaxed)
    }
}

impl std::fmt::Debug for SoundManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SoundManager")
            .field("enabled", &self.is_enabled())
            .field("volume", &self.volume)
            .field("playback_rate", &self.playback_rate)
            .finish()
    }
}
