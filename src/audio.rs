//! Audio/visual cue collaborator
//!
//! The simulation never waits on cues. Every call here is fire-and-forget:
//! a sink that fails to play something logs it and moves on.

use crate::scene::PlayerAppearance;
use crate::settings::Settings;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Glider flaps upward
    Flap,
    /// Obstacle pair passed
    Score,
    /// Session ended
    Crash,
}

/// Commands the host issues in response to simulation events
pub trait CueSink {
    fn start_music(&mut self);
    fn stop_music(&mut self);
    fn play(&mut self, effect: SoundEffect);
    fn set_player_appearance(&mut self, appearance: PlayerAppearance);
    fn show_overlay(&mut self, message: &str);
    fn hide_overlay(&mut self);
}

/// Audio manager for the game.
///
/// Tracks the music state and volume mix and reports cues through the log;
/// asset decoding and playback belong to the platform.
#[derive(Debug, Clone)]
pub struct AudioManager {
    settings: Settings,
    music_playing: bool,
    appearance: PlayerAppearance,
    overlay: Option<String>,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

impl AudioManager {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            music_playing: false,
            appearance: PlayerAppearance::Flying,
            overlay: None,
        }
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.settings.muted = muted;
    }

    pub fn music_playing(&self) -> bool {
        self.music_playing
    }

    pub fn appearance(&self) -> PlayerAppearance {
        self.appearance
    }

    pub fn overlay(&self) -> Option<&str> {
        self.overlay.as_deref()
    }
}

impl CueSink for AudioManager {
    fn start_music(&mut self) {
        self.music_playing = true;
        let vol = self.settings.effective_music_volume();
        if vol > 0.0 {
            log::info!("Background music started (volume {vol:.2})");
        }
    }

    fn stop_music(&mut self) {
        if self.music_playing {
            self.music_playing = false;
            log::info!("Background music stopped");
        }
    }

    fn play(&mut self, effect: SoundEffect) {
        let vol = self.settings.effective_sfx_volume();
        if vol <= 0.0 {
            return;
        }
        log::debug!("Play {effect:?} (volume {vol:.2})");
    }

    fn set_player_appearance(&mut self, appearance: PlayerAppearance) {
        self.appearance = appearance;
    }

    fn show_overlay(&mut self, message: &str) {
        log::info!("{}", message.replace('\n', " / "));
        self.overlay = Some(message.to_string());
    }

    fn hide_overlay(&mut self) {
        self.overlay = None;
    }
}
