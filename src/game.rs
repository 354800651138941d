//! Host-facing driver
//!
//! Owns the session and its collaborators. The host calls `frame` once per
//! display frame, `activate` when the designated key is pressed and `resize`
//! when the window changes; the game forwards simulation events to the cue
//! sink and publishes a fresh scene every frame.

use crate::audio::{CueSink, SoundEffect};
use crate::consts::GAME_OVER_MESSAGE;
use crate::error::ConfigError;
use crate::scene::{PlayerAppearance, SceneFrame, ScenePublisher};
use crate::sim::{self, GameEvent, Session, SessionPhase};

pub struct Game {
    session: Session,
    cues: Box<dyn CueSink>,
    publisher: Box<dyn ScenePublisher>,
}

impl Game {
    pub fn new(session: Session, mut cues: Box<dyn CueSink>, publisher: Box<dyn ScenePublisher>) -> Self {
        cues.start_music();
        Self {
            session,
            cues,
            publisher,
        }
    }

    /// One display frame: tick, forward events, publish the scene
    pub fn frame(&mut self) {
        sim::tick(&mut self.session);
        self.flush_events();
        let frame = SceneFrame::from_session(&self.session);
        self.publisher.publish(&frame);
    }

    /// The single jump/restart input
    pub fn activate(&mut self) {
        let was_running = self.session.phase == SessionPhase::Running;
        sim::activate(&mut self.session);
        if was_running {
            self.cues.play(SoundEffect::Flap);
        }
        self.flush_events();
    }

    pub fn resize(&mut self, width: f32, height: f32) -> Result<(), ConfigError> {
        self.session.on_viewport_resize(width, height)
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    fn flush_events(&mut self) {
        for event in self.session.drain_events() {
            match event {
                GameEvent::Scored { .. } => self.cues.play(SoundEffect::Score),
                GameEvent::Crashed { .. } => {
                    self.cues.stop_music();
                    self.cues.play(SoundEffect::Crash);
                    self.cues.set_player_appearance(PlayerAppearance::Crashed);
                    self.cues.show_overlay(GAME_OVER_MESSAGE);
                }
                GameEvent::Restarted => {
                    self.cues.hide_overlay();
                    self.cues.set_player_appearance(PlayerAppearance::Flying);
                    self.cues.start_music();
                }
            }
        }
    }
}
