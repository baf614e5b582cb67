//! Audio triggers
//!
//! The simulation never plays sound itself; it raises events and the
//! orchestrator forwards the audible ones to whatever backend the host
//! plugged in. No backend means silence, never an error.

use serde::{Deserialize, Serialize};

use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoundEffect {
    /// Player bullet fired
    PlayerFired,
    /// Mega baddie shot
    MegaFired,
    /// Mega baddie destroyed
    MegaExploded,
    /// Lives ran out
    GameOver,
    /// Ship lost a life
    HullDamage,
}

impl SoundEffect {
    /// The sound a simulation event should trigger, if any
    pub fn for_event(event: GameEvent) -> Option<Self> {
        match event {
            GameEvent::PlayerFired => Some(SoundEffect::PlayerFired),
            GameEvent::MegaFired => Some(SoundEffect::MegaFired),
            GameEvent::MegaExploded => Some(SoundEffect::MegaExploded),
            GameEvent::HullDamage { .. } => Some(SoundEffect::HullDamage),
            GameEvent::GameOver => Some(SoundEffect::GameOver),
            GameEvent::MegaSpawned | GameEvent::BaddieDestroyed => None,
        }
    }
}

/// A playback backend. Fire-and-forget: no acknowledgment, no errors.
pub trait AudioSink {
    fn play(&mut self, effect: SoundEffect, volume: f32);
}

/// Backend that only logs what it would have played
#[derive(Debug, Clone, Copy, Default)]
pub struct LogAudio;

impl AudioSink for LogAudio {
    fn play(&mut self, effect: SoundEffect, volume: f32) {
        log::debug!("Sound {:?} at volume {:.2}", effect, volume);
    }
}

/// Routes simulation events to the attached backend at the configured level
pub struct AudioManager {
    sink: Option<Box<dyn AudioSink>>,
    volume: f32,
    muted: bool,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::silent()
    }
}

impl std::fmt::Debug for AudioManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AudioManager")
            .field("has_sink", &self.has_sink())
            .field("volume", &self.volume)
            .field("muted", &self.muted)
            .finish()
    }
}

impl AudioManager {
    pub const DEFAULT_VOLUME: f32 = 0.8;

    /// No backend attached; every trigger is dropped
    pub fn silent() -> Self {
        Self {
            sink: None,
            volume: Self::DEFAULT_VOLUME,
            muted: false,
        }
    }

    pub fn with_sink(sink: impl AudioSink + 'static) -> Self {
        let mut audio = Self::silent();
        audio.attach(Box::new(sink));
        audio
    }

    /// Replace the backend, keeping volume and mute
    pub fn attach(&mut self, sink: Box<dyn AudioSink>) {
        self.sink = Some(sink);
    }

    pub fn has_sink(&self) -> bool {
        self.sink.is_some()
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }

    /// Playback level for every effect, clamped to 0.0..=1.0
    pub fn set_volume(&mut self, volume: f32) {
        self.volume = volume.clamp(0.0, 1.0);
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Play an effect unless muted, silenced or unplugged
    pub fn play(&mut self, effect: SoundEffect) {
        if self.muted || self.volume <= 0.0 {
            return;
        }
        let volume = self.volume;
        if let Some(sink) = self.sink.as_mut() {
            sink.play(effect, volume);
        }
    }

    /// Play whatever sound an event maps to
    pub fn handle_event(&mut self, event: GameEvent) {
        if let Some(effect) = SoundEffect::for_event(event) {
            self.play(effect);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    #[derive(Clone, Default)]
    struct Recorder(Rc<RefCell<Vec<(SoundEffect, f32)>>>);

    impl AudioSink for Recorder {
        fn play(&mut self, effect: SoundEffect, volume: f32) {
            self.0.borrow_mut().push((effect, volume));
        }
    }

    #[test]
    fn test_missing_sink_is_silent() {
        let mut audio = AudioManager::default();
        assert!(!audio.has_sink());
        audio.play(SoundEffect::GameOver);
        audio.handle_event(GameEvent::PlayerFired);
    }

    #[test]
    fn test_events_map_to_sounds() {
        let recorder = Recorder::default();
        let mut audio = AudioManager::with_sink(recorder.clone());
        for event in [
            GameEvent::PlayerFired,
            GameEvent::MegaSpawned,
            GameEvent::BaddieDestroyed,
            GameEvent::HullDamage { lives: 2 },
            GameEvent::GameOver,
        ] {
            audio.handle_event(event);
        }
        let played: Vec<_> = recorder.0.borrow().iter().map(|(e, _)| *e).collect();
        assert_eq!(
            played,
            vec![
                SoundEffect::PlayerFired,
                SoundEffect::HullDamage,
                SoundEffect::GameOver
            ]
        );
    }

    #[test]
    fn test_mute_and_volume() {
        let recorder = Recorder::default();
        let mut audio = AudioManager::with_sink(recorder.clone());
        audio.play(SoundEffect::PlayerFired);
        audio.set_volume(2.0);
        audio.play(SoundEffect::MegaFired);
        audio.set_volume(0.5);
        audio.play(SoundEffect::MegaFired);
        audio.set_muted(true);
        audio.play(SoundEffect::MegaFired);
        audio.set_muted(false);
        audio.set_volume(-1.0);
        audio.play(SoundEffect::MegaFired);
        assert_eq!(
            recorder.0.borrow().as_slice(),
            &[
                (SoundEffect::PlayerFired, AudioManager::DEFAULT_VOLUME),
                (SoundEffect::MegaFired, 1.0),
                (SoundEffect::MegaFired, 0.5),
            ]
        );
    }

    #[test]
    fn test_attach_keeps_settings() {
        let recorder = Recorder::default();
        let mut audio = AudioManager::silent();
        audio.set_volume(0.25);
        audio.attach(Box::new(recorder.clone()));
        audio.handle_event(GameEvent::MegaExploded);
        assert_eq!(
            recorder.0.borrow().as_slice(),
            &[(SoundEffect::MegaExploded, 0.25)]
        );
    }
}
