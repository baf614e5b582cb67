//! Game loop orchestrator
//!
//! Owns the session, the RNG and the collaborators. Hosts call `step` once per
//! fixed tick; the orchestrator advances the screen state machine, runs the
//! simulation while in `Running`, and forwards events to audio and the current
//! frame to the renderer.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::audio::{AudioManager, AudioSink};
use crate::config::GameConfig;
use crate::consts::MAX_FRAME_DT;
use crate::error::SimError;
use crate::platform::InputSnapshot;
use crate::renderer::{Frame, NullRenderer, RenderSink};
use crate::sim::{self, Session, SessionSummary};

/// Current screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Screen {
    /// Title screen, waiting for any key
    Start,
    /// Controls overview, waiting for any key
    Instructions,
    /// Active gameplay
    Running,
    /// Lives ran out; waiting for restart or quit
    GameOver,
    /// Quit was requested; the host should exit
    Terminated,
}

pub struct Game {
    config: GameConfig,
    seed: u64,
    rng: Pcg32,
    session: Session,
    screen: Screen,
    audio: AudioManager,
    renderer: Box<dyn RenderSink>,
}

impl Game {
    /// Create a game on the start screen. Fails if the config is invalid.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, SimError> {
        config.validate()?;
        let session = Session::new(&config);
        Ok(Self {
            config,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            session,
            screen: Screen::Start,
            audio: AudioManager::silent(),
            renderer: Box::new(NullRenderer),
        })
    }

    pub fn with_audio(mut self, sink: impl AudioSink + 'static) -> Self {
        self.audio.attach(Box::new(sink));
        self
    }

    pub fn with_renderer(mut self, renderer: impl RenderSink + 'static) -> Self {
        self.renderer = Box::new(renderer);
        self
    }

    pub fn audio(&self) -> &AudioManager {
        &self.audio
    }

    pub fn audio_mut(&mut self) -> &mut AudioManager {
        &mut self.audio
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Lives have run out this session
    pub fn is_terminal(&self) -> bool {
        self.session.terminal
    }

    /// Quit was requested
    pub fn is_terminated(&self) -> bool {
        self.screen == Screen::Terminated
    }

    pub fn summary(&self) -> SessionSummary {
        self.session.summary(self.seed)
    }

    /// Advance one tick of `dt` seconds with the given input.
    /// `dt` must lie in `0..=MAX_FRAME_DT`; hosts clamp long frames first.
    pub fn step(&mut self, dt: f32, input: &InputSnapshot) -> Result<&Session, SimError> {
        if !(0.0..=MAX_FRAME_DT).contains(&dt) {
            return Err(SimError::InvalidDelta(dt));
        }
        if self.screen == Screen::Terminated {
            return Ok(&self.session);
        }
        if input.quit {
            log::info!("Quit requested on {:?} screen", self.screen);
            self.screen = Screen::Terminated;
            return Ok(&self.session);
        }

        match self.screen {
            Screen::Start => {
                if input.any_key {
                    self.screen = Screen::Instructions;
                }
            }
            Screen::Instructions => {
                if input.any_key {
                    self.screen = Screen::Running;
                    log::info!("Session started (seed {})", self.seed);
                    if !self.audio.has_sink() {
                        log::warn!("No audio backend - audio disabled");
                    }
                }
            }
            Screen::Running => self.run_tick(dt, input),
            Screen::GameOver => {
                if input.restart {
                    self.reset();
                }
            }
            Screen::Terminated => {}
        }

        self.render();
        Ok(&self.session)
    }

    /// Start a fresh session in place and go straight to gameplay
    pub fn reset(&mut self) {
        self.session.reset(&self.config);
        self.screen = Screen::Running;
        log::info!("Session reset");
    }

    fn run_tick(&mut self, dt: f32, input: &InputSnapshot) {
        sim::tick(
            &mut self.session,
            input,
            sim::frame_duration(dt),
            &self.config,
            &mut self.rng,
        );
        for event in self.session.drain_events() {
            self.audio.handle_event(event);
        }
        if self.session.terminal {
            self.screen = Screen::GameOver;
        }
    }

    fn render(&mut self) {
        let frame = match self.screen {
            Screen::Start => Frame::Start,
            Screen::Instructions => Frame::Instructions,
            Screen::Running => Frame::Running(&self.session),
            Screen::GameOver => Frame::GameOver {
                elapsed: self.session.elapsed,
                score: self.session.score,
            },
            Screen::Terminated => return,
        };
        self.renderer.render(&frame);
    }
}
