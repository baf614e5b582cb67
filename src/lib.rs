//! Star Attack - a bottom-of-the-screen arcade shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, movement, collisions, scoring)
//! - `game`: Screen state machine that drives the simulation once per tick
//! - `renderer`: Render sink interface and a text HUD
//! - `audio`: Audio trigger interface
//! - `platform`: Clock and input abstractions for host loops
//! - `config`: Immutable gameplay tuning

pub mod audio;
pub mod config;
pub mod error;
pub mod game;
pub mod platform;
pub mod renderer;
pub mod sim;

pub use audio::{AudioManager, AudioSink, SoundEffect};
pub use config::GameConfig;
pub use error::{ConfigError, SimError};
pub use game::{Game, Screen};
pub use platform::{Clock, FrameTimer, InputSnapshot, ManualClock, SystemClock};
pub use renderer::{Frame, RenderSink};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, one frame per tick)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per host frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Largest host frame delta fed into the accumulator (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Screen dimensions
    pub const SCREEN_WIDTH: f32 = 1250.0;
    pub const SCREEN_HEIGHT: f32 = 800.0;
    /// Strip at the bottom of the screen the ship sits on
    pub const GROUND_HEIGHT: f32 = 60.0;

    /// Player ship
    pub const PLAYER_WIDTH: f32 = 30.0;
    pub const PLAYER_HEIGHT: f32 = 35.0;
    pub const PLAYER_START_X: f32 = 200.0;
    /// Horizontal speed (pixels per frame)
    pub const PLAYER_VEL: f32 = 5.0;
    pub const STARTING_LIVES: u8 = 3;

    /// Player bullets
    pub const BULLET_SIZE: f32 = 10.0;
    /// Upward speed (pixels per frame)
    pub const BULLET_VEL: f32 = 7.0;
    pub const BULLET_COOLDOWN_MS: u64 = 250;

    /// Regular baddies
    pub const BADDIE_WIDTH: f32 = 20.0;
    pub const BADDIE_HEIGHT: f32 = 20.0;
    /// Fall speed (pixels per frame)
    pub const BADDIE_VEL: f32 = 2.5;
    pub const BADDIES_PER_WAVE: usize = 3;
    /// Spawn cadence: starts at 2s, shrinks by 50ms per wave down to 200ms
    pub const BADDIE_SPAWN_INTERVAL_MS: u64 = 2000;
    pub const BADDIE_SPAWN_STEP_MS: u64 = 50;
    pub const BADDIE_SPAWN_FLOOR_MS: u64 = 200;

    /// Mega baddie
    pub const MEGA_BADDIE_WIDTH: f32 = 60.0;
    pub const MEGA_BADDIE_HEIGHT: f32 = 60.0;
    /// Speed on each axis (pixels per frame)
    pub const MEGA_BADDIE_VEL: f32 = 0.8;
    pub const MEGA_BADDIE_HEALTH: u32 = 10;
    /// Topmost spawn row for the mega baddie
    pub const MEGA_SPAWN_MIN_Y: f32 = 50.0;
    /// First mega baddie appears after this many seconds
    pub const MEGA_FIRST_SPAWN_SECS: u64 = 30;
    /// Minimum gap between the previous mega baddie and the next one
    pub const MEGA_RESPAWN_SECS: u64 = 40;
    pub const MEGA_FIRE_RATE_MS: u64 = 1000;
    pub const MEGA_PROJECTILE_RADIUS: f32 = 8.0;
    /// Fall speed (pixels per frame)
    pub const MEGA_PROJECTILE_VEL: f32 = 4.0;

    /// Scoring
    pub const TIME_BONUS_INTERVAL_SECS: u64 = 10;
    pub const TIME_BONUS: u64 = 10;
    pub const BADDIE_SCORE_VALUE: u64 = 5;
    pub const MEGA_SCORE_VALUE: u64 = 50;
}
