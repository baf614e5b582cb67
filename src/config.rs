//! Gameplay tuning
//!
//! Built once at startup, validated, then shared read-only by every system.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Immutable gameplay configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    // === Screen ===
    pub screen_width: f32,
    pub screen_height: f32,
    pub ground_height: f32,

    // === Player ===
    pub player_width: f32,
    pub player_height: f32,
    pub player_start_x: f32,
    pub player_vel: f32,
    pub starting_lives: u8,

    // === Bullets ===
    pub bullet_size: f32,
    pub bullet_vel: f32,
    pub bullet_cooldown_ms: u64,

    // === Baddies ===
    pub baddie_width: f32,
    pub baddie_height: f32,
    pub baddie_vel: f32,
    pub baddies_per_wave: usize,
    pub baddie_spawn_interval_ms: u64,
    pub baddie_spawn_step_ms: u64,
    pub baddie_spawn_floor_ms: u64,

    // === Mega baddie ===
    pub mega_width: f32,
    pub mega_height: f32,
    pub mega_vel: f32,
    pub mega_health: u32,
    pub mega_spawn_min_y: f32,
    pub mega_first_spawn_secs: u64,
    pub mega_respawn_secs: u64,
    pub mega_fire_rate_ms: u64,
    pub mega_projectile_radius: f32,
    pub mega_projectile_vel: f32,

    // === Scoring ===
    pub time_bonus_interval_secs: u64,
    pub time_bonus: u64,
    pub baddie_score: u64,
    pub mega_score: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            ground_height: GROUND_HEIGHT,

            player_width: PLAYER_WIDTH,
            player_height: PLAYER_HEIGHT,
            player_start_x: PLAYER_START_X,
            player_vel: PLAYER_VEL,
            starting_lives: STARTING_LIVES,

            bullet_size: BULLET_SIZE,
            bullet_vel: BULLET_VEL,
            bullet_cooldown_ms: BULLET_COOLDOWN_MS,

            baddie_width: BADDIE_WIDTH,
            baddie_height: BADDIE_HEIGHT,
            baddie_vel: BADDIE_VEL,
            baddies_per_wave: BADDIES_PER_WAVE,
            baddie_spawn_interval_ms: BADDIE_SPAWN_INTERVAL_MS,
            baddie_spawn_step_ms: BADDIE_SPAWN_STEP_MS,
            baddie_spawn_floor_ms: BADDIE_SPAWN_FLOOR_MS,

            mega_width: MEGA_BADDIE_WIDTH,
            mega_height: MEGA_BADDIE_HEIGHT,
            mega_vel: MEGA_BADDIE_VEL,
            mega_health: MEGA_BADDIE_HEALTH,
            mega_spawn_min_y: MEGA_SPAWN_MIN_Y,
            mega_first_spawn_secs: MEGA_FIRST_SPAWN_SECS,
            mega_respawn_secs: MEGA_RESPAWN_SECS,
            mega_fire_rate_ms: MEGA_FIRE_RATE_MS,
            mega_projectile_radius: MEGA_PROJECTILE_RADIUS,
            mega_projectile_vel: MEGA_PROJECTILE_VEL,

            time_bonus_interval_secs: TIME_BONUS_INTERVAL_SECS,
            time_bonus: TIME_BONUS,
            baddie_score: BADDIE_SCORE_VALUE,
            mega_score: MEGA_SCORE_VALUE,
        }
    }
}

impl GameConfig {
    /// Reject tuning that would break the simulation's geometry or timers
    pub fn validate(&self) -> Result<(), ConfigError> {
        let widest = self.player_width.max(self.baddie_width).max(self.mega_width);
        if self.screen_width <= widest
            || self.screen_height / 2.0 - self.mega_height < self.mega_spawn_min_y
            || self.screen_height <= self.ground_height + self.player_height
        {
            return Err(ConfigError::ScreenTooSmall {
                width: self.screen_width,
                height: self.screen_height,
            });
        }

        let positive = [
            ("player_width", self.player_width),
            ("player_height", self.player_height),
            ("player_vel", self.player_vel),
            ("bullet_size", self.bullet_size),
            ("bullet_vel", self.bullet_vel),
            ("baddie_width", self.baddie_width),
            ("baddie_height", self.baddie_height),
            ("baddie_vel", self.baddie_vel),
            ("mega_width", self.mega_width),
            ("mega_height", self.mega_height),
            ("mega_vel", self.mega_vel),
            ("mega_projectile_radius", self.mega_projectile_radius),
            ("mega_projectile_vel", self.mega_projectile_vel),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::NonPositive(name));
            }
        }
        if self.mega_health == 0 {
            return Err(ConfigError::NonPositive("mega_health"));
        }
        if self.time_bonus_interval_secs == 0 {
            return Err(ConfigError::NonPositive("time_bonus_interval_secs"));
        }
        if self.baddie_spawn_floor_ms > self.baddie_spawn_interval_ms {
            return Err(ConfigError::SpawnFloorAboveInterval {
                floor: self.baddie_spawn_floor_ms,
                initial: self.baddie_spawn_interval_ms,
            });
        }
        if !(1..=STARTING_LIVES).contains(&self.starting_lives) {
            return Err(ConfigError::StartingLives(self.starting_lives));
        }
        Ok(())
    }

    /// Row the player ship rests on
    pub fn player_y(&self) -> f32 {
        self.screen_height - self.player_height - self.ground_height
    }

    pub fn bullet_cooldown(&self) -> Duration {
        Duration::from_millis(self.bullet_cooldown_ms)
    }

    pub fn mega_fire_rate(&self) -> Duration {
        Duration::from_millis(self.mega_fire_rate_ms)
    }

    pub fn mega_first_spawn(&self) -> Duration {
        Duration::from_secs(self.mega_first_spawn_secs)
    }

    pub fn mega_respawn(&self) -> Duration {
        Duration::from_secs(self.mega_respawn_secs)
    }

    pub fn time_bonus_interval(&self) -> Duration {
        Duration::from_secs(self.time_bonus_interval_secs)
    }
}
