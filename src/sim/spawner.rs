//! Baddie waves and mega baddie scheduling
//!
//! Regular baddies arrive in waves of three on a cadence that tightens after
//! every wave. A mega baddie takes over the arena after the first half minute
//! and again after a cooldown measured from the previous one.

use std::time::Duration;

use glam::Vec2;
use rand::Rng;

use super::entity::{Baddie, MegaBaddie};
use super::state::{GameEvent, Session, SpawnCadence};
use crate::config::GameConfig;

/// Run the spawn phase of a tick
pub fn update(
    session: &mut Session,
    config: &GameConfig,
    frame_time: Duration,
    rng: &mut impl Rng,
) {
    session.cadence.baddie_count += frame_time;

    if session.mega.is_none() {
        spawn_baddie_wave(session, config, rng);
    }

    if mega_spawn_due(session, config) {
        spawn_mega(session, config, rng);
    }
}

/// Spawn a wave once the cadence counter passes its threshold.
/// Returns the number of baddies added.
pub fn spawn_baddie_wave(session: &mut Session, config: &GameConfig, rng: &mut impl Rng) -> usize {
    let cadence = &mut session.cadence;
    if cadence.baddie_count <= cadence.baddie_add_increment {
        return 0;
    }

    let max_x = config.screen_width - config.baddie_width;
    for _ in 0..config.baddies_per_wave {
        let x = rng.random_range(0.0..=max_x);
        session.baddies.push(Baddie::new(x, config));
    }

    let step = Duration::from_millis(config.baddie_spawn_step_ms);
    let floor = Duration::from_millis(config.baddie_spawn_floor_ms);
    cadence.baddie_add_increment = cadence.baddie_add_increment.saturating_sub(step).max(floor);
    cadence.baddie_count = Duration::ZERO;

    log::debug!(
        "Baddie wave at {:.1}s, next threshold {}ms",
        session.elapsed.as_secs_f32(),
        cadence.baddie_add_increment.as_millis()
    );
    config.baddies_per_wave
}

/// Whether a mega baddie should enter this tick
pub fn mega_spawn_due(session: &Session, config: &GameConfig) -> bool {
    if session.mega.is_some() || session.elapsed < config.mega_first_spawn() {
        return false;
    }
    match session.mega_reference {
        None => true,
        Some(reference) => session.elapsed.saturating_sub(reference) >= config.mega_respawn(),
    }
}

/// Place a mega baddie in the upper half of the screen and clear the wave
pub fn spawn_mega(session: &mut Session, config: &GameConfig, rng: &mut impl Rng) {
    let x = rng.random_range(0.0..=config.screen_width - config.mega_width);
    let y = rng.random_range(
        config.mega_spawn_min_y..=config.screen_height / 2.0 - config.mega_height,
    );

    let vel_x = config.mega_vel * random_sign(rng);
    // Never let it drift purely sideways
    let vel_y = loop {
        let vel_y = config.mega_vel * random_sign(rng);
        if vel_y != 0.0 {
            break vel_y;
        }
    };

    session.mega = Some(MegaBaddie::new(
        Vec2::new(x, y),
        Vec2::new(vel_x, vel_y),
        session.elapsed,
        config,
    ));
    session.mega_reference = Some(session.elapsed);
    session.baddies.clear();
    session.cadence = SpawnCadence::new(config);
    session.push_event(GameEvent::MegaSpawned);

    log::info!(
        "Mega baddie spawned at ({:.0}, {:.0}) after {:.1}s",
        x,
        y,
        session.elapsed.as_secs_f32()
    );
}

/// Remove a defeated mega baddie and pay out its bonus
pub fn on_mega_defeated(session: &mut Session, config: &GameConfig) {
    session.mega = None;
    session.mega_reference = Some(session.elapsed);
    session.cadence = SpawnCadence::new(config);
    session.score += config.mega_score;
    session.push_event(GameEvent::MegaExploded);

    log::info!(
        "Mega baddie defeated at {:.1}s (score {})",
        session.elapsed.as_secs_f32(),
        session.score
    );
}

fn random_sign(rng: &mut impl Rng) -> f32 {
    if rng.random_bool(0.5) { 1.0 } else { -1.0 }
}
