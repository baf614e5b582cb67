//! Fixed timestep simulation tick
//!
//! One running frame: advance the clock, then spawn -> movement -> collision
//! -> scoring, always in that order.

use std::time::Duration;

use rand::Rng;

use super::state::Session;
use super::{collision, movement, scoring, spawner};
use crate::config::GameConfig;
use crate::platform::InputSnapshot;

/// Convert a frame delta in seconds to session time.
///
/// Rounded to whole microseconds so that N ticks of `1/N` seconds add up to at
/// least one full second.
pub fn frame_duration(dt: f32) -> Duration {
    Duration::from_micros((f64::from(dt) * 1_000_000.0).round() as u64)
}

/// Advance the session by one frame. Does nothing once the session is terminal.
pub fn tick(
    session: &mut Session,
    input: &InputSnapshot,
    dt: Duration,
    config: &GameConfig,
    rng: &mut impl Rng,
) {
    if session.terminal {
        return;
    }

    session.frame += 1;
    session.elapsed += dt;

    spawner::update(session, config, dt, rng);
    movement::update(session, input, config);
    collision::resolve(session, config);
    scoring::update(session, config);
}
