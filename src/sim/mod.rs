//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Session time advances only through `tick`
//! - Seeded RNG only, passed in by the caller
//! - Stable iteration order (spawn order)
//! - No rendering, audio or platform dependencies beyond the input snapshot

pub mod autopilot;
pub mod collision;
pub mod entity;
pub mod movement;
pub mod scoring;
pub mod spawner;
pub mod state;
pub mod tick;

pub use autopilot::autopilot;
pub use collision::CollisionReport;
pub use entity::{
    Baddie, Collidable, EntityKind, EntityView, MegaBaddie, MegaProjectile, Player, PlayerBullet,
    Rect,
};
pub use state::{GameEvent, Session, SessionSummary, SpawnCadence};
pub use tick::{frame_duration, tick};
