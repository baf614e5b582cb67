//! Entity types and axis-aligned bounds
//!
//! Every entity exposes its bounding box through `Collidable`; collision code
//! never reaches into entity-specific fields to decide an overlap.

use std::time::Duration;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::GameConfig;

/// Axis-aligned rectangle (top-left origin, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    /// Strict overlap test: rectangles that only share an edge do not overlap
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }
}

/// Anything with a position and size that takes part in collisions
pub trait Collidable {
    fn bounds(&self) -> Rect;

    fn collides_with<T: Collidable + ?Sized>(&self, other: &T) -> bool {
        self.bounds().overlaps(&other.bounds())
    }
}

/// The player's ship
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub size: Vec2,
    /// Horizontal speed (pixels per frame)
    pub speed: f32,
}

impl Player {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            pos: Vec2::new(config.player_start_x, config.player_y()),
            size: Vec2::new(config.player_width, config.player_height),
            speed: config.player_vel,
        }
    }

    /// Spawn point for a bullet: centered on the nose of the ship
    pub fn muzzle(&self, bullet_size: f32) -> Vec2 {
        Vec2::new(self.pos.x + self.size.x / 2.0 - bullet_size / 2.0, self.pos.y)
    }
}

impl Collidable for Player {
    fn bounds(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }
}

/// A regular falling enemy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Baddie {
    pub pos: Vec2,
    pub size: Vec2,
    pub vel: Vec2,
}

impl Baddie {
    /// A baddie entering from just above the top edge at column `x`
    pub fn new(x: f32, config: &GameConfig) -> Self {
        Self {
            pos: Vec2::new(x, -config.baddie_height),
            size: Vec2::new(config.baddie_width, config.baddie_height),
            vel: Vec2::new(0.0, config.baddie_vel),
        }
    }
}

impl Collidable for Baddie {
    fn bounds(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }
}

/// The bouncing boss enemy; owns the projectiles it has fired
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MegaBaddie {
    pub pos: Vec2,
    pub size: Vec2,
    pub vel: Vec2,
    pub health: u32,
    /// Session time of the last shot (spawn time before the first one)
    pub last_shot: Duration,
    pub projectiles: Vec<MegaProjectile>,
}

impl MegaBaddie {
    pub fn new(pos: Vec2, vel: Vec2, now: Duration, config: &GameConfig) -> Self {
        Self {
            pos,
            size: Vec2::new(config.mega_width, config.mega_height),
            vel,
            health: config.mega_health,
            last_shot: now,
            projectiles: Vec::new(),
        }
    }

    pub fn is_defeated(&self) -> bool {
        self.health == 0
    }
}

impl Collidable for MegaBaddie {
    fn bounds(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }
}

/// A player bullet travelling straight up
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerBullet {
    pub pos: Vec2,
    pub size: Vec2,
    /// Upward speed (pixels per frame)
    pub speed: f32,
}

impl PlayerBullet {
    pub fn new(pos: Vec2, config: &GameConfig) -> Self {
        Self {
            pos,
            size: Vec2::splat(config.bullet_size),
            speed: config.bullet_vel,
        }
    }
}

impl Collidable for PlayerBullet {
    fn bounds(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }
}

/// A round shot fired downward by the mega baddie
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MegaProjectile {
    /// Center of the shot
    pub center: Vec2,
    pub radius: f32,
    /// Downward speed (pixels per frame)
    pub speed: f32,
}

impl MegaProjectile {
    pub fn new(center: Vec2, config: &GameConfig) -> Self {
        Self {
            center,
            radius: config.mega_projectile_radius,
            speed: config.mega_projectile_vel,
        }
    }

    pub fn top(&self) -> f32 {
        self.center.y - self.radius
    }
}

impl Collidable for MegaProjectile {
    fn bounds(&self) -> Rect {
        Rect {
            pos: self.center - Vec2::splat(self.radius),
            size: Vec2::splat(self.radius * 2.0),
        }
    }
}

/// Entity tag handed to renderers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKind {
    Player,
    Baddie,
    MegaBaddie,
    PlayerBullet,
    MegaProjectile,
}

/// A live entity as seen by a renderer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EntityView {
    pub kind: EntityKind,
    pub bounds: Rect,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(a.overlaps(&Rect::new(5.0, 5.0, 10.0, 10.0)));
        assert!(a.overlaps(&Rect::new(-5.0, 2.0, 20.0, 2.0)));
        assert!(!a.overlaps(&Rect::new(20.0, 0.0, 10.0, 10.0)));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(!a.overlaps(&Rect::new(10.0, 0.0, 10.0, 10.0)));
        assert!(!a.overlaps(&Rect::new(0.0, 10.0, 10.0, 10.0)));
    }

    #[test]
    fn test_player_starts_on_ground() {
        let config = GameConfig::default();
        let player = Player::new(&config);
        assert_eq!(player.pos, Vec2::new(200.0, 705.0));
        assert_eq!(
            player.bounds().bottom(),
            config.screen_height - config.ground_height
        );
    }

    #[test]
    fn test_muzzle_is_centered() {
        let config = GameConfig::default();
        let player = Player::new(&config);
        let bullet = PlayerBullet::new(player.muzzle(config.bullet_size), &config);
        assert_eq!(bullet.bounds().center().x, player.bounds().center().x);
        assert_eq!(bullet.pos.y, player.pos.y);
    }

    #[test]
    fn test_baddie_enters_above_screen() {
        let config = GameConfig::default();
        let baddie = Baddie::new(42.0, &config);
        assert_eq!(baddie.pos, Vec2::new(42.0, -20.0));
        assert_eq!(baddie.vel, Vec2::new(0.0, 2.5));
    }

    #[test]
    fn test_projectile_bounds_wrap_circle() {
        let config = GameConfig::default();
        let shot = MegaProjectile::new(Vec2::new(100.0, 100.0), &config);
        assert_eq!(shot.bounds(), Rect::new(92.0, 92.0, 16.0, 16.0));
        assert_eq!(shot.top(), 92.0);
    }

    #[test]
    fn test_collides_with_across_kinds() {
        let config = GameConfig::default();
        let player = Player::new(&config);
        let mut baddie = Baddie::new(player.pos.x, &config);
        assert!(!baddie.collides_with(&player));
        baddie.pos.y = player.pos.y + 5.0;
        assert!(baddie.collides_with(&player));
    }
}
