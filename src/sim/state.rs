//! Session state and simulation events
//!
//! Everything one run of the game mutates lives in `Session`. Systems only
//! touch it during their own phase of the tick.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::entity::{
    Baddie, Collidable, EntityKind, EntityView, MegaBaddie, Player, PlayerBullet,
};
use crate::config::GameConfig;

/// Something that happened during a tick, for audio and logging collaborators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Player bullet left the ship
    PlayerFired,
    /// Mega baddie fired a projectile
    MegaFired,
    /// A mega baddie entered the arena
    MegaSpawned,
    /// Mega baddie health reached zero
    MegaExploded,
    /// A regular baddie was shot down
    BaddieDestroyed,
    /// Lives dropped to a new value (fired once per value)
    HullDamage { lives: u8 },
    /// Lives reached zero
    GameOver,
}

/// Regular baddie spawn cadence
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpawnCadence {
    /// Frame time accumulated since the last wave
    pub baddie_count: Duration,
    /// Wave threshold; shrinks after every wave down to the configured floor
    pub baddie_add_increment: Duration,
}

impl SpawnCadence {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            baddie_count: Duration::ZERO,
            baddie_add_increment: Duration::from_millis(config.baddie_spawn_interval_ms),
        }
    }
}

/// Complete state of one play session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Simulated time since the session started
    pub elapsed: Duration,
    /// Ticks simulated this session
    pub frame: u64,
    pub score: u64,
    pub lives: u8,
    /// Set once, the tick lives reach zero
    pub terminal: bool,
    pub player: Player,
    /// Regular baddies in spawn order
    pub baddies: Vec<Baddie>,
    /// Player bullets in fire order
    pub bullets: Vec<PlayerBullet>,
    pub mega: Option<MegaBaddie>,
    pub cadence: SpawnCadence,
    /// Spawn or death time of the most recent mega baddie
    pub mega_reference: Option<Duration>,
    /// Elapsed-time mark up to which time bonuses have been paid
    pub last_time_bonus: Duration,
    pub last_bullet: Option<Duration>,
    /// One-shot hull damage flags, indexed by lives value
    pub hull_alerts: [bool; 3],
    /// Events raised since the last drain
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl Session {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            elapsed: Duration::ZERO,
            frame: 0,
            score: 0,
            lives: config.starting_lives,
            terminal: false,
            player: Player::new(config),
            baddies: Vec::new(),
            bullets: Vec::new(),
            mega: None,
            cadence: SpawnCadence::new(config),
            mega_reference: None,
            last_time_bonus: Duration::ZERO,
            last_bullet: None,
            hull_alerts: [false; 3],
            events: Vec::new(),
        }
    }

    /// Reinitialize in place for a new run
    pub fn reset(&mut self, config: &GameConfig) {
        *self = Self::new(config);
    }

    pub fn elapsed_secs(&self) -> f32 {
        self.elapsed.as_secs_f32()
    }

    pub fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take all events raised since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Every live entity in draw order
    pub fn entities(&self) -> impl Iterator<Item = EntityView> + '_ {
        let player = std::iter::once(view(EntityKind::Player, &self.player));
        let baddies = self.baddies.iter().map(|b| view(EntityKind::Baddie, b));
        let bullets = self
            .bullets
            .iter()
            .map(|b| view(EntityKind::PlayerBullet, b));
        let mega = self.mega.iter().flat_map(|mega| {
            std::iter::once(view(EntityKind::MegaBaddie, mega)).chain(
                mega.projectiles
                    .iter()
                    .map(|p| view(EntityKind::MegaProjectile, p)),
            )
        });
        player.chain(baddies).chain(bullets).chain(mega)
    }

    pub fn summary(&self, seed: u64) -> SessionSummary {
        SessionSummary {
            seed,
            elapsed_secs: self.elapsed_secs(),
            frames: self.frame,
            score: self.score,
            lives: self.lives,
            game_over: self.terminal,
        }
    }
}

fn view<T: Collidable>(kind: EntityKind, entity: &T) -> EntityView {
    EntityView {
        kind,
        bounds: entity.bounds(),
    }
}

/// End-of-run report handed to hosts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub seed: u64,
    pub elapsed_secs: f32,
    pub frames: u64,
    pub score: u64,
    pub lives: u8,
    pub game_over: bool,
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;
    use crate::sim::entity::MegaProjectile;

    #[test]
    fn test_new_session() {
        let config = GameConfig::default();
        let session = Session::new(&config);
        assert_eq!(session.lives, 3);
        assert_eq!(session.score, 0);
        assert_eq!(session.elapsed, Duration::ZERO);
        assert!(session.baddies.is_empty());
        assert!(session.mega.is_none());
        assert_eq!(
            session.cadence.baddie_add_increment,
            Duration::from_millis(2000)
        );
    }

    #[test]
    fn test_entities_in_draw_order() {
        let config = GameConfig::default();
        let mut session = Session::new(&config);
        session.baddies.push(Baddie::new(10.0, &config));
        session
            .bullets
            .push(PlayerBullet::new(Vec2::new(5.0, 5.0), &config));
        let mut mega = MegaBaddie::new(Vec2::new(100.0, 100.0), Vec2::ONE, Duration::ZERO, &config);
        mega
            .projectiles
            .push(MegaProjectile::new(mega.bounds().center(), &config));
        session.mega = Some(mega);

        let kinds: Vec<_> = session.entities().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            vec![
                EntityKind::Player,
                EntityKind::Baddie,
                EntityKind::PlayerBullet,
                EntityKind::MegaBaddie,
                EntityKind::MegaProjectile,
            ]
        );
    }

    #[test]
    fn test_drain_events_empties_queue() {
        let config = GameConfig::default();
        let mut session = Session::new(&config);
        session.push_event(GameEvent::PlayerFired);
        assert_eq!(session.drain_events(), vec![GameEvent::PlayerFired]);
        assert!(session.drain_events().is_empty());
    }

    #[test]
    fn test_reset_clears_everything() {
        let config = GameConfig::default();
        let mut session = Session::new(&config);
        session.score = 120;
        session.lives = 0;
        session.terminal = true;
        session.elapsed = Duration::from_secs(75);
        session.baddies.push(Baddie::new(10.0, &config));
        session.hull_alerts = [true; 3];

        session.reset(&config);
        assert_eq!(session.score, 0);
        assert_eq!(session.lives, 3);
        assert!(!session.terminal);
        assert_eq!(session.elapsed, Duration::ZERO);
        assert!(session.baddies.is_empty());
        assert_eq!(session.hull_alerts, [false; 3]);
    }
}
