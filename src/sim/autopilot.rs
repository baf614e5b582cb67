//! Idle/demo mode - the game plays itself
//!
//! Reads the session and produces the input a cautious player would hold:
//! sidestep anything about to land on the ship, otherwise line up under the
//! nearest target and keep the trigger down.

use super::entity::{Collidable, EntityKind, Rect};
use super::state::Session;
use crate::config::GameConfig;
use crate::platform::InputSnapshot;

/// How far above the ship a falling threat starts to matter (pixels)
const DODGE_LOOKAHEAD: f32 = 90.0;
/// Extra horizontal clearance kept around the ship when dodging
const DODGE_MARGIN: f32 = 8.0;

pub fn autopilot(session: &Session, config: &GameConfig) -> InputSnapshot {
    let ship = session.player.bounds();
    let ship_x = ship.center().x;
    let mut input = InputSnapshot {
        fire: true,
        ..Default::default()
    };

    if let Some(threat) = nearest_threat(session, &ship) {
        let flee_right = threat.center().x <= ship_x;
        let room_right = ship.right() + session.player.speed <= config.screen_width;
        let room_left = ship.left() - session.player.speed >= 0.0;
        if (flee_right && room_right) || !room_left {
            input.right = true;
        } else {
            input.left = true;
        }
        return input;
    }

    let target_x = match &session.mega {
        Some(mega) => Some(mega.bounds().center().x),
        None => session
            .baddies
            .iter()
            .filter(|b| b.bounds().bottom() < ship.top())
            .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y))
            .map(|b| b.bounds().center().x),
    };

    if let Some(target_x) = target_x {
        let dx = target_x - ship_x;
        if dx.abs() > session.player.speed {
            input.left = dx < 0.0;
            input.right = dx > 0.0;
        }
    }
    input
}

/// Closest falling object inside the danger zone above the ship
fn nearest_threat(session: &Session, ship: &Rect) -> Option<Rect> {
    let zone = Rect::new(
        ship.left() - DODGE_MARGIN,
        ship.top() - DODGE_LOOKAHEAD,
        ship.size.x + DODGE_MARGIN * 2.0,
        ship.size.y + DODGE_LOOKAHEAD,
    );

    session
        .entities()
        .filter(|e| matches!(e.kind, EntityKind::Baddie | EntityKind::MegaProjectile))
        .map(|e| e.bounds)
        .filter(|r| r.overlaps(&zone))
        .max_by(|a, b| a.bottom().total_cmp(&b.bottom()))
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use glam::Vec2;

    use super::*;
    use crate::sim::entity::{Baddie, MegaBaddie, MegaProjectile};

    #[test]
    fn test_always_fires() {
        let config = GameConfig::default();
        let session = Session::new(&config);
        let input = autopilot(&session, &config);
        assert!(input.fire);
        assert!(!input.left && !input.right);
    }

    #[test]
    fn test_lines_up_under_lowest_baddie() {
        let config = GameConfig::default();
        let mut session = Session::new(&config);
        let mut high = Baddie::new(50.0, &config);
        high.pos.y = 100.0;
        let mut low = Baddie::new(800.0, &config);
        low.pos.y = 400.0;
        session.baddies.extend([high, low]);

        let input = autopilot(&session, &config);
        assert!(input.right);
    }

    #[test]
    fn test_dodges_falling_baddie() {
        let config = GameConfig::default();
        let mut session = Session::new(&config);
        let mut baddie = Baddie::new(session.player.pos.x - 5.0, &config);
        baddie.pos.y = session.player.pos.y - 40.0;
        session.baddies.push(baddie);

        let input = autopilot(&session, &config);
        assert!(input.right);
        assert!(!input.left);
    }

    #[test]
    fn test_dodges_toward_open_side_at_wall() {
        let config = GameConfig::default();
        let mut session = Session::new(&config);
        session.player.pos.x = config.screen_width - session.player.size.x;
        let mut baddie = Baddie::new(session.player.pos.x - 10.0, &config);
        baddie.pos.y = session.player.pos.y - 30.0;
        session.baddies.push(baddie);

        let input = autopilot(&session, &config);
        assert!(input.left);
    }

    #[test]
    fn test_dodges_mega_projectile() {
        let config = GameConfig::default();
        let mut session = Session::new(&config);
        let mut mega = MegaBaddie::new(Vec2::new(100.0, 100.0), Vec2::ONE, Duration::ZERO, &config);
        let ship = session.player.bounds();
        mega.projectiles
            .push(MegaProjectile::new(Vec2::new(ship.right(), ship.top() - 20.0), &config));
        session.mega = Some(mega);

        let input = autopilot(&session, &config);
        assert!(input.left);
    }
}
