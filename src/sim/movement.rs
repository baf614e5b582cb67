//! Per-frame movement and firing
//!
//! Speeds are pixels per tick; timers compare session time.

use super::entity::{Collidable, MegaBaddie, MegaProjectile, PlayerBullet};
use super::state::{GameEvent, Session};
use crate::config::GameConfig;
use crate::platform::InputSnapshot;

/// Run the movement phase of a tick
pub fn update(session: &mut Session, input: &InputSnapshot, config: &GameConfig) {
    move_player(session, input, config);
    fire_player_bullet(session, input, config);
    move_bullets(session);

    if let Some(mega) = session.mega.as_mut() {
        move_mega(mega, config);
        if mega_fire(mega, session.elapsed, config) {
            session.events.push(GameEvent::MegaFired);
        }
        move_mega_projectiles(mega, config);
    } else {
        move_baddies(session);
    }
}

/// Step the ship left/right; a step that would leave the screen is skipped
pub fn move_player(session: &mut Session, input: &InputSnapshot, config: &GameConfig) {
    let player = &mut session.player;
    if input.left && player.pos.x - player.speed >= 0.0 {
        player.pos.x -= player.speed;
    }
    if input.right && player.pos.x + player.speed + player.size.x <= config.screen_width {
        player.pos.x += player.speed;
    }
}

/// Fire a bullet if the trigger is held and the cooldown has passed
pub fn fire_player_bullet(
    session: &mut Session,
    input: &InputSnapshot,
    config: &GameConfig,
) -> bool {
    if !input.fire {
        return false;
    }
    let ready = session
        .last_bullet
        .is_none_or(|last| session.elapsed.saturating_sub(last) > config.bullet_cooldown());
    if !ready {
        return false;
    }

    let muzzle = session.player.muzzle(config.bullet_size);
    session.bullets.push(PlayerBullet::new(muzzle, config));
    session.last_bullet = Some(session.elapsed);
    session.push_event(GameEvent::PlayerFired);
    true
}

/// Move bullets up, dropping any that leave the top of the screen
pub fn move_bullets(session: &mut Session) {
    for bullet in &mut session.bullets {
        bullet.pos.y -= bullet.speed;
    }
    session.bullets.retain(|b| b.pos.y >= 0.0);
}

pub fn move_baddies(session: &mut Session) {
    for baddie in &mut session.baddies {
        baddie.pos += baddie.vel;
    }
}

/// Advance the mega baddie and bounce it off all four walls
pub fn move_mega(mega: &mut MegaBaddie, config: &GameConfig) {
    mega.pos += mega.vel;

    let max_x = config.screen_width - mega.size.x;
    let max_y = config.screen_height - mega.size.y;
    if mega.pos.x < 0.0 || mega.pos.x > max_x {
        mega.vel.x = -mega.vel.x;
        mega.pos.x = mega.pos.x.clamp(0.0, max_x);
    }
    if mega.pos.y < 0.0 || mega.pos.y > max_y {
        mega.vel.y = -mega.vel.y;
        mega.pos.y = mega.pos.y.clamp(0.0, max_y);
    }
}

/// Fire from the mega baddie's center once the fire rate has elapsed
pub fn mega_fire(mega: &mut MegaBaddie, now: std::time::Duration, config: &GameConfig) -> bool {
    if now.saturating_sub(mega.last_shot) <= config.mega_fire_rate() {
        return false;
    }
    let center = mega.bounds().center();
    mega.projectiles.push(MegaProjectile::new(center, config));
    mega.last_shot = now;
    true
}

/// Move mega projectiles down, dropping any past the bottom edge
pub fn move_mega_projectiles(mega: &mut MegaBaddie, config: &GameConfig) {
    for shot in &mut mega.projectiles {
        shot.center.y += shot.speed;
    }
    mega.projectiles.retain(|p| p.top() <= config.screen_height);
}
