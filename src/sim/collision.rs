//! Collision detection and response
//!
//! All tests are bounding-box overlaps between `Collidable`s. Scans run in
//! insertion order and the first match wins; hits are recorded in a mask and
//! the collections compacted afterwards, so nothing is skipped or visited twice.

use super::entity::Collidable;
use super::spawner;
use super::state::{GameEvent, Session};
use crate::config::GameConfig;

/// What the collision phase did this tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollisionReport {
    pub lives_lost: u8,
    pub baddies_destroyed: u32,
    pub mega_hit: bool,
    pub mega_defeated: bool,
}

/// Run the collision phase of a tick
pub fn resolve(session: &mut Session, config: &GameConfig) -> CollisionReport {
    if session.mega.is_some() {
        resolve_mega(session, config)
    } else {
        resolve_baddies(session, config)
    }
}

/// Mega projectiles against the player, then player bullets against the mega
pub fn resolve_mega(session: &mut Session, config: &GameConfig) -> CollisionReport {
    let mut report = CollisionReport::default();
    let player = session.player.bounds();
    let Some(mega) = session.mega.as_mut() else {
        return report;
    };

    let mut hit = vec![false; mega.projectiles.len()];
    for (i, shot) in mega.projectiles.iter().enumerate() {
        if shot.bounds().overlaps(&player) {
            hit[i] = true;
            if lose_life(&mut session.lives, &mut report) {
                break;
            }
        }
    }
    compact(&mut mega.projectiles, &hit);
    mega.projectiles.retain(|p| p.top() <= config.screen_height);

    // One bullet per tick can damage the mega baddie
    if let Some(i) = session.bullets.iter().position(|b| b.collides_with(&*mega)) {
        session.bullets.remove(i);
        mega.health = mega.health.saturating_sub(1);
        report.mega_hit = true;
        report.mega_defeated = mega.is_defeated();
    }

    if report.mega_defeated {
        spawner::on_mega_defeated(session, config);
    }
    report
}

/// Baddies against the bottom edge and the player, then bullets against baddies
pub fn resolve_baddies(session: &mut Session, config: &GameConfig) -> CollisionReport {
    let mut report = CollisionReport::default();

    let mut gone = vec![false; session.baddies.len()];
    for (i, baddie) in session.baddies.iter().enumerate() {
        if baddie.bounds().top() > config.screen_height {
            gone[i] = true;
        } else if baddie.collides_with(&session.player) {
            gone[i] = true;
            if lose_life(&mut session.lives, &mut report) {
                break;
            }
        }
    }
    compact(&mut session.baddies, &gone);

    let mut spent = vec![false; session.bullets.len()];
    let mut killed = vec![false; session.baddies.len()];
    for (bi, bullet) in session.bullets.iter().enumerate() {
        let target = session
            .baddies
            .iter()
            .enumerate()
            .find(|(ei, baddie)| !killed[*ei] && baddie.collides_with(bullet))
            .map(|(ei, _)| ei);
        if let Some(ei) = target {
            killed[ei] = true;
            spent[bi] = true;
            report.baddies_destroyed += 1;
        }
    }
    compact(&mut session.bullets, &spent);
    compact(&mut session.baddies, &killed);

    for _ in 0..report.baddies_destroyed {
        session.score += config.baddie_score;
        session.push_event(GameEvent::BaddieDestroyed);
    }
    report
}

/// Take one life; returns true when that was the last one
fn lose_life(lives: &mut u8, report: &mut CollisionReport) -> bool {
    *lives = lives.saturating_sub(1);
    report.lives_lost += 1;
    *lives == 0
}

/// Drop every element whose mask entry is set, keeping order
fn compact<T>(items: &mut Vec<T>, removed: &[bool]) {
    let mut index = 0;
    items.retain(|_| {
        let keep = !removed[index];
        index += 1;
        keep
    });
}
