//! Time bonus, hull damage alerts and game over detection

use super::state::{GameEvent, Session};
use crate::config::GameConfig;

/// Run the scoring phase of a tick
pub fn update(session: &mut Session, config: &GameConfig) {
    apply_time_bonus(session, config);
    update_hull_alerts(session, config);
    check_game_over(session);
}

/// Pay +bonus for every complete interval since the last paid mark.
/// Returns the points awarded this call.
pub fn apply_time_bonus(session: &mut Session, config: &GameConfig) -> u64 {
    let interval = config.time_bonus_interval();
    let due = session.elapsed.saturating_sub(session.last_time_bonus);
    let intervals = u32::try_from(due.as_nanos() / interval.as_nanos()).unwrap_or(u32::MAX);
    if intervals == 0 {
        return 0;
    }
    session.last_time_bonus += interval * intervals;
    let awarded = config.time_bonus.saturating_mul(u64::from(intervals));
    session.score = session.score.saturating_add(awarded);
    awarded
}

/// Raise `HullDamage` the first time lives drop to each value below the start
pub fn update_hull_alerts(session: &mut Session, config: &GameConfig) -> bool {
    let lives = session.lives;
    if lives >= config.starting_lives {
        return false;
    }
    let Some(alerted) = session.hull_alerts.get_mut(lives as usize) else {
        return false;
    };
    if *alerted {
        return false;
    }
    *alerted = true;
    session.push_event(GameEvent::HullDamage { lives });
    log::debug!("Hull damage: {} lives left", lives);
    true
}

/// Mark the session terminal the tick lives reach zero
pub fn check_game_over(session: &mut Session) -> bool {
    if session.terminal || session.lives > 0 {
        return false;
    }
    session.terminal = true;
    session.push_event(GameEvent::GameOver);
    log::info!(
        "Game over after {:.1}s with score {}",
        session.elapsed_secs(),
        session.score
    );
    true
}
