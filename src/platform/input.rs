//! Per-tick input snapshot

use serde::{Deserialize, Serialize};

/// Pressed state of every key the game reads, sampled once per tick.
///
/// `any_key` is an edge, not a level: hosts set it only on the tick a key
/// went down, so holding a key does not skip through the menu screens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputSnapshot {
    pub left: bool,
    pub right: bool,
    pub fire: bool,
    pub restart: bool,
    pub quit: bool,
    pub any_key: bool,
}

impl InputSnapshot {
    /// A single key press that only advances menus
    pub fn key_press() -> Self {
        Self {
            any_key: true,
            ..Default::default()
        }
    }
}
