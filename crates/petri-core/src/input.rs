//! Abstract player input and match control commands.
//!
//! The core never reads device state; a frontend samples its input layer
//! once per tick and hands the result in.

use serde::{Deserialize, Serialize};

/// Per-player input sampled at the start of a tick. Directions are held
/// states; jump/attack/special are edge-triggered (pressed this tick).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputSnapshot {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub jump: bool,
    pub attack: bool,
    pub special: bool,
}

impl InputSnapshot {
    /// No buttons held or pressed.
    pub const NEUTRAL: InputSnapshot = InputSnapshot {
        left: false,
        right: false,
        up: false,
        down: false,
        jump: false,
        attack: false,
        special: false,
    };

    /// Any horizontal direction held.
    pub fn horizontal(&self) -> bool {
        self.left || self.right
    }
}

/// Match-level control, queued and applied at the next tick boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum MatchCommand {
    /// Freeze the pipeline mid-fight.
    Pause,
    Resume,
    /// Full reset: rounds, meter, pools, and the countdown.
    Rematch,
}
