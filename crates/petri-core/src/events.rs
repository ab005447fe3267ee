//! Events emitted by the simulation for audio and VFX feedback.
//!
//! Fire-and-forget: the core never waits on or queries their handling.

use serde::{Deserialize, Serialize};

use crate::enums::PlayerTag;

/// Cues drained into each snapshot for the frontend's sound/VFX layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CombatEvent {
    /// A hit connected — spawn impact VFX and play the hurt sound here.
    HitConnected { victim: PlayerTag, x: f32, y: f32 },
    /// A player spent a full meter on their ultimate.
    UltimateActivated { player: PlayerTag },
    /// The countdown elapsed and the round went live.
    FightStart,
    /// A player took the round.
    RoundOver { winner: PlayerTag },
    /// A player took the match.
    MatchOver { winner: PlayerTag },
}
