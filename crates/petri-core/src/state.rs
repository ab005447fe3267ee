//! Match state snapshot — the complete visible state exposed after each tick.
//!
//! A renderer reads this after the tick completes and never mutates it.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::CombatEvent;
use crate::types::{Rect, SimTime};

/// Everything a frontend needs to draw one frame of the match.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchSnapshot {
    pub time: SimTime,
    pub phase: MatchPhase,
    pub players: [PlayerView; 2],
    pub hitboxes: Vec<HitboxView>,
    pub projectiles: Vec<ProjectileView>,
    pub traps: Vec<TrapView>,
    /// Cues emitted during this tick.
    pub events: Vec<CombatEvent>,
    /// Set once the match is decided.
    pub match_winner: Option<PlayerTag>,
}

/// One combatant's visible state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerView {
    pub tag: PlayerTag,
    pub character: CharacterId,
    /// Feet anchor position.
    pub position: Vec2,
    pub facing_left: bool,
    pub state: PlayerState,
    pub health: f32,
    pub max_health: f32,
    pub ult_charge: f32,
    pub ult_units: u32,
    pub max_ult_units: u32,
    pub rounds_won: u32,
    pub poisoned: bool,
}

/// Melee hitbox, already clipped to the arena.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HitboxView {
    pub owner: PlayerTag,
    pub rect: Rect,
    pub kind: MoveKind,
    pub effect: StatusEffect,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub owner: PlayerTag,
    pub position: Vec2,
    pub size: Vec2,
    pub kind: MoveKind,
    pub effect: StatusEffect,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrapView {
    pub owner: PlayerTag,
    pub area: Rect,
    pub kind: MoveKind,
    pub effect: StatusEffect,
}
