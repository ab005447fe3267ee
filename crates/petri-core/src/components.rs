//! ECS components for the transient combat entities.
//!
//! Components are plain data structs with no methods.
//! Combat logic lives in the sim systems, not here.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::{MoveKind, PlayerTag, StatusEffect};
use crate::types::Rect;

/// Which player spawned this entity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Owner(pub PlayerTag);

/// World-space position (projectiles; hitboxes derive theirs from the owner).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Position(pub Vec2);

/// World-space velocity, integrated once per tick.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Velocity(pub Vec2);

/// Active melee hitbox. Stores an offset from its owner, not an absolute
/// position — the world rectangle is recomputed from the owner every tick
/// so the hitbox tracks a moving or drifting attacker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hitbox {
    /// Offset from the owner's feet anchor, already mirrored for facing.
    pub rel: Vec2,
    pub size: Vec2,
    /// Clipped world-space rectangle, refreshed by the resolution pass.
    pub rect: Rect,
    /// Remaining active ticks.
    pub lifetime: i32,
    pub damage: f32,
    pub knockback: Vec2,
    pub effect: StatusEffect,
    pub effect_duration_secs: f32,
    /// Kind of the originating move.
    pub kind: MoveKind,
    /// Persists through hits, applying damage on a fixed tick pattern.
    pub multi_hit: bool,
}

/// Projectile in flight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub size: Vec2,
    /// Remaining ticks before expiry.
    pub lifetime: i32,
    pub damage: f32,
    pub knockback: Vec2,
    pub effect: StatusEffect,
    pub effect_duration_secs: f32,
    pub kind: MoveKind,
    /// Converts into a trap on ground contact instead of despawning.
    pub spawns_trap: bool,
    /// Duration of the trap left behind (ticks).
    pub trap_duration_ticks: f32,
    /// Survives its own hits.
    pub multi_hit: bool,
}

/// Stationary ground trap. Damages on a duty cycle, never on every
/// overlapping tick, and is only ever removed by expiry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trap {
    pub area: Rect,
    /// Remaining duration in ticks.
    pub duration_ticks: f32,
    pub damage: f32,
    pub effect: StatusEffect,
    pub kind: MoveKind,
}
