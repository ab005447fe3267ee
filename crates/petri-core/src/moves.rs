//! Static move data — the per-character move table.
//!
//! Moves are plain data; execution and resolution live in the sim systems.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::{MoveKind, MoveSlot, StatusEffect};
use crate::types::Rect;

/// One move definition. Immutable after load except `last_used_secs`,
/// which gates the cooldown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Move {
    pub name: String,
    /// Ticks before the move becomes active.
    pub startup: u32,
    /// Ticks the spawned hitbox stays live.
    pub active: u32,
    /// Ticks of recovery after the active window.
    pub recovery: u32,
    /// Hitbox relative to an un-flipped (facing-right) attacker.
    pub hitbox: Rect,
    pub knockback: Vec2,
    pub damage: f32,
    pub kind: MoveKind,
    pub effect: StatusEffect,
    /// Duration of the applied status effect (seconds).
    pub effect_duration_secs: f32,
    /// Initial velocity of a spawned projectile (facing-right reference).
    pub projectile_speed: Vec2,
    /// Velocity imparted to the attacker while the move runs.
    pub self_velocity: Vec2,
    /// Horizontal steering allowed during the move (px/tick).
    pub steer_speed: f32,
    /// Forced fall speed for the drop phase of an ultimate fall.
    pub fall_speed: f32,
    /// Persistence flag: the spawned entity survives its own hits and
    /// applies damage on a tick pattern instead of once.
    pub multi_hit: bool,
    /// The attack button can chain this move into itself after its active
    /// window.
    pub can_combo: bool,
    pub cooldown_secs: f32,
    /// Simulated-time stamp of the last execution.
    pub last_used_secs: f32,
    /// Lifetime of a spawned trap (seconds).
    pub trap_duration_secs: f32,
}

impl Default for Move {
    fn default() -> Self {
        Self {
            name: String::new(),
            startup: 0,
            active: 0,
            recovery: 0,
            hitbox: Rect::default(),
            knockback: Vec2::ZERO,
            damage: 0.0,
            kind: MoveKind::default(),
            effect: StatusEffect::default(),
            effect_duration_secs: 0.0,
            projectile_speed: Vec2::ZERO,
            self_velocity: Vec2::ZERO,
            steer_speed: 0.0,
            fall_speed: 0.0,
            multi_hit: false,
            can_combo: false,
            cooldown_secs: 0.0,
            last_used_secs: COOLDOWN_READY_SECS,
            trap_duration_secs: 0.0,
        }
    }
}

impl Move {
    pub fn total_frames(&self) -> u32 {
        self.startup + self.active + self.recovery
    }

    /// Frame at which the active window closes.
    pub fn active_end(&self) -> u32 {
        self.startup + self.active
    }

    /// Whether the cooldown has elapsed at the given simulated time.
    pub fn ready_at(&self, now_secs: f32) -> bool {
        now_secs - self.last_used_secs >= self.cooldown_secs
    }
}

/// One move per named slot. Owned by a player for the match's lifetime.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Moveset {
    pub side_ground: Move,
    pub up_ground: Move,
    pub down_ground: Move,
    pub neutral_ground: Move,
    pub air_side: Move,
    pub air_up: Move,
    pub air_down: Move,
    pub air_neutral: Move,
    pub special_neutral: Move,
    pub special_side: Move,
    pub special_up: Move,
    pub special_down: Move,
    pub ultimate: Move,
}

impl Moveset {
    pub fn get(&self, slot: MoveSlot) -> &Move {
        match slot {
            MoveSlot::SideGround => &self.side_ground,
            MoveSlot::UpGround => &self.up_ground,
            MoveSlot::DownGround => &self.down_ground,
            MoveSlot::NeutralGround => &self.neutral_ground,
            MoveSlot::AirSide => &self.air_side,
            MoveSlot::AirUp => &self.air_up,
            MoveSlot::AirDown => &self.air_down,
            MoveSlot::AirNeutral => &self.air_neutral,
            MoveSlot::SpecialNeutral => &self.special_neutral,
            MoveSlot::SpecialSide => &self.special_side,
            MoveSlot::SpecialUp => &self.special_up,
            MoveSlot::SpecialDown => &self.special_down,
            MoveSlot::Ultimate => &self.ultimate,
        }
    }

    pub fn get_mut(&mut self, slot: MoveSlot) -> &mut Move {
        match slot {
            MoveSlot::SideGround => &mut self.side_ground,
            MoveSlot::UpGround => &mut self.up_ground,
            MoveSlot::DownGround => &mut self.down_ground,
            MoveSlot::NeutralGround => &mut self.neutral_ground,
            MoveSlot::AirSide => &mut self.air_side,
            MoveSlot::AirUp => &mut self.air_up,
            MoveSlot::AirDown => &mut self.air_down,
            MoveSlot::AirNeutral => &mut self.air_neutral,
            MoveSlot::SpecialNeutral => &mut self.special_neutral,
            MoveSlot::SpecialSide => &mut self.special_side,
            MoveSlot::SpecialUp => &mut self.special_up,
            MoveSlot::SpecialDown => &mut self.special_down,
            MoveSlot::Ultimate => &mut self.ultimate,
        }
    }
}

/// The poison cloud an ultimate fall leaves at its launch position.
pub fn ultimate_cloud() -> Move {
    Move {
        name: "ult_cloud".into(),
        kind: MoveKind::Trap,
        hitbox: Rect::new(
            -ULT_CLOUD_SIZE / 2.0,
            -ULT_CLOUD_SIZE / 2.0,
            ULT_CLOUD_SIZE,
            ULT_CLOUD_SIZE,
        ),
        damage: ULT_CLOUD_DAMAGE,
        effect: StatusEffect::Poison,
        effect_duration_secs: ULT_CLOUD_DURATION_SECS,
        trap_duration_secs: ULT_CLOUD_DURATION_SECS,
        ..Move::default()
    }
}

/// The area blast closing an ultimate fall on landing.
pub fn ultimate_explosion() -> Move {
    Move {
        name: "ult_explosion".into(),
        kind: MoveKind::Ultimate,
        hitbox: Rect::new(
            -ULT_EXPLOSION_WIDTH / 2.0,
            -ULT_EXPLOSION_HEIGHT / 2.0,
            ULT_EXPLOSION_WIDTH,
            ULT_EXPLOSION_HEIGHT,
        ),
        damage: ULT_EXPLOSION_DAMAGE,
        knockback: Vec2::new(ULT_EXPLOSION_KNOCKBACK.0, ULT_EXPLOSION_KNOCKBACK.1),
        active: ULT_EXPLOSION_ACTIVE_FRAMES,
        ..Move::default()
    }
}
