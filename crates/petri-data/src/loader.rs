//! JSON moveset loading.
//!
//! The file format is one `moves` object keyed by slot name, each slot an
//! object of optional fields. Anything absent falls back to the harmless
//! zero-equivalent default, so partially authored characters stay legal.

use std::fs;
use std::path::Path;

use glam::Vec2;
use serde::Deserialize;
use tracing::warn;

use petri_core::enums::{CharacterId, MoveKind, StatusEffect};
use petri_core::moves::{Move, Moveset};
use petri_core::types::Rect;

use crate::characters::moveset_for_character;

/// Why a move file could not be used.
#[derive(Debug, thiserror::Error)]
pub enum MovesetLoadError {
    #[error("failed to read move file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed move file: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Default, Deserialize)]
struct MovesetFile {
    #[serde(default)]
    moves: MoveTable,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct MoveTable {
    side_ground: MoveEntry,
    up_ground: MoveEntry,
    down_ground: MoveEntry,
    neutral_ground: MoveEntry,
    air_side: MoveEntry,
    air_up: MoveEntry,
    air_down: MoveEntry,
    air_neutral: MoveEntry,
    special_neutral: MoveEntry,
    special_side: MoveEntry,
    special_up: MoveEntry,
    special_down: MoveEntry,
    ultimate: MoveEntry,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct MoveEntry {
    name: String,
    damage: f32,
    startup: u32,
    active: u32,
    recovery: u32,
    hitbox: RectEntry,
    knockback: VecEntry,
    projectile_speed: VecEntry,
    self_velocity: VecEntry,
    steer_speed: f32,
    fall_speed: f32,
    multi_hit: bool,
    can_combo: bool,
    effect: Option<String>,
    effect_duration: f32,
    trap_duration: f32,
    cooldown: f32,
    #[serde(rename = "type")]
    kind: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RectEntry {
    x: f32,
    y: f32,
    w: f32,
    h: f32,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct VecEntry {
    x: f32,
    y: f32,
}

impl MoveEntry {
    fn into_move(self) -> Move {
        Move {
            name: self.name,
            damage: self.damage,
            startup: self.startup,
            active: self.active,
            recovery: self.recovery,
            hitbox: Rect::new(self.hitbox.x, self.hitbox.y, self.hitbox.w, self.hitbox.h),
            knockback: Vec2::new(self.knockback.x, self.knockback.y),
            projectile_speed: Vec2::new(self.projectile_speed.x, self.projectile_speed.y),
            self_velocity: Vec2::new(self.self_velocity.x, self.self_velocity.y),
            steer_speed: self.steer_speed,
            fall_speed: self.fall_speed,
            multi_hit: self.multi_hit,
            can_combo: self.can_combo,
            effect: parse_effect(self.effect.as_deref()),
            effect_duration_secs: self.effect_duration,
            trap_duration_secs: self.trap_duration,
            cooldown_secs: self.cooldown,
            kind: parse_kind(self.kind.as_deref()),
            ..Move::default()
        }
    }
}

/// Unknown or absent effect tags read as no effect.
fn parse_effect(tag: Option<&str>) -> StatusEffect {
    match tag {
        Some("POISON") => StatusEffect::Poison,
        Some("SLOW") => StatusEffect::Slow,
        _ => StatusEffect::None,
    }
}

/// Unknown or absent kind tags read as plain melee.
fn parse_kind(tag: Option<&str>) -> MoveKind {
    match tag {
        Some("PROJECTILE") => MoveKind::Projectile,
        Some("PROJECTILE_INSTANT") => MoveKind::ProjectileInstant,
        Some("TRAP") => MoveKind::Trap,
        Some("TRAP_PROJECTILE") => MoveKind::TrapProjectile,
        Some("GRAB") => MoveKind::Grab,
        Some("ULTIMATE") => MoveKind::Ultimate,
        Some("ULTIMATE_FALL") => MoveKind::UltimateFall,
        _ => MoveKind::Melee,
    }
}

/// Parse a moveset from JSON text.
pub fn moveset_from_json(json: &str) -> Result<Moveset, MovesetLoadError> {
    let file: MovesetFile = serde_json::from_str(json)?;
    let t = file.moves;
    Ok(Moveset {
        side_ground: t.side_ground.into_move(),
        up_ground: t.up_ground.into_move(),
        down_ground: t.down_ground.into_move(),
        neutral_ground: t.neutral_ground.into_move(),
        air_side: t.air_side.into_move(),
        air_up: t.air_up.into_move(),
        air_down: t.air_down.into_move(),
        air_neutral: t.air_neutral.into_move(),
        special_neutral: t.special_neutral.into_move(),
        special_side: t.special_side.into_move(),
        special_up: t.special_up.into_move(),
        special_down: t.special_down.into_move(),
        ultimate: t.ultimate.into_move(),
    })
}

/// Load a moveset from a JSON file on disk.
pub fn load_moveset(path: &Path) -> Result<Moveset, MovesetLoadError> {
    let json = fs::read_to_string(path)?;
    moveset_from_json(&json)
}

/// Load a moveset, degrading to the character's built-in table on any
/// failure. Never fails: the match must always be playable.
pub fn load_moveset_or_fallback(path: &Path, character: CharacterId) -> Moveset {
    match load_moveset(path) {
        Ok(moveset) => moveset,
        Err(err) => {
            warn!(
                path = %path.display(),
                character = character.display_name(),
                %err,
                "falling back to built-in moveset"
            );
            moveset_for_character(character)
        }
    }
}
