//! Move execution — spawns transient combat entities from move data.
//!
//! The single dispatch point over `MoveKind`: adding a kind forces an
//! update here and in the resolution pass. Spawns are origin-parameterized
//! so synthesized moves (the ultimate-fall cloud and explosion) can fire
//! from somewhere other than the attacker's current position. Each pool is
//! capped; a full pool turns the spawn into a silent no-op.

use glam::Vec2;
use hecs::World;

use petri_core::components::{Hitbox, Owner, Position, Projectile, Trap, Velocity};
use petri_core::constants::*;
use petri_core::enums::{MoveKind, MoveSlot, PlayerTag, StatusEffect};
use petri_core::moves::Move;
use petri_core::types::Rect;

use crate::player::Player;

/// Execute one of a player's moveset slots from their current position.
pub fn execute_for_player(world: &mut World, player: &Player, slot: MoveSlot) {
    let mv = player.moves.get(slot);
    execute_at(
        world,
        mv,
        player.position,
        player.facing_left,
        player.grounded,
        player.tag,
    );
}

/// Execute a move from an explicit origin.
pub fn execute_at(
    world: &mut World,
    mv: &Move,
    origin: Vec2,
    facing_left: bool,
    grounded: bool,
    owner: PlayerTag,
) {
    match mv.kind {
        MoveKind::Melee | MoveKind::Grab | MoveKind::Ultimate | MoveKind::UltimateFall => {
            spawn_hitbox(world, mv, origin, facing_left, owner);
        }
        MoveKind::Projectile | MoveKind::ProjectileInstant => {
            spawn_projectile(world, mv, origin, facing_left, owner);
        }
        MoveKind::Trap => {
            let pos = Vec2::new(
                origin.x + mirrored_offset_x(&mv.hitbox, facing_left),
                origin.y + mv.hitbox.y,
            );
            spawn_trap(
                world,
                pos,
                Vec2::new(mv.hitbox.w, mv.hitbox.h),
                mv.damage,
                mv.trap_duration_secs * SECONDS_TO_TICKS,
                mv.effect,
                mv.kind,
                owner,
            );
        }
        MoveKind::TrapProjectile => {
            if grounded {
                // Planted directly on the ground under the mirrored offset.
                let pos = Vec2::new(
                    origin.x + mirrored_offset_x(&mv.hitbox, facing_left),
                    GROUND_LEVEL - mv.hitbox.h,
                );
                spawn_trap(
                    world,
                    pos,
                    Vec2::new(mv.hitbox.w, mv.hitbox.h),
                    mv.damage,
                    mv.trap_duration_secs * SECONDS_TO_TICKS,
                    mv.effect,
                    mv.kind,
                    owner,
                );
            } else {
                // Thrown; converts on ground contact.
                spawn_projectile(world, mv, origin, facing_left, owner);
            }
        }
    }
}

/// Mirror a relative offset across the attacker's facing: move data is
/// authored facing right, so a flipped attacker uses `x' = -x - w`.
fn mirrored_offset_x(hitbox: &Rect, facing_left: bool) -> f32 {
    if facing_left {
        -hitbox.x - hitbox.w
    } else {
        hitbox.x
    }
}

fn pool_has_room<C: hecs::Component>(world: &World) -> bool {
    world.query::<&C>().iter().count() < MAX_POOL_ENTITIES
}

fn spawn_hitbox(world: &mut World, mv: &Move, origin: Vec2, facing_left: bool, owner: PlayerTag) {
    if !pool_has_room::<Hitbox>(world) {
        return;
    }
    let rel = Vec2::new(mirrored_offset_x(&mv.hitbox, facing_left), mv.hitbox.y);
    let rect = Rect::new(origin.x + rel.x, origin.y + rel.y, mv.hitbox.w, mv.hitbox.h);
    world.spawn((
        Hitbox {
            rel,
            size: Vec2::new(mv.hitbox.w, mv.hitbox.h),
            rect,
            lifetime: mv.active as i32,
            damage: mv.damage,
            knockback: mv.knockback,
            effect: mv.effect,
            effect_duration_secs: mv.effect_duration_secs,
            kind: mv.kind,
            multi_hit: mv.multi_hit,
        },
        Owner(owner),
    ));
}

fn spawn_projectile(
    world: &mut World,
    mv: &Move,
    origin: Vec2,
    facing_left: bool,
    owner: PlayerTag,
) {
    if !pool_has_room::<Projectile>(world) {
        return;
    }
    let dir = if facing_left { -1.0 } else { 1.0 };
    let lifetime = if mv.kind == MoveKind::ProjectileInstant {
        PROJECTILE_INSTANT_LIFETIME_TICKS
    } else {
        PROJECTILE_LIFETIME_TICKS
    };
    let spawns_trap = mv.kind == MoveKind::TrapProjectile;
    world.spawn((
        Projectile {
            size: Vec2::new(mv.hitbox.w, mv.hitbox.h),
            lifetime,
            damage: mv.damage,
            knockback: mv.knockback,
            effect: mv.effect,
            effect_duration_secs: mv.effect_duration_secs,
            kind: mv.kind,
            spawns_trap,
            trap_duration_ticks: if spawns_trap {
                mv.trap_duration_secs * SECONDS_TO_TICKS
            } else {
                0.0
            },
            multi_hit: mv.multi_hit,
        },
        Position(Vec2::new(
            origin.x + mirrored_offset_x(&mv.hitbox, facing_left),
            origin.y + mv.hitbox.y,
        )),
        Velocity(Vec2::new(mv.projectile_speed.x * dir, mv.projectile_speed.y)),
        Owner(owner),
    ));
}

#[allow(clippy::too_many_arguments)]
pub(crate) fn spawn_trap(
    world: &mut World,
    pos: Vec2,
    size: Vec2,
    damage: f32,
    duration_ticks: f32,
    effect: StatusEffect,
    kind: MoveKind,
    owner: PlayerTag,
) {
    if !pool_has_room::<Trap>(world) {
        return;
    }
    world.spawn((
        Trap {
            area: Rect::new(pos.x, pos.y, size.x, size.y),
            duration_ticks,
            damage,
            effect,
            kind,
        },
        Owner(owner),
    ));
}
