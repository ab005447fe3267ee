//! Snapshot system: builds the read-only per-tick view of the match.
//!
//! Never modifies the world.

use hecs::World;

use petri_core::components::{Hitbox, Owner, Position, Projectile, Trap};
use petri_core::enums::{MatchPhase, PlayerTag};
use petri_core::events::CombatEvent;
use petri_core::state::{HitboxView, MatchSnapshot, ProjectileView, TrapView};
use petri_core::types::SimTime;

use crate::player::Player;

pub fn build(
    world: &World,
    players: &[Player; 2],
    time: &SimTime,
    phase: MatchPhase,
    match_winner: Option<PlayerTag>,
    events: Vec<CombatEvent>,
) -> MatchSnapshot {
    MatchSnapshot {
        time: *time,
        phase,
        players: [players[0].view(), players[1].view()],
        hitboxes: build_hitboxes(world),
        projectiles: build_projectiles(world),
        traps: build_traps(world),
        events,
        match_winner,
    }
}

fn build_hitboxes(world: &World) -> Vec<HitboxView> {
    world
        .query::<(&Hitbox, &Owner)>()
        .iter()
        .map(|(_, (hb, owner))| HitboxView {
            owner: owner.0,
            rect: hb.rect,
            kind: hb.kind,
            effect: hb.effect,
        })
        .collect()
}

fn build_projectiles(world: &World) -> Vec<ProjectileView> {
    world
        .query::<(&Projectile, &Position, &Owner)>()
        .iter()
        .map(|(_, (proj, pos, owner))| ProjectileView {
            owner: owner.0,
            position: pos.0,
            size: proj.size,
            kind: proj.kind,
            effect: proj.effect,
        })
        .collect()
}

fn build_traps(world: &World) -> Vec<TrapView> {
    world
        .query::<(&Trap, &Owner)>()
        .iter()
        .map(|(_, (trap, owner))| TrapView {
            owner: owner.0,
            area: trap.area,
            kind: trap.kind,
            effect: trap.effect,
        })
        .collect()
}
