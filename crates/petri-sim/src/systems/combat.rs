//! Combat resolution pass — advances the transient pools and applies hits.
//!
//! Stage order is fixed: projectiles advance (converting to traps on ground
//! contact), hitboxes re-anchor to their owners and clip, player bodies are
//! computed, then projectile/hitbox/trap collisions resolve. Trap aging
//! runs last so a trap's full starting duration is visible to the duty
//! cycle. Every removal goes through the despawn buffer at the end of its
//! stage — no stage ever observes a dangling entity.

use hecs::{Entity, World};

use petri_core::components::{Hitbox, Owner, Position, Projectile, Trap, Velocity};
use petri_core::constants::*;
use petri_core::enums::{PlayerTag, StatusEffect};
use petri_core::events::CombatEvent;
use petri_core::types::Rect;

use crate::player::Player;
use crate::systems::move_exec;

pub fn run(
    world: &mut World,
    players: &mut [Player; 2],
    despawn: &mut Vec<Entity>,
    events: &mut Vec<CombatEvent>,
) {
    advance_projectiles(world, despawn);
    refresh_hitboxes(world, players, despawn);

    let bodies = [players[0].body_rect(), players[1].body_rect()];
    resolve_projectile_hits(world, players, &bodies, despawn, events);
    resolve_hitbox_hits(world, players, &bodies, despawn, events);
    resolve_trap_hits(world, players, &bodies, events);

    age_traps(world, despawn);
}

/// Remove every transient combat entity. Safe to call repeatedly; used at
/// round and match boundaries.
pub fn clear_pools(world: &mut World, despawn: &mut Vec<Entity>) {
    despawn.clear();
    for (entity, _) in world.query_mut::<&Hitbox>() {
        despawn.push(entity);
    }
    for (entity, _) in world.query_mut::<&Projectile>() {
        despawn.push(entity);
    }
    for (entity, _) in world.query_mut::<&Trap>() {
        despawn.push(entity);
    }
    flush(world, despawn);
}

fn flush(world: &mut World, despawn: &mut Vec<Entity>) {
    for entity in despawn.drain(..) {
        let _ = world.despawn(entity);
    }
}

/// Attacker/victim split for an owner tag.
fn pair_mut(players: &mut [Player; 2], attacker: PlayerTag) -> (&mut Player, &mut Player) {
    let (left, right) = players.split_at_mut(1);
    match attacker {
        PlayerTag::P1 => (&mut left[0], &mut right[0]),
        PlayerTag::P2 => (&mut right[0], &mut left[0]),
    }
}

fn advance_projectiles(world: &mut World, despawn: &mut Vec<Entity>) {
    // Trap conversions are deferred past the query borrow.
    let mut conversions = Vec::new();

    for (entity, (proj, pos, vel, owner)) in
        world.query_mut::<(&mut Projectile, &mut Position, &Velocity, &Owner)>()
    {
        pos.0 += vel.0;
        proj.lifetime -= 1;

        let mut hit_ground = false;
        if proj.spawns_trap && pos.0.y >= GROUND_LEVEL - proj.size.y {
            hit_ground = true;
            conversions.push((
                pos.0,
                proj.size,
                proj.damage,
                proj.trap_duration_ticks,
                proj.effect,
                proj.kind,
                owner.0,
            ));
        }

        if proj.lifetime <= 0
            || hit_ground
            || pos.0.x < -PROJECTILE_BOUNDS_MARGIN
            || pos.0.x > ARENA_WIDTH + PROJECTILE_BOUNDS_MARGIN
        {
            despawn.push(entity);
        }
    }

    for (pos, size, damage, duration, effect, kind, owner) in conversions {
        move_exec::spawn_trap(world, pos, size, damage, duration, effect, kind, owner);
    }
    flush(world, despawn);
}

/// Re-anchor every hitbox to its owner's current position, clip against the
/// arena, and expire. The rectangle used for collision this tick is always
/// derived from where the owner is *now*.
fn refresh_hitboxes(world: &mut World, players: &[Player; 2], despawn: &mut Vec<Entity>) {
    for (entity, (hb, owner)) in world.query_mut::<(&mut Hitbox, &Owner)>() {
        hb.lifetime -= 1;

        let anchor = players[owner.0.index()].position;
        let raw = Rect::new(
            anchor.x + hb.rel.x,
            anchor.y + hb.rel.y,
            hb.size.x,
            hb.size.y,
        );
        hb.rect = raw.clipped_to_arena();

        if hb.lifetime <= 0 || hb.rect.is_degenerate() {
            despawn.push(entity);
        }
    }
    flush(world, despawn);
}

fn resolve_projectile_hits(
    world: &mut World,
    players: &mut [Player; 2],
    bodies: &[Rect; 2],
    despawn: &mut Vec<Entity>,
    events: &mut Vec<CombatEvent>,
) {
    for (entity, (proj, pos, owner)) in world.query_mut::<(&Projectile, &Position, &Owner)>() {
        let victim_idx = owner.0.opponent().index();
        let rect = Rect::new(pos.0.x, pos.0.y, proj.size.x, proj.size.y);
        if !rect.overlaps(&bodies[victim_idx]) {
            continue;
        }

        let (attacker, victim) = pair_mut(players, owner.0);
        victim.apply_damage(proj.damage);

        if proj.effect == StatusEffect::Poison {
            victim.poison_secs = proj.effect_duration_secs;
        } else {
            let center = bodies[victim_idx].center();
            events.push(CombatEvent::HitConnected {
                victim: victim.tag,
                x: center.x,
                y: center.y,
            });
        }

        if proj.kind.awards_meter() {
            attacker.add_meter(proj.damage * PROJECTILE_METER_ATTACKER_FACTOR);
            victim.add_meter(proj.damage * PROJECTILE_METER_VICTIM_FACTOR);
        }

        // Projectiles impart no knockback or hit-stun.
        if !proj.multi_hit {
            despawn.push(entity);
        }
    }
    flush(world, despawn);
}

fn resolve_hitbox_hits(
    world: &mut World,
    players: &mut [Player; 2],
    bodies: &[Rect; 2],
    despawn: &mut Vec<Entity>,
    events: &mut Vec<CombatEvent>,
) {
    let p1_left_of_p2 = players[0].position.x < players[1].position.x;

    for (entity, (hb, owner)) in world.query_mut::<(&Hitbox, &Owner)>() {
        let victim_idx = owner.0.opponent().index();
        if !hb.rect.overlaps(&bodies[victim_idx]) {
            continue;
        }

        let center = bodies[victim_idx].center();

        if hb.multi_hit {
            // Persistent hitbox: damage lands on a fixed lifetime pattern,
            // the stun refreshes knockback-free, and the hitbox survives
            // its own hits.
            if hb.lifetime % MULTI_HIT_TICK_INTERVAL == 0 {
                let victim = &mut players[victim_idx];
                victim.apply_damage(hb.damage);
                events.push(CombatEvent::HitConnected {
                    victim: victim.tag,
                    x: center.x,
                    y: center.y,
                });
                victim.enter_hurt(MULTI_HIT_STUN_TICKS);
            }
            continue;
        }

        let (attacker, victim) = pair_mut(players, owner.0);

        victim.apply_damage(hb.damage);
        if hb.effect == StatusEffect::Poison {
            victim.poison_secs = hb.effect_duration_secs;
        } else {
            events.push(CombatEvent::HitConnected {
                victim: victim.tag,
                x: center.x,
                y: center.y,
            });
        }

        if hb.kind.awards_meter() {
            attacker.add_meter(hb.damage * MELEE_METER_ATTACKER_FACTOR);
            victim.add_meter(hb.damage * MELEE_METER_VICTIM_FACTOR);
        }

        // Knockback pushes the victim away along the players' relative
        // ordering, mirrored for the second player's hitboxes.
        let mut dir = if p1_left_of_p2 { 1.0 } else { -1.0 };
        if owner.0 == PlayerTag::P2 {
            dir = -dir;
        }
        victim.velocity.x = hb.knockback.x * dir;

        let attacker_above = !attacker.grounded
            && attacker.position.y < victim.position.y - POP_UP_HEIGHT_THRESHOLD;
        if attacker_above {
            // Aerial hit from above spikes the victim downward.
            victim.velocity.y = hb.knockback.y.abs();
            victim.grounded = false;
        } else if hb.knockback.y.abs() > KNOCKBACK_Y_EPSILON {
            victim.velocity.y = hb.knockback.y;
            victim.grounded = false;
        }

        victim.enter_hurt(HITSTUN_TICKS);
        despawn.push(entity);
    }
    flush(world, despawn);
}

/// Traps damage on a duty cycle — only when the remaining duration sits on
/// the 60-tick boundary — and are never removed by contact.
fn resolve_trap_hits(
    world: &mut World,
    players: &mut [Player; 2],
    bodies: &[Rect; 2],
    events: &mut Vec<CombatEvent>,
) {
    for (_entity, (trap, owner)) in world.query_mut::<(&Trap, &Owner)>() {
        let victim_idx = owner.0.opponent().index();
        if !trap.area.overlaps(&bodies[victim_idx]) {
            continue;
        }
        if trap.duration_ticks as i32 % TRAP_DUTY_CYCLE_TICKS != 0 {
            continue;
        }

        let victim = &mut players[victim_idx];
        victim.apply_damage(trap.damage);
        if trap.effect == StatusEffect::Poison {
            victim.poison_secs = TRAP_POISON_REFRESH_SECS;
        } else {
            let center = bodies[victim_idx].center();
            events.push(CombatEvent::HitConnected {
                victim: victim.tag,
                x: center.x,
                y: center.y,
            });
        }
    }
}

fn age_traps(world: &mut World, despawn: &mut Vec<Entity>) {
    for (entity, trap) in world.query_mut::<&mut Trap>() {
        trap.duration_ticks -= 1.0;
        if trap.duration_ticks <= 0.0 {
            despawn.push(entity);
        }
    }
    flush(world, despawn);
}
