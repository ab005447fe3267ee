//! Player action state machine.
//!
//! One call per player per tick. Attack progression (combo chaining,
//! move-driven velocities, the ultimate-fall phase plan, landing) and
//! hit-stun recovery are handled here; both the human input path and the
//! computer driver funnel attack starts through `start_attack`.

use glam::Vec2;
use hecs::World;

use petri_core::constants::*;
use petri_core::enums::{MoveKind, MoveSlot, PlayerState};
use petri_core::events::CombatEvent;
use petri_core::input::InputSnapshot;
use petri_core::moves::{ultimate_cloud, ultimate_explosion};

use crate::player::Player;
use crate::systems::{move_exec, physics};

/// Advance one player's state machine by one tick.
pub fn run(
    player: &mut Player,
    input: &InputSnapshot,
    world: &mut World,
    now_secs: f32,
    events: &mut Vec<CombatEvent>,
) {
    match player.state {
        PlayerState::Attack => {
            update_attack(player, input, world);
            return;
        }
        PlayerState::Hurt => {
            update_hurt(player);
            return;
        }
        _ => {}
    }

    if !player.grounded {
        player.velocity.y += GRAVITY;
        player.state = PlayerState::Fall;
    }

    player.position += player.velocity;
    physics::clamp_walls(player);
    if physics::land_if_grounded(player) && player.state == PlayerState::Fall {
        player.velocity.x = 0.0;
        player.state = PlayerState::Idle;
    }

    player.velocity.x = 0.0;
    if input.left {
        player.velocity.x = -WALK_SPEED;
        player.facing_left = true;
    }
    if input.right {
        player.velocity.x = WALK_SPEED;
        player.facing_left = false;
    }

    if player.velocity.x != 0.0 && player.grounded {
        player.state = PlayerState::Walk;
    } else if player.grounded {
        player.state = PlayerState::Idle;
    }

    if input.jump && player.grounded {
        player.velocity.y = JUMP_IMPULSE;
        player.grounded = false;
        player.state = PlayerState::Jump;
    }

    if input.attack || input.special {
        let slot = select_slot(player, input);
        start_attack(player, slot, world, now_secs, events);
    }
}

/// Map the input snapshot to a moveset slot: vertical direction × special
/// button × grounded × horizontal direction. The ultimate replaces the
/// neutral special only while the meter is full.
fn select_slot(player: &mut Player, input: &InputSnapshot) -> MoveSlot {
    let special = input.special;

    if input.up {
        return if special {
            MoveSlot::SpecialUp
        } else if player.grounded {
            MoveSlot::UpGround
        } else {
            MoveSlot::AirUp
        };
    }
    if input.down {
        return if special {
            MoveSlot::SpecialDown
        } else if player.grounded {
            MoveSlot::DownGround
        } else {
            MoveSlot::AirDown
        };
    }

    let moving_side = input.horizontal();
    if input.left {
        player.facing_left = true;
    }
    if input.right {
        player.facing_left = false;
    }

    if special {
        if moving_side {
            MoveSlot::SpecialSide
        } else if player.meter_full() {
            MoveSlot::Ultimate
        } else {
            MoveSlot::SpecialNeutral
        }
    } else {
        match (player.grounded, moving_side) {
            (true, true) => MoveSlot::SideGround,
            (true, false) => MoveSlot::NeutralGround,
            (false, true) => MoveSlot::AirSide,
            (false, false) => MoveSlot::AirNeutral,
        }
    }
}

/// Try to begin the attack in `slot`. The aerial-special limit and the
/// cooldown gate both reject cleanly: the player drops to Idle, nothing is
/// stamped, nothing is spawned. Returns whether the attack started.
pub fn start_attack(
    player: &mut Player,
    slot: MoveSlot,
    world: &mut World,
    now_secs: f32,
    events: &mut Vec<CombatEvent>,
) -> bool {
    let airborne_special = slot.is_special() && !player.grounded;
    if airborne_special && player.used_air_special {
        player.state = PlayerState::Idle;
        player.active_slot = None;
        return false;
    }
    if !player.moves.get(slot).ready_at(now_secs) {
        player.state = PlayerState::Idle;
        player.active_slot = None;
        return false;
    }

    if slot == MoveSlot::Ultimate {
        player.ult_launch_pos = player.position;
        player.spend_meter();
        events.push(CombatEvent::UltimateActivated { player: player.tag });
    }
    if airborne_special {
        player.used_air_special = true;
    }

    player.moves.get_mut(slot).last_used_secs = now_secs;
    player.state = PlayerState::Attack;
    player.attack_frames = 0;
    player.active_slot = Some(slot);
    move_exec::execute_for_player(world, player, slot);
    true
}

fn update_attack(player: &mut Player, input: &InputSnapshot, world: &mut World) {
    player.attack_frames += 1;

    let slot = match player.active_slot {
        Some(slot) => slot,
        None => {
            // No resolvable move — treat the call as a no-op and recover.
            player.state = PlayerState::Idle;
            return;
        }
    };

    let mv = player.moves.get(slot);
    let active_end = mv.active_end();
    let total = mv.total_frames();
    let can_combo = mv.can_combo;
    let self_velocity = mv.self_velocity;
    let steer_speed = mv.steer_speed;
    let fall_speed = mv.fall_speed;
    let kind = mv.kind;

    // Chain: pressing attack again after the active window restarts the
    // same move without leaving Attack (and without re-stamping cooldown).
    if can_combo && input.attack && player.attack_frames > active_end {
        player.attack_frames = 0;
        move_exec::execute_for_player(world, player, slot);
        return;
    }

    if self_velocity != Vec2::ZERO {
        let dir = if player.facing_left { -1.0 } else { 1.0 };
        player.velocity.x = self_velocity.x * dir;
        player.velocity.y = self_velocity.y;
    }

    if steer_speed > 0.0 {
        if input.left {
            player.position.x -= steer_speed;
        }
        if input.right {
            player.position.x += steer_speed;
        }
    }

    if kind == MoveKind::UltimateFall {
        run_ultimate_fall_phases(player, world, fall_speed);
    }

    player.position += player.velocity;

    // Downward moves end on ground contact.
    if player.position.y > GROUND_LEVEL && (self_velocity.y > 0.0 || fall_speed > 0.0) {
        if kind == MoveKind::UltimateFall {
            let explosion = ultimate_explosion();
            move_exec::execute_at(
                world,
                &explosion,
                player.position,
                player.facing_left,
                player.grounded,
                player.tag,
            );
        }
        player.position.y = GROUND_LEVEL;
        player.velocity = Vec2::ZERO;
        player.grounded = true;
        player.used_air_special = false;
        player.state = PlayerState::Idle;
        player.active_slot = None;
        return;
    }

    if player.attack_frames > total {
        player.active_slot = None;
        if player.grounded {
            player.state = PlayerState::Idle;
            player.velocity = Vec2::ZERO;
        } else {
            // Air recovery keeps some drift.
            player.state = PlayerState::Fall;
            player.velocity.x *= AIR_RECOVERY_DRAG;
        }
    }
}

/// The ultimate-fall phase plan: rise until the peak frame, spawn the area
/// cloud once at the recorded launch position, hang motionless, then drop
/// at the move's fall speed until the landing check fires.
fn run_ultimate_fall_phases(player: &mut Player, world: &mut World, fall_speed: f32) {
    let hang_end = ULT_FALL_PEAK_FRAME + ULT_FALL_HANG_TICKS;

    if player.attack_frames == ULT_FALL_PEAK_FRAME {
        let cloud = ultimate_cloud();
        move_exec::execute_at(
            world,
            &cloud,
            player.ult_launch_pos,
            player.facing_left,
            player.grounded,
            player.tag,
        );
    }

    if player.attack_frames >= ULT_FALL_PEAK_FRAME && player.attack_frames < hang_end {
        player.velocity = Vec2::ZERO;
    } else if player.attack_frames >= hang_end {
        player.velocity.y = fall_speed;
    }
}

fn update_hurt(player: &mut Player) {
    // Knockback bleeds off; hit-stun suppresses all input.
    player.velocity.x *= HURT_VELOCITY_DECAY;
    if !player.grounded {
        player.velocity.y += GRAVITY;
    }

    player.position += player.velocity;
    physics::clamp_walls(player);
    if physics::land_if_grounded(player) {
        player.velocity.x = 0.0;
        player.hitstun_ticks = 0;
        player.state = PlayerState::Idle;
        return;
    }

    player.hitstun_ticks = player.hitstun_ticks.saturating_sub(1);
    if player.hitstun_ticks == 0 {
        player.state = if player.grounded {
            PlayerState::Idle
        } else {
            PlayerState::Fall
        };
    }
}
