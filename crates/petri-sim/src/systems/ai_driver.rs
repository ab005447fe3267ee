//! Computer opponent driver — adapts the pure decision FSM to engine state.
//!
//! Builds an `AiContext` snapshot each tick, applies the transition, and
//! funnels attack starts and attack/hurt progression through the same
//! paths the human player uses.

use hecs::World;
use rand_chacha::ChaCha8Rng;

use petri_core::constants::*;
use petri_core::enums::PlayerState;
use petri_core::events::CombatEvent;
use petri_core::input::InputSnapshot;

use petri_ai::fsm::{self, AiAction, AiContext};

use crate::player::Player;
use crate::systems::{action, physics};

/// Advance the computer-controlled player by one tick.
pub fn run(
    puppet: &mut Player,
    opponent: &Player,
    world: &mut World,
    rng: &mut ChaCha8Rng,
    now_secs: f32,
    events: &mut Vec<CombatEvent>,
) {
    // A move or hit-stun in progress plays out exactly as it would for a
    // human holding nothing.
    if matches!(puppet.state, PlayerState::Attack | PlayerState::Hurt) {
        action::run(puppet, &InputSnapshot::NEUTRAL, world, now_secs, events);
        return;
    }

    let transition = {
        let ctx = AiContext {
            state: puppet.ai.state,
            timer: puppet.ai.timer,
            grounded: puppet.grounded,
            position: puppet.position,
            opponent: opponent.position,
            opponent_attacking: opponent.state == PlayerState::Attack,
            meter_full: puppet.meter_full(),
            now_secs,
            moves: &puppet.moves,
        };
        fsm::evaluate(&ctx, rng)
    };

    puppet.ai.state = transition.state;
    puppet.ai.timer = transition.timer;

    match transition.action {
        AiAction::Hold => puppet.velocity.x = 0.0,
        AiAction::Steer { vx } => {
            puppet.velocity.x = vx;
            puppet.facing_left = vx < 0.0;
        }
        AiAction::Jump { vx } => {
            if puppet.grounded {
                puppet.velocity.y = JUMP_IMPULSE;
                puppet.grounded = false;
                puppet.state = PlayerState::Jump;
            }
            if vx != 0.0 {
                puppet.velocity.x = vx;
                puppet.facing_left = vx < 0.0;
            }
        }
        AiAction::Attack { slot } => {
            puppet.facing_left = opponent.position.x < puppet.position.x;
            action::start_attack(puppet, slot, world, now_secs, events);
            return;
        }
    }

    if !puppet.grounded {
        puppet.velocity.y += GRAVITY;
        puppet.state = PlayerState::Fall;
    }
    puppet.position += puppet.velocity;
    physics::clamp_walls(puppet);
    physics::land_if_grounded(puppet);

    if puppet.velocity.x != 0.0 && puppet.grounded {
        puppet.state = PlayerState::Walk;
    } else if puppet.grounded && puppet.state != PlayerState::Jump {
        puppet.state = PlayerState::Idle;
    }
}
