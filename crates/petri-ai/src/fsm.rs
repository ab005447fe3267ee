//! Opponent decision state machine.
//!
//! Pure functions that compute decision-state transitions and the action to
//! take this tick, based on the puppet's situation relative to its opponent.
//! The sim builds an `AiContext` snapshot each tick and applies the result.

use glam::Vec2;
use rand::Rng;

use petri_core::constants::*;
use petri_core::enums::{AiState, MoveSlot};
use petri_core::moves::Moveset;

/// Input to the decision FSM for one tick.
pub struct AiContext<'a> {
    pub state: AiState,
    /// Ticks spent in the current decision state.
    pub timer: u32,
    pub grounded: bool,
    /// Puppet feet position.
    pub position: Vec2,
    /// Opponent feet position.
    pub opponent: Vec2,
    pub opponent_attacking: bool,
    pub meter_full: bool,
    /// Simulated time, for cooldown gating.
    pub now_secs: f32,
    pub moves: &'a Moveset,
}

impl AiContext<'_> {
    fn dx(&self) -> f32 {
        self.opponent.x - self.position.x
    }

    fn dy(&self) -> f32 {
        self.opponent.y - self.position.y
    }
}

/// What the puppet does this tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AiAction {
    /// Stand still.
    Hold,
    /// Walk with the given horizontal velocity.
    Steer { vx: f32 },
    /// Jump, optionally with horizontal drift.
    Jump { vx: f32 },
    /// Start the attack in the given slot.
    Attack { slot: MoveSlot },
}

/// Output of one FSM evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AiTransition {
    pub state: AiState,
    pub timer: u32,
    pub action: AiAction,
}

/// Whether a position is close enough to a wall to count as cornered.
pub fn cornered(x: f32) -> bool {
    x < AI_CORNER_MARGIN || x > ARENA_WIDTH - AI_CORNER_MARGIN
}

/// Evaluate the FSM for one tick.
pub fn evaluate<R: Rng>(ctx: &AiContext, rng: &mut R) -> AiTransition {
    // Reactive defense: an attacking opponent in range interrupts planning.
    if ctx.opponent_attacking
        && ctx.dx().abs() < AI_REACT_RANGE
        && matches!(ctx.state, AiState::Thinking | AiState::Approach)
    {
        return if cornered(ctx.position.x) {
            // Nowhere to run — swing instead.
            AiTransition {
                state: AiState::Attack,
                timer: 0,
                action: AiAction::Hold,
            }
        } else {
            AiTransition {
                state: AiState::Flee,
                timer: 0,
                action: AiAction::Steer {
                    vx: flee_direction(ctx) * WALK_SPEED,
                },
            }
        };
    }

    match ctx.state {
        AiState::Thinking => evaluate_thinking(ctx, rng),
        AiState::Approach => evaluate_approach(ctx),
        AiState::Attack => AiTransition {
            state: AiState::Thinking,
            timer: 0,
            action: AiAction::Attack {
                slot: select_attack(rng, ctx.moves, ctx.meter_full, ctx.now_secs),
            },
        },
        AiState::Flee => evaluate_flee(ctx),
    }
}

fn evaluate_thinking<R: Rng>(ctx: &AiContext, rng: &mut R) -> AiTransition {
    let timer = ctx.timer + 1;
    if timer <= AI_DECISION_INTERVAL_TICKS {
        return AiTransition {
            state: AiState::Thinking,
            timer,
            action: AiAction::Hold,
        };
    }

    let decision = rng.gen_range(1..=100);
    let dx = ctx.dx();

    // Opponent hovering overhead: jump after them, or swat upward if
    // already airborne.
    if ctx.dy() < -AI_ABOVE_THRESHOLD && dx.abs() < AI_MELEE_RANGE {
        let action = if ctx.grounded {
            AiAction::Jump { vx: 0.0 }
        } else {
            AiAction::Attack {
                slot: MoveSlot::AirUp,
            }
        };
        return AiTransition {
            state: AiState::Thinking,
            timer: 0,
            action,
        };
    }

    if decision < 20 && ctx.grounded {
        return AiTransition {
            state: AiState::Approach,
            timer: 0,
            action: AiAction::Jump {
                vx: dx.signum() * AI_JUMP_DRIFT_SPEED,
            },
        };
    }

    let next = if dx.abs() < AI_MELEE_RANGE {
        if decision < 70 {
            AiState::Attack
        } else {
            AiState::Approach
        }
    } else if decision < 80 {
        AiState::Approach
    } else {
        AiState::Thinking
    };

    AiTransition {
        state: next,
        timer: 0,
        action: AiAction::Hold,
    }
}

fn evaluate_approach(ctx: &AiContext) -> AiTransition {
    let dx = ctx.dx();

    // Dropping onto the opponent — dive.
    if !ctx.grounded && ctx.dy() > 0.0 && dx.abs() < AI_AIR_ATTACK_RANGE {
        return AiTransition {
            state: AiState::Thinking,
            timer: 0,
            action: AiAction::Attack {
                slot: MoveSlot::AirDown,
            },
        };
    }

    if dx.abs() < AI_ATTACK_RANGE && ctx.grounded {
        return AiTransition {
            state: AiState::Attack,
            timer: 0,
            action: AiAction::Hold,
        };
    }

    AiTransition {
        state: AiState::Approach,
        timer: ctx.timer + 1,
        action: AiAction::Steer {
            vx: dx.signum() * WALK_SPEED,
        },
    }
}

fn evaluate_flee(ctx: &AiContext) -> AiTransition {
    // Cornered mid-flight: turn and fight.
    if cornered(ctx.position.x) {
        return AiTransition {
            state: AiState::Attack,
            timer: 0,
            action: AiAction::Hold,
        };
    }

    let timer = ctx.timer + 1;
    if timer > AI_FLEE_TICKS {
        return AiTransition {
            state: AiState::Thinking,
            timer: 0,
            action: AiAction::Hold,
        };
    }

    AiTransition {
        state: AiState::Flee,
        timer,
        action: AiAction::Steer {
            vx: flee_direction(ctx) * WALK_SPEED,
        },
    }
}

fn flee_direction(ctx: &AiContext) -> f32 {
    if ctx.dx() > 0.0 {
        -1.0
    } else {
        1.0
    }
}

/// Weighted attack selection: ultimate on a full meter with low odds,
/// specials with medium odds, grounded normals otherwise. A pick that is
/// still cooling down falls back to the always-available side normal.
pub fn select_attack<R: Rng>(
    rng: &mut R,
    moves: &Moveset,
    meter_full: bool,
    now_secs: f32,
) -> MoveSlot {
    let roll = rng.gen_range(1..=100);

    let slot = if meter_full && roll <= AI_ULTIMATE_WEIGHT {
        MoveSlot::Ultimate
    } else if roll <= AI_ULTIMATE_WEIGHT + AI_SPECIAL_WEIGHT {
        match rng.gen_range(0..4) {
            0 => MoveSlot::SpecialNeutral,
            1 => MoveSlot::SpecialSide,
            2 => MoveSlot::SpecialUp,
            _ => MoveSlot::SpecialDown,
        }
    } else {
        match rng.gen_range(0..3) {
            0 => MoveSlot::SideGround,
            1 => MoveSlot::UpGround,
            _ => MoveSlot::DownGround,
        }
    };

    if moves.get(slot).ready_at(now_secs) {
        slot
    } else {
        MoveSlot::SideGround
    }
}
