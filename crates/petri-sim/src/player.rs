//! Combatant state. Players are owned by the engine, not stored in the ECS
//! world — only transient combat entities live there.

use glam::Vec2;

use petri_core::constants::*;
use petri_core::enums::{
    AiState, CharacterId, ControlMode, MoveSlot, PlayerState, PlayerTag,
};
use petri_core::moves::{Move, Moveset};
use petri_core::state::PlayerView;
use petri_core::types::Rect;

/// Decision-machine state for a computer-driven player.
#[derive(Debug, Clone, Copy, Default)]
pub struct AiController {
    pub state: AiState,
    pub timer: u32,
}

/// One combatant.
#[derive(Debug, Clone)]
pub struct Player {
    pub tag: PlayerTag,
    pub character: CharacterId,
    /// Feet anchor position.
    pub position: Vec2,
    pub velocity: Vec2,
    pub grounded: bool,
    pub facing_left: bool,
    pub state: PlayerState,
    /// Ticks since the current attack started.
    pub attack_frames: u32,
    /// Remaining hit-stun while in Hurt.
    pub hitstun_ticks: u32,
    /// Slot of the executing move. `Some` exactly while in Attack.
    pub active_slot: Option<MoveSlot>,
    pub moves: Moveset,
    pub health: f32,
    pub max_health: f32,
    pub ult_charge: f32,
    pub max_ult_charge: f32,
    pub charge_per_unit: f32,
    /// Derived: `ult_charge / charge_per_unit`, floored.
    pub ult_units: u32,
    pub max_ult_units: u32,
    pub rounds_won: u32,
    /// Remaining poison duration (seconds).
    pub poison_secs: f32,
    /// Position recorded when the ultimate began; the fall sequence spawns
    /// its cloud here.
    pub ult_launch_pos: Vec2,
    /// One aerial special per airborne period.
    pub used_air_special: bool,
    pub control: ControlMode,
    pub ai: AiController,
}

impl Player {
    pub fn new(
        tag: PlayerTag,
        character: CharacterId,
        moves: Moveset,
        control: ControlMode,
    ) -> Self {
        Self {
            tag,
            character,
            position: Self::spawn_position(tag),
            velocity: Vec2::ZERO,
            grounded: false,
            facing_left: tag == PlayerTag::P2,
            state: PlayerState::Idle,
            attack_frames: 0,
            hitstun_ticks: 0,
            active_slot: None,
            moves,
            health: MAX_HEALTH,
            max_health: MAX_HEALTH,
            ult_charge: 0.0,
            max_ult_charge: MAX_ULT_UNITS as f32 * CHARGE_PER_UNIT,
            charge_per_unit: CHARGE_PER_UNIT,
            ult_units: 0,
            max_ult_units: MAX_ULT_UNITS,
            rounds_won: 0,
            poison_secs: 0.0,
            ult_launch_pos: Vec2::ZERO,
            used_air_special: false,
            control,
            ai: AiController::default(),
        }
    }

    pub fn spawn_position(tag: PlayerTag) -> Vec2 {
        let x = match tag {
            PlayerTag::P1 => PLAYER1_SPAWN_X,
            PlayerTag::P2 => PLAYER2_SPAWN_X,
        };
        Vec2::new(x, GROUND_LEVEL)
    }

    /// Body hurtbox, anchored at the feet and extending upward.
    pub fn body_rect(&self) -> Rect {
        Rect::new(
            self.position.x - BODY_WIDTH / 2.0,
            self.position.y - BODY_HEIGHT,
            BODY_WIDTH,
            BODY_HEIGHT,
        )
    }

    pub fn active_move(&self) -> Option<&Move> {
        self.active_slot.map(|slot| self.moves.get(slot))
    }

    /// Subtract damage, clamping health at zero.
    pub fn apply_damage(&mut self, damage: f32) {
        self.health = (self.health - damage).max(0.0);
    }

    /// Add meter charge, clamp, and rederive the discrete unit count.
    pub fn add_meter(&mut self, amount: f32) {
        self.ult_charge = (self.ult_charge + amount).min(self.max_ult_charge);
        self.ult_units = (self.ult_charge / self.charge_per_unit) as u32;
    }

    pub fn meter_full(&self) -> bool {
        self.ult_units >= self.max_ult_units
    }

    pub fn spend_meter(&mut self) {
        self.ult_charge = 0.0;
        self.ult_units = 0;
    }

    /// Put the player into hit-stun. Clears any move in progress so the
    /// active-slot/Attack pairing holds.
    pub fn enter_hurt(&mut self, stun_ticks: u32) {
        self.state = PlayerState::Hurt;
        self.hitstun_ticks = stun_ticks;
        self.active_slot = None;
        self.attack_frames = 0;
    }

    /// Reset per-round state. Rounds won and meter carry over.
    pub fn reset_for_round(&mut self) {
        self.position = Self::spawn_position(self.tag);
        self.velocity = Vec2::ZERO;
        self.grounded = false;
        self.facing_left = self.tag == PlayerTag::P2;
        self.state = PlayerState::Idle;
        self.attack_frames = 0;
        self.hitstun_ticks = 0;
        self.active_slot = None;
        self.health = self.max_health;
        self.poison_secs = 0.0;
        self.used_air_special = false;
        self.ai = AiController::default();
    }

    /// Full reset for a rematch.
    pub fn reset_for_match(&mut self) {
        self.reset_for_round();
        self.rounds_won = 0;
        self.spend_meter();
    }

    pub fn view(&self) -> PlayerView {
        PlayerView {
            tag: self.tag,
            character: self.character,
            position: self.position,
            facing_left: self.facing_left,
            state: self.state,
            health: self.health,
            max_health: self.max_health,
            ult_charge: self.ult_charge,
            ult_units: self.ult_units,
            max_ult_units: self.max_ult_units,
            rounds_won: self.rounds_won,
            poisoned: self.poison_secs > 0.0,
        }
    }
}
