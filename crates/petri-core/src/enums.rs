//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// What a move spawns and how it resolves on hit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveKind {
    /// Attacker-tracking melee hitbox.
    #[default]
    Melee,
    /// Free-flying projectile.
    Projectile,
    /// Short-lived point-blank projectile.
    ProjectileInstant,
    /// Stationary area trap placed relative to the attacker.
    Trap,
    /// Trap when grounded, trap-dropping projectile when airborne.
    TrapProjectile,
    /// Close-range grab, resolved like a melee hitbox.
    Grab,
    /// Meter-spending super. Awards no meter on hit.
    Ultimate,
    /// Multi-phase aerial super: launch, hang, forced fall, landing blast.
    UltimateFall,
}

impl MoveKind {
    /// Ultimate-class hits never feed the meter.
    pub fn awards_meter(self) -> bool {
        !matches!(self, MoveKind::Ultimate | MoveKind::UltimateFall)
    }
}

/// Status effect carried by a move onto its spawned entities.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusEffect {
    #[default]
    None,
    /// Damage over time.
    Poison,
    /// Movement debuff.
    Slow,
}

/// Discrete player action state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerState {
    #[default]
    Idle,
    Walk,
    Jump,
    Fall,
    /// Executing a move; exactly one moveset slot is active.
    Attack,
    /// In hit-stun; input is suppressed.
    Hurt,
}

/// Decision state for a computer-controlled player.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AiState {
    /// Standing still, rolling periodic decisions.
    #[default]
    Thinking,
    /// Closing horizontal distance to the opponent.
    Approach,
    /// Committing to an attack selection.
    Attack,
    /// Backing away from the opponent.
    Flee,
}

/// Which side of the match a player or entity belongs to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerTag {
    #[default]
    P1,
    P2,
}

impl PlayerTag {
    pub fn opponent(self) -> PlayerTag {
        match self {
            PlayerTag::P1 => PlayerTag::P2,
            PlayerTag::P2 => PlayerTag::P1,
        }
    }

    /// Index into the engine's player pair.
    pub fn index(self) -> usize {
        match self {
            PlayerTag::P1 => 0,
            PlayerTag::P2 => 1,
        }
    }
}

/// Named moveset slot. Replaces direct move aliasing: a player's active
/// move is identified by slot, never by pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveSlot {
    SideGround,
    UpGround,
    DownGround,
    NeutralGround,
    AirSide,
    AirUp,
    AirDown,
    AirNeutral,
    SpecialNeutral,
    SpecialSide,
    SpecialUp,
    SpecialDown,
    Ultimate,
}

impl MoveSlot {
    pub const ALL: [MoveSlot; 13] = [
        MoveSlot::SideGround,
        MoveSlot::UpGround,
        MoveSlot::DownGround,
        MoveSlot::NeutralGround,
        MoveSlot::AirSide,
        MoveSlot::AirUp,
        MoveSlot::AirDown,
        MoveSlot::AirNeutral,
        MoveSlot::SpecialNeutral,
        MoveSlot::SpecialSide,
        MoveSlot::SpecialUp,
        MoveSlot::SpecialDown,
        MoveSlot::Ultimate,
    ];

    /// Specials (and the ultimate) are limited to one use per airborne period.
    pub fn is_special(self) -> bool {
        matches!(
            self,
            MoveSlot::SpecialNeutral
                | MoveSlot::SpecialSide
                | MoveSlot::SpecialUp
                | MoveSlot::SpecialDown
                | MoveSlot::Ultimate
        )
    }
}

/// Playable character roster.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CharacterId {
    #[default]
    Bacteriophage,
    Amoeba,
    Tardigrade,
}

impl CharacterId {
    pub fn display_name(self) -> &'static str {
        match self {
            CharacterId::Bacteriophage => "BACTERIOPHAGE",
            CharacterId::Amoeba => "AMOEBA",
            CharacterId::Tardigrade => "TARDIGRADE",
        }
    }
}

/// Top-level match phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchPhase {
    /// Pre-round countdown; the pipeline is idle.
    #[default]
    Countdown,
    /// Live combat.
    Fighting,
    Paused,
    /// A KO landed; waiting before the next round or the result.
    RoundEnd,
    GameOver,
}

/// Who drives a player's inputs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ControlMode {
    #[default]
    Human,
    Cpu,
}
