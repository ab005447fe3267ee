//! Built-in character move tables.
//!
//! These are the canonical rosters and double as the deterministic
//! fallback when an external move file cannot be loaded. Geometry is
//! authored for a facing-right attacker, relative to the feet anchor;
//! the body hurtbox extends 90 px upward from there.

use glam::Vec2;

use petri_core::enums::{CharacterId, MoveKind, StatusEffect};
use petri_core::moves::{Move, Moveset};
use petri_core::types::Rect;

/// The full move table for a character. Always succeeds.
pub fn moveset_for_character(character: CharacterId) -> Moveset {
    match character {
        CharacterId::Bacteriophage => bacteriophage(),
        CharacterId::Amoeba => amoeba(),
        CharacterId::Tardigrade => tardigrade(),
    }
}

/// Fast zoner: quick normals, projectile specials, a poison DNA trap.
fn bacteriophage() -> Moveset {
    Moveset {
        side_ground: Move {
            name: "tail_whip".into(),
            startup: 5,
            active: 6,
            recovery: 8,
            hitbox: Rect::new(20.0, -70.0, 50.0, 40.0),
            knockback: Vec2::new(5.0, 0.0),
            damage: 10.0,
            can_combo: true,
            ..Move::default()
        },
        up_ground: Move {
            name: "capsid_spike".into(),
            startup: 6,
            active: 5,
            recovery: 10,
            hitbox: Rect::new(-25.0, -130.0, 50.0, 45.0),
            knockback: Vec2::new(2.0, -8.0),
            damage: 8.0,
            ..Move::default()
        },
        down_ground: Move {
            name: "fiber_sweep".into(),
            startup: 4,
            active: 6,
            recovery: 10,
            hitbox: Rect::new(10.0, -30.0, 60.0, 30.0),
            knockback: Vec2::new(6.0, -2.0),
            damage: 7.0,
            ..Move::default()
        },
        neutral_ground: Move {
            name: "jab".into(),
            startup: 3,
            active: 4,
            recovery: 6,
            hitbox: Rect::new(15.0, -75.0, 40.0, 30.0),
            knockback: Vec2::new(3.0, 0.0),
            damage: 6.0,
            can_combo: true,
            ..Move::default()
        },
        air_side: Move {
            name: "air_lance".into(),
            startup: 5,
            active: 6,
            recovery: 10,
            hitbox: Rect::new(15.0, -80.0, 55.0, 35.0),
            knockback: Vec2::new(5.0, -2.0),
            damage: 9.0,
            ..Move::default()
        },
        air_up: Move {
            name: "rising_tail".into(),
            startup: 5,
            active: 6,
            recovery: 9,
            hitbox: Rect::new(-20.0, -140.0, 40.0, 50.0),
            knockback: Vec2::new(1.0, -9.0),
            damage: 8.0,
            ..Move::default()
        },
        air_down: Move {
            name: "dive_spike".into(),
            startup: 6,
            active: 8,
            recovery: 12,
            hitbox: Rect::new(-15.0, -40.0, 30.0, 50.0),
            knockback: Vec2::new(3.0, 8.0),
            damage: 10.0,
            ..Move::default()
        },
        air_neutral: Move {
            name: "spin".into(),
            startup: 4,
            active: 8,
            recovery: 8,
            hitbox: Rect::new(-30.0, -90.0, 60.0, 40.0),
            knockback: Vec2::new(4.0, -3.0),
            damage: 7.0,
            ..Move::default()
        },
        special_neutral: Move {
            name: "phage_bolt".into(),
            kind: MoveKind::Projectile,
            hitbox: Rect::new(30.0, -80.0, 30.0, 20.0),
            projectile_speed: Vec2::new(12.0, 0.0),
            knockback: Vec2::new(2.0, 0.0),
            damage: 8.0,
            startup: 8,
            active: 4,
            recovery: 14,
            cooldown_secs: 1.5,
            ..Move::default()
        },
        special_side: Move {
            name: "injection_rush".into(),
            startup: 6,
            active: 8,
            recovery: 10,
            hitbox: Rect::new(25.0, -75.0, 45.0, 40.0),
            knockback: Vec2::new(9.0, -3.0),
            damage: 12.0,
            self_velocity: Vec2::new(8.0, 0.0),
            cooldown_secs: 3.0,
            ..Move::default()
        },
        special_up: Move {
            name: "spore_burst".into(),
            kind: MoveKind::ProjectileInstant,
            hitbox: Rect::new(-15.0, -120.0, 30.0, 30.0),
            projectile_speed: Vec2::new(0.0, -14.0),
            knockback: Vec2::new(1.0, -6.0),
            damage: 9.0,
            startup: 6,
            active: 4,
            recovery: 12,
            cooldown_secs: 2.5,
            ..Move::default()
        },
        special_down: Move {
            name: "dna_snare".into(),
            kind: MoveKind::TrapProjectile,
            hitbox: Rect::new(30.0, -20.0, 70.0, 35.0),
            projectile_speed: Vec2::new(8.0, 4.0),
            damage: 6.0,
            effect: StatusEffect::Poison,
            effect_duration_secs: 3.0,
            trap_duration_secs: 10.0,
            startup: 10,
            active: 4,
            recovery: 16,
            cooldown_secs: 6.0,
            ..Move::default()
        },
        ultimate: Move {
            name: "lytic_burst".into(),
            kind: MoveKind::Ultimate,
            startup: 20,
            active: 15,
            recovery: 30,
            hitbox: Rect::new(-150.0, -200.0, 300.0, 200.0),
            knockback: Vec2::new(15.0, -10.0),
            damage: 35.0,
            ..Move::default()
        },
    }
}

/// Grappler: slow heavy normals, slow-effect projectiles, slime traps,
/// and the persistent multi-tick engulf ultimate.
fn amoeba() -> Moveset {
    Moveset {
        side_ground: Move {
            name: "pseudopod_slam".into(),
            startup: 8,
            active: 6,
            recovery: 12,
            hitbox: Rect::new(15.0, -80.0, 60.0, 50.0),
            knockback: Vec2::new(7.0, 0.0),
            damage: 12.0,
            ..Move::default()
        },
        up_ground: Move {
            name: "membrane_surge".into(),
            startup: 9,
            active: 6,
            recovery: 14,
            hitbox: Rect::new(-30.0, -140.0, 60.0, 55.0),
            knockback: Vec2::new(2.0, -10.0),
            damage: 11.0,
            ..Move::default()
        },
        down_ground: Move {
            name: "ooze_sweep".into(),
            startup: 7,
            active: 8,
            recovery: 12,
            hitbox: Rect::new(5.0, -35.0, 70.0, 35.0),
            knockback: Vec2::new(8.0, -1.0),
            damage: 9.0,
            ..Move::default()
        },
        neutral_ground: Move {
            name: "blob_jab".into(),
            startup: 5,
            active: 5,
            recovery: 8,
            hitbox: Rect::new(15.0, -80.0, 45.0, 35.0),
            knockback: Vec2::new(4.0, 0.0),
            damage: 8.0,
            can_combo: true,
            ..Move::default()
        },
        air_side: Move {
            name: "air_lash".into(),
            startup: 6,
            active: 7,
            recovery: 11,
            hitbox: Rect::new(10.0, -85.0, 60.0, 40.0),
            knockback: Vec2::new(6.0, -2.0),
            damage: 10.0,
            ..Move::default()
        },
        air_up: Move {
            name: "bubble_up".into(),
            startup: 6,
            active: 6,
            recovery: 10,
            hitbox: Rect::new(-25.0, -145.0, 50.0, 50.0),
            knockback: Vec2::new(1.0, -8.0),
            damage: 9.0,
            ..Move::default()
        },
        air_down: Move {
            name: "body_press".into(),
            startup: 7,
            active: 9,
            recovery: 14,
            hitbox: Rect::new(-25.0, -45.0, 50.0, 55.0),
            knockback: Vec2::new(3.0, 9.0),
            damage: 12.0,
            self_velocity: Vec2::new(0.0, 7.0),
            ..Move::default()
        },
        air_neutral: Move {
            name: "ripple".into(),
            startup: 5,
            active: 8,
            recovery: 9,
            hitbox: Rect::new(-35.0, -95.0, 70.0, 45.0),
            knockback: Vec2::new(4.0, -3.0),
            damage: 8.0,
            ..Move::default()
        },
        special_neutral: Move {
            name: "cytoplasm_glob".into(),
            kind: MoveKind::Projectile,
            hitbox: Rect::new(25.0, -85.0, 35.0, 25.0),
            projectile_speed: Vec2::new(9.0, 0.0),
            damage: 7.0,
            effect: StatusEffect::Slow,
            effect_duration_secs: 2.0,
            startup: 10,
            active: 4,
            recovery: 16,
            cooldown_secs: 2.0,
            ..Move::default()
        },
        special_side: Move {
            name: "engulf_grab".into(),
            kind: MoveKind::Grab,
            startup: 10,
            active: 5,
            recovery: 16,
            hitbox: Rect::new(20.0, -80.0, 40.0, 50.0),
            knockback: Vec2::new(12.0, -6.0),
            damage: 14.0,
            cooldown_secs: 4.0,
            ..Move::default()
        },
        special_up: Move {
            name: "geyser".into(),
            startup: 8,
            active: 8,
            recovery: 14,
            hitbox: Rect::new(-20.0, -160.0, 40.0, 80.0),
            knockback: Vec2::new(2.0, -11.0),
            damage: 10.0,
            cooldown_secs: 3.0,
            ..Move::default()
        },
        special_down: Move {
            name: "slime_pool".into(),
            kind: MoveKind::Trap,
            hitbox: Rect::new(20.0, -25.0, 110.0, 25.0),
            damage: 3.0,
            effect: StatusEffect::Slow,
            effect_duration_secs: 4.0,
            trap_duration_secs: 8.0,
            startup: 12,
            active: 4,
            recovery: 18,
            cooldown_secs: 7.0,
            ..Move::default()
        },
        ultimate: Move {
            name: "total_engulfment".into(),
            kind: MoveKind::Ultimate,
            startup: 15,
            active: 80,
            recovery: 25,
            hitbox: Rect::new(-120.0, -160.0, 240.0, 160.0),
            knockback: Vec2::new(2.0, -3.0),
            damage: 6.0,
            multi_hit: true,
            ..Move::default()
        },
    }
}

/// Tank: huge single hits, a wall trap, and the orbital-drop ultimate.
fn tardigrade() -> Moveset {
    Moveset {
        side_ground: Move {
            name: "claw_haymaker".into(),
            startup: 10,
            active: 6,
            recovery: 14,
            hitbox: Rect::new(20.0, -85.0, 55.0, 50.0),
            knockback: Vec2::new(9.0, 0.0),
            damage: 14.0,
            ..Move::default()
        },
        up_ground: Move {
            name: "shell_toss".into(),
            startup: 11,
            active: 6,
            recovery: 16,
            hitbox: Rect::new(-30.0, -150.0, 60.0, 60.0),
            knockback: Vec2::new(3.0, -11.0),
            damage: 13.0,
            ..Move::default()
        },
        down_ground: Move {
            name: "stomp".into(),
            startup: 9,
            active: 6,
            recovery: 14,
            hitbox: Rect::new(5.0, -35.0, 65.0, 35.0),
            knockback: Vec2::new(7.0, -3.0),
            damage: 11.0,
            ..Move::default()
        },
        neutral_ground: Move {
            name: "headbutt".into(),
            startup: 6,
            active: 5,
            recovery: 10,
            hitbox: Rect::new(15.0, -85.0, 45.0, 40.0),
            knockback: Vec2::new(5.0, 0.0),
            damage: 9.0,
            can_combo: true,
            ..Move::default()
        },
        air_side: Move {
            name: "air_ram".into(),
            startup: 7,
            active: 7,
            recovery: 12,
            hitbox: Rect::new(12.0, -85.0, 55.0, 45.0),
            knockback: Vec2::new(7.0, -2.0),
            damage: 11.0,
            ..Move::default()
        },
        air_up: Move {
            name: "upward_claw".into(),
            startup: 7,
            active: 6,
            recovery: 11,
            hitbox: Rect::new(-22.0, -150.0, 45.0, 55.0),
            knockback: Vec2::new(1.0, -10.0),
            damage: 10.0,
            ..Move::default()
        },
        air_down: Move {
            name: "meteor_stomp".into(),
            startup: 8,
            active: 10,
            recovery: 14,
            hitbox: Rect::new(-20.0, -45.0, 40.0, 55.0),
            knockback: Vec2::new(4.0, 10.0),
            damage: 13.0,
            self_velocity: Vec2::new(0.0, 8.0),
            ..Move::default()
        },
        air_neutral: Move {
            name: "tumble".into(),
            startup: 6,
            active: 8,
            recovery: 10,
            hitbox: Rect::new(-32.0, -95.0, 64.0, 45.0),
            knockback: Vec2::new(5.0, -3.0),
            damage: 9.0,
            ..Move::default()
        },
        special_neutral: Move {
            name: "water_jet".into(),
            kind: MoveKind::Projectile,
            hitbox: Rect::new(28.0, -80.0, 32.0, 22.0),
            projectile_speed: Vec2::new(10.0, 0.0),
            knockback: Vec2::new(3.0, 0.0),
            damage: 9.0,
            startup: 9,
            active: 4,
            recovery: 15,
            cooldown_secs: 2.0,
            ..Move::default()
        },
        special_side: Move {
            name: "rolling_charge".into(),
            startup: 8,
            active: 10,
            recovery: 12,
            hitbox: Rect::new(20.0, -80.0, 50.0, 45.0),
            knockback: Vec2::new(10.0, -4.0),
            damage: 13.0,
            self_velocity: Vec2::new(7.0, 0.0),
            cooldown_secs: 3.5,
            ..Move::default()
        },
        special_up: Move {
            name: "cryo_leap".into(),
            startup: 6,
            active: 9,
            recovery: 12,
            hitbox: Rect::new(-20.0, -155.0, 40.0, 70.0),
            knockback: Vec2::new(2.0, -12.0),
            damage: 11.0,
            self_velocity: Vec2::new(0.0, -10.0),
            steer_speed: 3.0,
            cooldown_secs: 4.0,
            ..Move::default()
        },
        special_down: Move {
            name: "moss_barricade".into(),
            kind: MoveKind::Trap,
            hitbox: Rect::new(35.0, -60.0, 45.0, 60.0),
            damage: 4.0,
            trap_duration_secs: 6.0,
            startup: 12,
            active: 4,
            recovery: 18,
            cooldown_secs: 8.0,
            ..Move::default()
        },
        ultimate: Move {
            name: "orbital_drop".into(),
            kind: MoveKind::UltimateFall,
            startup: 40,
            active: 80,
            recovery: 30,
            hitbox: Rect::new(-25.0, -95.0, 50.0, 60.0),
            knockback: Vec2::new(3.0, -5.0),
            damage: 8.0,
            self_velocity: Vec2::new(0.0, -15.0),
            steer_speed: 6.0,
            fall_speed: 18.0,
            ..Move::default()
        },
    }
}
