#[cfg(test)]
mod tests {
    use std::path::Path;

    use petri_core::constants::COOLDOWN_READY_SECS;
    use petri_core::enums::{CharacterId, MoveKind, MoveSlot, StatusEffect};

    use crate::characters::moveset_for_character;
    use crate::loader::{load_moveset_or_fallback, moveset_from_json, MovesetLoadError};

    const ROSTER: [CharacterId; 3] = [
        CharacterId::Bacteriophage,
        CharacterId::Amoeba,
        CharacterId::Tardigrade,
    ];

    // ---- Built-in tables ----

    #[test]
    fn test_builtin_movesets_are_fully_populated() {
        for character in ROSTER {
            let set = moveset_for_character(character);
            for slot in MoveSlot::ALL {
                let mv = set.get(slot);
                assert!(
                    mv.damage > 0.0,
                    "{:?} {:?} has no damage",
                    character,
                    slot
                );
                assert!(mv.active > 0, "{:?} {:?} has no active window", character, slot);
                assert!(
                    mv.ready_at(0.0),
                    "{:?} {:?} must start off cooldown",
                    character,
                    slot
                );
            }
        }
    }

    #[test]
    fn test_builtin_hitboxes_sit_above_the_feet_line() {
        // Bottom clipping happens at the ground; authored geometry must not
        // start collapsed for a grounded attacker.
        for character in ROSTER {
            let set = moveset_for_character(character);
            for slot in MoveSlot::ALL {
                let hb = set.get(slot).hitbox;
                assert!(
                    hb.y + hb.h <= 40.0,
                    "{:?} {:?} hitbox extends too far below the feet",
                    character,
                    slot
                );
            }
        }
    }

    #[test]
    fn test_amoeba_ultimate_is_multi_hit() {
        let set = moveset_for_character(CharacterId::Amoeba);
        assert_eq!(set.ultimate.kind, MoveKind::Ultimate);
        assert!(set.ultimate.multi_hit);
    }

    #[test]
    fn test_tardigrade_ultimate_is_a_fall() {
        let set = moveset_for_character(CharacterId::Tardigrade);
        assert_eq!(set.ultimate.kind, MoveKind::UltimateFall);
        assert!(set.ultimate.fall_speed > 0.0);
        assert!(set.ultimate.self_velocity.y < 0.0, "launch must rise");
    }

    // ---- JSON parsing ----

    #[test]
    fn test_parse_full_move_entry() {
        let json = r#"{
            "moves": {
                "side_ground": {
                    "name": "test_move",
                    "damage": 11.5,
                    "startup": 4, "active": 6, "recovery": 9,
                    "hitbox": {"x": 20, "y": -70, "w": 50, "h": 40},
                    "knockback": {"x": 5, "y": -2},
                    "type": "PROJECTILE",
                    "effect": "POISON",
                    "effect_duration": 3.5,
                    "projectile_speed": {"x": 12, "y": 0},
                    "cooldown": 2.0,
                    "can_combo": true
                }
            }
        }"#;
        let set = moveset_from_json(json).unwrap();
        let mv = &set.side_ground;
        assert_eq!(mv.name, "test_move");
        assert_eq!(mv.damage, 11.5);
        assert_eq!(mv.startup, 4);
        assert_eq!(mv.hitbox.w, 50.0);
        assert_eq!(mv.knockback.y, -2.0);
        assert_eq!(mv.kind, MoveKind::Projectile);
        assert_eq!(mv.effect, StatusEffect::Poison);
        assert_eq!(mv.effect_duration_secs, 3.5);
        assert_eq!(mv.projectile_speed.x, 12.0);
        assert_eq!(mv.cooldown_secs, 2.0);
        assert!(mv.can_combo);
        assert_eq!(mv.last_used_secs, COOLDOWN_READY_SECS);
    }

    #[test]
    fn test_missing_slots_get_safe_defaults() {
        let set = moveset_from_json(r#"{"moves": {}}"#).unwrap();
        assert_eq!(set.ultimate.damage, 0.0);
        assert_eq!(set.air_down.total_frames(), 0);
        assert!(set.special_side.ready_at(0.0));
        assert_eq!(set.neutral_ground.kind, MoveKind::Melee);
    }

    #[test]
    fn test_unknown_tags_default_cleanly() {
        let json = r#"{
            "moves": {
                "up_ground": {"type": "LASER_BEAM", "effect": "CONFUSION", "damage": 1}
            }
        }"#;
        let set = moveset_from_json(json).unwrap();
        assert_eq!(set.up_ground.kind, MoveKind::Melee);
        assert_eq!(set.up_ground.effect, StatusEffect::None);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        let result = moveset_from_json("{ not json");
        assert!(matches!(result, Err(MovesetLoadError::Parse(_))));
    }

    #[test]
    fn test_missing_file_falls_back_to_builtin() {
        let loaded = load_moveset_or_fallback(
            Path::new("/no/such/file.json"),
            CharacterId::Bacteriophage,
        );
        let builtin = moveset_for_character(CharacterId::Bacteriophage);
        assert_eq!(loaded.side_ground.name, builtin.side_ground.name);
        assert_eq!(loaded.side_ground.damage, builtin.side_ground.damage);
    }
}
