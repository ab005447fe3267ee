#[cfg(test)]
mod tests {
    use glam::Vec2;

    use crate::constants::*;
    use crate::enums::*;
    use crate::events::CombatEvent;
    use crate::input::{InputSnapshot, MatchCommand};
    use crate::moves::{ultimate_cloud, ultimate_explosion, Move, Moveset};
    use crate::types::{Rect, SimTime};

    // ---- Geometry ----

    #[test]
    fn test_rect_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        let c = Rect::new(10.0, 0.0, 5.0, 5.0);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        // Edge contact is not overlap.
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn test_degenerate_rect_overlaps_nothing() {
        let zero = Rect::new(5.0, 5.0, 0.0, 10.0);
        let body = Rect::new(0.0, 0.0, 20.0, 20.0);
        assert!(zero.is_degenerate());
        assert!(!zero.overlaps(&body));
    }

    #[test]
    fn test_clip_left_edge_shrinks_width() {
        let r = Rect::new(-30.0, 100.0, 50.0, 40.0).clipped_to_arena();
        assert_eq!(r.x, 0.0);
        assert_eq!(r.w, 20.0);
        assert_eq!(r.h, 40.0);
    }

    #[test]
    fn test_clip_right_and_bottom() {
        let r = Rect::new(ARENA_WIDTH - 10.0, GROUND_LEVEL - 10.0, 50.0, 50.0).clipped_to_arena();
        assert_eq!(r.w, 10.0);
        assert_eq!(r.h, 10.0);
    }

    #[test]
    fn test_clip_collapse_is_degenerate() {
        // Entirely outside the left bound.
        let r = Rect::new(-100.0, 100.0, 50.0, 40.0).clipped_to_arena();
        assert!(r.is_degenerate());
    }

    #[test]
    fn test_rect_center() {
        let r = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(r.center(), Vec2::new(25.0, 40.0));
    }

    // ---- Time ----

    #[test]
    fn test_sim_time_advance() {
        let mut t = SimTime::default();
        for _ in 0..TICK_RATE {
            t.advance();
        }
        assert_eq!(t.tick, TICK_RATE as u64);
        assert!((t.elapsed_secs - 1.0).abs() < 1e-4);
    }

    // ---- Moves ----

    #[test]
    fn test_default_move_is_ready_and_harmless() {
        let m = Move::default();
        assert!(m.ready_at(0.0), "fresh move must start off cooldown");
        assert_eq!(m.damage, 0.0);
        assert_eq!(m.total_frames(), 0);
    }

    #[test]
    fn test_move_cooldown_gating() {
        let mut m = Move {
            cooldown_secs: 3.0,
            ..Move::default()
        };
        m.last_used_secs = 10.0;
        assert!(!m.ready_at(11.0));
        assert!(m.ready_at(13.0));
    }

    #[test]
    fn test_moveset_slot_indexing_is_consistent() {
        let mut set = Moveset::default();
        for (i, slot) in MoveSlot::ALL.iter().enumerate() {
            set.get_mut(*slot).damage = i as f32;
        }
        for (i, slot) in MoveSlot::ALL.iter().enumerate() {
            assert_eq!(set.get(*slot).damage, i as f32);
        }
    }

    #[test]
    fn test_ultimate_fall_synthesized_moves() {
        let cloud = ultimate_cloud();
        assert_eq!(cloud.kind, MoveKind::Trap);
        assert_eq!(cloud.effect, StatusEffect::Poison);
        assert_eq!(cloud.hitbox.w, ULT_CLOUD_SIZE);
        // Centered on the spawn origin.
        assert_eq!(cloud.hitbox.x, -ULT_CLOUD_SIZE / 2.0);

        let boom = ultimate_explosion();
        assert_eq!(boom.kind, MoveKind::Ultimate);
        assert!(!boom.multi_hit, "landing blast hits once");
        assert_eq!(boom.active, ULT_EXPLOSION_ACTIVE_FRAMES);
    }

    // ---- Enums ----

    #[test]
    fn test_player_tag_opponent() {
        assert_eq!(PlayerTag::P1.opponent(), PlayerTag::P2);
        assert_eq!(PlayerTag::P2.opponent(), PlayerTag::P1);
        assert_eq!(PlayerTag::P1.index(), 0);
        assert_eq!(PlayerTag::P2.index(), 1);
    }

    #[test]
    fn test_meter_award_by_kind() {
        assert!(MoveKind::Melee.awards_meter());
        assert!(MoveKind::Projectile.awards_meter());
        assert!(MoveKind::Grab.awards_meter());
        assert!(!MoveKind::Ultimate.awards_meter());
        assert!(!MoveKind::UltimateFall.awards_meter());
    }

    #[test]
    fn test_special_slots() {
        assert!(MoveSlot::SpecialDown.is_special());
        assert!(MoveSlot::Ultimate.is_special());
        assert!(!MoveSlot::AirSide.is_special());
    }

    // ---- Serde ----

    #[test]
    fn test_input_snapshot_serde_roundtrip() {
        let input = InputSnapshot {
            right: true,
            attack: true,
            ..InputSnapshot::NEUTRAL
        };
        let json = serde_json::to_string(&input).unwrap();
        let back: InputSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(input, back);
    }

    #[test]
    fn test_match_command_serde_tagged() {
        let json = serde_json::to_string(&MatchCommand::Rematch).unwrap();
        assert!(json.contains("Rematch"));
        let back: MatchCommand = serde_json::from_str(&json).unwrap();
        assert_eq!(back, MatchCommand::Rematch);
    }

    #[test]
    fn test_combat_event_serde_roundtrip() {
        let event = CombatEvent::HitConnected {
            victim: PlayerTag::P2,
            x: 425.0,
            y: 495.0,
        };
        let json = serde_json::to_string(&event).unwrap();
        let back: CombatEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, back);
    }
}
