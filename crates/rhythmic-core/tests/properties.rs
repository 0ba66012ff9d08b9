//! Algebraic properties of the pattern transforms.

use proptest::prelude::*;
use rhythmic_core::{Pattern, Pulse};

fn any_pattern() -> impl Strategy<Value = Pattern> {
    proptest::collection::vec(prop_oneof![Just(Pulse::Rest), Just(Pulse::Beat)], 0..32)
        .prop_map(Pattern::from)
}

proptest! {
    #[test]
    fn rotate_round_trips(p in any_pattern(), k in -64i64..64) {
        let mut q = p.clone();
        q.rotate(k);
        q.rotate(-k);
        prop_assert_eq!(q, p);
    }

    #[test]
    fn rotation_found_for_any_rotated_copy(p in any_pattern(), k in -16i64..16) {
        let mut q = p.clone();
        q.rotate(k);
        prop_assert!(p.equivalent(&q));
        let rot = p.rotation(&q).unwrap();
        let mut back = p.clone();
        back.rotate(rot);
        prop_assert_eq!(back, q);
    }

    #[test]
    fn durations_round_trip(d in proptest::collection::vec(1usize..9, 1..8)) {
        prop_assert_eq!(Pattern::from_durations(&d).durations(), d);
    }

    #[test]
    fn duration_string_round_trips(p in any_pattern()) {
        let encoded = p.to_duration_string("+");
        if p.is_silent() {
            prop_assert_eq!(encoded, "");
        } else {
            prop_assert_eq!(Pattern::from_duration_str(&encoded).unwrap(), p);
        }
    }

    #[test]
    fn inflate_reverses_deflate(p in any_pattern(), n in 2usize..5) {
        if p.divisor().is_some_and(|d| d > 1 && d % n == 0) {
            let mut q = p.clone();
            q.deflate(n);
            q.inflate(n);
            prop_assert_eq!(q, p);
        }
    }

    #[test]
    fn normalize_is_idempotent(p in any_pattern()) {
        let mut once = p.clone();
        once.normalize();
        let mut twice = once.clone();
        twice.normalize();
        prop_assert_eq!(twice, once);
    }

    #[test]
    fn rotations_normalize_to_the_same_core(p in any_pattern(), k in -16i64..16) {
        let mut a = p.clone();
        let mut b = p.clone();
        b.rotate(k);
        a.normalize();
        b.normalize();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn complement_is_involutive(p in any_pattern()) {
        let mut q = p.clone();
        q.complement();
        q.complement();
        prop_assert_eq!(q, p);
    }

    #[test]
    fn shuffle_round_trips_on_even_lengths(p in any_pattern()) {
        if p.len() % 2 == 0 && !p.is_empty() {
            let mut q = p.clone();
            q.shuffle();
            prop_assert_eq!(q.len(), p.len() / 2 * 3);
            q.unshuffle();
            prop_assert_eq!(q, p);
        }
    }
}
