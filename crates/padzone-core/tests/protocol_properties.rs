//! Property-based tests for the allocation invariants.
//!
//! Random send sequences are applied to fresh protocols and the safety
//! properties are checked after every step.

use padzone_core::{Direction, Protocol, Role};
use proptest::prelude::*;

fn role_strategy() -> impl Strategy<Value = Role> {
    prop_oneof![Just(Role::Alice), Just(Role::Bob), Just(Role::Charlie), Just(Role::Dave)]
}

fn sends_strategy() -> impl Strategy<Value = Vec<(Role, u32)>> {
    prop::collection::vec((role_strategy(), 1u32..40), 0..200)
}

/// Distance from `role`'s frontier to its partner's boundary, measured in the
/// direction `role` moves.
fn gap_to_partner(protocol: &Protocol, role: Role) -> i64 {
    let own = protocol.party(role).last_used_index();
    let partner = protocol.partner(role).last_used_index();
    match protocol.party(role).direction() {
        Direction::Forward => partner - own,
        Direction::Backward => own - partner,
    }
}

proptest! {
    #[test]
    fn prop_no_pad_is_claimed_twice(
        n in 1u32..400,
        d in 0u32..20,
        sends in sends_strategy(),
    ) {
        let mut protocol = Protocol::new(n, d).unwrap();

        for (role, length) in sends {
            // A collision would panic inside attempt_send.
            protocol.attempt_send(role, length);

            let claimed: u64 = Role::ALL.iter().map(|r| protocol.party(*r).pads_claimed()).sum();
            prop_assert_eq!(protocol.used_pads(), claimed);
        }
    }

    #[test]
    fn prop_claims_stay_in_zone(
        n in 1u32..400,
        d in 0u32..20,
        sends in sends_strategy(),
    ) {
        let mut protocol = Protocol::new(n, d).unwrap();

        for (role, length) in sends {
            let before = protocol.pad_usage().to_vec();
            if !protocol.attempt_send(role, length) {
                prop_assert_eq!(&before[..], protocol.pad_usage());
                continue;
            }

            let zone = protocol.party(role).zone();
            let fresh: Vec<usize> = protocol
                .pad_usage()
                .iter()
                .zip(&before)
                .enumerate()
                .filter(|(_, (now, was))| **now && !**was)
                .map(|(i, _)| i)
                .collect();

            prop_assert_eq!(fresh.len(), length as usize);
            for index in fresh {
                prop_assert!(zone.contains(index as i64), "pad {} outside {:?}", index, zone);
            }
        }
    }

    #[test]
    fn prop_gap_exceeds_d_after_every_claim(
        n in 1u32..400,
        d in 0u32..20,
        sends in sends_strategy(),
    ) {
        let mut protocol = Protocol::new(n, d).unwrap();

        for (role, length) in sends {
            if protocol.attempt_send(role, length) {
                let gap = gap_to_partner(&protocol, role);
                prop_assert!(gap > i64::from(d), "{} left gap {} with d = {}", role, gap, d);
            }
        }
    }

    #[test]
    fn prop_terminated_iff_no_single_pad_fits(
        n in 1u32..200,
        d in 0u32..10,
        sends in sends_strategy(),
    ) {
        let mut protocol = Protocol::new(n, d).unwrap();

        for (role, length) in sends {
            protocol.attempt_send(role, length);

            let nobody_can_send = Role::ALL.iter().all(|r| !protocol.clone().attempt_send(*r, 1));
            prop_assert_eq!(protocol.is_terminated(), nobody_can_send);
        }
    }

    #[test]
    fn prop_sendability_never_grows(
        n in 1u32..200,
        d in 0u32..10,
        sends in sends_strategy(),
    ) {
        let mut protocol = Protocol::new(n, d).unwrap();
        let probe = |p: &Protocol| -> Vec<bool> {
            Role::ALL
                .iter()
                .flat_map(|r| (1u32..=40).map(move |l| (*r, l)))
                .map(|(r, l)| p.can_send(r, l))
                .collect()
        };

        let mut previous = probe(&protocol);
        for (role, length) in sends {
            protocol.attempt_send(role, length);
            let current = probe(&protocol);

            for (i, (was, now)) in previous.iter().zip(&current).enumerate() {
                prop_assert!(!now || *was, "probe {} became sendable", i);
            }
            previous = current;
        }
    }

    #[test]
    fn prop_replaying_accepted_claims_is_deterministic(
        n in 1u32..400,
        d in 0u32..20,
        sends in sends_strategy(),
    ) {
        let mut original = Protocol::new(n, d).unwrap();
        let accepted: Vec<(Role, u32)> =
            sends.into_iter().filter(|(role, length)| original.attempt_send(*role, *length)).collect();

        let mut replayed = Protocol::new(n, d).unwrap();
        for (role, length) in &accepted {
            prop_assert!(replayed.attempt_send(*role, *length));
        }

        prop_assert_eq!(original.pad_usage(), replayed.pad_usage());
        prop_assert_eq!(original.used_pads(), replayed.used_pads());
        prop_assert_eq!(original.is_terminated(), replayed.is_terminated());
    }
}
