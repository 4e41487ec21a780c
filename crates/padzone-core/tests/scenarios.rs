//! Fixed allocation scenarios.
//!
//! Each scenario drives a fresh protocol with a hand-written send sequence and
//! checks the exact outcome.

use padzone_core::{Protocol, Role};

#[test]
fn opposite_zones_do_not_interfere() {
    let mut protocol = Protocol::new(100, 5).unwrap();

    for _ in 0..10 {
        assert!(protocol.attempt_send(Role::Alice, 1));
        assert!(protocol.attempt_send(Role::Charlie, 1));
    }

    assert_eq!(protocol.used_pads(), 20);
    assert_eq!(protocol.messages_sent(), 20);
    assert_eq!(protocol.messages_attempted(), 20);
}

#[test]
fn single_sender_stops_short_of_untouched_partner() {
    let mut protocol = Protocol::new(1000, 10).unwrap();
    assert_eq!(protocol.partner(Role::Alice).last_used_index(), 499);

    let mut accepted = 0;
    while protocol.attempt_send(Role::Alice, 5) {
        accepted += 1;
    }

    assert_eq!(accepted, 97);
    assert_eq!(protocol.used_pads(), 485);
    assert!(protocol.pad_usage()[..485].iter().all(|used| *used));
    assert!(protocol.pad_usage()[485..].iter().all(|used| !*used));

    // Candidate end 489 is not strictly below 499 - 10.
    assert_eq!(protocol.party(Role::Alice).next_pad_index(), 485);
    assert!(!protocol.party(Role::Bob).has_sent());

    insta::assert_debug_snapshot!(protocol.statistics(), @r"
    Statistics {
        total_pads: 1000,
        used_pads: 485,
        wasted_pads: 515,
        waste_percentage: 51.5,
        messages_sent: 97,
        messages_attempted: 98,
        terminated: false,
    }
    ");
}

#[test]
fn single_pad_sender_then_partner_reach_termination() {
    let mut protocol = Protocol::new(1000, 10).unwrap();

    while protocol.attempt_send(Role::Alice, 1) {}
    // Alice stops at 488: 489 is not below 499 - 10.
    assert_eq!(protocol.party(Role::Alice).last_used_index(), 488);

    // Bob's own start pad still clears 488 + 10.
    assert!(protocol.attempt_send(Role::Bob, 1));
    assert!(!protocol.attempt_send(Role::Bob, 1));

    while protocol.attempt_send(Role::Charlie, 1) {}
    while protocol.attempt_send(Role::Dave, 1) {}

    assert!(protocol.is_terminated());
    let stats = protocol.statistics();
    assert!(stats.terminated);
    assert_eq!(stats.used_pads + stats.wasted_pads, 1000);
    assert_eq!(stats.wasted_pads, 20);
}

#[test]
fn own_claim_only_shrinks_own_options() {
    let mut protocol = Protocol::new(200, 4).unwrap();
    let lengths: Vec<u32> = (1..=100).collect();

    for _ in 0..10 {
        let before: Vec<bool> = lengths.iter().map(|l| protocol.can_send(Role::Dave, *l)).collect();
        if !protocol.attempt_send(Role::Dave, 7) {
            break;
        }
        let after: Vec<bool> = lengths.iter().map(|l| protocol.can_send(Role::Dave, *l)).collect();

        for ((length, was), now) in lengths.iter().zip(&before).zip(&after) {
            assert!(!now || *was, "length {length} became sendable after Dave's own claim");
        }
    }
}

#[test]
fn zero_length_send_is_rejected_without_marking_sender() {
    let mut protocol = Protocol::new(100, 0).unwrap();

    assert!(!protocol.attempt_send(Role::Bob, 0));
    assert!(!protocol.party(Role::Bob).has_sent());
    assert_eq!(protocol.messages_attempted(), 1);
}

#[test]
fn gap_of_zero_lets_partners_meet() {
    let mut protocol = Protocol::new(20, 0).unwrap();

    // First zone is [0, 10). Alice takes 0..=4, Bob takes 9..=6 and then 5.
    assert!(protocol.attempt_send(Role::Alice, 5));
    assert!(protocol.attempt_send(Role::Bob, 4));
    assert!(protocol.attempt_send(Role::Bob, 1));

    assert!(!protocol.attempt_send(Role::Bob, 1));
    assert!(!protocol.attempt_send(Role::Alice, 1));
    assert!(protocol.pad_usage()[..10].iter().all(|used| *used));
}
