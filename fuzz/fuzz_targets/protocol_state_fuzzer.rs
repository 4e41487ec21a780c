//! Fuzz target for the [`Protocol`] allocation state machine
//!
//! Prevent key reuse via any sequence of sends
//!
//! # Strategy
//!
//! - Operation sequences: Arbitrary sends from any role with lengths up to 255
//! - Small pad spaces: Zones of a few pads so edges are hit constantly
//! - Gap sweep: Gaps from 0 up past the zone size
//!
//! # Invariants
//!
//! - No pad is ever claimed twice (a collision panics inside `attempt_send`)
//! - Oracle holds after every operation
//! - Rejected sends change nothing but the attempt counter
//! - Once terminated, every length-1 send is rejected
//! - `used + wasted == n`

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use padzone_core::{Protocol, Role};
use padzone_harness::{check_invariants, Operation, OperationResult};

#[derive(Debug, Arbitrary)]
struct Input {
    n: u16,
    d: u8,
    ops: Vec<Operation>,
}

fuzz_target!(|input: Input| {
    let n = u32::from(input.n % 512) + 1;
    let mut protocol = match Protocol::new(n, u32::from(input.d)) {
        Ok(protocol) => protocol,
        Err(_) => return,
    };

    for op in &input.ops {
        let usage_before = protocol.pad_usage().to_vec();
        let sent_before = protocol.messages_sent();

        let result = op.apply(&mut protocol);

        if result == OperationResult::Rejected {
            assert_eq!(usage_before.as_slice(), protocol.pad_usage());
            assert_eq!(sent_before, protocol.messages_sent());
        }

        if let Err(e) = check_invariants(&protocol) {
            panic!("invariant violated after {op:?}: {e}");
        }

        let stats = protocol.statistics();
        assert_eq!(stats.used_pads + stats.wasted_pads, u64::from(n));

        if stats.terminated {
            for role in Role::ALL {
                assert!(!protocol.clone().attempt_send(role, 1), "{role} sent after termination");
            }
        }
    }
});
