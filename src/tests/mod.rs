// Tests module
// Scenario tests: end-to-end membership flows against the service interface
// Invariant tests: randomized command sequences checked against the ranking guarantees

pub mod invariants;

use crate::committee::{
    CommitteeConfig, CommitteeEvent, CommitteeService, ManualClock, MembershipSnapshot,
};
use crate::types::{OrbsAddress, ValidatorAddress};
use std::sync::Arc;

pub fn addr(b: u8) -> ValidatorAddress {
    ValidatorAddress::from_bytes([b; 20])
}

pub fn orbs(b: u8) -> OrbsAddress {
    OrbsAddress::from_bytes([b; 20])
}

pub fn setup(config: CommitteeConfig) -> (CommitteeService, Arc<ManualClock>) {
    // RUST_LOG=debug surfaces the engine's recompute traces when a test fails
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let clock = Arc::new(ManualClock::new(1_000_000));
    let service = CommitteeService::new(config, clock.clone()).unwrap();
    (service, clock)
}

/// Registers a validator, sets its weight and emits the readiness signal in
/// one go, mirroring the standard join flow.
pub fn join(
    service: &mut CommitteeService,
    b: u8,
    weight: i128,
    ready_for_committee: bool,
) -> Vec<CommitteeEvent> {
    service.register_validator(addr(b), orbs(b)).unwrap();
    service.on_weight_changed(&addr(b), weight).unwrap();
    if ready_for_committee {
        service.notify_ready_for_committee(&addr(b)).unwrap()
    } else {
        service.notify_ready_to_sync(&addr(b)).unwrap()
    }
}

pub fn committee_changed(events: &[CommitteeEvent]) -> Option<&MembershipSnapshot> {
    events.iter().find_map(|e| match e {
        CommitteeEvent::CommitteeChanged(s) => Some(s),
        _ => None,
    })
}

pub fn standbys_changed(events: &[CommitteeEvent]) -> Option<&MembershipSnapshot> {
    events.iter().find_map(|e| match e {
        CommitteeEvent::StandbysChanged(s) => Some(s),
        _ => None,
    })
}
