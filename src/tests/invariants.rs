// Invariant tests - randomized command sequences against the ranking guarantees
use super::{addr, orbs, setup};
use crate::committee::{Clock, CommitteeConfig, CommitteeService, ReadinessState};
use crate::types::Timestamp;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Command {
    Register(u8),
    Unregister(u8),
    ReadyToSync(u8),
    ReadyForCommittee(u8),
    SetWeight(u8, i128),
    Advance(u64),
}

fn command_strategy() -> impl Strategy<Value = Command> {
    prop_oneof![
        (0u8..6).prop_map(Command::Register),
        (0u8..6).prop_map(Command::Unregister),
        (0u8..6).prop_map(Command::ReadyToSync),
        (0u8..6).prop_map(Command::ReadyForCommittee),
        ((0u8..6), (-10i128..300)).prop_map(|(b, w)| Command::SetWeight(b, w)),
        (0u64..150).prop_map(Command::Advance),
    ]
}

fn config_strategy() -> impl Strategy<Value = CommitteeConfig> {
    ((0usize..4), (0usize..4), (0usize..4), (0u128..200)).prop_map(
        |(max_committee, max_standbys, min_committee, min_stake)| CommitteeConfig {
            max_committee_size: max_committee,
            max_standbys,
            min_committee_size: min_committee.min(max_committee),
            general_committee_min_stake: min_stake,
            ready_to_sync_timeout: 100,
        },
    )
}

fn check_invariants(service: &CommitteeService, now: Timestamp) {
    let config = service.config();
    let committee = service.committee();
    let standbys = service.standbys();

    assert!(committee.len() <= config.max_committee_size);
    assert!(standbys.len() <= config.max_standbys);

    for a in &committee.addrs {
        assert!(!standbys.addrs.contains(a), "committee and standbys overlap");
        let record = service.validator(a).unwrap();
        assert_eq!(record.readiness, ReadinessState::ReadyForCommittee);
    }

    // Under-stake members are seated only by the quorum-floor backfill,
    // which stops at min_committee_size; any larger committee is fully
    // stake-qualified
    let has_under_stake = committee
        .weights
        .iter()
        .any(|w| *w < config.general_committee_min_stake);
    if has_under_stake {
        assert!(
            committee.len() <= config.min_committee_size,
            "under-stake member outside the quorum-floor backfill"
        );
    }

    // Committee weight-sorted descending
    for pair in committee.weights.windows(2) {
        assert!(pair[0] >= pair[1], "committee not weight-sorted");
    }

    // Standbys: eligible readiness, fresh strictly before stale, each
    // partition weight-sorted descending
    let mut in_stale_partition = false;
    let mut prev_weight: Option<u128> = None;
    for (a, w) in standbys.addrs.iter().zip(&standbys.weights) {
        let record = service.validator(a).unwrap();
        assert!(matches!(
            record.readiness,
            ReadinessState::ReadyToSync | ReadinessState::ReadyForCommittee
        ));

        let stale = record.is_stale(now, config.ready_to_sync_timeout);
        if stale && !in_stale_partition {
            // Partition boundary: weight ordering restarts
            in_stale_partition = true;
            prev_weight = None;
        }
        assert!(
            stale || !in_stale_partition,
            "fresh standby ranked after a stale one"
        );
        if let Some(prev) = prev_weight {
            assert!(prev >= *w, "standby partition not weight-sorted");
        }
        prev_weight = Some(*w);
    }
}

proptest! {
    #[test]
    fn ranking_invariants_hold_under_arbitrary_commands(
        config in config_strategy(),
        commands in proptest::collection::vec(command_strategy(), 1..80),
    ) {
        let (mut service, clock) = setup(config);

        for command in commands {
            // Precondition failures are expected (unknown address, double
            // registration, negative weight) and leave no trace. The
            // invariants are guaranteed after every recompute, i.e. after
            // each successful mutating call; staleness shifts silently as
            // time passes, so the check runs only at those points, where
            // the snapshot and the clock agree.
            let result = match command {
                Command::Register(b) => service.register_validator(addr(b), orbs(b)),
                Command::Unregister(b) => service.unregister_validator(&addr(b)),
                Command::ReadyToSync(b) => service.notify_ready_to_sync(&addr(b)),
                Command::ReadyForCommittee(b) => service.notify_ready_for_committee(&addr(b)),
                Command::SetWeight(b, w) => service.on_weight_changed(&addr(b), w),
                Command::Advance(secs) => {
                    clock.advance(secs);
                    continue;
                }
            };

            if result.is_ok() {
                check_invariants(&service, clock.now());
            }
        }
    }

    #[test]
    fn snapshots_match_events_and_are_idempotent(
        config in config_strategy(),
        commands in proptest::collection::vec(command_strategy(), 1..40),
    ) {
        let (mut service, clock) = setup(config.clone());

        for command in commands {
            let events = match command {
                Command::Register(b) => service.register_validator(addr(b), orbs(b)),
                Command::Unregister(b) => service.unregister_validator(&addr(b)),
                Command::ReadyToSync(b) => service.notify_ready_to_sync(&addr(b)),
                Command::ReadyForCommittee(b) => service.notify_ready_for_committee(&addr(b)),
                Command::SetWeight(b, w) => service.on_weight_changed(&addr(b), w),
                Command::Advance(secs) => {
                    clock.advance(secs);
                    continue;
                }
            };

            if let Ok(events) = events {
                // Every emitted snapshot is the full current membership
                for event in events {
                    match event {
                        crate::committee::CommitteeEvent::CommitteeChanged(s) => {
                            prop_assert_eq!(&s, &service.committee());
                        }
                        crate::committee::CommitteeEvent::StandbysChanged(s) => {
                            prop_assert_eq!(&s, &service.standbys());
                        }
                    }
                }

                // The command just recomputed at the current clock reading,
                // so replaying the same configuration is a no-op. After a
                // failed command (or once time moves) the stored snapshot
                // may lag behind `now` and a replay can legitimately emit.
                let current = service.config().clone();
                let replay = service.set_configuration(current).unwrap();
                prop_assert!(replay.is_empty());
            }
        }
    }
}
