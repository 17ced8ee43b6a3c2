// Ranking - the committee/standby recompute pass
//
// recompute() is a pure function of the validator index, the configuration
// and the current time. It cannot fail and is never partially applied: the
// caller swaps in the returned pair wholesale.
use crate::committee::config::CommitteeConfig;
use crate::committee::readiness::{ReadinessTracker, ValidatorRecord};
use crate::types::{Timestamp, ValidatorAddress};
use std::cmp::Ordering;
use std::collections::BTreeSet;

/// Result of one recompute pass: the two disjoint ranked membership
/// sequences, best-ranked first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedSets {
    pub committee: Vec<ValidatorAddress>,
    pub standbys: Vec<ValidatorAddress>,
}

/// Descending weight, ties broken by earliest registration.
fn rank_order(a: &ValidatorRecord, b: &ValidatorRecord) -> Ordering {
    b.weight
        .cmp(&a.weight)
        .then(a.registered_seq.cmp(&b.registered_seq))
}

pub fn recompute(
    tracker: &ReadinessTracker,
    config: &CommitteeConfig,
    now: Timestamp,
) -> RankedSets {
    // Committee selection: qualified candidates first, then a backfill from
    // the under-stake candidates if the quorum floor is not met.
    let mut qualified: Vec<&ValidatorRecord> = Vec::new();
    let mut under_stake: Vec<&ValidatorRecord> = Vec::new();
    for record in tracker.iter().filter(|r| r.committee_eligible()) {
        if record.weight >= config.general_committee_min_stake {
            qualified.push(record);
        } else {
            under_stake.push(record);
        }
    }
    qualified.sort_by(|a, b| rank_order(a, b));
    under_stake.sort_by(|a, b| rank_order(a, b));

    qualified.truncate(config.max_committee_size);
    let mut committee = qualified;

    let mut backfill = under_stake.into_iter();
    while committee.len() < config.min_committee_size {
        match backfill.next() {
            Some(record) => committee.push(record),
            None => break,
        }
    }

    let seated: BTreeSet<ValidatorAddress> = committee.iter().map(|r| r.address).collect();

    // Standby contention: fresh contenders strictly outrank stale ones,
    // regardless of weight.
    let mut fresh: Vec<&ValidatorRecord> = Vec::new();
    let mut stale: Vec<&ValidatorRecord> = Vec::new();
    for record in tracker
        .iter()
        .filter(|r| r.standby_eligible() && !seated.contains(&r.address))
    {
        if record.is_stale(now, config.ready_to_sync_timeout) {
            stale.push(record);
        } else {
            fresh.push(record);
        }
    }
    fresh.sort_by(|a, b| rank_order(a, b));
    stale.sort_by(|a, b| rank_order(a, b));

    let mut standbys = fresh;
    standbys.extend(stale);
    standbys.truncate(config.max_standbys);

    RankedSets {
        committee: committee.into_iter().map(|r| r.address).collect(),
        standbys: standbys.into_iter().map(|r| r.address).collect(),
    }
}
