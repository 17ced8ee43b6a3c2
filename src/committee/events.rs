// Events - snapshot comparison and change notification
use crate::committee::readiness::ReadinessTracker;
use crate::types::{OrbsAddress, ValidatorAddress, Weight};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Complete membership of one set in ranked order. Events always carry the
/// full snapshot, never a delta; all three sequences are index-aligned.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MembershipSnapshot {
    pub addrs: Vec<ValidatorAddress>,
    pub orbs_addrs: Vec<OrbsAddress>,
    pub weights: Vec<Weight>,
}

impl MembershipSnapshot {
    /// Resolves an address sequence against the validator index. Callers
    /// pass addresses produced by the same recompute pass, so every lookup
    /// hits; an unknown address is skipped rather than panicking.
    pub fn resolve(addrs: &[ValidatorAddress], tracker: &ReadinessTracker) -> Self {
        let mut snapshot = Self::default();
        for addr in addrs {
            if let Some(record) = tracker.get(addr) {
                snapshot.addrs.push(record.address);
                snapshot.orbs_addrs.push(record.orbs_address);
                snapshot.weights.push(record.weight);
            }
        }
        snapshot
    }

    pub fn len(&self) -> usize {
        self.addrs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.addrs.is_empty()
    }
}

/// Change notification for external log/indexing infrastructure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommitteeEvent {
    CommitteeChanged(MembershipSnapshot),
    StandbysChanged(MembershipSnapshot),
}

/// Holds the last emitted snapshot per set and emits an event only when the
/// new triple differs in any element.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SnapshotEmitter {
    committee: MembershipSnapshot,
    standbys: MembershipSnapshot,
}

impl SnapshotEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compares both new snapshots against the stored baselines, replaces
    /// the baselines that changed, and returns the events to publish.
    pub fn diff_and_emit(
        &mut self,
        committee: MembershipSnapshot,
        standbys: MembershipSnapshot,
    ) -> Vec<CommitteeEvent> {
        let mut events = Vec::new();

        if committee != self.committee {
            info!(members = committee.len(), "committee changed");
            self.committee = committee.clone();
            events.push(CommitteeEvent::CommitteeChanged(committee));
        }

        if standbys != self.standbys {
            info!(members = standbys.len(), "standbys changed");
            self.standbys = standbys.clone();
            events.push(CommitteeEvent::StandbysChanged(standbys));
        }

        events
    }

    pub fn committee(&self) -> &MembershipSnapshot {
        &self.committee
    }

    pub fn standbys(&self) -> &MembershipSnapshot {
        &self.standbys
    }
}
