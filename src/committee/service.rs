// Service - the mutating external interface of the membership engine
use crate::committee::clock::Clock;
use crate::committee::config::CommitteeConfig;
use crate::committee::events::{CommitteeEvent, MembershipSnapshot, SnapshotEmitter};
use crate::committee::ranking::recompute;
use crate::committee::readiness::{ReadinessTracker, ValidatorRecord};
use crate::committee::CommitteeError;
use crate::types::{OrbsAddress, Timestamp, ValidatorAddress};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// The committee membership engine.
///
/// Every mutating call validates its preconditions, applies the change,
/// recomputes both ranked sets and returns the change events, all before the
/// next call is observed. On error nothing is mutated: the validator index,
/// both sequences and the emitter baselines are exactly as before.
///
/// # Thread Safety
/// This struct is NOT internally thread-safe. Mutating operations are
/// inherently global (any weight change can reorder the entire ranking), so
/// embedders must serialize them through an external primitive, e.g.
/// `Arc<RwLock<CommitteeService>>`. Snapshot accessors return owned copies
/// that are safe to hand across threads between committed calls.
pub struct CommitteeService {
    config: CommitteeConfig,
    tracker: ReadinessTracker,
    emitter: SnapshotEmitter,
    clock: Arc<dyn Clock>,
}

impl CommitteeService {
    pub fn new(config: CommitteeConfig, clock: Arc<dyn Clock>) -> Result<Self, CommitteeError> {
        config.validate()?;
        Ok(Self {
            config,
            tracker: ReadinessTracker::new(),
            emitter: SnapshotEmitter::new(),
            clock,
        })
    }

    /// Creates the validator record. A freshly registered validator carries
    /// zero weight and no readiness, so registration alone never changes
    /// either set.
    pub fn register_validator(
        &mut self,
        address: ValidatorAddress,
        orbs_address: OrbsAddress,
    ) -> Result<Vec<CommitteeEvent>, CommitteeError> {
        let now = self.clock.now();
        self.tracker.register(address, orbs_address)?;
        info!(%address, "validator registered");
        Ok(self.recompute_and_emit(now))
    }

    /// Removes the validator from the index and, via the recompute that
    /// follows, from whichever set it occupied.
    pub fn unregister_validator(
        &mut self,
        address: &ValidatorAddress,
    ) -> Result<Vec<CommitteeEvent>, CommitteeError> {
        let now = self.clock.now();
        self.tracker.unregister(address)?;
        info!(%address, "validator unregistered");
        Ok(self.recompute_and_emit(now))
    }

    pub fn notify_ready_to_sync(
        &mut self,
        address: &ValidatorAddress,
    ) -> Result<Vec<CommitteeEvent>, CommitteeError> {
        let now = self.clock.now();
        self.tracker.notify_ready_to_sync(address, now)?;
        Ok(self.recompute_and_emit(now))
    }

    pub fn notify_ready_for_committee(
        &mut self,
        address: &ValidatorAddress,
    ) -> Result<Vec<CommitteeEvent>, CommitteeError> {
        let now = self.clock.now();
        self.tracker.notify_ready_for_committee(address, now)?;
        Ok(self.recompute_and_emit(now))
    }

    /// Forwarded from the stake ledger on every deposit or withdrawal.
    /// Updates the mirrored weight only; the readiness notification
    /// timestamp is untouched.
    pub fn on_weight_changed(
        &mut self,
        address: &ValidatorAddress,
        new_weight: i128,
    ) -> Result<Vec<CommitteeEvent>, CommitteeError> {
        let now = self.clock.now();
        if new_weight < 0 {
            warn!(%address, new_weight, "stake ledger supplied a negative weight");
        }
        self.tracker.set_weight(address, new_weight)?;
        Ok(self.recompute_and_emit(now))
    }

    /// Secondary-identity change. Membership cannot change, but the
    /// orbs-address element of a snapshot can, which still emits.
    pub fn update_orbs_address(
        &mut self,
        address: &ValidatorAddress,
        orbs_address: OrbsAddress,
    ) -> Result<Vec<CommitteeEvent>, CommitteeError> {
        let now = self.clock.now();
        self.tracker.set_orbs_address(address, orbs_address)?;
        Ok(self.recompute_and_emit(now))
    }

    /// Governance-only. Validates before replacing; a committed change
    /// recomputes immediately under the new thresholds.
    pub fn set_configuration(
        &mut self,
        config: CommitteeConfig,
    ) -> Result<Vec<CommitteeEvent>, CommitteeError> {
        let now = self.clock.now();
        config.validate()?;
        info!(?config, "configuration updated");
        self.config = config;
        Ok(self.recompute_and_emit(now))
    }

    /// Current committee in ranked order.
    pub fn committee(&self) -> MembershipSnapshot {
        self.emitter.committee().clone()
    }

    /// Current standby pool in ranked order.
    pub fn standbys(&self) -> MembershipSnapshot {
        self.emitter.standbys().clone()
    }

    pub fn config(&self) -> &CommitteeConfig {
        &self.config
    }

    pub fn validator(&self, address: &ValidatorAddress) -> Option<&ValidatorRecord> {
        self.tracker.get(address)
    }

    pub fn validator_count(&self) -> usize {
        self.tracker.len()
    }

    /// The single commit point of every mutating call: both sequences and
    /// the emitter baselines are replaced together, from one clock reading.
    fn recompute_and_emit(&mut self, now: Timestamp) -> Vec<CommitteeEvent> {
        let sets = recompute(&self.tracker, &self.config, now);
        debug!(
            committee = sets.committee.len(),
            standbys = sets.standbys.len(),
            "recomputed membership"
        );

        let committee = MembershipSnapshot::resolve(&sets.committee, &self.tracker);
        let standbys = MembershipSnapshot::resolve(&sets.standbys, &self.tracker);
        self.emitter.diff_and_emit(committee, standbys)
    }
}
