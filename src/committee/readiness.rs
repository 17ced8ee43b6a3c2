// Readiness - per-validator readiness state and staleness tracking
use crate::committee::CommitteeError;
use crate::types::{
    DurationSecs, OrbsAddress, RegistrationSeq, Timestamp, ValidatorAddress, Weight,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Readiness state of a registered validator.
///
/// Unregistered validators are simply absent from the index. The state
/// always reflects the *latest* notification kind: a ready-to-sync signal
/// from a `ReadyForCommittee` validator downgrades it (stated policy).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReadinessState {
    /// Registered but never signaled readiness. Not eligible for any set.
    Registered,
    /// Willing to join the standby pool.
    ReadyToSync,
    /// Willing and able to join the committee directly.
    ReadyForCommittee,
}

/// Everything the ranking engine knows about one validator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidatorRecord {
    /// Primary identity.
    pub address: ValidatorAddress,

    /// Secondary identity for off-chain coordination.
    pub orbs_address: OrbsAddress,

    /// Effective stake, mirrored from the external ledger.
    pub weight: Weight,

    /// Latest readiness notification kind.
    pub readiness: ReadinessState,

    /// Set only by readiness notifications, never by weight changes.
    pub last_ready_notification: Option<Timestamp>,

    /// Registration order, the deterministic ranking tie-break.
    pub registered_seq: RegistrationSeq,
}

impl ValidatorRecord {
    /// A standby contender is stale once its last readiness notification is
    /// at least `timeout` old. Never having notified counts as stale.
    pub fn is_stale(&self, now: Timestamp, timeout: DurationSecs) -> bool {
        match self.last_ready_notification {
            Some(last) => now.saturating_sub(last) >= timeout,
            None => true,
        }
    }

    /// Eligible to be seated in the committee.
    pub fn committee_eligible(&self) -> bool {
        self.readiness == ReadinessState::ReadyForCommittee
    }

    /// Eligible to contend for a standby slot (committee seating excluded
    /// separately by the ranking pass).
    pub fn standby_eligible(&self) -> bool {
        matches!(
            self.readiness,
            ReadinessState::ReadyToSync | ReadinessState::ReadyForCommittee
        )
    }
}

/// Index of all registered validators.
///
/// Pure bookkeeping: every mutation validates its preconditions before
/// touching state, so a returned error implies no change.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReadinessTracker {
    validators: BTreeMap<ValidatorAddress, ValidatorRecord>,
    next_seq: RegistrationSeq,
}

impl ReadinessTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(
        &mut self,
        address: ValidatorAddress,
        orbs_address: OrbsAddress,
    ) -> Result<(), CommitteeError> {
        if self.validators.contains_key(&address) {
            return Err(CommitteeError::AlreadyRegistered { address });
        }

        let record = ValidatorRecord {
            address,
            orbs_address,
            weight: 0,
            readiness: ReadinessState::Registered,
            last_ready_notification: None,
            registered_seq: self.next_seq,
        };
        self.next_seq += 1;
        self.validators.insert(address, record);
        Ok(())
    }

    pub fn unregister(
        &mut self,
        address: &ValidatorAddress,
    ) -> Result<ValidatorRecord, CommitteeError> {
        self.validators
            .remove(address)
            .ok_or(CommitteeError::NotRegistered { address: *address })
    }

    pub fn notify_ready_to_sync(
        &mut self,
        address: &ValidatorAddress,
        now: Timestamp,
    ) -> Result<(), CommitteeError> {
        let record = self.get_mut(address)?;
        record.readiness = ReadinessState::ReadyToSync;
        record.last_ready_notification = Some(now);
        Ok(())
    }

    pub fn notify_ready_for_committee(
        &mut self,
        address: &ValidatorAddress,
        now: Timestamp,
    ) -> Result<(), CommitteeError> {
        let record = self.get_mut(address)?;
        record.readiness = ReadinessState::ReadyForCommittee;
        record.last_ready_notification = Some(now);
        Ok(())
    }

    /// Mirrors a ledger-side stake change. Must not touch the readiness
    /// notification timestamp.
    pub fn set_weight(
        &mut self,
        address: &ValidatorAddress,
        new_weight: i128,
    ) -> Result<(), CommitteeError> {
        if new_weight < 0 {
            return Err(CommitteeError::NegativeWeight {
                address: *address,
                weight: new_weight,
            });
        }
        let record = self.get_mut(address)?;
        record.weight = new_weight as Weight;
        Ok(())
    }

    pub fn set_orbs_address(
        &mut self,
        address: &ValidatorAddress,
        orbs_address: OrbsAddress,
    ) -> Result<(), CommitteeError> {
        let record = self.get_mut(address)?;
        record.orbs_address = orbs_address;
        Ok(())
    }

    pub fn get(&self, address: &ValidatorAddress) -> Option<&ValidatorRecord> {
        self.validators.get(address)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValidatorRecord> {
        self.validators.values()
    }

    pub fn len(&self) -> usize {
        self.validators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }

    fn get_mut(
        &mut self,
        address: &ValidatorAddress,
    ) -> Result<&mut ValidatorRecord, CommitteeError> {
        self.validators
            .get_mut(address)
            .ok_or(CommitteeError::NotRegistered { address: *address })
    }
}
