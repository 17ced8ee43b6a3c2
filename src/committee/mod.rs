// Committee - deterministic validator set membership
// Principle: ranking is recomputed in full on every change; no partial state

pub mod clock;
pub mod config;
pub mod events;
pub mod ranking;
pub mod readiness;
pub mod service;

pub use clock::{Clock, ManualClock};
pub use config::CommitteeConfig;
pub use events::{CommitteeEvent, MembershipSnapshot, SnapshotEmitter};
pub use ranking::{recompute, RankedSets};
pub use readiness::{ReadinessState, ReadinessTracker, ValidatorRecord};
pub use service::CommitteeService;

use crate::types::ValidatorAddress;

/// Membership engine errors. All caller-visible and non-retryable by the
/// core; an error guarantees that no state was mutated by the call.
#[derive(Debug, thiserror::Error)]
pub enum CommitteeError {
    #[error("validator {address} is not registered")]
    NotRegistered { address: ValidatorAddress },

    #[error("validator {address} is already registered")]
    AlreadyRegistered { address: ValidatorAddress },

    #[error("invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },

    #[error("stake ledger supplied negative weight {weight} for validator {address}")]
    NegativeWeight {
        address: ValidatorAddress,
        weight: i128,
    },
}
