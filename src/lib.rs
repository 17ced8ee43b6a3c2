// Quorum - deterministic validator committee membership engine
// Decides, on every stake or readiness change, which validators sit in the
// committee and which in the standby pool, and emits full-snapshot change
// notifications for whichever set changed.

pub mod committee;
pub mod types;

#[cfg(test)]
mod tests;

pub use committee::{
    Clock, CommitteeConfig, CommitteeError, CommitteeEvent, CommitteeService, ManualClock,
    MembershipSnapshot, ReadinessState,
};
pub use types::{OrbsAddress, ValidatorAddress, Weight};
