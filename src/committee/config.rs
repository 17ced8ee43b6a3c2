// Config - committee sizing and threshold parameters
use crate::committee::CommitteeError;
use crate::types::{DurationSecs, Weight};
use serde::{Deserialize, Serialize};

/// Governance-controlled parameters of the membership engine.
///
/// All fields are unsigned, so non-negativity is structural; the only
/// cross-field constraint is `min_committee_size <= max_committee_size`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitteeConfig {
    /// Hard cap on committee membership.
    pub max_committee_size: usize,

    /// Hard cap on standby membership.
    pub max_standbys: usize,

    /// Quorum floor: below this size, committee admission ignores the
    /// minimum-stake rule.
    pub min_committee_size: usize,

    /// Minimum weight for normal committee admission.
    pub general_committee_min_stake: Weight,

    /// A standby contender whose last readiness notification is older than
    /// this loses ranking priority to any fresh contender.
    pub ready_to_sync_timeout: DurationSecs,
}

impl CommitteeConfig {
    pub fn new(
        max_committee_size: usize,
        max_standbys: usize,
        min_committee_size: usize,
        general_committee_min_stake: Weight,
        ready_to_sync_timeout: DurationSecs,
    ) -> Result<Self, CommitteeError> {
        let config = Self {
            max_committee_size,
            max_standbys,
            min_committee_size,
            general_committee_min_stake,
            ready_to_sync_timeout,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), CommitteeError> {
        if self.min_committee_size > self.max_committee_size {
            return Err(CommitteeError::InvalidConfiguration {
                reason: format!(
                    "min_committee_size ({}) exceeds max_committee_size ({})",
                    self.min_committee_size, self.max_committee_size
                ),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_config() {
        let config = CommitteeConfig::new(22, 5, 7, 100, 7 * 24 * 3600);
        assert!(config.is_ok());
    }

    #[test]
    fn test_min_exceeding_max_rejected() {
        let result = CommitteeConfig::new(2, 5, 3, 100, 3600);
        assert!(matches!(
            result.unwrap_err(),
            CommitteeError::InvalidConfiguration { .. }
        ));
    }

    #[test]
    fn test_zero_sizes_allowed() {
        let config = CommitteeConfig::new(0, 0, 0, 0, 0);
        assert!(config.is_ok());
    }
}
