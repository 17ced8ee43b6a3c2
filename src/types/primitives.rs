// Primitives - fundamental scalar types of the membership engine

/// Effective stake of a validator, the primary ranking key.
/// u128 mirrors any realistic on-chain token balance.
pub type Weight = u128;

/// Unix timestamp in seconds, sourced from the external network clock.
pub type Timestamp = u64;

/// Duration in seconds (e.g. the ready-to-sync staleness timeout).
pub type DurationSecs = u64;

/// Monotonically increasing registration sequence number.
/// Earliest registration wins all ranking ties.
pub type RegistrationSeq = u64;
