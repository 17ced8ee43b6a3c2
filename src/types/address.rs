// Address - validator identities
use serde::{Deserialize, Serialize};
use std::fmt;

/// Primary validator identity (20 bytes, Ethereum-style).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ValidatorAddress([u8; 20]);

impl ValidatorAddress {
    pub fn from_bytes(bytes: [u8; 20]) -> Self {
        ValidatorAddress(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }
}

impl fmt::Display for ValidatorAddress {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "0x{}", hex::encode(&self.0[..8]))
    }
}

impl From<[u8; 20]> for ValidatorAddress {
    fn from(bytes: [u8; 20]) -> Self {
        ValidatorAddress(bytes)
    }
}

/// Secondary identity used for off-chain coordination.
/// May change independently of the primary address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct OrbsAddress([u8; 20]);

impl OrbsAddress {
    pub fn from_bytes(bytes: [u8; 20]) -> Self {
        OrbsAddress(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }
}

impl fmt::Display for OrbsAddress {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "0x{}", hex::encode(&self.0[..8]))
    }
}

impl From<[u8; 20]> for OrbsAddress {
    fn from(bytes: [u8; 20]) -> Self {
        OrbsAddress(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_display() {
        let addr = ValidatorAddress::from_bytes([0xab; 20]);
        assert_eq!(format!("{}", addr), "0xabababababababab");
    }

    #[test]
    fn test_address_ordering_is_bytewise() {
        let a = ValidatorAddress::from_bytes([1; 20]);
        let b = ValidatorAddress::from_bytes([2; 20]);
        assert!(a < b);
    }
}
