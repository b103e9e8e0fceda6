use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use super::keys::PublicKey;

/// Failure to parse an [`Address`] from its hex form
#[derive(Debug, thiserror::Error)]
#[error("invalid address: {0}")]
pub struct AddressError(#[from] hex::FromHexError);

/// Size of an account address in bytes
pub const ADDRESS_SIZE: usize = 20;

/// Account address, the last 20 bytes of the SHA-256 of a public key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Address([u8; ADDRESS_SIZE]);

impl Address {
    pub fn from_public_key(key: &PublicKey) -> Self {
        let digest = Sha256::digest(key.to_bytes());
        let mut bytes = [0u8; ADDRESS_SIZE];
        bytes.copy_from_slice(&digest[digest.len() - ADDRESS_SIZE..]);
        Self(bytes)
    }

    pub fn to_bytes(&self) -> [u8; ADDRESS_SIZE] {
        self.0
    }
}

impl From<[u8; ADDRESS_SIZE]> for Address {
    fn from(bytes: [u8; ADDRESS_SIZE]) -> Self {
        Self(bytes)
    }
}

impl FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.strip_prefix("0x").unwrap_or(s);
        let mut buff = [0u8; ADDRESS_SIZE];
        hex::decode_to_slice(hex, &mut buff)?;
        Ok(Self(buff))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::SecretKey;
    use crate::ids::ChainId;

    #[test]
    fn test_address_display_parse() {
        let address = SecretKey::dev(ChainId::new(901), "alice").public().address();
        let rendered = address.to_string();
        assert!(rendered.starts_with("0x"));
        assert_eq!(rendered.len(), 2 + ADDRESS_SIZE * 2);
        assert_eq!(rendered.parse::<Address>().unwrap(), address);
    }

    #[test]
    fn test_address_rejects_bad_hex() {
        assert!("0x1234".parse::<Address>().is_err());
        assert!("not an address".parse::<Address>().is_err());
    }
}
