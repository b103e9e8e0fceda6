use ed25519_dalek::SigningKey;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use super::address::Address;
use crate::ids::ChainId;

/// Size of Ed25519 private key in bytes
pub const PRIVATE_KEY_SIZE: usize = 32;
/// Size of Ed25519 public key in bytes
pub const PUBLIC_KEY_SIZE: usize = 32;

/// Public half of a devnet account keypair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PublicKey([u8; PUBLIC_KEY_SIZE]);

impl PublicKey {
    pub fn to_bytes(&self) -> [u8; PUBLIC_KEY_SIZE] {
        self.0
    }

    /// The account address controlled by this key
    pub fn address(&self) -> Address {
        Address::from_public_key(self)
    }
}

/// Secret half of a devnet account keypair
///
/// Keys are never random: the same seed always yields the same account,
///  so a topology rebuilt from the same config funds the same addresses.
///
/// ```ignore
/// let alice = SecretKey::dev(ChainId::new(901), "alice");
/// let address = alice.public().address();
/// ```
#[derive(Debug, Clone)]
pub struct SecretKey(SigningKey);

impl SecretKey {
    /// Derive a key from arbitrary seed material
    pub fn from_seed(seed: &[u8]) -> Self {
        let digest = Sha256::digest(seed);
        let mut bytes = [0u8; PRIVATE_KEY_SIZE];
        bytes.copy_from_slice(&digest);
        Self(SigningKey::from_bytes(&bytes))
    }

    /// Deterministic dev key for the account `name` on `chain_id`
    pub fn dev(chain_id: ChainId, name: &str) -> Self {
        Self::from_seed(format!("devstack/{}/{}", chain_id, name).as_bytes())
    }

    pub fn public(&self) -> PublicKey {
        PublicKey(self.0.verifying_key().to_bytes())
    }
}
