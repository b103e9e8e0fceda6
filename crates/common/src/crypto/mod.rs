//! Keys and addresses for devnet accounts
//!
//! Users on a devnet are backed by Ed25519 keypairs. The account
//!  [`Address`] a faucet funds is derived from the public key, so a
//!  user's identity on chain follows directly from its key.
//!
//! Dev keys are derived deterministically from the chain and user they
//!  belong to (see [`SecretKey::dev`]): rebuilding the same topology
//!  yields the same addresses.

mod address;
mod keys;

pub use address::{Address, AddressError, ADDRESS_SIZE};
pub use keys::{PublicKey, SecretKey, PRIVATE_KEY_SIZE, PUBLIC_KEY_SIZE};
