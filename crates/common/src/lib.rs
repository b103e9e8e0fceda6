/**
 * Chain parameter sets and chain id derivation.
 */
pub mod chain;
/**
 * Declarative topology configuration,
 *  loaded from TOML.
 */
pub mod config;
/**
 * Account keys and the addresses
 *  derived from them.
 */
pub mod crypto;
/**
 * The faucet contract networks hand out.
 */
pub mod faucet;
/**
 * Resource identifiers and their
 *  deterministic ordering.
 */
pub mod ids;
/**
 * Networks: a chain with its faucet
 *  and registered users.
 */
pub mod network;
/**
 * Append-only concurrent registry
 *  used by every resource that owns
 *  a collection of sub-resources.
 */
pub mod registry;
/**
 * Capability base every resource embeds:
 *  identity, diagnostics and assertions.
 */
pub mod resource;
/**
 * In-memory users, faucets and a harness
 *  that builds a topology from config.
 */
pub mod testkit;
/**
 * The set of networks making up a devnet.
 */
pub mod topology;
/**
 * The user contract networks register.
 */
pub mod user;

pub mod prelude {
    pub use crate::chain::{ChainConfig, ChainConfigError};
    pub use crate::crypto::{Address, PublicKey, SecretKey};
    pub use crate::faucet::{Faucet, FaucetError};
    pub use crate::ids::{sort_ids, ChainId, FaucetId, UserId};
    pub use crate::network::{ChainNetwork, L1Network, L2Network, Network};
    pub use crate::registry::Registry;
    pub use crate::resource::{Common, CommonConfig, InvariantViolation, Require};
    pub use crate::topology::Topology;
    pub use crate::user::User;
}
