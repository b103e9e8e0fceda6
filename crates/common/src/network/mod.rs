//! Networks: one chain, its faucet and its users
//!
//! - **[`Network`]**: the contract test code depends on
//! - **[`ChainNetwork`]**: the shared implementation every network kind embeds
//! - **[`L1Network`]** / **[`L2Network`]**: concrete kinds; an L2 keeps a
//!   handle on the L1 it settles on
//!
//! Networks are built once per chain while the topology is assembled.
//!  After that, users are registered incrementally from any number of
//!  setup tasks while test code reads network state concurrently.

use std::fmt::Debug;
use std::sync::Arc;

use crate::chain::ChainConfig;
use crate::faucet::Faucet;
use crate::ids::{ChainId, UserId};
use crate::resource::InvariantViolation;
use crate::user::User;

mod chain_network;
mod l1;
mod l2;

pub use chain_network::ChainNetwork;
pub use l1::L1Network;
pub use l2::L2Network;

/// A chain in the topology
///
/// Every network kind embeds a [`ChainNetwork`] and exposes it through
///  [`Network::base`]; the remaining methods delegate to it.
pub trait Network: Send + Sync + Debug {
    /// The embedded chain-level state
    fn base(&self) -> &ChainNetwork;

    fn name(&self) -> &str {
        self.base().common().name()
    }

    fn chain_id(&self) -> ChainId {
        self.base().chain_id()
    }

    fn chain_config(&self) -> &ChainConfig {
        self.base().chain_config()
    }

    /// The faucet attached to this network
    ///
    /// Fails if none was attached: whether a chain has a faucet is known
    ///  from the topology, so asking for a missing one is a setup error.
    fn faucet(&self) -> Result<Arc<dyn Faucet>, InvariantViolation> {
        self.base().faucet()
    }

    /// Look up a registered user; fails if `id` was never added
    fn user(&self, id: &UserId) -> Result<Arc<dyn User>, InvariantViolation> {
        self.base().user(id)
    }

    /// Register `user` under its own id; fails if the id is taken
    fn add_user(&self, user: Arc<dyn User>) -> Result<(), InvariantViolation> {
        self.base().add_user(user)
    }

    /// Ids of every registered user, in deterministic order
    fn users(&self) -> Vec<UserId> {
        self.base().users()
    }
}
