use std::sync::Arc;

use crate::ids::{sort_ids, ChainId};
use crate::network::{L1Network, L2Network, Network};
use crate::registry::Registry;
use crate::resource::{Common, CommonConfig, InvariantViolation};

/// Every network assembled for a test run, keyed by chain id
///
/// Chain ids are unique across the whole topology, regardless of
///  network kind.
#[derive(Debug)]
pub struct Topology {
    common: Common,
    networks: Registry<ChainId, Arc<dyn Network>>,
}

impl Topology {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            common: Common::new(CommonConfig::new("topology", name)),
            networks: Registry::new(),
        }
    }

    pub fn common(&self) -> &Common {
        &self.common
    }

    pub fn add_l1_network(&self, network: Arc<L1Network>) -> Result<(), InvariantViolation> {
        self.insert(network)
    }

    /// Register an L2; the very L1 it settles on must already be part of
    ///  the topology, not merely another network with the same chain id
    pub fn add_l2_network(&self, network: Arc<L2Network>) -> Result<(), InvariantViolation> {
        let l1 = network.l1();
        let l1_chain_id = l1.chain_id();
        let registered = self
            .networks
            .get(&l1_chain_id)
            .is_some_and(|registered| std::ptr::eq(registered.base(), l1.base()));
        self.common.require().that(
            registered,
            network.chain_id(),
            format!(
                "l1 {} of l2 {} must be registered first",
                l1_chain_id,
                network.chain_id()
            ),
        )?;
        self.insert(network)
    }

    /// Look up a network by chain id; fails if it was never added
    pub fn network(&self, chain_id: ChainId) -> Result<Arc<dyn Network>, InvariantViolation> {
        self.common.require().present(
            self.networks.get(&chain_id),
            chain_id,
            format!("network {} must exist", chain_id),
        )
    }

    /// Chain ids of every registered network, in deterministic order
    pub fn networks(&self) -> Vec<ChainId> {
        sort_ids(self.networks.keys())
    }

    fn insert(&self, network: Arc<dyn Network>) -> Result<(), InvariantViolation> {
        let chain_id = network.chain_id();
        self.common.require().that(
            self.networks.set_if_missing(chain_id, network),
            chain_id,
            format!("network {} must not already exist", chain_id),
        )?;
        self.common.span().in_scope(|| {
            tracing::debug!(%chain_id, "network registered");
        });
        Ok(())
    }
}
