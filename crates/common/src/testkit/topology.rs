use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{anyhow, Result};
use tokio::task::JoinSet;

use super::faucet::MemoryFaucet;
use super::user::DevUser;
use crate::config::{FaucetConfig, TopologyConfig};
use crate::faucet::Faucet;
use crate::ids::ChainId;
use crate::network::{L1Network, L2Network, Network};
use crate::topology::Topology;
use crate::user::User;

/// A topology assembled from a [`TopologyConfig`]
///
/// Networks are built in declaration order (every L1 before any L2);
///  users are then registered concurrently, one task per user, the same
///  way independent branches of a real devnet setup race each other.
pub struct TestTopology {
    topology: Arc<Topology>,
    l1s: HashMap<ChainId, Arc<L1Network>>,
    l2s: HashMap<ChainId, Arc<L2Network>>,
    faucets: HashMap<ChainId, Arc<MemoryFaucet>>,
}

impl TestTopology {
    pub async fn from_config(config: &TopologyConfig) -> Result<Self> {
        let topology = Arc::new(Topology::new(config.name.clone()));
        let mut this = Self {
            topology,
            l1s: HashMap::new(),
            l2s: HashMap::new(),
            faucets: HashMap::new(),
        };

        // (network, user names) pairs to register once every chain exists
        let mut pending: Vec<(Arc<dyn Network>, Vec<String>)> = Vec::new();

        for l1_config in &config.l1 {
            let l1 = Arc::new(L1Network::new(l1_config.chain.clone())?);
            this.topology.add_l1_network(l1.clone())?;
            if let Some(faucet) = l1_config.faucet {
                this.attach_faucet(&*l1, faucet)?;
            }
            this.l1s.insert(l1.chain_id(), l1.clone());
            pending.push((l1, l1_config.users.clone()));
        }

        for l2_config in &config.l2 {
            let l1_chain_id = ChainId::new(l2_config.l1_chain_id);
            let l1 = this
                .l1s
                .get(&l1_chain_id)
                .cloned()
                .ok_or_else(|| anyhow!("l1 {} is not part of the topology", l1_chain_id))?;
            let l2 = Arc::new(L2Network::new(l2_config.chain.clone(), l1)?);
            this.topology.add_l2_network(l2.clone())?;
            if let Some(faucet) = l2_config.faucet {
                this.attach_faucet(&*l2, faucet)?;
            }
            this.l2s.insert(l2.chain_id(), l2.clone());
            pending.push((l2, l2_config.users.clone()));
        }

        let mut tasks = JoinSet::new();
        for (network, users) in pending {
            for name in users {
                let network = network.clone();
                tasks.spawn(async move {
                    let user = Arc::new(DevUser::new(name, network.chain_id()));
                    network.add_user(user)
                });
            }
        }
        while let Some(joined) = tasks.join_next().await {
            joined??;
        }

        tracing::info!(
            topology = %config.name,
            networks = this.topology.networks().len(),
            "topology assembled"
        );
        Ok(this)
    }

    pub fn topology(&self) -> &Arc<Topology> {
        &self.topology
    }

    pub fn l1(&self, chain_id: ChainId) -> Option<&Arc<L1Network>> {
        self.l1s.get(&chain_id)
    }

    pub fn l2(&self, chain_id: ChainId) -> Option<&Arc<L2Network>> {
        self.l2s.get(&chain_id)
    }

    /// The in-memory faucet of a chain, if the config gave it one
    pub fn faucet(&self, chain_id: ChainId) -> Option<&Arc<MemoryFaucet>> {
        self.faucets.get(&chain_id)
    }

    /// Fund every registered user on every chain that has a faucet
    pub async fn fund_all_users(&self, amount: u64) -> Result<()> {
        let mut tasks = JoinSet::new();
        for chain_id in self.topology.networks() {
            if !self.faucets.contains_key(&chain_id) {
                continue;
            }
            let network = self.topology.network(chain_id)?;
            let faucet = network.faucet()?;
            for user_id in network.users() {
                let user = network.user(&user_id)?;
                let faucet = faucet.clone();
                tasks.spawn(async move { faucet.fund(&user.address(), amount).await });
            }
        }
        while let Some(joined) = tasks.join_next().await {
            joined??;
        }
        Ok(())
    }

    /// Poll a condition until it succeeds or times out
    ///
    /// This is useful for waiting on setup tasks that are still
    ///  registering resources in the background.
    ///
    /// # Arguments
    /// * `timeout` - Maximum time to wait
    /// * `condition` - Async function that returns Ok(true) when condition is met
    pub async fn eventually<F, Fut>(&self, timeout: Duration, condition: F) -> Result<()>
    where
        F: Fn() -> Fut,
        Fut: std::future::Future<Output = Result<bool>>,
    {
        let start = std::time::Instant::now();
        let poll_interval = Duration::from_millis(10);

        loop {
            match condition().await {
                Ok(true) => {
                    tracing::debug!("Eventual condition met after {:?}", start.elapsed());
                    return Ok(());
                }
                Ok(false) => {}
                Err(e) => {
                    tracing::debug!("Eventual condition check error: {}", e);
                }
            }

            if start.elapsed() > timeout {
                return Err(anyhow!("Condition not met within timeout ({:?})", timeout));
            }

            tokio::time::sleep(poll_interval).await;
        }
    }

    fn attach_faucet(&mut self, network: &dyn Network, config: FaucetConfig) -> Result<()> {
        let chain_id = network.chain_id();
        let faucet = Arc::new(MemoryFaucet::new(chain_id, config.reserve, config.drip));
        network.base().attach_faucet(faucet.clone())?;
        self.faucets.insert(chain_id, faucet);
        Ok(())
    }
}
