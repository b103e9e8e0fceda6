use std::sync::Arc;

use super::{ChainNetwork, L1Network, Network};
use crate::chain::{ChainConfig, ChainConfigError};
use crate::resource::CommonConfig;

/// A rollup chain settling on an [`L1Network`]
#[derive(Debug)]
pub struct L2Network {
    base: ChainNetwork,
    l1: Arc<L1Network>,
}

impl L2Network {
    /// Build an L2 on top of `l1`
    ///
    /// # Errors
    /// * `ChainConfigError::SameAsL1` - the L2 would reuse its L1's chain id
    /// * any other `ChainConfigError` from deriving the chain id
    pub fn new(chain_config: ChainConfig, l1: Arc<L1Network>) -> Result<Self, ChainConfigError> {
        let chain_id = chain_config.chain_id()?;
        if chain_id == l1.chain_id() {
            return Err(ChainConfigError::SameAsL1(chain_id));
        }
        let common = CommonConfig::new("l2-network", format!("l2-{}", chain_id));
        Ok(Self {
            base: ChainNetwork::new(common, chain_config)?,
            l1,
        })
    }

    /// The L1 this chain settles on
    pub fn l1(&self) -> &Arc<L1Network> {
        &self.l1
    }
}

impl Network for L2Network {
    fn base(&self) -> &ChainNetwork {
        &self.base
    }
}
