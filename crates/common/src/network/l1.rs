use super::{ChainNetwork, Network};
use crate::chain::{ChainConfig, ChainConfigError};
use crate::resource::CommonConfig;

/// A settlement-layer chain
#[derive(Debug)]
pub struct L1Network {
    base: ChainNetwork,
}

impl L1Network {
    pub fn new(chain_config: ChainConfig) -> Result<Self, ChainConfigError> {
        let chain_id = chain_config.chain_id()?;
        let common = CommonConfig::new("l1-network", format!("l1-{}", chain_id));
        Ok(Self {
            base: ChainNetwork::new(common, chain_config)?,
        })
    }
}

impl Network for L1Network {
    fn base(&self) -> &ChainNetwork {
        &self.base
    }
}
