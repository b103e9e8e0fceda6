use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::chain::ChainConfig;

/// Declarative description of a topology
///
/// ```toml
/// [[l1]]
/// users = ["deployer"]
/// [l1.chain]
/// chain_id = 900
///
/// [[l2]]
/// l1_chain_id = 900
/// users = ["alice", "bob"]
/// faucet = { reserve = 1000000, drip = 1000 }
/// [l2.chain]
/// chain_id = 901
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopologyConfig {
    /// name the topology is reported under
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default)]
    pub l1: Vec<L1Config>,
    #[serde(default)]
    pub l2: Vec<L2Config>,
}

fn default_name() -> String {
    "devnet".to_string()
}

impl Default for TopologyConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            l1: Vec::new(),
            l2: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct L1Config {
    #[serde(default)]
    pub users: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub faucet: Option<FaucetConfig>,
    pub chain: ChainConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct L2Config {
    /// chain id of the L1 this chain settles on
    pub l1_chain_id: u64,
    #[serde(default)]
    pub users: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub faucet: Option<FaucetConfig>,
    pub chain: ChainConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaucetConfig {
    /// total amount the faucet can pay out
    pub reserve: u64,
    /// largest single payout
    #[serde(default = "default_drip")]
    pub drip: u64,
}

fn default_drip() -> u64 {
    1_000_000
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

impl TopologyConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}
