use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ids::ChainId;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChainConfigError {
    #[error("chain id must be non-zero")]
    ZeroChainId,
    /// A fork is scheduled while the fork it depends on is not
    #[error("fork {fork} is scheduled but {requires} is not")]
    MissingFork { fork: Fork, requires: Fork },
    /// A fork activates before the fork it depends on
    #[error("fork {fork} activates at {at}, before {requires} at {requires_at}")]
    ForkOrder {
        fork: Fork,
        at: u64,
        requires: Fork,
        requires_at: u64,
    },
    #[error("l2 chain id {0} must differ from its l1 chain id")]
    SameAsL1(ChainId),
}

/// Named protocol upgrades, in activation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Fork {
    Homestead,
    Berlin,
    London,
    Shanghai,
    Cancun,
    Prague,
}

impl fmt::Display for Fork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Fork::Homestead => "homestead",
            Fork::Berlin => "berlin",
            Fork::London => "london",
            Fork::Shanghai => "shanghai",
            Fork::Cancun => "cancun",
            Fork::Prague => "prague",
        };
        f.write_str(name)
    }
}

/// Identity and fork schedule of a chain
///
/// Block-activated forks are keyed by block number, time-activated forks
///  by unix timestamp. An unset fork is never active.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainConfig {
    pub chain_id: u64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub homestead_block: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub berlin_block: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub london_block: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shanghai_time: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cancun_time: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prague_time: Option<u64>,
}

impl ChainConfig {
    /// A config with every known fork active from genesis
    pub fn new(chain_id: u64) -> Self {
        Self {
            chain_id,
            homestead_block: Some(0),
            berlin_block: Some(0),
            london_block: Some(0),
            shanghai_time: Some(0),
            cancun_time: Some(0),
            prague_time: Some(0),
        }
    }

    /// Derive the chain id from this parameter set
    ///
    /// Fails if the id is zero or the fork schedule is inconsistent.
    pub fn chain_id(&self) -> Result<ChainId, ChainConfigError> {
        if self.chain_id == 0 {
            return Err(ChainConfigError::ZeroChainId);
        }
        self.check_fork_order()?;
        Ok(ChainId::new(self.chain_id))
    }

    /// Activation point of `fork`, if it is scheduled
    pub fn activation(&self, fork: Fork) -> Option<u64> {
        match fork {
            Fork::Homestead => self.homestead_block,
            Fork::Berlin => self.berlin_block,
            Fork::London => self.london_block,
            Fork::Shanghai => self.shanghai_time,
            Fork::Cancun => self.cancun_time,
            Fork::Prague => self.prague_time,
        }
    }

    /// Forks active at the given block number and timestamp
    pub fn active_forks_at(&self, block: u64, time: u64) -> Vec<Fork> {
        let by_block = [Fork::Homestead, Fork::Berlin, Fork::London]
            .into_iter()
            .filter(|fork| matches!(self.activation(*fork), Some(at) if at <= block));
        let by_time = [Fork::Shanghai, Fork::Cancun, Fork::Prague]
            .into_iter()
            .filter(|fork| matches!(self.activation(*fork), Some(at) if at <= time));
        by_block.chain(by_time).collect()
    }

    // Block forks and time forks are ordered among themselves; the two
    //  schedules use different units so they are checked separately.
    fn check_fork_order(&self) -> Result<(), ChainConfigError> {
        let schedules: [&[Fork]; 2] = [
            &[Fork::Homestead, Fork::Berlin, Fork::London],
            &[Fork::Shanghai, Fork::Cancun, Fork::Prague],
        ];
        for schedule in schedules {
            for pair in schedule.windows(2) {
                let (requires, fork) = (pair[0], pair[1]);
                match (self.activation(requires), self.activation(fork)) {
                    (None, Some(_)) => {
                        return Err(ChainConfigError::MissingFork { fork, requires })
                    }
                    (Some(requires_at), Some(at)) if at < requires_at => {
                        return Err(ChainConfigError::ForkOrder {
                            fork,
                            at,
                            requires,
                            requires_at,
                        })
                    }
                    _ => {}
                }
            }
        }
        // time forks only make sense once london is live
        if let (None, Some(_)) = (self.london_block, self.shanghai_time) {
            return Err(ChainConfigError::MissingFork {
                fork: Fork::Shanghai,
                requires: Fork::London,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_chain_id() {
        let config = ChainConfig::new(901);
        assert_eq!(config.chain_id().unwrap(), ChainId::new(901));
    }

    #[test]
    fn test_zero_chain_id() {
        let config = ChainConfig::new(0);
        assert_eq!(config.chain_id(), Err(ChainConfigError::ZeroChainId));
    }

    #[test]
    fn test_missing_fork() {
        let mut config = ChainConfig::new(900);
        config.berlin_block = None;
        assert_eq!(
            config.chain_id(),
            Err(ChainConfigError::MissingFork {
                fork: Fork::London,
                requires: Fork::Berlin,
            })
        );
    }

    #[test]
    fn test_fork_order() {
        let mut config = ChainConfig::new(900);
        config.shanghai_time = Some(100);
        config.cancun_time = Some(50);
        assert!(matches!(
            config.chain_id(),
            Err(ChainConfigError::ForkOrder {
                fork: Fork::Cancun,
                ..
            })
        ));
    }

    #[test]
    fn test_shanghai_requires_london() {
        let config = ChainConfig {
            chain_id: 900,
            homestead_block: None,
            berlin_block: None,
            london_block: None,
            shanghai_time: Some(0),
            cancun_time: None,
            prague_time: None,
        };
        assert_eq!(
            config.chain_id(),
            Err(ChainConfigError::MissingFork {
                fork: Fork::Shanghai,
                requires: Fork::London,
            })
        );
    }

    #[test]
    fn test_active_forks_at() {
        let mut config = ChainConfig::new(900);
        config.london_block = Some(10);
        config.shanghai_time = Some(1_000);
        config.cancun_time = Some(2_000);
        config.prague_time = None;

        assert_eq!(
            config.active_forks_at(5, 0),
            vec![Fork::Homestead, Fork::Berlin]
        );
        assert_eq!(
            config.active_forks_at(10, 1_500),
            vec![Fork::Homestead, Fork::Berlin, Fork::London, Fork::Shanghai]
        );
    }

    #[test]
    fn test_deserialize_sparse_config() {
        let config: ChainConfig = toml::from_str(
            r#"
            chain_id = 901
            homestead_block = 0
            berlin_block = 0
            london_block = 0
            "#,
        )
        .unwrap();
        assert_eq!(config.chain_id().unwrap(), ChainId::new(901));
        assert_eq!(config.shanghai_time, None);
    }
}
