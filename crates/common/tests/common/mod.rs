//! Shared test utilities for network integration tests
#![allow(dead_code)]

use std::sync::Arc;

use ::common::chain::ChainConfig;
use ::common::ids::ChainId;
use ::common::network::{L1Network, L2Network};
use ::common::testkit::{init_tracing, DevUser};

/// Set up an L1 (900) and an L2 (901) settling on it
pub fn setup_l1_l2() -> (Arc<L1Network>, Arc<L2Network>) {
    init_tracing();
    let l1 = Arc::new(L1Network::new(ChainConfig::new(900)).unwrap());
    let l2 = Arc::new(L2Network::new(ChainConfig::new(901), l1.clone()).unwrap());
    (l1, l2)
}

/// A dev user on chain 901
pub fn l2_user(name: &str) -> Arc<DevUser> {
    Arc::new(DevUser::new(name, ChainId::new(901)))
}
