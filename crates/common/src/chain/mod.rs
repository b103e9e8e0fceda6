//! Chain parameter sets
//!
//! A [`ChainConfig`] describes a chain's identity and its fork schedule.
//!  Networks derive their [`ChainId`](crate::ids::ChainId) from it exactly
//!  once, at construction, so the two can never disagree.

mod config;

pub use config::{ChainConfig, ChainConfigError, Fork};
