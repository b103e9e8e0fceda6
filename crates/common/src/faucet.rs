use std::fmt::Debug;

use async_trait::async_trait;

use crate::crypto::Address;
use crate::ids::{ChainId, FaucetId};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FaucetError {
    #[error("requested {requested} exceeds the drip limit of {limit}")]
    DripLimit { requested: u64, limit: u64 },
    #[error("faucet reserve of {available} cannot cover {requested}")]
    InsufficientReserve { requested: u64, available: u64 },
    #[error("cannot fund zero amount")]
    ZeroAmount,
}

/// Funds accounts on a single chain
///
/// How funds are actually moved (a contract call, a genesis allocation,
///  an in-memory ledger) is up to the implementation.
#[async_trait]
pub trait Faucet: Send + Sync + Debug {
    fn id(&self) -> &FaucetId;

    /// The chain this faucet pays out on
    fn chain_id(&self) -> ChainId;

    /// Send `amount` to `recipient`
    ///
    /// # Returns
    /// * `Ok(u64)` - the recipient's balance after funding
    /// * `Err(FaucetError)` - the request was refused; nothing was sent
    async fn fund(&self, recipient: &Address, amount: u64) -> Result<u64, FaucetError>;

    /// Total amount this faucet has sent to `account`
    async fn balance(&self, account: &Address) -> Result<u64, FaucetError>;
}
