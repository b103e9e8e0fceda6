use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::crypto::Address;
use crate::faucet::{Faucet, FaucetError};
use crate::ids::{ChainId, FaucetId};

/// In-memory faucet with a finite reserve and a per-request cap
#[derive(Debug)]
pub struct MemoryFaucet {
    id: FaucetId,
    chain_id: ChainId,
    drip: u64,
    state: Mutex<FaucetState>,
}

#[derive(Debug, Default)]
struct FaucetState {
    reserve: u64,
    balances: HashMap<Address, u64>,
}

impl MemoryFaucet {
    /// A faucet for `chain_id` under the conventional id for that chain
    pub fn new(chain_id: ChainId, reserve: u64, drip: u64) -> Self {
        Self::with_id(FaucetId::for_chain(chain_id), chain_id, reserve, drip)
    }

    pub fn with_id(id: FaucetId, chain_id: ChainId, reserve: u64, drip: u64) -> Self {
        Self {
            id,
            chain_id,
            drip,
            state: Mutex::new(FaucetState {
                reserve,
                balances: HashMap::new(),
            }),
        }
    }

    /// Amount still available to pay out
    pub fn reserve(&self) -> u64 {
        self.state.lock().reserve
    }
}

#[async_trait]
impl Faucet for MemoryFaucet {
    fn id(&self) -> &FaucetId {
        &self.id
    }

    fn chain_id(&self) -> ChainId {
        self.chain_id
    }

    async fn fund(&self, recipient: &Address, amount: u64) -> Result<u64, FaucetError> {
        if amount == 0 {
            return Err(FaucetError::ZeroAmount);
        }
        if amount > self.drip {
            return Err(FaucetError::DripLimit {
                requested: amount,
                limit: self.drip,
            });
        }

        let mut state = self.state.lock();
        if amount > state.reserve {
            return Err(FaucetError::InsufficientReserve {
                requested: amount,
                available: state.reserve,
            });
        }
        state.reserve -= amount;
        let balance = state.balances.entry(*recipient).or_default();
        *balance += amount;
        let balance = *balance;
        drop(state);

        tracing::info!(faucet = %self.id, %recipient, amount, "funded account");
        Ok(balance)
    }

    async fn balance(&self, account: &Address) -> Result<u64, FaucetError> {
        Ok(self
            .state
            .lock()
            .balances
            .get(account)
            .copied()
            .unwrap_or_default())
    }
}
