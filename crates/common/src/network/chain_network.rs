use std::sync::{Arc, OnceLock};

use super::Network;
use crate::chain::{ChainConfig, ChainConfigError};
use crate::faucet::Faucet;
use crate::ids::{sort_ids, ChainId, UserId};
use crate::registry::Registry;
use crate::resource::{Common, CommonConfig, InvariantViolation};
use crate::user::User;

/// Chain-level state shared by every network kind
#[derive(Debug)]
pub struct ChainNetwork {
    common: Common,
    /// derived from `chain_config` at construction, never set on its own
    chain_id: ChainId,
    chain_config: ChainConfig,
    faucet: OnceLock<Arc<dyn Faucet>>,
    users: Registry<UserId, Arc<dyn User>>,
}

impl ChainNetwork {
    /// Build a network for `chain_config`
    ///
    /// # Errors
    /// * `ChainConfigError` - the chain id could not be derived; no
    ///   network is created
    pub fn new(common: CommonConfig, chain_config: ChainConfig) -> Result<Self, ChainConfigError> {
        let chain_id = chain_config.chain_id()?;
        let common = Common::new(common);
        common.span().in_scope(|| {
            tracing::debug!(%chain_id, "network constructed");
        });
        Ok(Self {
            common,
            chain_id,
            chain_config,
            faucet: OnceLock::new(),
            users: Registry::new(),
        })
    }

    pub fn common(&self) -> &Common {
        &self.common
    }

    pub fn chain_id(&self) -> ChainId {
        self.chain_id
    }

    pub fn chain_config(&self) -> &ChainConfig {
        &self.chain_config
    }

    /// Attach the faucet serving this chain
    ///
    /// A network has at most one faucet for its whole lifetime: a second
    ///  attach, concurrent or not, is a violation and leaves the first in
    ///  place.
    pub fn attach_faucet(&self, faucet: Arc<dyn Faucet>) -> Result<(), InvariantViolation> {
        let require = self.common.require();
        let faucet_id = faucet.id().clone();
        require.that(
            faucet.chain_id() == self.chain_id,
            &faucet_id,
            format!(
                "faucet {} serves chain {}, not {}",
                faucet_id,
                faucet.chain_id(),
                self.chain_id
            ),
        )?;
        if self.faucet.set(faucet).is_err() {
            return Err(require.fail(&faucet_id, "faucet must not already be attached"));
        }
        self.common.span().in_scope(|| {
            tracing::debug!(faucet = %faucet_id, "faucet attached");
        });
        Ok(())
    }

    pub fn faucet(&self) -> Result<Arc<dyn Faucet>, InvariantViolation> {
        self.common
            .require()
            .present(self.faucet.get().cloned(), "faucet", "faucet not available")
    }

    pub fn user(&self, id: &UserId) -> Result<Arc<dyn User>, InvariantViolation> {
        self.common
            .require()
            .present(self.users.get(id), id, format!("user {} must exist", id))
    }

    pub fn add_user(&self, user: Arc<dyn User>) -> Result<(), InvariantViolation> {
        let require = self.common.require();
        let id = user.id().clone();
        if user.chain_id() != self.chain_id {
            return Err(require.fail(
                &id,
                format!(
                    "user {} is on chain {}, not {}",
                    id,
                    user.chain_id(),
                    self.chain_id
                ),
            ));
        }
        if !self.users.set_if_missing(id.clone(), user) {
            return Err(require.fail(&id, format!("user {} must not already exist", id)));
        }
        self.common.span().in_scope(|| {
            tracing::debug!(user = %id, "user registered");
        });
        Ok(())
    }

    pub fn users(&self) -> Vec<UserId> {
        sort_ids(self.users.keys())
    }
}

impl Network for ChainNetwork {
    fn base(&self) -> &ChainNetwork {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::{DevUser, MemoryFaucet};
    use crate::ids::FaucetId;

    fn network(chain_id: u64) -> ChainNetwork {
        ChainNetwork::new(
            CommonConfig::new("network", format!("net-{}", chain_id)),
            ChainConfig::new(chain_id),
        )
        .unwrap()
    }

    #[test]
    fn test_chain_id_is_derived() {
        let net = network(901);
        assert_eq!(net.chain_id(), ChainId::new(901));
        assert_eq!(net.chain_config().chain_id().unwrap(), net.chain_id());
    }

    #[test]
    fn test_invalid_config_builds_nothing() {
        let result = ChainNetwork::new(CommonConfig::new("network", "bad"), ChainConfig::new(0));
        assert_eq!(result.unwrap_err(), ChainConfigError::ZeroChainId);
    }

    #[test]
    fn test_faucet_missing() {
        let net = network(901);
        let err = net.faucet().unwrap_err();
        assert_eq!(err.resource, "net-901");
        assert_eq!(err.key, "faucet");
    }

    #[test]
    fn test_faucet_attached_once() {
        let net = network(901);
        let faucet = Arc::new(MemoryFaucet::new(ChainId::new(901), 1_000, 100));
        net.attach_faucet(faucet.clone()).unwrap();
        assert_eq!(net.faucet().unwrap().id(), faucet.id());

        let second = Arc::new(MemoryFaucet::with_id(
            FaucetId::new("other"),
            ChainId::new(901),
            1_000,
            100,
        ));
        let err = net.attach_faucet(second).unwrap_err();
        assert_eq!(err.key, "other");
        // first faucet stays
        assert_eq!(net.faucet().unwrap().id(), faucet.id());
    }

    #[test]
    fn test_faucet_wrong_chain() {
        let net = network(901);
        let faucet = Arc::new(MemoryFaucet::new(ChainId::new(900), 1_000, 100));
        assert!(net.attach_faucet(faucet).is_err());
        assert!(net.faucet().is_err());
    }

    #[test]
    fn test_add_and_get_user() {
        let net = network(901);
        let alice = Arc::new(DevUser::new("alice", ChainId::new(901)));
        net.add_user(alice.clone()).unwrap();

        let found = net.user(&UserId::new("alice")).unwrap();
        assert_eq!(found.address(), alice.address());
        assert_eq!(net.users(), vec![UserId::new("alice")]);
    }

    #[test]
    fn test_duplicate_user() {
        let net = network(901);
        net.add_user(Arc::new(DevUser::new("alice", ChainId::new(901))))
            .unwrap();
        let err = net
            .add_user(Arc::new(DevUser::new("alice", ChainId::new(901))))
            .unwrap_err();
        assert_eq!(err.key, "alice");
        assert!(err.message.contains("must not already exist"));
        assert_eq!(net.users().len(), 1);
    }

    #[test]
    fn test_user_wrong_chain() {
        let net = network(901);
        let err = net
            .add_user(Arc::new(DevUser::new("alice", ChainId::new(902))))
            .unwrap_err();
        assert_eq!(err.key, "alice");
        assert!(net.users().is_empty());
    }

    #[test]
    fn test_missing_user() {
        let net = network(901);
        let err = net.user(&UserId::new("carol")).unwrap_err();
        assert_eq!(err.key, "carol");
        assert_eq!(err.message, "user carol must exist");
    }
}
