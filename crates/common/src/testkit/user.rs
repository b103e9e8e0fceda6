use crate::crypto::{Address, PublicKey, SecretKey};
use crate::ids::{ChainId, UserId};
use crate::user::User;

/// A user backed by a dev keypair
#[derive(Debug, Clone)]
pub struct DevUser {
    id: UserId,
    chain_id: ChainId,
    secret: SecretKey,
}

impl DevUser {
    /// A user whose key is derived from its name and chain
    pub fn new(name: impl Into<String>, chain_id: ChainId) -> Self {
        let id = UserId::new(name);
        let secret = SecretKey::dev(chain_id, id.as_str());
        Self::with_key(id, chain_id, secret)
    }

    pub fn with_key(id: UserId, chain_id: ChainId, secret: SecretKey) -> Self {
        Self {
            id,
            chain_id,
            secret,
        }
    }

    pub fn secret(&self) -> &SecretKey {
        &self.secret
    }

    pub fn public(&self) -> PublicKey {
        self.secret.public()
    }
}

impl User for DevUser {
    fn id(&self) -> &UserId {
        &self.id
    }

    fn chain_id(&self) -> ChainId {
        self.chain_id
    }

    fn address(&self) -> Address {
        self.secret.public().address()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dev_user_address_is_stable() {
        let a = DevUser::new("alice", ChainId::new(901));
        let b = DevUser::new("alice", ChainId::new(901));
        assert_eq!(a.address(), b.address());
        assert_eq!(a.id(), &UserId::new("alice"));
    }

    #[test]
    fn test_with_key() {
        let secret = SecretKey::from_seed(b"ops-key");
        let user = DevUser::with_key(UserId::new("ops"), ChainId::new(900), secret.clone());
        assert_eq!(user.public(), secret.public());
        assert_eq!(user.address(), secret.public().address());
    }
}
