//! Resource identifiers
//!
//! Every resource in a topology is named by an identifier that is unique
//!  within the collection that owns it. Identifiers are cheap to clone,
//!  comparable, and render to a human-readable form that is also used
//!  to order them.

use std::fmt::{self, Debug, Display};
use std::hash::Hash;

use serde::{Deserialize, Serialize};

/// Bounds shared by every resource identifier
pub trait ResourceId: Clone + Eq + Ord + Hash + Display + Debug + Send + Sync + 'static {}

impl<T> ResourceId for T where T: Clone + Eq + Ord + Hash + Display + Debug + Send + Sync + 'static {}

/// Identifier of a chain, derived from its parameter set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChainId(u64);

impl ChainId {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    pub const fn as_u64(&self) -> u64 {
        self.0
    }
}

impl From<u64> for ChainId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a user within a network
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for UserId {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of a faucet
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FaucetId(String);

impl FaucetId {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// The conventional id of the faucet serving a chain
    pub fn for_chain(chain_id: ChainId) -> Self {
        Self(format!("faucet-{}", chain_id))
    }
}

impl Display for FaucetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Order a set of identifiers deterministically
///
/// Identifiers are ordered lexicographically by their display form, so
///  the result only depends on the set of ids passed in, never on the
///  order they were registered in. Distinct ids that render the same
///  fall back to their own `Ord`.
pub fn sort_ids<I: ResourceId>(ids: impl IntoIterator<Item = I>) -> Vec<I> {
    let mut ids: Vec<(String, I)> = ids.into_iter().map(|id| (id.to_string(), id)).collect();
    ids.sort();
    ids.into_iter().map(|(_, id)| id).collect()
}
