use std::fmt::Debug;

use crate::crypto::Address;
use crate::ids::{ChainId, UserId};

/// A participant on a chain
///
/// Networks hold users by reference (`Arc<dyn User>`); a user's
///  lifecycle belongs to whoever created it.
pub trait User: Send + Sync + Debug {
    /// Stable identifier, unique within the user's network
    fn id(&self) -> &UserId;

    /// The chain this user transacts on
    fn chain_id(&self) -> ChainId;

    /// The account address the user controls
    fn address(&self) -> Address;
}
