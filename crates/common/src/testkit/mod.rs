/// In-memory collaborators for topology tests
///
/// The resource model only depends on the [`User`](crate::user::User) and
/// [`Faucet`](crate::faucet::Faucet) contracts. This module provides
/// implementations that need no running chain, plus a harness that
/// assembles a whole topology from a [`TopologyConfig`](crate::config::TopologyConfig).
///
/// # Example
///
/// ```rust,ignore
/// use common::config::TopologyConfig;
/// use common::testkit::TestTopology;
///
/// #[tokio::test]
/// async fn test_users_funded() -> anyhow::Result<()> {
///     let config = TopologyConfig::load("topology.toml")?;
///     let net = TestTopology::from_config(&config).await?;
///
///     // Give every user some funds from their chain's faucet
///     net.fund_all_users(1_000).await?;
///
///     let l2 = net.topology().network(ChainId::new(901))?;
///     let alice = l2.user(&UserId::new("alice"))?;
///     Ok(())
/// }
/// ```
mod faucet;
mod topology;
mod user;

pub use faucet::MemoryFaucet;
pub use topology::TestTopology;
pub use user::DevUser;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Install a compact stderr subscriber for tests
///
/// Honors `RUST_LOG`, defaulting to `info`. Safe to call from every
///  test; only the first call installs anything.
pub fn init_tracing() {
    let env_filter = EnvFilter::builder()
        .with_default_directive(tracing::Level::INFO.into())
        .from_env_lossy();

    let stderr_layer = tracing_subscriber::fmt::layer()
        .compact()
        .with_test_writer()
        .with_filter(env_filter);

    let _ = tracing_subscriber::registry().with(stderr_layer).try_init();
}
