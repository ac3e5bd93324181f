//! Wallet provider discovery.
//!
//! Browser wallet extensions register themselves with the wallet-standard
//! directory at an unpredictable point after script evaluation, so the
//! provider is resolved by polling the directory until it appears instead
//! of waiting a fixed delay. A deadline bounds the wait, and the spawned
//! variant can be aborted.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{Instant, sleep};

use wallet_core::{WalletDirectory, WalletProvider};

use crate::error::{Result, SessionError};
use crate::store::SessionStore;

/// Parameters for wallet discovery.
#[derive(Debug, Clone)]
pub struct DiscoveryConfig {
    /// Provider name to look for
    pub wallet_name: String,

    /// Directory poll interval
    pub poll_interval: Duration,

    /// Total time to wait before giving up
    pub timeout: Duration,
}

impl DiscoveryConfig {
    pub const DEFAULT_WALLET_NAME: &str = "Sui Wallet";

    pub fn new(wallet_name: impl Into<String>) -> Self {
        Self {
            wallet_name: wallet_name.into(),
            poll_interval: Duration::from_millis(200),
            timeout: Duration::from_secs(10),
        }
    }

    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_WALLET_NAME)
    }
}

/// Poll `directory` until a provider named `config.wallet_name` appears.
///
/// # Errors
///
/// Returns [`SessionError::DiscoveryTimeout`] if the provider has not
/// registered within `config.timeout`.
pub async fn discover_wallet(
    directory: &dyn WalletDirectory,
    config: &DiscoveryConfig,
) -> Result<Arc<dyn WalletProvider>> {
    let deadline = Instant::now() + config.timeout;

    loop {
        if let Some(wallet) = directory
            .wallets()
            .into_iter()
            .find(|w| w.name() == config.wallet_name)
        {
            return Ok(wallet);
        }

        if Instant::now() >= deadline {
            return Err(SessionError::DiscoveryTimeout {
                wallet: config.wallet_name.clone(),
                waited: config.timeout,
            });
        }

        sleep(config.poll_interval).await;
    }
}

/// Run discovery on a background task and assign the provider to `store`
/// once found.
///
/// Dropping or aborting the returned handle cancels the wait; the store is
/// then never touched.
pub fn spawn_discovery(
    store: Arc<SessionStore>,
    directory: Arc<dyn WalletDirectory>,
    config: DiscoveryConfig,
) -> JoinHandle<Result<()>> {
    tokio::spawn(async move {
        let wallet = discover_wallet(directory.as_ref(), &config).await?;
        tracing::info!(wallet = wallet.name(), "Wallet provider resolved");
        store.set_wallet(wallet);
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use wallet_core::mock::{MockWallet, StaticWalletDirectory};

    use super::*;

    fn config() -> DiscoveryConfig {
        DiscoveryConfig::default()
            .with_poll_interval(Duration::from_millis(50))
            .with_timeout(Duration::from_secs(2))
    }

    #[tokio::test(start_paused = true)]
    async fn finds_an_already_registered_wallet() {
        let directory = StaticWalletDirectory::with_wallet(Arc::new(MockWallet::new("Sui Wallet")));

        let wallet = discover_wallet(&directory, &config()).await.unwrap();
        assert_eq!(wallet.name(), "Sui Wallet");
    }

    #[tokio::test(start_paused = true)]
    async fn ignores_other_providers() {
        let directory = StaticWalletDirectory::with_wallet(Arc::new(MockWallet::new("Other")));

        let err = discover_wallet(&directory, &config()).await.unwrap_err();
        assert!(matches!(err, SessionError::DiscoveryTimeout { .. }));
    }

    #[tokio::test(start_paused = true)]
    async fn resolves_a_late_registration_into_the_store() {
        let store = Arc::new(SessionStore::without_executor());
        let directory = Arc::new(StaticWalletDirectory::new());

        let handle = spawn_discovery(store.clone(), directory.clone(), config());

        // Let a few polls elapse before the extension "injects" itself
        sleep(Duration::from_millis(120)).await;
        assert!(store.wallet().is_none());
        directory.register(Arc::new(MockWallet::new("Sui Wallet")));

        handle.await.unwrap().unwrap();
        assert_eq!(store.wallet().unwrap().name(), "Sui Wallet");
    }

    #[tokio::test(start_paused = true)]
    async fn times_out_when_no_wallet_registers() {
        let store = Arc::new(SessionStore::without_executor());
        let directory = Arc::new(StaticWalletDirectory::new());

        let handle = spawn_discovery(store.clone(), directory, config());

        let err = handle.await.unwrap().unwrap_err();
        assert!(matches!(
            err,
            SessionError::DiscoveryTimeout { waited, .. } if waited == Duration::from_secs(2)
        ));
        assert!(store.wallet().is_none());
    }
}
