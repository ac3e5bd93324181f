//! Client builder with dependency injection pattern.

use std::sync::Arc;

use anyhow::{Context, Result};

use client_bridge::{GameBridge, GameRuntime};
use client_session::{CheckoutConfig, DiscoveryConfig, FlowConfig, SessionFlows, SessionStore};
use wallet_core::{Navigator, TransactionExecutor, WalletDirectory};

use crate::Client;

/// Builder for constructing a [`Client`] with proper validation.
///
/// # Design Principles
///
/// - **Required fields**: wallet directory, game runtime, and navigator
/// - **Optional fields**: transaction executor (native UI-only runs work
///   without one; transaction flows then fail explicitly)
/// - **Fail-fast validation**: missing required fields cause build() to fail
/// - **Fluent API**: chainable methods for ergonomic construction
#[derive(Default)]
pub struct ClientBuilder {
    directory: Option<Arc<dyn WalletDirectory>>,
    runtime: Option<Arc<dyn GameRuntime>>,
    navigator: Option<Arc<dyn Navigator>>,
    executor: Option<Arc<dyn TransactionExecutor>>,
    flow_config: Option<FlowConfig>,
    checkout: Option<CheckoutConfig>,
    discovery: Option<DiscoveryConfig>,
}

impl ClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the wallet directory (required).
    pub fn directory(mut self, directory: impl WalletDirectory + 'static) -> Self {
        self.directory = Some(Arc::new(directory));
        self
    }

    /// Set the game runtime the bridge forwards into (required).
    pub fn runtime(mut self, runtime: impl GameRuntime + 'static) -> Self {
        self.runtime = Some(Arc::new(runtime));
        self
    }

    /// Set the navigator used by the checkout flow (required).
    pub fn navigator(mut self, navigator: impl Navigator + 'static) -> Self {
        self.navigator = Some(Arc::new(navigator));
        self
    }

    /// Set the transaction executor (optional).
    ///
    /// Without one, `sign_and_execute` and the checkout flow fail with a
    /// missing-client error.
    pub fn executor(mut self, executor: impl TransactionExecutor + 'static) -> Self {
        self.executor = Some(Arc::new(executor));
        self
    }

    /// Override the chain/gas parameters (default: Sui testnet).
    pub fn flow_config(mut self, config: FlowConfig) -> Self {
        self.flow_config = Some(config);
        self
    }

    /// Override the checkout parameters.
    pub fn checkout(mut self, checkout: CheckoutConfig) -> Self {
        self.checkout = Some(checkout);
        self
    }

    /// Override the wallet discovery parameters.
    pub fn discovery(mut self, discovery: DiscoveryConfig) -> Self {
        self.discovery = Some(discovery);
        self
    }

    /// Build the Client.
    ///
    /// # Errors
    ///
    /// Returns an error if the wallet directory, game runtime, or
    /// navigator is not set.
    pub fn build(self) -> Result<Client> {
        let directory = self
            .directory
            .context("Wallet directory is required. Use .directory() to set it.")?;

        let runtime = self
            .runtime
            .context("Game runtime is required. Use .runtime() to set it.")?;

        let navigator = self
            .navigator
            .context("Navigator is required. Use .navigator() to set it.")?;

        let store = Arc::new(match self.executor {
            Some(executor) => SessionStore::new(executor),
            None => SessionStore::without_executor(),
        });

        let bridge = Arc::new(GameBridge::new(runtime));

        let flows = SessionFlows::new(
            store.clone(),
            bridge.clone(),
            navigator,
            self.flow_config.unwrap_or_default(),
            self.checkout.unwrap_or_default(),
        );

        Ok(Client {
            store,
            flows,
            bridge,
            directory,
            discovery: self.discovery.unwrap_or_default(),
        })
    }
}
