//! Autonomous-game wallet client.
//!
//! # Architecture
//!
//! ```text
//! Client (Top-level container)
//!   ├─→ SessionStore + SessionFlows (wallet session and transactions)
//!   ├─→ GameBridge (host <-> game-runtime messages)
//!   └─→ WalletDirectory (provider discovery)
//! ```
//!
//! # Design Principles
//!
//! - **Dependency Injection**: all layers injected into Client via builder
//! - **Trait-based Abstraction**: wallet, executor, runtime, and navigator
//!   are traits, so browser-backed and in-memory implementations compose
//!   the same way
//! - **Testability**: mock implementations can be injected for testing

pub mod builder;
pub mod logging;
pub mod navigator;
pub mod panel;

use std::sync::Arc;

use tokio::task::JoinHandle;

use client_bridge::GameBridge;
use client_session::{DiscoveryConfig, SessionFlows, SessionStore, spawn_discovery};
use wallet_core::WalletDirectory;

pub use builder::ClientBuilder;
pub use navigator::LoggingNavigator;
pub use panel::ControlPanel;

/// Assembled wallet client.
pub struct Client {
    store: Arc<SessionStore>,
    flows: SessionFlows,
    bridge: Arc<GameBridge>,
    directory: Arc<dyn WalletDirectory>,
    discovery: DiscoveryConfig,
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client").finish_non_exhaustive()
    }
}

impl Client {
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    pub fn store(&self) -> &Arc<SessionStore> {
        &self.store
    }

    pub fn flows(&self) -> &SessionFlows {
        &self.flows
    }

    pub fn bridge(&self) -> &Arc<GameBridge> {
        &self.bridge
    }

    /// Start resolving the wallet provider in the background.
    ///
    /// The store is updated once the provider registers; abort the handle
    /// to cancel the wait.
    pub fn start_discovery(&self) -> JoinHandle<client_session::Result<()>> {
        spawn_discovery(
            self.store.clone(),
            self.directory.clone(),
            self.discovery.clone(),
        )
    }
}
