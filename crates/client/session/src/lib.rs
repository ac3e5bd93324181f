//! Wallet session layer for the autonomous-game client.
//!
//! This crate owns the one piece of the glue surface with a real contract:
//! the session store and the flows that mutate it.
//!
//! # Architecture
//!
//! ```text
//! SessionFlows ── connect/disconnect ──> SessionStore ──> subscribers
//!              ── sign_and_execute ────> TransactionExecutor
//!              ── request_paid_checkout > Navigator
//!              ── identity/paid updates > GameBridge
//!
//! discovery ── poll WalletDirectory ───> SessionStore::set_wallet
//! ```
//!
//! The store is an explicitly constructed object shared via `Arc`; build
//! it once at the composition root and inject it everywhere it is needed.
//! There is no module-level global.
//!
//! All store mutations notify subscribers synchronously, in registration
//! order, with an immutable state snapshot. Async operations (connect,
//! signing, execution, discovery) never run while the store lock is held.

pub mod discovery;
pub mod error;
pub mod flows;
pub mod store;

pub use discovery::{DiscoveryConfig, discover_wallet, spawn_discovery};
pub use error::{Result, SessionError};
pub use flows::{CheckoutConfig, FlowConfig, SessionFlows};
pub use store::{SessionSnapshot, SessionStore, SubscriberId};
