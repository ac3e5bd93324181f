//! Wallet abstraction layer for the autonomous-game client.
//!
//! This crate defines the seams between the game client and the systems it
//! glues together but does not own:
//!
//! ```text
//! WalletDirectory ──> WalletProvider ──> ConnectFeature
//!                                        DisconnectFeature
//!                                        SignTransactionFeature
//!
//! TransactionExecutor  (fullnode submission)
//! Navigator            (host page redirect)
//! ```
//!
//! # Design Philosophy
//!
//! - **Capability-based wallets**: a provider exposes wallet-standard
//!   features as optional trait objects; callers must check for a feature
//!   before using it and fail loudly when it is absent.
//! - **No retry, no interpretation**: execution results are returned to the
//!   caller exactly as the node reported them.
//!
//! # Usage
//!
//! ```ignore
//! use wallet_core::{WalletDirectory, FEATURE_CONNECT};
//!
//! let wallet = directory
//!     .wallets()
//!     .into_iter()
//!     .find(|w| w.name() == "Sui Wallet");
//! ```

pub mod traits;
pub mod types;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

// Re-export all traits
pub use traits::{
    ConnectFeature, DisconnectFeature, ExecutorError, FEATURE_CONNECT, FEATURE_DISCONNECT,
    FEATURE_SIGN_TRANSACTION, Navigator, SignTransactionFeature, TransactionExecutor,
    WalletDirectory, WalletError, WalletProvider,
};

// Re-export all types
pub use types::{
    AccountAddress, ChainId, ExecutionResult, ExecutionStatus, SignRequest, SignedTransaction,
    WalletAccount,
};

#[cfg(any(test, feature = "mock"))]
pub use mock::{MockExecutor, MockWallet, RecordingNavigator, StaticWalletDirectory};
