//! Error types for session operations.

use std::time::Duration;

use thiserror::Error;

use wallet_core::{ExecutorError, WalletError};

/// Errors that can occur during session operations.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("No wallet available")]
    WalletUnavailable,

    #[error("Wallet {wallet} does not support the {feature} feature")]
    MissingFeature {
        wallet: String,
        feature: &'static str,
    },

    #[error("RPC client is not configured")]
    ClientUnavailable,

    #[error("No connected wallet account")]
    NotConnected,

    #[error("Wallet {wallet} did not register within {waited:?}")]
    DiscoveryTimeout { wallet: String, waited: Duration },

    #[error(transparent)]
    Wallet(#[from] WalletError),

    #[error(transparent)]
    Executor(#[from] ExecutorError),

    #[error("Transaction encoding failed: {0}")]
    Encoding(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SessionError>;
