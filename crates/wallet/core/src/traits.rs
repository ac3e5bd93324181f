//! Capability traits for wallet providers, transaction execution, and the
//! host page.
//!
//! Wallet-standard features are modelled as optional trait objects on a
//! provider: a wallet that does not advertise a feature simply returns
//! `None` from the accessor, and callers surface that as an explicit error
//! instead of a silent no-op.

use std::sync::Arc;

use async_trait::async_trait;

use crate::types::{ExecutionResult, SignRequest, SignedTransaction, WalletAccount};

/// Wallet-standard feature identifiers, used in error messages.
pub const FEATURE_CONNECT: &str = "standard:connect";
pub const FEATURE_DISCONNECT: &str = "standard:disconnect";
pub const FEATURE_SIGN_TRANSACTION: &str = "sui:signTransaction";

// ============================================================================
// Error Types
// ============================================================================

/// Failures surfaced by wallet provider capabilities.
#[derive(Debug, thiserror::Error)]
pub enum WalletError {
    #[error("User rejected the request")]
    Rejected,

    #[error("Wallet transport error: {0}")]
    Transport(String),

    #[error("Wallet returned invalid data: {0}")]
    InvalidResponse(String),
}

/// Failures surfaced by transaction executors.
#[derive(Debug, thiserror::Error)]
pub enum ExecutorError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("RPC error {code}: {message}")]
    Rpc { code: i64, message: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

// ============================================================================
// Wallet Capabilities
// ============================================================================

/// Registry of wallet providers visible to the host.
///
/// In a browser deployment this is the wallet-standard `getWallets()`
/// registry; providers may register after the application has started, so
/// callers poll rather than assume the snapshot is final.
pub trait WalletDirectory: Send + Sync {
    /// Snapshot of currently registered providers.
    fn wallets(&self) -> Vec<Arc<dyn WalletProvider>>;
}

/// A wallet provider with optional wallet-standard capabilities.
pub trait WalletProvider: Send + Sync {
    /// Provider display name (e.g. "Sui Wallet").
    fn name(&self) -> &str;

    /// The `standard:connect` feature, if advertised.
    fn connect_feature(&self) -> Option<&dyn ConnectFeature> {
        None
    }

    /// The `standard:disconnect` feature, if advertised.
    fn disconnect_feature(&self) -> Option<&dyn DisconnectFeature> {
        None
    }

    /// The transaction signing feature, if advertised.
    fn signing_feature(&self) -> Option<&dyn SignTransactionFeature> {
        None
    }
}

impl std::fmt::Debug for dyn WalletProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WalletProvider")
            .field("name", &self.name())
            .finish_non_exhaustive()
    }
}

/// `standard:connect`: request account access from the wallet.
#[async_trait]
pub trait ConnectFeature: Send + Sync {
    /// Prompt the wallet for accounts. Returns every account the wallet
    /// exposes, across all chains; callers filter for the chains they
    /// understand.
    async fn connect(&self) -> Result<Vec<WalletAccount>, WalletError>;
}

/// `standard:disconnect`: drop the wallet-side session.
#[async_trait]
pub trait DisconnectFeature: Send + Sync {
    async fn disconnect(&self) -> Result<(), WalletError>;
}

/// Transaction signing: serialize and sign a transaction descriptor.
#[async_trait]
pub trait SignTransactionFeature: Send + Sync {
    /// Produce transaction bytes and a signature for `request`. The wallet
    /// owns serialization; the caller only sees the base64 outputs.
    async fn sign_transaction(
        &self,
        request: SignRequest,
    ) -> Result<SignedTransaction, WalletError>;
}

// ============================================================================
// Execution & Host
// ============================================================================

/// Submits signed transactions to a fullnode for execution.
#[async_trait]
pub trait TransactionExecutor: Send + Sync {
    /// Execute a signed transaction and return the node's verdict
    /// unchanged.
    async fn execute_transaction(
        &self,
        tx_bytes: &str,
        signature: &str,
    ) -> Result<ExecutionResult, ExecutorError>;
}

/// Host page navigation seam.
///
/// In a browser deployment this assigns `window.location`; native runs log
/// or record the target instead.
pub trait Navigator: Send + Sync {
    fn navigate(&self, url: &str);
}
