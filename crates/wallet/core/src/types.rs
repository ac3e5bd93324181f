//! Common types for wallet and transaction interactions.

use std::fmt;

use serde::{Deserialize, Serialize};

// ============================================================================
// Identifiers
// ============================================================================

/// Chain identifier in `namespace:reference` form (e.g. `sui:testnet`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChainId(String);

impl ChainId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The namespace part of the identifier (`sui` for `sui:testnet`).
    ///
    /// An identifier without a `:` separator is its own namespace.
    pub fn namespace(&self) -> &str {
        self.0.split(':').next().unwrap_or(&self.0)
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Account address (opaque hex string, wallet-provided).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountAddress(String);

impl AccountAddress {
    pub fn new(address: impl Into<String>) -> Self {
        Self(address.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Accounts
// ============================================================================

/// A wallet account as returned by the connect feature.
///
/// Immutable once obtained from the wallet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletAccount {
    /// Account address
    pub address: AccountAddress,

    /// Chains this account can sign for
    pub chains: Vec<ChainId>,
}

impl WalletAccount {
    pub fn new(address: AccountAddress, chains: Vec<ChainId>) -> Self {
        Self { address, chains }
    }

    /// Whether any of the account's chains belongs to `namespace`.
    pub fn supports_namespace(&self, namespace: &str) -> bool {
        self.chains.iter().any(|c| c.namespace() == namespace)
    }
}

// ============================================================================
// Signing
// ============================================================================

/// Transaction descriptor handed to the wallet's signing feature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignRequest {
    /// JSON-encoded transaction data (chain-specific layout)
    pub transaction_json: String,

    /// Account that must produce the signature
    pub account: AccountAddress,

    /// Chain the transaction targets
    pub chain: ChainId,
}

/// Output of the wallet signing feature: serialized transaction plus
/// signature, both base64-encoded per the wallet-standard convention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedTransaction {
    /// Base64-encoded transaction bytes
    pub tx_bytes: String,

    /// Base64-encoded signature over the transaction bytes
    pub signature: String,
}

// ============================================================================
// Execution
// ============================================================================

/// On-chain execution status as reported by the node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExecutionStatus {
    /// Transaction executed successfully
    Success,

    /// Transaction was included but failed during execution
    Failure { error: String },
}

/// Result of submitting a signed transaction.
///
/// The glue layer does not interpret this beyond success/failure; callers
/// decide what the outcome means for them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionResult {
    /// Transaction digest assigned by the node
    pub digest: String,

    /// Execution status
    pub status: ExecutionStatus,
}

impl ExecutionResult {
    pub fn is_success(&self) -> bool {
        matches!(self.status, ExecutionStatus::Success)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chain_id_namespace_splits_on_colon() {
        assert_eq!(ChainId::new("sui:testnet").namespace(), "sui");
        assert_eq!(ChainId::new("eth:1").namespace(), "eth");
        assert_eq!(ChainId::new("solana").namespace(), "solana");
    }

    #[test]
    fn account_namespace_support() {
        let account = WalletAccount::new(
            AccountAddress::new("0xAA"),
            vec![ChainId::new("sui:testnet"), ChainId::new("sui:mainnet")],
        );
        assert!(account.supports_namespace("sui"));
        assert!(!account.supports_namespace("eth"));
    }
}
