//! In-memory wallet, executor, and navigator doubles for testing and dev
//! runs without a browser or network.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;

use crate::traits::{
    ConnectFeature, DisconnectFeature, ExecutorError, Navigator, SignTransactionFeature,
    TransactionExecutor, WalletDirectory, WalletError, WalletProvider,
};
use crate::types::{ExecutionResult, ExecutionStatus, SignRequest, SignedTransaction, WalletAccount};

// ============================================================================
// MockWallet
// ============================================================================

/// Wallet provider double.
///
/// Advertises every feature by default; individual features can be removed
/// to exercise missing-capability paths. Call counts and the last sign
/// request are recorded for assertions.
pub struct MockWallet {
    name: String,
    accounts: Vec<WalletAccount>,
    with_connect: bool,
    with_disconnect: bool,
    with_signing: bool,
    fail_signing: bool,
    connect_calls: AtomicUsize,
    disconnect_calls: AtomicUsize,
    sign_calls: AtomicUsize,
    last_sign_request: Mutex<Option<SignRequest>>,
}

impl MockWallet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            accounts: Vec::new(),
            with_connect: true,
            with_disconnect: true,
            with_signing: true,
            fail_signing: false,
            connect_calls: AtomicUsize::new(0),
            disconnect_calls: AtomicUsize::new(0),
            sign_calls: AtomicUsize::new(0),
            last_sign_request: Mutex::new(None),
        }
    }

    /// Accounts returned by the connect feature.
    pub fn with_accounts(mut self, accounts: Vec<WalletAccount>) -> Self {
        self.accounts = accounts;
        self
    }

    pub fn without_connect(mut self) -> Self {
        self.with_connect = false;
        self
    }

    pub fn without_disconnect(mut self) -> Self {
        self.with_disconnect = false;
        self
    }

    pub fn without_signing(mut self) -> Self {
        self.with_signing = false;
        self
    }

    /// Make the signing feature reject every request.
    pub fn fail_signing(mut self) -> Self {
        self.fail_signing = true;
        self
    }

    pub fn connect_calls(&self) -> usize {
        self.connect_calls.load(Ordering::SeqCst)
    }

    pub fn disconnect_calls(&self) -> usize {
        self.disconnect_calls.load(Ordering::SeqCst)
    }

    pub fn sign_calls(&self) -> usize {
        self.sign_calls.load(Ordering::SeqCst)
    }

    pub fn last_sign_request(&self) -> Option<SignRequest> {
        self.last_sign_request
            .lock()
            .expect("mock wallet lock poisoned")
            .clone()
    }
}

impl WalletProvider for MockWallet {
    fn name(&self) -> &str {
        &self.name
    }

    fn connect_feature(&self) -> Option<&dyn ConnectFeature> {
        self.with_connect.then_some(self as &dyn ConnectFeature)
    }

    fn disconnect_feature(&self) -> Option<&dyn DisconnectFeature> {
        self.with_disconnect
            .then_some(self as &dyn DisconnectFeature)
    }

    fn signing_feature(&self) -> Option<&dyn SignTransactionFeature> {
        self.with_signing
            .then_some(self as &dyn SignTransactionFeature)
    }
}

#[async_trait]
impl ConnectFeature for MockWallet {
    async fn connect(&self) -> Result<Vec<WalletAccount>, WalletError> {
        self.connect_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.accounts.clone())
    }
}

#[async_trait]
impl DisconnectFeature for MockWallet {
    async fn disconnect(&self) -> Result<(), WalletError> {
        self.disconnect_calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[async_trait]
impl SignTransactionFeature for MockWallet {
    async fn sign_transaction(
        &self,
        request: SignRequest,
    ) -> Result<SignedTransaction, WalletError> {
        self.sign_calls.fetch_add(1, Ordering::SeqCst);

        *self
            .last_sign_request
            .lock()
            .expect("mock wallet lock poisoned") = Some(request.clone());

        if self.fail_signing {
            return Err(WalletError::Rejected);
        }

        Ok(SignedTransaction {
            tx_bytes: BASE64.encode(request.transaction_json.as_bytes()),
            signature: BASE64.encode(format!("mock-signature:{}", request.account)),
        })
    }
}

// ============================================================================
// StaticWalletDirectory
// ============================================================================

/// Wallet registry double.
///
/// Starts with a fixed provider set; `register` simulates a provider that
/// injects itself after startup.
#[derive(Default)]
pub struct StaticWalletDirectory {
    wallets: Mutex<Vec<Arc<dyn WalletProvider>>>,
}

impl StaticWalletDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_wallet(wallet: Arc<dyn WalletProvider>) -> Self {
        Self {
            wallets: Mutex::new(vec![wallet]),
        }
    }

    /// Add a provider after construction (late injection).
    pub fn register(&self, wallet: Arc<dyn WalletProvider>) {
        self.wallets
            .lock()
            .expect("wallet directory lock poisoned")
            .push(wallet);
    }
}

impl WalletDirectory for StaticWalletDirectory {
    fn wallets(&self) -> Vec<Arc<dyn WalletProvider>> {
        self.wallets
            .lock()
            .expect("wallet directory lock poisoned")
            .clone()
    }
}

// ============================================================================
// MockExecutor
// ============================================================================

enum ExecutorBehavior {
    Succeed,
    FailOnChain(String),
    Error(String),
}

/// Transaction executor double.
///
/// Records every submission; the outcome is configurable per instance.
pub struct MockExecutor {
    behavior: ExecutorBehavior,
    calls: Mutex<Vec<(String, String)>>,
    counter: AtomicUsize,
}

impl MockExecutor {
    /// Executor whose submissions all succeed.
    pub fn new() -> Self {
        Self::with_behavior(ExecutorBehavior::Succeed)
    }

    /// Executor whose submissions execute on-chain but fail there.
    pub fn failing_on_chain(error: impl Into<String>) -> Self {
        Self::with_behavior(ExecutorBehavior::FailOnChain(error.into()))
    }

    /// Executor whose submissions error at the transport layer.
    pub fn erroring(message: impl Into<String>) -> Self {
        Self::with_behavior(ExecutorBehavior::Error(message.into()))
    }

    fn with_behavior(behavior: ExecutorBehavior) -> Self {
        Self {
            behavior,
            calls: Mutex::new(Vec::new()),
            counter: AtomicUsize::new(0),
        }
    }

    /// Every `(tx_bytes, signature)` pair submitted so far.
    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().expect("mock executor lock poisoned").clone()
    }
}

impl Default for MockExecutor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TransactionExecutor for MockExecutor {
    async fn execute_transaction(
        &self,
        tx_bytes: &str,
        signature: &str,
    ) -> Result<ExecutionResult, ExecutorError> {
        self.calls
            .lock()
            .expect("mock executor lock poisoned")
            .push((tx_bytes.to_string(), signature.to_string()));

        let digest = format!("MockDigest{}", self.counter.fetch_add(1, Ordering::SeqCst));

        match &self.behavior {
            ExecutorBehavior::Succeed => Ok(ExecutionResult {
                digest,
                status: ExecutionStatus::Success,
            }),
            ExecutorBehavior::FailOnChain(error) => Ok(ExecutionResult {
                digest,
                status: ExecutionStatus::Failure {
                    error: error.clone(),
                },
            }),
            ExecutorBehavior::Error(message) => Err(ExecutorError::Network(message.clone())),
        }
    }
}

// ============================================================================
// RecordingNavigator
// ============================================================================

/// Navigator double that records every navigation target.
#[derive(Default)]
pub struct RecordingNavigator {
    visits: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visits(&self) -> Vec<String> {
        self.visits
            .lock()
            .expect("recording navigator lock poisoned")
            .clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, url: &str) {
        self.visits
            .lock()
            .expect("recording navigator lock poisoned")
            .push(url.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AccountAddress, ChainId};

    #[tokio::test]
    async fn mock_wallet_records_sign_requests() {
        let wallet = MockWallet::new("Sui Wallet");

        let request = SignRequest {
            transaction_json: "{\"kind\":\"test\"}".to_string(),
            account: AccountAddress::new("0xAA"),
            chain: ChainId::new("sui:testnet"),
        };

        let signing = wallet.signing_feature().unwrap();
        let signed = signing.sign_transaction(request.clone()).await.unwrap();

        assert_eq!(wallet.sign_calls(), 1);
        assert_eq!(wallet.last_sign_request(), Some(request.clone()));
        assert_eq!(
            BASE64.decode(signed.tx_bytes).unwrap(),
            request.transaction_json.as_bytes()
        );
    }

    #[tokio::test]
    async fn disabled_features_are_absent() {
        let wallet = MockWallet::new("Sui Wallet").without_connect().without_signing();

        assert!(wallet.connect_feature().is_none());
        assert!(wallet.signing_feature().is_none());
        assert!(wallet.disconnect_feature().is_some());
    }

    #[tokio::test]
    async fn directory_sees_late_registrations() {
        let directory = StaticWalletDirectory::new();
        assert!(directory.wallets().is_empty());

        directory.register(Arc::new(MockWallet::new("Sui Wallet")));
        assert_eq!(directory.wallets().len(), 1);
        assert_eq!(directory.wallets()[0].name(), "Sui Wallet");
    }

    #[tokio::test]
    async fn mock_executor_reports_configured_outcome() {
        let executor = MockExecutor::failing_on_chain("InsufficientGas");
        let result = executor.execute_transaction("dHg=", "c2ln").await.unwrap();

        assert!(!result.is_success());
        assert_eq!(executor.calls().len(), 1);
        assert_eq!(executor.calls()[0].0, "dHg=");
    }
}
