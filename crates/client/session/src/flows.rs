//! Connection, transaction, and checkout flows.

use std::env;
use std::sync::Arc;

use client_bridge::{BridgeMessage, GameBridge};
use wallet_core::{
    AccountAddress, ChainId, ExecutionResult, FEATURE_CONNECT, FEATURE_DISCONNECT,
    FEATURE_SIGN_TRANSACTION, Navigator, SignRequest, WalletAccount,
};
use wallet_sui::{SuiConfig, TransactionData};

use crate::error::{Result, SessionError};
use crate::store::SessionStore;

/// Chain and gas parameters applied by the flows.
#[derive(Debug, Clone)]
pub struct FlowConfig {
    /// Chain transactions are signed for; its namespace is also the
    /// account filter applied on connect
    pub chain: ChainId,

    /// Gas budget set on every transaction before signing (in MIST)
    pub gas_budget: u64,
}

impl FlowConfig {
    pub fn from_sui(config: &SuiConfig) -> Self {
        Self {
            chain: config.network.chain_id(),
            gas_budget: config.gas_budget,
        }
    }
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self::from_sui(&SuiConfig::default())
    }
}

/// Parameters of the paid-checkout flow.
#[derive(Debug, Clone)]
pub struct CheckoutConfig {
    /// Transfer amount in MIST
    pub amount_mist: u64,

    /// Fixed checkout recipient
    pub recipient: AccountAddress,

    /// Page the checkout always navigates to afterwards
    pub redirect_url: String,
}

impl CheckoutConfig {
    pub const DEFAULT_AMOUNT_MIST: u64 = 1_000_000;
    pub const DEFAULT_RECIPIENT: &str =
        "0x8f3a1c9e5b27d4061fa2ce84d90b7135e6ad02c8b94f7d5a6e3810bc4f29d7e6";
    pub const DEFAULT_REDIRECT_URL: &str = "https://autonomousgame.io/play";

    /// Load checkout parameters from environment variables.
    ///
    /// Environment variables:
    /// - `CHECKOUT_AMOUNT_MIST` - Transfer amount in MIST (default: 1000000)
    /// - `CHECKOUT_RECIPIENT` - Recipient address
    /// - `CHECKOUT_REDIRECT_URL` - Post-checkout page
    pub fn from_env() -> Self {
        let amount_mist = env::var("CHECKOUT_AMOUNT_MIST")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(Self::DEFAULT_AMOUNT_MIST);

        let recipient = env::var("CHECKOUT_RECIPIENT")
            .map(AccountAddress::new)
            .unwrap_or_else(|_| AccountAddress::new(Self::DEFAULT_RECIPIENT));

        let redirect_url = env::var("CHECKOUT_REDIRECT_URL")
            .unwrap_or_else(|_| Self::DEFAULT_REDIRECT_URL.to_string());

        Self {
            amount_mist,
            recipient,
            redirect_url,
        }
    }
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            amount_mist: Self::DEFAULT_AMOUNT_MIST,
            recipient: AccountAddress::new(Self::DEFAULT_RECIPIENT),
            redirect_url: Self::DEFAULT_REDIRECT_URL.to_string(),
        }
    }
}

/// Session flows over a shared [`SessionStore`].
///
/// Library-level flows (`connect`, `disconnect`, `sign_and_execute`)
/// return errors to the caller and never swallow them; the top-level
/// checkout flow catches, logs, and always navigates onward.
pub struct SessionFlows {
    store: Arc<SessionStore>,
    bridge: Arc<GameBridge>,
    navigator: Arc<dyn Navigator>,
    config: FlowConfig,
    checkout: CheckoutConfig,
}

impl SessionFlows {
    pub fn new(
        store: Arc<SessionStore>,
        bridge: Arc<GameBridge>,
        navigator: Arc<dyn Navigator>,
        config: FlowConfig,
        checkout: CheckoutConfig,
    ) -> Self {
        Self {
            store,
            bridge,
            navigator,
            config,
            checkout,
        }
    }

    pub fn store(&self) -> &Arc<SessionStore> {
        &self.store
    }

    /// Connect to the resolved wallet.
    ///
    /// Accounts not supporting the configured chain namespace are dropped.
    /// The filtered list is stored, the primary address is forwarded to
    /// the game runtime, and the list is returned.
    ///
    /// # Errors
    ///
    /// Fails before any wallet call if no provider has been resolved or if
    /// the provider lacks `standard:connect`.
    pub async fn connect(&self) -> Result<Vec<WalletAccount>> {
        let wallet = self.store.wallet().ok_or(SessionError::WalletUnavailable)?;
        let connect = wallet
            .connect_feature()
            .ok_or_else(|| SessionError::MissingFeature {
                wallet: wallet.name().to_string(),
                feature: FEATURE_CONNECT,
            })?;

        let accounts = connect.connect().await?;

        let namespace = self.config.chain.namespace();
        let connected: Vec<WalletAccount> = accounts
            .into_iter()
            .filter(|account| account.supports_namespace(namespace))
            .collect();

        tracing::info!(
            wallet = wallet.name(),
            accounts = connected.len(),
            "Wallet connected"
        );

        self.store.set_accounts(Some(connected.clone()));
        self.bridge.dispatch(BridgeMessage::AddressChanged(
            connected.first().map(|account| account.address.clone()),
        ));

        Ok(connected)
    }

    /// Disconnect from the resolved wallet and clear the session.
    ///
    /// # Errors
    ///
    /// Fails if no provider has been resolved or if the provider lacks
    /// `standard:disconnect`.
    pub async fn disconnect(&self) -> Result<()> {
        let wallet = self.store.wallet().ok_or(SessionError::WalletUnavailable)?;
        let disconnect = wallet
            .disconnect_feature()
            .ok_or_else(|| SessionError::MissingFeature {
                wallet: wallet.name().to_string(),
                feature: FEATURE_DISCONNECT,
            })?;

        disconnect.disconnect().await?;

        tracing::info!(wallet = wallet.name(), "Wallet disconnected");

        self.store.set_accounts(None);
        self.bridge.dispatch(BridgeMessage::AddressChanged(None));

        Ok(())
    }

    /// Sign `tx` with the primary connected account and submit it.
    ///
    /// The configured gas budget is applied before signing. The node's
    /// verdict is returned uninterpreted.
    ///
    /// # Errors
    ///
    /// Fails before the signing feature is invoked if the RPC client is
    /// missing, no wallet is resolved, or no account is connected.
    pub async fn sign_and_execute(&self, mut tx: TransactionData) -> Result<ExecutionResult> {
        let executor = self.store.executor()?;

        let snapshot = self.store.snapshot();
        let wallet = snapshot
            .wallet
            .clone()
            .ok_or(SessionError::WalletUnavailable)?;
        let account = snapshot
            .primary_account()
            .ok_or(SessionError::NotConnected)?;

        let signing = wallet
            .signing_feature()
            .ok_or_else(|| SessionError::MissingFeature {
                wallet: wallet.name().to_string(),
                feature: FEATURE_SIGN_TRANSACTION,
            })?;

        tx.set_gas_budget(self.config.gas_budget);

        let signed = signing
            .sign_transaction(SignRequest {
                transaction_json: tx.to_json()?,
                account: account.address.clone(),
                chain: self.config.chain.clone(),
            })
            .await?;

        let result = executor
            .execute_transaction(&signed.tx_bytes, &signed.signature)
            .await?;

        tracing::debug!(digest = %result.digest, success = result.is_success(), "Transaction submitted");

        Ok(result)
    }

    /// Run the paid-checkout flow: transfer the configured amount to the
    /// configured recipient, then navigate to the follow-up page.
    ///
    /// Navigation happens exactly once regardless of outcome; failures are
    /// logged and never propagated. On confirmed execution the runtime's
    /// paid flag is raised.
    pub async fn request_paid_checkout(&self) {
        let tx = TransactionData::pay_sui(self.checkout.recipient.clone(), self.checkout.amount_mist);

        match self.sign_and_execute(tx).await {
            Ok(result) if result.is_success() => {
                tracing::info!(digest = %result.digest, "Checkout transaction confirmed");
                self.bridge.dispatch(BridgeMessage::PaidStatusChanged(true));
            }
            Ok(result) => {
                tracing::warn!(digest = %result.digest, "Checkout transaction failed on-chain");
            }
            Err(err) => {
                tracing::warn!(error = %err, "Checkout transaction was not executed");
            }
        }

        self.navigator.navigate(&self.checkout.redirect_url);
    }
}
