//! Autonomous-game wallet client binary.
//!
//! # Architecture
//!
//! This binary is the composition root that assembles:
//! 1. Wallet directory (provider discovery source)
//! 2. Game runtime (bridge target)
//! 3. Transaction executor (Sui fullnode JSON-RPC)
//! 4. Navigator (checkout redirect target)
//!
//! All components are built independently and injected into the Client
//! container.
//!
//! # Features
//!
//! - `dev-wallet`: in-memory wallet provider (default), so the binary runs
//!   without a browser extension. A browser deployment replaces the
//!   directory, runtime, and navigator with wallet-standard, WASM-export,
//!   and `window.location` backed implementations.
//!
//! # Examples
//!
//! ```bash
//! SUI_NETWORK=testnet cargo run -p autonomous-client
//! ```

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    autonomous_client::logging::setup_logging()?;

    #[cfg(feature = "dev-wallet")]
    {
        run_dev().await?;
    }

    #[cfg(not(feature = "dev-wallet"))]
    {
        compile_error!(
            "Native runs need a wallet provider; enable the dev-wallet feature or embed this crate with your own WalletDirectory."
        );
    }

    Ok(())
}

/// Run the full session lifecycle against the in-memory dev wallet.
#[cfg(feature = "dev-wallet")]
async fn run_dev() -> Result<()> {
    use std::sync::Arc;

    use autonomous_client::{Client, ControlPanel, LoggingNavigator};
    use client_bridge::InMemoryRuntime;
    use client_session::{CheckoutConfig, DiscoveryConfig, FlowConfig};
    use wallet_core::mock::{MockWallet, StaticWalletDirectory};
    use wallet_core::{AccountAddress, WalletAccount};
    use wallet_sui::{SuiConfig, SuiRpcClient};

    // 1. Load configuration from environment
    let sui_config = SuiConfig::from_env().map_err(|e| anyhow::anyhow!(e))?;
    sui_config.validate().map_err(|e| anyhow::anyhow!(e))?;
    let checkout = CheckoutConfig::from_env();

    tracing::info!("Starting autonomous-game wallet client");
    tracing::info!("Fullnode: {}", sui_config.get_rpc_url());

    // 2. Dev wallet with one account on the configured chain
    let chain = sui_config.network.chain_id();
    let wallet = Arc::new(MockWallet::new(DiscoveryConfig::DEFAULT_WALLET_NAME).with_accounts(
        vec![WalletAccount::new(
            AccountAddress::new("0x8a7c3bf2d9415e60ab3c1f84de02b796c5fd18e43a9b06d2c7e45f1908aa6b3d"),
            vec![chain],
        )],
    ));
    let directory = StaticWalletDirectory::with_wallet(wallet);

    // 3. Assemble the client
    let client = Client::builder()
        .directory(directory)
        .runtime(InMemoryRuntime::new())
        .navigator(LoggingNavigator::new())
        .executor(SuiRpcClient::new(&sui_config))
        .flow_config(FlowConfig::from_sui(&sui_config))
        .checkout(checkout)
        .build()?;

    // 4. Mirror store changes into the control panel
    client.store().subscribe(|snapshot| {
        let panel = ControlPanel::from_snapshot(snapshot);
        tracing::info!(
            label = %panel.connect_label,
            sign_visible = panel.sign_visible,
            "Control panel updated"
        );
    });

    // 5. Resolve the wallet, then walk the session lifecycle
    client.start_discovery().await??;

    let accounts = client.flows().connect().await?;
    tracing::info!(accounts = accounts.len(), "Session connected");

    client.flows().request_paid_checkout().await;

    client.flows().disconnect().await?;
    tracing::info!("Session closed");

    Ok(())
}
