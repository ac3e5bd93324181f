//! Sui network configuration.

use std::env;

use wallet_core::ChainId;

/// Sui network types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuiNetwork {
    /// Sui mainnet
    Mainnet,
    /// Sui testnet
    Testnet,
    /// Local Sui network
    Local,
}

impl SuiNetwork {
    pub fn default_rpc_url(&self) -> &str {
        match self {
            SuiNetwork::Mainnet => "https://fullnode.mainnet.sui.io:443",
            SuiNetwork::Testnet => "https://fullnode.testnet.sui.io:443",
            SuiNetwork::Local => "http://127.0.0.1:9000",
        }
    }

    /// Wallet-standard chain identifier for this network.
    pub fn chain_id(&self) -> ChainId {
        match self {
            SuiNetwork::Mainnet => ChainId::new("sui:mainnet"),
            SuiNetwork::Testnet => ChainId::new("sui:testnet"),
            SuiNetwork::Local => ChainId::new("sui:localnet"),
        }
    }
}

/// Sui-specific configuration.
#[derive(Debug, Clone)]
pub struct SuiConfig {
    /// Sui network to connect to
    pub network: SuiNetwork,

    /// Custom RPC endpoint URL (overrides network default)
    pub rpc_url: Option<String>,

    /// Gas budget set on every transaction before signing (in MIST)
    pub gas_budget: u64,
}

impl SuiConfig {
    /// Default gas budget applied to transactions, in MIST.
    pub const DEFAULT_GAS_BUDGET: u64 = 50_000;

    /// Create a new Sui configuration.
    pub fn new(network: SuiNetwork) -> Self {
        Self {
            network,
            rpc_url: None,
            gas_budget: Self::DEFAULT_GAS_BUDGET,
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `SUI_NETWORK` - Network name (mainnet, testnet, local) (default: testnet)
    /// - `SUI_RPC_URL` - Custom RPC endpoint URL
    /// - `SUI_GAS_BUDGET` - Gas budget in MIST (default: 50000)
    pub fn from_env() -> Result<Self, String> {
        let network = match env::var("SUI_NETWORK")
            .unwrap_or_else(|_| "testnet".to_string())
            .to_lowercase()
            .as_str()
        {
            "mainnet" => SuiNetwork::Mainnet,
            "testnet" => SuiNetwork::Testnet,
            "local" => SuiNetwork::Local,
            other => {
                return Err(format!(
                    "Invalid SUI_NETWORK: {}. Must be mainnet, testnet, or local",
                    other
                ));
            }
        };

        let rpc_url = env::var("SUI_RPC_URL").ok();

        let gas_budget = env::var("SUI_GAS_BUDGET")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(Self::DEFAULT_GAS_BUDGET);

        Ok(Self {
            network,
            rpc_url,
            gas_budget,
        })
    }

    /// Set custom RPC URL.
    pub fn with_rpc_url(mut self, url: String) -> Self {
        self.rpc_url = Some(url);
        self
    }

    /// Set gas budget.
    pub fn with_gas_budget(mut self, budget: u64) -> Self {
        self.gas_budget = budget;
        self
    }

    /// Get the RPC URL (custom or default for network).
    pub fn get_rpc_url(&self) -> &str {
        self.rpc_url
            .as_deref()
            .unwrap_or_else(|| self.network.default_rpc_url())
    }

    pub fn validate(&self) -> Result<(), String> {
        let url = self.get_rpc_url();
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(format!("Invalid RPC URL format: {}", url));
        }

        if self.gas_budget == 0 {
            return Err("Gas budget must be greater than 0".to_string());
        }

        Ok(())
    }
}

impl Default for SuiConfig {
    fn default() -> Self {
        Self::new(SuiNetwork::Testnet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn testnet_defaults() {
        let config = SuiConfig::default();
        assert_eq!(config.get_rpc_url(), "https://fullnode.testnet.sui.io:443");
        assert_eq!(config.gas_budget, SuiConfig::DEFAULT_GAS_BUDGET);
        assert_eq!(config.network.chain_id().as_str(), "sui:testnet");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn custom_rpc_url_overrides_network_default() {
        let config = SuiConfig::new(SuiNetwork::Local).with_rpc_url("http://10.0.0.1:9000".into());
        assert_eq!(config.get_rpc_url(), "http://10.0.0.1:9000");
    }

    #[test]
    fn validate_rejects_bad_values() {
        let config = SuiConfig::default().with_rpc_url("ftp://example.com".into());
        assert!(config.validate().is_err());

        let config = SuiConfig::default().with_gas_budget(0);
        assert!(config.validate().is_err());
    }
}
