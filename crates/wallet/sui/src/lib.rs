//! Sui integration for the autonomous-game client.
//!
//! This crate provides the Sui-specific half of the wallet glue:
//! - network/endpoint configuration (`SuiConfig`)
//! - transaction descriptors the wallet signs (`TransactionData`)
//! - a fullnode JSON-RPC client implementing
//!   `wallet_core::TransactionExecutor` (`SuiRpcClient`)
//!
//! Signing itself never happens here; the wallet provider owns keys and
//! serialization, and this crate only submits what the wallet returns.
//!
//! # Usage
//!
//! ```ignore
//! use wallet_sui::{SuiConfig, SuiRpcClient, TransactionData};
//!
//! let config = SuiConfig::from_env()?;
//! let client = SuiRpcClient::new(&config);
//!
//! let mut tx = TransactionData::pay_sui(recipient, 1_000_000);
//! tx.set_gas_budget(config.gas_budget);
//! ```

pub mod config;
pub mod rpc;
pub mod transaction;

pub use config::{SuiConfig, SuiNetwork};
pub use rpc::SuiRpcClient;
pub use transaction::{TransactionData, TransactionKind};
