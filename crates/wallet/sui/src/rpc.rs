//! Sui fullnode JSON-RPC client.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Value, json};

use wallet_core::{ExecutionResult, ExecutionStatus, ExecutorError, TransactionExecutor};

use crate::config::SuiConfig;

const JSONRPC_VERSION: &str = "2.0";
const EXECUTE_TRANSACTION_BLOCK: &str = "sui_executeTransactionBlock";

/// Fullnode JSON-RPC client.
///
/// Submits signed transactions with `sui_executeTransactionBlock` and maps
/// the node's verdict into `ExecutionResult`. The client holds no keys and
/// performs no signing.
pub struct SuiRpcClient {
    /// HTTP client
    http_client: reqwest::Client,

    /// Fullnode endpoint
    rpc_url: String,
}

impl SuiRpcClient {
    /// Create a client for the configured network.
    pub fn new(config: &SuiConfig) -> Self {
        Self::with_url(config.get_rpc_url())
    }

    /// Create a client for a specific endpoint.
    pub fn with_url(rpc_url: impl Into<String>) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            rpc_url: rpc_url.into(),
        }
    }

    pub fn rpc_url(&self) -> &str {
        &self.rpc_url
    }
}

#[async_trait]
impl TransactionExecutor for SuiRpcClient {
    async fn execute_transaction(
        &self,
        tx_bytes: &str,
        signature: &str,
    ) -> Result<ExecutionResult, ExecutorError> {
        let request = execute_request(tx_bytes, signature);

        tracing::debug!(url = %self.rpc_url, "Submitting transaction block");

        let response = self
            .http_client
            .post(&self.rpc_url)
            .json(&request)
            .send()
            .await
            .map_err(|e| ExecutorError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ExecutorError::Network(format!(
                "Fullnode returned status {}: {}",
                status, error_text
            )));
        }

        let envelope: RpcEnvelope = response
            .json()
            .await
            .map_err(|e| ExecutorError::InvalidResponse(e.to_string()))?;

        let result = parse_envelope(envelope)?;

        tracing::debug!(digest = %result.digest, success = result.is_success(), "Transaction executed");

        Ok(result)
    }
}

/// Build the `sui_executeTransactionBlock` request body.
fn execute_request(tx_bytes: &str, signature: &str) -> Value {
    json!({
        "jsonrpc": JSONRPC_VERSION,
        "id": 1,
        "method": EXECUTE_TRANSACTION_BLOCK,
        "params": [
            tx_bytes,
            [signature],
            { "showEffects": true },
            "WaitForLocalExecution",
        ],
    })
}

// ============================================================================
// Response Envelope
// ============================================================================

#[derive(Debug, Deserialize)]
struct RpcEnvelope {
    result: Option<TransactionBlockResponse>,
    error: Option<RpcErrorObject>,
}

#[derive(Debug, Deserialize)]
struct RpcErrorObject {
    code: i64,
    message: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TransactionBlockResponse {
    digest: String,
    effects: Option<TransactionEffects>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TransactionEffects {
    status: EffectsStatus,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EffectsStatus {
    status: String,
    error: Option<String>,
}

fn parse_envelope(envelope: RpcEnvelope) -> Result<ExecutionResult, ExecutorError> {
    if let Some(error) = envelope.error {
        return Err(ExecutorError::Rpc {
            code: error.code,
            message: error.message,
        });
    }

    let response = envelope
        .result
        .ok_or_else(|| ExecutorError::InvalidResponse("missing result and error".to_string()))?;

    let effects = response
        .effects
        .ok_or_else(|| ExecutorError::InvalidResponse("missing transaction effects".to_string()))?;

    let status = match effects.status.status.as_str() {
        "success" => ExecutionStatus::Success,
        "failure" => ExecutionStatus::Failure {
            error: effects
                .status
                .error
                .unwrap_or_else(|| "unknown execution failure".to_string()),
        },
        other => {
            return Err(ExecutorError::InvalidResponse(format!(
                "unknown effects status: {}",
                other
            )));
        }
    };

    Ok(ExecutionResult {
        digest: response.digest,
        status,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_uses_configured_endpoint() {
        let client = SuiRpcClient::new(&SuiConfig::default());
        assert_eq!(client.rpc_url(), "https://fullnode.testnet.sui.io:443");
    }

    #[test]
    fn execute_request_shape() {
        let request = execute_request("dHg=", "c2ln");

        assert_eq!(request["method"], EXECUTE_TRANSACTION_BLOCK);
        assert_eq!(request["params"][0], "dHg=");
        assert_eq!(request["params"][1][0], "c2ln");
        assert_eq!(request["params"][2]["showEffects"], true);
        assert_eq!(request["params"][3], "WaitForLocalExecution");
    }

    #[test]
    fn parses_successful_execution() {
        let envelope: RpcEnvelope = serde_json::from_value(json!({
            "jsonrpc": "2.0",
            "id": 1,
            "result": {
                "digest": "8qCvxDHh5LtDfF",
                "effects": { "status": { "status": "success" } },
            },
        }))
        .unwrap();

        let result = parse_envelope(envelope).unwrap();
        assert_eq!(result.digest, "8qCvxDHh5LtDfF");
        assert!(result.is_success());
    }

    #[test]
    fn parses_on_chain_failure() {
        let envelope: RpcEnvelope = serde_json::from_value(json!({
            "result": {
                "digest": "8qCvxDHh5LtDfF",
                "effects": {
                    "status": { "status": "failure", "error": "InsufficientGas" },
                },
            },
        }))
        .unwrap();

        let result = parse_envelope(envelope).unwrap();
        assert_eq!(
            result.status,
            ExecutionStatus::Failure {
                error: "InsufficientGas".to_string()
            }
        );
    }

    #[test]
    fn parses_rpc_error_object() {
        let envelope: RpcEnvelope = serde_json::from_value(json!({
            "error": { "code": -32002, "message": "Transaction validator signing failed" },
        }))
        .unwrap();

        let err = parse_envelope(envelope).unwrap_err();
        assert!(matches!(err, ExecutorError::Rpc { code: -32002, .. }));
    }
}
