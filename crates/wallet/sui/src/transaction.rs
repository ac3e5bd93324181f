//! Unsigned transaction descriptors handed to the wallet for signing.

use serde::{Deserialize, Serialize};

use wallet_core::AccountAddress;

/// Transaction kinds the glue layer builds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum TransactionKind {
    /// Transfer SUI from the sender's gas coin to a recipient.
    #[serde(rename_all = "camelCase")]
    PaySui {
        recipient: AccountAddress,
        amount_mist: u64,
    },
}

/// Unsigned transaction data.
///
/// Serialized to JSON and embedded in a `SignRequest`; the wallet consumes
/// the descriptor, resolves the sender's coins, and produces the final
/// transaction bytes. The glue layer never serializes to the binary wire
/// format itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionData {
    pub kind: TransactionKind,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender: Option<AccountAddress>,

    /// Gas budget in MIST; set by the transaction flow before signing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gas_budget: Option<u64>,
}

impl TransactionData {
    /// Transaction transferring `amount_mist` MIST to `recipient`.
    pub fn pay_sui(recipient: AccountAddress, amount_mist: u64) -> Self {
        Self {
            kind: TransactionKind::PaySui {
                recipient,
                amount_mist,
            },
            sender: None,
            gas_budget: None,
        }
    }

    pub fn with_sender(mut self, sender: AccountAddress) -> Self {
        self.sender = Some(sender);
        self
    }

    pub fn set_gas_budget(&mut self, budget: u64) {
        self.gas_budget = Some(budget);
    }

    pub fn gas_budget(&self) -> Option<u64> {
        self.gas_budget
    }

    /// Wallet-facing JSON representation.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pay_sui_descriptor_round_trips_gas_budget() {
        let mut tx = TransactionData::pay_sui(AccountAddress::new("0xBB"), 1_000_000);
        assert_eq!(tx.gas_budget(), None);

        tx.set_gas_budget(50_000);

        let json = tx.to_json().unwrap();
        assert!(json.contains("\"gasBudget\":50000"));
        assert!(json.contains("\"paySui\""));
        assert!(json.contains("\"amountMist\":1000000"));

        let parsed: TransactionData = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, tx);
    }

    #[test]
    fn sender_is_omitted_until_set() {
        let tx = TransactionData::pay_sui(AccountAddress::new("0xBB"), 1);
        assert!(!tx.to_json().unwrap().contains("sender"));

        let tx = tx.with_sender(AccountAddress::new("0xAA"));
        assert!(tx.to_json().unwrap().contains("\"sender\":\"0xAA\""));
    }
}
