//! The game runtime's export surface, as seen by the glue layer.

use std::sync::Mutex;

/// Setter/getter subset of the game runtime's export table that the wallet
/// glue touches.
///
/// The browser deployment backs this with the WASM module's exported
/// functions (`update_sui_address`, `update_is_paid`, `set_player_balance`
/// and friends); tests and native runs use [`InMemoryRuntime`]. All calls
/// are synchronous and infallible, matching the export contract.
pub trait GameRuntime: Send + Sync {
    /// Forward the connected wallet address; an empty string clears it.
    fn set_wallet_address(&self, address: &str);

    fn wallet_address(&self) -> String;

    fn set_paid_status(&self, paid: bool);

    fn paid_status(&self) -> bool;

    fn set_player_balance(&self, balance: u64);

    fn player_balance(&self) -> u64;
}

/// In-memory runtime double for tests and native dev runs.
#[derive(Default)]
pub struct InMemoryRuntime {
    state: Mutex<RuntimeState>,
}

#[derive(Default)]
struct RuntimeState {
    wallet_address: String,
    paid: bool,
    balance: u64,
}

impl InMemoryRuntime {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> std::sync::MutexGuard<'_, RuntimeState> {
        self.state.lock().expect("runtime state lock poisoned")
    }
}

impl GameRuntime for InMemoryRuntime {
    fn set_wallet_address(&self, address: &str) {
        self.state().wallet_address = address.to_string();
    }

    fn wallet_address(&self) -> String {
        self.state().wallet_address.clone()
    }

    fn set_paid_status(&self, paid: bool) {
        self.state().paid = paid;
    }

    fn paid_status(&self) -> bool {
        self.state().paid
    }

    fn set_player_balance(&self, balance: u64) {
        self.state().balance = balance;
    }

    fn player_balance(&self) -> u64 {
        self.state().balance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_memory_runtime_holds_latest_values() {
        let runtime = InMemoryRuntime::new();
        assert_eq!(runtime.wallet_address(), "");
        assert!(!runtime.paid_status());

        runtime.set_wallet_address("0xAA");
        runtime.set_paid_status(true);
        runtime.set_player_balance(42);

        assert_eq!(runtime.wallet_address(), "0xAA");
        assert!(runtime.paid_status());
        assert_eq!(runtime.player_balance(), 42);

        runtime.set_wallet_address("");
        assert_eq!(runtime.wallet_address(), "");
    }
}
