//! Bridge dispatcher.

use std::sync::Arc;

use tokio::sync::broadcast;

use crate::message::BridgeMessage;
use crate::runtime::GameRuntime;

const HOST_EVENT_CAPACITY: usize = 16;

/// Routes bridge messages between the host glue and the game runtime.
///
/// Host-bound messages (`GameStarted`) are fanned out on a broadcast
/// channel; runtime-bound messages are forwarded straight into the
/// [`GameRuntime`] setters. Dispatch never blocks and never reports
/// delivery: both directions are fire-and-forget.
pub struct GameBridge {
    runtime: Arc<dyn GameRuntime>,
    host_events: broadcast::Sender<BridgeMessage>,
}

impl GameBridge {
    pub fn new(runtime: Arc<dyn GameRuntime>) -> Self {
        let (host_events, _) = broadcast::channel(HOST_EVENT_CAPACITY);
        Self {
            runtime,
            host_events,
        }
    }

    /// Deliver a message to its destination side.
    pub fn dispatch(&self, message: BridgeMessage) {
        match message {
            BridgeMessage::AddressChanged(address) => {
                let address = address.as_ref().map(|a| a.as_str()).unwrap_or("");
                tracing::debug!(address, "Forwarding wallet address to runtime");
                self.runtime.set_wallet_address(address);
            }
            BridgeMessage::PaidStatusChanged(paid) => {
                tracing::debug!(paid, "Forwarding paid status to runtime");
                self.runtime.set_paid_status(paid);
            }
            BridgeMessage::GameStarted => {
                if self.host_events.send(BridgeMessage::GameStarted).is_err() {
                    // No host subscribers - this is normal, not an error
                    tracing::trace!("No subscribers for game-start event");
                }
            }
        }
    }

    /// Entry point for the runtime side to signal game start.
    ///
    /// The browser deployment exposes this on the global scope for the WASM
    /// module to call.
    pub fn notify_game_started(&self) {
        self.dispatch(BridgeMessage::GameStarted);
    }

    /// Subscribe to runtime -> host events.
    pub fn subscribe(&self) -> broadcast::Receiver<BridgeMessage> {
        self.host_events.subscribe()
    }

    pub fn runtime(&self) -> &Arc<dyn GameRuntime> {
        &self.runtime
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::InMemoryRuntime;
    use wallet_core::AccountAddress;

    fn bridge() -> (GameBridge, Arc<InMemoryRuntime>) {
        let runtime = Arc::new(InMemoryRuntime::new());
        (GameBridge::new(runtime.clone()), runtime)
    }

    #[tokio::test]
    async fn address_changes_reach_the_runtime() {
        let (bridge, runtime) = bridge();

        bridge.dispatch(BridgeMessage::AddressChanged(Some(AccountAddress::new(
            "0xAA",
        ))));
        assert_eq!(runtime.wallet_address(), "0xAA");

        bridge.dispatch(BridgeMessage::AddressChanged(None));
        assert_eq!(runtime.wallet_address(), "");
    }

    #[tokio::test]
    async fn paid_status_reaches_the_runtime() {
        let (bridge, runtime) = bridge();

        bridge.dispatch(BridgeMessage::PaidStatusChanged(true));
        assert!(runtime.paid_status());
    }

    #[tokio::test]
    async fn game_start_reaches_host_subscribers() {
        let (bridge, _runtime) = bridge();
        let mut events = bridge.subscribe();

        bridge.notify_game_started();

        assert_eq!(events.recv().await.unwrap(), BridgeMessage::GameStarted);
    }

    #[tokio::test]
    async fn game_start_without_subscribers_is_silent() {
        let (bridge, _runtime) = bridge();

        // Must not panic or block
        bridge.notify_game_started();
    }
}
