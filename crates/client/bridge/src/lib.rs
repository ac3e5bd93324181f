//! Host <-> game-runtime bridge for the autonomous-game client.
//!
//! The game runtime (a WASM module in the browser deployment) and the host
//! glue exchange fire-and-forget notifications in both directions. This
//! crate replaces ad hoc global function attachment with a typed message
//! layer:
//!
//! ```text
//! host ── BridgeMessage::AddressChanged ───> GameRuntime::set_wallet_address
//! host ── BridgeMessage::PaidStatusChanged ─> GameRuntime::set_paid_status
//! game ── BridgeMessage::GameStarted ──────> broadcast to host subscribers
//! ```
//!
//! Neither direction carries an acknowledgement or return value.

pub mod bridge;
pub mod message;
pub mod runtime;

pub use bridge::GameBridge;
pub use message::BridgeMessage;
pub use runtime::{GameRuntime, InMemoryRuntime};
