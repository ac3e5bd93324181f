//! Messages crossing the host <-> runtime boundary.

use wallet_core::AccountAddress;

/// A single bridge notification.
///
/// `AddressChanged` and `PaidStatusChanged` flow host -> runtime;
/// `GameStarted` flows runtime -> host. All variants are fire-and-forget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BridgeMessage {
    /// The connected wallet identity changed; `None` clears it.
    AddressChanged(Option<AccountAddress>),

    /// The payment-status flag changed.
    PaidStatusChanged(bool),

    /// The game signalled that play has started.
    GameStarted,
}
