//! Control-panel view model derived from session snapshots.

use client_session::SessionSnapshot;

const CONNECT_LABEL: &str = "Connect Wallet";

/// What the two wallet buttons should show for a given session state.
///
/// Rendering is the host page's job; this only derives labels and
/// visibility so every frontend agrees on them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlPanel {
    /// Label of the connect/disconnect button
    pub connect_label: String,

    /// Whether the session is currently connected
    pub connected: bool,

    /// Whether the sign-transaction button is shown
    pub sign_visible: bool,
}

impl ControlPanel {
    pub fn from_snapshot(snapshot: &SessionSnapshot) -> Self {
        match snapshot.primary_account() {
            Some(account) if snapshot.is_connected => Self {
                connect_label: format!("Connected: {}", short_address(account.address.as_str())),
                connected: true,
                sign_visible: true,
            },
            _ => Self {
                connect_label: CONNECT_LABEL.to_string(),
                connected: false,
                sign_visible: false,
            },
        }
    }
}

/// Abbreviate an address to its first 6 and last 4 characters.
fn short_address(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= 10 {
        return address.to_string();
    }

    let head: String = chars[..6].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}...{}", head, tail)
}
