//! Navigator implementation for native runs.

use wallet_core::Navigator;

/// Navigator that logs the target instead of redirecting.
///
/// Native processes have no page to navigate; the browser deployment backs
/// the trait with a `window.location` assignment instead.
#[derive(Default)]
pub struct LoggingNavigator;

impl LoggingNavigator {
    pub fn new() -> Self {
        Self
    }
}

impl Navigator for LoggingNavigator {
    fn navigate(&self, url: &str) {
        tracing::info!(url, "Navigation requested");
    }
}
