//! Channel registration descriptors.
//!
//! A peripheral driver registers itself on its channel id with a
//! [`ChannelConfig`] carrying its completion handlers. The engine derives
//! the channel's register block from the id, so no pointer travels with
//! the config.

use super::event::Direction;

/// Completion handler, invoked once per retired transfer.
///
/// Runs in interrupt context: it must not block or sleep. Hand blocking
/// work off to a task-notify mechanism outside this subsystem. Re-submitting
/// a follow-up transfer from inside the handler is allowed.
pub type CompletionHandler = fn(channel: u32, direction: Direction);

/// Per-channel registration descriptor.
///
/// # Example
///
/// ```ignore
/// fn uart_tx_done(channel: u32, _direction: Direction) { /* notify */ }
///
/// let config = ChannelConfig::new().with_on_tx(uart_tx_done);
/// udma.register(UDMA_ID_UART, config)?;
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChannelConfig {
    on_tx: Option<CompletionHandler>,
    on_rx: Option<CompletionHandler>,
}

impl ChannelConfig {
    /// Config with no completion handlers; callers poll with `is_idle`.
    pub const fn new() -> Self {
        Self {
            on_tx: None,
            on_rx: None,
        }
    }

    /// Set the TX completion handler.
    #[must_use]
    pub const fn with_on_tx(mut self, handler: CompletionHandler) -> Self {
        self.on_tx = Some(handler);
        self
    }

    /// Set the RX completion handler.
    #[must_use]
    pub const fn with_on_rx(mut self, handler: CompletionHandler) -> Self {
        self.on_rx = Some(handler);
        self
    }

    /// Handler for one direction, if any.
    pub fn handler(&self, direction: Direction) -> Option<CompletionHandler> {
        match direction {
            Direction::Tx => self.on_tx,
            Direction::Rx => self.on_rx,
        }
    }
}
