//! Testing utilities and mock implementations
//!
//! This module provides a recording mock bus for testing the uDMA engine
//! on the host without hardware access.
//!
//! Only available when running `cargo test`.

// Note: The #[cfg(test)] attribute is applied in lib.rs where this module is declared
#![allow(missing_docs)]
#![allow(clippy::std_instead_of_core, clippy::std_instead_of_alloc)]

extern crate std;

use std::vec::Vec;

use crate::driver::Direction;
use crate::hal::UdmaBus;

// =============================================================================
// Mock uDMA Bus
// =============================================================================

/// One recorded register-level operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusOp {
    /// A (SADDR, SIZE, CFG=EN) programming sequence for one channel direction
    Program {
        channel: u32,
        direction: Direction,
        addr: usize,
        size: u32,
    },
    /// A CFG clear-pending write
    ClearPending { channel: u32, direction: Direction },
    /// A clock-gate bit flip
    ClockGate { channel: u32, enable: bool },
    /// An event-unit mask bit flip
    EventMask {
        channel: u32,
        direction: Direction,
        enable: bool,
    },
}

/// Mock bus for testing the engine without hardware.
///
/// Records every operation in order; tests assert on the log to verify when
/// (and with what) the engine touched the hardware.
///
/// # Example
///
/// ```ignore
/// let mut udma: Udma<MockBus, 8> = Udma::new(MockBus::new());
/// udma.register(UDMA_ID_UART, ChannelConfig::new())?;
/// assert_eq!(udma.bus().ops().len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct MockBus {
    ops: Vec<BusOp>,
}

impl MockBus {
    /// Create a new mock bus (const, usable in static engine instances)
    pub const fn new() -> Self {
        Self { ops: Vec::new() }
    }

    /// All operations recorded so far, in order
    pub fn ops(&self) -> &[BusOp] {
        &self.ops
    }

    /// Forget everything recorded so far
    pub fn clear(&mut self) {
        self.ops.clear();
    }

    /// The (addr, size) of every program op for one channel direction
    pub fn programs(&self, channel: u32, direction: Direction) -> Vec<(usize, u32)> {
        self.ops
            .iter()
            .filter_map(|op| match *op {
                BusOp::Program {
                    channel: c,
                    direction: d,
                    addr,
                    size,
                } if c == channel && d == direction => Some((addr, size)),
                _ => None,
            })
            .collect()
    }

    /// How many times one channel direction was programmed
    pub fn program_count(&self, channel: u32, direction: Direction) -> usize {
        self.programs(channel, direction).len()
    }

    /// The most recent program op for one channel direction, if any
    pub fn last_program(&self, channel: u32, direction: Direction) -> Option<(usize, u32)> {
        self.programs(channel, direction).last().copied()
    }

    /// How many clear-pending writes one channel direction received
    pub fn clear_pending_count(&self, channel: u32, direction: Direction) -> usize {
        self.ops
            .iter()
            .filter(|op| {
                matches!(
                    op,
                    BusOp::ClearPending {
                        channel: c,
                        direction: d
                    } if *c == channel && *d == direction
                )
            })
            .count()
    }
}

impl UdmaBus for MockBus {
    fn program(&mut self, channel: u32, direction: Direction, addr: usize, size: u32) {
        self.ops.push(BusOp::Program {
            channel,
            direction,
            addr,
            size,
        });
    }

    fn clear_pending(&mut self, channel: u32, direction: Direction) {
        self.ops.push(BusOp::ClearPending { channel, direction });
    }

    fn set_clock_gate(&mut self, channel: u32, enable: bool) {
        self.ops.push(BusOp::ClockGate { channel, enable });
    }

    fn set_event_mask(&mut self, channel: u32, direction: Direction, enable: bool) {
        self.ops.push(BusOp::EventMask {
            channel,
            direction,
            enable,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_bus_records_in_order() {
        let mut bus = MockBus::new();
        bus.set_clock_gate(3, true);
        bus.program(3, Direction::Tx, 0x1000, 64);
        bus.clear_pending(3, Direction::Tx);
        assert_eq!(
            bus.ops(),
            [
                BusOp::ClockGate {
                    channel: 3,
                    enable: true
                },
                BusOp::Program {
                    channel: 3,
                    direction: Direction::Tx,
                    addr: 0x1000,
                    size: 64
                },
                BusOp::ClearPending {
                    channel: 3,
                    direction: Direction::Tx
                },
            ]
        );
    }

    #[test]
    fn program_helpers_filter_by_channel_and_direction() {
        let mut bus = MockBus::new();
        bus.program(1, Direction::Tx, 0x1000, 8);
        bus.program(1, Direction::Rx, 0x2000, 16);
        bus.program(2, Direction::Tx, 0x3000, 32);
        bus.program(1, Direction::Tx, 0x4000, 8);

        assert_eq!(bus.programs(1, Direction::Tx), [(0x1000, 8), (0x4000, 8)]);
        assert_eq!(bus.program_count(1, Direction::Rx), 1);
        assert_eq!(bus.last_program(1, Direction::Tx), Some((0x4000, 8)));
        assert_eq!(bus.last_program(2, Direction::Rx), None);
    }

    #[test]
    fn clear_resets_log() {
        let mut bus = MockBus::new();
        bus.set_clock_gate(0, true);
        bus.clear();
        assert!(bus.ops().is_empty());
    }
}
