//! uDMA bus trait and the GAP8 memory-mapped implementation.

use crate::driver::event::{Direction, Event};
use crate::internal::register::{
    channel_base, direction_offsets, set_bits, write_reg, SOC_EU_FC_MASK, UDMA_CFG_CLR,
    UDMA_CFG_EN, UDMA_CG,
};

/// Register-level operations the engine needs from the hardware.
///
/// One method per register concern; the engine guarantees a single writer
/// at a time (all calls happen under the engine's exclusion discipline), so
/// implementations need no internal locking.
pub trait UdmaBus {
    /// Program a channel's (address, size) pair for one direction and set
    /// the one-shot enable bit. This starts, or continues, a hardware
    /// transfer of `size` bytes from/to `addr`.
    fn program(&mut self, channel: u32, direction: Direction, addr: usize, size: u32);

    /// Clear latched pending state for a channel direction without starting
    /// a transfer. Used on the defensive spurious-completion path.
    fn clear_pending(&mut self, channel: u32, direction: Direction);

    /// Enable or disable the clock-gate bit for a channel.
    fn set_clock_gate(&mut self, channel: u32, enable: bool);

    /// Gate or ungate delivery of a channel direction's completion event in
    /// the SoC event unit.
    fn set_event_mask(&mut self, channel: u32, direction: Direction, enable: bool);
}

/// Memory-mapped bus for the GAP8 uDMA register file.
///
/// Zero-sized; all state lives in hardware.
#[derive(Debug)]
pub struct Gap8Bus {
    _private: (),
}

impl Gap8Bus {
    /// Create a handle to the uDMA register file.
    ///
    /// # Safety
    ///
    /// The handle aliases global, mutable hardware state. The caller must
    /// ensure only one `Gap8Bus` is ever used to drive the engine, and only
    /// on a GAP8 where the register file is mapped at its documented base.
    pub const unsafe fn new() -> Self {
        Self { _private: () }
    }
}

impl UdmaBus for Gap8Bus {
    fn program(&mut self, channel: u32, direction: Direction, addr: usize, size: u32) {
        let base = channel_base(channel);
        let (saddr, sz, cfg) = direction_offsets(direction);
        // SAFETY: constructor contract guarantees the register file mapping.
        unsafe {
            write_reg(base + saddr, addr as u32);
            write_reg(base + sz, size);
            write_reg(base + cfg, UDMA_CFG_EN);
        }
    }

    fn clear_pending(&mut self, channel: u32, direction: Direction) {
        let base = channel_base(channel);
        let (_, _, cfg) = direction_offsets(direction);
        // SAFETY: constructor contract guarantees the register file mapping.
        unsafe {
            write_reg(base + cfg, UDMA_CFG_CLR);
        }
    }

    fn set_clock_gate(&mut self, channel: u32, enable: bool) {
        let bit = 1u32 << channel;
        // SAFETY: constructor contract guarantees the register file mapping;
        // single-writer discipline makes the read-modify-write race-free.
        unsafe {
            if enable {
                set_bits(UDMA_CG, bit);
            } else {
                crate::internal::register::clear_bits(UDMA_CG, bit);
            }
        }
    }

    fn set_event_mask(&mut self, channel: u32, direction: Direction, enable: bool) {
        let event = Event { channel, direction }.to_raw();
        let bit = 1u32 << event;
        // SAFETY: constructor contract guarantees the event-unit mapping.
        unsafe {
            if enable {
                set_bits(SOC_EU_FC_MASK, bit);
            } else {
                crate::internal::register::clear_bits(SOC_EU_FC_MASK, bit);
            }
        }
    }
}
