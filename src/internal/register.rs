//! Memory-mapped register definitions for the GAP8 uDMA engine.
//!
//! Each channel owns a fixed-stride block of RX/TX address, size and config
//! registers; the engine-global area holds the per-channel clock gate. All
//! access is volatile to ensure proper hardware interaction.

use crate::driver::event::Direction;

/// uDMA register block base address
pub const UDMA_BASE: usize = 0x1A10_2000;

/// Byte stride between consecutive channel register blocks
pub const UDMA_CHANNEL_STRIDE: usize = 0x80;

/// RX buffer address register, relative to the channel block
pub const UDMA_RX_SADDR_OFFSET: usize = 0x00;
/// RX transfer size register, relative to the channel block
pub const UDMA_RX_SIZE_OFFSET: usize = 0x04;
/// RX config register, relative to the channel block
pub const UDMA_RX_CFG_OFFSET: usize = 0x08;
/// TX buffer address register, relative to the channel block
pub const UDMA_TX_SADDR_OFFSET: usize = 0x10;
/// TX transfer size register, relative to the channel block
pub const UDMA_TX_SIZE_OFFSET: usize = 0x14;
/// TX config register, relative to the channel block
pub const UDMA_TX_CFG_OFFSET: usize = 0x18;

/// Engine-global clock-gate register (one enable bit per channel)
pub const UDMA_CG: usize = UDMA_BASE + 0x780;

/// CFG: transfer enable (one-shot; hardware clears it on completion)
pub const UDMA_CFG_EN: u32 = 1 << 4;
/// CFG: transfer pending (read-only)
#[allow(dead_code)]
pub const UDMA_CFG_PENDING: u32 = 1 << 5;
/// CFG: clear the latched pending state and stop the channel
pub const UDMA_CFG_CLR: u32 = 1 << 6;

/// SoC event unit FC mask register; bit n gates delivery of event id n
pub const SOC_EU_FC_MASK: usize = 0x1A10_6000;

/// Base address of the register block for `channel`
#[inline(always)]
pub const fn channel_base(channel: u32) -> usize {
    UDMA_BASE + (channel as usize) * UDMA_CHANNEL_STRIDE
}

/// Offsets of the (SADDR, SIZE, CFG) triplet for one direction
#[inline(always)]
pub const fn direction_offsets(direction: Direction) -> (usize, usize, usize) {
    match direction {
        Direction::Rx => (
            UDMA_RX_SADDR_OFFSET,
            UDMA_RX_SIZE_OFFSET,
            UDMA_RX_CFG_OFFSET,
        ),
        Direction::Tx => (
            UDMA_TX_SADDR_OFFSET,
            UDMA_TX_SIZE_OFFSET,
            UDMA_TX_CFG_OFFSET,
        ),
    }
}

/// Read a 32-bit register at the given address
///
/// # Safety
/// The caller must ensure the address is valid and properly aligned.
#[inline(always)]
pub unsafe fn read_reg(addr: usize) -> u32 {
    unsafe { core::ptr::read_volatile(addr as *const u32) }
}

/// Write a 32-bit value to a register at the given address
///
/// # Safety
/// The caller must ensure the address is valid and properly aligned.
#[inline(always)]
pub unsafe fn write_reg(addr: usize, value: u32) {
    unsafe { core::ptr::write_volatile(addr as *mut u32, value) }
}

/// Set bits in a register (read-modify-write)
///
/// # Safety
/// The caller must ensure the address is valid and properly aligned.
#[inline(always)]
pub unsafe fn set_bits(addr: usize, bits: u32) {
    // SAFETY: caller guarantees address validity
    let value = unsafe { read_reg(addr) };
    unsafe { write_reg(addr, value | bits) }
}

/// Clear bits in a register (read-modify-write)
///
/// # Safety
/// The caller must ensure the address is valid and properly aligned.
#[inline(always)]
pub unsafe fn clear_bits(addr: usize, bits: u32) {
    // SAFETY: caller guarantees address validity
    let value = unsafe { read_reg(addr) };
    unsafe { write_reg(addr, value & !bits) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_blocks_do_not_overlap_global_area() {
        // Ten channel blocks end before the global config area.
        assert!(channel_base(9) + UDMA_CHANNEL_STRIDE <= UDMA_CG);
    }

    #[test]
    fn channel_base_strides() {
        assert_eq!(channel_base(0), UDMA_BASE);
        assert_eq!(channel_base(1), UDMA_BASE + 0x80);
        assert_eq!(channel_base(4), UDMA_BASE + 0x200);
    }

    #[test]
    fn direction_offsets_distinct() {
        let (rs, rz, rc) = direction_offsets(Direction::Rx);
        let (ts, tz, tc) = direction_offsets(Direction::Tx);
        assert_eq!((rs, rz, rc), (0x00, 0x04, 0x08));
        assert_eq!((ts, tz, tc), (0x10, 0x14, 0x18));
    }

    #[test]
    fn cfg_bits_disjoint() {
        assert_eq!(UDMA_CFG_EN & UDMA_CFG_PENDING, 0);
        assert_eq!(UDMA_CFG_EN & UDMA_CFG_CLR, 0);
        assert_eq!(UDMA_CFG_PENDING & UDMA_CFG_CLR, 0);
    }
}
