//! Completion event decoding.
//!
//! All channels share one completion interrupt per direction; the SoC event
//! unit delivers a small integer id identifying which hardware slot
//! finished. The id space packs the direction into the low bit and the
//! channel id into the remaining high bits.

use crate::internal::constants::UDMA_MAX_EVENT;

/// Transfer direction through the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Peripheral to memory
    Rx = 0,
    /// Memory to peripheral
    Tx = 1,
}

impl Direction {
    /// Number of directions per channel
    pub const COUNT: usize = 2;

    /// Index into per-direction arrays
    #[inline(always)]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// A decoded completion event: which channel and direction finished one
/// block of its current transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Event {
    /// Owning channel id
    pub channel: u32,
    /// Completed direction
    pub direction: Direction,
}

impl Event {
    /// Decode a raw event id delivered by the interrupt layer.
    ///
    /// Returns `None` for ids above the maximum configured event value;
    /// such events must be ignored silently.
    #[inline]
    pub fn from_raw(id: u32) -> Option<Self> {
        if id > UDMA_MAX_EVENT {
            return None;
        }
        let direction = if id & 1 != 0 {
            Direction::Tx
        } else {
            Direction::Rx
        };
        Some(Self {
            channel: id >> 1,
            direction,
        })
    }

    /// Encode back into the raw event id.
    #[inline]
    pub const fn to_raw(self) -> u32 {
        (self.channel << 1) | self.direction as u32
    }
}
