//! Internal constants for the GAP8 uDMA subsystem.
//!
//! Channel ids match the hardware numbering of the peripherals multiplexed
//! onto the engine; the completion event id space is `2 * channel + direction`
//! with the direction in the low bit.

/// LVDS channel id
pub const UDMA_ID_LVDS: u32 = 0;
/// SPI master 0 channel id
pub const UDMA_ID_SPIM0: u32 = 1;
/// SPI master 1 channel id
pub const UDMA_ID_SPIM1: u32 = 2;
/// Hyperbus channel id
pub const UDMA_ID_HYPER: u32 = 3;
/// UART channel id
pub const UDMA_ID_UART: u32 = 4;
/// I2C0 channel id
pub const UDMA_ID_I2C0: u32 = 5;
/// I2C1 channel id
pub const UDMA_ID_I2C1: u32 = 6;
/// TCDM channel id (L2 to FC-L1 memcpy)
pub const UDMA_ID_TCDM: u32 = 7;
/// I2S channel id
pub const UDMA_ID_I2S: u32 = 8;
/// Camera interface channel id
pub const UDMA_ID_CPI: u32 = 9;

/// Total number of uDMA channels
pub const UDMA_NR_CHANNELS: usize = 10;

/// Lowest valid completion event id
pub const UDMA_MIN_EVENT: u32 = 0;

/// Highest valid completion event id (two events per channel: RX and TX)
pub const UDMA_MAX_EVENT: u32 = (UDMA_NR_CHANNELS as u32) * 2 - 1;

/// Default capacity of the shared transfer-request pool
pub const DEFAULT_REQUESTS: usize = 8;
