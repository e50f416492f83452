//! GAP8 uDMA Driver
//!
//! A `no_std`, no-alloc Rust driver for the GAP8 micro-DMA (uDMA) engine.
//!
//! On GAP8 every serial-class peripheral (LVDS, SPI, Hyperbus, UART, I2C,
//! TCDM, I2S, camera) moves data exclusively through one shared uDMA engine;
//! the peripherals have no data registers of their own. This crate owns the
//! engine: peripheral drivers register on their channel id, submit
//! asynchronous transfer requests, and get completion callbacks when the
//! hardware retires them.
//!
//! # Architecture
//!
//! The crate is organized into three layers:
//!
//! 1. **Driver Layer** ([`driver`]): Channel registry, transfer admission
//!    and the interrupt-driven completion dispatcher
//! 2. **HAL Layer** ([`hal`]): The [`UdmaBus`] register-access trait and its
//!    memory-mapped [`Gap8Bus`] implementation
//! 3. **Sync Layer** ([`sync`]): Critical-section based [`SharedUdma`]
//!    wrapper for use from both mainline and interrupt context
//!
//! # Features
//!
//! - `defmt`: Enable defmt formatting for error types and spurious-event
//!   diagnostics
//!
//! # Example
//!
//! ```ignore
//! use gap8_udma::{ChannelConfig, Direction, SharedUdma};
//! use gap8_udma::constants::UDMA_ID_UART;
//!
//! gap8_udma::udma_static_sync!(UDMA);
//!
//! fn uart_tx_done(_channel: u32, _direction: Direction) {
//!     // notify the waiting task
//! }
//!
//! // Bring-up: register the UART peripheral on its channel.
//! UDMA.with(|udma| {
//!     udma.register(UDMA_ID_UART, ChannelConfig::new().with_on_tx(uart_tx_done))?;
//!     udma.set_interrupt(UDMA_ID_UART, Direction::Tx, true)
//! })?;
//!
//! // Submit a transfer; completion is signaled via `uart_tx_done`.
//! static mut TX_BUF: [u8; 64] = [0; 64];
//! UDMA.with(|udma| unsafe {
//!     udma.submit(UDMA_ID_UART, Direction::Tx, TX_BUF.as_mut_ptr(), 64, 1)
//! })?;
//!
//! // SoC event-unit interrupt handler:
//! fn udma_event_handler(event_id: u32) {
//!     UDMA.on_interrupt(event_id);
//! }
//! ```
//!
//! # Memory Requirements
//!
//! All state is statically sized: the channel registry (10 slots) plus the
//! transfer-request pool (`REQUESTS` descriptors, default 8). No heap.

#![no_std]
#![deny(missing_docs)]
#![allow(unsafe_code)]
#![deny(unsafe_op_in_unsafe_fn)]
// Clippy lint levels live here.
#![deny(clippy::correctness)]
#![warn(
    clippy::suspicious,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::cloned_instead_of_copied,
    clippy::explicit_iter_loop,
    clippy::implicit_clone,
    clippy::inconsistent_struct_constructor,
    clippy::manual_assert,
    clippy::manual_let_else,
    clippy::match_same_arms,
    clippy::needless_pass_by_value,
    clippy::semicolon_if_nothing_returned,
    clippy::uninlined_format_args,
    clippy::unnested_or_patterns,
    clippy::std_instead_of_core,
    clippy::std_instead_of_alloc,
    clippy::alloc_instead_of_core
)]
#![allow(
    clippy::mod_module_files,
    clippy::self_named_module_files,
    clippy::similar_names,
    clippy::must_use_candidate,
    clippy::cast_possible_truncation,
    clippy::module_name_repetitions
)]

// =============================================================================
// Modules
// =============================================================================

pub mod driver;
pub mod hal;
pub mod sync;

// Internal implementation details (pub(crate) only)
mod internal;

// Test utilities (only available during testing)
#[cfg(test)]
pub mod testing;

// =============================================================================
// Re-exports
// =============================================================================

pub use driver::{
    ChannelConfig, Completion, CompletionHandler, Direction, Error, Event, Gap8Udma, Result, Udma,
};
pub use hal::{Gap8Bus, UdmaBus};
pub use sync::{CriticalSectionCell, SharedUdma};

/// Shared driver constants.
///
/// These are grouped into a dedicated module to keep the top-level facade
/// focused on driver types.
pub mod constants {
    pub use crate::internal::constants::{
        DEFAULT_REQUESTS,
        // Channel ids
        UDMA_ID_CPI,
        UDMA_ID_HYPER,
        UDMA_ID_I2C0,
        UDMA_ID_I2C1,
        UDMA_ID_I2S,
        UDMA_ID_LVDS,
        UDMA_ID_SPIM0,
        UDMA_ID_SPIM1,
        UDMA_ID_TCDM,
        UDMA_ID_UART,
        // Event id space
        UDMA_MAX_EVENT,
        UDMA_MIN_EVENT,
        UDMA_NR_CHANNELS,
    };
}

// =============================================================================
// Macro Helpers
// =============================================================================

/// Declare a static, ISR-safe uDMA engine over the memory-mapped GAP8 bus.
///
/// This macro expands to a `SharedUdma<Gap8Bus, _>` static, reducing
/// boilerplate for bring-up code. It is the only sanctioned way to
/// construct a [`Gap8Bus`] without writing `unsafe` yourself; declare at
/// most one per program.
///
/// # Examples
///
/// ```ignore
/// gap8_udma::udma_static_sync!(UDMA);          // default 8-request pool
/// gap8_udma::udma_static_sync!(BIG_UDMA, 16);  // custom pool size
///
/// UDMA.with(|udma| {
///     udma.register(UDMA_ID_UART, ChannelConfig::new())
/// })?;
/// ```
#[macro_export]
macro_rules! udma_static_sync {
    ($name:ident) => {
        $crate::udma_static_sync!($name, 8);
    };
    ($name:ident, $requests:expr) => {
        static $name: $crate::sync::SharedUdma<$crate::hal::Gap8Bus, { $requests }> =
            // SAFETY: a static can only be declared once per name; the
            // resulting bus is the program's single handle to the engine.
            $crate::sync::SharedUdma::new(unsafe { $crate::hal::Gap8Bus::new() });
    };
}
