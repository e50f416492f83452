//! Hardware abstraction for the uDMA engine.
//!
//! The engine talks to hardware exclusively through the [`UdmaBus`] trait:
//! per-channel transfer programming, latched-pending clearing, the global
//! clock gate, and the SoC event-unit mask. [`Gap8Bus`] is the
//! memory-mapped implementation for real hardware; tests substitute a
//! recording mock.

mod bus;

pub use bus::{Gap8Bus, UdmaBus};
