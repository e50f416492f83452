//! ISR-safe wrappers around the uDMA engine.

mod primitives;
mod shared;

pub use primitives::CriticalSectionCell;
pub use shared::SharedUdma;
