//! Internal Implementation Details
//!
//! This module contains implementation details that are not part of the
//! public API. Types in this module may change without notice between
//! minor versions.
//!
//! # Contents
//!
//! - [`constants`]: Channel ids, event-id bounds, pool sizing
//! - [`register`]: Raw memory-mapped register definitions
//! - [`pool`]: Fixed arena of transfer descriptors with a free list
//! - [`queue`]: Intrusive per-direction FIFO over the arena

pub(crate) mod constants;
pub(crate) mod pool;
pub(crate) mod queue;
pub(crate) mod register;
