//! The shared uDMA engine.
//!
//! GAP8 peripherals (UART, SPI, I2C, Hyperbus, camera, ...) have no data
//! registers of their own; every byte moves through this one engine. Each
//! peripheral registers on its channel id and submits asynchronous transfer
//! requests against it; a single completion interrupt per direction, shared
//! across all channels, drives the per-channel queues forward.
//!
//! Per (channel, direction) the engine is a two-state machine: Idle (queue
//! empty, hardware untouched) and Active (queue head programmed into the
//! hardware slot). `submit` on an idle queue kicks the hardware; every
//! completion event either re-kicks the same descriptor (multi-block
//! transfer), promotes the next queued descriptor, or falls back to Idle.

use super::config::{ChannelConfig, CompletionHandler};
use super::error::{Error, Result};
use super::event::{Direction, Event};
use crate::hal::UdmaBus;
use crate::internal::constants::{DEFAULT_REQUESTS, UDMA_NR_CHANNELS};
use crate::internal::pool::RequestPool;
use crate::internal::queue::DirectionQueue;

/// A retired transfer whose completion handler is still to be run.
///
/// [`Udma::dispatch`] hands this back instead of calling the handler
/// itself, so the interrupt glue can invoke it after leaving the critical
/// section. A driver may therefore re-submit from its own handler without
/// re-entering the engine lock.
#[derive(Clone, Copy)]
pub struct Completion {
    channel: u32,
    direction: Direction,
    handler: CompletionHandler,
}

impl Completion {
    /// Channel whose transfer retired.
    pub fn channel(&self) -> u32 {
        self.channel
    }

    /// Direction of the retired transfer.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Run the peripheral's completion handler.
    ///
    /// Executes in whatever context the caller is in; from the interrupt
    /// glue that is interrupt context, and the handler must not block.
    pub fn invoke(self) {
        (self.handler)(self.channel, self.direction);
    }
}

/// The uDMA engine: channel registry, request pool, per-direction queues
/// and the completion state machine.
///
/// # Type Parameters
/// * `B` - Register access implementation ([`UdmaBus`])
/// * `REQUESTS` - Capacity of the shared transfer-request pool; bounds how
///   many logical transfers can be in flight across all channels
///
/// The engine itself performs no locking. Wrap it in
/// [`SharedUdma`](crate::sync::SharedUdma) (or an equivalent exclusion
/// discipline) before touching it from both mainline and interrupt context.
pub struct Udma<B, const REQUESTS: usize> {
    bus: B,
    channels: [Option<ChannelConfig>; UDMA_NR_CHANNELS],
    queues: [[DirectionQueue; Direction::COUNT]; UDMA_NR_CHANNELS],
    pool: RequestPool<REQUESTS>,
    spurious: u32,
}

impl<B, const REQUESTS: usize> Udma<B, REQUESTS> {
    /// Create an engine with all channels unregistered and the whole
    /// request pool free. Const, suitable for static initialization.
    pub const fn new(bus: B) -> Self {
        Self {
            bus,
            channels: [None; UDMA_NR_CHANNELS],
            queues: [[DirectionQueue::new(); Direction::COUNT]; UDMA_NR_CHANNELS],
            pool: RequestPool::new(),
            spurious: 0,
        }
    }

    /// Shared access to the bus.
    pub fn bus(&self) -> &B {
        &self.bus
    }

    /// Exclusive access to the bus.
    pub fn bus_mut(&mut self) -> &mut B {
        &mut self.bus
    }

    /// Number of request descriptors currently free.
    pub fn free_requests(&self) -> usize {
        self.pool.available()
    }

    /// Fixed capacity of the request pool.
    pub const fn request_capacity(&self) -> usize {
        self.pool.capacity()
    }

    /// Completion events observed for an empty queue since construction.
    ///
    /// Hardware should never signal a channel with nothing in flight; a
    /// non-zero count points at an interrupt-routing or reset problem.
    pub fn spurious_events(&self) -> u32 {
        self.spurious
    }

    /// Whether a peripheral is registered on `channel`.
    pub fn is_registered(&self, channel: u32) -> bool {
        self.channel_config(channel).is_some()
    }

    /// The registered config for `channel`, if any.
    ///
    /// Returns `None` for an empty slot and for out-of-range ids alike.
    pub fn channel_config(&self, channel: u32) -> Option<ChannelConfig> {
        self.channels.get(channel as usize).copied().flatten()
    }

    fn check_range(channel: u32) -> Result<usize> {
        let idx = channel as usize;
        if idx < UDMA_NR_CHANNELS {
            Ok(idx)
        } else {
            Err(Error::InvalidChannel)
        }
    }

    fn check_registered(&self, channel: u32) -> Result<usize> {
        let idx = Self::check_range(channel)?;
        if self.channels[idx].is_some() {
            Ok(idx)
        } else {
            Err(Error::InvalidChannel)
        }
    }
}

impl<B: UdmaBus, const REQUESTS: usize> Udma<B, REQUESTS> {
    /// Register a peripheral on its channel id and enable its clock gate.
    ///
    /// Overwrites any prior occupant of the slot.
    pub fn register(&mut self, channel: u32, config: ChannelConfig) -> Result<()> {
        let idx = Self::check_range(channel)?;
        self.channels[idx] = Some(config);
        self.bus.set_clock_gate(channel, true);
        Ok(())
    }

    /// Unregister a peripheral and disable its clock gate.
    ///
    /// The caller must ensure no requests for this channel remain queued;
    /// the engine does not check. Unregistering with transfers in flight
    /// leaves the dispatcher unable to route their completions.
    pub fn unregister(&mut self, channel: u32) -> Result<()> {
        let idx = Self::check_range(channel)?;
        self.channels[idx] = None;
        self.bus.set_clock_gate(channel, false);
        Ok(())
    }

    /// Gate or ungate completion-event delivery for one channel direction
    /// in the SoC event unit.
    pub fn set_interrupt(&mut self, channel: u32, direction: Direction, enable: bool) -> Result<()> {
        Self::check_range(channel)?;
        self.bus.set_event_mask(channel, direction, enable);
        Ok(())
    }

    /// Queue a transfer of `block_count` blocks of `block_size` bytes.
    ///
    /// Never blocks and never waits for a free descriptor: with the pool
    /// empty it fails fast with [`Error::ResourceExhausted`] and the caller
    /// retries later. Safe to call from interrupt context (under the same
    /// exclusion as the dispatcher).
    ///
    /// If the channel's queue for `direction` was empty the transfer is
    /// programmed into hardware before this returns; otherwise it waits its
    /// turn in FIFO order. Completion is always signaled asynchronously
    /// (handler or [`Self::is_idle`]), never by this call.
    ///
    /// # Safety
    ///
    /// `buffer` must point to at least `block_size * block_count` bytes
    /// that stay valid, and untouched for TX / exclusively owned for RX,
    /// until the transfer completes. There is no cancellation: once the
    /// request is queued it runs to completion.
    pub unsafe fn submit(
        &mut self,
        channel: u32,
        direction: Direction,
        buffer: *mut u8,
        block_size: u32,
        block_count: u32,
    ) -> Result<()> {
        let idx = self.check_registered(channel)?;
        let Self {
            bus, queues, pool, ..
        } = self;

        let Some(slot) = pool.acquire() else {
            return Err(Error::ResourceExhausted);
        };
        {
            let d = pool.get_mut(slot);
            d.base = buffer as usize;
            d.addr = buffer as usize;
            d.block_size = block_size;
            d.block_count = block_count;
        }

        let queue = &mut queues[idx][direction.index()];
        let was_idle = queue.is_empty();
        queue.push_back(slot, pool);
        if was_idle {
            // First occupant becomes head immediately: kick the hardware.
            Self::kick(bus, pool, slot, channel, direction);
        }
        Ok(())
    }

    /// Whether nothing is queued or in flight for `(channel, direction)`.
    ///
    /// The non-blocking alternative to a completion handler for callers
    /// that prefer spin-polling.
    pub fn is_idle(&self, channel: u32, direction: Direction) -> Result<bool> {
        let idx = self.check_registered(channel)?;
        Ok(self.queues[idx][direction.index()].is_empty())
    }

    /// Whether `buffer` still belongs to a queued or in-flight transfer on
    /// `(channel, direction)`.
    ///
    /// Reports true while the buffer's start lies inside any queued
    /// descriptor's submitted window; once the owning descriptor retires
    /// the buffer is free for reuse.
    pub fn is_buffer_pending(
        &self,
        channel: u32,
        direction: Direction,
        buffer: *const u8,
    ) -> Result<bool> {
        let idx = self.check_registered(channel)?;
        let addr = buffer as usize;
        let mut pending = false;
        self.queues[idx][direction.index()].for_each(&self.pool, |slot| {
            let d = self.pool.get(slot);
            if addr >= d.base && addr < d.addr + d.remaining_bytes() {
                pending = true;
            }
        });
        Ok(pending)
    }

    /// Advance the completion state machine for one raw event id.
    ///
    /// Called once per decoded hardware completion, in interrupt context,
    /// under the same exclusion as the mainline mutators. Out-of-range ids
    /// and events for unregistered channels are dropped silently; an event
    /// for an empty queue is counted as spurious and the latched pending
    /// state is cleared.
    ///
    /// One event acknowledges one block. The head descriptor's remaining
    /// count is decremented and its address advanced by one block; the
    /// hardware is then re-kicked with either the same descriptor (blocks
    /// remaining) or the next queued one (head retired). The returned
    /// [`Completion`], present when a descriptor retired on a channel with
    /// a handler for this direction, must be invoked by the caller.
    #[must_use = "the returned Completion carries the peripheral's handler; invoke it"]
    pub fn dispatch(&mut self, event_id: u32) -> Option<Completion> {
        let event = Event::from_raw(event_id)?;
        let idx = event.channel as usize;
        let config = self.channels[idx]?;

        let Self {
            bus,
            queues,
            pool,
            spurious,
            ..
        } = self;
        let queue = &mut queues[idx][event.direction.index()];

        let Some(head) = queue.head() else {
            // Completion with nothing in flight. Do not touch the pool or
            // any other queue; clear the latched state and move on.
            *spurious = spurious.wrapping_add(1);
            #[cfg(feature = "defmt")]
            defmt::warn!(
                "spurious uDMA completion on channel {} ({})",
                event.channel,
                event.direction
            );
            queue.reset();
            bus.clear_pending(event.channel, event.direction);
            return None;
        };

        let d = pool.get_mut(head);
        d.block_count = d.block_count.saturating_sub(1);
        d.addr += d.block_size as usize;

        if d.block_count > 0 {
            // Multi-block transfer: same head, next window.
            Self::kick(bus, pool, head, event.channel, event.direction);
            return None;
        }

        if let Some(slot) = queue.pop_front(pool) {
            pool.release(slot);
        }
        if let Some(next) = queue.head() {
            Self::kick(bus, pool, next, event.channel, event.direction);
        }

        config.handler(event.direction).map(|handler| Completion {
            channel: event.channel,
            direction: event.direction,
            handler,
        })
    }

    /// Program a descriptor's current window into the hardware slot.
    fn kick(
        bus: &mut B,
        pool: &RequestPool<REQUESTS>,
        slot: usize,
        channel: u32,
        direction: Direction,
    ) {
        let d = pool.get(slot);
        bus.program(channel, direction, d.addr, d.block_size);
    }
}

/// Engine over the memory-mapped GAP8 bus with the default pool size.
pub type Gap8Udma = Udma<crate::hal::Gap8Bus, DEFAULT_REQUESTS>;

// =============================================================================
// Unit Tests
// =============================================================================
