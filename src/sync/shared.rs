//! ISR-safe uDMA wrapper using critical sections.
//!
//! The engine itself is a plain state machine; [`SharedUdma`] adds the
//! exclusion discipline that lets one instance serve peripheral drivers in
//! mainline code and the completion dispatcher in the interrupt handler.

use super::primitives::CriticalSectionCell;
use crate::driver::Udma;
use crate::hal::UdmaBus;

/// ISR-safe uDMA wrapper using critical sections.
///
/// All access goes through `critical_section::with()`, disabling interrupts
/// for the duration of the closure. Completion handlers are deliberately run
/// *outside* the critical section by [`Self::on_interrupt`], so a driver may
/// call back into the engine (for example to submit a follow-up transfer)
/// from its own handler.
///
/// # Example
///
/// ```ignore
/// static UDMA: SharedUdma<Gap8Bus, 8> = SharedUdma::new(unsafe { Gap8Bus::new() });
///
/// UDMA.with(|udma| {
///     udma.register(UDMA_ID_UART, config)
/// })?;
/// ```
pub struct SharedUdma<B, const REQUESTS: usize> {
    inner: CriticalSectionCell<Udma<B, REQUESTS>>,
}

impl<B, const REQUESTS: usize> SharedUdma<B, REQUESTS> {
    /// Create a new shared engine (const, suitable for static initialization).
    pub const fn new(bus: B) -> Self {
        Self {
            inner: CriticalSectionCell::new(Udma::new(bus)),
        }
    }

    /// Execute a closure with exclusive access to the engine.
    ///
    /// Interrupts are disabled for the duration of the closure.
    #[inline]
    pub fn with<R, F>(&self, f: F) -> R
    where
        F: FnOnce(&mut Udma<B, REQUESTS>) -> R,
    {
        self.inner.with(f)
    }

    /// Try to execute a closure, returning `None` if already borrowed.
    #[inline]
    pub fn try_with<R, F>(&self, f: F) -> Option<R>
    where
        F: FnOnce(&mut Udma<B, REQUESTS>) -> R,
    {
        self.inner.try_with(f)
    }
}

impl<B: UdmaBus, const REQUESTS: usize> SharedUdma<B, REQUESTS> {
    /// Interrupt entry point: dispatch one decoded completion event id.
    ///
    /// The queue bookkeeping runs under the critical section; the retired
    /// transfer's completion handler, if any, runs after it is released.
    pub fn on_interrupt(&self, event_id: u32) {
        let completion = self.inner.with(|udma| udma.dispatch(event_id));
        if let Some(completion) = completion {
            completion.invoke();
        }
    }
}
