//! Per-channel, per-direction FIFO of pending transfer descriptors.
//!
//! The queue stores only head/tail arena indices; the links live in the
//! descriptors themselves ([`super::pool::TransferDescriptor::next`]).
//! Invariant: the head, when present, is exactly the descriptor currently
//! programmed into hardware for that channel and direction.

use super::pool::RequestPool;

/// Intrusive FIFO over the descriptor arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct DirectionQueue {
    head: Option<usize>,
    tail: Option<usize>,
}

impl DirectionQueue {
    pub const fn new() -> Self {
        Self {
            head: None,
            tail: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Arena index of the descriptor occupying the hardware slot, if any.
    pub fn head(&self) -> Option<usize> {
        self.head
    }

    /// Drop all links. Used for the defensive spurious-completion path;
    /// descriptors are not touched.
    pub fn reset(&mut self) {
        self.head = None;
        self.tail = None;
    }

    /// Append a descriptor at the tail. `idx` must be freshly acquired
    /// (unlinked) from the pool.
    pub fn push_back<const N: usize>(&mut self, idx: usize, pool: &mut RequestPool<N>) {
        pool.get_mut(idx).next = None;
        match self.tail {
            Some(tail) => pool.get_mut(tail).next = Some(idx),
            None => self.head = Some(idx),
        }
        self.tail = Some(idx);
    }

    /// Detach and return the head descriptor index. The caller decides
    /// whether to release it back to the pool.
    pub fn pop_front<const N: usize>(&mut self, pool: &mut RequestPool<N>) -> Option<usize> {
        let head = self.head?;
        self.head = pool.get(head).next;
        if self.head.is_none() {
            self.tail = None;
        }
        pool.get_mut(head).next = None;
        Some(head)
    }

    /// Walk the queue front to back, visiting each descriptor index.
    pub fn for_each<const N: usize>(&self, pool: &RequestPool<N>, mut f: impl FnMut(usize)) {
        let mut cursor = self.head;
        while let Some(idx) = cursor {
            cursor = pool.get(idx).next;
            f(idx);
        }
    }
}
