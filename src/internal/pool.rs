//! Fixed-capacity pool of transfer descriptors.
//!
//! All descriptors live in a statically sized arena; queues and the free
//! list thread through them by arena index, never by address. A descriptor
//! is owned by exactly one of {free list, one direction queue} at any time.

/// One logical transfer request: a buffer window moved as `block_count`
/// blocks of `block_size` bytes each.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct TransferDescriptor {
    /// Buffer start as submitted; never advanced
    pub base: usize,
    /// Current buffer address; advanced by one block per completion event
    pub addr: usize,
    /// Size of one block in bytes
    pub block_size: u32,
    /// Remaining blocks to move
    pub block_count: u32,
    /// Arena index of the next descriptor in the owning list
    pub next: Option<usize>,
}

impl TransferDescriptor {
    /// An idle, unlinked descriptor
    pub const IDLE: Self = Self {
        base: 0,
        addr: 0,
        block_size: 0,
        block_count: 0,
        next: None,
    };

    /// Bytes still covered by this descriptor, from `addr` onward
    pub fn remaining_bytes(&self) -> usize {
        (self.block_size as usize) * (self.block_count as usize)
    }
}

/// Arena of `N` reusable transfer descriptors with an index-linked free list.
///
/// `acquire` and `release` are O(1) and never block; an empty pool is
/// reported to the caller, who is expected to retry later.
pub(crate) struct RequestPool<const N: usize> {
    slots: [TransferDescriptor; N],
    free_head: Option<usize>,
    free_count: usize,
}

impl<const N: usize> RequestPool<N> {
    /// Create a pool with every descriptor on the free list.
    pub const fn new() -> Self {
        let mut slots = [TransferDescriptor::IDLE; N];
        let mut i = 0;
        while i + 1 < N {
            slots[i].next = Some(i + 1);
            i += 1;
        }
        Self {
            slots,
            free_head: if N > 0 { Some(0) } else { None },
            free_count: N,
        }
    }

    /// Pool capacity, fixed at build time.
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Number of descriptors currently on the free list.
    pub fn available(&self) -> usize {
        self.free_count
    }

    /// Take a descriptor off the free list, unlinked and zeroed.
    pub fn acquire(&mut self) -> Option<usize> {
        let idx = self.free_head?;
        self.free_head = self.slots[idx].next;
        self.free_count -= 1;
        self.slots[idx] = TransferDescriptor::IDLE;
        Some(idx)
    }

    /// Return a descriptor to the free list.
    ///
    /// The caller must have removed `idx` from any queue first; the slot's
    /// queue link is overwritten here.
    pub fn release(&mut self, idx: usize) {
        self.slots[idx].next = self.free_head;
        self.free_head = Some(idx);
        self.free_count += 1;
    }

    pub fn get(&self, idx: usize) -> &TransferDescriptor {
        &self.slots[idx]
    }

    pub fn get_mut(&mut self, idx: usize) -> &mut TransferDescriptor {
        &mut self.slots[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_pool_is_fully_available() {
        let pool: RequestPool<8> = RequestPool::new();
        assert_eq!(pool.capacity(), 8);
        assert_eq!(pool.available(), 8);
    }

    #[test]
    fn acquire_hands_out_each_slot_once() {
        let mut pool: RequestPool<4> = RequestPool::new();
        let mut seen = [false; 4];
        for _ in 0..4 {
            let idx = pool.acquire().unwrap();
            assert!(!seen[idx], "slot {idx} handed out twice");
            seen[idx] = true;
        }
        assert_eq!(pool.available(), 0);
        assert_eq!(pool.acquire(), None);
    }

    #[test]
    fn release_makes_slot_reusable() {
        let mut pool: RequestPool<2> = RequestPool::new();
        let a = pool.acquire().unwrap();
        let b = pool.acquire().unwrap();
        assert_eq!(pool.acquire(), None);

        pool.release(a);
        assert_eq!(pool.available(), 1);
        let c = pool.acquire().unwrap();
        assert_eq!(c, a);
        assert_ne!(c, b);
    }

    #[test]
    fn acquired_descriptor_is_reset() {
        let mut pool: RequestPool<2> = RequestPool::new();
        let idx = pool.acquire().unwrap();
        {
            let d = pool.get_mut(idx);
            d.addr = 0x1000;
            d.block_size = 64;
            d.block_count = 3;
        }
        pool.release(idx);

        let again = pool.acquire().unwrap();
        assert_eq!(again, idx);
        assert_eq!(*pool.get(again), TransferDescriptor::IDLE);
    }

    #[test]
    fn zero_capacity_pool_is_empty() {
        let mut pool: RequestPool<0> = RequestPool::new();
        assert_eq!(pool.available(), 0);
        assert_eq!(pool.acquire(), None);
    }

    #[test]
    fn remaining_bytes_is_size_times_count() {
        let d = TransferDescriptor {
            base: 0,
            addr: 0,
            block_size: 64,
            block_count: 3,
            next: None,
        };
        assert_eq!(d.remaining_bytes(), 192);
        assert_eq!(TransferDescriptor::IDLE.remaining_bytes(), 0);
    }
}
