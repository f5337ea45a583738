//! Mock [`BlockCallbacks`] implementations for executor adapter tests.
//!
//! - [`CountingCallbacks`] — records dispatch order and count, always
//!   succeeds.
//! - [`FailingCallbacks`] — fails deterministically after N calls.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use voxelplan_exec::BlockCallbacks;
use voxelplan_region::Block;

/// Records every block it processes, in the order `process` was called,
/// and always succeeds.
#[derive(Default)]
pub struct CountingCallbacks {
    order: Mutex<Vec<u64>>,
    calls: AtomicUsize,
}

impl CountingCallbacks {
    /// A fresh recorder with no calls yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// The block ids observed by `process`, in dispatch order.
    pub fn order(&self) -> Vec<u64> {
        self.order.lock().unwrap().clone()
    }

    /// How many times `process` has been called.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl BlockCallbacks for CountingCallbacks {
    fn process(&self, block: &Block) -> Result<(), String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.order.lock().unwrap().push(block.block_id());
        Ok(())
    }
}

/// Succeeds `succeed_count` times, then returns `Err` on every call after.
pub struct FailingCallbacks {
    succeed_count: usize,
    call_count: AtomicUsize,
}

impl FailingCallbacks {
    /// Create a callback set that succeeds `succeed_count` times then
    /// fails.
    pub fn new(succeed_count: usize) -> Self {
        Self {
            succeed_count,
            call_count: AtomicUsize::new(0),
        }
    }

    /// How many times `process` has been called.
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }
}

impl BlockCallbacks for FailingCallbacks {
    fn process(&self, block: &Block) -> Result<(), String> {
        let n = self.call_count.fetch_add(1, Ordering::SeqCst);
        if n < self.succeed_count {
            Ok(())
        } else {
            Err(format!("block {} failed (call {n})", block.block_id()))
        }
    }
}

/// Always reports `pre_check` true, so no block is ever dispatched to
/// `process`.
pub struct AlwaysSkip;

impl BlockCallbacks for AlwaysSkip {
    fn pre_check(&self, _block: &Block) -> bool {
        true
    }

    fn process(&self, _block: &Block) -> Result<(), String> {
        unreachable!("pre_check always returns true")
    }
}
