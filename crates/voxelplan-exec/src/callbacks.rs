//! The executor adapter's user-supplied callback contract.

use voxelplan_region::Block;

/// Callbacks invoked by [`crate::run_blockwise`] for each dispatched block.
///
/// Implementations must be safe to call from any worker thread: `process`
/// is the only callback expected to do real work, and the adapter never
/// calls two callbacks for the same block concurrently.
pub trait BlockCallbacks: Send + Sync {
    /// Returns `true` if `block` was already completed in an earlier run
    /// and should be skipped. Default: always `false`.
    fn pre_check(&self, _block: &Block) -> bool {
        false
    }

    /// Perform the block's work. An `Err` is classified as `Errored`.
    fn process(&self, block: &Block) -> Result<(), String>;

    /// Returns `true` if `block`'s completion is verified. Default:
    /// always `true`.
    fn post_check(&self, _block: &Block) -> bool {
        true
    }
}
