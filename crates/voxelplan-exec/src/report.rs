//! Aggregate results of a [`crate::run_blockwise`] run.

use voxelplan_core::error::{BlockOutcome, ExecError};

/// The result of running a dependency graph through the executor adapter.
#[derive(Clone, Debug, Default)]
pub struct Report {
    /// Every dispatched block's classified outcome, in dispatch order.
    pub outcomes: Vec<(u64, BlockOutcome)>,
    /// Detail for every block that reached `FailedCheck` or `Errored`.
    pub errors: Vec<ExecError>,
    /// Ids of blocks withheld because an upstream block did not reach
    /// `Succeeded` or `Skipped`. These were never dispatched.
    pub blocked: Vec<u64>,
}

impl Report {
    /// Aggregate success: no dispatched block reached `FailedCheck` or
    /// `Errored`.
    pub fn succeeded(&self) -> bool {
        self.errors.is_empty()
    }

    /// The number of dispatched blocks that reached `outcome`.
    pub fn count(&self, outcome: BlockOutcome) -> usize {
        self.outcomes
            .iter()
            .filter(|(_, o)| *o == outcome)
            .count()
    }
}
