//! Structured diagnostic sink.
//!
//! Replaces a module-level logger with an injected collaborator: the
//! planner calls into a `&mut dyn PlanDiagnostics` (or the no-op
//! [`NullDiagnostics`] default) rather than holding any logging state
//! of its own.

use crate::error::BlockOutcome;
use crate::roi::Roi;

/// Why a candidate block was excluded from the graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterReason {
    /// `total_roi` does not contain the candidate's read ROI (`valid` fit).
    ReadOutsideTotal,
    /// `total_roi` does not contain the candidate's write-ROI begin
    /// (`overhang`/`shrink` fit).
    WriteBeginOutsideTotal,
    /// `shrink` fit would leave a zero-extent axis in the write ROI.
    ShrinkWouldCollapse,
}

/// Structured events emitted by the planner in place of log lines.
pub trait PlanDiagnostics {
    /// A level's stride and starting offset have been computed.
    fn level_computed(&mut self, _level: usize, _offset: &crate::coord::Coord, _stride: &crate::coord::Coord) {}

    /// A candidate block was included in the graph.
    fn block_emitted(&mut self, _level: usize, _read_roi: &Roi, _write_roi: &Roi) {}

    /// A candidate block was excluded by the fit policy.
    fn block_filtered(&mut self, _level: usize, _read_roi: &Roi, _write_roi: &Roi, _reason: FilterReason) {}

    /// The executor adapter classified a dispatched block's outcome.
    fn block_outcome(&mut self, _block_id: u64, _outcome: BlockOutcome, _reason: Option<&str>) {}

    /// The executor adapter withheld a block because not all of its
    /// upstream blocks reached `Succeeded` or `Skipped`.
    fn block_blocked(&mut self, _block_id: u64) {}
}

/// A [`PlanDiagnostics`] implementation that discards every event.
///
/// The default collaborator when the caller does not need planning
/// telemetry.
#[derive(Default)]
pub struct NullDiagnostics;

impl PlanDiagnostics for NullDiagnostics {}

/// A [`PlanDiagnostics`] implementation that records every event in
/// order, for tests and debugging.
#[derive(Default)]
pub struct RecordingDiagnostics {
    /// Events recorded so far, in emission order.
    pub events: Vec<DiagnosticEvent>,
}

/// A single recorded diagnostic event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DiagnosticEvent {
    /// See [`PlanDiagnostics::level_computed`].
    LevelComputed {
        /// The level index.
        level: usize,
        /// The level's starting offset.
        offset: crate::coord::Coord,
        /// The level stride.
        stride: crate::coord::Coord,
    },
    /// See [`PlanDiagnostics::block_emitted`].
    BlockEmitted {
        /// The level index.
        level: usize,
        /// The block's read ROI.
        read_roi: Roi,
        /// The block's write ROI.
        write_roi: Roi,
    },
    /// See [`PlanDiagnostics::block_filtered`].
    BlockFiltered {
        /// The level index.
        level: usize,
        /// The candidate's read ROI.
        read_roi: Roi,
        /// The candidate's write ROI.
        write_roi: Roi,
        /// Why the candidate was excluded.
        reason: FilterReason,
    },
    /// See [`PlanDiagnostics::block_outcome`].
    BlockOutcome {
        /// The block's stable id.
        block_id: u64,
        /// The classified outcome.
        outcome: BlockOutcome,
        /// Failure detail, present for `FailedCheck`/`Errored`.
        reason: Option<String>,
    },
    /// See [`PlanDiagnostics::block_blocked`].
    BlockBlocked {
        /// The block's stable id.
        block_id: u64,
    },
}

impl PlanDiagnostics for RecordingDiagnostics {
    fn level_computed(&mut self, level: usize, offset: &crate::coord::Coord, stride: &crate::coord::Coord) {
        self.events.push(DiagnosticEvent::LevelComputed {
            level,
            offset: offset.clone(),
            stride: stride.clone(),
        });
    }

    fn block_emitted(&mut self, level: usize, read_roi: &Roi, write_roi: &Roi) {
        self.events.push(DiagnosticEvent::BlockEmitted {
            level,
            read_roi: read_roi.clone(),
            write_roi: write_roi.clone(),
        });
    }

    fn block_filtered(&mut self, level: usize, read_roi: &Roi, write_roi: &Roi, reason: FilterReason) {
        self.events.push(DiagnosticEvent::BlockFiltered {
            level,
            read_roi: read_roi.clone(),
            write_roi: write_roi.clone(),
            reason,
        });
    }

    fn block_outcome(&mut self, block_id: u64, outcome: BlockOutcome, reason: Option<&str>) {
        self.events.push(DiagnosticEvent::BlockOutcome {
            block_id,
            outcome,
            reason: reason.map(str::to_string),
        });
    }

    fn block_blocked(&mut self, block_id: u64) {
        self.events.push(DiagnosticEvent::BlockBlocked { block_id });
    }
}
