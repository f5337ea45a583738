//! Error types for the block-wise dependency scheduler.
//!
//! Organized by subsystem: planning (`PlanError`) and execution
//! (`ExecError`), following the same hand-written `Display` + `Error`
//! pattern throughout rather than a derive-macro error crate.

use std::error::Error;
use std::fmt;

use crate::roi::Roi;

/// Errors raised while planning a dependency graph.
///
/// Planning is a pure function over its inputs; these errors are
/// terminal and carry the offending geometry for diagnosis.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlanError {
    /// `read_roi` does not contain `write_roi`, or a write shape
    /// component is zero.
    InvalidGeometry {
        /// The read ROI that was supplied.
        read_roi: Roi,
        /// The write ROI that was supplied.
        write_roi: Roi,
    },
    /// Two `Coord`/`Roi` values participating in the same call disagree
    /// on dimension count.
    DimensionMismatch {
        /// Dimension count of the first operand.
        expected: usize,
        /// Dimension count of the second operand.
        found: usize,
    },
    /// A fit value outside the three named variants (`valid`, `overhang`,
    /// `shrink`) was supplied through a string-configured entry point.
    UnknownFit {
        /// The unrecognised fit name.
        name: String,
    },
}

impl fmt::Display for PlanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGeometry {
                read_roi,
                write_roi,
            } => write!(
                f,
                "invalid geometry: read_roi {read_roi} does not contain write_roi {write_roi}, \
                 or write_roi has a zero-length axis"
            ),
            Self::DimensionMismatch { expected, found } => write!(
                f,
                "dimension mismatch: expected {expected} dimensions, found {found}"
            ),
            Self::UnknownFit { name } => {
                write!(f, "unknown fit policy '{name}' (expected valid, overhang, or shrink)")
            }
        }
    }
}

impl Error for PlanError {}

/// Outcome of dispatching a single block through the executor adapter.
///
/// Mirrors the four-code taxonomy of the adapter contract: `0`
/// (skipped), `1` (succeeded), `-1` (failed-check), `-2` (errored).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlockOutcome {
    /// `pre_check` returned `true`; the block was not run.
    Skipped,
    /// The block ran and `post_check` returned `true`.
    Succeeded,
    /// The block ran without raising but `post_check` returned `false`.
    FailedCheck,
    /// `process` raised or panicked.
    Errored,
}

impl BlockOutcome {
    /// The integer code used by the adapter contract.
    pub fn code(self) -> i32 {
        match self {
            Self::Skipped => 0,
            Self::Succeeded => 1,
            Self::FailedCheck => -1,
            Self::Errored => -2,
        }
    }
}

/// Per-block detail recorded when a block does not reach `Succeeded` or
/// `Skipped`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExecError {
    /// The block's stable id.
    pub block_id: u64,
    /// The classified outcome (`FailedCheck` or `Errored`).
    pub outcome: BlockOutcome,
    /// Description of the failure; the panic payload for `Errored`,
    /// or a fixed message for `FailedCheck`.
    pub reason: String,
}

impl fmt::Display for ExecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "block {} {:?}: {}",
            self.block_id, self.outcome, self.reason
        )
    }
}

impl Error for ExecError {}
