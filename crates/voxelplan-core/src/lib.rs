//! Core types for the block-wise dependency scheduler.
//!
//! This is the leaf crate with zero internal voxelplan dependencies. It
//! defines the integer N-D coordinate and region types, the error
//! taxonomy, the hashing used for stable block ids, and the diagnostic
//! sink trait used throughout the workspace.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod coord;
pub mod diagnostics;
pub mod error;
pub mod hash;
pub mod roi;

pub use coord::Coord;
pub use diagnostics::{DiagnosticEvent, FilterReason, NullDiagnostics, PlanDiagnostics, RecordingDiagnostics};
pub use error::{BlockOutcome, ExecError, PlanError};
pub use roi::Roi;
