//! Voxelplan: a block-wise dependency scheduler for chunked N-D
//! volumetric processing.
//!
//! This is the top-level facade crate that re-exports the public API
//! from all voxelplan sub-crates. For most users, adding `voxelplan` as
//! a single dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use voxelplan::prelude::*;
//!
//! let total = Roi::new(Coord::new([0]), Coord::new([100]));
//! let write = Roi::new(Coord::new([10]), Coord::new([10]));
//! let read = Roi::new(Coord::new([0]), Coord::new([30]));
//! let config = PlanConfig::new(total, read, write, Fit::Valid);
//!
//! let graph = plan(&config).unwrap();
//!
//! struct NoOp;
//! impl BlockCallbacks for NoOp {
//!     fn process(&self, _block: &Block) -> Result<(), String> {
//!         Ok(())
//!     }
//! }
//!
//! let report = run_blockwise(&graph, &NoOp, ExecConfig::default());
//! assert!(report.succeeded());
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in
//! the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`core`] | `voxelplan-core` | `Coord`, `Roi`, error types, diagnostic sink |
//! | [`region`] | `voxelplan-region` | `Block` |
//! | [`planner`] | `voxelplan-planner` | `PlanConfig`, `Fit`, `plan()` |
//! | [`exec`] | `voxelplan-exec` | `BlockCallbacks`, `run_blockwise()`, `Report` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Coordinates, regions, error types, and the diagnostic sink
/// (`voxelplan-core`).
pub use voxelplan_core as core;

/// The planned unit of work, `Block` (`voxelplan-region`).
pub use voxelplan_region as region;

/// Level decomposition, fit policy, and `plan()` (`voxelplan-planner`).
pub use voxelplan_planner as planner;

/// The executor adapter and its worker pool (`voxelplan-exec`).
pub use voxelplan_exec as exec;

/// Common imports for typical voxelplan usage.
///
/// ```rust
/// use voxelplan::prelude::*;
/// ```
pub mod prelude {
    pub use voxelplan_core::{Coord, PlanError, Roi};
    pub use voxelplan_exec::{run_blockwise, BlockCallbacks, ExecConfig, Report};
    pub use voxelplan_planner::{plan, Fit, GraphEntry, PlanConfig};
    pub use voxelplan_region::Block;
}
