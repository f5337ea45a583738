//! Block type: the unit of work the planner emits.
//!
//! Builds on [`voxelplan_core`]'s `Coord`/`Roi`/error types the way this
//! workspace's spatial crates build on its core crate.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod block;

pub use block::Block;
