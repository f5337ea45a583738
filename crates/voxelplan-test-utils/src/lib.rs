//! Test utilities and mock types for voxelplan development.
//!
//! Provides proptest strategies for [`Coord`](voxelplan_core::Coord)/
//! [`Roi`](voxelplan_core::Roi) generation and mock
//! [`BlockCallbacks`](voxelplan_exec::BlockCallbacks) implementations
//! for executor adapter tests.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;
pub mod strategies;

pub use fixtures::{AlwaysSkip, CountingCallbacks, FailingCallbacks};
pub use strategies::{arb_coord, arb_read_write_pair, arb_roi};
