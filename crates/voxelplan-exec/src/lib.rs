//! Executor adapter: runs a dependency graph through a small worker
//! pool, one wave at a time, classifying each block into the
//! four-code outcome taxonomy.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod callbacks;
pub mod config;
pub mod pool;
pub mod report;

pub use callbacks::BlockCallbacks;
pub use config::ExecConfig;
pub use pool::{run_blockwise, run_blockwise_with_diagnostics};
pub use report::Report;
