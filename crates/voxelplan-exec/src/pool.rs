//! Per-level dispatch-then-join worker pool.
//!
//! One wave at a time: every block whose upstream ids have all been
//! processed becomes ready, the ready set is dispatched across a fixed
//! worker pool, and the next wave only starts once every reply for the
//! current one has been collected. A block is withheld rather than
//! dispatched if any upstream did not reach `Succeeded` or `Skipped`.

use std::collections::HashSet;
use std::panic::{self, AssertUnwindSafe};

use crossbeam_channel::{unbounded, Receiver, Sender};
use indexmap::IndexSet;

use voxelplan_core::diagnostics::{NullDiagnostics, PlanDiagnostics};
use voxelplan_core::error::{BlockOutcome, ExecError};
use voxelplan_region::Block;

use crate::callbacks::BlockCallbacks;
use crate::config::ExecConfig;
use crate::report::Report;

struct WorkItem {
    index: usize,
}

struct WorkResult {
    block_id: u64,
    outcome: BlockOutcome,
    reason: Option<String>,
}

/// Run `graph` to completion, using [`NullDiagnostics`] as the
/// diagnostic sink.
pub fn run_blockwise(
    graph: &[(Block, Vec<Block>)],
    callbacks: &dyn BlockCallbacks,
    config: ExecConfig,
) -> Report {
    run_blockwise_with_diagnostics(graph, callbacks, config, &mut NullDiagnostics)
}

/// Run `graph` to completion, reporting per-block outcomes to
/// `diagnostics` as they are classified.
pub fn run_blockwise_with_diagnostics(
    graph: &[(Block, Vec<Block>)],
    callbacks: &dyn BlockCallbacks,
    config: ExecConfig,
    diagnostics: &mut dyn PlanDiagnostics,
) -> Report {
    let worker_count = config.resolved_worker_count();
    let n = graph.len();

    let upstream_ids: Vec<Vec<u64>> = graph
        .iter()
        .map(|(_, upstream)| upstream.iter().map(Block::block_id).collect())
        .collect();

    let mut unresolved: IndexSet<usize> = (0..n).collect();
    let mut completed_any: HashSet<u64> = HashSet::new();
    let mut completed_good: HashSet<u64> = HashSet::new();
    let mut report = Report::default();

    let (task_tx, task_rx) = unbounded::<WorkItem>();
    let (reply_tx, reply_rx) = unbounded::<WorkResult>();

    std::thread::scope(|scope| {
        for _ in 0..worker_count {
            let worker_task_rx = task_rx.clone();
            let worker_reply_tx = reply_tx.clone();
            scope.spawn(move || worker_loop(worker_task_rx, worker_reply_tx, graph, callbacks));
        }
        drop(task_rx);
        drop(reply_tx);

        loop {
            if unresolved.is_empty() {
                break;
            }

            let ready: Vec<usize> = unresolved
                .iter()
                .copied()
                .filter(|&idx| upstream_ids[idx].iter().all(|id| completed_any.contains(id)))
                .collect();

            if ready.is_empty() {
                for idx in unresolved.drain(..) {
                    let id = graph[idx].0.block_id();
                    report.blocked.push(id);
                    diagnostics.block_blocked(id);
                }
                break;
            }

            let mut dispatch = Vec::with_capacity(ready.len());
            for idx in ready {
                unresolved.swap_remove(&idx);
                let id = graph[idx].0.block_id();
                if upstream_ids[idx].iter().all(|u| completed_good.contains(u)) {
                    dispatch.push(idx);
                } else {
                    completed_any.insert(id);
                    report.blocked.push(id);
                    diagnostics.block_blocked(id);
                }
            }

            for idx in &dispatch {
                task_tx
                    .send(WorkItem { index: *idx })
                    .expect("worker threads outlive the dispatch loop");
            }
            for _ in 0..dispatch.len() {
                let result = reply_rx.recv().expect("a reply for every dispatched block");
                completed_any.insert(result.block_id);
                if matches!(result.outcome, BlockOutcome::Succeeded | BlockOutcome::Skipped) {
                    completed_good.insert(result.block_id);
                }
                diagnostics.block_outcome(result.block_id, result.outcome, result.reason.as_deref());
                if matches!(result.outcome, BlockOutcome::FailedCheck | BlockOutcome::Errored) {
                    report.errors.push(ExecError {
                        block_id: result.block_id,
                        outcome: result.outcome,
                        reason: result.reason.clone().unwrap_or_default(),
                    });
                }
                report.outcomes.push((result.block_id, result.outcome));
            }
        }

        drop(task_tx);
    });

    report
}

fn worker_loop(
    task_rx: Receiver<WorkItem>,
    reply_tx: Sender<WorkResult>,
    graph: &[(Block, Vec<Block>)],
    callbacks: &dyn BlockCallbacks,
) {
    while let Ok(item) = task_rx.recv() {
        let block = &graph[item.index].0;
        let (outcome, reason) = execute_one(block, callbacks);
        let _ = reply_tx.send(WorkResult {
            block_id: block.block_id(),
            outcome,
            reason,
        });
    }
}

fn execute_one(block: &Block, callbacks: &dyn BlockCallbacks) -> (BlockOutcome, Option<String>) {
    if callbacks.pre_check(block) {
        return (BlockOutcome::Skipped, None);
    }

    match panic::catch_unwind(AssertUnwindSafe(|| callbacks.process(block))) {
        Ok(Ok(())) => {
            if callbacks.post_check(block) {
                (BlockOutcome::Succeeded, None)
            } else {
                (
                    BlockOutcome::FailedCheck,
                    Some("post_check returned false".to_string()),
                )
            }
        }
        Ok(Err(reason)) => (BlockOutcome::Errored, Some(reason)),
        Err(payload) => (BlockOutcome::Errored, Some(panic_message(&payload))),
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "process panicked".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;
    use voxelplan_core::Coord;
    use voxelplan_core::Roi;

    fn roi(offset: i64, shape: i64) -> Roi {
        Roi::new(Coord::new([offset]), Coord::new([shape]))
    }

    fn block(total: i64, offset: i64, shape: i64) -> Block {
        Block::new(roi(0, total), roi(offset, shape), roi(offset, shape)).unwrap()
    }

    struct CountingCallbacks {
        order: Mutex<Vec<u64>>,
        calls: AtomicUsize,
    }

    impl BlockCallbacks for CountingCallbacks {
        fn process(&self, b: &Block) -> Result<(), String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.order.lock().unwrap().push(b.block_id());
            Ok(())
        }
    }

    #[test]
    fn all_blocks_succeed_with_no_edges() {
        let a = block(100, 0, 10);
        let b = block(100, 10, 10);
        let graph = vec![(a, vec![]), (b, vec![])];
        let callbacks = CountingCallbacks {
            order: Mutex::new(Vec::new()),
            calls: AtomicUsize::new(0),
        };
        let report = run_blockwise(&graph, &callbacks, ExecConfig::default());
        assert!(report.succeeded());
        assert_eq!(report.count(BlockOutcome::Succeeded), 2);
        assert_eq!(callbacks.calls.load(Ordering::SeqCst), 2);
    }

    struct RiggedCallbacks {
        fail_check_for: u64,
        panic_for: u64,
    }

    impl BlockCallbacks for RiggedCallbacks {
        fn process(&self, b: &Block) -> Result<(), String> {
            if b.block_id() == self.panic_for {
                panic!("boom");
            }
            Ok(())
        }

        fn post_check(&self, b: &Block) -> bool {
            b.block_id() != self.fail_check_for
        }
    }

    #[test]
    fn upstream_failure_blocks_downstream() {
        let base = block(100, 0, 10);
        let downstream = block(100, 10, 10);
        let graph = vec![(base.clone(), vec![]), (downstream.clone(), vec![base.clone()])];
        let callbacks = RiggedCallbacks {
            fail_check_for: base.block_id(),
            panic_for: u64::MAX,
        };
        let report = run_blockwise(&graph, &callbacks, ExecConfig::default());
        assert!(!report.succeeded());
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].outcome, BlockOutcome::FailedCheck);
        assert_eq!(report.blocked, vec![downstream.block_id()]);
    }

    #[test]
    fn panicking_process_is_classified_errored() {
        let a = block(100, 0, 10);
        let graph = vec![(a.clone(), vec![])];
        let callbacks = RiggedCallbacks {
            fail_check_for: u64::MAX,
            panic_for: a.block_id(),
        };
        let report = run_blockwise(&graph, &callbacks, ExecConfig::default());
        assert!(!report.succeeded());
        assert_eq!(report.errors[0].outcome, BlockOutcome::Errored);
    }

    struct AlwaysSkip;

    impl BlockCallbacks for AlwaysSkip {
        fn pre_check(&self, _block: &Block) -> bool {
            true
        }

        fn process(&self, _block: &Block) -> Result<(), String> {
            panic!("should never be called when pre_check skips");
        }
    }

    #[test]
    fn pre_check_true_skips_without_calling_process() {
        let a = block(100, 0, 10);
        let graph = vec![(a, vec![])];
        let report = run_blockwise(&graph, &AlwaysSkip, ExecConfig::default());
        assert!(report.succeeded());
        assert_eq!(report.count(BlockOutcome::Skipped), 1);
    }
}
