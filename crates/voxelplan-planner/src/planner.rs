//! Top-level entry point: `plan()` assembles the dependency graph.

use voxelplan_core::diagnostics::{NullDiagnostics, PlanDiagnostics};
use voxelplan_core::{Coord, PlanError};
use voxelplan_region::Block;

use crate::cartesian::{arithmetic_progression, product};
use crate::config::PlanConfig;
use crate::fit::{adjust, inclusion};
use crate::level::{conflict_offsets, level_offsets, level_stride};

/// One entry of the emitted dependency graph: a block plus the blocks
/// from strictly earlier levels it depends on.
pub type GraphEntry = (Block, Vec<Block>);

/// Compute the dependency graph for `config`, using [`NullDiagnostics`]
/// as the diagnostic sink.
pub fn plan(config: &PlanConfig) -> Result<Vec<GraphEntry>, PlanError> {
    plan_with_diagnostics(config, &mut NullDiagnostics)
}

/// Compute the dependency graph for `config`, reporting structured
/// events to `diagnostics` as planning proceeds.
pub fn plan_with_diagnostics(
    config: &PlanConfig,
    diagnostics: &mut dyn PlanDiagnostics,
) -> Result<Vec<GraphEntry>, PlanError> {
    config.validate()?;

    let stride = level_stride(&config.read_roi, &config.write_roi)?;
    let offsets = level_offsets(config.write_roi.shape(), &stride);

    let total_shape = config.total_roi.shape().clone();
    let base_offset = (config.total_roi.begin().clone() - config.read_roi.begin().clone())?;

    let mut graph = Vec::new();
    let mut prev_offset: Option<Coord> = None;

    for (level, level_offset) in offsets.iter().enumerate() {
        diagnostics.level_computed(level, level_offset, &stride);

        let conflicts = if config.read_write_conflict {
            match &prev_offset {
                Some(prev) => conflict_offsets(level_offset, prev, &stride)?,
                None => Vec::new(),
            }
        } else {
            Vec::new()
        };
        prev_offset = Some(level_offset.clone());

        let dim_offsets: Vec<Vec<i64>> = level_offset
            .as_slice()
            .iter()
            .zip(total_shape.as_slice().iter())
            .zip(stride.as_slice().iter())
            .map(|((&lo, &shape), &s)| arithmetic_progression(lo, shape, s))
            .collect();
        let block_origins = product(&dim_offsets);

        for origin in &block_origins {
            let global_origin = (origin.clone() + base_offset.clone())?;
            enumerate_one(
                config,
                &global_origin,
                &conflicts,
                level,
                diagnostics,
                &mut graph,
            )?;
        }
    }

    Ok(graph)
}

#[allow(clippy::too_many_arguments)]
fn enumerate_one(
    config: &PlanConfig,
    global_origin: &Coord,
    conflicts: &[Coord],
    level: usize,
    diagnostics: &mut dyn PlanDiagnostics,
    graph: &mut Vec<GraphEntry>,
) -> Result<(), PlanError> {
    let raw_read = config.read_roi.translate(global_origin)?;
    let raw_write = config.write_roi.translate(global_origin)?;
    let candidate = Block::new(config.total_roi.clone(), raw_read.clone(), raw_write.clone())?;

    let (included, reason) = inclusion(&config.total_roi, &candidate, config.fit)?;
    if !included {
        diagnostics.block_filtered(
            level,
            candidate.read_roi(),
            candidate.write_roi(),
            reason.expect("exclusion always carries a reason"),
        );
        return Ok(());
    }

    let mut upstream = Vec::with_capacity(conflicts.len());
    for offset in conflicts {
        let conflict_read = raw_read.translate(offset)?;
        let conflict_write = raw_write.translate(offset)?;
        let conflict_candidate =
            Block::new(config.total_roi.clone(), conflict_read, conflict_write)?;
        let (conflict_included, conflict_reason) =
            inclusion(&config.total_roi, &conflict_candidate, config.fit)?;
        if conflict_included {
            upstream.push(adjust(&config.total_roi, conflict_candidate, config.fit)?);
        } else {
            diagnostics.block_filtered(
                level,
                conflict_candidate.read_roi(),
                conflict_candidate.write_roi(),
                conflict_reason.expect("exclusion always carries a reason"),
            );
        }
    }

    let final_block = adjust(&config.total_roi, candidate, config.fit)?;
    diagnostics.block_emitted(level, final_block.read_roi(), final_block.write_roi());
    graph.push((final_block, upstream));
    Ok(())
}
