//! Batch optimization of independent meshes
//!
//! Each mesh gets its own graph and cache on a rayon worker; a single pass is
//! never split across threads.

use super::optimizer_data::OptimizeReport;
use super::optimizer_operations::optimize_indices_with_config;
use crate::config::OptimizerConfig;
use crate::error::OptimizerResult;
use crate::index::MeshIndex;
use rayon::prelude::*;

/// Optimize every index list in place, in parallel
///
/// Results come back in input order. A failing mesh is left untouched and does
/// not stop the others.
pub fn optimize_batch<I: MeshIndex>(
    meshes: &mut [Vec<I>],
    config: &OptimizerConfig,
) -> Vec<OptimizerResult<OptimizeReport>> {
    log::info!("[optimize_batch] Optimizing {} meshes", meshes.len());

    let results: Vec<_> = meshes
        .par_iter_mut()
        .map(|indices| optimize_indices_with_config(indices, config))
        .collect();

    let failed = results.iter().filter(|result| result.is_err()).count();
    if failed > 0 {
        log::warn!("[optimize_batch] {} of {} meshes failed", failed, results.len());
    }

    results
}
