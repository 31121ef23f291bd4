//! Optimizer Operations - greedy triangle reordering
//!
//! Each round emits the best scoring triangle reachable from the simulated cache,
//! falling back to a scan over every remaining triangle when the cache offers
//! nothing. Ties keep the first candidate seen, so the order of cache slots,
//! incident lists and input triangles decides them.

use super::analysis_operations::{analyze_vertex_cache, format_indices};
use super::cache_data::VertexCacheData;
use super::cache_operations::{create_vertex_cache, resident_vertices, touch};
use super::graph_data::{IncidenceGraph, TriangleId};
use super::graph_operations::{
    build_incidence_graph, detach_triangle, flatten_triangles, remaining_triangles, triangle_score,
};
use super::optimizer_data::{OptimizeReport, OptimizedIndices};
use super::score_operations::seed_vertex_scores;
use crate::config::OptimizerConfig;
use crate::error::{OptimizerError, OptimizerResult, OptionExt};
use crate::index::MeshIndex;

/// Emission order produced by the greedy loop
#[derive(Debug, Clone)]
pub struct TriangleOrder {
    pub triangles: Vec<TriangleId>,
    pub fallback_scans: usize,
}

/// Reorder `indices` in place with the default config
pub fn optimize_indices<I: MeshIndex>(indices: &mut [I]) -> OptimizerResult<OptimizeReport> {
    optimize_indices_with_config(indices, &OptimizerConfig::default())
}

/// Reorder `indices` in place
///
/// On error the slice is left untouched.
pub fn optimize_indices_with_config<I: MeshIndex>(
    indices: &mut [I],
    config: &OptimizerConfig,
) -> OptimizerResult<OptimizeReport> {
    let optimized = optimized_indices(indices, config)?;
    indices.copy_from_slice(&optimized.indices);
    Ok(optimized.report)
}

/// Reorder the `len` indices starting at `offset`, leaving the rest of the buffer alone
pub fn optimize_index_range<I: MeshIndex>(
    indices: &mut [I],
    offset: usize,
    len: usize,
    config: &OptimizerConfig,
) -> OptimizerResult<OptimizeReport> {
    let end = offset
        .checked_add(len)
        .filter(|&end| end <= indices.len())
        .ok_or(OptimizerError::RangeOutOfBounds {
            offset,
            len,
            buffer_len: indices.len(),
        })?;

    optimize_indices_with_config(&mut indices[offset..end], config)
}

/// Produce a reordered copy of `indices`
pub fn optimized_indices<I: MeshIndex>(
    indices: &[I],
    config: &OptimizerConfig,
) -> OptimizerResult<OptimizedIndices<I>> {
    config.validate()?;
    let mut graph = build_incidence_graph(indices)?;

    log::debug!(
        "[optimized_indices] Optimizing {} triangles over {} vertices ({}-byte indices, cache {})",
        graph.triangles.len(),
        graph.vertices.len(),
        I::WIDTH_BYTES,
        config.cache_capacity
    );
    if log::log_enabled!(log::Level::Trace) {
        log::trace!("[optimized_indices] input: {}", format_indices(indices));
    }

    let order = reorder_triangles(&mut graph, config)?;
    let output = flatten_triangles(&graph, &order.triangles);
    if output.len() != indices.len() {
        log::error!(
            "[optimized_indices] Emitted {} indices for an input of {}",
            output.len(),
            indices.len()
        );
        return Err(OptimizerError::invariant(
            "flatten",
            format!("emitted {} indices, expected {}", output.len(), indices.len()),
        ));
    }

    if log::log_enabled!(log::Level::Trace) {
        log::trace!("[optimized_indices] output: {}", format_indices(&output));
    }

    let report = OptimizeReport {
        triangle_count: graph.triangles.len(),
        vertex_count: graph.vertices.len(),
        fallback_scans: order.fallback_scans,
        before: analyze_vertex_cache(indices, config.cache_capacity),
        after: analyze_vertex_cache(&output, config.cache_capacity),
    };

    log::debug!(
        "[optimized_indices] ACMR {:.3} -> {:.3}, {} fallback scans",
        report.before.acmr,
        report.after.acmr,
        report.fallback_scans
    );

    Ok(OptimizedIndices {
        indices: output,
        report,
    })
}

/// Run the greedy loop until every triangle is emitted
pub fn reorder_triangles<I>(
    graph: &mut IncidenceGraph<I>,
    config: &OptimizerConfig,
) -> OptimizerResult<TriangleOrder> {
    config.validate()?;
    seed_vertex_scores(graph, config);

    let mut cache = create_vertex_cache(config.cache_capacity);
    let mut triangles = Vec::with_capacity(graph.triangles.len());
    let mut fallback_scans = 0;
    let mut round = 0;

    while graph.remaining > 0 {
        let best = match select_from_cache(graph, &cache) {
            Some(triangle) => triangle,
            None => {
                fallback_scans += 1;
                let remaining = graph.remaining;
                select_from_remaining(graph)
                    .ok_or_invariant("selection", || {
                        format!("no candidate with {} triangles remaining", remaining)
                    })
                    .map_err(|err| {
                        log::error!("[reorder_triangles] {}", err);
                        err
                    })?
            }
        };

        triangles.push(best);
        detach_triangle(graph, best)?;
        round += 1;

        let corners = graph.triangles[best.index()].vertices;
        for vertex in corners {
            touch(&mut cache, graph, config, vertex, round);
        }

        log::trace!(
            "[reorder_triangles] round {}: emitted triangle {}",
            round,
            best.index()
        );
    }

    if triangles.len() != graph.triangles.len() {
        log::error!(
            "[reorder_triangles] Emitted {} of {} triangles",
            triangles.len(),
            graph.triangles.len()
        );
        return Err(OptimizerError::invariant(
            "completion",
            format!(
                "emitted {} of {} triangles",
                triangles.len(),
                graph.triangles.len()
            ),
        ));
    }

    Ok(TriangleOrder {
        triangles,
        fallback_scans,
    })
}

/// Best triangle incident to a cached vertex, scanning the cache front to back
fn select_from_cache<I>(graph: &IncidenceGraph<I>, cache: &VertexCacheData) -> Option<TriangleId> {
    let candidates = resident_vertices(cache)
        .flat_map(move |vertex| graph.vertices[vertex.index()].triangles.iter().copied());
    best_candidate(graph, candidates)
}

/// Best remaining triangle, scanning in input order
fn select_from_remaining<I>(graph: &IncidenceGraph<I>) -> Option<TriangleId> {
    best_candidate(graph, remaining_triangles(graph))
}

/// First candidate with the strictly highest score
fn best_candidate<I>(
    graph: &IncidenceGraph<I>,
    candidates: impl Iterator<Item = TriangleId>,
) -> Option<TriangleId> {
    let mut best = None;
    let mut best_score = f32::NEG_INFINITY;

    for triangle in candidates {
        let score = triangle_score(graph, triangle);
        if score > best_score {
            best_score = score;
            best = Some(triangle);
        }
    }

    best
}
