//! Vertex score model
//!
//! A vertex is worth more the closer it sits to the front of the cache and the
//! fewer triangles it still has to offer. Powers are evaluated in f64 and narrowed,
//! every sum is f32, so scores are bit-for-bit reproducible.

use super::graph_data::{IncidenceGraph, VertexId};
use super::graph_operations::valence;
use crate::config::OptimizerConfig;

/// Score of a vertex from its state and cache position
///
/// `position` is `None` when the vertex is not cached. `added_this_round` is true
/// for the corners of the triangle emitted in the current round.
pub fn compute_vertex_score(
    config: &OptimizerConfig,
    valence: usize,
    position: Option<usize>,
    added_this_round: bool,
) -> f32 {
    let mut score = match position {
        None => 0.0,
        Some(_) if added_this_round => config.initial_score,
        Some(slot) => {
            let scale = 1.0f32 / config.cache_capacity as f32;
            let falloff = 1.0f32 - slot as f32 * scale;
            (falloff as f64).powf(config.cache_score_power as f64) as f32
        }
    };

    // A vertex without triangles is part of no candidate, so it gets no boost
    // instead of an infinite one.
    if valence > 0 {
        let boost = (valence as f64).powf(-(config.valence_boost_power as f64)) as f32;
        score += config.valence_boost_scale * boost;
    }

    score
}

/// Recompute and store a vertex's score, returning the new value
pub fn update_vertex_score<I>(
    graph: &mut IncidenceGraph<I>,
    config: &OptimizerConfig,
    vertex: VertexId,
    position: Option<usize>,
    round: usize,
) -> f32 {
    let incident = valence(graph, vertex);
    let node = &mut graph.vertices[vertex.index()];
    node.score = compute_vertex_score(config, incident, position, node.round_added == round);
    node.score
}

/// Seed every vertex with its valence-only score
pub fn seed_vertex_scores<I>(graph: &mut IncidenceGraph<I>, config: &OptimizerConfig) {
    for index in 0..graph.vertices.len() {
        update_vertex_score(graph, config, VertexId(index), None, 0);
    }
}
