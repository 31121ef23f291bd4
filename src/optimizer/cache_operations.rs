//! Vertex Cache Operations - Pure DOP Functions
//!
//! Touching a vertex moves it to the front and pushes everything ahead of its old
//! slot back by one. Every vertex that changes slot is rescored on the spot.

use super::cache_data::VertexCacheData;
use super::graph_data::{IncidenceGraph, VertexId};
use super::score_operations::update_vertex_score;
use crate::config::OptimizerConfig;

/// Create an empty cache with `capacity` slots
pub fn create_vertex_cache(capacity: usize) -> VertexCacheData {
    VertexCacheData {
        slots: vec![None; capacity].into_boxed_slice(),
        occupied: 0,
    }
}

#[inline]
pub fn capacity(cache: &VertexCacheData) -> usize {
    cache.slots.len()
}

/// Slot currently holding `vertex`, if any
pub fn position_of(cache: &VertexCacheData, vertex: VertexId) -> Option<usize> {
    cache.slots[..cache.occupied]
        .iter()
        .position(|&slot| slot == Some(vertex))
}

/// Cached vertices, most recent first
pub fn resident_vertices(cache: &VertexCacheData) -> impl Iterator<Item = VertexId> + '_ {
    cache.slots[..cache.occupied].iter().flatten().copied()
}

/// Move `vertex` to the front of the cache for `round`
///
/// Returns the vertex evicted from the last slot, if the touch pushed one out.
pub fn touch<I>(
    cache: &mut VertexCacheData,
    graph: &mut IncidenceGraph<I>,
    config: &OptimizerConfig,
    vertex: VertexId,
    round: usize,
) -> Option<VertexId> {
    graph.vertices[vertex.index()].round_added = round;

    let slot_count = capacity(cache);
    let (last_moved, evicted) = match position_of(cache, vertex) {
        Some(slot) => (slot, None),
        None if cache.occupied < slot_count => {
            cache.occupied += 1;
            (cache.occupied - 1, None)
        }
        None => (slot_count - 1, cache.slots[slot_count - 1]),
    };

    cache.slots.copy_within(0..last_moved, 1);
    cache.slots[0] = Some(vertex);

    for slot in 0..=last_moved {
        if let Some(moved) = cache.slots[slot] {
            update_vertex_score(graph, config, moved, Some(slot), round);
        }
    }

    if let Some(evicted) = evicted {
        update_vertex_score(graph, config, evicted, None, round);
        log::trace!(
            "[touch] round {}: vertex {} evicted by vertex {}",
            round,
            evicted.index(),
            vertex.index()
        );
    }

    evicted
}
