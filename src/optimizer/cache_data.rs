//! Vertex Cache Data - Pure DOP
//!
//! Fixed-capacity, most-recently-used-first model of the post-transform cache.
//! All transformations happen in cache_operations.rs

use super::graph_data::VertexId;

/// Simulated post-transform cache
///
/// Slots `0..occupied` hold distinct vertices, slot 0 being the most recent.
/// Slots from `occupied` on are always `None`.
#[derive(Debug, Clone)]
pub struct VertexCacheData {
    pub slots: Box<[Option<VertexId>]>,
    pub occupied: usize,
}
