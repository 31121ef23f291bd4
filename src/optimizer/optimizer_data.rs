//! Optimizer Data - Pure DOP
//!
//! Results handed back to callers. No behaviour lives here.

use serde::Serialize;

/// Replay of an index list through an LRU post-transform cache
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct CacheStatistics {
    pub triangle_count: usize,
    pub unique_vertices: usize,
    /// Vertices transformed, i.e. cache misses
    pub vertices_transformed: usize,
    /// Average cache miss ratio: misses per triangle
    pub acmr: f32,
    /// Average transform to vertex ratio: misses per unique vertex
    pub atvr: f32,
}

/// Summary of one optimization pass
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct OptimizeReport {
    pub triangle_count: usize,
    pub vertex_count: usize,
    /// Rounds where no cached vertex offered a triangle and every remaining
    /// triangle had to be scanned
    pub fallback_scans: usize,
    pub before: CacheStatistics,
    pub after: CacheStatistics,
}

/// A reordered copy of an index list
#[derive(Debug, Clone, PartialEq)]
pub struct OptimizedIndices<I> {
    pub indices: Vec<I>,
    pub report: OptimizeReport,
}
