//! Vertex cache optimizer - Data-Oriented layout
//!
//! *_data modules hold plain data, *_operations modules transform it.

pub mod analysis_operations;
pub mod batch_operations;
pub mod cache_data;
pub mod cache_operations;
pub mod graph_data;
pub mod graph_operations;
pub mod optimizer_data;
pub mod optimizer_operations;
pub mod score_operations;

pub use analysis_operations::{analyze_vertex_cache, format_indices};
pub use batch_operations::optimize_batch;
pub use cache_data::VertexCacheData;
pub use graph_data::{IncidenceGraph, TriangleId, TriangleNode, VertexId, VertexNode};
pub use optimizer_data::{CacheStatistics, OptimizeReport, OptimizedIndices};
pub use optimizer_operations::{
    optimize_index_range, optimize_indices, optimize_indices_with_config, optimized_indices,
    reorder_triangles, TriangleOrder,
};
