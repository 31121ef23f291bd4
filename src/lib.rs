// Hearth VCache - post-transform vertex cache optimization
//
// Reorders the triangles of an index list so a GPU's post-transform cache
// re-transforms as few vertices as possible (Forsyth's greedy method).
// - optimizer::*_data modules hold plain data
// - optimizer::*_operations modules hold the pure functions over it
//
// Entry points:
// - optimize_indices / optimize_indices_with_config for in-place reordering
// - optimize_index_range for a sub-range of a larger buffer
// - optimized_indices for a reordered copy
// - optimize_batch for many independent meshes on rayon workers

// Constants module
pub mod constants;

// Core modules
pub mod config;
pub mod error;
pub mod index;
pub mod optimizer;

pub use config::OptimizerConfig;
pub use error::{OptimizerError, OptimizerResult, OptionExt};
pub use index::MeshIndex;
pub use optimizer::{
    analyze_vertex_cache, optimize_batch, optimize_index_range, optimize_indices,
    optimize_indices_with_config, optimized_indices, CacheStatistics, OptimizeReport,
    OptimizedIndices,
};
