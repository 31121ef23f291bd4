//! Cache analysis for index lists
//!
//! Replays indices through a plain LRU cache, the way a post-transform cache
//! would see them, to measure how many vertices get transformed.

use super::optimizer_data::CacheStatistics;
use crate::constants::index_list::INDICES_PER_TRIANGLE;
use crate::index::MeshIndex;
use rustc_hash::FxHashSet;
use std::collections::VecDeque;

/// Count cache misses for `indices` with an LRU cache of `cache_capacity` entries
pub fn analyze_vertex_cache<I: MeshIndex>(indices: &[I], cache_capacity: usize) -> CacheStatistics {
    let mut cache: VecDeque<I> = VecDeque::with_capacity(cache_capacity + 1);
    let mut unique: FxHashSet<I> = FxHashSet::default();
    let mut misses = 0usize;

    for &index in indices {
        unique.insert(index);
        match cache.iter().position(|&cached| cached == index) {
            Some(slot) => {
                cache.remove(slot);
            }
            None => misses += 1,
        }
        cache.push_front(index);
        cache.truncate(cache_capacity);
    }

    let triangle_count = indices.len() / INDICES_PER_TRIANGLE;
    let unique_vertices = unique.len();

    CacheStatistics {
        triangle_count,
        unique_vertices,
        vertices_transformed: misses,
        acmr: ratio(misses, triangle_count),
        atvr: ratio(misses, unique_vertices),
    }
}

fn ratio(numerator: usize, denominator: usize) -> f32 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f32 / denominator as f32
    }
}

/// Space separated index values, for logging
pub fn format_indices<I: MeshIndex>(indices: &[I]) -> String {
    indices
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_list() {
        let stats = analyze_vertex_cache::<u16>(&[], 32);
        assert_eq!(stats, CacheStatistics::default());
    }

    #[test]
    fn test_single_triangle() {
        let stats = analyze_vertex_cache::<u16>(&[0, 1, 2], 32);
        assert_eq!(stats.vertices_transformed, 3);
        assert_eq!(stats.acmr, 3.0);
        assert_eq!(stats.atvr, 1.0);
    }

    #[test]
    fn test_repeated_triangle_hits() {
        let stats = analyze_vertex_cache::<u32>(&[0, 1, 2, 0, 1, 2], 32);
        assert_eq!(stats.vertices_transformed, 3);
        assert_eq!(stats.acmr, 1.5);
    }

    #[test]
    fn test_small_cache_evicts_least_recent() {
        // With 3 slots, vertex 0 is gone by the time it comes back
        let stats = analyze_vertex_cache::<u16>(&[0, 1, 2, 3, 1, 2, 0, 1, 2], 3);
        assert_eq!(stats.vertices_transformed, 5);
        assert_eq!(stats.unique_vertices, 4);

        // Recency is refreshed on hits: 1 and 2 stay resident
        let stats = analyze_vertex_cache::<u16>(&[0, 1, 2, 1, 2, 3, 1, 2, 4], 3);
        assert_eq!(stats.vertices_transformed, 5);
    }

    #[test]
    fn test_format_indices() {
        assert_eq!(format_indices::<u16>(&[0, 1, 2, 2, 1, 3]), "0 1 2 2 1 3");
        assert_eq!(format_indices::<u32>(&[]), "");
    }
}
