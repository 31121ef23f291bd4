//! Constants shared by the optimizer, the cache model and the analysis tools.
//!
//! Tuning values follow Forsyth, "Linear-Speed Vertex Cache Optimisation".

/// Index list layout
pub mod index_list {
    /// Indices per triangle in a triangle list
    pub const INDICES_PER_TRIANGLE: usize = 3;
}

/// Simulated post-transform cache and score model
pub mod vertex_cache {
    /// Number of slots in the simulated post-transform cache
    pub const CACHE_CAPACITY: usize = 32;

    /// Largest cache a config may ask for
    pub const MAX_CACHE_CAPACITY: usize = 1024;

    /// Cache score given to the vertices of the triangle emitted this round
    pub const INITIAL_SCORE: f32 = 0.7;

    /// Exponent of the positional cache falloff
    pub const CACHE_SCORE_POWER: f32 = 1.5;

    /// Scale of the valence boost
    pub const VALENCE_BOOST_SCALE: f32 = 2.0;

    /// The valence boost is `scale * valence ^ -power`
    pub const VALENCE_BOOST_POWER: f32 = 0.5;
}

static_assertions::const_assert!(index_list::INDICES_PER_TRIANGLE == 3);
static_assertions::const_assert!(vertex_cache::CACHE_CAPACITY > 0);
static_assertions::const_assert!(vertex_cache::CACHE_CAPACITY <= vertex_cache::MAX_CACHE_CAPACITY);
