//! Incidence Graph Data - Pure DOP
//!
//! NO METHODS beyond handle accessors. Just data.
//! All transformations happen in graph_operations.rs
//!
//! Vertex and triangle records live in flat arenas. Handles are assigned in
//! first-seen order, so walking an arena front to back reproduces input order.

/// Handle of a unique vertex in `IncidenceGraph::vertices`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(pub usize);

/// Handle of a triangle in `IncidenceGraph::triangles`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TriangleId(pub usize);

impl VertexId {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

impl TriangleId {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// One unique index value of the input
#[derive(Debug, Clone)]
pub struct VertexNode<I> {
    /// Original index value written back to the output
    pub value: I,
    /// Last computed score
    pub score: f32,
    /// Round in which this vertex last became the front of the cache
    pub round_added: usize,
    /// Incident triangles not emitted yet, in insertion order
    pub triangles: Vec<TriangleId>,
}

/// One input triple
#[derive(Debug, Clone)]
pub struct TriangleNode {
    /// Corners in original order
    pub vertices: [VertexId; 3],
    pub emitted: bool,
}

/// Vertex <-> triangle incidence for one index list
#[derive(Debug, Clone)]
pub struct IncidenceGraph<I> {
    pub vertices: Vec<VertexNode<I>>,
    pub triangles: Vec<TriangleNode>,
    /// Triangles not emitted yet
    pub remaining: usize,
    /// Every triangle handle below this one has been emitted
    pub first_remaining: usize,
}
