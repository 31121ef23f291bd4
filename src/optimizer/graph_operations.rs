//! Incidence Graph Operations - Pure DOP Functions
//!
//! Build the vertex/triangle arenas from a flat index list, detach emitted
//! triangles and flatten an emission order back into indices.

use super::graph_data::{IncidenceGraph, TriangleId, TriangleNode, VertexId, VertexNode};
use crate::constants::index_list::INDICES_PER_TRIANGLE;
use crate::error::{OptimizerError, OptimizerResult};
use crate::index::MeshIndex;
use rustc_hash::FxHashMap;

/// Build the incidence graph for a triangle list
///
/// Every triple becomes its own triangle node, duplicates included. A triangle is
/// registered on a vertex once per corner that names it.
pub fn build_incidence_graph<I: MeshIndex>(indices: &[I]) -> OptimizerResult<IncidenceGraph<I>> {
    if indices.len() % INDICES_PER_TRIANGLE != 0 {
        return Err(OptimizerError::InvalidIndexCount {
            count: indices.len(),
        });
    }

    let triangle_count = indices.len() / INDICES_PER_TRIANGLE;
    let mut lookup: FxHashMap<I, VertexId> = FxHashMap::default();
    let mut vertices: Vec<VertexNode<I>> = Vec::new();
    let mut triangles = Vec::with_capacity(triangle_count);

    for triple in indices.chunks_exact(INDICES_PER_TRIANGLE) {
        let triangle = TriangleId(triangles.len());
        let mut corners = [VertexId(0); 3];

        for (corner, &value) in corners.iter_mut().zip(triple) {
            let vertex = *lookup.entry(value).or_insert_with(|| {
                vertices.push(VertexNode {
                    value,
                    score: 0.0,
                    round_added: 0,
                    triangles: Vec::new(),
                });
                VertexId(vertices.len() - 1)
            });
            vertices[vertex.index()].triangles.push(triangle);
            *corner = vertex;
        }

        triangles.push(TriangleNode {
            vertices: corners,
            emitted: false,
        });
    }

    log::trace!(
        "[build_incidence_graph] {} triangles over {} unique vertices",
        triangles.len(),
        vertices.len()
    );

    Ok(IncidenceGraph {
        vertices,
        triangles,
        remaining: triangle_count,
        first_remaining: 0,
    })
}

/// Sum of the current scores of a triangle's corners
#[inline]
pub fn triangle_score<I>(graph: &IncidenceGraph<I>, triangle: TriangleId) -> f32 {
    graph.triangles[triangle.index()]
        .vertices
        .iter()
        .fold(0.0f32, |score, vertex| score + graph.vertices[vertex.index()].score)
}

/// Number of incident triangles not emitted yet
#[inline]
pub fn valence<I>(graph: &IncidenceGraph<I>, vertex: VertexId) -> usize {
    graph.vertices[vertex.index()].triangles.len()
}

/// Triangles not emitted yet, in input order
///
/// Starts at `first_remaining`, so the emitted prefix is never walked again.
pub fn remaining_triangles<I>(graph: &IncidenceGraph<I>) -> impl Iterator<Item = TriangleId> + '_ {
    let start = graph.first_remaining;
    graph.triangles[start..]
        .iter()
        .enumerate()
        .filter(|(_, triangle)| !triangle.emitted)
        .map(move |(offset, _)| TriangleId(start + offset))
}

/// Mark a triangle emitted and remove it from its corners' incident lists
///
/// Removal keeps the order of the remaining entries.
pub fn detach_triangle<I>(
    graph: &mut IncidenceGraph<I>,
    triangle: TriangleId,
) -> OptimizerResult<()> {
    let node = &mut graph.triangles[triangle.index()];
    if node.emitted {
        return Err(OptimizerError::invariant(
            "detach",
            format!("triangle {} was already emitted", triangle.index()),
        ));
    }
    node.emitted = true;
    let corners = node.vertices;

    for vertex in corners {
        let incident = &mut graph.vertices[vertex.index()].triangles;
        let position = incident
            .iter()
            .position(|&candidate| candidate == triangle)
            .ok_or_else(|| {
                OptimizerError::invariant(
                    "detach",
                    format!(
                        "triangle {} missing from incident list of vertex {}",
                        triangle.index(),
                        vertex.index()
                    ),
                )
            })?;
        incident.remove(position);
    }

    graph.remaining -= 1;
    while graph
        .triangles
        .get(graph.first_remaining)
        .is_some_and(|node| node.emitted)
    {
        graph.first_remaining += 1;
    }
    Ok(())
}

/// Write the corners of `order` back as a flat index list
pub fn flatten_triangles<I: MeshIndex>(graph: &IncidenceGraph<I>, order: &[TriangleId]) -> Vec<I> {
    let mut indices = Vec::with_capacity(order.len() * INDICES_PER_TRIANGLE);
    for triangle in order {
        for vertex in graph.triangles[triangle.index()].vertices {
            indices.push(graph.vertices[vertex.index()].value);
        }
    }
    indices
}
