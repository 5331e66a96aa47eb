use crate::{graph::*, Result};
use std::collections::BTreeSet;

/// Graphs which can be built incrementally.
pub trait GrowableGraph: QueryableGraph + Sized {
    fn new() -> Self;

    /// Adds a vertex. Adding a present vertex changes nothing.
    fn add_vertex(&mut self, v: Self::Vertex);

    /// Adds an edge, together with whichever endpoints are missing.
    /// Adding a present edge changes nothing.
    fn add_edge(&mut self, source: Self::Vertex, sink: Self::Vertex) -> Result<()>;

    /// Builds a graph from an edge list.
    fn from_edges<I>(edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (Self::Vertex, Self::Vertex)>,
    {
        let mut res = Self::new();
        for (source, sink) in edges {
            res.add_edge(source, sink)?;
        }
        Ok(res)
    }
}

/// Read-only access to vertices and edges.
pub trait QueryableGraph {
    type Vertex: Vertex;

    fn num_vertices(&self) -> usize;
    /// Iterates over vertices in ascending order.
    fn iter_vertices(&self) -> Box<dyn Iterator<Item = &Self::Vertex> + '_>;
    fn contains_vertex(&self, v: &Self::Vertex) -> bool;

    fn num_edges(&self) -> usize;
    fn iter_edges(&self) -> Box<dyn Iterator<Item = Edge<Self::Vertex>> + '_>;
    fn contains_edge(&self, source: &Self::Vertex, sink: &Self::Vertex) -> bool;

    /// Vertices sharing an edge with `v`, regardless of edge directions.
    ///
    /// It is empty if `v` is not in the graph.
    fn adj_to(&self, v: &Self::Vertex) -> BTreeSet<Self::Vertex>;

    /// Vertices reachable from `v` along one edge.
    ///
    /// For undirected graphs, this is the same as [QueryableGraph::adj_to].
    fn successors(&self, v: &Self::Vertex) -> BTreeSet<Self::Vertex>;
}

pub trait DirectedOrNot {
    const DIRECTED_OR_NOT: bool;
}
