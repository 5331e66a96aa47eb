use crate::{graph::*, GraphError, Result};
use std::collections::{BTreeMap, BTreeSet};

/// An undirected graph without self-loops or parallel edges.
///
/// Every edge is stored once, in its canonical form `(min, max)`,
/// so adding `(x, y)` and `(y, x)` results in the same edge.
/// An adjacency index is kept alongside the edge set.
///
/// | Operation        | Complexity                                   |
/// | ---------------- | -------------------------------------------- |
/// | `add_vertex`     | $O(\log \|V\|)$                              |
/// | `add_edge`       | $O(\log \|V\| + \log \|E\|)$                 |
/// | `num_vertices`   | $O(1)$                                       |
/// | `num_edges`      | $O(1)$                                       |
/// | `contains_edge`  | $O(\log \|E\|)$                              |
/// | `adj_to`         | $O(\log \|V\| + d)$, where $d$ is the degree |
#[derive(Clone, PartialEq, Eq)]
pub struct UndirectedGraph<V>
where
    V: Vertex,
{
    vertices: BTreeSet<V>,
    edges: BTreeSet<Edge<V>>,
    adjacency: BTreeMap<V, BTreeSet<V>>,
}

impl<V: Vertex> DirectedOrNot for UndirectedGraph<V> {
    const DIRECTED_OR_NOT: bool = false;
}

impl<V: Vertex> Default for UndirectedGraph<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Vertex> std::fmt::Debug for UndirectedGraph<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "UndirectedGraph {{")?;
        for v in self.vertices.iter() {
            writeln!(f, "{:?}:", v)?;
            for w in self.adjacency.get(v).into_iter().flatten() {
                writeln!(f, "  -- {:?}", w)?;
            }
        }
        writeln!(f, "}}")?;
        Ok(())
    }
}

impl<V: Vertex> UndirectedGraph<V> {
    /// All vertices. This is a view; the graph cannot be modified through it.
    pub fn get_vertices(&self) -> &BTreeSet<V> {
        &self.vertices
    }

    /// All edges, each in its canonical form.
    pub fn get_edges(&self) -> &BTreeSet<Edge<V>> {
        &self.edges
    }
}

impl<V: Vertex> GrowableGraph for UndirectedGraph<V> {
    fn new() -> Self {
        Self {
            vertices: BTreeSet::new(),
            edges: BTreeSet::new(),
            adjacency: BTreeMap::new(),
        }
    }

    fn add_vertex(&mut self, v: V) {
        if self.vertices.insert(v.clone()) {
            self.adjacency.insert(v, BTreeSet::new());
        }
    }

    /// Fails with [GraphError::InvalidEdge] on self-loops, leaving the graph unchanged.
    fn add_edge(&mut self, source: V, sink: V) -> Result<()> {
        let edge = Edge::new(source, sink);
        if edge.is_self_loop() {
            return Err(GraphError::InvalidEdge(format!("{:?}", edge.source)));
        }
        let edge = edge.canonical();
        self.add_vertex(edge.source.clone());
        self.add_vertex(edge.sink.clone());
        if let Some(adj) = self.adjacency.get_mut(&edge.source) {
            adj.insert(edge.sink.clone());
        }
        if let Some(adj) = self.adjacency.get_mut(&edge.sink) {
            adj.insert(edge.source.clone());
        }
        self.edges.insert(edge);
        Ok(())
    }
}

impl<V: Vertex> QueryableGraph for UndirectedGraph<V> {
    type Vertex = V;

    fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    fn iter_vertices(&self) -> Box<dyn Iterator<Item = &V> + '_> {
        Box::new(self.vertices.iter())
    }

    fn contains_vertex(&self, v: &V) -> bool {
        self.vertices.contains(v)
    }

    fn num_edges(&self) -> usize {
        self.edges.len()
    }

    fn iter_edges(&self) -> Box<dyn Iterator<Item = Edge<V>> + '_> {
        Box::new(self.edges.iter().cloned())
    }

    fn contains_edge(&self, source: &V, sink: &V) -> bool {
        self.adjacency
            .get(source)
            .map_or(false, |adj| adj.contains(sink))
    }

    fn adj_to(&self, v: &V) -> BTreeSet<V> {
        self.adjacency.get(v).cloned().unwrap_or_default()
    }

    fn successors(&self, v: &V) -> BTreeSet<V> {
        self.adj_to(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    #[test]
    fn add_edge_adds_endpoints() {
        let mut g = UndirectedGraph::new();
        g.add_edge(2, 1).unwrap();
        assert_eq!(g.get_vertices(), &BTreeSet::from([1, 2]));
        assert_eq!(g.get_edges(), &BTreeSet::from([Edge::new(1, 2)]));
    }

    #[test]
    fn self_loops_are_rejected() {
        let mut g = UndirectedGraph::new();
        g.add_vertex(3);
        let res = g.add_edge(3, 3);
        assert!(matches!(res, Err(GraphError::InvalidEdge(_))));
        assert_eq!(g.num_vertices(), 1);
        assert_eq!(g.num_edges(), 0);
    }

    #[test]
    fn adj_to() {
        let g = UndirectedGraph::from_edges([(1, 2), (1, 3), (4, 2)]).unwrap();
        assert_eq!(g.adj_to(&1), BTreeSet::from([2, 3]));
        assert_eq!(g.adj_to(&2), BTreeSet::from([1, 4]));
        assert_eq!(g.adj_to(&7), BTreeSet::new());
    }

    #[test]
    fn from_edges() {
        let g = UndirectedGraph::from_edges([(1, 2), (3, 1)]).unwrap();
        assert_eq!(g.get_vertices(), &BTreeSet::from([1, 2, 3]));
        assert_eq!(
            g.get_edges(),
            &BTreeSet::from([Edge::new(1, 2), Edge::new(1, 3)])
        );
        assert!(UndirectedGraph::from_edges([(1, 2), (2, 2)]).is_err());
    }

    #[quickcheck]
    fn either_orientation_is_one_edge(ops: Ops, x: u8, y: u8) {
        if x == y {
            return;
        }
        let mut g: UndirectedGraph<usize> = ops.build();
        let (x, y) = (x as usize, y as usize);
        g.add_edge(x, y).unwrap();
        let n = g.num_edges();
        g.add_edge(y, x).unwrap();
        g.add_edge(x, y).unwrap();
        assert_eq!(g.num_edges(), n);
        assert!(g.get_edges().contains(&Edge::new(x.min(y), x.max(y))));
        assert!(g.contains_edge(&x, &y));
        assert!(g.contains_edge(&y, &x));
    }

    #[quickcheck]
    fn adjacency_index_agrees_with_edge_scan(ops: Ops) {
        let g: UndirectedGraph<usize> = ops.build();
        for v in g.iter_vertices() {
            let oracle: BTreeSet<_> = g
                .iter_edges()
                .filter(|e| e.touches(v))
                .map(|e| if e.source == *v { e.sink } else { e.source })
                .collect();
            assert_eq!(g.adj_to(v), oracle);
        }
    }

    #[quickcheck]
    fn edges_are_canonical(ops: Ops) {
        let g: UndirectedGraph<usize> = ops.build();
        for e in g.iter_edges() {
            assert!(e.source < e.sink);
            assert!(g.contains_vertex(&e.source));
            assert!(g.contains_vertex(&e.sink));
        }
    }
}
