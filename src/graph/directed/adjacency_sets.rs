use crate::{graph::*, Result};
use std::collections::{BTreeMap, BTreeSet, VecDeque};

/// A directed graph, stored as a set of outgoing neighbours per vertex.
///
/// `(a, b)` and `(b, a)` are distinct edges and may coexist.
/// Self-loops are allowed.
/// Incoming neighbours are indexed too, so [QueryableGraph::adj_to],
/// which ignores directions, does not have to scan all edges.
///
/// | Operation        | Complexity                                            |
/// | ---------------- | ----------------------------------------------------- |
/// | `add_vertex`     | $O(\log \|V\|)$                                       |
/// | `add_edge`       | $O(\log \|V\|)$                                       |
/// | `num_edges`      | $O(1)$                                                |
/// | `edges`          | $O(\|E\| \log \|E\|)$                                 |
/// | `access_to`      | $O(\log \|V\|)$ to return, amortized $O(1)$ per item  |
/// | `adj_to`         | $O(\log \|V\| + d)$, where $d$ is in- plus out-degree |
#[derive(Clone, PartialEq, Eq)]
pub struct DirectedGraph<V>
where
    V: Vertex,
{
    out_neighbours: BTreeMap<V, BTreeSet<V>>,
    in_neighbours: BTreeMap<V, BTreeSet<V>>,
    edge_size: usize,
}

impl<V: Vertex> DirectedOrNot for DirectedGraph<V> {
    const DIRECTED_OR_NOT: bool = true;
}

impl<V: Vertex> Default for DirectedGraph<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Vertex> std::fmt::Debug for DirectedGraph<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "DirectedGraph {{")?;
        for (v, outs) in self.out_neighbours.iter() {
            writeln!(f, "{:?}:", v)?;
            for w in outs.iter() {
                writeln!(f, "  -> {:?}", w)?;
            }
        }
        writeln!(f, "}}")?;
        Ok(())
    }
}

impl<V: Vertex> DirectedGraph<V> {
    /// Materializes all edges.
    pub fn edges(&self) -> BTreeSet<Edge<V>> {
        self.iter_edges().collect()
    }

    /// Vertices reachable from `v` along one edge.
    pub fn access_to(&self, v: &V) -> Box<dyn Iterator<Item = &V> + '_> {
        match self.out_neighbours.get(v) {
            Some(outs) => Box::new(outs.iter()),
            None => Box::new(std::iter::empty()),
        }
    }

    /// A tree of edges discovered by a breadth-first traversal from `start`.
    ///
    /// Edge directions are ignored while traversing,
    /// and each tree edge is oriented as it was discovered, from the visited vertex to the new one.
    /// The returned tree always contains `start`.
    pub fn spanning_tree(&self, start: &V) -> DirectedGraph<V> {
        let mut visited = BTreeSet::new();
        let mut todo: VecDeque<(V, Option<Edge<V>>)> = VecDeque::new();
        todo.push_back((start.clone(), None));
        let mut tree = DirectedGraph::new();
        tree.add_vertex(start.clone());
        while let Some((cur, edge)) = todo.pop_front() {
            if visited.contains(&cur) {
                continue;
            }
            visited.insert(cur.clone());
            if let Some(e) = edge {
                tree.insert_edge(e.source, e.sink);
            }
            for n in self.adj_to(&cur) {
                if !visited.contains(&n) {
                    let e = Edge::new(cur.clone(), n.clone());
                    todo.push_back((n, Some(e)));
                }
            }
        }
        tree
    }

    fn insert_edge(&mut self, source: V, sink: V) {
        self.add_vertex(source.clone());
        self.add_vertex(sink.clone());
        let fresh = self
            .out_neighbours
            .get_mut(&source)
            .map_or(false, |outs| outs.insert(sink.clone()));
        if fresh {
            if let Some(ins) = self.in_neighbours.get_mut(&sink) {
                ins.insert(source);
            }
            self.edge_size += 1;
        }
    }
}

impl<V: Vertex> GrowableGraph for DirectedGraph<V> {
    fn new() -> Self {
        Self {
            out_neighbours: BTreeMap::new(),
            in_neighbours: BTreeMap::new(),
            edge_size: 0,
        }
    }

    fn add_vertex(&mut self, v: V) {
        if !self.out_neighbours.contains_key(&v) {
            self.out_neighbours.insert(v.clone(), BTreeSet::new());
            self.in_neighbours.insert(v, BTreeSet::new());
        }
    }

    /// Never fails.
    fn add_edge(&mut self, source: V, sink: V) -> Result<()> {
        self.insert_edge(source, sink);
        Ok(())
    }
}

impl<V: Vertex> QueryableGraph for DirectedGraph<V> {
    type Vertex = V;

    fn num_vertices(&self) -> usize {
        self.out_neighbours.len()
    }

    fn iter_vertices(&self) -> Box<dyn Iterator<Item = &V> + '_> {
        Box::new(self.out_neighbours.keys())
    }

    fn contains_vertex(&self, v: &V) -> bool {
        self.out_neighbours.contains_key(v)
    }

    fn num_edges(&self) -> usize {
        self.edge_size
    }

    fn iter_edges(&self) -> Box<dyn Iterator<Item = Edge<V>> + '_> {
        let it = self
            .out_neighbours
            .iter()
            .flat_map(|(src, outs)| outs.iter().map(move |snk| Edge::new(src.clone(), snk.clone())));
        Box::new(it)
    }

    fn contains_edge(&self, source: &V, sink: &V) -> bool {
        self.out_neighbours
            .get(source)
            .map_or(false, |outs| outs.contains(sink))
    }

    fn adj_to(&self, v: &V) -> BTreeSet<V> {
        let mut res = BTreeSet::new();
        if let Some(outs) = self.out_neighbours.get(v) {
            res.extend(outs.iter().cloned());
        }
        if let Some(ins) = self.in_neighbours.get(v) {
            res.extend(ins.iter().cloned());
        }
        res
    }

    fn successors(&self, v: &V) -> BTreeSet<V> {
        self.access_to(v).cloned().collect()
    }
}
