use crate::graph::*;
use ahash::RandomState;
use std::collections::{BTreeMap, BTreeSet, HashSet, VecDeque};
use tracing::debug;

/// Spanning trees, connected components and breadth-first levels.
///
/// Edge directions are ignored: on directed graphs these work on the underlying undirected graph.
pub trait SpanningForest
where
    Self: QueryableGraph + Sized,
{
    /// Edges, in canonical form, of a spanning tree of the component containing `root`.
    ///
    /// The traversal is depth-first.
    /// When there are more than one spanning tree,
    /// which one is returned depends on the order of neighbours.
    /// Together with `root`, the edges form a tree over exactly the vertices reachable from `root`.
    fn spanning_edges(&self, root: &Self::Vertex) -> BTreeSet<Edge<Self::Vertex>> {
        depth_first(self, root).edges
    }

    /// Partitions all vertices into maximal connected components,
    /// sorted by their minimum vertices.
    ///
    /// A vertex without edges is a component by itself.
    fn connected_components(&self) -> Vec<BTreeSet<Self::Vertex>> {
        let mut unaccounted: BTreeSet<Self::Vertex> = self.iter_vertices().cloned().collect();
        let mut components = vec![];
        while let Some(root) = unaccounted.iter().next().cloned() {
            let visited = depth_first(self, &root).visited;
            let component: BTreeSet<_> = visited.into_iter().collect();
            for v in component.iter() {
                unaccounted.remove(v);
            }
            debug!(root = ?root, size = component.len(), "found a connected component");
            components.push(component);
        }
        components.sort_by(|a, b| a.iter().next().cmp(&b.iter().next()));
        components
    }

    /// Breadth-first traversal from `root`, recording levels and tree edges.
    ///
    /// If `root` is not in the graph, the tree is empty and reaches nothing, not even `root`.
    fn breadth_first_tree(&self, root: &Self::Vertex) -> BreadthFirstTree<Self::Vertex> {
        BreadthFirstTree::new(self, root)
    }
}

impl<G: QueryableGraph> SpanningForest for G {}

struct DepthFirst<V> {
    visited: HashSet<V, RandomState>,
    edges: BTreeSet<Edge<V>>,
}

fn depth_first<G>(graph: &G, root: &G::Vertex) -> DepthFirst<G::Vertex>
where
    G: QueryableGraph,
{
    let mut res = DepthFirst {
        visited: HashSet::with_hasher(RandomState::new()),
        edges: BTreeSet::new(),
    };
    let mut todo: Vec<(G::Vertex, Option<Edge<G::Vertex>>)> = vec![(root.clone(), None)];
    while let Some((cur, edge)) = todo.pop() {
        // a vertex can be pushed along several edges before it is visited
        if res.visited.contains(&cur) {
            continue;
        }
        res.visited.insert(cur.clone());
        if let Some(e) = edge {
            res.edges.insert(e.canonical());
        }
        for n in graph.adj_to(&cur) {
            if !res.visited.contains(&n) {
                let e = Edge::new(cur.clone(), n.clone());
                todo.push((n, Some(e)));
            }
        }
    }
    res
}

/// Result of a breadth-first traversal.
#[derive(Debug, Clone)]
pub struct BreadthFirstTree<V> {
    root: V,
    levels: BTreeMap<V, usize>,
    parents: BTreeMap<V, V>,
    edges: Vec<Edge<V>>,
}

impl<V: Vertex> BreadthFirstTree<V> {
    fn new<G>(graph: &G, root: &V) -> Self
    where
        G: QueryableGraph<Vertex = V>,
    {
        let mut res = Self {
            root: root.clone(),
            levels: BTreeMap::new(),
            parents: BTreeMap::new(),
            edges: vec![],
        };
        if !graph.contains_vertex(root) {
            return res;
        }
        res.levels.insert(root.clone(), 0);
        let mut todo = VecDeque::from([root.clone()]);
        while let Some(v) = todo.pop_front() {
            let next_level = res.levels.get(&v).map_or(0, |l| l + 1);
            for w in graph.adj_to(&v) {
                if res.levels.contains_key(&w) {
                    continue;
                }
                res.levels.insert(w.clone(), next_level);
                res.parents.insert(w.clone(), v.clone());
                res.edges.push(Edge::new(v.clone(), w.clone()));
                todo.push_back(w);
            }
        }
        res
    }

    pub fn root(&self) -> &V {
        &self.root
    }

    /// Number of edges on a shortest path from the root to `v`,
    /// or `None` if `v` is unreachable.
    pub fn level(&self, v: &V) -> Option<usize> {
        self.levels.get(v).copied()
    }

    /// All reached vertices with their levels.
    pub fn levels(&self) -> &BTreeMap<V, usize> {
        &self.levels
    }

    /// Tree edges, oriented from parent to child, in the order they were traversed.
    pub fn edges(&self) -> &[Edge<V>] {
        &self.edges
    }

    /// The tree path from the root to `v`.
    pub fn path_to(&self, v: &V) -> Option<Vec<V>> {
        if !self.levels.contains_key(v) {
            return None;
        }
        let mut path = vec![v.clone()];
        let mut cur = v;
        while let Some(parent) = self.parents.get(cur) {
            path.push(parent.clone());
            cur = parent;
        }
        path.reverse();
        Some(path)
    }
}
