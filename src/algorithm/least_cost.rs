use crate::{graph::*, priority_queue::PriorityQueue};
use ahash::RandomState;
use std::{
    collections::{HashMap, HashSet},
    fmt::Debug,
    ops::Add,
};
use tracing::{debug, trace};

/// Edge costs usable by [LeastCostPath].
///
/// `Default::default()` is the cost of the empty path.
/// Costs are expected to be non-negative;
/// with negative costs, the returned paths may not be the cheapest.
pub trait Weight: Copy + Ord + Add<Output = Self> + Default + Debug {}

impl<T> Weight for T where T: Copy + Ord + Add<Output = T> + Default + Debug {}

/// A path together with its total cost.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route<V, W> {
    /// Vertices from the start to the destination, both inclusive.
    pub path: Vec<V>,
    pub cost: W,
}

/// Dijkstra's least-cost paths.
///
/// Edges are followed along their directions, i.e., from a vertex to its
/// [successors](QueryableGraph::successors).
/// The cost of an edge is computed by a caller-provided function,
/// which captures whatever context, e.g., a table of weights, it needs.
///
/// ```rust
/// use graphtrek::{algorithm::*, graph::{undirected::*, *}};
/// use std::collections::HashMap;
///
/// let g = UndirectedGraph::from_edges([(1, 2), (2, 3), (1, 3)]).unwrap();
/// let weights = HashMap::from([((1, 2), 1u32), ((2, 3), 1), ((1, 3), 5)]);
/// let route = g
///     .least_cost_route(&1, &3, |e| {
///         let e = e.clone().canonical();
///         weights[&(e.source, e.sink)]
///     })
///     .unwrap();
/// assert_eq!(route.path, vec![1, 2, 3]);
/// assert_eq!(route.cost, 2);
/// ```
pub trait LeastCostPath
where
    Self: QueryableGraph + Sized,
{
    /// The cheapest path from `start` to `dest`, or `None` if `dest` is unreachable.
    fn least_cost_path<W, F>(
        &self,
        start: &Self::Vertex,
        dest: &Self::Vertex,
        cost: F,
    ) -> Option<Vec<Self::Vertex>>
    where
        W: Weight,
        F: FnMut(&Edge<Self::Vertex>) -> W,
    {
        self.least_cost_route(start, dest, cost).map(|r| r.path)
    }

    /// Like [LeastCostPath::least_cost_path], together with the cost of the path.
    fn least_cost_route<W, F>(
        &self,
        start: &Self::Vertex,
        dest: &Self::Vertex,
        cost: F,
    ) -> Option<Route<Self::Vertex, W>>
    where
        W: Weight,
        F: FnMut(&Edge<Self::Vertex>) -> W,
    {
        dijkstra(self, start, dest, cost)
    }
}

impl<G: QueryableGraph> LeastCostPath for G {}

#[tracing::instrument(level = "debug", skip(graph, cost))]
fn dijkstra<G, W, F>(
    graph: &G,
    start: &G::Vertex,
    dest: &G::Vertex,
    mut cost: F,
) -> Option<Route<G::Vertex, W>>
where
    G: QueryableGraph,
    W: Weight,
    F: FnMut(&Edge<G::Vertex>) -> W,
{
    if !graph.contains_vertex(start) {
        debug!("start is not in the graph");
        return None;
    }
    let mut todo = PriorityQueue::new();
    let mut parent: HashMap<G::Vertex, G::Vertex, RandomState> =
        HashMap::with_hasher(RandomState::new());
    let mut visited: HashSet<G::Vertex, RandomState> = HashSet::with_hasher(RandomState::new());
    todo.update(start.clone(), W::default());
    while let Some((cur, cur_cost)) = todo.try_pop_smallest() {
        trace!(vertex = ?cur, cost = ?cur_cost, "settled");
        // `dest` is final only once it is popped
        if cur == *dest {
            let path = unwind(&parent, start, cur);
            debug!(hops = path.len() - 1, cost = ?cur_cost, "found");
            return Some(Route {
                path,
                cost: cur_cost,
            });
        }
        for n in graph.successors(&cur) {
            if visited.contains(&n) || n == cur {
                continue;
            }
            let candidate = cur_cost + cost(&Edge::new(cur.clone(), n.clone()));
            let improves = todo.get(&n).map_or(true, |old| candidate < *old);
            if improves {
                todo.update(n.clone(), candidate);
                parent.insert(n, cur.clone());
            }
        }
        visited.insert(cur);
    }
    debug!(settled = visited.len(), "unreachable");
    None
}

fn unwind<V, S>(parent: &HashMap<V, V, S>, start: &V, dest: V) -> Vec<V>
where
    V: Vertex,
    S: std::hash::BuildHasher,
{
    let mut path = vec![];
    let mut cur = dest;
    loop {
        let next = parent.get(&cur).cloned();
        let at_start = cur == *start;
        path.push(cur);
        match next {
            Some(p) if !at_start => cur = p,
            _ => break,
        }
    }
    path.reverse();
    path
}
