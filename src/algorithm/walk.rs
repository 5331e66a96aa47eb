use crate::graph::*;
use ahash::RandomState;
use rand::{seq::SliceRandom, Rng};
use std::collections::HashMap;
use tracing::debug;

/// Removes cycles from a walk.
///
/// Starting from the first vertex, it repeatedly jumps to just after the last
/// occurrence of the current vertex, so every cycle is skipped.
/// The result keeps the first and the last vertices of `walk`
/// and contains no vertex twice.
///
/// ```rust
/// use graphtrek::algorithm::compress;
///
/// assert_eq!(compress(&[1, 2, 3, 4]), vec![1, 2, 3, 4]);
/// assert_eq!(compress(&[1, 3, 0, 1, 6, 4, 8, 6, 2]), vec![1, 6, 2]);
/// ```
pub fn compress<V: Vertex>(walk: &[V]) -> Vec<V> {
    let mut last_seen: HashMap<&V, usize, RandomState> =
        HashMap::with_capacity_and_hasher(walk.len(), RandomState::new());
    for (i, v) in walk.iter().enumerate() {
        last_seen.insert(v, i);
    }
    let mut res = vec![];
    let mut i = 0;
    while let Some(v) = walk.get(i) {
        res.push(v.clone());
        i = last_seen.get(v).map_or(walk.len(), |last| last + 1);
    }
    res
}

/// Random walks.
pub trait RandomWalk
where
    Self: QueryableGraph + Sized,
{
    /// Walks from `start`, each step to a uniformly chosen neighbour,
    /// until `stop` is reached or `max_steps` steps have been taken.
    ///
    /// Neighbours are those of [QueryableGraph::adj_to],
    /// so on directed graphs a step may go against an edge.
    /// The walk ends early at a vertex without neighbours.
    /// The returned walk starts with `start`,
    /// and ends with `stop` if and only if `stop` was reached.
    fn random_walk<R>(
        &self,
        start: &Self::Vertex,
        stop: &Self::Vertex,
        max_steps: usize,
        rng: &mut R,
    ) -> Vec<Self::Vertex>
    where
        R: Rng + ?Sized,
    {
        let mut walk = vec![start.clone()];
        let mut cur = start.clone();
        while cur != *stop && walk.len() <= max_steps {
            let neighbours: Vec<_> = self.adj_to(&cur).into_iter().collect();
            match neighbours.choose(rng) {
                Some(next) => cur = next.clone(),
                None => {
                    debug!(vertex = ?cur, steps = walk.len() - 1, "stuck without neighbours");
                    break;
                }
            }
            walk.push(cur.clone());
        }
        walk
    }
}

impl<G: QueryableGraph> RandomWalk for G {}
