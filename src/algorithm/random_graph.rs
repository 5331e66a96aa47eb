use crate::{graph::*, GraphError, Result};
use rand::{seq::index, Rng};
use tracing::debug;

/// Maximum number of edges among `n` vertices without self-loops or parallel edges.
pub fn max_edges<G: DirectedOrNot>(n: usize) -> usize {
    let ordered_pairs = n.saturating_mul(n.saturating_sub(1));
    if G::DIRECTED_OR_NOT {
        ordered_pairs
    } else {
        ordered_pairs / 2
    }
}

/// Generates a graph with vertices `0..n` and exactly `m` distinct edges,
/// none of which is a self-loop.
///
/// Randomness comes only from `rng`, so a seeded `rng` reproduces the graph.
/// It fails with [GraphError::InvalidArgument] if `m` exceeds [max_edges].
///
/// ```rust
/// use graphtrek::{algorithm::*, graph::{directed::*, *}};
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let mut rng = StdRng::seed_from_u64(23);
/// let g: DirectedGraph<usize> = random_graph(10, 5, &mut rng).unwrap();
/// assert_eq!(g.num_vertices(), 10);
/// assert_eq!(g.num_edges(), 5);
/// assert!(random_graph::<DirectedGraph<usize>, _>(1, 1, &mut rng).is_err());
/// ```
pub fn random_graph<G, R>(n: usize, m: usize, rng: &mut R) -> Result<G>
where
    G: GrowableGraph<Vertex = usize> + DirectedOrNot,
    R: Rng + ?Sized,
{
    let max = max_edges::<G>(n);
    if m > max {
        return Err(GraphError::InvalidArgument(format!(
            "for {} vertices, {} edges are wanted, but at most {} are possible",
            n, m, max
        )));
    }
    let mut res = G::new();
    for v in 0..n {
        res.add_vertex(v);
    }
    let mut draws = 0usize;
    while res.num_edges() < m {
        let pair = index::sample(rng, n, 2);
        res.add_edge(pair.index(0), pair.index(1))?;
        draws += 1;
    }
    debug!(n, m, draws, "generated a random graph");
    Ok(res)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{directed::*, undirected::*};
    use quickcheck_macros::quickcheck;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn max_edges_of_both_flavours() {
        assert_eq!(max_edges::<DirectedGraph<usize>>(0), 0);
        assert_eq!(max_edges::<DirectedGraph<usize>>(1), 0);
        assert_eq!(max_edges::<DirectedGraph<usize>>(5), 20);
        assert_eq!(max_edges::<UndirectedGraph<usize>>(5), 10);
    }

    #[test]
    fn too_many_edges() {
        let mut rng = StdRng::seed_from_u64(0);
        let res = random_graph::<UndirectedGraph<usize>, _>(5, 11, &mut rng);
        assert!(matches!(res, Err(GraphError::InvalidArgument(_))));
        let res = random_graph::<DirectedGraph<usize>, _>(1, 1, &mut rng);
        assert!(matches!(res, Err(GraphError::InvalidArgument(_))));
    }

    #[test]
    fn complete_graphs() {
        let mut rng = StdRng::seed_from_u64(1);
        let g: UndirectedGraph<usize> = random_graph(5, 10, &mut rng).unwrap();
        assert_eq!(g.num_edges(), 10);
        let g: DirectedGraph<usize> = random_graph(4, 12, &mut rng).unwrap();
        assert_eq!(g.num_edges(), 12);
        assert!(g.iter_edges().all(|e| !e.is_self_loop()));
    }

    #[quickcheck]
    fn exact_sizes(n: u8, m: u8, seed: u64) {
        let n = n as usize % 12;
        let m = m as usize % 40;
        let mut rng = StdRng::seed_from_u64(seed);
        match random_graph::<UndirectedGraph<usize>, _>(n, m, &mut rng) {
            Ok(g) => {
                assert!(m <= max_edges::<UndirectedGraph<usize>>(n));
                assert_eq!(g.num_vertices(), n);
                assert_eq!(g.num_edges(), m);
            }
            Err(_) => assert!(m > max_edges::<UndirectedGraph<usize>>(n)),
        }
    }

    #[quickcheck]
    fn reproducible(seed: u64) {
        let a: DirectedGraph<usize> =
            random_graph(10, 30, &mut StdRng::seed_from_u64(seed)).unwrap();
        let b: DirectedGraph<usize> =
            random_graph(10, 30, &mut StdRng::seed_from_u64(seed)).unwrap();
        assert_eq!(a, b);
    }
}
