//! Undirected and directed graphs, and the traversal and path-finding algorithms built on them.
//!
//! # Graphs
//!
//! Vertices are plain values: anything that is `Clone + Ord + Hash + Debug`.
//! There are two graph flavours sharing the same capability traits,
//! [graph::GrowableGraph] and [graph::QueryableGraph]:
//!
//! *   [graph::undirected::UndirectedGraph] stores every edge canonically,
//!     i.e., as `(min, max)`, and rejects self-loops.
//! *   [graph::directed::DirectedGraph] stores per-vertex outgoing adjacency sets.
//!
//! # Algorithms
//!
//! Algorithms are provided as traits with blanket implementations over
//! [graph::QueryableGraph], so they are method calls on any graph:
//!
//! ```rust
//! use graphtrek::{algorithm::*, graph::{undirected::*, *}};
//!
//! let g = UndirectedGraph::from_edges([(1, 2), (2, 3), (4, 5)]).unwrap();
//! let components = g.connected_components();
//! assert_eq!(components.len(), 2);
//! assert_eq!(g.least_cost_path(&1, &3, |_| 1u32), Some(vec![1, 2, 3]));
//! assert_eq!(g.least_cost_path(&1, &5, |_| 1u32), None);
//! ```
//!
//! # Priority queue
//!
//! [priority_queue::PriorityQueue] is a keyed priority queue whose `update` only ever lowers priorities.
//! It is the frontier of the least-cost path search.
pub mod algorithm;
mod error;
pub use self::error::*;
pub mod graph;
pub mod priority_queue;
pub mod roads;
