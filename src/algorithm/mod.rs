//! Graph algorithms
mod spanning;
pub use self::spanning::*;
mod least_cost;
pub use self::least_cost::*;
mod walk;
pub use self::walk::*;
mod random_graph;
pub use self::random_graph::*;
pub mod graphviz;
