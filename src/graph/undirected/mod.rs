//! Undirected graphs with canonically stored edges.

mod tree_backed;
pub use self::tree_backed::*;
