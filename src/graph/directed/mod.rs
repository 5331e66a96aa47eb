//! Directed graphs backed by adjacency sets.

mod adjacency_sets;
pub use self::adjacency_sets::*;
