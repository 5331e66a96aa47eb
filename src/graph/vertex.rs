use std::{fmt::Debug, hash::Hash};

/// Values usable as vertices.
///
/// A vertex has no identity beyond equality and ordering,
/// so any cheap-to-clone comparable value will do, e.g., integers or strings.
pub trait Vertex: Clone + Ord + Hash + Debug {}

impl<T> Vertex for T where T: Clone + Ord + Hash + Debug {}
