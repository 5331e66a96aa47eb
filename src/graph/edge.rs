use super::Vertex;

/// An edge from `source` to `sink`.
///
/// Undirected graphs only ever hand out edges in canonical form,
/// i.e., `source < sink`.
#[derive(Debug, Clone, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct Edge<V> {
    pub source: V,
    pub sink: V,
}

impl<V: Vertex> Edge<V> {
    pub fn new(source: V, sink: V) -> Self {
        Self { source, sink }
    }

    /// The same edge with endpoints ordered as `(min, max)`.
    pub fn canonical(self) -> Self {
        if self.sink < self.source {
            self.reversed()
        } else {
            self
        }
    }

    pub fn reversed(self) -> Self {
        Self {
            source: self.sink,
            sink: self.source,
        }
    }

    pub fn is_self_loop(&self) -> bool {
        self.source == self.sink
    }

    /// Whether `v` is either endpoint.
    pub fn touches(&self, v: &V) -> bool {
        self.source == *v || self.sink == *v
    }
}

impl<V: Vertex> From<(V, V)> for Edge<V> {
    fn from((source, sink): (V, V)) -> Self {
        Self::new(source, sink)
    }
}

impl<V> From<Edge<V>> for (V, V) {
    fn from(e: Edge<V>) -> Self {
        (e.source, e.sink)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    #[test]
    fn canonical_orders_endpoints() {
        assert_eq!(Edge::new(2, 1).canonical(), Edge::new(1, 2));
        assert_eq!(Edge::new(1, 2).canonical(), Edge::new(1, 2));
    }

    #[quickcheck]
    fn canonical_is_orientation_free(x: u8, y: u8) {
        let a = Edge::new(x, y).canonical();
        let b = Edge::new(y, x).canonical();
        assert_eq!(a, b);
        assert!(a.source <= a.sink);
    }
}
