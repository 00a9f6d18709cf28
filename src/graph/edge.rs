use super::VertexId;

/// ID for edges, which are essentially `usize`.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct EdgeId(pub usize);

/// A factory to generate `EdgeId` uniquely within one graph.
#[derive(Clone)]
pub struct EdgeIdFactory(usize);

/// Information about a low-level edge.
///
/// The weight rides along for bookkeeping only. Edges compare, order and
/// hash on `(source, sink, id)`; the weight never participates, so a
/// reweighted edge is still the same edge.
#[derive(Debug, Clone)]
pub struct Edge {
    pub id: EdgeId,
    pub source: VertexId,
    pub sink: VertexId,
    pub weight: f64,
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.source == other.source && self.sink == other.sink
    }
}

impl Eq for Edge {}

impl PartialOrd for Edge {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Edge {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.source, self.sink, self.id).cmp(&(other.source, other.sink, other.id))
    }
}

impl std::hash::Hash for Edge {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        (self.id, self.source, self.sink).hash(state);
    }
}

impl Default for EdgeIdFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl EdgeIdFactory {
    pub fn new() -> Self {
        Self(0)
    }

    pub fn one_more(&mut self) -> EdgeId {
        let cur = self.0;
        self.0 += 1;
        EdgeId(cur)
    }
}

impl EdgeId {
    pub const MIN: EdgeId = EdgeId(0);
    pub const MAX: EdgeId = EdgeId(usize::MAX);

    pub fn new(x: usize) -> Self {
        Self(x)
    }

    pub fn to_raw(&self) -> usize {
        self.0
    }

    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weight_does_not_affect_identity() {
        let a = Edge {
            id: EdgeId(0),
            source: VertexId(1),
            sink: VertexId(2),
            weight: 1.0,
        };
        let b = Edge { weight: 7.5, ..a.clone() };
        assert_eq!(a, b);
        assert_eq!(a.cmp(&b), std::cmp::Ordering::Equal);
    }

    #[test]
    fn edges_order_by_endpoints_first() {
        let a = Edge {
            id: EdgeId(9),
            source: VertexId(0),
            sink: VertexId(5),
            weight: 1.0,
        };
        let b = Edge {
            id: EdgeId(0),
            source: VertexId(1),
            sink: VertexId(0),
            weight: 1.0,
        };
        assert!(a < b);
    }
}
