use std::fmt;


/// Handle to a vertex inside one `AdjacencyList`
/// Wraps the creation index: unique per graph, never reused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(pub(crate) usize);

impl VertexId {
    /// Position of the vertex in creation order
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}


/// Node on the graph
/// Immutable once created, the graph only hands out references
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Vertex<T> {
    pub index: usize, // creation index, same value as the VertexId
    pub data: T,
}

impl<T> Vertex<T> {
    pub fn id(&self) -> VertexId {
        VertexId(self.index)
    }
}

impl<T: fmt::Display> fmt::Display for Vertex<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.data)
    }
}


/// Directed connection between two vertices
/// A missing weight marks the edge as non-traversable for shortest paths
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge<W> {
    pub source: VertexId,
    pub destination: VertexId,
    pub weight: Option<W>,
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_id_matches_index() {
        let vertex = Vertex { index: 3, data: "D" };
        assert_eq!(vertex.id(), VertexId(3));
        assert_eq!(vertex.id().index(), 3);
        assert_eq!(vertex.to_string(), "D");
    }

    #[test]
    fn test_edge_equality_includes_weight() {
        let a = Edge { source: VertexId(0), destination: VertexId(1), weight: Some(2.0) };
        let b = Edge { source: VertexId(0), destination: VertexId(1), weight: None };
        assert_ne!(a, b);
        assert_eq!(a, Edge { weight: Some(2.0), ..b });
    }
}
