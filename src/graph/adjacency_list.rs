use crate::errors::GraphError;
use super::{Edge, Vertex, VertexId};

use std::fmt;
use num_traits::Zero;
use tracing::debug;


/// Directed weighted graph stored as an adjacency list
/// Vertices live in an arena indexed by their creation index,
/// each vertex owns its outgoing edges in insertion order
#[derive(Debug, Clone)]
pub struct AdjacencyList<T, W> {
    vertices: Vec<Vertex<T>>,
    adjacencies: Vec<Vec<Edge<W>>>, // adjacencies[i] = outgoing edges of vertex i
}

impl<T, W> AdjacencyList<T, W> {

    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            adjacencies: Vec::new(),
        }
    }

    /// Add a vertex with an empty edge list
    /// No duplicate detection on `data`
    pub fn create_vertex(&mut self, data: T) -> VertexId {
        let index = self.vertices.len();
        self.vertices.push(Vertex { index, data });
        self.adjacencies.push(Vec::new());
        VertexId(index)
    }

    pub fn vertex(&self, id: VertexId) -> Option<&Vertex<T>> {
        self.vertices.get(id.0)
    }

    /// All vertices in creation order
    pub fn vertices(&self) -> &[Vertex<T>] {
        &self.vertices
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacencies.iter().map(Vec::len).sum()
    }

    /// Outgoing edges in insertion order
    /// Unknown vertices have no edges
    pub fn edges(&self, from: VertexId) -> &[Edge<W>] {
        self.adjacencies.get(from.0).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Check the handle was issued by this graph
    fn check_vertex(&self, id: VertexId) -> Result<(), GraphError> {
        if id.0 < self.vertices.len() {
            Ok(())
        } else {
            Err(GraphError::UnknownVertex { index: id.0, vertex_count: self.vertices.len() })
        }
    }
}

impl<T: PartialEq, W> AdjacencyList<T, W> {

    /// First vertex carrying `data`
    pub fn find_vertex(&self, data: &T) -> Option<VertexId> {
        self.vertices.iter().find(|v| &v.data == data).map(Vertex::id)
    }
}

impl<T, W> AdjacencyList<T, W>
where
    W: Zero + Copy + PartialOrd,
{

    /// Append an edge to the source's outgoing list
    /// Both vertices must come from this graph and the weight must be >= 0 when present
    pub fn add_directed_edge(&mut self, source: VertexId, destination: VertexId, weight: Option<W>) -> Result<(), GraphError> {
        self.check_edge(source, destination, weight)?;
        self.push_edge(source, destination, weight);
        Ok(())
    }

    /// Add source -> destination and destination -> source with the same weight
    /// Validated up front so either both directions are stored or neither is
    pub fn add_undirected_edge(&mut self, source: VertexId, destination: VertexId, weight: Option<W>) -> Result<(), GraphError> {
        self.check_edge(source, destination, weight)?;
        self.push_edge(source, destination, weight);
        self.push_edge(destination, source, weight);
        Ok(())
    }

    /// Weight of the first edge from `from` to `to`
    /// Parallel edges after the first are not visible here
    pub fn weight(&self, from: VertexId, to: VertexId) -> Option<W> {
        self.edges(from)
            .iter()
            .find(|edge| edge.destination == to)
            .and_then(|edge| edge.weight)
    }

    fn check_edge(&self, source: VertexId, destination: VertexId, weight: Option<W>) -> Result<(), GraphError> {
        let checked = self.check_vertex(source)
            .and_then(|_| self.check_vertex(destination))
            .and_then(|_| match weight {
                // `!(w >= 0)` also catches values that do not compare, e.g. NaN
                Some(w) if !(w >= W::zero()) => Err(GraphError::InvalidWeight { from: source.0, to: destination.0 }),
                _ => Ok(()),
            });

        if let Err(err) = &checked {
            debug!(%err, "rejected edge");
        }
        checked
    }

    fn push_edge(&mut self, source: VertexId, destination: VertexId, weight: Option<W>) {
        self.adjacencies[source.0].push(Edge { source, destination, weight });
    }
}

impl<T, W> Default for AdjacencyList<T, W> {
    fn default() -> Self {
        Self::new()
    }
}

/// One line per vertex: `data -> [ dest(weight), ... ]`
impl<T: fmt::Display, W: fmt::Display> fmt::Display for AdjacencyList<T, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (vertex, edges) in self.vertices.iter().zip(&self.adjacencies) {
            write!(f, "{} -> [ ", vertex.data)?;
            for (i, edge) in edges.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                let destination = &self.vertices[edge.destination.0].data;
                match &edge.weight {
                    Some(w) => write!(f, "{destination}({w})")?,
                    None => write!(f, "{destination}(-)")?,
                }
            }
            writeln!(f, " ]")?;
        }
        Ok(())
    }
}
