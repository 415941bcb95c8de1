pub mod dijkstra;
pub mod shortest_path;

pub use dijkstra::Dijkstra;
pub use shortest_path::{distance, route};

use crate::collections::FxIndexMap;
use crate::graph::{Edge, VertexId};


/// How a vertex was reached during a solve
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Visit<W> {
    /// The solve's source, no predecessor
    Start,
    /// Cheapest known edge into the vertex
    Edge(Edge<W>),
}

/// Type alias for the output of a solve
/// Maps each reached vertex to how it was reached,
/// vertices never reached have no entry. Distances are not stored,
/// they are recovered by walking the predecessor edges
pub type PathMap<W> = FxIndexMap<VertexId, Visit<W>>;
