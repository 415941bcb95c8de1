mod vertex;
mod weight;
mod adjacency_list;

pub use vertex::{Edge, Vertex, VertexId};
pub use weight::Weight;
pub use adjacency_list::AdjacencyList;
