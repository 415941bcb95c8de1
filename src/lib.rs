//! Weighted graph shortest paths.
//!
//! Build an [`AdjacencyList`], solve once from a source with
//! [`Dijkstra::shortest_path_from`], then query as many destinations as needed:
//!
//! ```
//! use navgraph::{AdjacencyList, Dijkstra};
//!
//! let mut graph = AdjacencyList::new();
//! let a = graph.create_vertex("A");
//! let b = graph.create_vertex("B");
//! let c = graph.create_vertex("C");
//! graph.add_directed_edge(a, b, Some(1.0)).unwrap();
//! graph.add_directed_edge(b, c, Some(2.0)).unwrap();
//! graph.add_directed_edge(a, c, Some(5.0)).unwrap();
//!
//! let dijkstra = Dijkstra::new(&graph);
//! let paths = dijkstra.shortest_path_from(a);
//! assert_eq!(dijkstra.shortest_path_to(c, &paths).len(), 2);
//! assert_eq!(dijkstra.distance(c, &paths), 3.0);
//! ```

pub mod collections;
pub mod errors;
pub mod graph;
pub mod graph_algos;
pub mod heap;

pub use errors::GraphError;
pub use graph::{AdjacencyList, Edge, Vertex, VertexId, Weight};
pub use graph_algos::{Dijkstra, PathMap, Visit};
pub use heap::{Heap, PriorityQueue};
