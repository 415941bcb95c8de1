use super::{shortest_path, PathMap, Visit};
use crate::collections::{FxHashMap, FxIndexMap};
use crate::graph::{AdjacencyList, Edge, VertexId, Weight};
use crate::heap::PriorityQueue;

use tracing::{debug, trace};


/// Queue entry
/// - distance is the tentative distance when the entry was pushed
/// - a vertex is pushed again on every improvement, older entries go stale
#[derive(Debug, Clone, Copy)]
struct Pending<W> {
    vertex: VertexId,
    distance: W,
}


/// Dijkstra's single-source shortest paths over an `AdjacencyList`
/// https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm
/// The graph is only read, so several solvers may share one graph
pub struct Dijkstra<'g, T, W> {
    graph: &'g AdjacencyList<T, W>,
}

impl<'g, T, W> Dijkstra<'g, T, W>
where
    W: Weight,
{

    pub fn new(graph: &'g AdjacencyList<T, W>) -> Self {
        Self { graph }
    }

    /// Traverse every vertex reachable from `source`
    /// Returns the visit map: source -> Start, reached vertex -> cheapest edge into it.
    /// Unweighted edges are never traversed
    pub fn shortest_path_from(&self, source: VertexId) -> PathMap<W> {

        let mut paths: PathMap<W> = FxIndexMap::default();
        paths.insert(source, Visit::Start);

        // Best known distance per reached vertex, the queue may hold older values
        let mut distances: FxHashMap<VertexId, W> = FxHashMap::default();
        distances.insert(source, W::zero());

        // Lowest tentative distance first
        let mut queue = PriorityQueue::new(|a: &Pending<W>, b: &Pending<W>| a.distance < b.distance);
        queue.enqueue(Pending { vertex: source, distance: W::zero() });

        debug!(%source, vertices = self.graph.vertex_count(), "dijkstra solve started");
        let mut pops = 0usize;

        while let Some(Pending { vertex, distance }) = queue.dequeue() {
            pops += 1;

            // fetch current best distance for the vertex
            let Some(&best) = distances.get(&vertex) else {
                continue;
            };

            // A cheaper entry for this vertex was already expanded
            if distance > best {
                trace!(%vertex, ?distance, ?best, "skipping stale queue entry");
                continue;
            }

            for edge in self.graph.edges(vertex) {
                let Some(weight) = edge.weight else {
                    continue;
                };
                // A sum that does not fit the weight type makes the edge non-traversable
                let Some(candidate) = best.checked_sum(weight) else {
                    trace!(from = %vertex, to = %edge.destination, "skipping edge, distance overflows");
                    continue;
                };

                let improved = match distances.get(&edge.destination) {
                    None => true,
                    Some(&current) => candidate < current,
                };
                if !improved {
                    continue;
                }

                trace!(from = %vertex, to = %edge.destination, ?candidate, "relaxed edge");
                distances.insert(edge.destination, candidate);
                paths.insert(edge.destination, Visit::Edge(*edge));
                queue.enqueue(Pending { vertex: edge.destination, distance: candidate });
            }
        }

        debug!(%source, reached = paths.len(), pops, "dijkstra solve finished");
        paths
    }

    /// Ordered edges from the solve's source to `destination`
    /// Empty when unreachable
    pub fn shortest_path_to(&self, destination: VertexId, paths: &PathMap<W>) -> Vec<Edge<W>> {
        shortest_path::route(destination, paths)
    }

    /// Total weight of the shortest route to `destination`, zero when unreachable
    pub fn distance(&self, destination: VertexId, paths: &PathMap<W>) -> W {
        shortest_path::distance(destination, paths)
    }

    /// Shortest routes from `source` to every vertex of the graph
    /// One solve, then one route reconstruction per vertex
    pub fn all_shortest_paths(&self, source: VertexId) -> FxIndexMap<VertexId, Vec<Edge<W>>> {
        let paths = self.shortest_path_from(source);
        self.graph
            .vertices()
            .iter()
            .map(|vertex| (vertex.id(), shortest_path::route(vertex.id(), &paths)))
            .collect()
    }
}
