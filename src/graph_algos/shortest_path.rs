use super::{PathMap, Visit};
use crate::graph::{Edge, VertexId, Weight};


/// Construct the route from the solve's source to `destination`
/// Returns the ordered edges from source to destination,
/// empty when the destination is the source or was never reached
/// paths: PathMap<W> - output of `Dijkstra::shortest_path_from`
pub fn route<W: Copy>(destination: VertexId, paths: &PathMap<W>) -> Vec<Edge<W>> {

    let mut route = Vec::new();
    let mut current = destination;

    // Trace back from destination to start
    // A well formed map reaches Start in at most one step per entry
    loop {
        match paths.get(&current) {
            Some(Visit::Edge(edge)) => {
                if route.len() == paths.len() {
                    // predecessor cycle, the map did not come from a solve
                    return Vec::new();
                }
                route.push(*edge);
                current = edge.source;
            }
            Some(Visit::Start) | None => break,
        }
    }

    // The route is in reverse order, so reverse it
    route.reverse();
    route
}

/// Total weight of the route to `destination`
/// Zero for the source and for unreachable vertices.
/// Saturates at the weight type's maximum, which only a hand-built map can hit
pub fn distance<W: Weight>(destination: VertexId, paths: &PathMap<W>) -> W {
    route(destination, paths)
        .iter()
        .filter_map(|edge| edge.weight)
        .try_fold(W::zero(), |total, weight| total.checked_sum(weight))
        .unwrap_or_else(W::max_value)
}


#[cfg(test)]
mod tests {
    use super::*;

    fn edge(source: usize, destination: usize, weight: f64) -> Edge<f64> {
        Edge { source: VertexId(source), destination: VertexId(destination), weight: Some(weight) }
    }

    #[test]
    fn test_route_reconstruction() {
        // Build a path map manually: 0 -> 2 -> 3, 0 -> 1
        let mut paths: PathMap<f64> = PathMap::default();
        paths.insert(VertexId(0), Visit::Start);
        paths.insert(VertexId(1), Visit::Edge(edge(0, 1, 1.0)));
        paths.insert(VertexId(2), Visit::Edge(edge(0, 2, 3.0)));
        paths.insert(VertexId(3), Visit::Edge(edge(2, 3, 1.5)));

        assert_eq!(route(VertexId(3), &paths), vec![edge(0, 2, 3.0), edge(2, 3, 1.5)]);
        assert_eq!(route(VertexId(1), &paths), vec![edge(0, 1, 1.0)]);
        assert_eq!(distance(VertexId(3), &paths), 4.5);
    }

    #[test]
    fn test_start_and_missing_vertices_have_empty_routes() {
        let mut paths: PathMap<f64> = PathMap::default();
        paths.insert(VertexId(0), Visit::Start);

        assert!(route(VertexId(0), &paths).is_empty());
        assert!(route(VertexId(5), &paths).is_empty());
        assert_eq!(distance(VertexId(0), &paths), 0.0);
        assert_eq!(distance(VertexId(5), &paths), 0.0);
    }

    #[test]
    fn test_route_stops_at_missing_predecessor() {
        // 1 was reached from 0, but 0 has no entry
        let mut paths: PathMap<f64> = PathMap::default();
        paths.insert(VertexId(1), Visit::Edge(edge(0, 1, 2.0)));

        assert_eq!(route(VertexId(1), &paths), vec![edge(0, 1, 2.0)]);
    }

    #[test]
    fn test_predecessor_cycle_yields_empty_route() {
        let mut paths: PathMap<f64> = PathMap::default();
        paths.insert(VertexId(0), Visit::Edge(edge(1, 0, 1.0)));
        paths.insert(VertexId(1), Visit::Edge(edge(0, 1, 1.0)));

        assert!(route(VertexId(0), &paths).is_empty());
        assert_eq!(distance(VertexId(1), &paths), 0.0);
    }

    #[test]
    fn test_distance_saturates_on_overflow() {
        let mut paths: PathMap<u32> = PathMap::default();
        paths.insert(VertexId(0), Visit::Start);
        paths.insert(VertexId(1), Visit::Edge(Edge { source: VertexId(0), destination: VertexId(1), weight: Some(u32::MAX) }));
        paths.insert(VertexId(2), Visit::Edge(Edge { source: VertexId(1), destination: VertexId(2), weight: Some(1) }));

        assert_eq!(distance(VertexId(1), &paths), u32::MAX);
        assert_eq!(distance(VertexId(2), &paths), u32::MAX);
        assert_eq!(route(VertexId(2), &paths).len(), 2);
    }

    #[test]
    fn test_route_is_idempotent() {
        let mut paths: PathMap<u32> = PathMap::default();
        paths.insert(VertexId(0), Visit::Start);
        paths.insert(VertexId(1), Visit::Edge(Edge { source: VertexId(0), destination: VertexId(1), weight: Some(2) }));

        assert_eq!(route(VertexId(1), &paths), route(VertexId(1), &paths));
        assert_eq!(distance(VertexId(1), &paths), 2);
    }
}
