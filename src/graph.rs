use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;

use crate::geo::haversine_m;
use crate::models::Coordinate;

#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    #[error("a route needs at least two waypoints, got {count}")]
    TooFewWaypoints { count: usize },
    #[error("node index {index} out of bounds for a graph of {node_count} nodes")]
    NodeOutOfBounds { index: usize, node_count: usize },
}

/// Chain graph over an ordered waypoint polyline.
///
/// Node `i` connects only to `i-1` and `i+1`. Both directions of each
/// segment are stored so the solvers see a uniform directed adjacency
/// structure; weights are haversine meters. Nodes are inserted in input
/// order, so a petgraph index round-trips through the waypoint's position
/// in the original sequence.
#[derive(Debug)]
pub struct RouteGraph {
    inner: DiGraph<Coordinate, f64>,
}

impl RouteGraph {
    pub fn from_coordinates(coordinates: &[Coordinate]) -> Result<Self, GraphError> {
        if coordinates.len() < 2 {
            return Err(GraphError::TooFewWaypoints {
                count: coordinates.len(),
            });
        }

        let mut inner = DiGraph::with_capacity(coordinates.len(), 2 * (coordinates.len() - 1));
        for &coordinate in coordinates {
            inner.add_node(coordinate);
        }
        for i in 1..coordinates.len() {
            let weight = haversine_m(coordinates[i - 1], coordinates[i]);
            let from = NodeIndex::new(i - 1);
            let to = NodeIndex::new(i);
            inner.add_edge(from, to, weight);
            inner.add_edge(to, from, weight);
        }

        Ok(Self { inner })
    }

    pub fn node_count(&self) -> usize {
        self.inner.node_count()
    }

    pub fn coordinate(&self, index: usize) -> Coordinate {
        self.inner[NodeIndex::new(index)]
    }

    /// Fail-fast precondition shared by every solver.
    pub fn check_node(&self, index: usize) -> Result<(), GraphError> {
        if index >= self.node_count() {
            return Err(GraphError::NodeOutOfBounds {
                index,
                node_count: self.node_count(),
            });
        }
        Ok(())
    }

    /// Outgoing edges of `index` as `(neighbor, weight_m)` pairs.
    pub fn edges_from(&self, index: usize) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.inner
            .edges(NodeIndex::new(index))
            .map(|edge| (edge.target().index(), *edge.weight()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain(n: usize) -> Vec<Coordinate> {
        (0..n)
            .map(|i| Coordinate {
                lat: 45.0 + i as f64 * 0.01,
                lon: 5.0 + i as f64 * 0.01,
            })
            .collect()
    }

    #[test]
    fn rejects_empty_input() {
        let err = RouteGraph::from_coordinates(&[]).unwrap_err();
        assert!(matches!(err, GraphError::TooFewWaypoints { count: 0 }));
    }

    #[test]
    fn rejects_single_waypoint() {
        let err = RouteGraph::from_coordinates(&chain(1)).unwrap_err();
        assert!(matches!(err, GraphError::TooFewWaypoints { count: 1 }));
    }

    #[test]
    fn builds_chain_adjacency() {
        let coordinates = chain(5);
        let graph = RouteGraph::from_coordinates(&coordinates).unwrap();
        assert_eq!(graph.node_count(), 5);

        let endpoint: Vec<usize> = graph.edges_from(0).map(|(to, _)| to).collect();
        assert_eq!(endpoint, vec![1]);

        let mut interior: Vec<usize> = graph.edges_from(2).map(|(to, _)| to).collect();
        interior.sort_unstable();
        assert_eq!(interior, vec![1, 3]);

        let last: Vec<usize> = graph.edges_from(4).map(|(to, _)| to).collect();
        assert_eq!(last, vec![3]);
    }

    #[test]
    fn edge_weights_are_haversine_and_symmetric() {
        let coordinates = chain(3);
        let graph = RouteGraph::from_coordinates(&coordinates).unwrap();

        let forward = graph
            .edges_from(0)
            .find(|&(to, _)| to == 1)
            .map(|(_, w)| w)
            .unwrap();
        let backward = graph
            .edges_from(1)
            .find(|&(to, _)| to == 0)
            .map(|(_, w)| w)
            .unwrap();

        assert_eq!(forward, haversine_m(coordinates[0], coordinates[1]));
        assert_eq!(forward, backward);
        assert!(forward > 0.0);
    }

    #[test]
    fn check_node_flags_out_of_bounds() {
        let graph = RouteGraph::from_coordinates(&chain(3)).unwrap();
        assert!(graph.check_node(2).is_ok());
        let err = graph.check_node(3).unwrap_err();
        assert!(matches!(
            err,
            GraphError::NodeOutOfBounds {
                index: 3,
                node_count: 3
            }
        ));
    }
}
