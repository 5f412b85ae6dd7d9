//! The graph a [`RoutePlanner`](crate::planner::RoutePlanner) searches.

mod node;
pub use node::Node;

mod road_map;
pub use road_map::{Road, RoadID, RoadKind, RoadMap};

use crate::{path::Path, NodeID, Point};

/// The capabilities a graph has to provide to be searched.
///
/// Implementors own the nodes and their adjacency. The planner keeps all of its search
/// state to itself and only calls into the graph for lookups, plus [`set_path`] once a
/// route has been found.
///
/// [`set_path`]: RouteGraph::set_path
pub trait RouteGraph {
    /// The node with the given id, if it exists.
    fn node(&self, id: NodeID) -> Option<&Node>;

    fn node_count(&self) -> usize;

    /// The routable node closest to `pos`, in normalized map space.
    ///
    /// Returns `None` only if the graph has no routable nodes.
    fn find_closest_node(&self, pos: Point) -> Option<NodeID>;

    /// Populates the adjacency of `id` (if that hasn't happened yet) and returns it.
    ///
    /// Must be idempotent. Unknown ids have no neighbors.
    fn find_neighbors(&mut self, id: NodeID) -> &[NodeID];

    /// Conversion factor from normalized distance to real-world units, e.g. meters.
    fn metric_scale(&self) -> f32;

    /// Stores the latest route, e.g. for rendering.
    fn set_path(&mut self, path: Path);
}
