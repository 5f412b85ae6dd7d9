use crate::NodeID;

use thiserror::Error;

/// Everything that can go wrong while building a map or planning a route.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RouteError {
    /// No node could be resolved for an endpoint, because the graph has no routable nodes.
    #[error("graph has no routable nodes")]
    EmptyGraph,

    #[error("coordinate ({x}, {y}) is not a finite number")]
    InvalidCoordinate { x: f32, y: f32 },

    #[error("node {0} does not exist in the graph")]
    UnknownNode(NodeID),

    /// The frontier ran dry before the end node was reached.
    #[error("no route from node {start} to node {end}")]
    NoRoute { start: NodeID, end: NodeID },

    #[error("search gave up after expanding {limit} nodes")]
    ExpansionLimit { limit: usize },

    /// Walking the parent links from the goal never reached the start node.
    #[error("parent chain broken at node {0}")]
    BrokenParentChain(NodeID),

    #[error("metric scale must be finite and positive, got {0}")]
    InvalidMetricScale(f32),

    #[error("a road needs at least two nodes, got {len}")]
    DegenerateRoad { len: usize },
}

pub type Result<T> = std::result::Result<T, RouteError>;
