use crate::{NodeID, Point};

/// A vertex of a [`RouteGraph`](super::RouteGraph).
///
/// Adjacency lives in the graph, so a `Node` is a plain value that can be copied into a
/// [`Path`](crate::path::Path).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Node {
    pub id: NodeID,
    pub pos: Point,
}

impl Node {
    pub fn new(id: NodeID, pos: Point) -> Node {
        Node { id, pos }
    }

    /// Straight-line distance to `other` in normalized map space.
    pub fn distance(&self, other: &Node) -> f32 {
        crate::distance(self.pos, other.pos)
    }
}
