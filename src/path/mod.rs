//! The result of a search.

use crate::{graph::Node, NodeID};

/// A route through a graph.
///
/// Holds copies of the nodes along the route, start first and end last, and the
/// total length of the route in real-world units (see
/// [`RouteGraph::metric_scale`](crate::graph::RouteGraph::metric_scale)).
///
/// A `Path` always contains at least one node.
#[derive(Clone, Debug, PartialEq)]
pub struct Path {
    nodes: Vec<Node>,
    distance: f32,
}

impl Path {
    pub(crate) fn new(nodes: Vec<Node>, distance: f32) -> Path {
        debug_assert!(!nodes.is_empty(), "a Path always has a start node");
        Path { nodes, distance }
    }

    /// Total length in real-world units.
    pub fn distance(&self) -> f32 {
        self.distance
    }

    /// Number of nodes on the route, including start and end.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false`, provided for completeness.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn start(&self) -> &Node {
        &self.nodes[0]
    }

    pub fn end(&self) -> &Node {
        &self.nodes[self.nodes.len() - 1]
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Node> {
        self.nodes.iter()
    }

    /// The ids of the nodes along the route.
    pub fn ids(&self) -> impl Iterator<Item = NodeID> + '_ {
        self.nodes.iter().map(|node| node.id)
    }
}

use std::ops::Index;
impl Index<usize> for Path {
    type Output = Node;
    #[track_caller]
    fn index(&self, index: usize) -> &Node {
        &self.nodes[index]
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Node;
    type IntoIter = std::slice::Iter<'a, Node>;
    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}
