use super::{Node, RouteGraph};
use crate::{path::Path, NodeID, NodeIDMap, Point, Result, RouteError};

use std::cmp::Ordering;

/// Index of a [`Road`] inside its [`RoadMap`].
pub type RoadID = usize;

/// Classification of a road, following the usual map tags.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RoadKind {
    Invalid,
    Unclassified,
    Service,
    Residential,
    Tertiary,
    Secondary,
    Primary,
    Trunk,
    Motorway,
    Footway,
}

impl RoadKind {
    /// Whether routes may run along roads of this kind. Footways are kept for display
    /// only.
    pub fn is_routable(self) -> bool {
        self != RoadKind::Footway
    }
}

/// A polyline of nodes.
#[derive(Clone, Debug, PartialEq)]
pub struct Road {
    pub kind: RoadKind,
    pub nodes: Vec<NodeID>,
}

/// An in-memory road network.
///
/// Two nodes are adjacent if they follow each other on a routable road. Adjacency is
/// computed the first time a node's neighbors are requested and cached afterwards.
#[derive(Clone, Debug)]
pub struct RoadMap {
    nodes: Vec<Node>,
    roads: Vec<Road>,
    node_to_road: NodeIDMap<Vec<RoadID>>,
    neighbors: NodeIDMap<Vec<NodeID>>,
    metric_scale: f32,
    path: Option<Path>,
}

impl RoadMap {
    /// Creates an empty map where one normalized unit is `metric_scale` real-world units.
    pub fn new(metric_scale: f32) -> Result<RoadMap> {
        if !metric_scale.is_finite() || metric_scale <= 0.0 {
            return Err(RouteError::InvalidMetricScale(metric_scale));
        }
        Ok(RoadMap {
            nodes: Vec::new(),
            roads: Vec::new(),
            node_to_road: NodeIDMap::default(),
            neighbors: NodeIDMap::default(),
            metric_scale,
            path: None,
        })
    }

    /// Creates an empty map covering an area of `width` by `height` real-world units.
    ///
    /// Normalized coordinates are relative to the shorter side.
    pub fn from_bounds(width: f32, height: f32) -> Result<RoadMap> {
        for extent in [width, height] {
            if !extent.is_finite() || extent <= 0.0 {
                return Err(RouteError::InvalidMetricScale(extent));
            }
        }
        RoadMap::new(width.min(height))
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn roads(&self) -> &[Road] {
        &self.roads
    }

    /// The path written by the last successful search on this map.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_ref()
    }

    pub fn add_node(&mut self, pos: Point) -> Result<NodeID> {
        if !pos.0.is_finite() || !pos.1.is_finite() {
            return Err(RouteError::InvalidCoordinate { x: pos.0, y: pos.1 });
        }
        let id = self.nodes.len();
        self.nodes.push(Node::new(id, pos));
        Ok(id)
    }

    /// Adds a road running through `nodes` in order.
    ///
    /// Footways are stored, but their nodes don't become routable through them.
    pub fn add_road(&mut self, kind: RoadKind, nodes: &[NodeID]) -> Result<RoadID> {
        if nodes.len() < 2 {
            return Err(RouteError::DegenerateRoad { len: nodes.len() });
        }
        if let Some(&unknown) = nodes.iter().find(|&&id| id >= self.nodes.len()) {
            return Err(RouteError::UnknownNode(unknown));
        }

        let road_id = self.roads.len();
        self.roads.push(Road {
            kind,
            nodes: nodes.to_vec(),
        });

        if kind.is_routable() {
            for &id in nodes {
                let roads = self.node_to_road.entry(id).or_default();
                if !roads.contains(&road_id) {
                    roads.push(road_id);
                }
                // adjacency changed, recompute on next request
                self.neighbors.remove(&id);
            }
        }
        Ok(road_id)
    }

    fn adjacent_nodes(&self, id: NodeID) -> Vec<NodeID> {
        let mut ret = vec![];
        if let Some(roads) = self.node_to_road.get(&id) {
            for &road_id in roads {
                let nodes = &self.roads[road_id].nodes;
                for (i, _) in nodes.iter().enumerate().filter(|&(_, &other)| other == id) {
                    if i > 0 {
                        ret.push(nodes[i - 1]);
                    }
                    if let Some(&next) = nodes.get(i + 1) {
                        ret.push(next);
                    }
                }
            }
        }
        ret.retain(|&other| other != id);
        ret.sort_unstable();
        ret.dedup();
        ret
    }
}

// closest first, lowest id on ties
fn closer(a: &(NodeID, f32), b: &(NodeID, f32)) -> Ordering {
    a.1.total_cmp(&b.1).then(a.0.cmp(&b.0))
}

impl RouteGraph for RoadMap {
    fn node(&self, id: NodeID) -> Option<&Node> {
        self.nodes.get(id)
    }

    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[cfg(feature = "parallel")]
    fn find_closest_node(&self, pos: Point) -> Option<NodeID> {
        use rayon::prelude::*;

        self.node_to_road
            .par_keys()
            .map(|&id| (id, crate::distance(self.nodes[id].pos, pos)))
            .min_by(closer)
            .map(|(id, _)| id)
    }

    #[cfg(not(feature = "parallel"))]
    fn find_closest_node(&self, pos: Point) -> Option<NodeID> {
        self.node_to_road
            .keys()
            .map(|&id| (id, crate::distance(self.nodes[id].pos, pos)))
            .min_by(closer)
            .map(|(id, _)| id)
    }

    fn find_neighbors(&mut self, id: NodeID) -> &[NodeID] {
        if id >= self.nodes.len() {
            return &[];
        }
        if !self.neighbors.contains_key(&id) {
            let adjacent = self.adjacent_nodes(id);
            self.neighbors.insert(id, adjacent);
        }
        self.neighbors.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    fn metric_scale(&self) -> f32 {
        self.metric_scale
    }

    fn set_path(&mut self, path: Path) {
        self.path = Some(path);
    }
}

use std::ops::Index;
impl Index<NodeID> for RoadMap {
    type Output = Node;
    #[track_caller]
    fn index(&self, index: NodeID) -> &Node {
        &self.nodes[index]
    }
}
