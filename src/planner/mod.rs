//! A* search between two nodes of a [`RouteGraph`].

mod frontier;
use frontier::Frontier;

mod search_state;
use search_state::SearchState;

use crate::{
    graph::{Node, RouteGraph},
    path::Path,
    NodeID, PlannerConfig, Result, RouteError,
};

/// Finds the shortest route between two nodes of a graph.
///
/// Edge costs and the heuristic are both the straight-line distance between nodes, so
/// the route found is optimal. All search state lives in the planner; the graph is only
/// asked for nodes and neighbors, and receives a copy of the route at the end.
///
/// The planner borrows the graph mutably, so only one search can run on a graph at a time.
///
/// ## Examples
/// ```
/// use route_planner::prelude::*;
///
/// let mut map = RoadMap::new(1.0).unwrap();
/// let a = map.add_node((0.0, 0.0)).unwrap();
/// let b = map.add_node((0.0, 0.4)).unwrap();
/// let c = map.add_node((0.3, 0.0)).unwrap();
/// map.add_road(RoadKind::Primary, &[a, b, c]).unwrap();
/// map.add_road(RoadKind::Footway, &[a, c]).unwrap(); // not for cars
///
/// let mut planner = RoutePlanner::with_config(
///     &mut map,
///     PlannerConfig::NORMALIZED,
///     0.0, 0.0,
///     0.3, 0.0,
/// ).unwrap();
/// let path = planner.run().unwrap();
///
/// assert_eq!(path.ids().collect::<Vec<_>>(), vec![a, b, c]);
/// assert!((path.distance() - 0.9).abs() < 1e-5);
/// ```
pub struct RoutePlanner<'g, G: RouteGraph> {
    graph: &'g mut G,
    config: PlannerConfig,
    start_node: Node,
    end_node: Node,
    state: SearchState,
    frontier: Frontier,
    neighbors: Vec<NodeID>,
    distance: f32,
    expanded: usize,
}

impl<'g, G: RouteGraph> RoutePlanner<'g, G> {
    /// Creates a planner from the nodes closest to `(start_x, start_y)` and `(end_x, end_y)`.
    ///
    /// The coordinates are percentages of the map extent, see [`PlannerConfig::PERCENT`].
    ///
    /// ## Errors
    /// - [`RouteError::InvalidCoordinate`] if a coordinate is not finite.
    /// - [`RouteError::EmptyGraph`] if the graph has no node to resolve them to.
    pub fn new(
        graph: &'g mut G,
        start_x: f32,
        start_y: f32,
        end_x: f32,
        end_y: f32,
    ) -> Result<Self> {
        Self::with_config(
            graph,
            PlannerConfig::default(),
            start_x,
            start_y,
            end_x,
            end_y,
        )
    }

    /// Same as [`new`](RoutePlanner::new), with explicit options.
    pub fn with_config(
        graph: &'g mut G,
        config: PlannerConfig,
        start_x: f32,
        start_y: f32,
        end_x: f32,
        end_y: f32,
    ) -> Result<Self> {
        let start = Self::resolve(&*graph, &config, start_x, start_y)?;
        let end = Self::resolve(&*graph, &config, end_x, end_y)?;
        Self::between(graph, config, start, end)
    }

    /// Creates a planner for two known nodes.
    ///
    /// ## Errors
    /// [`RouteError::UnknownNode`] if either id is not in the graph.
    pub fn between(
        graph: &'g mut G,
        config: PlannerConfig,
        start: NodeID,
        end: NodeID,
    ) -> Result<Self> {
        let start_node = *graph.node(start).ok_or(RouteError::UnknownNode(start))?;
        let end_node = *graph.node(end).ok_or(RouteError::UnknownNode(end))?;

        Ok(RoutePlanner {
            graph,
            config,
            start_node,
            end_node,
            state: SearchState::default(),
            frontier: Frontier::default(),
            neighbors: vec![],
            distance: 0.0,
            expanded: 0,
        })
    }

    fn resolve(graph: &G, config: &PlannerConfig, x: f32, y: f32) -> Result<NodeID> {
        let pos = (x * config.input_scale, y * config.input_scale);
        if !pos.0.is_finite() || !pos.1.is_finite() {
            return Err(RouteError::InvalidCoordinate { x, y });
        }
        graph.find_closest_node(pos).ok_or(RouteError::EmptyGraph)
    }

    pub fn start_node(&self) -> &Node {
        &self.start_node
    }

    pub fn end_node(&self) -> &Node {
        &self.end_node
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    pub fn graph(&self) -> &G {
        &*self.graph
    }

    /// Distance of the route found by the last successful [`run`](RoutePlanner::run), in
    /// real-world units. `0.0` before that, or after a failed run.
    pub fn distance(&self) -> f32 {
        self.distance
    }

    /// Number of nodes expanded by the last [`run`](RoutePlanner::run).
    pub fn expanded(&self) -> usize {
        self.expanded
    }

    /// Straight-line distance from `node` to the end node.
    pub fn heuristic(&self, node: &Node) -> f32 {
        node.distance(&self.end_node)
    }

    /// Runs the search and returns the shortest route.
    ///
    /// A copy of the route is also handed to [`RouteGraph::set_path`]. Every call starts
    /// from a clean state, so running twice gives the same route.
    ///
    /// ## Errors
    /// - [`RouteError::NoRoute`] if the end node can't be reached from the start node.
    /// - [`RouteError::ExpansionLimit`] if [`PlannerConfig::max_expansions`] was hit first.
    pub fn run(&mut self) -> Result<Path> {
        #[cfg(feature = "log")]
        let (outer_timer, timer) = (std::time::Instant::now(), std::time::Instant::now());

        self.reset();

        let (start, end) = (self.start_node.id, self.end_node.id);
        let h_value = self.heuristic(&self.start_node);
        self.state.relax(start, 0.0, h_value, None);

        let mut current = start;
        while current != end {
            if let Some(limit) = self.config.max_expansions {
                if self.expanded >= limit {
                    log_debug!("search from {} to {} hit the limit of {} nodes", start, end, limit);
                    return Err(RouteError::ExpansionLimit { limit });
                }
            }

            self.expand(current)?;

            current = match self.select_next() {
                Some(next) => next,
                None => {
                    log_debug!(
                        "no route from {} to {} after expanding {} nodes",
                        start,
                        end,
                        self.expanded
                    );
                    return Err(RouteError::NoRoute { start, end });
                }
            };
        }

        re_trace!("search", timer);

        let path = self.reconstruct(current)?;

        re_trace!("reconstruct path", timer);
        re_trace!("run total", outer_timer);

        log_debug!(
            "route from {} to {}: {} nodes, distance {:.3}, {} expanded, {} seen",
            start,
            end,
            path.len(),
            path.distance(),
            self.expanded,
            self.state.len()
        );

        self.distance = path.distance();
        self.graph.set_path(path.clone());
        Ok(path)
    }

    fn reset(&mut self) {
        self.state.reset();
        self.frontier.clear();
        self.distance = 0.0;
        self.expanded = 0;
    }

    fn node(&self, id: NodeID) -> Result<Node> {
        self.graph
            .node(id)
            .copied()
            .ok_or(RouteError::UnknownNode(id))
    }

    /// Marks `current` as visited and pushes every neighbor it offers a cheaper route to.
    fn expand(&mut self, current: NodeID) -> Result<()> {
        let mut neighbors = std::mem::take(&mut self.neighbors);
        neighbors.clear();
        neighbors.extend_from_slice(self.graph.find_neighbors(current));

        let current_node = self.node(current)?;
        let current_g = self.state.get(current).g_value;
        self.state.visit(current);
        self.expanded += 1;

        for &id in neighbors.iter() {
            if self.state.is_visited(id) {
                continue;
            }
            let neighbor = self.node(id)?;
            let g_value = current_g + neighbor.distance(&current_node);
            let h_value = self.heuristic(&neighbor);

            if self.state.relax(id, g_value, h_value, Some(current)) {
                self.frontier.push(id, g_value, h_value);
            }
        }

        self.neighbors = neighbors;
        Ok(())
    }

    /// Pops the unvisited node with the lowest estimated total cost.
    fn select_next(&mut self) -> Option<NodeID> {
        while let Some(element) = self.frontier.pop() {
            let state = self.state.get(element.id);
            // superseded by a cheaper route, or already expanded
            if state.visited || element.g_value > state.g_value {
                continue;
            }
            return Some(element.id);
        }
        None
    }

    /// Follows the parent links from `goal` back to the start node.
    fn reconstruct(&self, goal: NodeID) -> Result<Path> {
        let mut nodes = vec![];
        let mut distance = 0.0;
        let mut current = self.node(goal)?;

        while current.id != self.start_node.id {
            let parent = self
                .state
                .get(current.id)
                .parent
                .ok_or(RouteError::BrokenParentChain(current.id))?;
            let parent = self.node(parent)?;
            distance += current.distance(&parent);
            nodes.push(current);
            current = parent;
        }
        nodes.push(current);
        nodes.reverse();

        Ok(Path::new(nodes, distance * self.graph.metric_scale()))
    }
}

impl<G: RouteGraph> std::fmt::Debug for RoutePlanner<'_, G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RoutePlanner")
            .field("config", &self.config)
            .field("start_node", &self.start_node)
            .field("end_node", &self.end_node)
            .field("distance", &self.distance)
            .field("expanded", &self.expanded)
            .finish_non_exhaustive()
    }
}
