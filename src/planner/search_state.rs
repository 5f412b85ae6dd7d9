use crate::{NodeID, NodeIDMap};

/// What a single search knows about a node.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct NodeState {
    /// The node has been expanded. Its `g_value` and `parent` are final.
    pub visited: bool,
    /// Cost of the best known route from the start.
    pub g_value: f32,
    /// Estimated cost from here to the goal.
    pub h_value: f32,
    pub parent: Option<NodeID>,
}

impl Default for NodeState {
    fn default() -> NodeState {
        NodeState {
            visited: false,
            g_value: 0.0,
            h_value: 0.0,
            parent: None,
        }
    }
}

/// Per-search bookkeeping, keyed by node. Nodes the search hasn't reached yet have no
/// entry and read as [`NodeState::default`].
#[derive(Clone, Debug, Default)]
pub(crate) struct SearchState {
    nodes: NodeIDMap<NodeState>,
}

impl SearchState {
    pub fn reset(&mut self) {
        self.nodes.clear();
    }

    #[allow(unused)]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn get(&self, id: NodeID) -> NodeState {
        self.nodes.get(&id).copied().unwrap_or_default()
    }

    pub fn is_visited(&self, id: NodeID) -> bool {
        self.nodes.get(&id).map_or(false, |state| state.visited)
    }

    /// Records a route to `id` with cost `g_value`, if it beats the best known one.
    ///
    /// Returns `true` if the state of `id` changed. Visited nodes never change.
    pub fn relax(
        &mut self,
        id: NodeID,
        g_value: f32,
        h_value: f32,
        parent: Option<NodeID>,
    ) -> bool {
        match self.nodes.get_mut(&id) {
            Some(state) if state.visited || state.g_value <= g_value => false,
            Some(state) => {
                state.g_value = g_value;
                state.h_value = h_value;
                state.parent = parent;
                true
            }
            None => {
                self.nodes.insert(
                    id,
                    NodeState {
                        visited: false,
                        g_value,
                        h_value,
                        parent,
                    },
                );
                true
            }
        }
    }

    pub fn visit(&mut self, id: NodeID) {
        self.nodes.entry(id).or_default().visited = true;
    }
}
