/// Options for a [`RoutePlanner`](crate::planner::RoutePlanner).
///
/// ## Examples
/// ```
/// use route_planner::PlannerConfig;
///
/// // coordinates are already normalized, and give up after 10k nodes
/// let config = PlannerConfig::NORMALIZED.with_max_expansions(10_000);
/// assert_eq!(config.input_scale, 1.0);
/// assert_eq!(config.max_expansions, Some(10_000));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlannerConfig {
    /// Factor that turns the coordinates passed to
    /// [`RoutePlanner::new`](crate::planner::RoutePlanner::new) into normalized map space.
    ///
    /// Default: `0.01`, i.e. inputs are percentages of the map extent.
    pub input_scale: f32,
    /// Upper bound on the number of nodes a single search may expand.
    ///
    /// `None` searches until the end node is reached or the frontier is exhausted.
    ///
    /// Default: `None`
    pub max_expansions: Option<usize>,
}

impl PlannerConfig {
    /// Input coordinates are percentages of the map extent.
    pub const PERCENT: PlannerConfig = PlannerConfig {
        input_scale: 0.01,
        max_expansions: None,
    };

    /// Input coordinates are already in normalized map space.
    pub const NORMALIZED: PlannerConfig = PlannerConfig {
        input_scale: 1.0,
        max_expansions: None,
    };

    pub fn with_input_scale(mut self, input_scale: f32) -> PlannerConfig {
        self.input_scale = input_scale;
        self
    }

    pub fn with_max_expansions(mut self, limit: usize) -> PlannerConfig {
        self.max_expansions = Some(limit);
        self
    }
}

impl Default for PlannerConfig {
    fn default() -> PlannerConfig {
        PlannerConfig::PERCENT
    }
}
