//! Branch-and-bound configuration.

/// Order in which open nodes are expanded.
///
/// Traversal affects only how fast the incumbent converges, never the
/// final objective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NodeSelection {
    /// Last-in first-out stack. Low memory, dives to leaves quickly.
    #[default]
    DepthFirst,

    /// Node whose parent has the highest relaxation bound first.
    BestBound,
}

/// Configuration parameters for the branch-and-bound engine.
///
/// # Examples
///
/// ```
/// use u_knapsack::bnb::{BnbConfig, NodeSelection};
///
/// let config = BnbConfig::default()
///     .with_node_selection(NodeSelection::BestBound)
///     .with_node_limit(10_000)
///     .with_time_limit_ms(500);
/// assert_eq!(config.node_limit, Some(10_000));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct BnbConfig {
    /// Node selection strategy.
    pub node_selection: NodeSelection,

    /// Fix items heavier than the capacity to zero before search.
    pub presolve: bool,

    /// Maximum number of nodes to expand (None = unlimited).
    pub node_limit: Option<u64>,

    /// Time limit in milliseconds (None = unlimited).
    pub time_limit_ms: Option<u64>,

    /// Log progress lines at info level.
    pub verbose: bool,

    /// Log frequency (every N expanded nodes) when `verbose`.
    pub log_freq: u64,
}

impl Default for BnbConfig {
    fn default() -> Self {
        Self {
            node_selection: NodeSelection::default(),
            presolve: true,
            node_limit: None,
            time_limit_ms: None,
            verbose: false,
            log_freq: 1000,
        }
    }
}

impl BnbConfig {
    pub fn with_node_selection(mut self, selection: NodeSelection) -> Self {
        self.node_selection = selection;
        self
    }

    pub fn with_presolve(mut self, presolve: bool) -> Self {
        self.presolve = presolve;
        self
    }

    pub fn with_node_limit(mut self, nodes: u64) -> Self {
        self.node_limit = Some(nodes);
        self
    }

    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.time_limit_ms = Some(ms);
        self
    }

    /// Enables progress logging every `log_freq` nodes.
    pub fn with_verbose(mut self, log_freq: u64) -> Self {
        self.verbose = true;
        self.log_freq = log_freq;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.verbose && self.log_freq == 0 {
            return Err("log_freq must be positive when verbose".into());
        }
        if self.node_limit == Some(0) {
            return Err("node_limit must be positive".into());
        }
        Ok(())
    }
}
