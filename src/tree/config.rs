//! Search strategies and tree search configuration.

use std::fmt;
use std::str::FromStr;

use crate::error::SearchError;

/// Depth limit used when none is given.
pub const DEFAULT_DEPTH_LIMIT: usize = 100;

/// Frontier expansion strategy.
///
/// The strategy decides where freshly generated children enter the
/// frontier and how the frontier is ordered afterwards. Nodes are always
/// popped from the front.
///
/// | strategy  | insertion | order                          |
/// |-----------|-----------|--------------------------------|
/// | `Breadth` | append    | FIFO                           |
/// | `Depth`   | prepend   | most recently generated first  |
/// | `Uniform` | prepend   | stable sort by `cost`          |
/// | `Greedy`  | prepend   | stable sort by `heuristic`     |
/// | `AStar`   | prepend   | stable sort by `cost + heuristic` |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Strategy {
    /// Breadth-first search.
    #[default]
    Breadth,
    /// Depth-first search.
    Depth,
    /// Uniform-cost search.
    Uniform,
    /// Greedy best-first search.
    Greedy,
    /// A* search.
    #[cfg_attr(feature = "serde", serde(rename = "a*", alias = "astar"))]
    AStar,
}

impl Strategy {
    /// Every strategy, in table order.
    pub const ALL: [Strategy; 5] = [
        Strategy::Breadth,
        Strategy::Depth,
        Strategy::Uniform,
        Strategy::Greedy,
        Strategy::AStar,
    ];

    /// The canonical identifier: `breadth`, `depth`, `uniform`, `greedy`
    /// or `a*`.
    pub fn name(self) -> &'static str {
        match self {
            Strategy::Breadth => "breadth",
            Strategy::Depth => "depth",
            Strategy::Uniform => "uniform",
            Strategy::Greedy => "greedy",
            Strategy::AStar => "a*",
        }
    }

    /// Returns true for the strategies that re-sort the frontier.
    pub fn is_informed(self) -> bool {
        matches!(self, Strategy::Uniform | Strategy::Greedy | Strategy::AStar)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "breadth" => Ok(Strategy::Breadth),
            "depth" => Ok(Strategy::Depth),
            "uniform" => Ok(Strategy::Uniform),
            "greedy" => Ok(Strategy::Greedy),
            "a*" | "astar" => Ok(Strategy::AStar),
            other => Err(SearchError::UnknownStrategy(other.to_string())),
        }
    }
}

/// Configuration for a tree search run.
///
/// # Examples
///
/// ```
/// use u_treesearch::tree::{Strategy, TreeConfig};
///
/// let config = TreeConfig::default()
///     .with_strategy(Strategy::AStar)
///     .with_limit(25);
/// assert_eq!(config.limit, 25);
///
/// let parsed = TreeConfig::from_identifier("uniform", 10).unwrap();
/// assert_eq!(parsed.strategy, Strategy::Uniform);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TreeConfig {
    /// Frontier ordering policy.
    pub strategy: Strategy,

    /// Nodes deeper than this are discarded without expansion.
    pub limit: usize,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            limit: DEFAULT_DEPTH_LIMIT,
        }
    }
}

impl TreeConfig {
    /// Builds a config from a strategy identifier such as `"a*"`.
    pub fn from_identifier(strategy: &str, limit: usize) -> Result<Self, SearchError> {
        Ok(Self {
            strategy: strategy.parse()?,
            limit,
        })
    }

    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TreeConfig::default();
        assert_eq!(config.strategy, Strategy::Breadth);
        assert_eq!(config.limit, 100);
    }

    #[test]
    fn test_parse_identifiers() {
        assert_eq!("breadth".parse::<Strategy>(), Ok(Strategy::Breadth));
        assert_eq!("depth".parse::<Strategy>(), Ok(Strategy::Depth));
        assert_eq!("uniform".parse::<Strategy>(), Ok(Strategy::Uniform));
        assert_eq!("greedy".parse::<Strategy>(), Ok(Strategy::Greedy));
        assert_eq!("a*".parse::<Strategy>(), Ok(Strategy::AStar));
        assert_eq!("astar".parse::<Strategy>(), Ok(Strategy::AStar));
    }

    #[test]
    fn test_parse_unknown_strategy() {
        let err = "bfs".parse::<Strategy>().unwrap_err();
        assert_eq!(err, SearchError::UnknownStrategy("bfs".into()));
        assert!(TreeConfig::from_identifier("Breadth", 5).is_err());
    }

    #[test]
    fn test_display_round_trips() {
        for strategy in Strategy::ALL {
            assert_eq!(strategy.to_string().parse::<Strategy>(), Ok(strategy));
        }
    }

    #[test]
    fn test_informed_strategies() {
        assert!(!Strategy::Breadth.is_informed());
        assert!(!Strategy::Depth.is_informed());
        assert!(Strategy::Uniform.is_informed());
        assert!(Strategy::Greedy.is_informed());
        assert!(Strategy::AStar.is_informed());
    }

    #[test]
    fn test_builders() {
        let config = TreeConfig::default()
            .with_strategy(Strategy::Greedy)
            .with_limit(3);
        assert_eq!(config.strategy, Strategy::Greedy);
        assert_eq!(config.limit, 3);
    }
}
