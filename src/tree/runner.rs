//! Tree search execution loop.
//!
//! # Algorithm
//!
//! 1. Start with a frontier holding only the root node
//! 2. While the frontier is non-empty:
//!    a. Pop the front node
//!    b. Discard it if it lies deeper than the limit
//!    c. If it satisfies the goal, reconstruct and return its path
//!    d. Otherwise expand it, drop children whose state already occurs on
//!    the path to the root, and insert the rest per the strategy
//! 3. An empty frontier means no solution within the limit
//!
//! Cycle avoidance only looks along the current path. The same state may
//! be reached, and explored again, through different branches.

use tracing::{debug, info, trace};

use super::config::{Strategy, TreeConfig, DEFAULT_DEPTH_LIMIT};
use super::frontier::Frontier;
use super::node::{Node, NodeArena, NodeId};
use super::types::{Domain, Problem};
use crate::error::SearchError;

/// Lifecycle of a [`SearchTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchStatus {
    /// Constructed, `search` not yet called.
    Idle,
    /// Inside `search`.
    Searching,
    /// A goal node was found.
    Solved,
    /// The frontier emptied without reaching a goal.
    Exhausted,
}

/// Diagnostic counters of a search.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Frontier size right after the last pop.
    pub terminals: usize,

    /// Number of nodes expanded.
    pub non_terminals: usize,

    /// `(terminals + non_terminals - 1) / non_terminals`, rounded to two
    /// decimals. `None` until a solution is found, and when the root itself
    /// is the solution (nothing was expanded).
    pub avg_branching: Option<f64>,
}

/// A search tree over a [`Problem`].
///
/// Owns every node it generates. Counters are not reset between calls to
/// [`SearchTree::search`]; build a new tree per search.
///
/// # Examples
///
/// ```
/// use u_treesearch::tree::{Domain, Problem, SearchTree, Strategy};
///
/// struct Line;
///
/// impl Domain for Line {
///     type State = u32;
///     type Action = ();
///     type Goal = u32;
///     fn actions(&self, _s: &u32) -> Vec<()> { vec![()] }
///     fn result(&self, s: &u32, _a: &()) -> u32 { s + 1 }
///     fn cost(&self, _s: &u32, _a: &()) -> f64 { 1.0 }
///     fn heuristic(&self, s: &u32, g: &u32) -> f64 { g.saturating_sub(*s) as f64 }
///     fn satisfies(&self, s: &u32, g: &u32) -> bool { s == g }
/// }
///
/// let domain = Line;
/// let problem = Problem::new(&domain, 0, 3);
/// let mut tree = SearchTree::new(&problem, Strategy::AStar);
///
/// assert_eq!(tree.search(10), Some(vec![0, 1, 2, 3]));
/// assert_eq!(tree.cost(), 3.0);
/// assert_eq!(tree.length(), Some(3));
/// ```
pub struct SearchTree<'a, D: Domain> {
    problem: &'a Problem<'a, D>,
    strategy: Strategy,
    arena: NodeArena<D::State>,
    root: NodeId,
    frontier: Frontier,
    terminals: usize,
    non_terminals: usize,
    solution: Option<NodeId>,
    cost: f64,
    avg_branching: Option<f64>,
    status: SearchStatus,
}

impl<'a, D: Domain> SearchTree<'a, D> {
    /// Creates a tree whose frontier holds only the root node.
    pub fn new(problem: &'a Problem<'a, D>, strategy: Strategy) -> Self {
        let mut arena = NodeArena::new();
        let root = arena.push(Node::root(problem.initial().clone()));
        Self {
            problem,
            strategy,
            arena,
            root,
            frontier: Frontier::with_root(root),
            terminals: 0,
            non_terminals: 0,
            solution: None,
            cost: 0.0,
            avg_branching: None,
            status: SearchStatus::Idle,
        }
    }

    /// Creates a tree from a strategy identifier such as `"a*"`.
    ///
    /// Unknown identifiers are rejected here rather than during search.
    pub fn with_strategy_name(
        problem: &'a Problem<'a, D>,
        strategy: &str,
    ) -> Result<Self, SearchError> {
        Ok(Self::new(problem, strategy.parse()?))
    }

    /// Searches with the default depth limit of 100.
    pub fn search_default(&mut self) -> Option<Vec<D::State>> {
        self.search(DEFAULT_DEPTH_LIMIT)
    }

    /// Runs the search to completion.
    ///
    /// Returns the states from the initial state to the first goal state
    /// popped, or `None` if the frontier empties. Nodes deeper than `limit`
    /// are discarded without being tested or expanded.
    pub fn search(&mut self, limit: usize) -> Option<Vec<D::State>> {
        self.status = SearchStatus::Searching;
        debug!(strategy = %self.strategy, limit, "tree search started");

        while let Some(id) = self.frontier.pop_front() {
            self.terminals = self.frontier.len();

            let Some(node) = self.arena.get(id) else {
                continue;
            };
            let depth = node.depth;
            if depth > limit {
                trace!(node = id.index(), depth, "depth cutoff");
                continue;
            }

            if self.problem.goal_test(&node.state) {
                return Some(self.record_solution(id));
            }

            let children = self.expand(id);
            self.non_terminals += 1;
            trace!(
                node = id.index(),
                depth,
                children = children.len(),
                "expanded"
            );
            self.frontier.insert(children, self.strategy, &self.arena);
        }

        self.status = SearchStatus::Exhausted;
        debug!(
            terminals = self.terminals,
            non_terminals = self.non_terminals,
            nodes = self.arena.len(),
            "tree search exhausted"
        );
        None
    }

    /// Generates the children of `id`, keeping those whose state does not
    /// already occur on the path from `id` to the root.
    fn expand(&mut self, id: NodeId) -> Vec<NodeId> {
        let domain = self.problem.domain();
        let (state, depth, cost) = match self.arena.get(id) {
            Some(node) => (node.state.clone(), node.depth, node.cost),
            None => return Vec::new(),
        };

        let mut children = Vec::new();
        for action in domain.actions(&state) {
            let successor = domain.result(&state, &action);
            let h = domain.heuristic(&successor, self.problem.goal());
            let step_cost = domain.cost(&state, &action);
            if self.arena.is_ancestor_state(id, &successor) {
                continue;
            }
            let child = Node::new(successor, Some(id), depth + 1, cost + step_cost, h);
            children.push(self.arena.push(child));
        }
        children
    }

    fn record_solution(&mut self, id: NodeId) -> Vec<D::State> {
        if let Some(node) = self.arena.get_mut(id) {
            node.heuristic = 0.0;
            self.cost = node.cost;
        }
        self.solution = Some(id);
        self.status = SearchStatus::Solved;
        self.avg_branching = branching_factor(self.terminals, self.non_terminals);

        info!(
            terminals = self.terminals,
            non_terminals = self.non_terminals,
            cost = self.cost,
            "tree search solved"
        );
        self.arena.path_to_root(id)
    }

    /// The strategy this tree was built with.
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// The problem being searched.
    pub fn problem(&self) -> &'a Problem<'a, D> {
        self.problem
    }

    /// Current lifecycle state.
    pub fn status(&self) -> SearchStatus {
        self.status
    }

    /// Frontier size right after the last pop.
    pub fn terminals(&self) -> usize {
        self.terminals
    }

    /// Number of nodes expanded so far.
    pub fn non_terminals(&self) -> usize {
        self.non_terminals
    }

    /// Total cost of the solution found, `0.0` before one is found.
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Average branching factor, see [`SearchStats::avg_branching`].
    pub fn avg_branching(&self) -> Option<f64> {
        self.avg_branching
    }

    /// Both diagnostic counters and the branching factor.
    pub fn stats(&self) -> SearchStats {
        SearchStats {
            terminals: self.terminals,
            non_terminals: self.non_terminals,
            avg_branching: self.avg_branching,
        }
    }

    /// The root node.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// The goal node found, if any.
    pub fn solution(&self) -> Option<&Node<D::State>> {
        self.solution.and_then(|id| self.arena.get(id))
    }

    /// Id of the goal node found, if any.
    pub fn solution_id(&self) -> Option<NodeId> {
        self.solution
    }

    /// Depth of the solution (number of actions), `None` without one.
    pub fn length(&self) -> Option<usize> {
        self.solution().map(|node| node.depth)
    }

    /// Looks up any node generated by this tree.
    pub fn node(&self, id: NodeId) -> Option<&Node<D::State>> {
        self.arena.get(id)
    }

    /// States from the root down to `id`.
    pub fn path(&self, id: NodeId) -> Vec<D::State> {
        self.arena.path_to_root(id)
    }

    /// All nodes generated so far, including discarded ones.
    pub fn nodes(&self) -> &NodeArena<D::State> {
        &self.arena
    }

    /// The current frontier, front first.
    pub fn frontier(&self) -> &Frontier {
        &self.frontier
    }
}

/// `(terminals + non_terminals - 1) / non_terminals`, rounded to two
/// decimals; `None` when nothing was expanded.
fn branching_factor(terminals: usize, non_terminals: usize) -> Option<f64> {
    if non_terminals == 0 {
        return None;
    }
    let ratio = (terminals + non_terminals) as f64 - 1.0;
    let ratio = ratio / non_terminals as f64;
    Some((ratio * 100.0).round() / 100.0)
}

/// Result of a [`TreeRunner`] run.
#[derive(Debug, Clone)]
pub struct TreeResult<S: Clone> {
    /// States from the initial state to the goal, `None` if unsolved.
    pub path: Option<Vec<S>>,

    /// Total cost of the path (`0.0` if unsolved).
    pub cost: f64,

    /// Number of actions on the path.
    pub length: Option<usize>,

    /// Diagnostic counters.
    pub stats: SearchStats,

    /// Final status: `Solved` or `Exhausted`.
    pub status: SearchStatus,

    /// Total nodes generated.
    pub nodes_generated: usize,
}

impl<S: Clone> TreeResult<S> {
    /// Returns true if a goal was reached.
    pub fn is_solved(&self) -> bool {
        self.status == SearchStatus::Solved
    }
}

/// Executes a one-shot tree search from a [`TreeConfig`].
pub struct TreeRunner;

impl TreeRunner {
    /// Builds a fresh tree for `problem` and searches it.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_treesearch::tree::{Domain, Problem, TreeConfig, TreeRunner};
    ///
    /// struct Line;
    /// impl Domain for Line {
    ///     type State = u32;
    ///     type Action = ();
    ///     type Goal = u32;
    ///     fn actions(&self, _s: &u32) -> Vec<()> { vec![()] }
    ///     fn result(&self, s: &u32, _a: &()) -> u32 { s + 1 }
    ///     fn cost(&self, _s: &u32, _a: &()) -> f64 { 1.0 }
    ///     fn heuristic(&self, _s: &u32, _g: &u32) -> f64 { 0.0 }
    ///     fn satisfies(&self, s: &u32, g: &u32) -> bool { s == g }
    /// }
    ///
    /// let domain = Line;
    /// let problem = Problem::new(&domain, 0, 5);
    /// let config = TreeConfig::from_identifier("uniform", 3).unwrap();
    ///
    /// let result = TreeRunner::run(&problem, &config);
    /// assert!(!result.is_solved());
    /// ```
    pub fn run<'a, D: Domain>(
        problem: &'a Problem<'a, D>,
        config: &TreeConfig,
    ) -> TreeResult<D::State> {
        let mut tree = SearchTree::new(problem, config.strategy);
        let path = tree.search(config.limit);

        TreeResult {
            path,
            cost: tree.cost(),
            length: tree.length(),
            stats: tree.stats(),
            status: tree.status(),
            nodes_generated: tree.nodes().len(),
        }
    }
}
