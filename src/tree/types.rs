//! Core trait for tree search domains.

use std::fmt::Debug;

/// Defines a state-space problem domain.
///
/// The user implements the domain rules: which actions apply in a state,
/// where they lead, what they cost, how far a state is estimated to be
/// from a goal, and when a goal is satisfied. The search engine only calls
/// these operations; it never inspects states beyond value equality.
///
/// `Goal` is opaque to the engine: it is only handed back to
/// [`Domain::heuristic`] and [`Domain::satisfies`], so it may be a state, a
/// predicate, or anything else the domain understands.
///
/// # Examples
///
/// ```
/// use u_treesearch::tree::Domain;
///
/// /// States 0..=n on a line; the only move is one step forward.
/// struct Line;
///
/// impl Domain for Line {
///     type State = u32;
///     type Action = ();
///     type Goal = u32;
///
///     fn actions(&self, _state: &u32) -> Vec<()> { vec![()] }
///     fn result(&self, state: &u32, _action: &()) -> u32 { state + 1 }
///     fn cost(&self, _state: &u32, _action: &()) -> f64 { 1.0 }
///     fn heuristic(&self, state: &u32, goal: &u32) -> f64 {
///         goal.saturating_sub(*state) as f64
///     }
///     fn satisfies(&self, state: &u32, goal: &u32) -> bool { state == goal }
/// }
/// ```
pub trait Domain {
    /// The state representation. Equality is structural and drives cycle
    /// avoidance along the current path.
    type State: Clone + PartialEq + Debug;

    /// An action applicable in some state.
    type Action;

    /// The goal descriptor.
    type Goal;

    /// Returns every action legally applicable in `state`.
    ///
    /// An empty vector marks a dead end.
    fn actions(&self, state: &Self::State) -> Vec<Self::Action>;

    /// Returns the successor of `state` under `action`.
    ///
    /// Must be deterministic. Only called with actions returned by
    /// [`Domain::actions`] for the same state.
    fn result(&self, state: &Self::State, action: &Self::Action) -> Self::State;

    /// Incremental cost of taking `action` from `state`. Conventionally `>= 0`.
    fn cost(&self, state: &Self::State, action: &Self::Action) -> f64;

    /// Estimated cost from `state` to satisfying `goal`.
    ///
    /// Greedy and A* are only optimal when this never overestimates.
    fn heuristic(&self, state: &Self::State, goal: &Self::Goal) -> f64;

    /// Returns true if `state` satisfies `goal`.
    fn satisfies(&self, state: &Self::State, goal: &Self::Goal) -> bool;
}

/// A concrete problem: a domain paired with an initial state and a goal.
///
/// The domain is borrowed; the problem is read-only after construction.
pub struct Problem<'d, D: Domain> {
    domain: &'d D,
    initial: D::State,
    goal: D::Goal,
}

impl<'d, D: Domain> Problem<'d, D> {
    /// Creates a problem over `domain`.
    pub fn new(domain: &'d D, initial: D::State, goal: D::Goal) -> Self {
        Self {
            domain,
            initial,
            goal,
        }
    }

    /// The domain rules.
    pub fn domain(&self) -> &'d D {
        self.domain
    }

    /// The initial state.
    pub fn initial(&self) -> &D::State {
        &self.initial
    }

    /// The goal descriptor.
    pub fn goal(&self) -> &D::Goal {
        &self.goal
    }

    /// Returns true if `state` satisfies this problem's goal.
    pub fn goal_test(&self, state: &D::State) -> bool {
        self.domain.satisfies(state, &self.goal)
    }
}
