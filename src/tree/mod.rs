//! Tree search over state spaces.
//!
//! Explores successive states from an initial state until a goal is
//! satisfied, returning the path found. Users describe their problem by
//! implementing [`Domain`]; the engine handles node bookkeeping, frontier
//! ordering and cycle avoidance along the current path.
//!
//! # Key Types
//!
//! - [`Domain`]: Actions, transitions, costs, heuristic and goal test
//! - [`Problem`]: A domain with an initial state and a goal
//! - [`SearchTree`]: Owns the nodes and frontier, runs the search
//! - [`Strategy`]: Breadth, depth, uniform-cost, greedy or A*
//! - [`TreeRunner`]: One-shot search from a [`TreeConfig`]
//!
//! # References
//!
//! - Russell & Norvig (2020), *Artificial Intelligence: A Modern Approach*, ch. 3
//! - Hart, Nilsson & Raphael (1968), "A Formal Basis for the Heuristic
//!   Determination of Minimum Cost Paths"

mod config;
mod frontier;
mod node;
mod runner;
mod types;

pub use config::{Strategy, TreeConfig, DEFAULT_DEPTH_LIMIT};
pub use frontier::Frontier;
pub use node::{Ancestors, Node, NodeArena, NodeId};
pub use runner::{SearchStats, SearchStatus, SearchTree, TreeResult, TreeRunner};
pub use types::{Domain, Problem};
