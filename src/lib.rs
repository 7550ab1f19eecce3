//! Domain-agnostic tree search engine.
//!
//! Solves state-space problems by exploring a search tree from an initial
//! state until a goal condition holds. Five interchangeable strategies
//! decide the exploration order:
//!
//! - **Breadth-first**: FIFO frontier, shortest paths in number of actions.
//! - **Depth-first**: most recently generated node first.
//! - **Uniform-cost**: lowest accumulated path cost first.
//! - **Greedy best-first**: lowest heuristic estimate first.
//! - **A\***: lowest `cost + heuristic` first.
//!
//! # Architecture
//!
//! The crate contains no domain-specific concepts. Puzzles, route finding,
//! planning and the like are defined by consumers implementing
//! [`tree::Domain`].
//!
//! Searches log through `tracing`; install a subscriber to see them.

pub mod error;
pub mod tree;

pub use error::SearchError;
