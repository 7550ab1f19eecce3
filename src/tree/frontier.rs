//! Open list of generated but unexpanded nodes.

use std::collections::VecDeque;

use super::config::Strategy;
use super::node::{Node, NodeArena, NodeId};

/// The frontier. Order is established at insertion time; pops always take
/// the front.
#[derive(Debug, Clone, Default)]
pub struct Frontier {
    open: VecDeque<NodeId>,
}

impl Frontier {
    /// Creates an empty frontier.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a frontier holding only `root`.
    pub fn with_root(root: NodeId) -> Self {
        Self {
            open: VecDeque::from([root]),
        }
    }

    /// Removes and returns the front node.
    pub fn pop_front(&mut self) -> Option<NodeId> {
        self.open.pop_front()
    }

    pub fn len(&self) -> usize {
        self.open.len()
    }

    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }

    /// Node ids in pop order.
    pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.open.iter().copied()
    }

    /// Inserts `children` and restores the ordering `strategy` requires.
    ///
    /// Children keep their generation order relative to each other. The
    /// informed strategies re-sort the whole frontier with a stable sort,
    /// so ties keep their post-insertion order. Keys follow IEEE total
    /// order: NaN sorts after `+inf`.
    pub fn insert<S>(&mut self, children: Vec<NodeId>, strategy: Strategy, arena: &NodeArena<S>) {
        match strategy {
            Strategy::Breadth => self.open.extend(children),
            Strategy::Depth => self.prepend(children),
            Strategy::Uniform => {
                self.prepend(children);
                self.sort_by_key(arena, |n| n.cost);
            }
            Strategy::Greedy => {
                self.prepend(children);
                self.sort_by_key(arena, |n| n.heuristic);
            }
            Strategy::AStar => {
                self.prepend(children);
                self.sort_by_key(arena, Node::estimated_total);
            }
        }
    }

    fn prepend(&mut self, children: Vec<NodeId>) {
        for id in children.into_iter().rev() {
            self.open.push_front(id);
        }
    }

    fn sort_by_key<S>(&mut self, arena: &NodeArena<S>, key: impl Fn(&Node<S>) -> f64) {
        let key_of = |id: &NodeId| arena.get(*id).map_or(f64::INFINITY, &key);
        self.open
            .make_contiguous()
            .sort_by(|a, b| key_of(a).total_cmp(&key_of(b)));
    }
}
