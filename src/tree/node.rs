//! Search tree nodes and the arena that owns them.

use std::fmt;

/// Index of a node inside a [`NodeArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// The position of the node in creation order.
    pub fn index(self) -> usize {
        self.0
    }
}

/// One position in the explored tree.
///
/// Nodes are immutable after creation except for `heuristic`, which the
/// engine overwrites while expanding the node and zeroes on the solution.
#[derive(Debug, Clone)]
pub struct Node<S> {
    /// The domain state at this node.
    pub state: S,
    /// Parent node (`None` for the root). Non-owning.
    pub parent: Option<NodeId>,
    /// Tree depth (root = 0).
    pub depth: usize,
    /// Accumulated path cost from the root.
    pub cost: f64,
    /// Last computed heuristic value.
    pub heuristic: f64,
}

impl<S> Node<S> {
    /// Creates a node, storing every field verbatim.
    pub fn new(state: S, parent: Option<NodeId>, depth: usize, cost: f64, heuristic: f64) -> Self {
        Self {
            state,
            parent,
            depth,
            cost,
            heuristic,
        }
    }

    /// Creates a root node: no parent, depth 0, cost 0, heuristic 0.
    pub fn root(state: S) -> Self {
        Self::new(state, None, 0, 0.0, 0.0)
    }

    /// `cost + heuristic`, the A* ordering key.
    pub fn estimated_total(&self) -> f64 {
        self.cost + self.heuristic
    }
}

impl<S: fmt::Debug> fmt::Display for Node<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.parent {
            Some(parent) => write!(f, "node({:?}, #{})", self.state, parent.0),
            None => write!(f, "node({:?}, root)", self.state),
        }
    }
}

/// Owns every node created during a search.
///
/// Nodes are appended and never removed, so a [`NodeId`] stays valid for
/// the arena's lifetime. Parent links are indices, which keeps the tree
/// free of reference cycles and lets every walk be iterative.
#[derive(Debug, Clone)]
pub struct NodeArena<S> {
    nodes: Vec<Node<S>>,
}

impl<S> Default for NodeArena<S> {
    fn default() -> Self {
        Self { nodes: Vec::new() }
    }
}

impl<S> NodeArena<S> {
    /// Creates an empty arena.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `node` and returns its id.
    pub fn push(&mut self, node: Node<S>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    /// Returns the node, or `None` if `id` belongs to another arena.
    pub fn get(&self, id: NodeId) -> Option<&Node<S>> {
        self.nodes.get(id.0)
    }

    /// Mutable access to a node.
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node<S>> {
        self.nodes.get_mut(id.0)
    }

    /// Number of nodes ever created.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if no node has been created.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterates over every node in creation order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node<S>)> {
        self.nodes.iter().enumerate().map(|(i, n)| (NodeId(i), n))
    }

    /// Iterates over `id` and then each of its ancestors up to the root.
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_, S> {
        Ancestors {
            arena: self,
            next: Some(id),
        }
    }

    /// States from the root down to `id`, inclusive.
    ///
    /// Returns a single-element path for the root and an empty path for an
    /// unknown id.
    pub fn path_to_root(&self, id: NodeId) -> Vec<S>
    where
        S: Clone,
    {
        let mut path: Vec<S> = self.ancestors(id).map(|n| n.state.clone()).collect();
        path.reverse();
        path
    }

    /// Returns true if `candidate` equals the state of `id` or of any of its
    /// ancestors, root included.
    ///
    /// A node is always its own ancestor under this check.
    pub fn is_ancestor_state(&self, id: NodeId, candidate: &S) -> bool
    where
        S: PartialEq,
    {
        self.ancestors(id).any(|n| n.state == *candidate)
    }
}

/// Iterator over a node and its ancestors, nearest first.
pub struct Ancestors<'a, S> {
    arena: &'a NodeArena<S>,
    next: Option<NodeId>,
}

impl<'a, S> Iterator for Ancestors<'a, S> {
    type Item = &'a Node<S>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.arena.get(self.next?)?;
        self.next = node.parent;
        Some(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Builds the chain a -> b -> c -> d and returns the arena and ids.
    fn chain() -> (NodeArena<char>, Vec<NodeId>) {
        let mut arena = NodeArena::new();
        let mut ids = Vec::new();
        let mut parent = None;
        for (depth, state) in ['a', 'b', 'c', 'd'].into_iter().enumerate() {
            let id = arena.push(Node::new(state, parent, depth, depth as f64, 0.0));
            ids.push(id);
            parent = Some(id);
        }
        (arena, ids)
    }

    #[test]
    fn test_is_ancestor_state_on_chain() {
        let (arena, ids) = chain();
        let leaf = ids[3];

        for state in ['a', 'b', 'c', 'd'] {
            assert!(arena.is_ancestor_state(leaf, &state), "{state} is on the chain");
        }
        assert!(!arena.is_ancestor_state(leaf, &'z'));
    }

    #[test]
    fn test_is_ancestor_state_ignores_descendants() {
        let (arena, ids) = chain();

        assert!(arena.is_ancestor_state(ids[1], &'a'));
        assert!(arena.is_ancestor_state(ids[1], &'b'));
        assert!(!arena.is_ancestor_state(ids[1], &'c'));
        assert!(!arena.is_ancestor_state(ids[1], &'d'));
    }

    #[test]
    fn test_root_is_its_own_ancestor() {
        let (arena, ids) = chain();
        assert!(arena.is_ancestor_state(ids[0], &'a'));
        assert!(!arena.is_ancestor_state(ids[0], &'b'));
    }

    #[test]
    fn test_path_to_root_order() {
        let (arena, ids) = chain();
        assert_eq!(arena.path_to_root(ids[3]), vec!['a', 'b', 'c', 'd']);
        assert_eq!(arena.path_to_root(ids[2]), vec!['a', 'b', 'c']);
    }

    #[test]
    fn test_path_of_root_is_single_state() {
        let mut arena = NodeArena::new();
        let root = arena.push(Node::root(7u8));
        assert_eq!(arena.path_to_root(root), vec![7]);
    }

    #[test]
    fn test_deep_chain_is_iterative() {
        let mut arena = NodeArena::new();
        let mut parent = None;
        for depth in 0..200_000usize {
            parent = Some(arena.push(Node::new(depth, parent, depth, 0.0, 0.0)));
        }
        let leaf = parent.unwrap();
        assert_eq!(arena.path_to_root(leaf).len(), 200_000);
        assert!(arena.is_ancestor_state(leaf, &0));
    }

    #[test]
    fn test_root_defaults() {
        let root = Node::root("s");
        assert_eq!(root.depth, 0);
        assert!(root.parent.is_none());
        assert_eq!(root.cost, 0.0);
        assert_eq!(root.heuristic, 0.0);
    }

    #[test]
    fn test_display() {
        let (arena, ids) = chain();
        assert_eq!(arena.get(ids[0]).unwrap().to_string(), "node('a', root)");
        assert_eq!(arena.get(ids[2]).unwrap().to_string(), "node('c', #1)");
    }

    #[test]
    fn test_estimated_total() {
        let node = Node::new((), None, 3, 2.5, 4.0);
        assert!((node.estimated_total() - 6.5).abs() < 1e-10);
    }
}
