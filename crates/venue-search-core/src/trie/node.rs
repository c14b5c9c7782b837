use std::collections::BTreeMap;

/// Index of a node in the arena
pub(crate) type NodeId = usize;

/// Index of a venue in the venue table
pub(crate) type Slot = usize;

/// The root node always lives at index 0
pub(crate) const ROOT: NodeId = 0;

/// One vertex of the prefix tree
///
/// Children are kept in a `BTreeMap` so traversal visits branches in
/// ascending character order.
#[derive(Debug, Default)]
pub(crate) struct Node {
    pub(crate) children: BTreeMap<char, NodeId>,
    pub(crate) end_of_word: bool,
    /// Venue slots reachable through this path, in first-insertion order
    pub(crate) venues: Vec<Slot>,
}
