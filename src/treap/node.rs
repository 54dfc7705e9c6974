use crate::treap::tree;

/// A struct representing an internal node of a treap.
#[derive(Serialize, Deserialize)]
pub struct Node<T> {
    pub key: T,
    pub priority: u32,
    pub len: usize,
    pub left: tree::Tree<T>,
    pub right: tree::Tree<T>,
}

impl<T> Node<T> {
    pub fn new(key: T, priority: u32) -> Self {
        Node {
            key,
            priority,
            len: 1,
            left: None,
            right: None,
        }
    }

    pub fn update(&mut self) {
        let Node {
            ref mut len,
            ref left,
            ref right,
            ..
        } = self;
        *len = 1 + tree::len(left) + tree::len(right);
    }
}

/// A read-only view of a node inside a `Treap<T>`.
///
/// Views expose the key, the priority, and the two children of a node so that callers can
/// inspect the shape of a treap without being able to break its invariants.
pub struct NodeView<'a, T> {
    node: &'a Node<T>,
}

impl<'a, T> NodeView<'a, T> {
    pub(crate) fn new(node: &'a Node<T>) -> Self {
        NodeView { node }
    }

    /// Returns the key stored in the node.
    pub fn key(&self) -> &'a T {
        &self.node.key
    }

    /// Returns the heap priority of the node.
    pub fn priority(&self) -> u32 {
        self.node.priority
    }

    /// Returns the number of keys in the subtree rooted at this node.
    pub fn subtree_len(&self) -> usize {
        self.node.len
    }

    /// Returns the root of the left subtree, if any.
    pub fn left(&self) -> Option<NodeView<'a, T>> {
        self.node.left.as_ref().map(|node| NodeView::new(node))
    }

    /// Returns the root of the right subtree, if any.
    pub fn right(&self) -> Option<NodeView<'a, T>> {
        self.node.right.as_ref().map(|node| NodeView::new(node))
    }
}

impl<'a, T> Clone for NodeView<'a, T> {
    fn clone(&self) -> Self {
        NodeView { node: self.node }
    }
}

impl<'a, T> Copy for NodeView<'a, T> {}
