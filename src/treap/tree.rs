use crate::error::TreapError;
use crate::treap::node::Node;
use std::cmp::Ordering;

pub type Tree<T> = Option<Box<Node<T>>>;

pub fn len<T>(tree: &Tree<T>) -> usize {
    match tree {
        Some(ref node) => node.len,
        None => 0,
    }
}

pub fn height<T>(tree: &Tree<T>) -> usize {
    match tree {
        Some(ref node) => 1 + height(&node.left).max(height(&node.right)),
        None => 0,
    }
}

// `child` is the detached right child of `node`. It becomes the new subtree root.
fn rotate_left<T>(mut node: Box<Node<T>>, mut child: Box<Node<T>>) -> Box<Node<T>> {
    node.right = child.left.take();
    node.update();
    child.left = Some(node);
    child.update();
    child
}

// `child` is the detached left child of `node`. It becomes the new subtree root.
fn rotate_right<T>(mut node: Box<Node<T>>, mut child: Box<Node<T>>) -> Box<Node<T>> {
    node.left = child.right.take();
    node.update();
    child.right = Some(node);
    child.update();
    child
}

pub fn insert<T>(tree: Tree<T>, new_node: Node<T>) -> Box<Node<T>>
where
    T: Ord,
{
    let mut node = match tree {
        Some(node) => node,
        None => return Box::new(new_node),
    };

    if new_node.key < node.key {
        let child = insert(node.left.take(), new_node);
        if child.priority > node.priority {
            return rotate_right(node, child);
        }
        node.left = Some(child);
    } else {
        let child = insert(node.right.take(), new_node);
        if child.priority > node.priority {
            return rotate_left(node, child);
        }
        node.right = Some(child);
    }

    node.update();
    node
}

pub fn remove<T>(tree: Tree<T>, key: &T) -> (Tree<T>, Option<T>)
where
    T: Ord,
{
    let mut node = match tree {
        Some(node) => node,
        None => return (None, None),
    };

    let removed = match key.cmp(&node.key) {
        Ordering::Less => {
            let (left, removed) = remove(node.left.take(), key);
            node.left = left;
            removed
        },
        Ordering::Greater => {
            let (right, removed) = remove(node.right.take(), key);
            node.right = right;
            removed
        },
        Ordering::Equal => {
            let (tree, key) = remove_root(node);
            return (tree, Some(key));
        },
    };

    node.update();
    (Some(node), removed)
}

// Pushes `node` down until it has at most one child, then splices it out.
fn remove_root<T>(mut node: Box<Node<T>>) -> (Tree<T>, T) {
    match (node.left.take(), node.right.take()) {
        (None, None) => (None, node.key),
        (Some(child), None) | (None, Some(child)) => (Some(child), node.key),
        (Some(left), Some(mut right)) => {
            if left.priority < right.priority {
                // rotate left: `right` rises and `node` continues down its left slot
                node.left = Some(left);
                node.right = right.left.take();
                let (subtree, key) = remove_root(node);
                right.left = subtree;
                right.update();
                (Some(right), key)
            } else {
                let mut left = left;
                node.right = Some(right);
                node.left = left.right.take();
                let (subtree, key) = remove_root(node);
                left.right = subtree;
                left.update();
                (Some(left), key)
            }
        },
    }
}

/// Cuts `tree` along the search path of `key`. The first tree holds every key less than `key`
/// and the second holds every key greater than or equal to `key`.
pub fn split<T>(tree: Tree<T>, key: &T) -> (Tree<T>, Tree<T>)
where
    T: Ord,
{
    match tree {
        Some(mut node) => {
            if node.key < *key {
                let (low, high) = split(node.right.take(), key);
                node.right = low;
                node.update();
                (Some(node), high)
            } else {
                let (low, high) = split(node.left.take(), key);
                node.left = high;
                node.update();
                (low, Some(node))
            }
        },
        None => (None, None),
    }
}

// precondition: every key in `low` is less than or equal to every key in `high`
pub fn join<T>(low: Tree<T>, high: Tree<T>) -> Tree<T> {
    match (low, high) {
        (Some(mut low_node), Some(mut high_node)) => {
            if low_node.priority >= high_node.priority {
                low_node.right = join(low_node.right.take(), Some(high_node));
                low_node.update();
                Some(low_node)
            } else {
                high_node.left = join(Some(low_node), high_node.left.take());
                high_node.update();
                Some(high_node)
            }
        },
        (tree, None) | (None, tree) => tree,
    }
}

pub fn search<'a, T>(tree: &'a Tree<T>, key: &T) -> Option<&'a Node<T>>
where
    T: Ord,
{
    let mut curr = tree;
    while let Some(ref node) = *curr {
        match key.cmp(&node.key) {
            Ordering::Less => curr = &node.left,
            Ordering::Greater => curr = &node.right,
            Ordering::Equal => return Some(&**node),
        }
    }
    None
}

pub fn min<T>(tree: &Tree<T>) -> Option<&T> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref left_node) = curr.left {
            curr = left_node;
        }
        &curr.key
    })
}

pub fn max<T>(tree: &Tree<T>) -> Option<&T> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref right_node) = curr.right {
            curr = right_node;
        }
        &curr.key
    })
}

pub fn rank<T>(tree: &Tree<T>, key: &T) -> usize
where
    T: Ord,
{
    let mut curr = tree;
    let mut ret = 0;
    while let Some(ref node) = *curr {
        if node.key < *key {
            ret += len(&node.left) + 1;
            curr = &node.right;
        } else {
            curr = &node.left;
        }
    }
    ret
}

pub fn select<T>(tree: &Tree<T>, mut index: usize) -> Option<&T> {
    let mut curr = tree;
    while let Some(ref node) = *curr {
        let left_len = len(&node.left);
        match index.cmp(&left_len) {
            Ordering::Less => curr = &node.left,
            Ordering::Equal => return Some(&node.key),
            Ordering::Greater => {
                index -= left_len + 1;
                curr = &node.right;
            },
        }
    }
    None
}

pub fn in_order<'a, T>(tree: &'a Tree<T>, keys: &mut Vec<&'a T>) {
    if let Some(ref node) = tree {
        in_order(&node.left, keys);
        keys.push(&node.key);
        in_order(&node.right, keys);
    }
}

pub fn pre_order<'a, T>(tree: &'a Tree<T>, keys: &mut Vec<&'a T>) {
    if let Some(ref node) = tree {
        keys.push(&node.key);
        pre_order(&node.left, keys);
        pre_order(&node.right, keys);
    }
}

pub fn post_order<'a, T>(tree: &'a Tree<T>, keys: &mut Vec<&'a T>) {
    if let Some(ref node) = tree {
        post_order(&node.left, keys);
        post_order(&node.right, keys);
        keys.push(&node.key);
    }
}

pub fn validate<T>(tree: &Tree<T>) -> Result<(), TreapError>
where
    T: Ord,
{
    validate_subtree(tree, None, None).map(|_| ())
}

// Returns the number of nodes in the subtree if it is valid.
fn validate_subtree<T>(
    tree: &Tree<T>,
    lower: Option<&T>,
    upper: Option<&T>,
) -> Result<usize, TreapError>
where
    T: Ord,
{
    let node = match tree {
        Some(ref node) => node,
        None => return Ok(0),
    };

    let below_lower = lower.map_or(false, |lower| node.key < *lower);
    let above_upper = upper.map_or(false, |upper| node.key > *upper);
    if below_lower || above_upper {
        return Err(TreapError::OrderViolation);
    }

    for child in [&node.left, &node.right].iter() {
        if let Some(ref child_node) = child {
            if child_node.priority > node.priority {
                return Err(TreapError::HeapViolation {
                    parent: node.priority,
                    child: child_node.priority,
                });
            }
        }
    }

    let left_len = validate_subtree(&node.left, lower, Some(&node.key))?;
    let right_len = validate_subtree(&node.right, Some(&node.key), upper)?;
    let expected = 1 + left_len + right_len;
    if node.len != expected {
        return Err(TreapError::LengthMismatch {
            expected,
            found: node.len,
        });
    }
    Ok(expected)
}
