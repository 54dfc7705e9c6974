use crate::error::TreapError;
use crate::priority::{PrioritySource, RandomPriority};
use crate::treap::node::{Node, NodeView};
use crate::treap::tree;
use std::iter::FromIterator;

/// An ordered multiset implemented by a treap.
///
/// A treap is a tree that satisfies both the binary search tree property and a heap property. Each
/// node has a key and a priority. Keys in the left subtree of a node are no greater than the key
/// of the node, and keys in the right subtree are no less. The priority of a node is greater than
/// or equal to the priority of all nodes in its subtrees. By randomly generating priorities, the
/// expected height of the tree is proportional to the logarithm of the number of keys.
///
/// Equal keys are kept as distinct nodes. A key equal to an existing key is inserted into the
/// right subtree of that key.
///
/// # Examples
///
/// ```
/// use treap_collections::Treap;
///
/// let mut t = Treap::new();
/// t.insert(0);
/// t.insert(3);
/// t.insert(3);
///
/// assert_eq!(t.len(), 3);
/// assert_eq!(t.search(&3).map(|node| *node.key()), Some(3));
/// assert!(t.search(&2).is_none());
///
/// assert_eq!(t.delete(&3), Some(3));
/// assert_eq!(t.in_order(), vec![&0, &3]);
/// ```
pub struct Treap<T, S = RandomPriority> {
    pub(super) root: tree::Tree<T>,
    pub(super) priorities: S,
}

impl<T> Treap<T>
where
    T: Ord,
{
    /// Constructs a new, empty `Treap<T>` whose priorities are drawn by `RandomPriority::new`.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_collections::Treap;
    ///
    /// let t: Treap<u32> = Treap::new();
    /// assert!(t.is_empty());
    /// ```
    pub fn new() -> Self {
        Self::with_priorities(RandomPriority::new())
    }
}

impl<T, S> Treap<T, S>
where
    T: Ord,
    S: PrioritySource,
{
    /// Constructs a new, empty `Treap<T, S>` that draws node priorities from `priorities`.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_collections::Treap;
    /// use treap_collections::priority::RandomPriority;
    ///
    /// let mut t = Treap::with_priorities(RandomPriority::from_seed([1, 1, 1, 1]));
    /// t.insert(1);
    /// assert!(t.contains(&1));
    /// ```
    pub fn with_priorities(priorities: S) -> Self {
        Treap {
            root: None,
            priorities,
        }
    }

    /// Inserts a key into the treap with a freshly drawn priority. Inserting a key that already
    /// exists adds another occurrence of it.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_collections::Treap;
    ///
    /// let mut t = Treap::new();
    /// t.insert(1);
    /// t.insert(1);
    /// assert_eq!(t.len(), 2);
    /// ```
    pub fn insert(&mut self, key: T) {
        let priority = self.priorities.next_priority();
        self.insert_with_priority(key, priority);
    }

    /// Inserts a key into the treap with a given priority.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_collections::Treap;
    ///
    /// let mut t = Treap::new();
    /// t.insert_with_priority(1, 10);
    /// t.insert_with_priority(2, 20);
    /// assert_eq!(t.root().map(|node| *node.key()), Some(2));
    /// ```
    pub fn insert_with_priority(&mut self, key: T, priority: u32) {
        let root = self.root.take();
        self.root = Some(tree::insert(root, Node::new(key, priority)));
    }

    /// Removes one occurrence of a key from the treap. Returns the removed key, or `None` if the
    /// key does not exist, in which case the treap is left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_collections::Treap;
    ///
    /// let mut t = Treap::new();
    /// t.insert(1);
    /// assert_eq!(t.delete(&1), Some(1));
    /// assert_eq!(t.delete(&1), None);
    /// ```
    pub fn delete(&mut self, key: &T) -> Option<T> {
        let (root, removed) = tree::remove(self.root.take(), key);
        self.root = root;
        if removed.is_none() {
            trace!("delete of a missing key left the treap unchanged");
        }
        removed
    }

    /// Splits the treap into two treaps. The first contains every key less than `key` and the
    /// second contains every key greater than or equal to `key`. The first treap keeps the
    /// priority source of `self` and the second receives a fork of it.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_collections::Treap;
    ///
    /// let t: Treap<u32> = (1..6).collect();
    /// let (low, high) = t.split(&3);
    /// assert_eq!(low.in_order(), vec![&1, &2]);
    /// assert_eq!(high.in_order(), vec![&3, &4, &5]);
    /// ```
    pub fn split(self, key: &T) -> (Self, Self) {
        let Treap {
            root,
            mut priorities,
        } = self;
        let high_priorities = priorities.fork();
        let (low_root, high_root) = tree::split(root, key);
        debug!(
            "split treap into {} and {} keys",
            tree::len(&low_root),
            tree::len(&high_root),
        );
        (
            Treap {
                root: low_root,
                priorities,
            },
            Treap {
                root: high_root,
                priorities: high_priorities,
            },
        )
    }

    /// Moves every key of `other` into `self` by inserting them one at a time. The key sets of
    /// the two treaps may overlap. Runs in `O(M log(N + M))` time where `M` is the size of
    /// `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_collections::Treap;
    ///
    /// let mut n: Treap<u32> = vec![1, 3, 5].into_iter().collect();
    /// let m: Treap<u32> = vec![2, 3, 4].into_iter().collect();
    /// n.merge(m);
    /// assert_eq!(n.in_order(), vec![&1, &2, &3, &3, &4, &5]);
    /// ```
    pub fn merge<U>(&mut self, other: Treap<T, U>) {
        debug!("merging {} keys into a treap of {} keys", other.len(), self.len());
        self.extend(other);
    }

    /// Concatenates two treaps whose key ranges do not overlap in expected `O(log N)` time.
    /// Every key of `low` must be less than or equal to every key of `high`. The result keeps
    /// the priority source of `low`.
    ///
    /// # Errors
    ///
    /// Returns `TreapError::OverlappingRanges` if the maximum key of `low` is greater than the
    /// minimum key of `high`. Both treaps are dropped in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_collections::{Treap, TreapError};
    ///
    /// let low: Treap<u32> = vec![1, 2].into_iter().collect();
    /// let high: Treap<u32> = vec![3, 4].into_iter().collect();
    /// let joined = Treap::join(low, high).unwrap();
    /// assert_eq!(joined.in_order(), vec![&1, &2, &3, &4]);
    ///
    /// let low: Treap<u32> = vec![1, 5].into_iter().collect();
    /// let high: Treap<u32> = vec![3, 4].into_iter().collect();
    /// assert_eq!(Treap::join(low, high).err(), Some(TreapError::OverlappingRanges));
    /// ```
    pub fn join<U>(low: Self, high: Treap<T, U>) -> Result<Self, TreapError> {
        if let (Some(low_max), Some(high_min)) = (low.max(), high.min()) {
            if low_max > high_min {
                return Err(TreapError::OverlappingRanges);
            }
        }
        debug!("joining treaps of {} and {} keys", low.len(), high.len());
        let Treap { root, priorities } = low;
        Ok(Treap {
            root: tree::join(root, high.root),
            priorities,
        })
    }

    /// Removes every key from the treap.
    pub fn clear(&mut self) {
        self.root = None;
    }
}

impl<T, S> Treap<T, S>
where
    T: Ord,
{
    /// Searches for a key. Returns a view of a node holding the key, or `None` if no such node
    /// exists. If the key occurs more than once, which of its nodes is returned is unspecified.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_collections::Treap;
    ///
    /// let mut t = Treap::new();
    /// t.insert(12);
    /// assert_eq!(t.search(&12).map(|node| *node.key()), Some(12));
    /// assert!(t.search(&20).is_none());
    /// ```
    pub fn search(&self, key: &T) -> Option<NodeView<T>> {
        tree::search(&self.root, key).map(NodeView::new)
    }

    /// Checks if a key exists in the treap.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_collections::Treap;
    ///
    /// let mut t = Treap::new();
    /// t.insert(1);
    /// assert!(!t.contains(&0));
    /// assert!(t.contains(&1));
    /// ```
    pub fn contains(&self, key: &T) -> bool {
        tree::search(&self.root, key).is_some()
    }

    /// Returns the number of keys less than `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_collections::Treap;
    ///
    /// let t: Treap<u32> = vec![1, 3, 3, 5].into_iter().collect();
    /// assert_eq!(t.rank(&3), 1);
    /// assert_eq!(t.rank(&4), 3);
    /// ```
    pub fn rank(&self, key: &T) -> usize {
        tree::rank(&self.root, key)
    }

    /// Returns the minimum key of the treap. Returns `None` if the treap is empty.
    pub fn min(&self) -> Option<&T> {
        tree::min(&self.root)
    }

    /// Returns the maximum key of the treap. Returns `None` if the treap is empty.
    pub fn max(&self) -> Option<&T> {
        tree::max(&self.root)
    }

    /// Checks that the treap satisfies the binary search tree property, the heap property, and
    /// that every cached subtree length is correct.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_collections::Treap;
    ///
    /// let t: Treap<u32> = (0..100).collect();
    /// assert!(t.validate().is_ok());
    /// ```
    pub fn validate(&self) -> Result<(), TreapError> {
        tree::validate(&self.root)
    }
}

impl<T, S> Treap<T, S> {
    /// Returns the number of keys in the treap, counting every occurrence of duplicate keys.
    pub fn len(&self) -> usize {
        tree::len(&self.root)
    }

    /// Returns `true` if the treap contains no keys.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the number of nodes on the longest path from the root to a leaf.
    pub fn height(&self) -> usize {
        tree::height(&self.root)
    }

    /// Returns a view of the root node, or `None` if the treap is empty.
    pub fn root(&self) -> Option<NodeView<T>> {
        self.root.as_ref().map(|node| NodeView::new(node))
    }

    /// Returns the key at a particular index in sorted order, starting from zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_collections::Treap;
    ///
    /// let t: Treap<u32> = vec![5, 1, 3].into_iter().collect();
    /// assert_eq!(t.select(1), Some(&3));
    /// assert_eq!(t.select(3), None);
    /// ```
    pub fn select(&self, index: usize) -> Option<&T> {
        tree::select(&self.root, index)
    }

    /// Returns the keys of the treap using in-order traversal.
    pub fn in_order(&self) -> Vec<&T> {
        let mut keys = Vec::with_capacity(self.len());
        tree::in_order(&self.root, &mut keys);
        keys
    }

    /// Returns the keys of the treap using pre-order traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_collections::Treap;
    ///
    /// let mut t = Treap::new();
    /// t.insert_with_priority(2, 30);
    /// t.insert_with_priority(1, 20);
    /// t.insert_with_priority(3, 10);
    /// assert_eq!(t.pre_order(), vec![&2, &1, &3]);
    /// assert_eq!(t.post_order(), vec![&1, &3, &2]);
    /// ```
    pub fn pre_order(&self) -> Vec<&T> {
        let mut keys = Vec::with_capacity(self.len());
        tree::pre_order(&self.root, &mut keys);
        keys
    }

    /// Returns the keys of the treap using post-order traversal.
    pub fn post_order(&self) -> Vec<&T> {
        let mut keys = Vec::with_capacity(self.len());
        tree::post_order(&self.root, &mut keys);
        keys
    }

    /// Returns an iterator over the treap. The iterator will yield keys using in-order
    /// traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_collections::Treap;
    ///
    /// let mut t = Treap::new();
    /// t.insert(1);
    /// t.insert(3);
    ///
    /// let mut iterator = t.iter();
    /// assert_eq!(iterator.next(), Some(&1));
    /// assert_eq!(iterator.next(), Some(&3));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> TreapIter<T> {
        TreapIter {
            current: &self.root,
            stack: Vec::new(),
        }
    }
}

impl<T, S> IntoIterator for Treap<T, S> {
    type Item = T;
    type IntoIter = TreapIntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        TreapIntoIter {
            current: self.root,
            stack: Vec::new(),
        }
    }
}

impl<'a, T, S> IntoIterator for &'a Treap<T, S>
where
    T: 'a,
{
    type Item = &'a T;
    type IntoIter = TreapIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An owning iterator for `Treap<T, S>`.
///
/// This iterator traverses the elements of a treap in-order and yields owned keys.
pub struct TreapIntoIter<T> {
    current: tree::Tree<T>,
    stack: Vec<Node<T>>,
}

impl<T> Iterator for TreapIntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(mut node) = self.current.take() {
            self.current = node.left.take();
            self.stack.push(*node);
        }
        self.stack.pop().map(|node| {
            let Node { key, right, .. } = node;
            self.current = right;
            key
        })
    }
}

/// An iterator for `Treap<T, S>`.
///
/// This iterator traverses the elements of a treap in-order and yields immutable references.
pub struct TreapIter<'a, T>
where
    T: 'a,
{
    current: &'a tree::Tree<T>,
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Iterator for TreapIter<'a, T>
where
    T: 'a,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(ref node) = *self.current {
            self.current = &node.left;
            self.stack.push(node);
        }
        self.stack.pop().map(|node| {
            let Node { ref key, ref right, .. } = *node;
            self.current = right;
            key
        })
    }
}

impl<T, S> Extend<T> for Treap<T, S>
where
    T: Ord,
    S: PrioritySource,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<T> FromIterator<T> for Treap<T>
where
    T: Ord,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut treap = Treap::new();
        treap.extend(iter);
        treap
    }
}

impl<T, S> Default for Treap<T, S>
where
    T: Ord,
    S: PrioritySource + Default,
{
    fn default() -> Self {
        Self::with_priorities(S::default())
    }
}

#[cfg(test)]
mod tests {
    use super::Treap;
    use crate::error::TreapError;
    use crate::priority::RandomPriority;

    fn seeded() -> Treap<u32> {
        Treap::with_priorities(RandomPriority::from_seed([1, 1, 1, 1]))
    }

    #[test]
    fn test_len_empty() {
        let tree: Treap<u32> = Treap::new();
        assert_eq!(tree.len(), 0);
        assert_eq!(tree.height(), 0);
        assert!(tree.root().is_none());
    }

    #[test]
    fn test_min_max_empty() {
        let tree: Treap<u32> = Treap::new();
        assert_eq!(tree.min(), None);
        assert_eq!(tree.max(), None);
    }

    #[test]
    fn test_insert() {
        let mut tree = seeded();
        tree.insert(1);
        assert!(tree.contains(&1));
        assert_eq!(tree.search(&1).map(|node| *node.key()), Some(1));
    }

    #[test]
    fn test_insert_duplicate() {
        let mut tree = seeded();
        tree.insert(1);
        tree.insert(1);
        assert_eq!(tree.len(), 2);
        assert_eq!(tree.in_order(), vec![&1, &1]);
        assert_eq!(tree.validate(), Ok(()));
    }

    #[test]
    fn test_delete() {
        let mut tree = seeded();
        tree.insert(1);
        let ret = tree.delete(&1);
        assert!(!tree.contains(&1));
        assert_eq!(ret, Some(1));
        assert!(tree.is_empty());
    }

    #[test]
    fn test_delete_one_occurrence() {
        let mut tree = seeded();
        tree.insert(2);
        tree.insert(1);
        tree.insert(2);
        assert_eq!(tree.delete(&2), Some(2));
        assert!(tree.contains(&2));
        assert_eq!(tree.in_order(), vec![&1, &2]);
        assert_eq!(tree.delete(&2), Some(2));
        assert!(!tree.contains(&2));
    }

    #[test]
    fn test_delete_missing() {
        let mut tree = seeded();
        tree.insert(1);
        tree.insert(3);
        assert_eq!(tree.delete(&2), None);
        assert_eq!(tree.in_order(), vec![&1, &3]);
    }

    #[test]
    fn test_insert_with_priority_shape() {
        let mut tree = seeded();
        tree.insert_with_priority(5, 10);
        tree.insert_with_priority(3, 20);
        tree.insert_with_priority(8, 30);

        let root = tree.root().unwrap();
        assert_eq!(*root.key(), 8);
        assert_eq!(root.priority(), 30);
        assert_eq!(root.subtree_len(), 3);
        assert_eq!(tree.pre_order(), vec![&8, &3, &5]);
        assert_eq!(tree.post_order(), vec![&5, &3, &8]);
    }

    #[test]
    fn test_split() {
        let mut tree = seeded();
        for key in &[12, 8, 19, 4, 5, 7, 9] {
            tree.insert(*key);
        }
        let (low, high) = tree.split(&9);
        assert_eq!(low.in_order(), vec![&4, &5, &7, &8]);
        assert_eq!(high.in_order(), vec![&9, &12, &19]);
        assert_eq!(low.validate(), Ok(()));
        assert_eq!(high.validate(), Ok(()));
    }

    #[test]
    fn test_split_empty() {
        let (low, high) = seeded().split(&3);
        assert!(low.is_empty());
        assert!(high.is_empty());
    }

    #[test]
    fn test_split_outside_range() {
        let mut tree = seeded();
        tree.extend(vec![3, 4, 5]);
        let (low, high) = tree.split(&1);
        assert!(low.is_empty());
        assert_eq!(high.in_order(), vec![&3, &4, &5]);

        let (low, high) = high.split(&10);
        assert_eq!(low.in_order(), vec![&3, &4, &5]);
        assert!(high.is_empty());
    }

    #[test]
    fn test_split_halves_keep_inserting() {
        let mut tree = seeded();
        tree.extend(0..10);
        let (mut low, mut high) = tree.split(&5);
        low.insert(2);
        high.insert(20);
        assert_eq!(low.len(), 6);
        assert_eq!(high.len(), 6);
        assert_eq!(low.validate(), Ok(()));
        assert_eq!(high.validate(), Ok(()));
    }

    #[test]
    fn test_merge_overlapping() {
        let mut n = seeded();
        n.extend(vec![1, 2, 3]);
        let mut m = seeded();
        m.extend(vec![3, 4, 5]);

        n.merge(m);
        assert_eq!(n.in_order(), vec![&1, &2, &3, &3, &4, &5]);
        assert_eq!(n.validate(), Ok(()));
    }

    #[test]
    fn test_join() {
        let mut low = seeded();
        low.extend(vec![1, 2, 3]);
        let mut high = seeded();
        high.extend(vec![3, 4, 5]);

        let tree = Treap::join(low, high).unwrap();
        assert_eq!(tree.in_order(), vec![&1, &2, &3, &3, &4, &5]);
        assert_eq!(tree.validate(), Ok(()));
    }

    #[test]
    fn test_join_overlapping() {
        let mut low = seeded();
        low.extend(vec![1, 4]);
        let mut high = seeded();
        high.extend(vec![3, 5]);

        assert_eq!(Treap::join(low, high).err(), Some(TreapError::OverlappingRanges));
    }

    #[test]
    fn test_rank_select() {
        let mut tree = seeded();
        tree.extend(vec![10, 20, 20, 30]);
        assert_eq!(tree.rank(&20), 1);
        assert_eq!(tree.rank(&25), 3);
        assert_eq!(tree.select(0), Some(&10));
        assert_eq!(tree.select(2), Some(&20));
        assert_eq!(tree.select(4), None);
    }

    #[test]
    fn test_clear() {
        let mut tree = seeded();
        tree.extend(0..10);
        tree.clear();
        assert!(tree.is_empty());
    }

    #[test]
    fn test_into_iter() {
        let mut tree = seeded();
        tree.insert(1);
        tree.insert(5);
        tree.insert(3);

        assert_eq!(tree.into_iter().collect::<Vec<u32>>(), vec![1, 3, 5]);
    }

    #[test]
    fn test_iter() {
        let mut tree = seeded();
        tree.insert(1);
        tree.insert(5);
        tree.insert(3);

        assert_eq!(tree.iter().collect::<Vec<&u32>>(), vec![&1, &3, &5]);
    }
}
