//! The treap container.
//!
//! A binary search tree on keys whose shape is simultaneously a max-heap on
//! per-node random priorities, which keeps the expected height logarithmic
//! without deterministic rebalancing. Duplicate keys are accepted; equal keys
//! descend into the right subtree, so all duplicates of a key sit next to
//! each other in the in-order sequence.

use crate::error::TreapError;
use crate::iter::{Iter, IterRev};
use crate::node::{Entry, TreapNode, NIL};
use crate::random::PrioritySource;
use crate::util;

fn default_comparator<K: PartialOrd>(a: &K, b: &K) -> i32 {
    if a == b {
        0
    } else if a < b {
        -1
    } else {
        1
    }
}

/// Mutable ordered container of key-tagged entries.
///
/// Nodes live in a `Vec` arena and are addressed by stable `u32` handles;
/// [`NIL`] is the "no node" answer for every lookup. A handle stays valid
/// from [`insert`](Treap::insert) until [`erase_node`](Treap::erase_node)
/// removes it, across any number of rotations and
/// [`change_key`](Treap::change_key) moves. Passing a handle that is no
/// longer live in this tree to `change_key` or `erase_node` is a
/// precondition violation with unspecified (non-crashing) tree contents
/// afterwards; it is not a checked error.
pub struct Treap<K, V, C = fn(&K, &K) -> i32>
where
    C: Fn(&K, &K) -> i32,
{
    pub root: u32,
    pub comparator: C,
    pub(crate) arena: Vec<TreapNode<K, V>>,
    free: Vec<u32>,
    priorities: PrioritySource,
}

impl<K, V> Treap<K, V, fn(&K, &K) -> i32>
where
    K: PartialOrd,
{
    /// An empty tree with OS-random priorities.
    pub fn new() -> Self {
        Self::with_comparator(default_comparator::<K>, PrioritySource::new(None))
    }

    /// An empty tree whose priorities, and therefore shape, are reproducible
    /// from `seed`.
    pub fn seeded(seed: [u8; 32]) -> Self {
        Self::with_comparator(default_comparator::<K>, PrioritySource::new(Some(seed)))
    }
}

impl<K, V> Default for Treap<K, V, fn(&K, &K) -> i32>
where
    K: PartialOrd,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, C> Treap<K, V, C>
where
    C: Fn(&K, &K) -> i32,
{
    pub fn with_comparator(comparator: C, priorities: PrioritySource) -> Self {
        Self {
            root: NIL,
            comparator,
            arena: Vec::new(),
            free: Vec::new(),
            priorities,
        }
    }

    /// Seed of the priority source.
    pub fn seed(&self) -> [u8; 32] {
        self.priorities.seed
    }

    pub fn is_empty(&self) -> bool {
        self.root == NIL
    }

    // link reads; callers guarantee a live index
    #[inline]
    fn p(&self, i: u32) -> u32 {
        self.arena[i as usize].p
    }
    #[inline]
    fn l(&self, i: u32) -> u32 {
        self.arena[i as usize].l
    }
    #[inline]
    fn r(&self, i: u32) -> u32 {
        self.arena[i as usize].r
    }

    // NIL is never written through
    #[inline]
    fn set_p(&mut self, i: u32, v: u32) {
        if i != NIL {
            self.arena[i as usize].p = v;
        }
    }

    /// Key of a live node, None for NIL.
    pub fn key(&self, node: u32) -> Option<&K> {
        if node == NIL {
            None
        } else {
            Some(&self.arena[node as usize].k)
        }
    }

    /// Value of a live node, None for NIL.
    pub fn value(&self, node: u32) -> Option<&V> {
        if node == NIL {
            None
        } else {
            self.arena[node as usize].v.as_ref()
        }
    }

    pub fn value_mut(&mut self, node: u32) -> Option<&mut V> {
        if node == NIL {
            None
        } else {
            self.arena[node as usize].v.as_mut()
        }
    }

    pub fn priority(&self, node: u32) -> f64 {
        util::priority_of(&self.arena, node)
    }

    pub fn left(&self, node: u32) -> u32 {
        if node == NIL {
            NIL
        } else {
            self.l(node)
        }
    }

    pub fn right(&self, node: u32) -> u32 {
        if node == NIL {
            NIL
        } else {
            self.r(node)
        }
    }

    pub fn parent(&self, node: u32) -> u32 {
        if node == NIL {
            NIL
        } else {
            self.p(node)
        }
    }

    fn alloc(&mut self, k: K, v: V, priority: f64) -> u32 {
        match self.free.pop() {
            Some(i) => {
                let slot = &mut self.arena[i as usize];
                slot.p = NIL;
                slot.l = NIL;
                slot.r = NIL;
                slot.priority = priority;
                slot.k = k;
                slot.v = Some(v);
                i
            }
            None => {
                self.arena.push(TreapNode::new(k, v, priority));
                (self.arena.len() - 1) as u32
            }
        }
    }

    fn rotate_left(&mut self, node: u32) {
        let child = self.r(node);
        let child_l = self.l(child);

        self.arena[node as usize].r = child_l;
        self.set_p(child_l, node);

        let parent = self.p(node);
        self.arena[child as usize].p = parent;
        if parent == NIL {
            self.root = child;
        } else if node == self.l(parent) {
            self.arena[parent as usize].l = child;
        } else {
            self.arena[parent as usize].r = child;
        }

        self.arena[child as usize].l = node;
        self.arena[node as usize].p = child;
    }

    fn rotate_right(&mut self, node: u32) {
        let child = self.l(node);
        let child_r = self.r(child);

        self.arena[node as usize].l = child_r;
        self.set_p(child_r, node);

        let parent = self.p(node);
        self.arena[child as usize].p = parent;
        if parent == NIL {
            self.root = child;
        } else if node == self.l(parent) {
            self.arena[parent as usize].l = child;
        } else {
            self.arena[parent as usize].r = child;
        }

        self.arena[child as usize].r = node;
        self.arena[node as usize].p = child;
    }

    /// Rotate `node` upward while its priority beats its parent's.
    fn heap_fix_up(&mut self, node: u32) {
        while node != self.root
            && self.arena[node as usize].priority > self.arena[self.p(node) as usize].priority
        {
            let parent = self.p(node);
            if node == self.l(parent) {
                self.rotate_right(parent);
            } else {
                self.rotate_left(parent);
            }
        }
    }

    /// Move `moved` into `old`'s position without touching `moved`'s own
    /// children; detaching `old` is up to the caller.
    fn transplant(&mut self, old: u32, moved: u32) {
        let parent = self.p(old);
        if parent == NIL {
            self.root = moved;
        } else if old == self.l(parent) {
            self.arena[parent as usize].l = moved;
        } else {
            self.arena[parent as usize].r = moved;
        }
        self.set_p(moved, parent);
    }

    /// BST leaf descent from `start`; equal keys go right.
    fn tree_insert(&mut self, mut start: u32, node: u32) {
        let mut parent = NIL;
        while start != NIL {
            parent = start;
            let go_left = (self.comparator)(
                &self.arena[node as usize].k,
                &self.arena[start as usize].k,
            ) < 0;
            start = if go_left { self.l(start) } else { self.r(start) };
        }
        self.arena[node as usize].p = parent;
        if parent == NIL {
            self.root = node;
        } else if (self.comparator)(
            &self.arena[node as usize].k,
            &self.arena[parent as usize].k,
        ) < 0
        {
            self.arena[parent as usize].l = node;
        } else {
            self.arena[parent as usize].r = node;
        }
    }

    /// Unlink `node` from the tree. Its `p` link is left pointing at the old
    /// parent, which `change_key` uses as the reinsertion anchor.
    fn treap_delete(&mut self, node: u32) {
        if self.l(node) == NIL {
            self.transplant(node, self.r(node));
        } else if self.r(node) == NIL {
            self.transplant(node, self.l(node));
        } else {
            let successor = util::first(&self.arena, self.r(node));
            if self.p(successor) != node {
                self.transplant(successor, self.r(successor));
                let right = self.r(node);
                self.arena[successor as usize].r = right;
                self.arena[right as usize].p = successor;
            }
            self.transplant(node, successor);
            let left = self.l(node);
            self.arena[successor as usize].l = left;
            self.arena[left as usize].p = successor;

            // the successor keeps its own priority, which may now sit above
            // higher-priority children; sift it down toward the larger one
            loop {
                let lp = util::priority_of(&self.arena, self.l(successor));
                let rp = util::priority_of(&self.arena, self.r(successor));
                let sp = self.arena[successor as usize].priority;
                if sp >= lp && sp >= rp {
                    break;
                }
                if lp > rp {
                    self.rotate_right(successor);
                } else {
                    self.rotate_left(successor);
                }
            }
        }
        self.arena[node as usize].l = NIL;
        self.arena[node as usize].r = NIL;
    }

    /// Insert an entry and return the new node's handle.
    ///
    /// Fails with [`TreapError::MissingKey`] when the entry carries no key;
    /// the tree is untouched in that case. Duplicate keys are acceptable,
    /// but their relative order is not insertion order.
    pub fn insert(&mut self, entry: Entry<K, V>) -> Result<u32, TreapError> {
        let Some(key) = entry.key else {
            return Err(TreapError::MissingKey);
        };
        let priority = self.priorities.draw();
        let node = self.alloc(key, entry.value, priority);
        self.tree_insert(self.root, node);
        self.heap_fix_up(node);
        Ok(node)
    }

    /// Adjust the key of a live node.
    ///
    /// The node is unlinked, re-keyed, and reinserted by descending from the
    /// nearest ancestor whose subtree can hold the new key instead of from
    /// the root, so a small key change costs less than erase plus insert.
    /// The handle and the node's priority are preserved.
    pub fn change_key(&mut self, node: u32, new_key: K) {
        self.treap_delete(node);
        let went_down =
            (self.comparator)(&new_key, &self.arena[node as usize].k) < 0;
        self.arena[node as usize].k = new_key;

        let mut parent = self.p(node);
        if parent == NIL {
            // the unlinked node was the root; descend from its replacement
            parent = self.root;
        } else if went_down {
            while parent != self.root
                && (self.comparator)(
                    &self.arena[node as usize].k,
                    &self.arena[parent as usize].k,
                ) < 0
            {
                parent = self.p(parent);
            }
        } else {
            while parent != self.root
                && (self.comparator)(
                    &self.arena[node as usize].k,
                    &self.arena[parent as usize].k,
                ) > 0
            {
                parent = self.p(parent);
            }
        }
        self.tree_insert(parent, node);
        self.heap_fix_up(node);
    }

    /// Erase a found node and hand back its value. No-op for NIL.
    pub fn erase_node(&mut self, node: u32) -> Option<V> {
        if node == NIL {
            return None;
        }
        self.treap_delete(node);
        self.arena[node as usize].p = NIL;
        self.free.push(node);
        self.arena[node as usize].v.take()
    }

    /// Erase one node with the given key, if any.
    pub fn erase(&mut self, key: &K) -> Option<V> {
        let node = util::find(&self.arena, self.root, key, &self.comparator);
        self.erase_node(node)
    }

    /// Find a node with the given key, NIL when absent.
    pub fn find(&self, key: &K) -> u32 {
        util::find(&self.arena, self.root, key, &self.comparator)
    }

    /// First node, in key order, among the duplicates of `key`.
    pub fn find_first(&self, key: &K) -> u32 {
        let mut node = self.find(key);
        if node == NIL {
            return NIL;
        }
        let mut pre = util::prev(&self.arena, node);
        while pre != NIL && (self.comparator)(&self.arena[pre as usize].k, key) == 0 {
            node = pre;
            pre = util::prev(&self.arena, pre);
        }
        node
    }

    /// Next node with the same key as `node`, NIL if none exists.
    ///
    /// Chaining from [`find_first`](Treap::find_first) enumerates every
    /// duplicate of a key exactly once.
    pub fn find_next(&self, node: u32) -> u32 {
        let found = util::next(&self.arena, node);
        if found != NIL
            && (self.comparator)(&self.arena[found as usize].k, &self.arena[node as usize].k) == 0
        {
            found
        } else {
            NIL
        }
    }

    /// Find a node and pull it further up the tree for temporal locality.
    ///
    /// Doubles the node's priority and restores the heap shape. Repeated
    /// promotion deliberately skews the priority distribution for hot keys,
    /// trading expected balance for root proximity.
    pub fn find_and_elevate(&mut self, key: &K) -> u32 {
        let found = util::find(&self.arena, self.root, key, &self.comparator);
        if found != NIL {
            self.arena[found as usize].priority *= 2.0;
            self.heap_fix_up(found);
        }
        found
    }

    /// Number of nodes, counted by a full in-order walk.
    pub fn size(&self) -> usize {
        util::count(&self.arena, self.root)
    }

    /// Longest root-to-leaf path length.
    pub fn height(&self) -> usize {
        util::max_height(&self.arena, self.root)
    }

    /// Shortest root-to-leaf path length.
    pub fn min_height(&self) -> usize {
        util::min_height(&self.arena, self.root)
    }

    pub fn preorder<F: FnMut(u32)>(&self, mut op: F) {
        util::preorder(&self.arena, self.root, &mut op);
    }

    pub fn inorder<F: FnMut(u32)>(&self, mut op: F) {
        util::inorder(&self.arena, self.root, &mut op);
    }

    pub fn postorder<F: FnMut(u32)>(&self, mut op: F) {
        util::postorder(&self.arena, self.root, &mut op);
    }

    /// Ascending in-order iteration over node handles.
    pub fn iter(&self) -> Iter<'_, K, V, C> {
        Iter::new(self)
    }

    /// Descending in-order iteration over node handles.
    pub fn iter_rev(&self) -> IterRev<'_, K, V, C> {
        IterRev::new(self)
    }

    /// Keys in ascending order.
    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.iter().map(move |i| &self.arena[i as usize].k)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_comparator_orders() {
        assert_eq!(default_comparator(&1, &2), -1);
        assert_eq!(default_comparator(&2, &2), 0);
        assert_eq!(default_comparator(&3, &2), 1);
    }

    #[test]
    fn empty_tree_accessors() {
        let tree = Treap::<i64, ()>::new();
        assert!(tree.is_empty());
        assert_eq!(tree.root, NIL);
        assert_eq!(tree.key(NIL), None);
        assert_eq!(tree.left(NIL), NIL);
        assert_eq!(tree.right(NIL), NIL);
        assert_eq!(tree.parent(NIL), NIL);
        assert_eq!(tree.priority(NIL), f64::NEG_INFINITY);
    }

    #[test]
    fn erased_slots_are_reused() {
        let mut tree = Treap::<i64, &str>::seeded([3u8; 32]);
        let a = tree.insert(Entry::new(1, "a")).unwrap();
        assert_eq!(tree.erase(&1), Some("a"));
        let b = tree.insert(Entry::new(2, "b")).unwrap();
        assert_eq!(a, b);
        assert_eq!(tree.size(), 1);
    }

    #[test]
    fn value_mut_edits_in_place() {
        let mut tree = Treap::<i64, i64>::seeded([3u8; 32]);
        let n = tree.insert(Entry::new(1, 10)).unwrap();
        *tree.value_mut(n).unwrap() += 5;
        assert_eq!(tree.value(n), Some(&15));
    }

    #[test]
    fn seed_is_retained() {
        let tree = Treap::<i64, ()>::seeded([9u8; 32]);
        assert_eq!(tree.seed(), [9u8; 32]);
    }
}
