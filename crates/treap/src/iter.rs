//! In-order iterators over node handles.
//!
//! Both directions are lazy one-pass successor/predecessor walks in O(1)
//! auxiliary space; a full traversal crosses each edge at most twice. The
//! iterators borrow the tree, so mutating it mid-iteration is a compile
//! error rather than a documented hazard.

use crate::node::NIL;
use crate::tree::Treap;
use crate::util;

/// Ascending key-order iterator.
pub struct Iter<'a, K, V, C = fn(&K, &K) -> i32>
where
    C: Fn(&K, &K) -> i32,
{
    tree: &'a Treap<K, V, C>,
    curr: u32,
}

impl<'a, K, V, C> Iter<'a, K, V, C>
where
    C: Fn(&K, &K) -> i32,
{
    pub(crate) fn new(tree: &'a Treap<K, V, C>) -> Self {
        Self {
            curr: util::first(&tree.arena, tree.root),
            tree,
        }
    }
}

impl<'a, K, V, C> Iterator for Iter<'a, K, V, C>
where
    C: Fn(&K, &K) -> i32,
{
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        if self.curr == NIL {
            return None;
        }
        let out = self.curr;
        self.curr = util::next(&self.tree.arena, self.curr);
        Some(out)
    }
}

/// Descending key-order iterator.
pub struct IterRev<'a, K, V, C = fn(&K, &K) -> i32>
where
    C: Fn(&K, &K) -> i32,
{
    tree: &'a Treap<K, V, C>,
    curr: u32,
}

impl<'a, K, V, C> IterRev<'a, K, V, C>
where
    C: Fn(&K, &K) -> i32,
{
    pub(crate) fn new(tree: &'a Treap<K, V, C>) -> Self {
        Self {
            curr: util::last(&tree.arena, tree.root),
            tree,
        }
    }
}

impl<'a, K, V, C> Iterator for IterRev<'a, K, V, C>
where
    C: Fn(&K, &K) -> i32,
{
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        if self.curr == NIL {
            return None;
        }
        let out = self.curr;
        self.curr = util::prev(&self.tree.arena, self.curr);
        Some(out)
    }
}
