//! Diagnostic tree rendering. One node per line, children indented under
//! their parent, `←` marking a left child and `→` a right child.

use crate::node::{TreapNode, NIL};
use crate::tree::Treap;
use std::fmt::Display;

fn print_node<K, V>(arena: &[TreapNode<K, V>], node: u32, tab: &str, side: &str) -> String
where
    K: Display,
{
    let n = &arena[node as usize];
    let mut s = format!("\n{tab}{side} TreapNode {}", n.k);
    if n.l != NIL {
        s.push_str(&print_node(arena, n.l, &format!("{tab}  "), "←"));
    }
    if n.r != NIL {
        s.push_str(&print_node(arena, n.r, &format!("{tab}  "), "→"));
    }
    s
}

/// Render the subtree under `root`.
pub fn print<K, V>(arena: &[TreapNode<K, V>], root: u32, tab: &str) -> String
where
    K: Display,
{
    match root {
        NIL => "Treap ∅".to_string(),
        _ => format!("Treap{}", print_node(arena, root, tab, "└─")),
    }
}

impl<K, V, C> Treap<K, V, C>
where
    C: Fn(&K, &K) -> i32,
    K: Display,
{
    pub fn to_string(&self, tab: &str) -> String {
        print(&self.arena, self.root, tab)
    }
}

#[cfg(test)]
mod tests {
    use crate::node::Entry;
    use crate::tree::Treap;

    #[test]
    fn empty_tree_prints_empty_marker() {
        let tree = Treap::<i64, ()>::new();
        assert_eq!(tree.to_string(""), "Treap ∅");
    }

    #[test]
    fn renders_parent_and_children() {
        let mut tree = Treap::<i64, ()>::seeded([5u8; 32]);
        tree.insert(Entry::new(1, ())).unwrap();
        tree.insert(Entry::new(2, ())).unwrap();
        // force 2 to the root so the shape is fixed regardless of priorities
        while tree.root != tree.find(&2) {
            tree.find_and_elevate(&2);
        }
        assert_eq!(tree.to_string(""), "Treap\n└─ TreapNode 2\n  ← TreapNode 1");
    }
}
