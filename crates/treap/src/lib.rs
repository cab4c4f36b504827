//! Randomized balanced binary search tree (treap).
//!
//! Keys obey binary-search-tree ordering while independently drawn random
//! priorities obey max-heap ordering, which bounds the expected height at
//! O(log n) without deterministic rebalancing. Duplicate keys are supported
//! and can be enumerated with [`Treap::find_first`] / [`Treap::find_next`].
//!
//! Nodes live in a `Vec`-backed arena and are addressed by stable `u32`
//! handles; the reserved index [`NIL`] stands for "no node" in every link
//! and lookup result. Handles survive rotations and key changes, so a
//! caller can hold one across arbitrary mutations of other nodes.
//!
//! Priorities come from a seedable xoshiro256** source injected per tree
//! ([`Treap::seeded`]), making tree shapes reproducible in tests.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`node`] | [`TreapNode`] arena entry, [`Entry`] payload, [`NIL`] |
//! | [`error`] | [`TreapError`] |
//! | [`random`] | [`PrioritySource`] priority generator |
//! | [`util`] | navigation free functions over the arena |
//! | [`tree`] | [`Treap`] container and its mutations |
//! | [`iter`] | [`Iter`] and [`IterRev`] in-order iterators |
//! | [`print`] | diagnostic tree rendering |
//!
//! # Example
//!
//! ```
//! use treap::{Entry, Treap, NIL};
//!
//! let mut tree = Treap::<i64, &str>::new();
//! let n = tree.insert(Entry::new(4, "four")).unwrap();
//! tree.insert(Entry::new(1, "one")).unwrap();
//! tree.insert(Entry::new(5, "five")).unwrap();
//!
//! assert_eq!(tree.find(&4), n);
//! assert_eq!(tree.find(&7), NIL);
//! let keys: Vec<i64> = tree.keys().copied().collect();
//! assert_eq!(keys, vec![1, 4, 5]);
//! ```

pub mod error;
pub mod iter;
pub mod node;
pub mod print;
pub mod random;
pub mod tree;
pub mod util;

pub use error::TreapError;
pub use iter::{Iter, IterRev};
pub use node::{Entry, TreapNode, NIL};
pub use print::print;
pub use random::PrioritySource;
pub use tree::Treap;
