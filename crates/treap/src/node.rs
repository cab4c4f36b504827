//! Arena node and insertion payload types.
//!
//! All tree links are `u32` indices into a `Vec`-backed arena owned by the
//! tree. The reserved index [`NIL`] stands for "no node" in every link slot,
//! so rotation and transplant code never deals with optional links.

/// Reserved "no node" index.
///
/// Never a valid arena slot and never written through. Reading a priority
/// through it yields `f64::NEG_INFINITY`, so NIL loses every heap comparison.
pub const NIL: u32 = u32::MAX;

/// One arena slot.
///
/// `p` is a non-owning back reference; ownership runs strictly downward
/// through `l` and `r`. The priority is drawn once at insertion time and is
/// independent of the key; ordering logic never consults it.
#[derive(Clone, Debug)]
pub struct TreapNode<K, V> {
    pub p: u32,
    pub l: u32,
    pub r: u32,
    pub priority: f64,
    pub k: K,
    /// Vacated when the node is erased, so the value is handed back to the
    /// caller at the moment the node leaves the tree.
    pub v: Option<V>,
}

impl<K, V> TreapNode<K, V> {
    pub fn new(k: K, v: V, priority: f64) -> Self {
        Self {
            p: NIL,
            l: NIL,
            r: NIL,
            priority,
            k,
            v: Some(v),
        }
    }
}

/// Caller-supplied record for [`Treap::insert`](crate::Treap::insert).
///
/// The key is optional at the type level; inserting a key-less entry fails
/// with [`TreapError::MissingKey`](crate::TreapError::MissingKey) before any
/// mutation takes place.
#[derive(Clone, Debug)]
pub struct Entry<K, V> {
    pub key: Option<K>,
    pub value: V,
}

impl<K, V> Entry<K, V> {
    pub fn new(key: K, value: V) -> Self {
        Self {
            key: Some(key),
            value,
        }
    }

    pub fn keyless(value: V) -> Self {
        Self { key: None, value }
    }
}
