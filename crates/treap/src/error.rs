use thiserror::Error;

/// Errors produced by tree operations.
///
/// Absence of a key is never an error; lookups report it through the
/// [`NIL`](crate::NIL) sentinel instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreapError {
    #[error("entry has no key")]
    MissingKey,
}
