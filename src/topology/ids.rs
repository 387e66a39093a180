//! Strong, zero-cost handles for mesh entities.
//!
//! A mesh cell is addressed by a dense [`ElementId`] (its index in the
//! element arena, assigned sequentially at ingestion) and refers to global
//! grid nodes by [`NodeId`]. Both are `repr(transparent)` newtypes so they
//! cost nothing over the raw integer but cannot be mixed up in signatures.

use std::fmt;

/// Global node index as supplied by the mesh-ingestion collaborator.
///
/// Node ids come straight from the grid file; 0 is a legal value.
#[derive(
    Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[repr(transparent)]
pub struct NodeId(u64);

impl NodeId {
    /// Wraps a raw global node index.
    #[inline]
    pub const fn new(raw: u64) -> Self {
        NodeId(raw)
    }

    /// Returns the raw global node index.
    #[inline]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("NodeId").field(&self.0).finish()
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Dense global element index, assigned sequentially by the arena.
///
/// Ids are never reused; the arena guarantees `id.index() < arena.len()` for
/// every id it hands out.
#[derive(
    Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[repr(transparent)]
pub struct ElementId(u64);

impl ElementId {
    /// Wraps a raw dense element index.
    #[inline]
    pub const fn new(raw: u64) -> Self {
        ElementId(raw)
    }

    /// Returns the raw dense index.
    #[inline]
    pub const fn get(self) -> u64 {
        self.0
    }

    /// Returns the id as a `usize` arena index.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ElementId").field(&self.0).finish()
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
