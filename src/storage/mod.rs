//! # Node Storage
//!
//! The contract between the scaffold engine and the record arrays it works
//! on. Contigs, scaffolds, edges and repeat bases all live in a
//! [`NodeStore`] keyed by a dense integer id.
//!
//! ## Rules
//!
//! | Operation | Behaviour |
//! |-----------|-----------|
//! | `append` | assigns the next id; ids are never reused |
//! | `delete` | tombstones the record in place |
//! | `get` / `get_mut` | panics on an unknown or tombstoned id |
//! | `try_get` | `None` for unknown or tombstoned ids |
//! | `len` | counts tombstones too, like the id space |
//!
//! Touching a dead record through `get` is a programmer error, not bad
//! input, so it panics instead of returning an error.

pub mod memory;

pub use memory::NodeStore;

// ============================================================================
// Key and record contracts
// ============================================================================

/// A dense index usable as a store key.
pub trait StoreId: Copy + Eq + std::fmt::Display {
    fn from_index(index: usize) -> Self;
    fn index(self) -> usize;
}

/// A record that can be tombstoned instead of removed.
pub trait Record {
    fn is_dead(&self) -> bool;

    /// Mark dead and clear anything that would keep other records pointing
    /// at it.
    fn tombstone(&mut self);
}
