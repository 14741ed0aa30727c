//! chaining-hashmap: a single-threaded, string-keyed hash table with
//! separate chaining and load-factor driven doubling.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: a small key-value table whose bucket placement is fully
//!   determined by the key, so layouts can be reasoned about (and tested)
//!   by hand.
//! - Layers:
//!   - `hashing`: the key hash (sum of Unicode scalar values) and
//!     `hash % bucket_count` bucket selection.
//!   - `ChainingHashTable<V>`: owns `Vec<Vec<Entry>>` buckets plus an entry
//!     count; all operations route through `hashing::bucket_index`.
//!
//! Constraints
//! - Single-threaded: operations take `&self`/`&mut self`; no locking.
//! - Keys are unique across the whole table; `put` on an existing key
//!   overwrites the value in place without moving the entry.
//! - `len / bucket_count <= 0.75` after every `put`. The check runs before
//!   the insert and counts the incoming pair.
//! - Growth always doubles the bucket count; removal never shrinks it.
//! - Absence is `None`, never a reserved value.
//!
//! Rehashing
//! - A resize swaps in fresh buckets, resets the count and replays every
//!   old entry through `put`, walking old buckets in order and each chain
//!   front to back. Placement after a resize is therefore identical to
//!   inserting the surviving pairs in that order into an empty table of the
//!   new size.
//!
//! Notes and non-goals
//! - The hash is deliberately weak: permutations of the same characters
//!   collide. It is part of the observable layout and is not pluggable.
//! - Chains are scanned linearly; there is no per-bucket index.
//! - Iteration order is bucket order, then chain order; nothing stronger.
//! - No persistence and no concurrent access.

pub mod chaining_hash_table;
pub mod hashing;

// Public surface
pub use chaining_hash_table::{
    ChainingHashTable, Iter, IterMut, TableError, DEFAULT_BUCKET_COUNT, MAX_LOAD_FACTOR,
};
