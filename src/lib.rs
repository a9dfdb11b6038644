//! # Flat Hash Map
//!
//! A Rust implementation of a fixed-capacity, open-addressing hash table.
//!
//! `FlatHashMap<T, N>` stores up to `N` values keyed by pre-computed 64-bit hashes. The capacity
//! is a const generic power of two, both slot arrays are allocated once at construction, and
//! collisions are resolved with triangular-number probing: each retry steps one slot further than
//! the last, so the displacements from the home slot are 1, 3, 6, 10, ...
//!
//! The table never grows and entries cannot be removed one by one, only all at once with
//! `clear`. Inserting into a full table is reported as an error rather than probing forever.
//!
//! ## Basic Usage
//!
//! ```rust
//! use flathash::{FlatHashMap, FlatHashMapError};
//!
//! // Create a map with 32 slots
//! let mut map = FlatHashMap::<i32, 32>::new();
//!
//! // Insert values under their hashes
//! map.insert(0, 10)?;
//! map.insert(1, 15)?;
//!
//! // Retrieve values
//! assert_eq!(map.find(0), Some(&10));
//! assert_eq!(map.find(1), Some(&15));
//! assert_eq!(map.find(2), None);
//!
//! // Update values
//! assert_eq!(map.insert(0, 20)?, Some(10));
//!
//! // Reset every slot
//! map.clear();
//! assert_eq!(map.find(0), None);
//! # Ok::<(), FlatHashMapError>(())
//! ```
//!
//! ## Capacity
//!
//! ```rust
//! use flathash::{FlatHashMap, FlatHashMapError};
//!
//! let mut map = FlatHashMap::<&str, 4>::new();
//! for hash in 0..4 {
//!     map.insert(hash, "taken")?;
//! }
//!
//! assert_eq!(map.insert(4, "extra"), Err(FlatHashMapError::CapacityExceeded { capacity: 4 }));
//! # Ok::<(), FlatHashMapError>(())
//! ```
//!
//! A capacity that is not a power of two does not compile:
//!
//! ```compile_fail
//! let map = flathash::FlatHashMap::<i32, 12>::new();
//! ```

/// Error types returned by map operations
mod error;
/// Module implementing the fixed-capacity hash map
mod flat_hash_map;
/// Triangular probe sequence shared by lookups and inserts
mod probe;
/// Utility functions and traits for the hash map
mod utils;

pub use error::{FlatHashMapError, Result};
pub use flat_hash_map::{DEFAULT_SEED, EMPTY_HASH, FlatHashMap};
pub use probe::{ProbeSequence, home_slot};
pub use utils::{FlatHashMapExtensions, try_from_iter};
