//! Error types for `FlatHashMap` operations

use thiserror::Error;

/// Result type alias for `FlatHashMap` operations
pub type Result<T> = std::result::Result<T, FlatHashMapError>;

/// Failures reported by `FlatHashMap::insert`.
///
/// A missing key is not an error: `find` simply returns `None`. A capacity that is not a power of
/// two never reaches runtime, it fails the build.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlatHashMapError {
    /// Every slot on the probe sequence is occupied by a different hash
    #[error("hash map is full, all {capacity} slots are occupied")]
    CapacityExceeded {
        /// Number of slots in the table
        capacity: usize,
    },

    /// The all-ones hash marks empty slots and cannot be stored
    #[error("hash {0:#x} is reserved as the empty-slot marker")]
    ReservedHash(u64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = FlatHashMapError::CapacityExceeded { capacity: 4 };
        assert_eq!(err.to_string(), "hash map is full, all 4 slots are occupied");

        let err = FlatHashMapError::ReservedHash(u64::MAX);
        assert_eq!(
            err.to_string(),
            "hash 0xffffffffffffffff is reserved as the empty-slot marker"
        );
    }
}
