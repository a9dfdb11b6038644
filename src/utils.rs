//! Utility functions and traits for `FlatHashMap`

use crate::{FlatHashMap, error::Result};

/// Extension trait for `FlatHashMap` that provides additional utility methods
pub trait FlatHashMapExtensions<T> {
    /// Returns true if a value is stored under `hash`
    fn contains_hash(&self, hash: u64) -> bool;

    /// Returns a copy of the value stored under `hash`, or `default` if there is none
    fn get_or(&self, hash: u64, default: T) -> T
    where
        T: Clone;

    /// Returns the ratio of occupied slots to capacity
    fn load_factor(&self) -> f64;

    /// Inserts every `(hash, value)` pair, returning how many new slots were occupied.
    ///
    /// Stops at the first failing insert; pairs before it stay in the map.
    ///
    /// # Errors
    ///
    /// Returns the error of the first insert that fails.
    fn try_extend<I>(&mut self, iter: I) -> Result<usize>
    where
        I: IntoIterator<Item = (u64, T)>;
}

impl<T, const N: usize> FlatHashMapExtensions<T> for FlatHashMap<T, N> {
    fn contains_hash(&self, hash: u64) -> bool {
        self.find(hash).is_some()
    }

    fn get_or(&self, hash: u64, default: T) -> T
    where
        T: Clone,
    {
        self.find(hash).cloned().unwrap_or(default)
    }

    #[allow(clippy::arithmetic_side_effects, clippy::cast_precision_loss)]
    fn load_factor(&self) -> f64 {
        self.len() as f64 / self.capacity() as f64
    }

    fn try_extend<I>(&mut self, iter: I) -> Result<usize>
    where
        I: IntoIterator<Item = (u64, T)>,
    {
        let before = self.len();
        for (hash, value) in iter {
            self.insert(hash, value)?;
        }
        Ok(self.len().saturating_sub(before))
    }
}

/// Creates a `FlatHashMap` with the default seed from an iterator of `(hash, value)` pairs.
///
/// Later pairs replace earlier ones with the same hash.
///
/// # Errors
///
/// Returns the error of the first insert that fails, see [`FlatHashMap::insert`].
pub fn try_from_iter<T, I, const N: usize>(iter: I) -> Result<FlatHashMap<T, N>>
where
    I: IntoIterator<Item = (u64, T)>,
{
    let mut map = FlatHashMap::new();

    for (hash, value) in iter {
        map.insert(hash, value)?;
    }

    Ok(map)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::{EMPTY_HASH, FlatHashMapError};

    #[test]
    fn test_try_from_iter() {
        let data = vec![(10, "a".to_string()), (20, "b".to_string()), (30, "c".to_string())];

        let map: FlatHashMap<String, 8> = try_from_iter(data).unwrap();

        assert_eq!(map.find(10).map(String::as_str), Some("a"));
        assert_eq!(map.find(20).map(String::as_str), Some("b"));
        assert_eq!(map.find(30).map(String::as_str), Some("c"));
        assert_eq!(map.len(), 3);
    }

    #[test]
    fn test_try_from_iter_overflow() {
        let result = try_from_iter::<u8, _, 2>([(1, 1), (2, 2), (3, 3)]);
        assert_eq!(result.unwrap_err(), FlatHashMapError::CapacityExceeded { capacity: 2 });
    }

    #[test]
    fn test_contains_hash_and_get_or() {
        let mut map = FlatHashMap::<i32, 4>::new();
        map.insert(1, 100).unwrap();

        assert!(map.contains_hash(1));
        assert!(!map.contains_hash(2));
        assert_eq!(map.get_or(1, -1), 100);
        assert_eq!(map.get_or(2, -1), -1);
    }

    #[test]
    fn test_try_extend() {
        let mut map = FlatHashMap::<i32, 4>::new();
        map.insert(1, 1).unwrap();

        assert_eq!(map.try_extend([(1, 10), (2, 20), (3, 30)]), Ok(2));
        assert_eq!(map.find(1), Some(&10));
        assert!((map.load_factor() - 0.75).abs() < f64::EPSILON);

        let err = map.try_extend([(4, 40), (EMPTY_HASH, 0)]).unwrap_err();
        assert_eq!(err, FlatHashMapError::ReservedHash(EMPTY_HASH));
        assert_eq!(map.find(4), Some(&40));
        assert!(map.is_full());
    }

    #[test]
    fn test_extensions_without_clone() {
        #[derive(Debug, PartialEq)]
        struct Handle(u32);

        let mut map = FlatHashMap::<Handle, 4>::new();
        assert_eq!(map.try_extend([(1, Handle(1)), (2, Handle(2))]), Ok(2));

        assert!(map.contains_hash(1));
        assert!(!map.contains_hash(3));
        assert!((map.load_factor() - 0.5).abs() < f64::EPSILON);
        assert_eq!(map.find(2), Some(&Handle(2)));
    }
}
