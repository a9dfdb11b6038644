use crate::{
    error::{FlatHashMapError, Result},
    probe::{ProbeSequence, home_slot},
};

/// Hash value marking an empty slot. It can never be stored as a key.
pub const EMPTY_HASH: u64 = u64::MAX;

/// Seed used by `FlatHashMap::new`, 2^64 divided by the golden ratio
pub const DEFAULT_SEED: u64 = 0x9E37_79B9_7F4A_7C15;

/// A fixed-capacity hash map keyed by pre-computed 64-bit hashes.
///
/// All `N` slots are allocated up front as two parallel arrays, one of hashes and one of values,
/// and nothing is allocated afterwards. Collisions are resolved by open addressing with a
/// triangular-number probe sequence (see [`ProbeSequence`]), which reaches every slot of a
/// power-of-two table within `N` probes.
///
/// `N` must be a power of two; any other capacity fails to compile as soon as a constructor is
/// used. Inserting an already present hash replaces its value.
///
/// Note: This implementation is not thread-safe. Guard the whole map with a single lock if it has
/// to be shared.
#[derive(Debug, Clone)]
pub struct FlatHashMap<T, const N: usize> {
    /// Stored key hashes, `EMPTY_HASH` for free slots
    hashes: Box<[u64]>,
    /// Stored values, `None` exactly where `hashes` holds `EMPTY_HASH`
    values: Box<[Option<T>]>,
    /// Mixed into every hash before it is masked down to a slot index
    seed: u64,
    /// Number of occupied slots
    len: usize,
}

impl<T, const N: usize> Default for FlatHashMap<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> FlatHashMap<T, N> {
    /// Maps a mixed hash onto a slot index
    const MASK: usize = N.wrapping_sub(1);

    /// Creates an empty map using `DEFAULT_SEED`
    #[must_use]
    pub fn new() -> Self {
        Self::with_seed(DEFAULT_SEED)
    }

    /// Creates an empty map whose slot placement is perturbed by `seed`.
    ///
    /// Two maps built with the same seed place the same hashes in the same slots.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        const { assert!(N.is_power_of_two(), "FlatHashMap capacity must be a power of two") };

        Self {
            hashes: vec![EMPTY_HASH; N].into_boxed_slice(),
            values: std::iter::repeat_with(|| None).take(N).collect(),
            seed,
            len: 0,
        }
    }

    /// Creates an empty map with a randomly drawn seed
    #[must_use]
    pub fn with_random_seed() -> Self {
        let seed = rand::random::<u64>();
        tracing::trace!(seed, capacity = N, "created flat hash map with random seed");
        Self::with_seed(seed)
    }

    /// Empties every slot, dropping all stored values. The seed is kept.
    pub fn clear(&mut self) {
        self.hashes.fill(EMPTY_HASH);
        self.values.fill_with(|| None);
        tracing::trace!(dropped = self.len, "cleared flat hash map");
        self.len = 0;
    }

    /// Returns the value stored under `hash`.
    ///
    /// The search stops at the first empty slot on the probe sequence, or after `N` probes. The
    /// reserved `EMPTY_HASH` is never found.
    #[must_use]
    pub fn find(&self, hash: u64) -> Option<&T> {
        let index = self.find_index(hash)?;
        self.values.get(index)?.as_ref()
    }

    /// Returns a mutable reference to the value stored under `hash`
    pub fn find_mut(&mut self, hash: u64) -> Option<&mut T> {
        let index = self.find_index(hash)?;
        self.values.get_mut(index)?.as_mut()
    }

    /// Stores `value` under `hash`.
    ///
    /// Returns the previous value if `hash` was already present, in which case it is replaced.
    ///
    /// # Errors
    ///
    /// - [`FlatHashMapError::ReservedHash`] if `hash` is `EMPTY_HASH`.
    /// - [`FlatHashMapError::CapacityExceeded`] if `hash` is new and every slot is taken. The map
    ///   is left unchanged.
    pub fn insert(&mut self, hash: u64, value: T) -> Result<Option<T>> {
        if hash == EMPTY_HASH {
            tracing::debug!(hash, "rejected insert of reserved hash");
            return Err(FlatHashMapError::ReservedHash(hash));
        }

        for index in self.probe(hash) {
            let (Some(slot_hash), Some(slot_value)) =
                (self.hashes.get_mut(index), self.values.get_mut(index))
            else {
                // Probe indices are masked below N
                continue;
            };

            if *slot_hash == EMPTY_HASH {
                *slot_hash = hash;
                *slot_value = Some(value);
                self.len = self.len.saturating_add(1);
                return Ok(None);
            }
            if *slot_hash == hash {
                return Ok(slot_value.replace(value));
            }
        }

        tracing::debug!(hash, capacity = N, "rejected insert into full flat hash map");
        Err(FlatHashMapError::CapacityExceeded { capacity: N })
    }

    /// Returns the number of occupied slots
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if no slot is occupied
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns true if every slot is occupied, so only existing hashes can be inserted
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.len == N
    }

    /// Returns the number of slots, `N`
    #[must_use]
    pub fn capacity(&self) -> usize {
        N
    }

    /// Returns the seed mixed into every hash
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Probe sequence for `hash`, starting at its home slot
    fn probe(&self, hash: u64) -> ProbeSequence {
        ProbeSequence::new(home_slot(hash, self.seed, Self::MASK), Self::MASK)
    }

    /// Index of the slot holding `hash`, if any
    fn find_index(&self, hash: u64) -> Option<usize> {
        if hash == EMPTY_HASH {
            return None;
        }

        for index in self.probe(hash) {
            match self.hashes.get(index).copied() {
                None | Some(EMPTY_HASH) => return None,
                Some(stored) if stored == hash => return Some(index),
                Some(_) => {}
            }
        }
        None
    }
}
