//! Triangular-number probe sequence over a power-of-two table

use std::iter::FusedIterator;

/// Computes the home slot of `hash` once it has been mixed with `seed`.
///
/// `mask` must be one less than a power of two.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn home_slot(hash: u64, seed: u64, mask: usize) -> usize {
    // Truncation on 32-bit targets only drops bits the mask discards anyway.
    ((hash ^ seed) as usize) & mask
}

/// Slot indices visited while looking for a hash.
///
/// Starting at the home slot, each step advances by one more than the previous step, so the
/// displacements from home are the triangular numbers 1, 3, 6, 10, ... For a power-of-two table the
/// first `mask + 1` indices are a permutation of every slot, which is exactly how many this
/// iterator yields.
#[derive(Debug, Clone)]
pub struct ProbeSequence {
    /// Slot returned by the next call to `next`
    index: usize,
    /// Step taken after the current slot, minus one
    offset: usize,
    /// Table size minus one
    mask: usize,
    /// Slots left to visit
    remaining: usize,
}

impl ProbeSequence {
    /// Creates the probe sequence for a table of `mask + 1` slots, starting at `home`
    #[must_use]
    pub fn new(home: usize, mask: usize) -> Self {
        Self { index: home & mask, offset: 0, mask, remaining: mask.wrapping_add(1) }
    }
}

impl Iterator for ProbeSequence {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining = self.remaining.saturating_sub(1);

        let current = self.index;
        self.offset = self.offset.wrapping_add(1);
        self.index = self.index.wrapping_add(self.offset) & self.mask;
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for ProbeSequence {}

impl FusedIterator for ProbeSequence {}
