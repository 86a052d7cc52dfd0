// SPDX-License-Identifier: MIT OR Apache-2.0

//! A fixed-capacity store keyed by a wrapping 16-bit sequence number, used
//! by reliability layers to track which packets/messages are still within
//! the live window and which have aged out.

#[cfg(feature = "alloc")]
use alloc::vec::Vec;
use core::mem;

#[cfg(feature = "mem_dbg")]
use mem_dbg::{MemDbg, MemSize};

const SENTINEL: u32 = 0xFFFF_FFFF;

/// `true` iff `a` is newer than `b` under 16-bit wraparound, i.e. `a` is
/// reachable from `b` by advancing at most half the sequence space.
#[inline]
pub fn sequence_greater_than(a: u16, b: u16) -> bool {
    (a > b && a - b <= 32768) || (a < b && b - a > 32768)
}

/// The mirror of [`sequence_greater_than`].
#[inline]
pub fn sequence_less_than(a: u16, b: u16) -> bool {
    sequence_greater_than(b, a)
}

/// Slot-indexed store keyed by `sequence mod capacity`.
///
/// A slot `i` is occupied by sequence `s` iff `entry_sequence[i] == s` *and*
/// `i == s mod capacity`; the sentinel `0xFFFF_FFFF` (which cannot collide
/// with any real 16-bit sequence number) marks an empty slot. As
/// [`Self::insert`] advances the window, every slot that index-collides
/// with a sequence number now outside the window is explicitly reset to
/// the sentinel, even if nothing is written there again — otherwise a
/// stale entry from several wraps ago could resurface as a false positive
/// once the window wraps back onto its index.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "mem_dbg", derive(MemDbg, MemSize))]
pub struct SequenceBuffer<T> {
    entry_sequence: Vec<u32>,
    entry: Vec<T>,
    capacity: usize,
    newest_sequence: u16,
}

impl<T: Default + Clone> SequenceBuffer<T> {
    /// Creates a buffer with `capacity` slots, `1 <= capacity <= 65536`.
    pub fn new(capacity: usize) -> Self {
        debug_assert!(capacity >= 1 && capacity <= 65536);
        Self {
            entry_sequence: alloc::vec![SENTINEL; capacity],
            entry: alloc::vec![T::default(); capacity],
            capacity,
            newest_sequence: 0,
        }
    }
}

impl<T> SequenceBuffer<T> {
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// One past the most recently inserted sequence number.
    #[inline]
    pub fn get_sequence(&self) -> u16 {
        self.newest_sequence
    }

    fn is_stale(&self, sequence: u16) -> bool {
        let distance = self.newest_sequence.wrapping_sub(sequence) as u32;
        distance > self.capacity as u32
    }

    fn remove_entries(&mut self, from: u16, to: u16) {
        let count = (to.wrapping_sub(from) as u32) + 1;
        if count as usize >= self.capacity {
            self.entry_sequence.fill(SENTINEL);
            return;
        }
        for k in 0..count {
            let idx = from.wrapping_add(k as u16) as usize % self.capacity;
            self.entry_sequence[idx] = SENTINEL;
        }
    }

    /// Inserts (or re-accepts) `sequence`, returning a mutable handle to
    /// its slot, or `None` if `sequence` is too old to fit in the current
    /// window (`newest_sequence - capacity`, wrap-aware).
    pub fn insert(&mut self, sequence: u16) -> Option<&mut T> {
        if sequence_greater_than(sequence.wrapping_add(1), self.newest_sequence) {
            self.remove_entries(self.newest_sequence, sequence);
            self.newest_sequence = sequence.wrapping_add(1);
        } else if self.is_stale(sequence) {
            return None;
        }
        let idx = sequence as usize % self.capacity;
        self.entry_sequence[idx] = sequence as u32;
        Some(&mut self.entry[idx])
    }

    #[inline]
    fn slot_matches(&self, sequence: u16) -> Option<usize> {
        let idx = sequence as usize % self.capacity;
        (self.entry_sequence[idx] == sequence as u32).then_some(idx)
    }

    /// Looks up the entry stored for `sequence`, if any.
    pub fn find(&self, sequence: u16) -> Option<&T> {
        self.slot_matches(sequence).map(|idx| &self.entry[idx])
    }

    /// Mutable variant of [`Self::find`].
    pub fn find_mut(&mut self, sequence: u16) -> Option<&mut T> {
        self.slot_matches(sequence).map(move |idx| &mut self.entry[idx])
    }

    #[inline]
    pub fn exists(&self, sequence: u16) -> bool {
        self.slot_matches(sequence).is_some()
    }

    /// `true` iff the slot that `sequence` would occupy is currently empty.
    #[inline]
    pub fn available(&self, sequence: u16) -> bool {
        let idx = sequence as usize % self.capacity;
        self.entry_sequence[idx] == SENTINEL
    }

    /// Explicitly invalidates the slot for `sequence`, if occupied by it,
    /// returning the removed entry.
    pub fn remove(&mut self, sequence: u16) -> Option<T>
    where
        T: Default,
    {
        let idx = self.slot_matches(sequence)?;
        self.entry_sequence[idx] = SENTINEL;
        Some(mem::take(&mut self.entry[idx]))
    }

    /// Resets the buffer to its just-constructed state.
    pub fn reset(&mut self) {
        self.entry_sequence.fill(SENTINEL);
        self.newest_sequence = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_and_invalidates_stale_slots() {
        let mut buf: SequenceBuffer<u32> = SequenceBuffer::new(256);
        for s in 0u16..1024 {
            assert!(buf.insert(s).is_some());
        }
        assert_eq!(buf.get_sequence(), 1025);

        for s in (1024u16 - 255)..=1024 {
            assert!(buf.exists(s), "expected {s} to still be live");
        }
        assert!(!buf.exists(768));

        for s in 0u16..256 {
            assert!(buf.insert(s).is_none(), "sequence {s} should be rejected as stale");
        }

        buf.reset();
        assert_eq!(buf.get_sequence(), 0);
        for s in 0u16..1024 {
            assert!(!buf.exists(s));
        }
    }

    #[test]
    fn stores_and_finds_values() {
        let mut buf: SequenceBuffer<u32> = SequenceBuffer::new(16);
        *buf.insert(5).unwrap() = 555;
        assert_eq!(buf.find(5), Some(&555));
        assert_eq!(buf.find(6), None);
        assert!(!buf.available(5));
        assert!(buf.available(6));
    }

    #[test]
    fn remove_clears_slot() {
        let mut buf: SequenceBuffer<u32> = SequenceBuffer::new(16);
        *buf.insert(3).unwrap() = 42;
        assert_eq!(buf.remove(3), Some(42));
        assert!(!buf.exists(3));
        assert_eq!(buf.remove(3), None);
    }

    #[test]
    fn comparisons_handle_wraparound() {
        assert!(sequence_greater_than(1, 0));
        assert!(sequence_greater_than(0, 65535));
        assert!(!sequence_greater_than(32768, 0));
        assert!(sequence_less_than(0, 1));
        assert!(sequence_less_than(65535, 0));
    }
}
