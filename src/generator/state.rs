//! Generator state: the last issued timestamp and its sequence
//!
//! Always read and written under the generator's lock.

use crate::config::SEQUENCE_BITS;

/// Mask applied when incrementing the sequence
pub const SEQUENCE_MASK: u64 = (1 << SEQUENCE_BITS) - 1;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct State {
    last_timestamp: u64,
    sequence: u64,
}

impl State {
    #[inline(always)]
    pub const fn new(last_timestamp: u64, sequence: u64) -> Self {
        Self {
            last_timestamp,
            sequence,
        }
    }

    #[inline(always)]
    pub const fn timestamp(self) -> u64 {
        self.last_timestamp
    }

    #[inline(always)]
    pub const fn sequence(self) -> u64 {
        self.sequence
    }

    /// Next state within the same millisecond, or `None` once the sequence
    /// wraps and the caller has to move on to a later millisecond
    #[inline]
    pub const fn next_sequence(self) -> Option<Self> {
        let sequence = (self.sequence + 1) & SEQUENCE_MASK;
        if sequence == 0 {
            None
        } else {
            Some(Self::new(self.last_timestamp, sequence))
        }
    }

    /// First state of a later millisecond
    #[inline(always)]
    pub const fn rollover_to(timestamp: u64) -> Self {
        Self::new(timestamp, 0)
    }
}
