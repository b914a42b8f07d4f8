//! Bounded seat counter for course capacity.

use std::sync::atomic::{AtomicU32, Ordering};

/// Thread-safe bounded decrement counter representing a course's remaining
/// seat capacity.
///
/// `try_decrement` is the only mutator: concurrent callers racing on the
/// last seat produce exactly one `true`. There is no increment operation
/// (no unenroll path exists), but the declared capacity is retained so a
/// future increment can clamp at it rather than at an arbitrary ceiling.
#[derive(Debug)]
pub struct SeatCounter {
    /// Capacity the counter was created with.
    declared: u32,
    /// Seats still available.
    remaining: AtomicU32,
}

impl SeatCounter {
    /// Create a counter with the given capacity.
    pub fn new(capacity: u32) -> Self {
        Self {
            declared: capacity,
            remaining: AtomicU32::new(capacity),
        }
    }

    /// The capacity this counter was created with.
    pub fn declared(&self) -> u32 {
        self.declared
    }

    /// Seats currently available.
    pub fn remaining(&self) -> u32 {
        self.remaining.load(Ordering::Acquire)
    }

    /// Whether no seats remain.
    pub fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }

    /// Reserve one seat. Returns `true` if a seat was taken, `false` if the
    /// counter was already at zero (left unchanged).
    pub fn try_decrement(&self) -> bool {
        self.remaining
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |n| n.checked_sub(1))
            .is_ok()
    }
}
