//! Thread-safe identifier sets.

use std::collections::HashSet;
use std::hash::Hash;

use parking_lot::RwLock;

/// A thread-safe set of identifiers.
///
/// Backs both sides of the student↔course relation: "students enrolled in
/// course X" and "courses student S has chosen". Every operation is
/// individually atomic under the internal lock, but no cross-operation
/// atomicity is provided — a `contains` followed by an `add` is not a single
/// check-and-set. Callers that need multi-step coordination handle it at a
/// coarser granularity (see [`crate::admission`]).
#[derive(Debug, Default)]
pub struct MembershipSet<T> {
    inner: RwLock<HashSet<T>>,
}

impl<T> MembershipSet<T>
where
    T: Copy + Eq + Hash,
{
    /// Create an empty set.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(HashSet::new()),
        }
    }

    /// Insert an identifier. Returns `true` if it was newly inserted and
    /// `false` if it was already present.
    pub fn add(&self, id: T) -> bool {
        self.inner.write().insert(id)
    }

    /// Remove an identifier if present. Absent identifiers are a no-op.
    pub fn remove(&self, id: T) {
        self.inner.write().remove(&id);
    }

    /// Whether the identifier is present.
    pub fn contains(&self, id: T) -> bool {
        self.inner.read().contains(&id)
    }

    /// Point-in-time copy of the set, safe to iterate without holding the
    /// internal lock.
    pub fn snapshot(&self) -> Vec<T> {
        self.inner.read().iter().copied().collect()
    }

    /// Current number of identifiers.
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_is_idempotent() {
        let set = MembershipSet::new();
        assert!(set.add(1u64));
        assert!(!set.add(1u64));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let set = MembershipSet::new();
        set.add(7u64);
        set.remove(99u64);
        assert!(set.contains(7));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_snapshot_is_detached() {
        let set = MembershipSet::new();
        set.add(1u64);
        set.add(2u64);
        let snap = set.snapshot();
        set.add(3u64);
        assert_eq!(snap.len(), 2);
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_concurrent_adds_count_once() {
        let set = std::sync::Arc::new(MembershipSet::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let set = std::sync::Arc::clone(&set);
                std::thread::spawn(move || {
                    let mut wins = 0usize;
                    for id in 0..100u64 {
                        if set.add(id) {
                            wins += 1;
                        }
                    }
                    wins
                })
            })
            .collect();

        let total: usize = handles.into_iter().map(|h| h.join().unwrap()).sum();
        assert_eq!(total, 100);
        assert_eq!(set.len(), 100);
    }
}
