//! Course directory and metadata read-through cache.

use std::sync::Arc;

use dashmap::DashMap;

use enrollhub_core::types::course::CourseMetadata;
use enrollhub_core::types::id::{CourseId, StudentId};

use crate::membership::MembershipSet;
use crate::seats::SeatCounter;

/// Per-course admission state: the roster of enrolled students and the
/// remaining-seat counter.
#[derive(Debug)]
pub struct CourseState {
    /// Students currently holding a seat.
    pub roster: MembershipSet<StudentId>,
    /// Seats still available.
    pub seats: SeatCounter,
}

impl CourseState {
    fn new(capacity: u32) -> Self {
        Self {
            roster: MembershipSet::new(),
            seats: SeatCounter::new(capacity),
        }
    }
}

/// Read-through cache of course metadata, keyed by course ID.
///
/// Populated once alongside the course's admission state; entries are never
/// refreshed or evicted for the lifetime of the process.
#[derive(Debug, Default)]
pub struct CourseMetadataCache {
    inner: DashMap<CourseId, CourseMetadata>,
}

impl CourseMetadataCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self {
            inner: DashMap::new(),
        }
    }

    /// Insert metadata for a course. Later inserts for the same course are
    /// ignored; the first loaded record wins.
    pub fn insert(&self, meta: CourseMetadata) {
        self.inner.entry(meta.course_id).or_insert(meta);
    }

    /// Fetch a copy of the metadata for a course.
    pub fn get(&self, id: CourseId) -> Option<CourseMetadata> {
        self.inner.get(&id).map(|entry| entry.value().clone())
    }
}

/// Owns the map of course ID to admission state plus the metadata cache.
///
/// Entries are registered the first time a course's existence is confirmed
/// against the backing store and are never removed. The directory map's
/// sharded locks are held only while locating or inserting an entry, never
/// across per-course operations, so registering one course never blocks
/// enrollment into another.
#[derive(Debug, Default)]
pub struct CourseDirectory {
    courses: DashMap<CourseId, Arc<CourseState>>,
    metadata: CourseMetadataCache,
}

impl CourseDirectory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self {
            courses: DashMap::new(),
            metadata: CourseMetadataCache::new(),
        }
    }

    /// Register a course with its remaining capacity and metadata record.
    /// Idempotent: an already-registered course keeps its existing state.
    pub fn register(&self, id: CourseId, capacity: u32, meta: CourseMetadata) {
        self.courses
            .entry(id)
            .or_insert_with(|| Arc::new(CourseState::new(capacity)));
        self.metadata.insert(meta);
    }

    /// Whether the course has been registered.
    pub fn contains(&self, id: CourseId) -> bool {
        self.courses.contains_key(&id)
    }

    /// Handle to the course's admission state.
    pub fn state(&self, id: CourseId) -> Option<Arc<CourseState>> {
        self.courses.get(&id).map(|entry| Arc::clone(entry.value()))
    }

    /// Seats still available, if the course is registered.
    pub fn remaining(&self, id: CourseId) -> Option<u32> {
        self.courses.get(&id).map(|entry| entry.seats.remaining())
    }

    /// Copy of the course's metadata record, if cached.
    pub fn metadata(&self, id: CourseId) -> Option<CourseMetadata> {
        self.metadata.get(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta(id: u64, name: &str) -> CourseMetadata {
        CourseMetadata {
            course_id: CourseId::new(id),
            name: name.to_string(),
            teacher_id: None,
        }
    }

    #[test]
    fn test_register_is_idempotent() {
        let dir = CourseDirectory::new();
        dir.register(CourseId::new(1), 10, meta(1, "algebra"));

        let state = dir.state(CourseId::new(1)).expect("registered");
        assert!(state.seats.try_decrement());

        // Re-registration must not reset the counter or the roster.
        dir.register(CourseId::new(1), 10, meta(1, "algebra-again"));
        assert_eq!(dir.remaining(CourseId::new(1)), Some(9));
        assert_eq!(dir.metadata(CourseId::new(1)).unwrap().name, "algebra");
    }

    #[test]
    fn test_unregistered_course_is_absent() {
        let dir = CourseDirectory::new();
        assert!(!dir.contains(CourseId::new(5)));
        assert!(dir.state(CourseId::new(5)).is_none());
        assert!(dir.remaining(CourseId::new(5)).is_none());
        assert!(dir.metadata(CourseId::new(5)).is_none());
    }
}
