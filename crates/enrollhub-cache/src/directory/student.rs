//! Student directory.

use std::sync::Arc;

use dashmap::DashMap;

use enrollhub_core::types::id::{CourseId, StudentId};

use crate::membership::MembershipSet;

/// Owns the map of student ID to the set of courses that student has chosen.
///
/// This directory is a read-only mirror of the backing store's student
/// population: entries are registered the first time a student's existence
/// is confirmed and are never removed or invented.
#[derive(Debug, Default)]
pub struct StudentDirectory {
    students: DashMap<StudentId, Arc<MembershipSet<CourseId>>>,
}

impl StudentDirectory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self {
            students: DashMap::new(),
        }
    }

    /// Register a student with an empty schedule. Idempotent: an
    /// already-registered student keeps their existing schedule.
    pub fn register(&self, id: StudentId) {
        self.students
            .entry(id)
            .or_insert_with(|| Arc::new(MembershipSet::new()));
    }

    /// Whether the student has been registered.
    pub fn contains(&self, id: StudentId) -> bool {
        self.students.contains_key(&id)
    }

    /// Handle to the student's chosen-course set.
    pub fn schedule(&self, id: StudentId) -> Option<Arc<MembershipSet<CourseId>>> {
        self.students
            .get(&id)
            .map(|entry| Arc::clone(entry.value()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_keeps_existing_schedule() {
        let dir = StudentDirectory::new();
        let id = StudentId::new(3);
        dir.register(id);

        let schedule = dir.schedule(id).expect("registered");
        schedule.add(CourseId::new(1));

        dir.register(id);
        assert_eq!(dir.schedule(id).unwrap().len(), 1);
    }

    #[test]
    fn test_unregistered_student_is_absent() {
        let dir = StudentDirectory::new();
        assert!(!dir.contains(StudentId::new(8)));
        assert!(dir.schedule(StudentId::new(8)).is_none());
    }
}
