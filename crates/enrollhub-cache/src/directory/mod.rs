//! Directories mapping entity IDs to their in-memory admission state.
//!
//! The course directory and student directory each exclusively own their
//! side of the student↔course relation. Neither holds a reference into the
//! other; cross-consistency is enforced procedurally by the admission
//! algorithm.

pub mod course;
pub mod student;

pub use course::{CourseDirectory, CourseMetadataCache, CourseState};
pub use student::StudentDirectory;
