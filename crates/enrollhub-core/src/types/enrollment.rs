//! Enrollment outcome codes.

use serde::{Deserialize, Serialize};

/// Result of an enrollment attempt, as reported to request handlers.
///
/// Every variant besides `Enrolled` is an expected business outcome, not a
/// fault: duplicate attempts and exhausted capacity are normal traffic under
/// concurrent demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnrollOutcome {
    /// The student was granted a seat.
    Enrolled,
    /// The student already holds a seat in this course.
    AlreadyEnrolled,
    /// No seats remain in this course.
    CourseFull,
    /// The student does not exist in the backing store.
    StudentUnknown,
    /// The course does not exist in the backing store.
    CourseUnknown,
}

impl EnrollOutcome {
    /// Whether the attempt ended with the student seated.
    pub const fn is_enrolled(self) -> bool {
        matches!(self, Self::Enrolled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_codes() {
        let json = serde_json::to_string(&EnrollOutcome::CourseFull).expect("serialize");
        assert_eq!(json, "\"course_full\"");
        let parsed: EnrollOutcome =
            serde_json::from_str("\"already_enrolled\"").expect("deserialize");
        assert_eq!(parsed, EnrollOutcome::AlreadyEnrolled);
    }
}
