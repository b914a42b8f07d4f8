//! The seat admission algorithm.

use enrollhub_core::types::id::{CourseId, StudentId};

use crate::directory::CourseState;
use crate::membership::MembershipSet;

/// Result of one admission attempt. Once existence has been resolved, these
/// are the only possible outcomes: the algorithm is purely in-memory and
/// never partially fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdmissionOutcome {
    /// A seat was reserved and both sides of the relation were recorded.
    Admitted,
    /// The student already holds (or concurrently acquired) a seat.
    AlreadyEnrolled,
    /// Capacity was exhausted before a seat could be reserved.
    CourseFull,
}

/// Attempt to seat `student_id` in the course identified by `course_id`.
///
/// `schedule` is the student's chosen-course set and `course` the course's
/// admission state; both handles come from directories that the caller has
/// already resolved, which encodes the existence precondition in the
/// signature.
///
/// No lock spans the whole operation. The exhaustion check in step 2 is
/// advisory only — another caller may take the last seat between it and the
/// decrement — so the algorithm records intent on the student side first and
/// compensates if the authoritative decrement then loses the race:
///
/// 1. Schedule already contains the course → `AlreadyEnrolled` without
///    touching the seat counter.
/// 2. Counter exhausted → `CourseFull` without touching either set.
/// 3. Insert the course into the schedule; a concurrent duplicate that got
///    there first → `AlreadyEnrolled`.
/// 4. `try_decrement`; on failure, remove the entry inserted in step 3
///    before returning `CourseFull`. The rollback always completes before
///    the result is returned, so no caller observes the transient entry as
///    a success.
/// 5. Record the student in the course roster and report `Admitted`. The
///    relation is asymmetric between steps 3 and 5, but course-side reads
///    feed only seat accounting, never the student's own schedule.
pub fn admit(
    schedule: &MembershipSet<CourseId>,
    course: &CourseState,
    student_id: StudentId,
    course_id: CourseId,
) -> AdmissionOutcome {
    if schedule.contains(course_id) {
        return AdmissionOutcome::AlreadyEnrolled;
    }

    if course.seats.is_exhausted() {
        return AdmissionOutcome::CourseFull;
    }

    if !schedule.add(course_id) {
        return AdmissionOutcome::AlreadyEnrolled;
    }

    if !course.seats.try_decrement() {
        // Lost the race for the last seat after recording intent.
        schedule.remove(course_id);
        return AdmissionOutcome::CourseFull;
    }

    course.roster.add(student_id);
    AdmissionOutcome::Admitted
}
