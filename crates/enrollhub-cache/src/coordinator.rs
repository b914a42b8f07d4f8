//! Orchestration of existence resolution and admission.

use std::sync::Arc;

use tracing::{debug, warn};

use enrollhub_core::traits::store::EnrollmentStore;
use enrollhub_core::types::course::CourseMetadata;
use enrollhub_core::types::enrollment::EnrollOutcome;
use enrollhub_core::types::id::{CourseId, StudentId};

use crate::admission::{self, AdmissionOutcome};
use crate::directory::{CourseDirectory, CourseState, StudentDirectory};
use crate::membership::MembershipSet;
use crate::single_flight::SingleFlightLoader;

/// Ties existence resolution (via per-directory single-flight loaders) and
/// the admission algorithm together into the operations consumed by request
/// handlers.
///
/// Constructed once at startup and shared by reference across handlers; a
/// fresh instance has empty directories and re-resolves every ID against the
/// backing store on first demand.
pub struct EnrollmentCoordinator {
    store: Arc<dyn EnrollmentStore>,
    students: StudentDirectory,
    courses: CourseDirectory,
    student_flight: SingleFlightLoader<StudentId>,
    course_flight: SingleFlightLoader<CourseId>,
}

impl EnrollmentCoordinator {
    /// Create a coordinator over the given backing store.
    pub fn new(store: Arc<dyn EnrollmentStore>) -> Self {
        Self {
            store,
            students: StudentDirectory::new(),
            courses: CourseDirectory::new(),
            student_flight: SingleFlightLoader::new(),
            course_flight: SingleFlightLoader::new(),
        }
    }

    /// Resolve a student's existence, querying the backing store at most
    /// once per ID for the process lifetime.
    pub async fn ensure_student_known(&self, id: StudentId) -> bool {
        self.resolve_student(id).await.is_some()
    }

    /// Resolve a course's existence, querying the backing store at most once
    /// per ID for the process lifetime. On first resolution the course's
    /// remaining capacity and metadata are loaded together.
    pub async fn ensure_course_known(&self, id: CourseId) -> bool {
        self.resolve_course(id).await.is_some()
    }

    /// Enroll a student in a course.
    ///
    /// Resolves both existences first; only when both are known does the
    /// admission algorithm run. Failure paths leave no observable residue.
    pub async fn enroll(&self, student_id: StudentId, course_id: CourseId) -> EnrollOutcome {
        let Some(schedule) = self.resolve_student(student_id).await else {
            return EnrollOutcome::StudentUnknown;
        };
        let Some(course) = self.resolve_course(course_id).await else {
            return EnrollOutcome::CourseUnknown;
        };

        match admission::admit(&schedule, &course, student_id, course_id) {
            AdmissionOutcome::Admitted => {
                debug!(
                    student_id = %student_id,
                    course_id = %course_id,
                    remaining = course.seats.remaining(),
                    "Seat granted"
                );
                EnrollOutcome::Enrolled
            }
            AdmissionOutcome::AlreadyEnrolled => EnrollOutcome::AlreadyEnrolled,
            AdmissionOutcome::CourseFull => EnrollOutcome::CourseFull,
        }
    }

    /// Snapshot of the courses a student has chosen, resolved through the
    /// metadata cache. Read-only: never triggers a backing-store load, and
    /// returns `None` for students the coordinator has not seen resolve.
    pub fn schedule(&self, student_id: StudentId) -> Option<Vec<CourseMetadata>> {
        let schedule = self.students.schedule(student_id)?;
        let mut courses: Vec<CourseMetadata> = schedule
            .snapshot()
            .into_iter()
            .filter_map(|course_id| self.courses.metadata(course_id))
            .collect();
        courses.sort_by_key(|meta| meta.course_id);
        Some(courses)
    }

    /// Seats still available in a resolved course.
    pub fn remaining_seats(&self, course_id: CourseId) -> Option<u32> {
        self.courses.remaining(course_id)
    }

    /// The course directory (read-only observability).
    pub fn courses(&self) -> &CourseDirectory {
        &self.courses
    }

    /// The student directory (read-only observability).
    pub fn students(&self) -> &StudentDirectory {
        &self.students
    }

    async fn resolve_student(&self, id: StudentId) -> Option<Arc<MembershipSet<CourseId>>> {
        self.student_flight
            .resolve(id, || async move {
                match self.store.lookup_student(id).await {
                    Ok(true) => self.students.register(id),
                    Ok(false) => {}
                    Err(err) => {
                        // Fails open to absence, never to presence.
                        warn!(student_id = %id, error = %err, "Student lookup failed");
                    }
                }
            })
            .await;

        self.students.schedule(id)
    }

    async fn resolve_course(&self, id: CourseId) -> Option<Arc<CourseState>> {
        self.course_flight
            .resolve(id, || async move {
                match self.store.lookup_course(id).await {
                    Ok(true) => {
                        let capacity = match self.store.course_capacity(id).await {
                            Ok(capacity) => capacity,
                            Err(err) => {
                                warn!(course_id = %id, error = %err, "Capacity load failed");
                                return;
                            }
                        };
                        let meta = match self.store.course_metadata(id).await {
                            Ok(meta) => meta,
                            Err(err) => {
                                warn!(course_id = %id, error = %err, "Metadata load failed");
                                return;
                            }
                        };
                        self.courses.register(id, capacity, meta);
                    }
                    Ok(false) => {}
                    Err(err) => {
                        warn!(course_id = %id, error = %err, "Course lookup failed");
                    }
                }
            })
            .await;

        self.courses.state(id)
    }
}
