//! Concurrency stress tests for the enrollment cache layer.
//!
//! These pin down the admission invariants under real contention: seat
//! grants never exceed capacity, duplicate attempts never double-decrement,
//! losers leave no residue, and existence resolution hits the backing store
//! exactly once per ID.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use futures::future::join_all;

use enrollhub_cache::EnrollmentCoordinator;
use enrollhub_core::error::AppError;
use enrollhub_core::result::AppResult;
use enrollhub_core::traits::store::EnrollmentStore;
use enrollhub_core::types::course::CourseMetadata;
use enrollhub_core::types::enrollment::EnrollOutcome;
use enrollhub_core::types::id::{CourseId, StudentId};

/// Backing-store stub: every student ID below `student_limit` exists, plus a
/// fixed set of courses. Lookups are counted and artificially slowed so that
/// concurrent first-time callers really overlap.
struct BenchStore {
    student_limit: u64,
    courses: HashMap<CourseId, (u32, CourseMetadata)>,
    student_lookups: AtomicUsize,
    course_lookups: AtomicUsize,
}

impl BenchStore {
    fn new(student_limit: u64, courses: &[(u64, u32)]) -> Self {
        let courses = courses
            .iter()
            .map(|&(id, capacity)| {
                let course_id = CourseId::new(id);
                let meta = CourseMetadata {
                    course_id,
                    name: format!("course-{id}"),
                    teacher_id: None,
                };
                (course_id, (capacity, meta))
            })
            .collect();

        Self {
            student_limit,
            courses,
            student_lookups: AtomicUsize::new(0),
            course_lookups: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl EnrollmentStore for BenchStore {
    async fn lookup_student(&self, id: StudentId) -> AppResult<bool> {
        self.student_lookups.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(std::time::Duration::from_millis(2)).await;
        Ok(id.as_u64() < self.student_limit)
    }

    async fn lookup_course(&self, id: CourseId) -> AppResult<bool> {
        self.course_lookups.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(std::time::Duration::from_millis(2)).await;
        Ok(self.courses.contains_key(&id))
    }

    async fn course_capacity(&self, id: CourseId) -> AppResult<u32> {
        self.courses
            .get(&id)
            .map(|(capacity, _)| *capacity)
            .ok_or_else(|| AppError::not_found("course not found"))
    }

    async fn course_metadata(&self, id: CourseId) -> AppResult<CourseMetadata> {
        self.courses
            .get(&id)
            .map(|(_, meta)| meta.clone())
            .ok_or_else(|| AppError::not_found("course not found"))
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn oversubscribed_course_grants_exactly_capacity() {
    const CAP: u32 = 20;
    const OVERSHOOT: u32 = 15;

    let store = Arc::new(BenchStore::new(1000, &[(1, CAP)]));
    let coordinator = Arc::new(EnrollmentCoordinator::new(store.clone()));
    let course = CourseId::new(1);

    let attempts = (0..(CAP + OVERSHOOT) as u64).map(|n| {
        let coordinator = Arc::clone(&coordinator);
        tokio::spawn(async move { (n, coordinator.enroll(StudentId::new(n), course).await) })
    });

    let results: Vec<(u64, EnrollOutcome)> = join_all(attempts)
        .await
        .into_iter()
        .map(|r| r.expect("task panicked"))
        .collect();

    let granted: Vec<u64> = results
        .iter()
        .filter(|(_, outcome)| outcome.is_enrolled())
        .map(|(n, _)| *n)
        .collect();
    let full = results
        .iter()
        .filter(|(_, outcome)| *outcome == EnrollOutcome::CourseFull)
        .count();

    assert_eq!(granted.len(), CAP as usize);
    assert_eq!(full, OVERSHOOT as usize);
    assert_eq!(coordinator.remaining_seats(course), Some(0));

    let state = coordinator.courses().state(course).expect("registered");
    assert_eq!(state.roster.len(), CAP as usize);

    // Winners hold both sides of the relation; losers hold neither.
    for (n, outcome) in &results {
        let student = StudentId::new(*n);
        let schedule = coordinator
            .students()
            .schedule(student)
            .expect("every student resolved");
        if outcome.is_enrolled() {
            assert!(schedule.contains(course));
            assert!(state.roster.contains(student));
        } else {
            assert!(!schedule.contains(course));
            assert!(!state.roster.contains(student));
        }
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn last_seat_race_has_one_winner() {
    let store = Arc::new(BenchStore::new(10, &[(1, 1)]));
    let coordinator = Arc::new(EnrollmentCoordinator::new(store));
    let course = CourseId::new(1);

    let c1 = Arc::clone(&coordinator);
    let c2 = Arc::clone(&coordinator);
    let (a, b) = tokio::join!(
        tokio::spawn(async move { c1.enroll(StudentId::new(1), course).await }),
        tokio::spawn(async move { c2.enroll(StudentId::new(2), course).await }),
    );
    let (a, b) = (a.expect("task"), b.expect("task"));

    let outcomes = [a, b];
    assert_eq!(
        outcomes
            .iter()
            .filter(|outcome| outcome.is_enrolled())
            .count(),
        1
    );
    assert_eq!(
        outcomes
            .iter()
            .filter(|outcome| **outcome == EnrollOutcome::CourseFull)
            .count(),
        1
    );
    assert_eq!(coordinator.remaining_seats(course), Some(0));
    assert_eq!(
        coordinator.courses().state(course).unwrap().roster.len(),
        1
    );
}

#[tokio::test]
async fn sequential_duplicate_decrements_once() {
    let store = Arc::new(BenchStore::new(10, &[(1, 5)]));
    let coordinator = EnrollmentCoordinator::new(store);
    let student = StudentId::new(1);
    let course = CourseId::new(1);

    assert_eq!(
        coordinator.enroll(student, course).await,
        EnrollOutcome::Enrolled
    );
    assert_eq!(
        coordinator.enroll(student, course).await,
        EnrollOutcome::AlreadyEnrolled
    );
    assert_eq!(coordinator.remaining_seats(course), Some(4));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn concurrent_resolution_hits_store_once() {
    const CALLERS: usize = 64;

    let store = Arc::new(BenchStore::new(10, &[(1, 5)]));
    let coordinator = Arc::new(EnrollmentCoordinator::new(store.clone()));

    let known = join_all((0..CALLERS).map(|_| {
        let coordinator = Arc::clone(&coordinator);
        tokio::spawn(async move { coordinator.ensure_course_known(CourseId::new(1)).await })
    }))
    .await;
    assert!(known.into_iter().all(|r| r.expect("task panicked")));
    assert_eq!(store.course_lookups.load(Ordering::SeqCst), 1);

    // Absent IDs are resolved once too, and stay absent.
    let absent = join_all((0..CALLERS).map(|_| {
        let coordinator = Arc::clone(&coordinator);
        tokio::spawn(async move { coordinator.ensure_student_known(StudentId::new(500)).await })
    }))
    .await;
    assert!(absent.into_iter().all(|r| !r.expect("task panicked")));
    assert_eq!(store.student_lookups.load(Ordering::SeqCst), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn relation_stays_symmetric_across_interleavings() {
    let store = Arc::new(BenchStore::new(100, &[(1, 50), (2, 50), (3, 50)]));
    let coordinator = Arc::new(EnrollmentCoordinator::new(store));
    let courses = [CourseId::new(1), CourseId::new(2), CourseId::new(3)];

    let attempts = (0..30u64).flat_map(|n| {
        courses.map(|course| {
            let coordinator = Arc::clone(&coordinator);
            tokio::spawn(async move { coordinator.enroll(StudentId::new(n), course).await })
        })
    });
    for result in join_all(attempts).await {
        assert!(result.expect("task panicked").is_enrolled());
    }

    for n in 0..30u64 {
        let student = StudentId::new(n);
        let schedule = coordinator.schedule(student).expect("student resolved");
        assert_eq!(schedule.len(), 3);
        for course in courses {
            let state = coordinator.courses().state(course).expect("registered");
            assert!(state.roster.contains(student));
        }
    }
    for course in courses {
        assert_eq!(coordinator.remaining_seats(course), Some(20));
        assert_eq!(
            coordinator.courses().state(course).unwrap().roster.len(),
            30
        );
    }
}
