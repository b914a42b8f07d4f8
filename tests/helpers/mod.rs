//! Shared test helpers for API integration tests.
//!
//! The router is exercised in-process with a stub backing store and a
//! lazily-connected pool, so no database has to be running. Only routes
//! served entirely from the in-memory admission layer are covered here;
//! repository-backed routes need a live PostgreSQL instance.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use serde_json::Value;
use sqlx::postgres::PgPoolOptions;
use tower::ServiceExt;

use enrollhub_api::router::build_router;
use enrollhub_api::state::AppState;
use enrollhub_cache::EnrollmentCoordinator;
use enrollhub_core::config::{AppConfig, DatabaseConfig};
use enrollhub_core::result::AppResult;
use enrollhub_core::traits::store::EnrollmentStore;
use enrollhub_core::types::course::CourseMetadata;
use enrollhub_core::types::id::{CourseId, StudentId};
use enrollhub_database::repositories::course::CourseRepository;
use enrollhub_database::repositories::member::MemberRepository;

/// Fixed-population backing store.
pub struct StubStore {
    students: Vec<StudentId>,
    courses: HashMap<CourseId, (u32, CourseMetadata)>,
}

impl StubStore {
    pub fn new() -> Self {
        Self {
            students: Vec::new(),
            courses: HashMap::new(),
        }
    }

    pub fn with_student(mut self, id: u64) -> Self {
        self.students.push(StudentId::new(id));
        self
    }

    pub fn with_course(mut self, id: u64, name: &str, capacity: u32) -> Self {
        let course_id = CourseId::new(id);
        let meta = CourseMetadata {
            course_id,
            name: name.to_string(),
            teacher_id: None,
        };
        self.courses.insert(course_id, (capacity, meta));
        self
    }
}

#[async_trait]
impl EnrollmentStore for StubStore {
    async fn lookup_student(&self, id: StudentId) -> AppResult<bool> {
        Ok(self.students.contains(&id))
    }

    async fn lookup_course(&self, id: CourseId) -> AppResult<bool> {
        Ok(self.courses.contains_key(&id))
    }

    async fn course_capacity(&self, id: CourseId) -> AppResult<u32> {
        Ok(self.courses.get(&id).map(|(cap, _)| *cap).unwrap_or(0))
    }

    async fn course_metadata(&self, id: CourseId) -> AppResult<CourseMetadata> {
        Ok(self.courses.get(&id).map(|(_, meta)| meta.clone()).unwrap())
    }
}

/// Parsed response: status plus JSON body.
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

/// Test application wrapping the full router.
pub struct TestApp {
    router: Router,
}

impl TestApp {
    /// Build the app over a stub store. The pool never connects; routes
    /// that would touch it are not exercised by these tests.
    pub fn new(store: StubStore) -> Self {
        let config = AppConfig {
            server: Default::default(),
            database: DatabaseConfig {
                url: "postgres://localhost:5432/enrollhub_test".to_string(),
                max_connections: 1,
                min_connections: 0,
                connect_timeout_seconds: 1,
                idle_timeout_seconds: 60,
            },
            logging: Default::default(),
        };

        let pool = PgPoolOptions::new()
            .max_connections(config.database.max_connections)
            .connect_lazy(&config.database.url)
            .expect("lazy pool");

        let coordinator = Arc::new(EnrollmentCoordinator::new(Arc::new(store)));
        let state = AppState {
            config: Arc::new(config),
            coordinator,
            member_repo: Arc::new(MemberRepository::new(pool.clone())),
            course_repo: Arc::new(CourseRepository::new(pool)),
        };

        Self {
            router: build_router(state),
        }
    }

    /// Issue a request against the in-process router.
    pub async fn request(&self, method: &str, uri: &str, body: Option<Value>) -> TestResponse {
        let request = match body {
            Some(json) => Request::builder()
                .method(method)
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .expect("request"),
            None => Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .expect("request"),
        };

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router response");

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("read body");
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("JSON body")
        };

        TestResponse { status, body }
    }
}
