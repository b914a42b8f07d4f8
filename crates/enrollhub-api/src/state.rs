//! Shared application state for request handlers.

use std::sync::Arc;

use enrollhub_cache::EnrollmentCoordinator;
use enrollhub_core::config::AppConfig;
use enrollhub_database::repositories::course::CourseRepository;
use enrollhub_database::repositories::member::MemberRepository;

/// State threaded through every route via axum's `State` extractor.
///
/// Constructed once at startup; all fields are cheaply cloneable handles.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// The enrollment cache and admission layer.
    pub coordinator: Arc<EnrollmentCoordinator>,
    /// Member repository.
    pub member_repo: Arc<MemberRepository>,
    /// Course repository.
    pub course_repo: Arc<CourseRepository>,
}
