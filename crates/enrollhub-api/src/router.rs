//! Route definitions for the EnrollHub HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`. The router
//! receives `AppState` and passes it to all handlers via axum's `State`
//! extractor.

use axum::{
    Router,
    routing::{delete, get, post, put},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let v1_routes = Router::new()
        .merge(member_routes())
        .merge(course_routes())
        .merge(teacher_routes())
        .merge(student_routes());

    Router::new()
        .route("/api/health", get(handlers::health::health))
        .nest("/api/v1", v1_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Member management endpoints
fn member_routes() -> Router<AppState> {
    Router::new()
        .route("/members", post(handlers::member::create_member))
        .route("/members", get(handlers::member::list_members))
        .route("/members/{id}", get(handlers::member::get_member))
        .route("/members/{id}", put(handlers::member::update_member))
        .route("/members/{id}", delete(handlers::member::delete_member))
}

/// Course management endpoints
fn course_routes() -> Router<AppState> {
    Router::new()
        .route("/courses", post(handlers::course::create_course))
        .route("/courses/{id}", get(handlers::course::get_course))
}

/// Teacher↔course binding endpoints
fn teacher_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/teachers/{id}/courses/{course_id}/bind",
            post(handlers::teacher::bind_course),
        )
        .route(
            "/teachers/{id}/courses/{course_id}/bind",
            delete(handlers::teacher::unbind_course),
        )
        .route(
            "/teachers/{id}/courses",
            get(handlers::teacher::list_courses),
        )
}

/// Student enrollment and schedule endpoints
fn student_routes() -> Router<AppState> {
    Router::new()
        .route("/students/{id}/courses", post(handlers::enroll::enroll))
        .route(
            "/students/{id}/courses",
            get(handlers::enroll::get_schedule),
        )
}
