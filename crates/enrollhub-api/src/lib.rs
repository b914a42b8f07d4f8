//! # enrollhub-api
//!
//! HTTP API layer for EnrollHub: route definitions, request handlers, DTOs,
//! the application state threaded through axum, and the mapping from domain
//! errors to HTTP responses.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;
