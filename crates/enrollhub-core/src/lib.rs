//! # enrollhub-core
//!
//! Foundation crate for EnrollHub: domain identifier newtypes, shared
//! entity types, configuration schemas, the unified [`error::AppError`]
//! type, and the [`traits::store::EnrollmentStore`] seam behind which
//! the relational backing store lives.
//!
//! This crate performs no I/O of its own.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;
