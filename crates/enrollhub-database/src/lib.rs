//! # enrollhub-database
//!
//! PostgreSQL layer for EnrollHub: connection pool management, embedded
//! migrations, member/course repositories, and the
//! [`store::PgEnrollmentStore`] implementation of the backing-store trait
//! consumed by the cache layer.

pub mod connection;
pub mod migration;
pub mod repositories;
pub mod store;
