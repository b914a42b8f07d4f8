//! Repository implementations over the PostgreSQL pool.

pub mod course;
pub mod member;
