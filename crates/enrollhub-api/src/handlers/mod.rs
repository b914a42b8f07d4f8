//! Request handlers, organized by domain.

pub mod course;
pub mod enroll;
pub mod health;
pub mod member;
pub mod teacher;
