//! Shared domain types.

pub mod course;
pub mod enrollment;
pub mod id;
pub mod member;
pub mod pagination;
