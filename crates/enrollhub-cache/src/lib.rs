//! # enrollhub-cache
//!
//! The in-memory enrollment cache and admission-control layer. This crate
//! holds all of the platform's real concurrency engineering:
//!
//! - [`membership::MembershipSet`]: thread-safe identifier sets backing both
//!   sides of the student↔course relation
//! - [`seats::SeatCounter`]: bounded atomic decrement counter for remaining
//!   course capacity
//! - [`single_flight::SingleFlightLoader`]: per-key "load from the backing
//!   store exactly once" coordination
//! - [`directory`]: the course and student directories plus the course
//!   metadata read-through cache
//! - [`admission`]: the optimistic check-then-compensate seat admission
//!   algorithm
//! - [`coordinator::EnrollmentCoordinator`]: the externally consumed surface
//!
//! All guarantees are process-local; nothing here persists or retries.

pub mod admission;
pub mod coordinator;
pub mod directory;
pub mod membership;
pub mod seats;
pub mod single_flight;

pub use coordinator::EnrollmentCoordinator;
