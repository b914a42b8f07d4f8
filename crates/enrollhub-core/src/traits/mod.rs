//! Trait seams between layers.

pub mod store;
