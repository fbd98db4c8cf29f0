//! Mock implementations for testing.
//!
//! # Available Mocks
//!
//! - [`InMemoryStore`] - in-memory key-value storage

pub mod store;

pub use store::InMemoryStore;
