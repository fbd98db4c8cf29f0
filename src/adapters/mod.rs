//! Concrete implementations of trait abstractions.
//!
//! # Adapters
//!
//! - [`JsonFileStore`] - key-value store backed by one JSON file
//!
//! # Mock Implementations
//!
//! - [`mock::InMemoryStore`] - in-memory store with failure injection

pub mod json_store;
pub mod mock;

pub use json_store::JsonFileStore;
pub use mock::InMemoryStore;
