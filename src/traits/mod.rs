//! Trait abstractions for dependency injection and testability.
//!
//! # Traits
//!
//! - [`KeyValueStore`] - persistence for the recent list and reaction queue
//! - [`Localizer`] - emoji name to display label lookup

pub mod storage;

pub use crate::catalog::localize::Localizer;
pub use storage::{KeyValueStore, StorageError};
