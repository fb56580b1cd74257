//! Core domain logic for the storage client.
//!
//! This module provides:
//! - [`api`] - Typed wrappers around the backend REST endpoints
//! - [`FetchError`] - Error taxonomy for the network layer

pub mod api;
pub mod error;

pub use error::FetchError;
