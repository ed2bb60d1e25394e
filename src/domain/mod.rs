//! Domain layer containing business entities and the storage contract.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependencies on the HTTP layer. Repository traits
//! are implemented by [`crate::infrastructure::persistence`].

pub mod entities;
pub mod repositories;
