//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx with
//! parameterized statements; values are always bound, never interpolated.
//!
//! # Repositories
//!
//! - [`PgUserRepository`] - User storage and retrieval

pub mod pg_user_repository;

pub use pg_user_repository::PgUserRepository;
