//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures. Creation uses a separate input struct
//! ([`NewUser`]) because the identifier only exists once the store assigns it.

pub mod user;

pub use user::{NewUser, User};
