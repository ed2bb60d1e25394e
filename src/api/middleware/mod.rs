//! HTTP middleware for request processing.
//!
//! Provides observability, panic recovery and cross-origin middleware.

pub mod cors;
pub mod recover;
pub mod tracing;
