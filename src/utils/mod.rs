//! Helper functions shared across layers.
//!
//! - [`db_error`] - Structured classification of database errors

pub mod db_error;
