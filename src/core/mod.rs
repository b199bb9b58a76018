//! Core types shared across the crate.

pub mod error;

pub use error::{ViewerError, display_error};
