//! Shared types for the fragment server workspace
//!
//! Contains the record types exchanged with the external user directory,
//! shared error types and the tracing setup used by every binary.

pub mod errors;
pub mod logging;
pub mod types;

pub use errors::*;
pub use types::*;
