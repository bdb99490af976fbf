//! Fragment server library
//!
//! This library serves small HTML fragments and JSON payloads for
//! partial-page interaction demos: polling, debounced search, simulated
//! latency, incremental validation, external data fetch and sanitized
//! profile editing.

pub mod config;
pub mod core;
pub mod error;
pub mod services;
pub mod traits;
pub mod types;
pub mod web;
pub mod webserver_impl;

// Re-export main types
pub use config::{LatencyProfile, ServerConfig};
pub use error::{WebServerError, WebServerResult};
pub use webserver_impl::WebServer;

// Re-export trait definitions
pub use traits::{MarkupSanitizer, UserDirectory};

// Re-export service implementations
pub use services::{RealMarkupSanitizer, RealUserDirectory};
