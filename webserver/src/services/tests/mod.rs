//! Service tests for webserver
//!
//! This module contains tests for the real service implementations.

pub mod user_directory;
