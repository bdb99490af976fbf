//! Web layer: request extraction, fragment views and route handlers

pub mod extract;
pub mod handlers;
pub mod views;
