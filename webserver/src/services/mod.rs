//! Service implementations
//!
//! Real implementations of all service traits for production use

pub mod sanitizer;
pub mod user_directory;

// Re-export service implementations
pub use sanitizer::RealMarkupSanitizer;
pub use user_directory::RealUserDirectory;

#[cfg(test)]
mod tests;
