//! Service trait definitions for dependency injection
//!
//! External I/O and third-party transforms are abstracted through these
//! traits for testability

use async_trait::async_trait;

use crate::error::WebServerResult;
use shared::DirectoryUser;

/// External user-listing source
#[mockall::automock]
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Fetch users in source order. `None` asks for the full listing.
    async fn fetch_users(&self, limit: Option<u32>) -> WebServerResult<Vec<DirectoryUser>>;
}

/// Neutralizes executable markup in untrusted text
#[mockall::automock]
pub trait MarkupSanitizer: Send + Sync {
    /// Return `input` with scripts, event handlers and other active content removed
    fn sanitize(&self, input: &str) -> String;
}
