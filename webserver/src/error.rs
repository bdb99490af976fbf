//! WebServer-specific error types

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use shared::SharedError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WebServerError {
    #[error("User directory request failed: {0}")]
    DirectoryRequest(#[from] reqwest::Error),

    #[error("User directory returned HTTP {status}")]
    DirectoryStatus { status: u16 },

    #[error("Fragment rendering failed: {0}")]
    RenderError(#[from] askama::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Server startup error: {0}")]
    ServerStartup(String),

    #[error("Shared component error: {0}")]
    SharedError(#[from] SharedError),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl WebServerError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::ConfigError { message: message.into() }
    }

    /// Failures caused by the external user directory
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            Self::DirectoryRequest(_) | Self::DirectoryStatus { .. } | Self::SharedError(SharedError::DecodeError { .. })
        )
    }

    pub fn status_code(&self) -> StatusCode {
        if self.is_upstream() {
            StatusCode::BAD_GATEWAY
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl IntoResponse for WebServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        tracing::error!(status = status.as_u16(), error = %self, "❌ Request failed");

        let message = if self.is_upstream() {
            "Unable to reach the user directory right now"
        } else {
            "Something went wrong while building this fragment"
        };
        let fragment = format!(r#"<p class="text-red-700">{message}</p>"#);

        (status, Html(fragment)).into_response()
    }
}

pub type WebServerResult<T> = Result<T, WebServerError>;
