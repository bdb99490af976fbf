//! Shared error types for the fragment server workspace

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SharedError {
    #[error("Invalid configuration: {field} = {value}")]
    InvalidConfig { field: String, value: String },

    #[error("Invalid endpoint '{value}': {reason}")]
    InvalidEndpoint { value: String, reason: String },

    #[error("Decoding failed: {message}")]
    DecodeError { message: String },
}

impl SharedError {
    pub fn invalid_config(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field: field.into(),
            value: value.into(),
        }
    }

    pub fn invalid_endpoint(value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidEndpoint {
            value: value.into(),
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for SharedError {
    fn from(err: serde_json::Error) -> Self {
        Self::DecodeError { message: err.to_string() }
    }
}

pub type SharedResult<T> = Result<T, SharedError>;
