//! Core record types shared between the server and its tests

use serde::{Deserialize, Serialize};
use std::fmt;
use url::Url;

use crate::errors::{SharedError, SharedResult};

/// A searchable contact (name + email)
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    pub email: String,
}

impl Contact {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    /// Case-insensitive substring match on name or email.
    /// `needle` must already be lower-cased.
    pub fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle) || self.email.to_lowercase().contains(needle)
    }
}

/// User record as returned by the external user-listing endpoint.
/// Unknown fields are ignored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryUser {
    #[serde(default)]
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
}

impl DirectoryUser {
    /// Decode a JSON array of users
    pub fn decode_list(body: &str) -> SharedResult<Vec<DirectoryUser>> {
        Ok(serde_json::from_str(body)?)
    }
}

impl From<DirectoryUser> for Contact {
    fn from(user: DirectoryUser) -> Self {
        Contact {
            name: user.name,
            email: user.email,
        }
    }
}

/// Absolute http(s) URL of an upstream service
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpEndpoint(Url);

impl HttpEndpoint {
    pub fn parse(raw: &str) -> SharedResult<Self> {
        let url = Url::parse(raw).map_err(|e| SharedError::invalid_endpoint(raw, e.to_string()))?;

        match url.scheme() {
            "http" | "https" => Ok(Self(url)),
            other => Err(SharedError::invalid_endpoint(
                raw,
                format!("unsupported scheme '{other}'"),
            )),
        }
    }

    pub fn url(&self) -> &Url {
        &self.0
    }

    /// Copy of the endpoint with one extra query pair appended
    pub fn with_query(&self, key: &str, value: &str) -> Url {
        let mut url = self.0.clone();
        url.query_pairs_mut().append_pair(key, value);
        url
    }
}

impl fmt::Display for HttpEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
