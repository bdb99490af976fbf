//! External user directory client
//!
//! Fetches the user listing live on every call. No caching, no retry.

use async_trait::async_trait;
use reqwest::Client;
use shared::{DirectoryUser, HttpEndpoint};

use crate::error::{WebServerError, WebServerResult};
use crate::traits::UserDirectory;

/// Query parameter the listing endpoint uses to cap the result size
const LIMIT_PARAM: &str = "_limit";

/// Real user directory backed by an HTTP JSON endpoint
#[derive(Clone)]
pub struct RealUserDirectory {
    client: Client,
    endpoint: HttpEndpoint,
}

impl RealUserDirectory {
    pub fn new(endpoint: HttpEndpoint) -> Self {
        Self {
            client: Client::new(),
            endpoint,
        }
    }

    pub fn endpoint(&self) -> &HttpEndpoint {
        &self.endpoint
    }
}

#[async_trait]
impl UserDirectory for RealUserDirectory {
    async fn fetch_users(&self, limit: Option<u32>) -> WebServerResult<Vec<DirectoryUser>> {
        let url = match limit {
            Some(limit) => self.endpoint.with_query(LIMIT_PARAM, &limit.to_string()),
            None => self.endpoint.url().clone(),
        };

        tracing::debug!(%url, "📡 Fetching users from directory");

        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "❌ User directory rejected request");
            return Err(WebServerError::DirectoryStatus { status: status.as_u16() });
        }

        let body = response.text().await?;
        let users = DirectoryUser::decode_list(&body)?;

        tracing::debug!(count = users.len(), "📄 Received users from directory");
        Ok(users)
    }
}
