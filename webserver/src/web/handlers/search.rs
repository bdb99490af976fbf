//! Contact search handlers
//!
//! Both searches short-circuit an empty term without delay; otherwise
//! results are rendered after the configured search latency.

use axum::extract::State;
use axum::response::Html;
use shared::{Contact, route_debug};

use crate::core::{EMPTY_RESULT_ROW, match_contacts, normalize_term};
use crate::error::WebServerResult;
use crate::traits::{MarkupSanitizer, UserDirectory};
use crate::types::SearchForm;
use crate::web::extract::Submission;
use crate::web::views::{ContactRowsFragment, render};
use crate::webserver_impl::WebServer;

async fn render_after_latency<D, S>(server: &WebServer<D, S>, matches: &[Contact]) -> WebServerResult<Html<String>>
where
    D: UserDirectory + 'static,
    S: MarkupSanitizer + 'static,
{
    tokio::time::sleep(server.latency().search).await;
    render(&ContactRowsFragment { contacts: matches })
}

/// `POST /search` - search the built-in contact directory
pub async fn search_contacts<D, S>(
    State(server): State<WebServer<D, S>>,
    Submission(form): Submission<SearchForm>,
) -> WebServerResult<Html<String>>
where
    D: UserDirectory + 'static,
    S: MarkupSanitizer + 'static,
{
    let Some(needle) = normalize_term(&form.search) else {
        return Ok(Html(EMPTY_RESULT_ROW.to_string()));
    };

    let matches = server.contacts().search(&needle);
    route_debug!("/search", "🔍 '{}' matched {} contacts", needle, matches.len());

    render_after_latency(&server, &matches).await
}

/// `POST /search/api` - search the live external user directory
pub async fn search_directory<D, S>(
    State(server): State<WebServer<D, S>>,
    Submission(form): Submission<SearchForm>,
) -> WebServerResult<Html<String>>
where
    D: UserDirectory + 'static,
    S: MarkupSanitizer + 'static,
{
    let Some(needle) = normalize_term(&form.search) else {
        return Ok(Html(EMPTY_RESULT_ROW.to_string()));
    };

    let candidates: Vec<Contact> = server
        .user_directory()
        .fetch_users(None)
        .await?
        .into_iter()
        .map(Contact::from)
        .collect();
    let matches = match_contacts(&candidates, &needle);
    route_debug!("/search/api", "🔍 '{}' matched {} of {} users", needle, matches.len(), candidates.len());

    render_after_latency(&server, &matches).await
}
