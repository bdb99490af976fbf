//! User listing handler

use axum::extract::{Query, State};
use axum::response::Html;
use shared::route_info;

use crate::core::parse_limit;
use crate::error::WebServerResult;
use crate::traits::{MarkupSanitizer, UserDirectory};
use crate::types::UsersQuery;
use crate::web::views::{UsersFragment, render};
use crate::webserver_impl::WebServer;

/// `GET /users?limit=N` - list user names from the external directory
pub async fn list_users<D, S>(
    State(server): State<WebServer<D, S>>,
    Query(query): Query<UsersQuery>,
) -> WebServerResult<Html<String>>
where
    D: UserDirectory + 'static,
    S: MarkupSanitizer + 'static,
{
    let limit = parse_limit(query.limit.as_deref());
    let users = server.user_directory().fetch_users(Some(limit)).await?;

    route_info!("/users", "📋 Listing {} users (limit {})", users.len(), limit);

    render(&UsersFragment {
        names: users.iter().map(|user| user.name.as_str()).collect(),
    })
}
