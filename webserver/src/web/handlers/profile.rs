//! Profile editing

use axum::extract::{Path, State};
use axum::response::Html;
use shared::route_info;

use crate::error::WebServerResult;
use crate::traits::{MarkupSanitizer, UserDirectory};
use crate::types::ProfileForm;
use crate::web::extract::Submission;
use crate::web::views::{ProfileCardFragment, render};
use crate::webserver_impl::WebServer;

/// `PUT /profile/:id` - echo the submitted profile as a card.
///
/// Nothing is stored. The path id is accepted but does not affect the
/// output.
pub async fn update_profile<D, S>(
    State(server): State<WebServer<D, S>>,
    Path(profile_id): Path<String>,
    Submission(form): Submission<ProfileForm>,
) -> WebServerResult<Html<String>>
where
    D: UserDirectory + 'static,
    S: MarkupSanitizer + 'static,
{
    let name = server.sanitizer().sanitize(&form.name);
    let bio = server.sanitizer().sanitize(&form.bio);
    route_info!("/profile", "👤 Profile {} updated", profile_id);

    render(&ProfileCardFragment { name: &name, bio: &bio })
}
