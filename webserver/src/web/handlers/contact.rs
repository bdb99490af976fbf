//! Incremental email validation

use axum::response::Html;
use shared::route_debug;

use crate::core::EmailValidation;
use crate::error::WebServerResult;
use crate::types::EmailForm;
use crate::web::extract::Submission;
use crate::web::views::{EmailFieldFragment, render};

/// `POST /contact/email` - re-render the email field with a status line.
/// An invalid address is a normal fragment, not an HTTP error.
pub async fn validate_email(Submission(form): Submission<EmailForm>) -> WebServerResult<Html<String>> {
    let validation = EmailValidation::check(&form.email);
    route_debug!("/contact/email", "✉️ Email valid: {}", validation.is_valid());

    render(&EmailFieldFragment {
        value: &form.email,
        validation,
    })
}
