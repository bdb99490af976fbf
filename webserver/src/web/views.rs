//! HTML fragment templates
//!
//! Every interpolated value is HTML-escaped unless the template marks it
//! `safe`; only sanitizer output is marked that way.

use askama::Template;
use axum::response::Html;
use shared::Contact;

use crate::core::EmailValidation;
use crate::error::WebServerResult;

#[derive(Template)]
#[template(path = "users.html")]
pub struct UsersFragment<'a> {
    pub names: Vec<&'a str>,
}

#[derive(Template)]
#[template(path = "conversion.html")]
pub struct ConversionFragment {
    pub fahrenheit: String,
    pub celsius: String,
}

#[derive(Template)]
#[template(path = "contact_rows.html")]
pub struct ContactRowsFragment<'a> {
    pub contacts: &'a [Contact],
}

#[derive(Template)]
#[template(path = "email_field.html")]
pub struct EmailFieldFragment<'a> {
    pub value: &'a str,
    pub validation: EmailValidation,
}

/// Profile card. `name` and `bio` must already be sanitized.
#[derive(Template)]
#[template(path = "profile_card.html")]
pub struct ProfileCardFragment<'a> {
    pub name: &'a str,
    pub bio: &'a str,
}

/// Render a template into an HTML response body
pub fn render<T: Template>(template: &T) -> WebServerResult<Html<String>> {
    Ok(Html(template.render()?))
}
