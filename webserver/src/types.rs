//! Type definitions for webserver
//!
//! Request payloads and JSON response bodies used by the handlers.

use serde::{Deserialize, Serialize};

use crate::core::conversion::parse_number;

/// A submitted scalar: text from a form, or a number from a JSON body
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(f64),
    Text(String),
}

impl FieldValue {
    /// Numeric view of the value; NaN when it does not parse
    pub fn as_f64(&self) -> f64 {
        match self {
            FieldValue::Number(n) => *n,
            FieldValue::Text(s) => parse_number(s),
        }
    }
}

/// `GET /users` query
#[derive(Debug, Default, Deserialize)]
pub struct UsersQuery {
    pub limit: Option<String>,
}

/// `POST /convert` body
#[derive(Debug, Default, Deserialize)]
pub struct ConvertForm {
    #[serde(default)]
    pub fahrenheit: Option<FieldValue>,
}

/// `POST /search` and `POST /search/api` body
#[derive(Debug, Default, Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub search: String,
}

/// `POST /contact/email` body
#[derive(Debug, Default, Deserialize)]
pub struct EmailForm {
    #[serde(default)]
    pub email: String,
}

/// `PUT /profile/:id` body
#[derive(Debug, Default, Deserialize)]
pub struct ProfileForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub bio: String,
}

/// `GET /poll` response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PollReading {
    pub value: u64,
}

/// `GET /health` response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthReport {
    pub status: String,
    pub uptime_seconds: u64,
    pub poll_count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_value_from_json_number_and_string() {
        let number: ConvertForm = serde_json::from_str(r#"{"fahrenheit": 212}"#).unwrap();
        assert_eq!(number.fahrenheit.unwrap().as_f64(), 212.0);

        let text: ConvertForm = serde_json::from_str(r#"{"fahrenheit": "98.6"}"#).unwrap();
        assert_eq!(text.fahrenheit.unwrap().as_f64(), 98.6);

        let junk: ConvertForm = serde_json::from_str(r#"{"fahrenheit": "hot"}"#).unwrap();
        assert!(junk.fahrenheit.unwrap().as_f64().is_nan());
    }

    #[test]
    fn test_missing_fields_default() {
        let search: SearchForm = serde_json::from_str("{}").unwrap();
        assert_eq!(search.search, "");

        let profile: ProfileForm = serde_json::from_str(r#"{"name": "Ada"}"#).unwrap();
        assert_eq!(profile.name, "Ada");
        assert_eq!(profile.bio, "");

        let convert: ConvertForm = serde_json::from_str("{}").unwrap();
        assert!(convert.fahrenheit.is_none());
    }

    #[test]
    fn test_poll_reading_shape() {
        let json = serde_json::to_value(PollReading { value: 3 }).unwrap();
        assert_eq!(json, serde_json::json!({ "value": 3 }));
    }
}
