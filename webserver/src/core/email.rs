//! Email address validation

use regex::Regex;
use std::sync::OnceLock;

const EMAIL_PATTERN: &str = r"^[A-Za-z0-9._%-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,4}$";

static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_REGEX.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern is a valid regex"))
}

/// Outcome of validating a submitted address
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmailValidation {
    Valid,
    Invalid,
}

impl EmailValidation {
    pub fn check(candidate: &str) -> Self {
        if email_regex().is_match(candidate) {
            Self::Valid
        } else {
            Self::Invalid
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::Valid => "That email is valid",
            Self::Invalid => "Please enter a valid email address",
        }
    }

    pub fn style_class(&self) -> &'static str {
        match self {
            Self::Valid => "text-green-700",
            Self::Invalid => "text-red-700",
        }
    }
}
