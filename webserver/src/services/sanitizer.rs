//! HTML sanitization service

use ammonia::Builder;
use std::collections::HashSet;

use crate::traits::MarkupSanitizer;

/// Sanitizer backed by ammonia's allow-list cleaner.
///
/// Disallowed elements such as `<script>` and `<style>` are unwrapped rather
/// than dropped with their content, so their text survives as inert,
/// escaped text.
#[derive(Clone, Debug, Default)]
pub struct RealMarkupSanitizer;

impl RealMarkupSanitizer {
    pub fn new() -> Self {
        Self
    }
}

impl MarkupSanitizer for RealMarkupSanitizer {
    fn sanitize(&self, input: &str) -> String {
        Builder::default()
            .clean_content_tags(HashSet::new())
            .clean(input)
            .to_string()
    }
}
