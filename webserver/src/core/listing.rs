//! User listing parameters

pub const DEFAULT_USER_LIMIT: u32 = 10;

/// Coerce the raw `limit` query value.
///
/// The leading run of digits (after optional whitespace) is used. Absent,
/// non-numeric, zero, negative and overflowing values fall back to
/// [`DEFAULT_USER_LIMIT`].
pub fn parse_limit(raw: Option<&str>) -> u32 {
    let Some(raw) = raw else {
        return DEFAULT_USER_LIMIT;
    };

    let trimmed = raw.trim_start();
    let digits: &str = {
        let end = trimmed.find(|c: char| !c.is_ascii_digit()).unwrap_or(trimmed.len());
        &trimmed[..end]
    };

    match digits.parse::<u32>() {
        Ok(0) | Err(_) => DEFAULT_USER_LIMIT,
        Ok(limit) => limit,
    }
}
