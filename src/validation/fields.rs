//! Fixed field-level rules applied to every record

use crate::error::{ConvertError, ConvertResult};
use crate::parser::Record;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

static SCHEME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^https?://").unwrap());
static PORT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r":[0-9]*$").unwrap());

/// Check whether a rating is valid.
///
/// The value must be text (anything else is a contract violation, not a
/// validation failure) and parse as an integer in the inclusive range [1, 5].
/// Non-numeric text propagates as an error rather than an invalid verdict.
pub fn is_rating_valid(rating: &Value) -> ConvertResult<bool> {
    let text = rating
        .as_str()
        .ok_or_else(|| ConvertError::contract_violation("stars", "a text value"))?;

    let parsed: i64 = text.parse().map_err(|e: std::num::ParseIntError| {
        ConvertError::contract_violation_with_source(
            "stars",
            "an integer rating",
            anyhow::Error::new(e),
        )
    })?;

    Ok((1..=5).contains(&parsed))
}

/// Check whether a name is proper decoded text rather than some other
/// representation.
pub fn is_name_text(name: &Value) -> bool {
    name.is_string()
}

/// Check whether a uri is valid. Rules, in order, first failure wins:
///
/// * no space characters anywhere;
/// * if a `://` separator is present, the scheme must be http or https;
/// * must not end with a colon followed by digits (the port check covers the
///   whole string, so a trailing `:80` on a path segment is rejected too);
/// * must contain at least one period.
pub fn is_uri_valid(uri: &Value) -> ConvertResult<bool> {
    let text = uri
        .as_str()
        .ok_or_else(|| ConvertError::contract_violation("uri", "a text value"))?;

    if text.contains(' ') {
        return Ok(false);
    }
    if text.contains("://") && !SCHEME_RE.is_match(text) {
        return Ok(false);
    }
    if PORT_RE.is_match(text) {
        return Ok(false);
    }
    if !text.contains('.') {
        return Ok(false);
    }
    Ok(true)
}

/// Evaluate all field rules against one record, combined with logical AND.
///
/// Missing fields are contract violations: the source contract requires
/// every row to carry the full header set.
pub fn is_record_valid(record: &Record) -> ConvertResult<bool> {
    let stars = field(record, "stars")?;
    let name = field(record, "name")?;
    let uri = field(record, "uri")?;

    Ok(is_rating_valid(stars)? && is_name_text(name) && is_uri_valid(uri)?)
}

fn field<'a>(record: &'a Record, name: &str) -> ConvertResult<&'a Value> {
    record
        .get(name)
        .ok_or_else(|| ConvertError::contract_violation(name, "present in every record"))
}
