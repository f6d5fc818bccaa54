//! Token helpers shared by the decoders.

use super::error::RecordError;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref LIST_TOKEN_REGEX: Regex =
        Regex::new(r"[A-Za-z0-9-]+").expect("Invalid Regex, this should be fixed at compile time.");
    static ref LINE_ID_REGEX: Regex =
        Regex::new(r"L(\d+)").expect("Invalid Regex, this should be fixed at compile time.");
}

pub const MOVIE_PREFIX: char = 'm';
pub const CHARACTER_PREFIX: char = 'u';
pub const LINE_PREFIX: char = 'L';

/// Parses an identifier such as `m123` into `123`, checking the prefix.
pub fn parse_prefixed_id(
    field: &'static str,
    value: &str,
    prefix: char,
) -> Result<u32, RecordError> {
    let value = value.trim();
    let digits = value.strip_prefix(prefix).ok_or_else(|| {
        RecordError::invalid_field(field, value, format!("expected '{prefix}' prefix"))
    })?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(RecordError::invalid_field(
            field,
            value,
            format!("expected digits after '{prefix}'"),
        ));
    }
    digits
        .parse::<u32>()
        .map_err(|err| RecordError::invalid_field(field, value, err))
}

/// Parses a plain number field, mapping failures to a [`RecordError`].
pub fn parse_number<T>(field: &'static str, value: &str) -> Result<T, RecordError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let value = value.trim();
    value
        .parse::<T>()
        .map_err(|err| RecordError::invalid_field(field, value, err))
}

/// Parses a decimal field that must be a finite number, rejecting `NaN` and `inf`.
pub fn parse_finite(field: &'static str, value: &str) -> Result<f64, RecordError> {
    let number: f64 = parse_number(field, value)?;
    if !number.is_finite() {
        return Err(RecordError::invalid_field(
            field,
            value.trim(),
            "not a finite number",
        ));
    }
    Ok(number)
}

/// Parses the leading digits of a field, so `1989/I` reads as `1989`.
pub fn parse_leading_number(field: &'static str, value: &str) -> Result<u32, RecordError> {
    let value = value.trim();
    let end = value
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(value.len());
    parse_number(field, &value[..end])
}

/// Upper-cases the first character of every word and lower-cases the rest,
/// keeping the input spacing.
pub fn title_case(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut at_word_start = true;
    for c in value.trim().chars() {
        if c.is_whitespace() {
            at_word_start = true;
            out.push(c);
        } else if at_word_start {
            at_word_start = false;
            out.extend(c.to_uppercase());
        } else {
            out.extend(c.to_lowercase());
        }
    }
    out
}

/// Extracts the alphanumeric/hyphen tokens of a list literal like `['a','b-c']`.
pub fn list_tokens(value: &str) -> Vec<String> {
    LIST_TOKEN_REGEX
        .find_iter(value)
        .map(|m| m.as_str().to_owned())
        .collect()
}

/// Extracts the line ids of a list literal like `['L194', 'L195']`, in order.
///
/// The `L` prefix is stripped: dialog lines are keyed by their bare number.
pub fn line_ids(value: &str) -> Result<Vec<u32>, RecordError> {
    let mut ids = Vec::new();
    for captures in LINE_ID_REGEX.captures_iter(value) {
        let digits = &captures[1];
        let id = digits
            .parse::<u32>()
            .map_err(|err| RecordError::invalid_field("line id", &captures[0], err))?;
        ids.push(id);
    }
    if ids.is_empty() {
        return Err(RecordError::NoLineIds {
            raw: value.to_owned(),
        });
    }
    Ok(ids)
}
