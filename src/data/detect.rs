use super::model::{SortedData, ValueKind};
use super::sort::SortAlgorithm;

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Detect the most specific type shared by every token and sort ascending.
///
/// The cascade tries, in order:
/// * integers – `i64`, optional sign, nothing else in the token
/// * floats   – finite `f64` with optional fraction and exponent, ordered
///   by [`f64::total_cmp`]; `inf` and `nan` spellings are not numbers here
/// * text     – ordinal byte-wise comparison; always succeeds
///
/// A single token that fails an attempt discards that attempt entirely.
pub fn detect_and_sort<S: AsRef<str>>(tokens: &[S], algorithm: SortAlgorithm) -> SortedData {
    if tokens.is_empty() {
        return SortedData::Integers(Vec::new());
    }

    if let Some(mut ints) = parse_all(tokens, parse_integer) {
        algorithm.sort_by(&mut ints, i64::cmp);
        return SortedData::Integers(ints);
    }
    log::debug!("tokens are not all integers, trying floats");

    if let Some(mut floats) = parse_all(tokens, parse_float) {
        algorithm.sort_by(&mut floats, f64::total_cmp);
        return SortedData::Floats(floats);
    }
    log::debug!("tokens are not all floats, sorting as text");

    let mut text: Vec<String> = tokens.iter().map(|t| t.as_ref().to_string()).collect();
    algorithm.sort_by(&mut text, |a, b| a.as_bytes().cmp(b.as_bytes()));
    SortedData::Text(text)
}

/// Run the same cascade without sorting.
pub fn detect_kind<S: AsRef<str>>(tokens: &[S]) -> ValueKind {
    if tokens.iter().all(|t| parse_integer(t.as_ref()).is_some()) {
        ValueKind::Integer
    } else if tokens.iter().all(|t| parse_float(t.as_ref()).is_some()) {
        ValueKind::Float
    } else {
        ValueKind::Text
    }
}

// -- helpers --

/// Parse every token with `parse`, or `None` as soon as one does not parse.
fn parse_all<T, S>(tokens: &[S], parse: fn(&str) -> Option<T>) -> Option<Vec<T>>
where
    S: AsRef<str>,
{
    tokens.iter().map(|t| parse(t.as_ref())).collect()
}

/// `FromStr` for `i64` already rejects surrounding whitespace, separators
/// and empty strings.
fn parse_integer(token: &str) -> Option<i64> {
    token.parse().ok()
}

/// A float is a finite number in digits with optional point and exponent.
/// The `f64` parser also
/// takes `inf`, `infinity` and `nan` in any case, and an exponent too large
/// for `f64` overflows to infinity; both are rejected so every value renders
/// back to a token that parses to the same float.
fn parse_float(token: &str) -> Option<f64> {
    token.parse::<f64>().ok().filter(|v| v.is_finite())
}
