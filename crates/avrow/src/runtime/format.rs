use crate::{error::RuntimeError, value::AttributeKind, value::Value};

/// Extract the textual form of a scalar value for a text-bearing kind
/// (`S` or `N`), or reject with `UnsupportedKind` when the wire variant
/// doesn't match the requested kind.
pub fn text_for_kind<'a>(
    key: &str,
    value: &'a Value,
    kind: AttributeKind,
) -> Result<&'a str, RuntimeError> {
    match (kind, value) {
        (AttributeKind::S, Value::S(s)) => Ok(s.as_str()),
        (AttributeKind::N, Value::N(s)) => Ok(s.as_str()),
        _ => Err(RuntimeError::unsupported_kind(
            key.to_string(),
            kind.label(),
            value.kind().label(),
        )),
    }
}

/// Build the AV for a text-bearing kind (`S` or `N`).
#[must_use]
pub fn value_for_kind(kind: AttributeKind, text: String) -> Value {
    match kind {
        AttributeKind::N => Value::N(text),
        // S is the fallback for any text-bearing scalar kind override;
        // callers only reach here after the derive's kind-compatibility
        // check, so an unrecognized kind degrades to S rather than panicking.
        _ => Value::S(text),
    }
}

/// Wrap a `T::from_str` parse failure as a `RuntimeError::ParseFailure`.
pub fn parse_failure<T, E: std::fmt::Display>(
    key: &str,
    text: &str,
    result: Result<T, E>,
) -> Result<T, RuntimeError> {
    result.map_err(|e| RuntimeError::parse_failure(key, format!("{text:?}: {e}")))
}
