use thiserror::Error as ThisError;

///
/// RuntimeError
///
/// Structured failure surfaced by the runtime get/set helpers invoked from
/// generated `to_item`/`from_item` functions. Never swallowed by generated
/// code; always propagated to the caller via `?`.
///

#[derive(Clone, Debug, ThisError, Eq, PartialEq)]
pub enum RuntimeError {
    #[error("missing required attribute key `{key}`")]
    MissingRequiredKey { key: String },

    #[error("failed to parse attribute `{key}`: {detail}")]
    ParseFailure { key: String, detail: String },

    #[error("attribute `{key}` has kind {found} but {expected} was expected")]
    UnsupportedKind {
        key: String,
        expected: &'static str,
        found: &'static str,
    },
}

impl RuntimeError {
    #[must_use]
    pub fn missing_required_key(key: impl Into<String>) -> Self {
        Self::MissingRequiredKey { key: key.into() }
    }

    #[must_use]
    pub fn parse_failure(key: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::ParseFailure {
            key: key.into(),
            detail: detail.into(),
        }
    }

    #[must_use]
    pub const fn unsupported_kind(
        key: String,
        expected: &'static str,
        found: &'static str,
    ) -> Self {
        Self::UnsupportedKind {
            key,
            expected,
            found,
        }
    }
}

pub type RuntimeResult<T> = Result<T, RuntimeError>;
