mod tag;

#[cfg(test)]
mod tests;

use std::collections::{BTreeMap, BTreeSet};

pub use tag::AttributeKind;

///
/// Value
///
/// The tagged-union leaf value of the attribute-value wire model. Exactly
/// one variant is active, except `Null` which is its own variant. A set
/// variant (`Ss`/`Ns`/`Bs`) MUST be non-empty on the wire — the runtime
/// `set_*` helpers enforce this by silently dropping an empty set rather
/// than ever constructing one.
///
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// String.
    S(String),
    /// Number, stored as culture-invariant decimal text.
    N(String),
    /// Boolean.
    Bool(bool),
    /// Binary.
    B(Vec<u8>),
    /// Absence of a value, distinct from a missing key.
    Null,
    /// Ordered sequence of attribute values.
    L(Vec<Value>),
    /// Mapping from string key to attribute value (a nested item).
    M(BTreeMap<String, Value>),
    /// Non-empty set of distinct strings.
    Ss(BTreeSet<String>),
    /// Non-empty set of distinct numbers (decimal text).
    Ns(BTreeSet<String>),
    /// Non-empty set of distinct byte strings.
    Bs(BTreeSet<Vec<u8>>),
}

impl Value {
    /// The `AttributeKind` tag for this value's active variant.
    #[must_use]
    pub const fn kind(&self) -> AttributeKind {
        match self {
            Self::S(_) => AttributeKind::S,
            Self::N(_) => AttributeKind::N,
            Self::Bool(_) => AttributeKind::Bool,
            Self::B(_) => AttributeKind::B,
            Self::Null => AttributeKind::Null,
            Self::L(_) => AttributeKind::L,
            Self::M(_) => AttributeKind::M,
            Self::Ss(_) => AttributeKind::Ss,
            Self::Ns(_) => AttributeKind::Ns,
            Self::Bs(_) => AttributeKind::Bs,
        }
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    #[must_use]
    pub fn as_s(&self) -> Option<&str> {
        match self {
            Self::S(s) => Some(s.as_str()),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_n(&self) -> Option<&str> {
        match self {
            Self::N(s) => Some(s.as_str()),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_b(&self) -> Option<&[u8]> {
        match self {
            Self::B(b) => Some(b.as_slice()),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_l(&self) -> Option<&[Value]> {
        match self {
            Self::L(l) => Some(l.as_slice()),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_m(&self) -> Option<&BTreeMap<String, Value>> {
        match self {
            Self::M(m) => Some(m),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_ss(&self) -> Option<&BTreeSet<String>> {
        match self {
            Self::Ss(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_ns(&self) -> Option<&BTreeSet<String>> {
        match self {
            Self::Ns(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_bs(&self) -> Option<&BTreeSet<Vec<u8>>> {
        match self {
            Self::Bs(s) => Some(s),
            _ => None,
        }
    }
}
