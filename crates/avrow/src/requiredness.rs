///
/// Requiredness
///
/// Policy controlling behavior when a key is absent at deserialization.
///
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Requiredness {
    /// Demands key presence; a missing key is a `RuntimeError::MissingRequiredKey`.
    Required,
    /// Tolerates absence, yielding the type's zero value (or `None` for the
    /// nullable variant).
    Optional,
    /// Behaves as `Required` for non-nullable members and `Optional` for
    /// nullable members. Generated code resolves this to a concrete variant
    /// via `resolve` before calling into the runtime, so the runtime helpers
    /// themselves never observe `InferFromNullability`.
    InferFromNullability,
}

impl Requiredness {
    /// Resolve `InferFromNullability` against whether the member's declared
    /// type is `Option<U>`.
    #[must_use]
    pub const fn resolve(self, is_nullable: bool) -> Self {
        match self {
            Self::InferFromNullability => {
                if is_nullable {
                    Self::Optional
                } else {
                    Self::Required
                }
            }
            other => other,
        }
    }

    #[must_use]
    pub const fn is_required(self) -> bool {
        matches!(self, Self::Required)
    }
}
