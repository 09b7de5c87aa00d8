///
/// AttributeKind
///
/// The active variant of an attribute value. Directives may force a
/// non-default kind for a member (e.g. storing an integer as `S`); the
/// default kind for each scalar type is fixed by the Type Strategy Resolver.
///
/// IMPORTANT: these tags are part of the wire contract between the derive
/// crate and the runtime and must remain stable.
///
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum AttributeKind {
    S,
    N,
    B,
    Bool,
    Null,
    L,
    M,
    Ss,
    Ns,
    Bs,
}

impl AttributeKind {
    /// Stable human-readable label for diagnostics and error messages.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::S => "S",
            Self::N => "N",
            Self::B => "B",
            Self::Bool => "BOOL",
            Self::Null => "NULL",
            Self::L => "L",
            Self::M => "M",
            Self::Ss => "SS",
            Self::Ns => "NS",
            Self::Bs => "BS",
        }
    }

    /// Whether this kind denotes one of the three set variants.
    #[must_use]
    pub const fn is_set(self) -> bool {
        matches!(self, Self::Ss | Self::Ns | Self::Bs)
    }

    /// Whether this kind denotes a scalar (non-container, non-null) variant.
    #[must_use]
    pub const fn is_scalar(self) -> bool {
        matches!(self, Self::S | Self::N | Self::B | Self::Bool)
    }
}
