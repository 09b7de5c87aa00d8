use syn::Type;

use crate::scan::attrs::AttributeKindArg;

///
/// ScalarKind
///
/// The leaf scalar families the runtime crate provides named `get-X`/
/// `set-X` helpers for (spec §4.4, §7). The variant name doubles as the
/// helper function's name fragment (`ScalarKind::Int` → `get_int`/
/// `set_int`) via `fn_fragment`.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScalarKind {
    String,
    Short,
    Int,
    Long,
    Byte,
    Float,
    Double,
    Decimal,
    Uuid,
    TimeSpan,
    DateTime,
    DateTimeOffset,
}

impl ScalarKind {
    pub fn fn_fragment(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Short => "short",
            Self::Int => "int",
            Self::Long => "long",
            Self::Byte => "byte",
            Self::Float => "float",
            Self::Double => "double",
            Self::Decimal => "decimal",
            Self::Uuid => "uuid",
            Self::TimeSpan => "time_span",
            Self::DateTime => "date_time",
            Self::DateTimeOffset => "date_time_offset",
        }
    }

    /// The AV kind this scalar writes to the wire when the field carries
    /// no `#[field(kind = "...")]` override.
    pub fn default_kind(self) -> AttributeKindArg {
        match self {
            Self::String | Self::Uuid | Self::TimeSpan | Self::DateTime | Self::DateTimeOffset => {
                AttributeKindArg::S
            }
            Self::Short | Self::Int | Self::Long | Self::Byte | Self::Float | Self::Double
            | Self::Decimal => AttributeKindArg::N,
        }
    }
}

///
/// TypeStrategy
///
/// What the Code Renderer should do with a classified leaf type: call a
/// named scalar helper, the bool/blob helpers (native AV variants with
/// no `TextScalar` detour), treat it as a nested mapper delegate, or
/// treat it as a fieldless `#[derive(AvEnum)]` type.
///
#[derive(Clone, Debug)]
pub enum TypeStrategy {
    Scalar(ScalarKind),
    Bool,
    Blob,
}

/// Resolve a leaf `Type` against the scalar table. Returns `None` when the
/// type is not a recognized scalar/bool/blob spelling — the caller treats
/// that as either `Nested` (if the Nested Object Analyzer accepts it) or
/// `Enum` (if `#[field(enum_format = ..)]` was given), per §4.4's
/// resolution order.
pub fn resolve_scalar(ty: &Type) -> Option<TypeStrategy> {
    let Type::Path(path) = ty else { return None };
    let ident = path.path.segments.last()?.ident.to_string();

    let strategy = match ident.as_str() {
        "String" => TypeStrategy::Scalar(ScalarKind::String),
        "i16" => TypeStrategy::Scalar(ScalarKind::Short),
        "i32" => TypeStrategy::Scalar(ScalarKind::Int),
        "i64" => TypeStrategy::Scalar(ScalarKind::Long),
        "u8" => TypeStrategy::Scalar(ScalarKind::Byte),
        "f32" => TypeStrategy::Scalar(ScalarKind::Float),
        "f64" => TypeStrategy::Scalar(ScalarKind::Double),
        "Decimal" => TypeStrategy::Scalar(ScalarKind::Decimal),
        "Uuid" => TypeStrategy::Scalar(ScalarKind::Uuid),
        "Duration" => TypeStrategy::Scalar(ScalarKind::TimeSpan),
        "DateTime" => {
            if path_is_fixed_offset(path) {
                TypeStrategy::Scalar(ScalarKind::DateTimeOffset)
            } else {
                TypeStrategy::Scalar(ScalarKind::DateTime)
            }
        }
        "bool" => TypeStrategy::Bool,
        "Vec" if is_u8_vec(path) => TypeStrategy::Blob,
        _ => return None,
    };

    Some(strategy)
}

fn path_is_fixed_offset(path: &syn::TypePath) -> bool {
    let Some(segment) = path.path.segments.last() else {
        return false;
    };
    let syn::PathArguments::AngleBracketed(args) = &segment.arguments else {
        return false;
    };
    args.args.iter().any(|arg| {
        matches!(arg, syn::GenericArgument::Type(Type::Path(p))
            if p.path.segments.last().is_some_and(|s| s.ident == "FixedOffset"))
    })
}

fn is_u8_vec(path: &syn::TypePath) -> bool {
    let Some(segment) = path.path.segments.last() else {
        return false;
    };
    let syn::PathArguments::AngleBracketed(args) = &segment.arguments else {
        return false;
    };
    args.args.iter().any(|arg| {
        matches!(arg, syn::GenericArgument::Type(Type::Path(p))
            if p.path.segments.last().is_some_and(|s| s.ident == "u8"))
    })
}
