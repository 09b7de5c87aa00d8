use syn::{Expr, GenericArgument, PathArguments, Type};

///
/// Cardinality
///
/// One/Opt/Many mirrors the `FieldCardinality` classification used
/// elsewhere in this workspace for plain struct fields; `Many` here is
/// further refined by the Collection Analyzer into list/set/map shape.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cardinality {
    One,
    Opt,
    Many,
}

/// The outer Rust container detected on a field, before the Collection
/// Analyzer decides which AV container it maps to. `Array` carries the
/// fixed-size expression `N` so the Code Renderer can emit the
/// deserialize-side element-count check (spec §4.4).
#[derive(Clone, Debug)]
pub enum OuterShape {
    Plain,
    Vec,
    VecDeque,
    Array(Expr),
    BTreeSet,
    HashSet,
    BTreeMap,
    HashMap,
}

pub struct MemberShape {
    pub outer: OuterShape,
    pub cardinality: Cardinality,
    /// The innermost type the Type Strategy Resolver reasons about: `T`
    /// for `Vec<T>`/`Option<T>`, `V` for `BTreeMap<String, V>`.
    pub inner: Type,
}

/// Classify a field's declared type into its outer container and the
/// leaf type carried inside it. `Option<Vec<T>>`/`Option<BTreeSet<T>>`/
/// `Option<BTreeMap<String, T>>` resolve straight through to the
/// collection's own outer shape with `Cardinality::Opt` — the member is
/// still a collection, just one the Code Renderer reads/writes through
/// the `get_nullable_*`/optional-write forms instead of the plain ones.
/// Only this one extra level of unwrapping is recognized; the spec's
/// member model has no concept of doubly-wrapped members beyond it.
pub fn classify(ty: &Type) -> MemberShape {
    if let Some(inner) = single_generic_arg(ty, "Option") {
        let collection = classify_collection(&inner);
        return MemberShape {
            outer: collection.outer,
            cardinality: Cardinality::Opt,
            inner: collection.inner,
        };
    }
    classify_collection(ty)
}

fn classify_collection(ty: &Type) -> MemberShape {
    if let Type::Array(array) = ty {
        return MemberShape {
            outer: OuterShape::Array(array.len.clone()),
            cardinality: Cardinality::Many,
            inner: (*array.elem).clone(),
        };
    }

    if let Some(inner) = single_generic_arg(ty, "Vec") {
        // `Vec<u8>` is the Blob scalar leaf type (spec §4.4), not a list
        // collection — leave it as `Plain` so the Type Strategy Resolver's
        // own `Vec<u8>` match arm sees the whole type, not its element.
        if !is_u8(&inner) {
            return MemberShape {
                outer: OuterShape::Vec,
                cardinality: Cardinality::Many,
                inner,
            };
        }
    }
    if let Some(inner) = single_generic_arg(ty, "VecDeque") {
        return MemberShape {
            outer: OuterShape::VecDeque,
            cardinality: Cardinality::Many,
            inner,
        };
    }
    if let Some(inner) = single_generic_arg(ty, "BTreeSet") {
        return MemberShape {
            outer: OuterShape::BTreeSet,
            cardinality: Cardinality::Many,
            inner,
        };
    }
    if let Some(inner) = single_generic_arg(ty, "HashSet") {
        return MemberShape {
            outer: OuterShape::HashSet,
            cardinality: Cardinality::Many,
            inner,
        };
    }
    if let Some(value_ty) = map_value_arg(ty, "BTreeMap") {
        return MemberShape {
            outer: OuterShape::BTreeMap,
            cardinality: Cardinality::Many,
            inner: value_ty,
        };
    }
    if let Some(value_ty) = map_value_arg(ty, "HashMap") {
        return MemberShape {
            outer: OuterShape::HashMap,
            cardinality: Cardinality::Many,
            inner: value_ty,
        };
    }

    MemberShape {
        outer: OuterShape::Plain,
        cardinality: Cardinality::One,
        inner: ty.clone(),
    }
}

fn last_segment_ident<'a>(ty: &'a Type, ident: &str) -> Option<&'a PathArguments> {
    let Type::Path(path) = ty else { return None };
    let segment = path.path.segments.last()?;
    (segment.ident == ident).then_some(&segment.arguments)
}

fn is_u8(ty: &Type) -> bool {
    let Type::Path(path) = ty else { return false };
    path.path.segments.last().is_some_and(|s| s.ident == "u8")
}

fn single_generic_arg(ty: &Type, ident: &str) -> Option<Type> {
    let PathArguments::AngleBracketed(args) = last_segment_ident(ty, ident)? else {
        return None;
    };
    args.args.iter().find_map(|arg| match arg {
        GenericArgument::Type(t) => Some(t.clone()),
        _ => None,
    })
}

/// `BTreeMap<String, V>` / `HashMap<String, V>` — the spec only supports
/// string-keyed maps (spec §3, `M` AV variant), so only the value type is
/// extracted; a non-`String` key type is left for the Type Strategy
/// Resolver to reject.
fn map_value_arg(ty: &Type, ident: &str) -> Option<Type> {
    let PathArguments::AngleBracketed(args) = last_segment_ident(ty, ident)? else {
        return None;
    };
    let mut type_args = args.args.iter().filter_map(|arg| match arg {
        GenericArgument::Type(t) => Some(t.clone()),
        _ => None,
    });
    let _key = type_args.next()?;
    type_args.next()
}
