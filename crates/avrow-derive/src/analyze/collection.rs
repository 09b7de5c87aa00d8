use syn::{Expr, Type};

use crate::analyze::member::OuterShape;
use crate::analyze::type_strategy::{resolve_scalar, ScalarKind, TypeStrategy};
use crate::scan::attrs::AttributeKindArg;

/// Which concrete Rust container realizes a `List` member, threaded
/// through to the Code Renderer because each adapts to/from the
/// runtime's `Vec`-shaped `get_list`/`set_list` helpers differently
/// (spec §4.4's Rust realization).
#[derive(Clone, Debug)]
pub enum ListShape {
    Vec,
    VecDeque,
    /// Fixed-size `[T; N]`; `len` is the const-generic length expression,
    /// checked against the decoded element count at deserialize time.
    Array(Expr),
}

/// Which concrete Rust container realizes a `Map`/`Set` member — the
/// runtime's helpers are `BTreeMap`/`BTreeSet`-shaped, so a `HashMap`/
/// `HashSet` field is adapted at the call site instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyedShape {
    BTree,
    Hash,
}

///
/// CollectionStrategy
///
/// Which AV container variant (`L`/`Ss`/`Ns`/`Bs`/`M`) a collection
/// member maps to, resolved from the Rust outer shape plus the element
/// type's scalar family (spec §4.9). `BTreeSet<String>`/`HashSet<String>`
/// prefer `Ss` over a generic list so the non-emptiness invariant (P3) is
/// enforced by the runtime's set helpers rather than left to the list
/// helpers, which permit an empty `L`.
///
#[derive(Clone, Debug)]
pub enum CollectionStrategy {
    List { element: Type, shape: ListShape },
    StringSet { shape: KeyedShape },
    NumberSet { element: ScalarKind, shape: KeyedShape },
    BinarySet { shape: KeyedShape },
    Map { value: Type, shape: KeyedShape },
}

/// Resolve the collection shape for an array/`Vec`/`VecDeque`/`BTreeSet`/
/// `HashSet`/`BTreeMap`/`HashMap` member. Returns `None` when the outer
/// shape isn't a recognized collection container (the caller treats the
/// member as scalar/nested instead).
pub fn resolve_collection(outer: &OuterShape, inner: &Type) -> Option<CollectionStrategy> {
    match outer {
        OuterShape::Vec => Some(CollectionStrategy::List {
            element: inner.clone(),
            shape: ListShape::Vec,
        }),
        OuterShape::VecDeque => Some(CollectionStrategy::List {
            element: inner.clone(),
            shape: ListShape::VecDeque,
        }),
        OuterShape::Array(len) => Some(CollectionStrategy::List {
            element: inner.clone(),
            shape: ListShape::Array(len.clone()),
        }),
        OuterShape::BTreeSet => resolve_set(inner, KeyedShape::BTree),
        OuterShape::HashSet => resolve_set(inner, KeyedShape::Hash),
        OuterShape::BTreeMap => Some(CollectionStrategy::Map {
            value: inner.clone(),
            shape: KeyedShape::BTree,
        }),
        OuterShape::HashMap => Some(CollectionStrategy::Map {
            value: inner.clone(),
            shape: KeyedShape::Hash,
        }),
        OuterShape::Plain => None,
    }
}

fn resolve_set(inner: &Type, shape: KeyedShape) -> Option<CollectionStrategy> {
    match resolve_scalar(inner) {
        Some(TypeStrategy::Scalar(ScalarKind::String)) => Some(CollectionStrategy::StringSet { shape }),
        Some(TypeStrategy::Blob) => Some(CollectionStrategy::BinarySet { shape }),
        Some(TypeStrategy::Scalar(kind)) if matches!(kind.default_kind(), AttributeKindArg::N) => {
            Some(CollectionStrategy::NumberSet { element: kind, shape })
        }
        _ => None,
    }
}
