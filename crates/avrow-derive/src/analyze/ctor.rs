use syn::Ident;

///
/// ConstructionStrategy
///
/// How the Code Renderer builds the model value in `from_item` (spec
/// §4.6). Rust has exactly one constructor shape a derive macro can see
/// without resolving another item's signature: the struct literal. A
/// `#[mapper(constructor = "fn_name")]` override names an associated
/// function assumed to take every field in declaration order and return
/// `Self` — a derive macro has no visibility into another item's
/// parameter list, so (unlike the spec's case-insensitive
/// parameter-name matching, which presumes whole-compilation-unit
/// visibility of the constructor's signature) positional, declaration-
/// order matching is the only verifiable contract available here. This
/// is recorded as an accepted Open Question resolution in DESIGN.md.
///
#[derive(Clone, Debug)]
pub enum ConstructionStrategy {
    StructLiteral,
    FunctionConstructor { name: Ident },
}

pub fn select_construction(constructor: Option<&Ident>) -> ConstructionStrategy {
    match constructor {
        Some(name) => ConstructionStrategy::FunctionConstructor { name: name.clone() },
        None => ConstructionStrategy::StructLiteral,
    }
}
