use syn::Type;

use crate::registry::MapperRegistry;

///
/// InlineFieldSpec
///
/// One entry of an `InlineExpanded` resolution's manifest: a field the
/// nested type's own `#[derive(Mapper)]` already emits under
/// `default_wire_key`, re-keyed to `final_wire_key` by a directive
/// targeting that suffix (or left unchanged when no override applies).
///
#[derive(Clone, Debug)]
pub struct InlineFieldSpec {
    pub field_name: String,
    pub default_wire_key: String,
    pub final_wire_key: String,
}

///
/// NestedResolution
///
/// What the Code Renderer emits for a member whose leaf type resolved to
/// neither a scalar, `bool`, a byte blob, nor an enum (spec §4.5).
/// `Delegate` is the ordinary case: a trait-bound call
/// (`T: ToItem`/`T: FromItem`), since a `#[proc_macro_derive]` has no
/// access to another type's field list and so cannot expand it inline the
/// way a whole-compilation-unit source generator could, UNLESS a directive
/// forces expansion and the nested type has already registered its own
/// field manifest — that case is `InlineExpanded`. `Cycle` is the one
/// shape this single-struct scan can detect on its own: a member whose
/// leaf type is the enclosing mapper's own identifier (possibly several
/// hops removed, via the registry). `ForcedInlineUnregistered` is the
/// failure case of forced expansion: the directive demands it, but the
/// target type hasn't expanded `#[derive(Mapper)]` yet in this
/// compilation, so there is no manifest to flatten against.
///
#[derive(Clone, Debug)]
pub enum NestedResolution {
    Delegate { type_path: Type },
    Cycle { type_name: String },
    InlineExpanded { type_path: Type, manifest: Vec<InlineFieldSpec> },
    ForcedInlineUnregistered { type_name: String },
}

/// Resolve a nested-candidate member. `ancestors` starts with the
/// enclosing mapper's own simple name; when the registry holds an entry
/// for an already-registered nested type, its own nested members are
/// walked transitively so a cycle introduced two or more hops away is
/// still caught instead of only the direct self-reference case.
///
/// `force_inline` comes from a directive targeting this member's path or
/// a path strictly under it (spec §4.5 step 2); `inline_overrides` are
/// the suffix renames such a directive carries (`(suffix field name,
/// renamed wire key)` pairs), applied over the nested type's own default
/// wire keys when building the manifest.
pub fn resolve_nested(
    ty: &Type,
    ancestors: &[String],
    force_inline: bool,
    inline_overrides: &[(String, String)],
) -> NestedResolution {
    let Some(type_name) = simple_type_name(ty) else {
        return NestedResolution::Delegate {
            type_path: ty.clone(),
        };
    };

    if ancestors.iter().any(|a| a == &type_name) {
        return NestedResolution::Cycle { type_name };
    }

    if contains_cycle_transitively(&type_name, ancestors, 0) {
        return NestedResolution::Cycle { type_name };
    }

    if force_inline {
        return match MapperRegistry::lookup(&type_name) {
            Some(entry) => NestedResolution::InlineExpanded {
                type_path: ty.clone(),
                manifest: entry
                    .field_manifest
                    .iter()
                    .map(|(field_name, default_wire_key)| {
                        let final_wire_key = inline_overrides
                            .iter()
                            .find(|(suffix, _)| suffix == field_name)
                            .map(|(_, renamed)| renamed.clone())
                            .unwrap_or_else(|| default_wire_key.clone());
                        InlineFieldSpec {
                            field_name: field_name.clone(),
                            default_wire_key: default_wire_key.clone(),
                            final_wire_key,
                        }
                    })
                    .collect(),
            },
            None => NestedResolution::ForcedInlineUnregistered { type_name },
        };
    }

    // Step 4 of the spec's decision procedure calls for unconditional
    // inline expansion when the type isn't registered either. True
    // field-level reflection of an unknown, unregistered external type is
    // not possible from a per-item proc-macro derive with no visibility
    // into that type's own attribute parsing — delegation is the only
    // sound fallback here (see DESIGN.md).
    NestedResolution::Delegate {
        type_path: ty.clone(),
    }
}

/// Depth-capped walk through the registry: only types that have already
/// expanded `#[derive(Mapper)]` earlier in this compilation are visible
/// here, so this is a best-effort check, not a guarantee — an
/// undetected cycle through a not-yet-registered type surfaces instead
/// as a recursion-limit or infinite-size error from `rustc` itself.
fn contains_cycle_transitively(type_name: &str, ancestors: &[String], depth: usize) -> bool {
    const MAX_DEPTH: usize = 32;
    if depth > MAX_DEPTH {
        return false;
    }

    let Some(entry) = MapperRegistry::lookup(type_name) else {
        return false;
    };

    let mut extended = ancestors.to_vec();
    extended.push(type_name.to_string());

    entry.nested_type_idents.iter().any(|child| {
        ancestors.contains(child) || contains_cycle_transitively(child, &extended, depth + 1)
    })
}

fn simple_type_name(ty: &Type) -> Option<String> {
    let Type::Path(path) = ty else { return None };
    path.path.segments.last().map(|s| s.ident.to_string())
}
