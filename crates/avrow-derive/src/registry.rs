use std::collections::HashMap;
use std::sync::{Mutex, OnceLock};

///
/// MapperRegistry
///
/// Process-local record of every `#[derive(Mapper)]` expansion seen so far
/// in this compilation, keyed by the model type's simple path string as it
/// appears in field types. A nested member resolves to a delegate call
/// (`<Addr as FromItem>::from_item`) only if its type was registered by an
/// earlier macro expansion in the same `rustc` invocation.
///
/// This is the Rust realization of the whole-compilation-unit Model
/// Scanner described in spec §4.1: a Roslyn-style source generator sees
/// every mapper declaration before analyzing any of them, but a
/// `#[proc_macro_derive]` expands per-item with no such guarantee. A
/// nested member always delegates via `ToItem`/`FromItem` regardless of
/// registration — this registry exists purely so the Nested Object
/// Analyzer can walk an already-registered type's own nested members when
/// checking for a multi-hop delegation cycle (§4.5). An unregistered
/// member type just means the analyzer can't see past it; direct
/// self-reference is still always caught without consulting the registry
/// at all. See DESIGN.md for the accepted trade-off.
///
pub struct MapperRegistry;

#[derive(Clone, Debug)]
pub struct RegisteredMapper {
    pub has_hooks: bool,
    /// Simple type names of this mapper's own nested-candidate members,
    /// recorded so the Nested Object Analyzer can walk transitively
    /// through already-registered mappers when looking for a cycle.
    pub nested_type_idents: Vec<String>,
    /// `(field_name, default_wire_key)` for every member this mapper's
    /// `to_item` emits, in declaration order. Consulted when a directive
    /// forces inline expansion of a member of this type elsewhere in the
    /// compilation — the Nested Object Analyzer needs this list to know
    /// which wire keys belong to the flattened nested type (spec §4.5).
    pub field_manifest: Vec<(String, String)>,
}

fn store() -> &'static Mutex<HashMap<String, RegisteredMapper>> {
    static STORE: OnceLock<Mutex<HashMap<String, RegisteredMapper>>> = OnceLock::new();
    STORE.get_or_init(|| Mutex::new(HashMap::new()))
}

impl MapperRegistry {
    pub fn register(type_name: &str, entry: RegisteredMapper) {
        let mut guard = store().lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        guard.insert(type_name.to_string(), entry);
    }

    pub fn lookup(type_name: &str) -> Option<RegisteredMapper> {
        let guard = store().lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        guard.get(type_name).cloned()
    }
}
