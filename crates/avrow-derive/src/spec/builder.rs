use syn::{Ident, Type};

use crate::analyze::collection::{resolve_collection, CollectionStrategy};
use crate::analyze::ctor::{select_construction, ConstructionStrategy};
use crate::analyze::member::{classify, Cardinality, OuterShape};
use crate::analyze::nested::{resolve_nested, NestedResolution};
use crate::analyze::type_strategy::{resolve_scalar, ScalarKind, TypeStrategy};
use crate::diagnostics::Diagnostic;
use crate::scan::attrs::{AttributeKindArg, EnumFormatArg, HooksMode, IgnoreArg, RequirednessArg};
use crate::scan::mapper_decl::MapperDescriptor;

///
/// ResolvedRequiredness
///
/// The two-way value the runtime's `Requiredness` enum actually branches
/// on; `RequirednessArg::InferFromNullability` is resolved against the
/// member's Rust-level `Option`-ness right here, at expansion time,
/// rather than deferred to the runtime (which only sees the already-
/// resolved value baked into the generated call).
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResolvedRequiredness {
    Required,
    Optional,
}

#[derive(Clone, Debug)]
pub enum FieldStrategy {
    Scalar(ScalarKind),
    Bool,
    Blob,
    Enum { format: EnumFormatArg },
    Nested(NestedResolution),
    Collection(CollectionStrategy),
}

pub struct FieldPlan {
    pub ident: Ident,
    pub ty: Type,
    pub wire_key: String,
    pub requiredness: ResolvedRequiredness,
    pub kind: AttributeKindArg,
    pub is_optional: bool,
    pub strategy: FieldStrategy,
    /// `ToItemOnly` suppresses the `to_item` statement for this member;
    /// `FromItemOnly` suppresses the `from_item` binding (replaced with
    /// `Default::default()`); `None` means both directions run normally.
    pub ignore: IgnoreArg,
    /// A custom serialize method short-circuits the standard `to_item`
    /// encoding for this member (spec §4.3, §4.7).
    pub to_method: Option<Ident>,
    /// A custom deserialize method short-circuits the standard
    /// `from_item` decoding for this member.
    pub from_method: Option<Ident>,
    /// Resolved format literal for a temporal/duration/uuid scalar:
    /// `directive.format` if present, else the mapper's own default for
    /// that family (spec §4.3, §4.9). `None` for every other strategy.
    pub format: Option<String>,
}

pub struct MapperPlan {
    pub ident: Ident,
    pub omit_null: bool,
    pub omit_empty_strings: bool,
    pub omit_empty_collections: bool,
    pub hooks: HooksMode,
    pub construction: ConstructionStrategy,
    pub fields: Vec<FieldPlan>,
    pub has_fully_ignored_fields: bool,
}

impl MapperPlan {
    pub fn build(descriptor: &MapperDescriptor) -> Result<Self, Vec<Diagnostic>> {
        let mut diagnostics = Vec::new();
        let mapper_name = descriptor.ident.to_string();
        let mut fields = Vec::with_capacity(descriptor.fields.len());

        for field in &descriptor.fields {
            let shape = classify(&field.ty);
            let requiredness = match field.requiredness_arg {
                RequirednessArg::Required => ResolvedRequiredness::Required,
                RequirednessArg::Optional => ResolvedRequiredness::Optional,
                RequirednessArg::InferFromNullability => {
                    if shape.cardinality == Cardinality::Opt {
                        ResolvedRequiredness::Optional
                    } else {
                        ResolvedRequiredness::Required
                    }
                }
            };

            let strategy = resolve_field_strategy(
                &shape.outer,
                &shape.inner,
                field.is_enum,
                field.enum_format,
                field.nested_override,
                field.force_inline,
                &field.inline_overrides,
                &mapper_name,
                &mut diagnostics,
                &field.ident,
            );

            let kind = field.kind_override.unwrap_or_else(|| default_kind(&strategy));

            if let Some(override_kind) = field.kind_override {
                if is_container_kind(override_kind) && !matches!(strategy, FieldStrategy::Collection(_)) {
                    diagnostics.push(Diagnostic::new(
                        "DM0009",
                        format!(
                            "member `{}`: cannot convert — kind override `{override_kind:?}` names a container kind but the member's underlying type is a scalar",
                            field.ident
                        ),
                        field.ident.span(),
                    ));
                }
            }

            let format = resolve_format(&strategy, field.format.as_deref(), descriptor);

            fields.push(FieldPlan {
                ident: field.ident.clone(),
                ty: field.ty.clone(),
                wire_key: field.wire_key.clone(),
                requiredness,
                kind,
                is_optional: shape.cardinality == Cardinality::Opt,
                strategy,
                ignore: field.ignore,
                to_method: field.to_method.clone(),
                from_method: field.from_method.clone(),
                format,
            });
        }

        if !diagnostics.is_empty() {
            return Err(diagnostics);
        }

        Ok(Self {
            ident: descriptor.ident.clone(),
            omit_null: descriptor.omit_null,
            omit_empty_strings: descriptor.omit_empty_strings,
            omit_empty_collections: descriptor.omit_empty_collections,
            hooks: descriptor.hooks,
            construction: select_construction(descriptor.constructor.as_ref()),
            fields,
            has_fully_ignored_fields: descriptor.has_fully_ignored_fields,
        })
    }

    /// Simple names of members whose strategy delegates to or inline-
    /// expands another mapper type, used to seed this mapper's own
    /// `RegisteredMapper::nested_type_idents` entry.
    pub fn nested_type_names(&self) -> Vec<String> {
        self.fields
            .iter()
            .filter_map(|f| match &f.strategy {
                FieldStrategy::Nested(NestedResolution::Delegate { type_path })
                | FieldStrategy::Nested(NestedResolution::InlineExpanded { type_path, .. }) => {
                    simple_type_name(type_path)
                }
                _ => None,
            })
            .collect()
    }

    /// `(field_name, default_wire_key)` for every member this mapper's
    /// `to_item` emits, in declaration order — the manifest a forced
    /// inline expansion elsewhere in the compilation flattens against
    /// (spec §4.5).
    pub fn field_manifest(&self) -> Vec<(String, String)> {
        self.fields
            .iter()
            .filter(|f| !matches!(f.ignore, IgnoreArg::ToItemOnly))
            .map(|f| (f.ident.to_string(), f.wire_key.clone()))
            .collect()
    }
}

fn is_container_kind(kind: AttributeKindArg) -> bool {
    matches!(
        kind,
        AttributeKindArg::L | AttributeKindArg::M | AttributeKindArg::Ss | AttributeKindArg::Ns | AttributeKindArg::Bs
    )
}

/// Format-literal resolution (spec §4.3, §4.9): a per-field/directive
/// override wins, otherwise fall back to the mapper's own default for
/// that scalar family. Every other strategy carries no format.
fn resolve_format(strategy: &FieldStrategy, field_format: Option<&str>, descriptor: &MapperDescriptor) -> Option<String> {
    let FieldStrategy::Scalar(kind) = strategy else {
        return None;
    };
    let mapper_default = match kind {
        ScalarKind::Uuid => Some(descriptor.uuid_format.as_str()),
        ScalarKind::TimeSpan => Some(descriptor.duration_format.as_str()),
        ScalarKind::DateTime | ScalarKind::DateTimeOffset => Some(descriptor.temporal_format.as_str()),
        _ => None,
    };
    mapper_default.map(|default| field_format.unwrap_or(default).to_string())
}

#[allow(clippy::too_many_arguments)]
fn resolve_field_strategy(
    outer: &OuterShape,
    inner: &Type,
    is_enum: bool,
    enum_format: EnumFormatArg,
    nested_override: bool,
    force_inline: bool,
    inline_overrides: &[(String, String)],
    mapper_name: &str,
    diagnostics: &mut Vec<Diagnostic>,
    field_ident: &Ident,
) -> FieldStrategy {
    if let Some(collection) = resolve_collection(outer, inner) {
        return FieldStrategy::Collection(collection);
    }

    if nested_override {
        return resolve_nested_field(inner, mapper_name, diagnostics, field_ident, force_inline, inline_overrides);
    }

    if is_enum {
        return FieldStrategy::Enum { format: enum_format };
    }

    match resolve_scalar(inner) {
        Some(TypeStrategy::Scalar(kind)) => FieldStrategy::Scalar(kind),
        Some(TypeStrategy::Bool) => FieldStrategy::Bool,
        Some(TypeStrategy::Blob) => FieldStrategy::Blob,
        None => resolve_nested_field(inner, mapper_name, diagnostics, field_ident, force_inline, inline_overrides),
    }
}

fn resolve_nested_field(
    inner: &Type,
    mapper_name: &str,
    diagnostics: &mut Vec<Diagnostic>,
    field_ident: &Ident,
    force_inline: bool,
    inline_overrides: &[(String, String)],
) -> FieldStrategy {
    let resolution = resolve_nested(inner, &[mapper_name.to_string()], force_inline, inline_overrides);
    match &resolution {
        NestedResolution::Cycle { type_name } => {
            diagnostics.push(Diagnostic::new(
                "DM0006",
                format!("member `{field_ident}` introduces a mapper delegation cycle through `{type_name}`"),
                field_ident.span(),
            ));
        }
        NestedResolution::ForcedInlineUnregistered { type_name } => {
            diagnostics.push(Diagnostic::new(
                "DM0010",
                format!(
                    "member `{field_ident}`: inline expansion is forced by a directive but `{type_name}` has not registered a field manifest yet in this compilation (its own `#[derive(Mapper)]` must expand earlier)"
                ),
                field_ident.span(),
            ));
        }
        _ => {}
    }
    FieldStrategy::Nested(resolution)
}

fn default_kind(strategy: &FieldStrategy) -> AttributeKindArg {
    match strategy {
        FieldStrategy::Scalar(kind) => kind.default_kind(),
        FieldStrategy::Bool => AttributeKindArg::Bool,
        FieldStrategy::Blob => AttributeKindArg::B,
        FieldStrategy::Enum { .. } => AttributeKindArg::S,
        FieldStrategy::Nested(_) => AttributeKindArg::M,
        FieldStrategy::Collection(collection) => match collection {
            CollectionStrategy::List { .. } => AttributeKindArg::L,
            CollectionStrategy::StringSet { .. } => AttributeKindArg::Ss,
            CollectionStrategy::NumberSet { .. } => AttributeKindArg::Ns,
            CollectionStrategy::BinarySet { .. } => AttributeKindArg::Bs,
            CollectionStrategy::Map { .. } => AttributeKindArg::M,
        },
    }
}

fn simple_type_name(ty: &Type) -> Option<String> {
    let Type::Path(path) = ty else { return None };
    path.path.segments.last().map(|s| s.ident.to_string())
}
