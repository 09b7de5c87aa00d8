use std::collections::{HashMap, HashSet};

use darling::FromDeriveInput;
use syn::{DeriveInput, Ident, Type};

use crate::diagnostics::Diagnostic;
use crate::scan::attrs::{
    AttributeKindArg, EnumFormatArg, HooksMode, IgnoreArg, MapperArgs, MemberDirectiveArg,
    NamingConvention, RequirednessArg,
};

///
/// MapperDescriptor
///
/// The Model Scanner's output: every piece of the `#[derive(Mapper)]`
/// input the later analyzer stages need, with darling's raw `MapperArgs`
/// already flattened into owned, ready-to-consume fields, and the
/// container-level `directive`/`ignore_directive` lists already resolved
/// onto their target fields.
///
pub struct MapperDescriptor {
    pub ident: Ident,
    pub rename_all: NamingConvention,
    pub omit_null: bool,
    pub omit_empty_strings: bool,
    pub omit_empty_collections: bool,
    pub constructor: Option<Ident>,
    pub hooks: HooksMode,
    pub temporal_format: String,
    pub duration_format: String,
    pub uuid_format: String,
    pub fields: Vec<MapperFieldDescriptor>,
    /// Set when a `#[field(ignore)]`/`ignore_directive(direction = "both")`
    /// dropped at least one member from both directions entirely — the
    /// Code Renderer then needs `..Default::default()` in the struct
    /// literal to still have a value for the omitted field(s).
    pub has_fully_ignored_fields: bool,
}

pub struct MapperFieldDescriptor {
    pub ident: Ident,
    pub ty: Type,
    pub wire_key: String,
    pub requiredness_arg: RequirednessArg,
    pub kind_override: Option<AttributeKindArg>,
    pub is_enum: bool,
    pub enum_format: EnumFormatArg,
    pub nested_override: bool,
    pub constructor_param: Option<Ident>,
    /// `ToItemOnly` suppresses the `to_item` statement; `FromItemOnly`
    /// suppresses the `from_item` binding (replaced with `Default`); a
    /// field with direction `Both` never reaches this list at all.
    pub ignore: IgnoreArg,
    pub to_method: Option<Ident>,
    pub from_method: Option<Ident>,
    pub format: Option<String>,
    /// Set by a directive whose path is this field's name followed by a
    /// nested suffix (e.g. `"shipping_address.line1"`), forcing the
    /// Nested Object Analyzer to attempt inline expansion instead of
    /// delegation (spec §4.5 step 2).
    pub force_inline: bool,
    /// `(suffix field name, renamed wire key)` pairs collected from such
    /// directives, applied over the nested type's own default wire keys.
    pub inline_overrides: Vec<(String, String)>,
}

impl MapperDescriptor {
    /// Parse `input`, resolve container-level directives onto their
    /// target fields, drop members ignored in both directions, and
    /// resolve each surviving field's wire key via the container's
    /// naming convention unless overridden.
    pub fn parse(input: &DeriveInput) -> Result<Self, Vec<Diagnostic>> {
        let args = MapperArgs::from_derive_input(input).map_err(|e| {
            vec![Diagnostic::new(
                "DM0001",
                format!("invalid #[mapper]/#[field] attribute: {e}"),
                proc_macro2::Span::call_site(),
            )]
        })?;

        let mut diagnostics = Vec::new();
        let rename_all = args.rename_all;

        if args.constructor.len() > 1 {
            diagnostics.push(Diagnostic::new(
                "DM0103",
                format!(
                    "mapper `{}` carries {} `#[mapper(constructor = ...)]` markers; at most one constructor-preference marker is allowed",
                    args.ident,
                    args.constructor.len()
                ),
                args.ident.span(),
            ));
        }
        let constructor = args.constructor.first().cloned();

        let field_names: HashSet<String> = args
            .fields()
            .iter()
            .filter_map(|f| f.ident.as_ref())
            .map(std::string::ToString::to_string)
            .collect();

        let mut directives_by_field: HashMap<String, Vec<&MemberDirectiveArg>> = HashMap::new();
        let mut seen_directive_paths: HashSet<String> = HashSet::new();
        for directive in &args.directives {
            if !seen_directive_paths.insert(directive.path.clone()) {
                diagnostics.push(Diagnostic::new(
                    "DM0008",
                    format!("duplicate directive on target path `{}`", directive.path),
                    args.ident.span(),
                ));
                continue;
            }
            let head = path_head(&directive.path);
            if !field_names.contains(head) {
                diagnostics.push(Diagnostic::new(
                    "DM0008",
                    format!("directive targets unknown member `{head}`"),
                    args.ident.span(),
                ));
                continue;
            }
            directives_by_field.entry(head.to_string()).or_default().push(directive);
        }

        let mut ignores_by_field: HashMap<String, Vec<&crate::scan::attrs::IgnoreDirectiveArg>> =
            HashMap::new();
        for ignore in &args.ignore_directives {
            let head = path_head(&ignore.path);
            if !field_names.contains(head) {
                diagnostics.push(Diagnostic::new(
                    "DM0008",
                    format!("ignore directive targets unknown member `{head}`"),
                    args.ident.span(),
                ));
                continue;
            }
            ignores_by_field.entry(head.to_string()).or_default().push(ignore);
        }

        let mut fields = Vec::new();
        let mut has_fully_ignored_fields = false;

        for field in args.fields() {
            let Some(ident) = field.ident.clone() else { continue };
            let name = ident.to_string();

            let mut ignore = field.ignore;
            let mut rename = field.rename.clone();
            let mut required = field.required;
            let mut kind = field.kind;
            let mut to_method = field.to.clone();
            let mut from_method = field.from.clone();
            let mut format = field.format.clone();
            let mut force_inline = false;
            let mut inline_overrides = Vec::new();

            if let Some(directives) = directives_by_field.get(&name) {
                for directive in directives {
                    match directive.path.split_once('.') {
                        None => {
                            if directive.rename.is_some() {
                                rename = directive.rename.clone();
                            }
                            if !matches!(directive.required, RequirednessArg::InferFromNullability) {
                                required = directive.required;
                            }
                            if directive.kind.is_some() {
                                kind = directive.kind;
                            }
                            if directive.to.is_some() {
                                to_method = directive.to.clone();
                            }
                            if directive.from.is_some() {
                                from_method = directive.from.clone();
                            }
                            if directive.format.is_some() {
                                format = directive.format.clone();
                            }
                        }
                        Some((_, suffix)) => {
                            force_inline = true;
                            if let Some(renamed) = &directive.rename {
                                inline_overrides.push((suffix.to_string(), renamed.clone()));
                            }
                        }
                    }
                }
            }

            if let Some(ignores) = ignores_by_field.get(&name) {
                for directive in ignores {
                    match directive.path.split_once('.') {
                        None => ignore = directive.direction,
                        Some(_) => force_inline = true,
                    }
                }
            }

            if ignore == IgnoreArg::Both {
                has_fully_ignored_fields = true;
                continue;
            }

            let wire_key = rename.unwrap_or_else(|| rename_all.apply(&name));

            fields.push(MapperFieldDescriptor {
                ident,
                ty: field.ty.clone(),
                wire_key,
                requiredness_arg: required,
                kind_override: kind,
                is_enum: field.is_enum,
                enum_format: field.enum_format,
                nested_override: field.nested,
                constructor_param: field.constructor_param.clone(),
                ignore,
                to_method,
                from_method,
                format,
                force_inline,
                inline_overrides,
            });
        }

        if !diagnostics.is_empty() {
            return Err(diagnostics);
        }

        Ok(Self {
            ident: args.ident,
            rename_all,
            omit_null: args.omit_null,
            omit_empty_strings: args.omit_empty_strings,
            omit_empty_collections: args.omit_empty_collections,
            constructor,
            hooks: args.hooks,
            temporal_format: args.temporal_format,
            duration_format: args.duration_format,
            uuid_format: args.uuid_format,
            fields,
            has_fully_ignored_fields,
        })
    }
}

fn path_head(path: &str) -> &str {
    path.split('.').next().unwrap_or(path)
}
