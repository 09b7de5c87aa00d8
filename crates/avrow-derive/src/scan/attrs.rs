use convert_case::Case;
use darling::{FromDeriveInput, FromField, FromMeta};

///
/// NamingConvention
///
/// Mirrors spec §4.2's key-naming policy vocabulary. `Preserve` leaves the
/// Rust field ident's text untouched; every other variant runs it through
/// `convert_case`.
///
#[derive(Clone, Copy, Debug, Default, FromMeta, PartialEq, Eq)]
#[darling(rename_all = "snake_case")]
pub enum NamingConvention {
    #[default]
    Preserve,
    Camel,
    Pascal,
    Snake,
    Kebab,
    UpperSnake,
}

impl NamingConvention {
    pub fn apply(self, ident: &str) -> String {
        use convert_case::Casing;

        match self {
            Self::Preserve => ident.to_string(),
            Self::Camel => ident.to_case(Case::Camel),
            Self::Pascal => ident.to_case(Case::Pascal),
            Self::Snake => ident.to_case(Case::Snake),
            Self::Kebab => ident.to_case(Case::Kebab),
            Self::UpperSnake => ident.to_case(Case::UpperSnake),
        }
    }
}

///
/// RequirednessArg
///
/// The `#[field(required = ..)]`/`#[field(optional)]` surface resolves to
/// the runtime's three-way `Requiredness` (spec §4.3); darling only ever
/// sees the two explicit poles plus the implicit "infer from the Rust
/// field's own `Option<T>`-ness" default.
///
#[derive(Clone, Copy, Debug, Default, FromMeta, PartialEq, Eq)]
#[darling(rename_all = "snake_case")]
pub enum RequirednessArg {
    #[default]
    InferFromNullability,
    Required,
    Optional,
}

///
/// AttributeKindArg
///
/// Literal override for the wire `AttributeKind`, spelled the way the spec
/// names the AV tags (`"S"`, `"N"`, `"BOOL"`, ...). Absent means "use the
/// Type Strategy Resolver's default for this Rust type" (§4.4).
///
#[derive(Clone, Copy, Debug, FromMeta, PartialEq, Eq)]
#[darling(rename_all = "UPPERCASE")]
pub enum AttributeKindArg {
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

///
/// EnumFormatArg
///
#[derive(Clone, Copy, Debug, Default, FromMeta, PartialEq, Eq)]
#[darling(rename_all = "UPPERCASE")]
pub enum EnumFormatArg {
    #[default]
    G,
    D,
}

///
/// IgnoreArg
///
/// The `#[field(ignore)]`/`#[field(ignore = "...")]`/container-level
/// `ignore(path = "...", direction = "...")` directive's direction (spec
/// §3, §4.7). A bare word (`#[field(ignore)]`) resolves to `Both` via the
/// hand-written `from_word` below, since darling's `#[derive(FromMeta)]`
/// only synthesizes that for unit variants, not this repo's convention of
/// treating the bare word as a named variant.
///
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum IgnoreArg {
    #[default]
    None,
    Both,
    ToItemOnly,
    FromItemOnly,
}

impl FromMeta for IgnoreArg {
    fn from_word() -> darling::Result<Self> {
        Ok(Self::Both)
    }

    fn from_string(value: &str) -> darling::Result<Self> {
        match value {
            "both" => Ok(Self::Both),
            "to_item_only" => Ok(Self::ToItemOnly),
            "from_item_only" => Ok(Self::FromItemOnly),
            other => Err(darling::Error::unknown_value(other)),
        }
    }
}

///
/// HooksMode
///
/// `Off` (default): generated code never calls `MapperHooks`. `Auto`: the
/// derive also emits a blank `impl MapperHooks for Model {}`, so every
/// hook stays a no-op — only useful as a placeholder to flip to `Manual`
/// later. `Manual`: the derive calls through to `MapperHooks` but does
/// NOT emit an impl, so the user's own `impl MapperHooks for Model { .. }`
/// (overriding only the methods it cares about) is the one that runs.
///
#[derive(Clone, Copy, Debug, Default, FromMeta, PartialEq, Eq)]
#[darling(rename_all = "snake_case")]
pub enum HooksMode {
    #[default]
    Off,
    Auto,
    Manual,
}

///
/// MemberDirectiveArg
///
/// Container-level `#[mapper(directive(path = "...", ...))]`, the
/// dotted-target-path form of the Member Directive (spec §3). A
/// single-segment `path` (e.g. `"shipping_address"`) overlays onto the
/// matching top-level field's own descriptor, taking precedence over its
/// `#[field(...)]` attribute. A two-segment path (e.g.
/// `"shipping_address.line1"`) forces inline expansion of the first
/// segment's nested member and registers a rename for that one suffix
/// key — deeper paths are not supported (see DESIGN.md).
///
#[derive(Clone, Debug, FromMeta)]
pub struct MemberDirectiveArg {
    pub path: String,

    #[darling(default)]
    pub rename: Option<String>,

    #[darling(default)]
    pub required: RequirednessArg,

    #[darling(default)]
    pub kind: Option<AttributeKindArg>,

    #[darling(default)]
    pub to: Option<syn::Ident>,

    #[darling(default)]
    pub from: Option<syn::Ident>,

    #[darling(default)]
    pub format: Option<String>,
}

///
/// IgnoreDirectiveArg
///
/// Container-level `#[mapper(ignore_directive(path = "...", direction = ..))]`
/// — the repeatable Ignore Directive (spec §3) addressed by target path
/// rather than requiring the field's own `#[field(ignore)]` attribute.
///
#[derive(Clone, Debug, FromMeta)]
pub struct IgnoreDirectiveArg {
    pub path: String,

    #[darling(default)]
    pub direction: IgnoreArg,
}

///
/// MapperArgs
///
/// Container-level `#[mapper(...)]` directives, parsed from the whole
/// `DeriveInput` (darling also gives us `ident`, `data`, `generics` for
/// free via `#[darling(forward_attrs)]`-free field access on the input).
///
#[derive(Debug, FromDeriveInput)]
#[darling(attributes(mapper), supports(struct_named))]
pub struct MapperArgs {
    pub ident: syn::Ident,
    pub data: darling::ast::Data<darling::util::Ignored, MapperFieldArgs>,

    #[darling(default)]
    pub rename_all: NamingConvention,

    #[darling(default)]
    pub omit_null: bool,

    #[darling(default)]
    pub omit_empty_strings: bool,

    #[darling(default)]
    pub omit_empty_collections: bool,

    /// Collected via every occurrence rather than `Option` so a repeated
    /// marker is detectable (fatal `DM0103`, spec §4.6) instead of
    /// silently taking the last one.
    #[darling(default, multiple, rename = "constructor")]
    pub constructor: Vec<syn::Ident>,

    #[darling(default)]
    pub hooks: HooksMode,

    #[darling(default = "default_temporal_format")]
    pub temporal_format: String,

    #[darling(default = "default_duration_format")]
    pub duration_format: String,

    #[darling(default = "default_uuid_format")]
    pub uuid_format: String,

    #[darling(default, multiple, rename = "directive")]
    pub directives: Vec<MemberDirectiveArg>,

    #[darling(default, multiple, rename = "ignore_directive")]
    pub ignore_directives: Vec<IgnoreDirectiveArg>,
}

fn default_temporal_format() -> String {
    "O".to_string()
}

fn default_duration_format() -> String {
    "c".to_string()
}

fn default_uuid_format() -> String {
    "D".to_string()
}

impl MapperArgs {
    pub fn fields(&self) -> Vec<&MapperFieldArgs> {
        match &self.data {
            darling::ast::Data::Struct(fields) => fields.fields.iter().collect(),
            darling::ast::Data::Enum(_) => Vec::new(),
        }
    }
}

///
/// MapperFieldArgs
///
/// Per-field `#[field(...)]` directives, including the `#[field(ignore)]`
/// marker, parsed via `FromField` so darling resolves `ident`/`ty`
/// straight off the struct definition instead of requiring them to be
/// repeated in the attribute.
///
#[derive(Debug, FromField)]
#[darling(attributes(field))]
pub struct MapperFieldArgs {
    pub ident: Option<syn::Ident>,
    pub ty: syn::Type,

    #[darling(default)]
    pub ignore: IgnoreArg,

    #[darling(default)]
    pub rename: Option<String>,

    #[darling(default)]
    pub required: RequirednessArg,

    #[darling(default)]
    pub kind: Option<AttributeKindArg>,

    #[darling(default)]
    pub is_enum: bool,

    #[darling(default)]
    pub enum_format: EnumFormatArg,

    #[darling(default)]
    pub nested: bool,

    #[darling(default)]
    pub constructor_param: Option<syn::Ident>,

    /// Custom serialize method name: an instance method `fn(&self) -> Value`
    /// called in place of the standard encoding for this member (spec
    /// §4.3, §4.7).
    #[darling(default)]
    pub to: Option<syn::Ident>,

    /// Custom deserialize method name: an associated function
    /// `fn(&Item) -> RuntimeResult<FieldType>` called in place of the
    /// standard decoding for this member.
    #[darling(default)]
    pub from: Option<syn::Ident>,

    /// Per-field format-literal override for temporal/duration/uuid
    /// members, taking precedence over the mapper's own default (spec
    /// §4.3, §4.9).
    #[darling(default)]
    pub format: Option<String>,
}
