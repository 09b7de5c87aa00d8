use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::Type;

use crate::analyze::collection::{CollectionStrategy, KeyedShape, ListShape};
use crate::analyze::nested::NestedResolution;
use crate::analyze::type_strategy::{resolve_scalar, ScalarKind, TypeStrategy};
use crate::diagnostics::Diagnostic;
use crate::render::{enum_format_tokens, kind_tokens, requiredness_tokens};
use crate::scan::attrs::IgnoreArg;
use crate::spec::builder::{FieldPlan, FieldStrategy, MapperPlan};

/// Render `fn from_item(item: &Item) -> RuntimeResult<Self>`: one
/// `let`-binding per member followed by construction via the selected
/// `ConstructionStrategy` (spec §4.6, §4.8).
pub fn render(plan: &MapperPlan) -> Result<TokenStream, Vec<Diagnostic>> {
    let mut diagnostics = Vec::new();

    let bindings: Vec<TokenStream> = plan
        .fields
        .iter()
        .map(|field| render_binding(field, &mut diagnostics))
        .collect();

    if !diagnostics.is_empty() {
        return Err(diagnostics);
    }

    let construct = render_construction(plan);

    let hooks_enabled = !matches!(plan.hooks, crate::scan::attrs::HooksMode::Off);
    let before_hook = hooks_enabled
        .then(|| quote!(::avrow::traits::MapperHooks::before_from_item(item);))
        .unwrap_or_default();
    let after_hook = hooks_enabled.then(|| {
        quote!(::avrow::traits::MapperHooks::after_from_item(item, &mut model);)
    });

    if hooks_enabled {
        Ok(quote! {
            fn from_item(item: &::avrow::item::Item) -> ::avrow::error::RuntimeResult<Self> {
                #before_hook
                #(#bindings)*
                let mut model = #construct;
                #after_hook
                Ok(model)
            }
        })
    } else {
        Ok(quote! {
            fn from_item(item: &::avrow::item::Item) -> ::avrow::error::RuntimeResult<Self> {
                #(#bindings)*
                Ok(#construct)
            }
        })
    }
}

fn render_binding(field: &FieldPlan, diagnostics: &mut Vec<Diagnostic>) -> TokenStream {
    let ident = &field.ident;
    let wire_key = &field.wire_key;

    // Direction `FromItemOnly` ignore: this member never reads from the
    // item; the struct field is populated from `Default` instead
    // (spec §4.7's ignore interaction table).
    if matches!(field.ignore, IgnoreArg::FromItemOnly) {
        return quote! {
            let #ident = <_ as ::core::default::Default>::default();
        };
    }

    // A custom deserialize method completely short-circuits the standard
    // decoding for this member (spec §4.3 invariant c, §4.7).
    if let Some(from_method) = &field.from_method {
        return quote! {
            let #ident = Self::#from_method(item)?;
        };
    }

    let kind = kind_tokens(field.kind);
    let requiredness = requiredness_tokens(field.requiredness);

    match &field.strategy {
        FieldStrategy::Scalar(kind_arg) => render_scalar(*kind_arg, ident, wire_key, field, &requiredness, kind),
        FieldStrategy::Bool => {
            let get_fn = if field.is_optional {
                quote!(get_nullable_bool)
            } else {
                quote!(get_bool)
            };
            quote! {
                let #ident = ::avrow::runtime::#get_fn(item, #wire_key, #requiredness, #kind)?;
            }
        }
        FieldStrategy::Blob => {
            let get_fn = if field.is_optional {
                quote!(get_nullable_blob)
            } else {
                quote!(get_blob)
            };
            quote! {
                let #ident = ::avrow::runtime::#get_fn(item, #wire_key, #requiredness)?;
            }
        }
        FieldStrategy::Enum { format } => {
            let format = enum_format_tokens(*format);
            if field.is_optional {
                quote! {
                    let #ident = ::avrow::runtime::get_nullable_enum(item, #wire_key, #requiredness, #format)?;
                }
            } else {
                quote! {
                    let #ident = ::avrow::runtime::get_enum(item, #wire_key, #requiredness, #format, Default::default())?;
                }
            }
        }
        FieldStrategy::Nested(resolution) => render_nested(ident, field.is_optional, &requiredness, wire_key, resolution),
        FieldStrategy::Collection(collection) => {
            render_collection_binding(ident, wire_key, &requiredness, field.is_optional, collection, diagnostics)
        }
    }
}

fn render_scalar(
    kind_arg: ScalarKind,
    ident: &syn::Ident,
    wire_key: &str,
    field: &FieldPlan,
    requiredness: &TokenStream,
    kind: TokenStream,
) -> TokenStream {
    let fragment = kind_arg.fn_fragment();
    let format_carrying = matches!(
        kind_arg,
        ScalarKind::Uuid | ScalarKind::TimeSpan | ScalarKind::DateTime | ScalarKind::DateTimeOffset
    );

    if format_carrying {
        let get_fn = format_ident!(
            "{}",
            if field.is_optional {
                format!("get_nullable_{fragment}_fmt")
            } else {
                format!("get_{fragment}_fmt")
            }
        );
        let format = match &field.format {
            Some(f) => quote!(Some(#f)),
            None => quote!(None),
        };
        return quote! {
            let #ident = ::avrow::runtime::#get_fn(item, #wire_key, #requiredness, #kind, #format)?;
        };
    }

    let get_fn = format_ident!(
        "{}",
        if field.is_optional {
            format!("get_nullable_{fragment}")
        } else {
            format!("get_{fragment}")
        }
    );
    quote! {
        let #ident = ::avrow::runtime::#get_fn(item, #wire_key, #requiredness, #kind)?;
    }
}

fn render_nested(
    ident: &syn::Ident,
    is_optional: bool,
    requiredness: &TokenStream,
    wire_key: &str,
    resolution: &NestedResolution,
) -> TokenStream {
    match resolution {
        NestedResolution::Cycle { .. } | NestedResolution::ForcedInlineUnregistered { .. } => {
            debug_assert!(false, "fatal nested resolution reached the renderer");
            TokenStream::new()
        }
        NestedResolution::Delegate { .. } => {
            let get_fn = if is_optional {
                quote!(get_nullable_nested)
            } else {
                quote!(get_nested)
            };
            quote! {
                let #ident = ::avrow::runtime::#get_fn(item, #wire_key, #requiredness)?;
            }
        }
        NestedResolution::InlineExpanded { type_path, manifest } => {
            render_inline_expanded(ident, is_optional, type_path, manifest)
        }
    }
}

/// Inverse of `to_item.rs`'s flatten: pull each manifest entry's
/// (possibly-renamed) final key back out of the parent item, undo the
/// rename, and hand the reassembled sub-`Item` to the nested type's own
/// `from_item` (spec §4.8 shape 3). An optional inline-expanded member is
/// treated as absent when none of its manifest keys are present — a
/// nested type whose own manifest is empty can't be distinguished from
/// "absent" this way, a narrow edge case noted in DESIGN.md.
fn render_inline_expanded(
    ident: &syn::Ident,
    is_optional: bool,
    type_path: &Type,
    manifest: &[crate::analyze::nested::InlineFieldSpec],
) -> TokenStream {
    let pairs = manifest.iter().map(|m| {
        let final_key = &m.final_wire_key;
        let default_key = &m.default_wire_key;
        quote!((#final_key, #default_key))
    });

    let build_sub_item = quote! {
        let __sub_item: ::avrow::item::Item = [#(#pairs),*]
            .into_iter()
            .filter_map(|(__final_key, __default_key): (&str, &str)| {
                item.try_get(__final_key).map(|__v| (__default_key.to_string(), __v.clone()))
            })
            .collect();
    };

    if is_optional {
        quote! {
            #build_sub_item
            let #ident = if __sub_item.is_empty() {
                None
            } else {
                Some(<#type_path as ::avrow::traits::FromItem>::from_item(&__sub_item)?)
            };
        }
    } else {
        quote! {
            #build_sub_item
            let #ident = <#type_path as ::avrow::traits::FromItem>::from_item(&__sub_item)?;
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn render_collection_binding(
    ident: &syn::Ident,
    wire_key: &str,
    requiredness: &TokenStream,
    is_optional: bool,
    collection: &CollectionStrategy,
    diagnostics: &mut Vec<Diagnostic>,
) -> TokenStream {
    macro_rules! get_fn {
        ($plain:ident, $nullable:ident) => {
            if is_optional {
                quote!(::avrow::runtime::$nullable)
            } else {
                quote!(::avrow::runtime::$plain)
            }
        };
    }

    match collection {
        CollectionStrategy::List { element, shape } => {
            let Some(decode) = element_decode_expr(element, wire_key, diagnostics, ident) else {
                return TokenStream::new();
            };
            render_list_binding(ident, wire_key, requiredness, is_optional, shape, element, &decode)
        }
        CollectionStrategy::StringSet { shape } => {
            let get_fn = get_fn!(get_string_set, get_nullable_string_set);
            let decoded = quote!(#get_fn(item, #wire_key, #requiredness)?);
            adapt_keyed_binding(ident, decoded, is_optional, *shape)
        }
        CollectionStrategy::BinarySet { shape } => {
            let get_fn = get_fn!(get_binary_set, get_nullable_binary_set);
            let decoded = quote!(#get_fn(item, #wire_key, #requiredness)?);
            adapt_keyed_binding(ident, decoded, is_optional, *shape)
        }
        CollectionStrategy::NumberSet { element, shape } => {
            let elem_ty = scalar_kind_type_tokens(*element);
            let get_fn = get_fn!(get_number_set, get_nullable_number_set);
            let decoded = quote! {
                #get_fn(item, #wire_key, #requiredness, |s: &str| {
                    ::avrow::runtime::parse_failure(#wire_key, s, <#elem_ty as ::avrow::runtime::TextScalar>::decode_text(s))
                })?
            };
            adapt_keyed_binding(ident, decoded, is_optional, *shape)
        }
        CollectionStrategy::Map { value, shape } => {
            let Some(decode) = element_decode_expr(value, wire_key, diagnostics, ident) else {
                return TokenStream::new();
            };
            let get_fn = get_fn!(get_map, get_nullable_map);
            let decoded = quote!(#get_fn(item, #wire_key, #requiredness, #decode)?);
            adapt_keyed_binding(ident, decoded, is_optional, *shape)
        }
    }
}

/// `BTreeSet`/`BTreeMap` is already the runtime helper's own shape and
/// binds straight through; `HashSet`/`HashMap` is adapted via
/// `.into_iter().collect()` (every keyed container here implements
/// `FromIterator` over the runtime helper's item type, so this is
/// shape-generic).
fn adapt_keyed_binding(ident: &syn::Ident, decoded: TokenStream, is_optional: bool, shape: KeyedShape) -> TokenStream {
    match shape {
        KeyedShape::BTree => quote! {
            let #ident = #decoded;
        },
        KeyedShape::Hash => {
            if is_optional {
                quote! {
                    let #ident = (#decoded).map(|__c| __c.into_iter().collect());
                }
            } else {
                quote! {
                    let #ident = (#decoded).into_iter().collect();
                }
            }
        }
    }
}

fn render_list_binding(
    ident: &syn::Ident,
    wire_key: &str,
    requiredness: &TokenStream,
    is_optional: bool,
    shape: &ListShape,
    element: &Type,
    decode: &TokenStream,
) -> TokenStream {
    let get_fn = if is_optional {
        quote!(::avrow::runtime::get_nullable_list)
    } else {
        quote!(::avrow::runtime::get_list)
    };
    let decoded = quote!(#get_fn(item, #wire_key, #requiredness, #decode)?);

    match shape {
        ListShape::Vec => quote! {
            let #ident = #decoded;
        },
        ListShape::VecDeque => {
            if is_optional {
                quote! {
                    let #ident = (#decoded).map(|__v| __v.into_iter().collect::<::std::collections::VecDeque<_>>());
                }
            } else {
                quote! {
                    let #ident = (#decoded).into_iter().collect::<::std::collections::VecDeque<_>>();
                }
            }
        }
        ListShape::Array(len) => {
            if is_optional {
                quote! {
                    let #ident = (#decoded)
                        .map(|__v| <[#element; #len]>::try_from(__v))
                        .transpose()
                        .map_err(|__v: Vec<#element>| ::avrow::error::RuntimeError::parse_failure(
                            #wire_key,
                            format!("expected {} elements, found {}", #len, __v.len()),
                        ))?;
                }
            } else {
                quote! {
                    let #ident = <[#element; #len]>::try_from(#decoded)
                        .map_err(|__v: Vec<#element>| ::avrow::error::RuntimeError::parse_failure(
                            #wire_key,
                            format!("expected {} elements, found {}", #len, __v.len()),
                        ))?;
                }
            }
        }
    }
}

fn element_decode_expr(
    element_ty: &Type,
    wire_key: &str,
    diagnostics: &mut Vec<Diagnostic>,
    field_ident: &syn::Ident,
) -> Option<TokenStream> {
    match resolve_scalar(element_ty) {
        Some(TypeStrategy::Scalar(scalar_kind)) => {
            let kind = kind_tokens(scalar_kind.default_kind());
            Some(quote!(|v| {
                let text = ::avrow::runtime::text_for_kind(#wire_key, v, #kind)?;
                ::avrow::runtime::parse_failure(#wire_key, text, <#element_ty as ::avrow::runtime::TextScalar>::decode_text(text))
            }))
        }
        Some(TypeStrategy::Bool) => Some(quote!(|v| {
            v.as_bool().ok_or_else(|| ::avrow::error::RuntimeError::unsupported_kind(
                #wire_key.to_string(), "BOOL", v.kind().label(),
            ))
        })),
        Some(TypeStrategy::Blob) => Some(quote!(|v| {
            v.as_b().map(<[u8]>::to_vec).ok_or_else(|| ::avrow::error::RuntimeError::unsupported_kind(
                #wire_key.to_string(), "B", v.kind().label(),
            ))
        })),
        None => {
            diagnostics.push(Diagnostic::new(
                "DM0007",
                format!("member `{field_ident}`: list/map elements of nested mapper type are not supported"),
                field_ident.span(),
            ));
            None
        }
    }
}

fn scalar_kind_type_tokens(kind: ScalarKind) -> TokenStream {
    match kind {
        ScalarKind::String => quote!(String),
        ScalarKind::Short => quote!(i16),
        ScalarKind::Int => quote!(i32),
        ScalarKind::Long => quote!(i64),
        ScalarKind::Byte => quote!(u8),
        ScalarKind::Float => quote!(f32),
        ScalarKind::Double => quote!(f64),
        ScalarKind::Decimal => quote!(::rust_decimal::Decimal),
        ScalarKind::Uuid => quote!(::uuid::Uuid),
        ScalarKind::TimeSpan => quote!(::avrow::duration::Duration),
        ScalarKind::DateTime => quote!(::chrono::DateTime<::chrono::Utc>),
        ScalarKind::DateTimeOffset => quote!(::chrono::DateTime<::chrono::FixedOffset>),
    }
}

fn render_construction(plan: &MapperPlan) -> TokenStream {
    use crate::analyze::ctor::ConstructionStrategy;

    match &plan.construction {
        ConstructionStrategy::StructLiteral => {
            let idents = plan.fields.iter().map(|f| &f.ident);
            let ty = &plan.ident;
            if plan.has_fully_ignored_fields {
                quote! {
                    #ty { #(#idents,)* ..::core::default::Default::default() }
                }
            } else {
                quote! {
                    #ty { #(#idents),* }
                }
            }
        }
        ConstructionStrategy::FunctionConstructor { name } => {
            let ty = &plan.ident;
            let idents = plan.fields.iter().map(|f| &f.ident);
            quote! {
                #ty::#name(#(#idents),*)
            }
        }
    }
}
