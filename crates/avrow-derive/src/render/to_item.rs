use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::Type;

use crate::analyze::collection::{CollectionStrategy, KeyedShape, ListShape};
use crate::analyze::nested::NestedResolution;
use crate::analyze::type_strategy::{resolve_scalar, ScalarKind, TypeStrategy};
use crate::diagnostics::Diagnostic;
use crate::render::kind_tokens;
use crate::scan::attrs::IgnoreArg;
use crate::spec::builder::{FieldPlan, FieldStrategy, MapperPlan};

/// Render the full `fn to_item(&self) -> RuntimeResult<Item>` body: one
/// `item.insert`/`runtime::set_*` statement per member plus hook calls
/// bracketing the member statements, in declaration order (spec §9).
pub fn render(plan: &MapperPlan) -> Result<TokenStream, Vec<Diagnostic>> {
    let mut diagnostics = Vec::new();
    let capacity = plan.fields.len();

    let statements: Vec<TokenStream> = plan
        .fields
        .iter()
        .map(|field| render_field(plan, field, &mut diagnostics))
        .collect();

    if !diagnostics.is_empty() {
        return Err(diagnostics);
    }

    let hooks_enabled = !matches!(plan.hooks, crate::scan::attrs::HooksMode::Off);
    let before_hook = hooks_enabled
        .then(|| quote!(::avrow::traits::MapperHooks::before_to_item(self, &mut item);))
        .unwrap_or_default();
    let after_hook = hooks_enabled
        .then(|| quote!(::avrow::traits::MapperHooks::after_to_item(self, &mut item);))
        .unwrap_or_default();

    Ok(quote! {
        fn to_item(&self) -> ::avrow::error::RuntimeResult<::avrow::item::Item> {
            let mut item = ::avrow::item::Item::with_capacity(#capacity);
            #before_hook
            #(#statements)*
            #after_hook
            Ok(item)
        }
    })
}

fn render_field(plan: &MapperPlan, field: &FieldPlan, diagnostics: &mut Vec<Diagnostic>) -> TokenStream {
    // Direction `ToItemOnly` ignore: this member is entirely absent from
    // `to_item`'s output (spec §4.7's ignore interaction table).
    if matches!(field.ignore, IgnoreArg::ToItemOnly) {
        return TokenStream::new();
    }

    let ident = &field.ident;
    let wire_key = &field.wire_key;

    // A custom serialize method completely short-circuits the standard
    // encoding for this member (spec §4.3 invariant c, §4.7): the member
    // is never also analyzed for a standard strategy in this direction.
    if let Some(to_method) = &field.to_method {
        return quote! {
            item.insert(#wire_key, self.#to_method());
        };
    }

    let omit_null = plan.omit_null;
    let omit_empty_strings = plan.omit_empty_strings;
    let omit_empty_collections = plan.omit_empty_collections;
    let kind = kind_tokens(field.kind);

    match &field.strategy {
        FieldStrategy::Scalar(kind_arg) => render_scalar(*kind_arg, ident, wire_key, field, omit_empty_strings, omit_null, kind),
        FieldStrategy::Bool => {
            let value = if field.is_optional {
                quote!(self.#ident)
            } else {
                quote!(Some(self.#ident))
            };
            quote! {
                ::avrow::runtime::set_bool(&mut item, #wire_key, #value, #omit_null, #kind);
            }
        }
        FieldStrategy::Blob => {
            let value = if field.is_optional {
                quote!(self.#ident.as_deref())
            } else {
                quote!(Some(self.#ident.as_slice()))
            };
            quote! {
                ::avrow::runtime::set_blob(&mut item, #wire_key, #value, #omit_null);
            }
        }
        FieldStrategy::Enum { format } => {
            let format = crate::render::enum_format_tokens(*format);
            let value = if field.is_optional {
                quote!(self.#ident.as_ref())
            } else {
                quote!(Some(&self.#ident))
            };
            quote! {
                ::avrow::runtime::set_enum(&mut item, #wire_key, #value, #omit_null, #format);
            }
        }
        FieldStrategy::Nested(resolution) => render_nested(ident, wire_key, field.is_optional, omit_null, resolution),
        FieldStrategy::Collection(collection) => render_collection(
            ident,
            wire_key,
            field.is_optional,
            omit_null,
            omit_empty_collections,
            collection,
            diagnostics,
        ),
    }
}

fn render_scalar(
    kind_arg: ScalarKind,
    ident: &syn::Ident,
    wire_key: &str,
    field: &FieldPlan,
    omit_empty_strings: bool,
    omit_null: bool,
    kind: TokenStream,
) -> TokenStream {
    let value = if field.is_optional {
        quote!(self.#ident.as_ref())
    } else {
        quote!(Some(&self.#ident))
    };

    if let Some(format) = format_for_kind(kind_arg, field.format.as_deref()) {
        let set_fn = format_ident!("set_{}_fmt", kind_arg.fn_fragment());
        return quote! {
            ::avrow::runtime::#set_fn(&mut item, #wire_key, #value, #omit_empty_strings, #omit_null, #kind, #format);
        };
    }

    let set_fn = format_ident!("set_{}", kind_arg.fn_fragment());
    quote! {
        ::avrow::runtime::#set_fn(&mut item, #wire_key, #value, #omit_empty_strings, #omit_null, #kind);
    }
}

/// Only the temporal/duration/uuid scalar families carry a format literal
/// (spec §4.3, §4.9); every other scalar kind renders through the plain
/// (non-format-aware) helper regardless of what `field.format` holds.
fn format_for_kind(kind_arg: ScalarKind, format: Option<&str>) -> Option<TokenStream> {
    matches!(kind_arg, ScalarKind::Uuid | ScalarKind::TimeSpan | ScalarKind::DateTime | ScalarKind::DateTimeOffset)
        .then(|| format.map(|f| quote!(Some(#f))).unwrap_or_else(|| quote!(None)))
}

fn render_nested(
    ident: &syn::Ident,
    wire_key: &str,
    is_optional: bool,
    omit_null: bool,
    resolution: &NestedResolution,
) -> TokenStream {
    match resolution {
        // A `Cycle`/`ForcedInlineUnregistered` resolution already produced
        // a fatal diagnostic in the Spec Builder; `MapperPlan::build`
        // never reaches the renderer in that case.
        NestedResolution::Cycle { .. } | NestedResolution::ForcedInlineUnregistered { .. } => {
            debug_assert!(false, "fatal nested resolution reached the renderer");
            TokenStream::new()
        }
        NestedResolution::Delegate { .. } => {
            if is_optional {
                quote! {
                    match &self.#ident {
                        Some(nested) => {
                            item.insert(#wire_key, ::avrow::value::Value::from(::avrow::traits::ToItem::to_item(nested)?));
                        }
                        None => {
                            if !#omit_null {
                                item.insert(#wire_key, ::avrow::value::Value::Null);
                            }
                        }
                    }
                }
            } else {
                quote! {
                    item.insert(#wire_key, ::avrow::value::Value::from(::avrow::traits::ToItem::to_item(&self.#ident)?));
                }
            }
        }
        NestedResolution::InlineExpanded { manifest, .. } => {
            render_inline_expanded(ident, is_optional, omit_null, manifest)
        }
    }
}

/// Shape 3 of spec §4.8: flatten the nested value's own `to_item()`
/// output directly into the parent item instead of wrapping it under one
/// `M` key, applying each manifest entry's rename along the way.
fn render_inline_expanded(
    ident: &syn::Ident,
    is_optional: bool,
    omit_null: bool,
    manifest: &[crate::analyze::nested::InlineFieldSpec],
) -> TokenStream {
    let default_keys = manifest.iter().map(|m| &m.default_wire_key);
    let final_keys = manifest.iter().map(|m| &m.final_wire_key);

    let flatten = quote! {
        for (__key, __value) in ::avrow::traits::ToItem::to_item(__inline_nested)?.into_iter() {
            let __final_key: &str = match __key.as_str() {
                #(#default_keys => #final_keys,)*
                other => other,
            };
            item.insert(__final_key, __value);
        }
    };

    if is_optional {
        quote! {
            match &self.#ident {
                Some(__inline_nested) => {
                    #flatten
                }
                None => {
                    if !#omit_null {
                        // There is no single wire key representing an absent
                        // inline-expanded member; the manifest's own keys
                        // simply never get inserted.
                    }
                }
            }
        }
    } else {
        quote! {
            let __inline_nested = &self.#ident;
            #flatten
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn render_collection(
    ident: &syn::Ident,
    wire_key: &str,
    is_optional: bool,
    omit_null: bool,
    omit_empty_collections: bool,
    collection: &CollectionStrategy,
    diagnostics: &mut Vec<Diagnostic>,
) -> TokenStream {
    match collection {
        CollectionStrategy::List { element, shape } => {
            let Some(encode) = element_encode_expr(element, diagnostics, ident) else {
                return TokenStream::new();
            };
            let (prelude, list_value) = list_value_tokens(ident, is_optional, shape);
            quote! {
                {
                    #prelude
                    ::avrow::runtime::set_list(&mut item, #wire_key, #list_value, #omit_empty_collections, #omit_null, #encode);
                }
            }
        }
        CollectionStrategy::StringSet { shape } => {
            let (prelude, set_value) = set_value_tokens(ident, is_optional, *shape);
            quote! {
                {
                    #prelude
                    ::avrow::runtime::set_string_set(&mut item, #wire_key, #set_value, #omit_null);
                }
            }
        }
        CollectionStrategy::BinarySet { shape } => {
            let (prelude, set_value) = set_value_tokens(ident, is_optional, *shape);
            quote! {
                {
                    #prelude
                    ::avrow::runtime::set_binary_set(&mut item, #wire_key, #set_value, #omit_null);
                }
            }
        }
        CollectionStrategy::NumberSet { shape, .. } => {
            let (prelude, set_value) = set_value_tokens(ident, is_optional, *shape);
            quote! {
                {
                    #prelude
                    ::avrow::runtime::set_number_set(&mut item, #wire_key, #set_value, #omit_null, |v| ::avrow::runtime::TextScalar::encode_text(v));
                }
            }
        }
        CollectionStrategy::Map { value, shape } => {
            let Some(encode) = element_encode_expr(value, diagnostics, ident) else {
                return TokenStream::new();
            };
            let (prelude, map_value) = map_value_tokens(ident, is_optional, *shape);
            quote! {
                {
                    #prelude
                    ::avrow::runtime::set_map(&mut item, #wire_key, #map_value, #omit_empty_collections, #omit_null, #encode);
                }
            }
        }
    }
}

/// `Vec<T>`/`[T; N]` both expose an inherent `.as_slice()`, so they share
/// one zero-copy branch; `VecDeque<T>` has no contiguous-slice view
/// without `&mut self`, so it is collected into a temporary `Vec` first
/// (requires `T: Clone`).
fn list_value_tokens(ident: &syn::Ident, is_optional: bool, shape: &ListShape) -> (TokenStream, TokenStream) {
    match shape {
        ListShape::Vec | ListShape::Array(_) => {
            let value = if is_optional {
                quote!(self.#ident.as_ref().map(|__c| __c.as_slice()))
            } else {
                quote!(Some(self.#ident.as_slice()))
            };
            (TokenStream::new(), value)
        }
        ListShape::VecDeque => {
            if is_optional {
                let prelude = quote! {
                    let __coll_tmp: Option<Vec<_>> = self.#ident.as_ref().map(|__c| __c.iter().cloned().collect());
                };
                (prelude, quote!(__coll_tmp.as_deref()))
            } else {
                let prelude = quote! {
                    let __coll_tmp: Vec<_> = self.#ident.iter().cloned().collect();
                };
                (prelude, quote!(Some(__coll_tmp.as_slice())))
            }
        }
    }
}

/// `BTreeSet<T>` is the runtime set helpers' own shape; a `HashSet<T>`
/// field is cloned into a temporary `BTreeSet` first (requires `T: Clone
/// + Ord`, already implied by every supported element scalar kind).
fn set_value_tokens(ident: &syn::Ident, is_optional: bool, shape: KeyedShape) -> (TokenStream, TokenStream) {
    match shape {
        KeyedShape::BTree => {
            let value = if is_optional {
                quote!(self.#ident.as_ref())
            } else {
                quote!(Some(&self.#ident))
            };
            (TokenStream::new(), value)
        }
        KeyedShape::Hash => {
            if is_optional {
                let prelude = quote! {
                    let __coll_tmp: Option<::std::collections::BTreeSet<_>> =
                        self.#ident.as_ref().map(|__c| __c.iter().cloned().collect());
                };
                (prelude, quote!(__coll_tmp.as_ref()))
            } else {
                let prelude = quote! {
                    let __coll_tmp: ::std::collections::BTreeSet<_> = self.#ident.iter().cloned().collect();
                };
                (prelude, quote!(Some(&__coll_tmp)))
            }
        }
    }
}

/// `BTreeMap<String, T>` is the runtime map helper's own shape; a
/// `HashMap<String, T>` field is cloned into a temporary `BTreeMap` first
/// (requires `T: Clone`).
fn map_value_tokens(ident: &syn::Ident, is_optional: bool, shape: KeyedShape) -> (TokenStream, TokenStream) {
    match shape {
        KeyedShape::BTree => {
            let value = if is_optional {
                quote!(self.#ident.as_ref())
            } else {
                quote!(Some(&self.#ident))
            };
            (TokenStream::new(), value)
        }
        KeyedShape::Hash => {
            if is_optional {
                let prelude = quote! {
                    let __coll_tmp: Option<::std::collections::BTreeMap<String, _>> = self
                        .#ident
                        .as_ref()
                        .map(|__c| __c.iter().map(|(k, v)| (k.clone(), v.clone())).collect());
                };
                (prelude, quote!(__coll_tmp.as_ref()))
            } else {
                let prelude = quote! {
                    let __coll_tmp: ::std::collections::BTreeMap<String, _> =
                        self.#ident.iter().map(|(k, v)| (k.clone(), v.clone())).collect();
                };
                (prelude, quote!(Some(&__coll_tmp)))
            }
        }
    }
}

/// Scalar/bool/blob list and map values encode directly; a nested-mapper
/// element would need `?`-fallible encoding inside a non-fallible closure,
/// which this generator does not support — flagged as DM0007 rather than
/// emitting code that silently drops the element's own errors.
fn element_encode_expr(element_ty: &Type, diagnostics: &mut Vec<Diagnostic>, field_ident: &syn::Ident) -> Option<TokenStream> {
    match resolve_scalar(element_ty) {
        Some(TypeStrategy::Scalar(scalar_kind)) => {
            let kind = kind_tokens(scalar_kind.default_kind());
            Some(quote!(|v| ::avrow::runtime::value_for_kind(
                #kind,
                ::avrow::runtime::TextScalar::encode_text(v)
            )))
        }
        Some(TypeStrategy::Bool) => Some(quote!(|v: &bool| ::avrow::value::Value::Bool(*v))),
        Some(TypeStrategy::Blob) => Some(quote!(|v: &Vec<u8>| ::avrow::value::Value::B(v.clone()))),
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
