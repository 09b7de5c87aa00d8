//! Proc-macro crate for `avrow`: `#[derive(Mapper)]` generates
//! `ToItem`/`FromItem` implementations bridging a model struct and the
//! attribute-value `Item` wire type; `#[derive(AvEnum)]` generates the
//! runtime's fieldless-enum codec trait.

mod analyze;
mod derive_enum;
mod diagnostics;
mod registry;
mod render;
mod scan;
mod spec;

use proc_macro::TokenStream;
use syn::DeriveInput;

use diagnostics::{render_errors, Diagnostic};
use registry::RegisteredMapper;
use scan::attrs::HooksMode;
use scan::mapper_decl::MapperDescriptor;
use spec::builder::MapperPlan;

#[proc_macro_derive(Mapper, attributes(mapper, field))]
pub fn derive_mapper(input: TokenStream) -> TokenStream {
    let input: DeriveInput = match syn::parse(input) {
        Ok(input) => input,
        Err(err) => return err.to_compile_error().into(),
    };

    match expand_mapper(&input) {
        Ok(tokens) => tokens.into(),
        Err(diagnostics) => render_errors(&diagnostics).into(),
    }
}

#[proc_macro_derive(AvEnum)]
pub fn derive_av_enum(input: TokenStream) -> TokenStream {
    derive_enum::derive_av_enum(input.into()).into()
}

fn expand_mapper(input: &DeriveInput) -> Result<proc_macro2::TokenStream, Vec<Diagnostic>> {
    let descriptor = MapperDescriptor::parse(input)?;
    let plan = MapperPlan::build(&descriptor)?;

    registry::MapperRegistry::register(
        &descriptor.ident.to_string(),
        RegisteredMapper {
            has_hooks: !matches!(descriptor.hooks, HooksMode::Off),
            nested_type_idents: plan.nested_type_names(),
            field_manifest: plan.field_manifest(),
        },
    );

    let to_item_fn = render::to_item::render(&plan)?;
    let from_item_fn = render::from_item::render(&plan)?;

    let ident = &plan.ident;
    let hooks_impl = matches!(plan.hooks, HooksMode::Auto)
        .then(|| quote::quote!(impl ::avrow::traits::MapperHooks for #ident {}))
        .unwrap_or_default();

    Ok(quote::quote! {
        impl ::avrow::traits::ToItem for #ident {
            #to_item_fn
        }

        impl ::avrow::traits::FromItem for #ident {
            #from_item_fn
        }

        #hooks_impl
    })
}
