//! Code Renderer (spec §4.8): turns a `MapperPlan` into the `to_item`/
//! `from_item` bodies, one expression per member, in declaration order.

pub mod from_item;
pub mod to_item;

use proc_macro2::TokenStream;
use quote::quote;

use crate::scan::attrs::{AttributeKindArg, EnumFormatArg};
use crate::spec::builder::ResolvedRequiredness;

pub fn kind_tokens(kind: AttributeKindArg) -> TokenStream {
    match kind {
        AttributeKindArg::S => quote!(::avrow::AttributeKind::S),
        AttributeKindArg::N => quote!(::avrow::AttributeKind::N),
        AttributeKindArg::B => quote!(::avrow::AttributeKind::B),
        AttributeKindArg::Bool => quote!(::avrow::AttributeKind::Bool),
        AttributeKindArg::Null => quote!(::avrow::AttributeKind::Null),
        AttributeKindArg::L => quote!(::avrow::AttributeKind::L),
        AttributeKindArg::M => quote!(::avrow::AttributeKind::M),
        AttributeKindArg::Ss => quote!(::avrow::AttributeKind::Ss),
        AttributeKindArg::Ns => quote!(::avrow::AttributeKind::Ns),
        AttributeKindArg::Bs => quote!(::avrow::AttributeKind::Bs),
    }
}

pub fn requiredness_tokens(requiredness: ResolvedRequiredness) -> TokenStream {
    match requiredness {
        ResolvedRequiredness::Required => quote!(::avrow::Requiredness::Required),
        ResolvedRequiredness::Optional => quote!(::avrow::Requiredness::Optional),
    }
}

pub fn enum_format_tokens(format: EnumFormatArg) -> TokenStream {
    match format {
        EnumFormatArg::G => quote!(::avrow::runtime::EnumFormat::Name),
        EnumFormatArg::D => quote!(::avrow::runtime::EnumFormat::Discriminant),
    }
}
