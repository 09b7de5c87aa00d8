use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Fields};

/// `#[derive(AvEnum)]`: implements `avrow::runtime::AvEnum` for a fieldless
/// enum, using each variant's declared (or implicit, 0-based) discriminant
/// for the `"D"` wire format and its identifier text for the `"G"` format.
/// Grounded on the same single-purpose, non-darling derive shape as this
/// workspace's arithmetic-operator derives (`ops.rs`, `display.rs`).
pub fn derive_av_enum(input: TokenStream) -> TokenStream {
    let input: DeriveInput = match syn::parse2(input) {
        Ok(input) => input,
        Err(err) => return err.to_compile_error(),
    };

    let Data::Enum(data) = &input.data else {
        return syn::Error::new_spanned(&input.ident, "AvEnum can only be derived for enums")
            .to_compile_error();
    };

    let ident = &input.ident;
    let mut next_discriminant: i64 = 0;
    let mut name_arms = Vec::new();
    let mut from_name_arms = Vec::new();
    let mut discriminant_arms = Vec::new();
    let mut from_discriminant_arms = Vec::new();

    for variant in &data.variants {
        if !matches!(variant.fields, Fields::Unit) {
            return syn::Error::new_spanned(
                &variant.ident,
                "AvEnum variants must not carry fields",
            )
            .to_compile_error();
        }

        let discriminant = if let Some((_, syn::Expr::Lit(lit))) = &variant.discriminant {
            if let syn::Lit::Int(int) = &lit.lit {
                int.base10_parse::<i64>().unwrap_or(next_discriminant)
            } else {
                next_discriminant
            }
        } else {
            next_discriminant
        };
        next_discriminant = discriminant + 1;

        let variant_ident = &variant.ident;
        let variant_name = variant_ident.to_string();

        name_arms.push(quote! { Self::#variant_ident => #variant_name, });
        from_name_arms.push(quote! { #variant_name => Some(Self::#variant_ident), });
        discriminant_arms.push(quote! { Self::#variant_ident => #discriminant, });
        from_discriminant_arms.push(quote! { #discriminant => Some(Self::#variant_ident), });
    }

    quote! {
        impl ::avrow::runtime::AvEnum for #ident {
            fn to_name(&self) -> &'static str {
                match self {
                    #(#name_arms)*
                }
            }

            fn from_name(name: &str) -> Option<Self> {
                match name {
                    #(#from_name_arms)*
                    _ => None,
                }
            }

            fn to_discriminant(&self) -> i64 {
                match self {
                    #(#discriminant_arms)*
                }
            }

            fn from_discriminant(discriminant: i64) -> Option<Self> {
                match discriminant {
                    #(#from_discriminant_arms)*
                    _ => None,
                }
            }
        }
    }
}
