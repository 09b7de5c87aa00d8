use proc_macro2::Span;
use quote::quote;

///
/// Diagnostic
///
/// A single fatal finding raised by a pipeline stage, carrying the stable
/// ID from spec §5 so a test or a reviewer can grep for it. Rendered as a
/// `compile_error!` scoped to the failing mapper's `impl` block — one
/// mapper's diagnostics never suppress another mapper's expansion in the
/// same compilation (§4.8).
///
#[derive(Clone, Debug)]
pub struct Diagnostic {
    pub id: &'static str,
    pub message: String,
    pub span: Span,
}

impl Diagnostic {
    pub fn new(id: &'static str, message: impl Into<String>, span: Span) -> Self {
        Self {
            id,
            message: message.into(),
            span,
        }
    }

    pub fn to_syn_error(&self) -> syn::Error {
        syn::Error::new(self.span, format!("[{}] {}", self.id, self.message))
    }
}

/// Render a set of diagnostics as a standalone `compile_error!` token
/// stream, one invocation per diagnostic so `cargo build` reports every
/// failure instead of stopping at the first.
pub fn render_errors(diagnostics: &[Diagnostic]) -> proc_macro2::TokenStream {
    let errors = diagnostics.iter().map(Diagnostic::to_syn_error).map(syn::Error::into_compile_error);
    quote! { #(#errors)* }
}
