mod accessors;
mod reflect;
mod util;

use crate::schema::{AccessorSet, Model};

use proc_macro2::TokenStream;
use quote::quote;

struct Expand<'a> {
    /// The model being expanded
    model: &'a Model,

    /// Path prefix for relmap types
    relmap: TokenStream,
}

impl Expand<'_> {
    fn expand(&self) -> TokenStream {
        let reflect_impl = self.expand_reflect_impl();
        let extract_impl = self.expand_extract_impl();

        wrap_in_const(quote! {
            #reflect_impl
            #extract_impl
        })
    }
}

pub(super) fn model(model: &Model) -> TokenStream {
    Expand {
        model,
        relmap: quote!(_relmap::codegen_support),
    }
    .expand()
}

pub(super) fn accessors(item: &syn::ItemImpl, accessors: &AccessorSet) -> TokenStream {
    let relmap = quote!(_relmap::codegen_support);
    let accessors_impl = accessors::expand(&relmap, accessors);
    let generated = wrap_in_const(accessors_impl);

    quote! {
        #item
        #generated
    }
}

fn wrap_in_const(code: TokenStream) -> TokenStream {
    quote! {
        const _: () = {
            use relmap as _relmap;
            #code
        };
    }
}
