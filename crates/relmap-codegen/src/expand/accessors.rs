use super::util;
use crate::schema::AccessorSet;

use proc_macro2::TokenStream;
use quote::quote;

pub(super) fn expand(relmap: &TokenStream, set: &AccessorSet) -> TokenStream {
    let self_ty = &set.self_ty;

    let entries = set.accessors.iter().map(|accessor| {
        let name = util::ident_name(&accessor.ident);
        let ty = &accessor.ty;
        let ty_name = util::type_name(ty);

        quote! {
            #relmap::Accessor {
                name: #name,
                ty: #ty_name,
                record: <#ty as #relmap::Extract>::RECORD,
            }
        }
    });

    let names = set
        .accessors
        .iter()
        .map(|accessor| util::ident_name(&accessor.ident));
    let idents = set.accessors.iter().map(|accessor| &accessor.ident);

    quote! {
        impl #relmap::Accessors for #self_ty {
            fn accessors() -> Vec<#relmap::Accessor> {
                vec![ #( #entries, )* ]
            }

            fn invoke(&self, name: &str) -> Option<#relmap::Slot> {
                match name {
                    #( #names => Some(#relmap::Extract::extract(&self.#idents())), )*
                    _ => None,
                }
            }
        }
    }
}
