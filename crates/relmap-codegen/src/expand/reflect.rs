use super::{util, Expand};
use crate::schema::{Field, ModelKind};

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_reflect_impl(&self) -> TokenStream {
        let relmap = &self.relmap;
        let model_ident = &self.model.ident;

        let body = match &self.model.kind {
            ModelKind::Struct(fields) => self.expand_struct_reflect(fields),
            ModelKind::Tuple => self.expand_opaque_reflect(quote!(Tuple)),
            ModelKind::Unit => self.expand_opaque_reflect(quote!(Unit)),
            ModelKind::Enum => self.expand_opaque_reflect(quote!(Enum)),
        };

        quote! {
            impl #relmap::Reflect for #model_ident {
                #body
            }
        }
    }

    /// Derived types nested in another derived type are records, which
    /// evaluation skips.
    pub(super) fn expand_extract_impl(&self) -> TokenStream {
        let relmap = &self.relmap;
        let model_ident = &self.model.ident;

        quote! {
            impl #relmap::Extract for #model_ident {
                const RECORD: bool = true;

                fn extract(&self) -> #relmap::Slot {
                    #relmap::Slot::Record
                }
            }
        }
    }

    fn expand_struct_reflect(&self, fields: &[Field]) -> TokenStream {
        let relmap = &self.relmap;
        let model_name = util::ident_name(&self.model.ident);
        let members = fields.iter().map(|field| self.expand_member(field));

        let names = fields.iter().map(|field| util::ident_name(&field.ident));
        let idents = fields.iter().map(|field| &field.ident);

        let (accessors, call) = if self.model.attrs.accessors {
            (
                quote!(<Self as #relmap::Accessors>::accessors()),
                quote! {
                    fn call(&self, name: &str) -> Option<#relmap::Slot> {
                        <Self as #relmap::Accessors>::invoke(self, name)
                    }
                },
            )
        } else {
            (quote!(vec![]), quote!())
        };

        quote! {
            fn shape() -> #relmap::Shape {
                #relmap::Shape {
                    type_name: <Self as #relmap::Reflect>::type_name(),
                    ident: #model_name,
                    kind: #relmap::Kind::Struct,
                    members: vec![ #( #members, )* ],
                    accessors: #accessors,
                }
            }

            fn member(&self, name: &str) -> Option<#relmap::Slot> {
                match name {
                    #( #names => Some(#relmap::Extract::extract(&self.#idents)), )*
                    _ => None,
                }
            }

            #call
        }
    }

    fn expand_member(&self, field: &Field) -> TokenStream {
        let relmap = &self.relmap;
        let name = util::ident_name(&field.ident);
        let ty = util::type_name(&field.ty);
        let key = field.attrs.key.is_some();

        let tags = field.attrs.tags.iter().map(|tag| {
            let key = &tag.key;
            let value = &tag.value;
            quote!(#relmap::Tag { key: #key, value: #value })
        });

        quote! {
            #relmap::Member {
                name: #name,
                ty: #ty,
                key: #key,
                tags: vec![ #( #tags, )* ],
            }
        }
    }

    fn expand_opaque_reflect(&self, kind: TokenStream) -> TokenStream {
        let relmap = &self.relmap;
        let model_name = util::ident_name(&self.model.ident);

        quote! {
            fn shape() -> #relmap::Shape {
                #relmap::Shape::opaque(
                    <Self as #relmap::Reflect>::type_name(),
                    #model_name,
                    #relmap::Kind::#kind,
                )
            }

            fn member(&self, _name: &str) -> Option<#relmap::Slot> {
                None
            }
        }
    }
}
