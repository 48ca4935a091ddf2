mod expand;
mod schema;

use proc_macro2::TokenStream;

/// Expands `#[derive(Reflect)]`.
pub fn generate(input: TokenStream) -> syn::Result<TokenStream> {
    let item: syn::DeriveInput = syn::parse2(input)?;
    let model = schema::Model::from_ast(&item)?;

    Ok(expand::model(&model))
}

/// Expands `#[relmap::accessors]` on an inherent `impl` block. The block is
/// emitted unchanged, followed by the generated accessor table.
pub fn generate_accessors(args: TokenStream, input: TokenStream) -> syn::Result<TokenStream> {
    if !args.is_empty() {
        return Err(syn::Error::new_spanned(
            args,
            "`accessors` does not take arguments",
        ));
    }

    let item: syn::ItemImpl = syn::parse2(input)?;
    let accessors = schema::AccessorSet::from_ast(&item)?;

    Ok(expand::accessors(&item, &accessors))
}
