extern crate proc_macro;

use proc_macro::TokenStream;

#[proc_macro_derive(Reflect, attributes(key, tag, reflect))]
pub fn derive_reflect(input: TokenStream) -> TokenStream {
    match relmap_codegen::generate(input.into()) {
        Ok(output) => output.into(),
        Err(e) => e.to_compile_error().into(),
    }
}

#[proc_macro_attribute]
pub fn accessors(args: TokenStream, input: TokenStream) -> TokenStream {
    match relmap_codegen::generate_accessors(args.into(), input.into()) {
        Ok(output) => output.into(),
        Err(e) => e.to_compile_error().into(),
    }
}
