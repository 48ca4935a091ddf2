use quote::ToTokens;

/// Source text of `ty` with the token spacing removed, e.g.
/// `Option<Vec<u8>>` rather than `Option < Vec < u8 > >`.
pub(crate) fn type_name(ty: &syn::Type) -> String {
    let mut name = ty.to_token_stream().to_string();

    for (from, to) in [
        (" <", "<"),
        ("< ", "<"),
        (" >", ">"),
        (" ::", "::"),
        (":: ", "::"),
        (" ,", ","),
        ("& ", "&"),
        ("[ ", "["),
        (" ]", "]"),
        (" ;", ";"),
    ] {
        name = name.replace(from, to);
    }

    name
}

/// Identifier text without a raw identifier prefix.
pub(crate) fn ident_name(ident: &syn::Ident) -> String {
    let name = ident.to_string();
    name.strip_prefix("r#").map(String::from).unwrap_or(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_names_are_compact() {
        let cases: [(syn::Type, &str); 4] = [
            (syn::parse_quote!(String), "String"),
            (syn::parse_quote!(Option<Vec<u8>>), "Option<Vec<u8>>"),
            (syn::parse_quote!(&'static str), "&'static str"),
            (syn::parse_quote!(std::sync::Arc<Engine>), "std::sync::Arc<Engine>"),
        ];

        for (ty, expected) in cases {
            assert_eq!(type_name(&ty), expected);
        }
    }
}
