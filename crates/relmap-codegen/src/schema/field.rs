use super::{ErrorSet, Tag};

#[derive(Debug)]
pub(crate) struct Field {
    /// Field identifier, also the member name
    pub(crate) ident: syn::Ident,

    /// Field type
    pub(crate) ty: syn::Type,

    /// Field attributes
    pub(crate) attrs: FieldAttr,
}

#[derive(Debug, Default)]
pub(crate) struct FieldAttr {
    /// The field is annotated with `#[key]`
    pub(crate) key: Option<syn::Attribute>,

    /// `#[tag(...)]` pairs, in declaration order
    pub(crate) tags: Vec<Tag>,
}

impl Field {
    pub(super) fn from_ast(field: &syn::Field) -> syn::Result<Self> {
        let Some(ident) = &field.ident else {
            return Err(syn::Error::new_spanned(field, "reflected fields must be named"));
        };

        let mut errs = ErrorSet::new();
        let mut attrs = FieldAttr::default();

        for attr in &field.attrs {
            if attr.path().is_ident("key") {
                if attrs.key.is_some() {
                    errs.push(syn::Error::new_spanned(attr, "duplicate #[key] attribute"));
                } else if !matches!(attr.meta, syn::Meta::Path(_)) {
                    errs.push(syn::Error::new_spanned(attr, "#[key] takes no arguments"));
                } else {
                    attrs.key = Some(attr.clone());
                }
            } else if attr.path().is_ident("tag") {
                match Tag::from_ast(attr) {
                    Ok(tags) => {
                        for tag in tags {
                            if attrs.tags.iter().any(|t| t.key == tag.key) {
                                errs.push(syn::Error::new_spanned(
                                    &tag.value,
                                    format!("duplicate tag `{}`", tag.key),
                                ));
                            } else {
                                attrs.tags.push(tag);
                            }
                        }
                    }
                    Err(err) => errs.push(err),
                }
            }
        }

        if let Some(err) = errs.collect() {
            return Err(err);
        }

        Ok(Field {
            ident: ident.clone(),
            ty: field.ty.clone(),
            attrs,
        })
    }
}
