use super::{ErrorSet, Field, ModelAttr};

#[derive(Debug)]
pub(crate) enum ModelKind {
    /// A struct with named fields, the only kind that maps to a table
    Struct(Vec<Field>),
    Tuple,
    Unit,
    Enum,
}

#[derive(Debug)]
pub(crate) struct Model {
    /// Type identifier
    pub(crate) ident: syn::Ident,

    /// Struct-level attributes
    pub(crate) attrs: ModelAttr,

    pub(crate) kind: ModelKind,
}

impl Model {
    pub(crate) fn from_ast(ast: &syn::DeriveInput) -> syn::Result<Self> {
        // Generics are not supported yet
        if !ast.generics.params.is_empty() {
            return Err(syn::Error::new_spanned(
                &ast.generics,
                "reflected type generics are not supported",
            ));
        }

        let mut attrs = ModelAttr::default();
        let mut errs = ErrorSet::new();

        if let Err(err) = attrs.populate_from_ast(&ast.attrs) {
            errs.push(err);
        }

        let kind = match &ast.data {
            syn::Data::Struct(data) => match &data.fields {
                syn::Fields::Named(node) => {
                    let mut fields = vec![];

                    for node in &node.named {
                        match Field::from_ast(node) {
                            Ok(field) => fields.push(field),
                            Err(err) => errs.push(err),
                        }
                    }

                    ModelKind::Struct(fields)
                }
                syn::Fields::Unnamed(_) => ModelKind::Tuple,
                syn::Fields::Unit => ModelKind::Unit,
            },
            syn::Data::Enum(_) => ModelKind::Enum,
            syn::Data::Union(data) => {
                return Err(syn::Error::new_spanned(
                    data.union_token,
                    "unions cannot be reflected",
                ));
            }
        };

        if attrs.accessors && !matches!(kind, ModelKind::Struct(_)) {
            errs.push(syn::Error::new_spanned(
                &ast.ident,
                "#[reflect(accessors)] requires a struct with named fields",
            ));
        }

        if let Some(err) = errs.collect() {
            return Err(err);
        }

        Ok(Model {
            ident: ast.ident.clone(),
            attrs,
            kind,
        })
    }
}
