use super::ErrorSet;

#[derive(Debug, Default)]
pub(crate) struct ModelAttr {
    /// `#[reflect(accessors)]`: the type has a `#[relmap::accessors]` block
    pub(crate) accessors: bool,
}

impl ModelAttr {
    pub(super) fn populate_from_ast(&mut self, attrs: &[syn::Attribute]) -> syn::Result<()> {
        let mut errs = ErrorSet::new();

        for attr in attrs {
            if !attr.path().is_ident("reflect") {
                continue;
            }

            let res = attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("accessors") {
                    if self.accessors {
                        return Err(meta.error("duplicate `accessors` option"));
                    }
                    self.accessors = true;
                    Ok(())
                } else {
                    Err(meta.error("unknown `reflect` option; expected `accessors`"))
                }
            });

            if let Err(err) = res {
                errs.push(err);
            }
        }

        match errs.collect() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}
