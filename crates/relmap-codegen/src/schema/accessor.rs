/// A `pub fn name(&self) -> T` method of a `#[relmap::accessors]` block.
#[derive(Debug)]
pub(crate) struct Accessor {
    pub(crate) ident: syn::Ident,

    /// Return type
    pub(crate) ty: syn::Type,
}

#[derive(Debug)]
pub(crate) struct AccessorSet {
    /// The type the block is implemented on
    pub(crate) self_ty: syn::Type,

    pub(crate) accessors: Vec<Accessor>,
}

impl AccessorSet {
    pub(crate) fn from_ast(item: &syn::ItemImpl) -> syn::Result<Self> {
        if let Some((_, path, _)) = &item.trait_ {
            return Err(syn::Error::new_spanned(
                path,
                "#[relmap::accessors] must be placed on an inherent impl block",
            ));
        }

        if !item.generics.params.is_empty() {
            return Err(syn::Error::new_spanned(
                &item.generics,
                "reflected type generics are not supported",
            ));
        }

        let accessors = item
            .items
            .iter()
            .filter_map(|item| match item {
                syn::ImplItem::Fn(method) => Accessor::from_ast(method),
                _ => None,
            })
            .collect();

        Ok(AccessorSet {
            self_ty: (*item.self_ty).clone(),
            accessors,
        })
    }
}

impl Accessor {
    /// Returns `None` for methods that are not zero-argument public
    /// accessors. Those are left alone.
    fn from_ast(method: &syn::ImplItemFn) -> Option<Accessor> {
        let sig = &method.sig;

        if !matches!(method.vis, syn::Visibility::Public(_))
            || sig.asyncness.is_some()
            || sig.unsafety.is_some()
            || !sig.generics.params.is_empty()
            || sig.inputs.len() != 1
        {
            return None;
        }

        let Some(syn::FnArg::Receiver(receiver)) = sig.inputs.first() else {
            return None;
        };

        // `&self` only
        if receiver.colon_token.is_some()
            || receiver.mutability.is_some()
            || receiver.reference.is_none()
        {
            return None;
        }

        let syn::ReturnType::Type(_, ty) = &sig.output else {
            return None;
        };

        if matches!(**ty, syn::Type::ImplTrait(_)) {
            return None;
        }

        Some(Accessor {
            ident: sig.ident.clone(),
            ty: (**ty).clone(),
        })
    }
}
