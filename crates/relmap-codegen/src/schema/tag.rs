/// One `key = "value"` pair of a `#[tag(...)]` attribute.
#[derive(Debug)]
pub(crate) struct Tag {
    pub(crate) key: String,
    pub(crate) value: syn::LitStr,
}

impl Tag {
    /// Parses `#[tag(db = "ship_name", json = "name")]`.
    pub(super) fn from_ast(attr: &syn::Attribute) -> syn::Result<Vec<Tag>> {
        let mut tags: Vec<Tag> = vec![];

        attr.parse_nested_meta(|meta| {
            let Some(key) = meta.path.get_ident() else {
                return Err(meta.error("expected `key = \"value\"`"));
            };
            let key = key.to_string();

            if tags.iter().any(|tag| tag.key == key) {
                return Err(meta.error(format!("duplicate tag `{key}`")));
            }

            let value: syn::LitStr = meta.value()?.parse()?;
            tags.push(Tag { key, value });
            Ok(())
        })?;

        Ok(tags)
    }
}
