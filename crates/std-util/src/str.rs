use heck::{ToLowerCamelCase, ToSnakeCase};

pub fn snake_case(src: &str) -> String {
    src.to_snake_case()
}

/// Lower camel case: `space_station` becomes `spaceStation`.
pub fn camel_case(src: &str) -> String {
    src.to_lower_camel_case()
}

/// Pluralizes the last word of a snake_case identifier.
pub fn pluralize(src: &str) -> String {
    match src.rsplit_once('_') {
        Some((head, last)) => format!("{head}_{}", pluralizer::pluralize(last, 2, false)),
        None => pluralizer::pluralize(src, 2, false),
    }
}
