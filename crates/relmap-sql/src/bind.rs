use relmap_core::{Error, Evaluation, Result, Value};

use regex::Regex;

/// Replaces every `:name` parameter in `sql` with `placeholder` and collects
/// the matching values from `evaluation`.
///
/// `names` lists the column names a parameter may refer to. Markers are
/// matched against them longest name first, so a column named `speed$unit`
/// is not read as `speed` followed by `$unit`. A `:` that starts no known
/// name is left as is.
///
/// Parameters are resolved in a single left-to-right pass, so the n-th
/// argument always belongs to the n-th placeholder. With `ordered` set, each
/// placeholder is suffixed with its 1-based position; repeated names are
/// numbered separately.
///
/// Fails, naming every unresolved parameter, if `evaluation` has no entry
/// for some name.
pub fn bind<'a>(
    sql: &str,
    names: impl IntoIterator<Item = &'a str>,
    evaluation: &Evaluation,
    placeholder: &str,
    ordered: bool,
) -> Result<(String, Vec<Value>)> {
    let Some(markers) = markers(names)? else {
        return Ok((sql.to_string(), vec![]));
    };

    let mut dst = String::with_capacity(sql.len());
    let mut args = vec![];
    let mut missing: Vec<String> = vec![];
    let mut last = 0;

    for found in markers.find_iter(sql) {
        dst.push_str(&sql[last..found.start()]);
        last = found.end();

        let name = &found.as_str()[1..];

        let Some(value) = evaluation.get(name) else {
            if !missing.iter().any(|m| m == name) {
                missing.push(name.to_string());
            }
            continue;
        };

        args.push(value.clone());
        dst.push_str(placeholder);

        if ordered {
            dst.push_str(&args.len().to_string());
        }
    }

    if !missing.is_empty() {
        return Err(Error::missing_named_parameters(missing));
    }

    dst.push_str(&sql[last..]);

    tracing::trace!(sql = %dst, args = args.len(), "bound parameters");

    Ok((dst, args))
}

/// `:(?:name1|name2|...)` over the non-empty `names`, longest first. The
/// regex engine takes the first alternative that matches, which makes the
/// longest known name win.
fn markers<'a>(names: impl IntoIterator<Item = &'a str>) -> Result<Option<Regex>> {
    let mut names: Vec<&str> = names
        .into_iter()
        .filter(|name| !name.is_empty())
        .collect();

    if names.is_empty() {
        return Ok(None);
    }

    names.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    names.dedup();

    let alternatives: Vec<String> = names.into_iter().map(regex::escape).collect();

    Ok(Some(Regex::new(&format!(":(?:{})", alternatives.join("|")))?))
}
