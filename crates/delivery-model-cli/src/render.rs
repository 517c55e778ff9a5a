use std::collections::BTreeMap;
use std::io::{self, Write};
use std::sync::OnceLock;

use delivery_model_engine::ResolvedContentItemData;
use regex::{Captures, Regex};

use crate::dynamic::DynamicItem;

fn placeholder_regex() -> &'static Regex {
    static PLACEHOLDER_REGEX: OnceLock<Regex> = OnceLock::new();
    PLACEHOLDER_REGEX
        .get_or_init(|| Regex::new(r"\{([A-Za-z0-9_]+)\}").expect("Invalid placeholder regex"))
}

/// Replaces `{name}` placeholders with `lookup(name)`. Placeholders without
/// a value are left as written.
pub fn fill_template(template: &str, lookup: impl Fn(&str) -> Option<String>) -> String {
    placeholder_regex()
        .replace_all(template, |caps: &Captures<'_>| {
            lookup(&caps[1]).unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

/// Renders an inline item with the template of its content type.
pub fn render_inline_item(
    templates: &BTreeMap<String, String>,
    data: &ResolvedContentItemData<'_, DynamicItem>,
) -> String {
    let Some(template) = templates.get(&data.item.content_type) else {
        log::debug!(
            "No template for content type '{}', dropping '{}'",
            data.item.content_type,
            data.codename
        );
        return String::new();
    };

    fill_template(template, |name| match name {
        "codename" => Some(data.codename.to_string()),
        _ => data.item.values.get(name).cloned(),
    })
}

/// Writes an item and its bound elements, one element per line.
pub fn write_item(out: &mut impl Write, item: &DynamicItem) -> io::Result<()> {
    writeln!(out, "{} ({})", item.codename, item.content_type)?;
    for (element, value) in &item.values {
        writeln!(out, "  {element}: {value}")?;
    }
    Ok(())
}
