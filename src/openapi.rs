use once_cell::sync::Lazy;
use serde_yaml::{Mapping, Value};
use tracing::debug;

/// The `items` schema written into every patched `sortValues` property:
/// `oneOf: [{type: string}, {type: integer}, {type: number}]`
static SORT_VALUE_ITEMS: Lazy<Value> = Lazy::new(|| {
    let variants = ["string", "integer", "number"]
        .into_iter()
        .map(|t| {
            let mut m = Mapping::new();
            m.insert("type".into(), t.into());
            Value::Mapping(m)
        })
        .collect::<Vec<_>>();
    let mut items = Mapping::new();
    items.insert("oneOf".into(), Value::Sequence(variants));
    Value::Mapping(items)
});

pub fn sort_value_items() -> Value {
    SORT_VALUE_ITEMS.clone()
}

fn has_type(value: &Value, typ: &str) -> bool {
    value.get("type").and_then(Value::as_str) == Some(typ)
}

/// If a schema has `properties.sortValues` of `type: array`, make its items
/// accept string | integer | number via `oneOf`.
/// Only overwrites `items` when they are missing, not a mapping, or `type: object`.
/// Anything that doesn't have that shape is left alone. Returns whether the schema changed.
pub fn fix_sort_values_items(schema: &mut Value) -> bool {
    let Some(Value::Mapping(sort_values)) = schema
        .get_mut("properties")
        .and_then(|p| p.get_mut("sortValues"))
    else {
        return false;
    };
    if sort_values.get("type").and_then(Value::as_str) != Some("array") {
        return false;
    }
    let replace = match sort_values.get("items") {
        Some(items @ Value::Mapping(_)) => has_type(items, "object"),
        _ => true,
    };
    if replace {
        sort_values.insert("items".into(), sort_value_items());
    }
    replace
}

/// Patch every schema under `components.schemas`. Returns how many were changed.
pub fn fix_document(doc: &mut Value) -> usize {
    let Some(Value::Mapping(schemas)) = doc
        .get_mut("components")
        .and_then(|c| c.get_mut("schemas"))
    else {
        debug!("No components.schemas mapping, nothing to patch");
        return 0;
    };
    let mut patched = 0;
    for (name, schema) in schemas.iter_mut() {
        if fix_sort_values_items(schema) {
            debug!(schema = name.as_str().unwrap_or_default(), "Patched sortValues items");
            patched += 1;
        }
    }
    patched
}
