//! Schema-less records and distinct-value semantics.

use indexmap::IndexMap;
use serde_json::Value;

use crate::Field;

/// A single document from the collection.
///
/// Records are opaque: no field is required and values are passed through
/// untouched. Key order is preserved as read from the store.
pub type Record = serde_json::Map<String, Value>;

/// Collect the distinct values of `field` across `records`.
///
/// Mirrors the document store's `distinct` command:
/// - records without the field contribute nothing,
/// - an array value contributes each of its elements,
/// - an explicit `null` counts as a value.
///
/// Values are returned in first-seen order. Two values are equal when their
/// JSON serializations are equal.
pub fn distinct_values<'a, I>(records: I, field: Field) -> Vec<Value>
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut seen: IndexMap<String, Value> = IndexMap::new();
    for record in records {
        match record.get(field.key()) {
            None => {}
            Some(Value::Array(items)) => {
                for item in items {
                    remember(&mut seen, item);
                }
            }
            Some(value) => remember(&mut seen, value),
        }
    }
    seen.into_values().collect()
}

fn remember(seen: &mut IndexMap<String, Value>, value: &Value) {
    seen.entry(value.to_string()).or_insert_with(|| value.clone());
}
