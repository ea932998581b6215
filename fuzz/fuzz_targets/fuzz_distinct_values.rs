//! Fuzz target: distinct-value collection over arbitrary JSON records.
//!
//! Feeds any JSON array of objects through `distinct_values` for every field
//! and checks that no value is reported twice.

#![no_main]

use std::collections::HashSet;

use insight_core::{distinct_values, Field, Record};
use libfuzzer_sys::fuzz_target;
use serde_json::Value;

fuzz_target!(|data: &[u8]| {
    let Ok(Value::Array(items)) = serde_json::from_slice::<Value>(data) else {
        return;
    };
    let records: Vec<Record> = items
        .into_iter()
        .filter_map(|item| match item {
            Value::Object(map) => Some(map),
            _ => None,
        })
        .collect();

    for field in Field::ALL {
        let values = distinct_values(&records, field);
        let rendered: HashSet<String> = values.iter().map(Value::to_string).collect();
        assert_eq!(rendered.len(), values.len(), "duplicate value for {field}");
    }
});
