//! Fuzz target: resolving `/api/unique/{segment}` path segments.
//!
//! Arbitrary segments must either resolve to a field whose own segment is
//! identical, or be rejected with `UnknownField`. Never panic.

#![no_main]

use insight_core::{CoreError, Field};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|segment: &str| {
    match segment.parse::<Field>() {
        Ok(field) => assert_eq!(field.route_segment(), segment),
        Err(CoreError::UnknownField { segment: echoed }) => assert_eq!(echoed, segment),
        Err(other) => panic!("unexpected error: {other}"),
    }
});
