//! Unit tests for the parsing engine, organized by concern.

mod arbitrary;

use alloc::string::ToString;

use crate::{Map, Value};

/// Builds an object value from key/value pairs.
pub(crate) fn object<const N: usize>(pairs: [(&str, Value); N]) -> Value {
    let mut map = Map::new();
    for (k, v) in pairs {
        map.insert(k.to_string(), v);
    }
    Value::Object(map)
}
