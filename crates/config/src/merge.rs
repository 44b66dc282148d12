//! Recursive deep merge of JSON configuration trees.

use serde_json::Value;

/// Deep-merges `user` onto `default`, returning a fresh tree.
///
/// Rules, applied per key:
///
/// - both sides are objects: recurse;
/// - any other value present in `user` (primitive, array, or object with a
///   non-object counterpart) replaces the default wholesale — arrays and
///   primitives are atomic, never merged element-wise;
/// - keys only in `default` are kept;
/// - keys only in `user` are inserted.
///
/// Neither input is mutated, and the result contains every key present in
/// either tree. Supplying a partial object (say, only `domain` and `range`
/// of a scale) therefore preserves its untouched sibling keys.
pub fn merge(default: &Value, user: &Value) -> Value {
    match (default, user) {
        (Value::Object(default_map), Value::Object(user_map)) => {
            let mut merged = default_map.clone();
            for (key, user_value) in user_map {
                let value = match default_map.get(key) {
                    Some(default_value) => merge(default_value, user_value),
                    None => user_value.clone(),
                };
                merged.insert(key.clone(), value);
            }
            Value::Object(merged)
        }
        (_, user_value) => user_value.clone(),
    }
}
