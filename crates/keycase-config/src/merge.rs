use serde_json::Value;

/// Merge `layers` left to right; later layers win.
///
/// Objects merge key by key, everything else replaces. A `null` in a later layer leaves the
/// lower value in place.
pub fn merge_layers(layers: &[Value]) -> Value {
    let mut res = Value::Null;
    for layer in layers {
        res = merge_one(res, layer.clone());
    }
    res
}

fn merge_one(to: Value, from: Value) -> Value {
    match (to, from) {
        (to, Value::Null) => to,
        (Value::Object(mut to_map), Value::Object(from_map)) => {
            for (k, v) in from_map {
                let existing = to_map.remove(&k).unwrap_or(Value::Null);
                to_map.insert(k, merge_one(existing, v));
            }
            Value::Object(to_map)
        }
        (_, from) => from,
    }
}
