//! Canonical JSON rendering.
//!
//! Manifest bytes are hashed downstream to produce the manifest's own
//! content identifier, so two structurally equal documents must
//! serialize to byte-identical text regardless of producer. Object keys
//! are emitted in byte order at every nesting level and no whitespace
//! is inserted.

use serde::Serialize;
use serde_json::Value;

/// Serialize the given value into its canonical JSON value form.
///
/// Useful for consumers that hash or merge the value tree before
/// rendering it with [`to_string`].
pub fn to_value<T: Serialize>(value: &T) -> Result<Value, serde_json::Error> {
    serde_json::to_value(value)
}

/// Serialize the given value to canonical JSON text.
pub fn to_string<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    let value = to_value(value)?;
    let mut out = String::new();
    write_value(&value, &mut out)?;
    Ok(out)
}

fn write_value(value: &Value, out: &mut String) -> Result<(), serde_json::Error> {
    match value {
        Value::Object(map) => {
            // Sorted explicitly rather than relying on `serde_json`'s
            // map ordering, which is feature-dependent.
            let mut entries: Vec<_> = map.iter().collect();
            entries.sort_unstable_by(|(a, _), (b, _)| a.as_bytes().cmp(b.as_bytes()));
            out.push('{');
            for (i, (key, value)) in entries.into_iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                out.push_str(&serde_json::to_string(key)?);
                out.push(':');
                write_value(value, out)?;
            }
            out.push('}');
        }
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_value(item, out)?;
            }
            out.push(']');
        }
        scalar => out.push_str(&serde_json::to_string(scalar)?),
    }
    Ok(())
}
