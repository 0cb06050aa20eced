/*!
Reading and writing `These` values as JSON

A value is written as an object keyed by side:
```text
This(a)    => {"This": a}
That(b)    => {"That": b}
Both(a, b) => {"This": a, "That": b}
```
Decoding accepts the two fields of a `Both` in either order, and rejects objects with no fields,
unknown fields or repeated fields.

# Example
```rust
use these::{json, These};
let value: These<i32, &str> = These::Both(1, "a");
assert_eq!(json::to_string(&value).unwrap(), r#"{"This":1,"That":"a"}"#);
let decoded: These<i32, String> = json::from_str(r#"{"That":"a","This":1}"#).unwrap();
assert_eq!(decoded, These::Both(1, "a".to_string()));
```
*/
use crate::error::Result;
use crate::these::These;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

pub use crate::serde_impl::{THAT_KEY, THIS_KEY};

/// Encode a value as a JSON string
pub fn to_string<L: Serialize, R: Serialize>(value: &These<L, R>) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}

/// Encode a value as a JSON tree
pub fn to_value<L: Serialize, R: Serialize>(value: &These<L, R>) -> Result<Value> {
    Ok(serde_json::to_value(value)?)
}

/// Decode a value from a JSON string
pub fn from_str<L: DeserializeOwned, R: DeserializeOwned>(input: &str) -> Result<These<L, R>> {
    serde_json::from_str(input).map_err(|err| {
        tracing::debug!(error = %err, "failed to decode These from JSON");
        err.into()
    })
}

/// Decode a value from a JSON tree
pub fn from_value<L: DeserializeOwned, R: DeserializeOwned>(value: Value) -> Result<These<L, R>> {
    serde_json::from_value(value).map_err(|err| {
        tracing::debug!(error = %err, "failed to decode These from JSON");
        err.into()
    })
}
