//! Path-tracking entry points for decoding Stripe payloads.
//!
//! Plain `serde_json::from_*` works on every model in this crate. These wrappers add the
//! field path to the error, which is what you want to log when a vendor payload drifts.
//!
//! ```
//! use stripe_kit::{decode, errors::DecodeErrorKind, resources::Charge};
//!
//! let err = decode::from_str::<Charge>(r#"{"id": "ch_1", "object": "charge"}"#).unwrap_err();
//! let decode = err.as_decode().unwrap();
//! assert_eq!(decode.kind, DecodeErrorKind::MissingField);
//! assert!(decode.message.contains("amount"));
//! ```

use serde::{Serialize, de::DeserializeOwned};

use crate::errors::{DecodeError, Result};

/// Decode `T` from a JSON string.
pub fn from_str<T: DeserializeOwned>(s: &str) -> Result<T> {
    let de = &mut serde_json::Deserializer::from_str(s);
    let value = serde_path_to_error::deserialize(&mut *de).map_err(DecodeError::from_path_error)?;
    de.end().map_err(DecodeError::trailing)?;
    Ok(value)
}

/// Decode `T` from raw JSON bytes, e.g. an HTTP response body.
pub fn from_slice<T: DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    let de = &mut serde_json::Deserializer::from_slice(bytes);
    let value = serde_path_to_error::deserialize(&mut *de).map_err(DecodeError::from_path_error)?;
    de.end().map_err(DecodeError::trailing)?;
    Ok(value)
}

/// Decode `T` from an already-parsed JSON value.
pub fn from_value<T: DeserializeOwned>(value: serde_json::Value) -> Result<T> {
    Ok(serde_path_to_error::deserialize(value).map_err(DecodeError::from_path_error)?)
}

/// Encode `value` into a JSON value. `None` fields of request bodies are omitted.
pub fn to_value<T: Serialize>(value: &T) -> Result<serde_json::Value> {
    Ok(serde_json::to_value(value)?)
}

/// Encode `value` into a compact JSON string.
pub fn to_string<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}
