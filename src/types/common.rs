//! Miscellaneous common types shared by every Stripe resource.

use std::{fmt::Display, time::Duration};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// A string-keyed map, as used by Stripe for `metadata`, `currency_options` and friends.
pub type Record<V> = std::collections::HashMap<String, V>;

/// A JSON object with its keys in wire order.
pub type JsonObject = serde_json::Map<String, serde_json::Value>;

/// Decodes `null` the same as an absent key: to `T::default()`.
///
/// Pair with `#[serde(default)]` on collection fields Stripe may omit or send as `null`.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Caller-defined annotations attached to a resource.
///
/// Stripe enforces the limits (50 keys, 40 character keys, 500 character values);
/// nothing is validated locally.
pub type Metadata = Record<String>;

/// A Unix timestamp in whole seconds, as Stripe sends it.
///
/// Kept as raw seconds on the wire. [`Timestamp::as_datetime`] gives the calendar view.
///
/// ```
/// use stripe_kit::types::Timestamp;
///
/// let ts: Timestamp = serde_json::from_value(serde_json::json!(1234567890)).unwrap();
/// assert_eq!(ts.as_secs(), 1234567890);
/// assert_eq!(serde_json::to_value(ts).unwrap(), serde_json::json!(1234567890));
///
/// assert!(serde_json::from_value::<Timestamp>(serde_json::json!("1234567890")).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Timestamp(pub i64);

impl Timestamp {
    pub fn as_secs(&self) -> i64 {
        self.0
    }

    /// The current wall-clock time, truncated to seconds.
    pub fn now() -> Self {
        Timestamp(Utc::now().timestamp())
    }

    /// `None` when the value is outside the range chrono can represent.
    pub fn as_datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.0, 0)
    }

    /// Time left until `self`, measured from `now`. Zero once `now` has passed `self`.
    pub fn duration_since(&self, now: Timestamp) -> Duration {
        Duration::from_secs(self.0.saturating_sub(now.0).max(0) as u64)
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Timestamp(dt.timestamp())
    }
}

impl From<i64> for Timestamp {
    fn from(secs: i64) -> Self {
        Timestamp(secs)
    }
}

impl Serialize for Timestamp {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_i64(self.0)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        i64::deserialize(deserializer).map(Timestamp)
    }
}

impl Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Controls when funds are captured from the customer's account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaptureMethod {
    Automatic,
    AutomaticAsync,
    Manual,
}

/// Whether a payment method may be reused for future payments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SetupFutureUsage {
    None,
    OffSession,
    OnSession,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn capture_method_wire_strings() {
        assert_eq!(
            serde_json::to_value(CaptureMethod::AutomaticAsync).unwrap(),
            json!("automatic_async")
        );
        assert_eq!(
            serde_json::from_value::<CaptureMethod>(json!("manual")).unwrap(),
            CaptureMethod::Manual
        );
        assert!(serde_json::from_value::<CaptureMethod>(json!("later")).is_err());
    }

    #[test]
    fn setup_future_usage_wire_strings() {
        assert_eq!(
            serde_json::from_value::<SetupFutureUsage>(json!("off_session")).unwrap(),
            SetupFutureUsage::OffSession
        );
        assert_eq!(
            serde_json::to_value(SetupFutureUsage::None).unwrap(),
            json!("none")
        );
    }

    #[test]
    fn remaining_duration_saturates_at_zero() {
        let expires = Timestamp(1_000);
        assert_eq!(expires.duration_since(Timestamp(400)), Duration::from_secs(600));
        assert_eq!(expires.duration_since(Timestamp(2_000)), Duration::ZERO);
    }

    #[test]
    fn calendar_view_matches_seconds() {
        let ts = Timestamp(1_700_000_000);
        let dt = ts.as_datetime().unwrap();
        assert_eq!(dt.to_rfc3339(), "2023-11-14T22:13:20+00:00");
        assert_eq!(Timestamp::from(dt), ts);
    }
}
