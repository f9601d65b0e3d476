use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    core::{Namespace, Resource, impl_identified},
    types::JsonObject,
};

/// A v2 event notification. It references the changed object instead of embedding it;
/// fetch `related_object.url` for the current state.
///
/// ```
/// use stripe_kit::v2::{EventReason, ThinEvent};
///
/// let event: ThinEvent = serde_json::from_str(r#"{
///     "id": "evt_test_65R",
///     "object": "v2.core.event",
///     "type": "v1.billing.meter.error_report_triggered",
///     "created": "2024-09-18T12:00:00.000Z",
///     "livemode": false,
///     "related_object": { "id": "mtr_123", "type": "billing.meter", "url": "/v1/billing/meters/mtr_123" },
///     "reason": { "type": "request", "request": { "id": "req_1", "idempotency_key": null } }
/// }"#).unwrap();
///
/// let Some(EventReason::Request { request }) = &event.reason else { unreachable!() };
/// assert_eq!(request.id, "req_1");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThinEvent {
    pub id: String,
    /// Always `"v2.core.event"`.
    pub object: String,
    /// Only set for events rendered with a pinned API version.
    pub api_version: Option<String>,
    pub created: DateTime<Utc>,
    /// The connected account the event belongs to.
    pub context: Option<String>,
    pub livemode: bool,
    #[serde(rename = "type")]
    pub event_type: String,
    pub related_object: Option<RelatedObject>,
    pub reason: Option<EventReason>,
    /// Extra event-specific fields, present for some event types.
    pub data: Option<JsonObject>,
}

impl Resource for ThinEvent {
    const SCHEMA: &'static str = "core/events";
    const NAMESPACE: Namespace = Namespace::V2;
}

impl_identified!(ThinEvent);

/// The object whose change triggered the event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelatedObject {
    pub id: String,
    /// e.g. `billing.meter`.
    #[serde(rename = "type")]
    pub object_type: String,
    /// API path of the object, relative to the API host.
    pub url: Option<String>,
}

/// Why the event happened, discriminated by the sibling `type` key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EventReason {
    /// An API request caused the event.
    Request { request: ReasonRequest },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReasonRequest {
    pub id: String,
    pub idempotency_key: Option<String>,
}
