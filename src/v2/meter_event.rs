use bon::Builder;
use serde::{Deserialize, Serialize};

use crate::{
    core::{Namespace, Resource},
    types::{Record, Timestamp},
};

/// A usage record for usage-based billing, sent to `POST /v2/billing/meter_events`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeterEvent {
    /// Must match the `event_name` of a configured meter.
    pub event_name: String,
    /// Idempotency key of the event. Generated by Stripe when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    /// Usually the customer id under `stripe_customer_id` and the amount under `value`.
    pub payload: Record<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<Timestamp>,
}

impl Resource for MeterEvent {
    const SCHEMA: &'static str = "billing/meter_events";
    const NAMESPACE: Namespace = Namespace::V2;
}

impl From<MeterEventCreateParams> for MeterEvent {
    fn from(params: MeterEventCreateParams) -> Self {
        MeterEvent {
            event_name: params.event_name,
            identifier: params.identifier,
            payload: params.payload,
            timestamp: params.timestamp,
        }
    }
}

/// A meter event as accepted by Stripe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeterEventResponse {
    pub identifier: String,
    pub event_name: String,
    pub timestamp: Timestamp,
    pub payload: Record<String>,
    pub created: Timestamp,
    pub livemode: bool,
}

/// Request body for creating a meter event.
///
/// ```
/// use stripe_kit::v2::MeterEventCreateParams;
///
/// let params = MeterEventCreateParams::builder()
///     .event_name("api_requests")
///     .payload([("stripe_customer_id", "cus_123".to_string()), ("value", "25".to_string())])
///     .build();
///
/// let body = serde_json::to_value(&params).unwrap();
/// assert_eq!(body["payload"]["value"], "25");
/// assert!(body.get("identifier").is_none());
/// ```
#[derive(Builder, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeterEventCreateParams {
    #[builder(into)]
    pub event_name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub identifier: Option<String>,

    #[builder(with = |iter: impl IntoIterator<Item = (&'static str, String)>| {
        iter.into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect()
    })]
    pub payload: Record<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub timestamp: Option<Timestamp>,
}

/// A batch of meter events for the high-throughput stream endpoint.
///
/// The stream authenticates with a [`MeterEventSession`](crate::v2::MeterEventSession)
/// token instead of the account secret.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeterEventStream {
    pub events: Vec<MeterEventCreateParams>,
}

impl Resource for MeterEventStream {
    const SCHEMA: &'static str = "billing/meter_event_stream";
    const NAMESPACE: Namespace = Namespace::V2;
}

impl MeterEventStream {
    pub fn push(&mut self, event: MeterEventCreateParams) {
        self.events.push(event);
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl FromIterator<MeterEventCreateParams> for MeterEventStream {
    fn from_iter<I: IntoIterator<Item = MeterEventCreateParams>>(iter: I) -> Self {
        MeterEventStream {
            events: iter.into_iter().collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeterEventStreamResponse {
    pub events: Option<Vec<MeterEventResponse>>,
    pub errors: Option<Vec<MeterEventError>>,
}

impl MeterEventStreamResponse {
    /// `true` when at least one event of the batch was rejected.
    pub fn has_errors(&self) -> bool {
        self.errors.as_ref().is_some_and(|errors| !errors.is_empty())
    }
}

/// A rejected event of a stream batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeterEventError {
    pub code: String,
    pub message: String,
    /// The `identifier` of the rejected event, when it had one.
    pub identifier: Option<String>,
}
