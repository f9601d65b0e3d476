use bon::Builder;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    core::{Namespace, Resource, impl_identified},
    types::Metadata,
};

/// Where Stripe delivers events: a webhook endpoint or an Amazon EventBridge bus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDestination {
    pub id: String,
    /// Always `"v2.core.event_destination"`.
    pub object: String,
    pub created: DateTime<Utc>,
    pub description: Option<String>,
    /// Event type names, e.g. `v1.billing.meter.error_report_triggered`.
    pub enabled_events: Vec<String>,
    #[serde(rename = "type")]
    pub destination_type: DestinationType,
    pub livemode: bool,
    pub metadata: Option<Metadata>,
    pub name: String,
    pub status: Status,
    pub status_details: Option<StatusDetails>,
    pub updated: DateTime<Utc>,
    pub webhook_endpoint: Option<WebhookEndpoint>,
    pub amazon_eventbridge: Option<AmazonEventbridge>,
}

impl Resource for EventDestination {
    const SCHEMA: &'static str = "core/event_destinations";
    const NAMESPACE: Namespace = Namespace::V2;
}

impl_identified!(EventDestination);

impl EventDestination {
    pub fn is_enabled(&self) -> bool {
        self.status == Status::Enabled
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DestinationType {
    WebhookEndpoint,
    AmazonEventbridge,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Enabled,
    Disabled,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusDetails {
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookEndpoint {
    pub url: String,
    /// Only returned when the destination is created, or when expanded.
    pub signing_secret: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmazonEventbridge {
    pub aws_account_id: String,
    pub aws_region: String,
    pub event_bus_name: Option<String>,
}

/// Request body for `POST /v2/core/event_destinations`.
///
/// Set `webhook_endpoint` or `amazon_eventbridge` to match `destination_type`.
#[derive(Builder, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDestinationCreateParams {
    #[builder(into)]
    pub name: String,

    #[serde(rename = "type")]
    pub destination_type: DestinationType,

    #[builder(with = |iter: impl IntoIterator<Item = &'static str>| iter.into_iter().map(|s| s.to_string()).collect())]
    pub enabled_events: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook_endpoint: Option<WebhookEndpointParams>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub amazon_eventbridge: Option<AmazonEventbridgeParams>,
}

#[derive(Builder, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookEndpointParams {
    #[builder(into)]
    pub url: String,
}

#[derive(Builder, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmazonEventbridgeParams {
    #[builder(into)]
    pub aws_account_id: String,
    #[builder(into)]
    pub aws_region: String,
}
