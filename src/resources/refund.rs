use serde::{Deserialize, Serialize};

use crate::{
    core::{Resource, impl_identified},
    types::{Metadata, Timestamp},
};

/// Money returned to a customer against a previous charge or payment intent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Refund {
    pub id: String,
    /// Always `"refund"`.
    pub object: String,
    pub amount: i64,
    pub balance_transaction: Option<String>,
    pub charge: Option<String>,
    pub created: Timestamp,
    pub currency: String,
    pub description: Option<String>,
    pub destination_details: Option<DestinationDetails>,
    pub failure_balance_transaction: Option<String>,
    /// e.g. `lost_or_stolen_card`, `expired_or_canceled_card`.
    pub failure_reason: Option<String>,
    pub instructions_email: Option<String>,
    pub metadata: Option<Metadata>,
    pub next_action: Option<RefundNextAction>,
    pub payment_intent: Option<String>,
    pub reason: Option<RefundReason>,
    pub receipt_number: Option<String>,
    pub status: RefundStatus,
}

impl Resource for Refund {
    const SCHEMA: &'static str = "refunds";
}

impl_identified!(Refund);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RefundReason {
    Duplicate,
    Fraudulent,
    RequestedByCustomer,
    ExpiredUncapturedCharge,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RefundStatus {
    Pending,
    RequiresAction,
    Succeeded,
    Failed,
    Canceled,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DestinationDetails {
    /// The payment method the refund went back to, e.g. `card`.
    #[serde(rename = "type")]
    pub destination_type: String,
    pub card: Option<CardDestination>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDestination {
    pub reference: Option<String>,
    pub reference_status: Option<String>,
    pub reference_type: Option<String>,
    /// `pending`, `refund` or `reversal`.
    #[serde(rename = "type")]
    pub card_type: String,
}

/// What the customer must do before the refund can complete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefundNextAction {
    #[serde(rename = "type")]
    pub action_type: String,
    pub display_details: Option<DisplayDetails>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayDetails {
    pub email_sent: Option<EmailSent>,
    pub expires_at: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailSent {
    pub email_sent_at: Timestamp,
    pub email_sent_to: String,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn decode_minimal_refund() {
        let refund: Refund = serde_json::from_value(json!({
            "id": "re_123",
            "object": "refund",
            "amount": 1000,
            "charge": "ch_123",
            "created": 1234567890,
            "currency": "usd",
            "status": "succeeded"
        }))
        .unwrap();

        assert_eq!(refund.id, "re_123");
        assert_eq!(refund.charge.as_deref(), Some("ch_123"));
        assert_eq!(refund.status, RefundStatus::Succeeded);
        assert_eq!(refund.reason, None);
        assert_eq!(Refund::SCHEMA, "refunds");
    }

    #[test]
    fn decode_every_reason() {
        for (wire, reason) in [
            ("duplicate", RefundReason::Duplicate),
            ("fraudulent", RefundReason::Fraudulent),
            ("requested_by_customer", RefundReason::RequestedByCustomer),
            ("expired_uncaptured_charge", RefundReason::ExpiredUncapturedCharge),
        ] {
            let refund: Refund = serde_json::from_value(json!({
                "id": "re_test",
                "object": "refund",
                "amount": 100,
                "created": 1234567890,
                "currency": "usd",
                "reason": wire,
                "status": "succeeded"
            }))
            .unwrap();
            assert_eq!(refund.reason, Some(reason));
        }
    }

    #[test]
    fn decode_destination_details() {
        let refund: Refund = serde_json::from_value(json!({
            "id": "re_dest",
            "object": "refund",
            "amount": 2000,
            "created": 1234567890,
            "currency": "usd",
            "destination_details": {
                "card": {
                    "reference": "ref_123",
                    "reference_status": "available",
                    "reference_type": "acquirer_reference_number",
                    "type": "refund"
                },
                "type": "card"
            },
            "status": "succeeded"
        }))
        .unwrap();

        let details = refund.destination_details.unwrap();
        assert_eq!(details.destination_type, "card");
        let card = details.card.unwrap();
        assert_eq!(card.reference.as_deref(), Some("ref_123"));
        assert_eq!(card.reference_status.as_deref(), Some("available"));
        assert_eq!(card.card_type, "refund");
    }

    #[test]
    fn decode_next_action() {
        let refund: Refund = serde_json::from_value(json!({
            "id": "re_action",
            "object": "refund",
            "amount": 3000,
            "created": 1234567890,
            "currency": "usd",
            "instructions_email": "customer@example.com",
            "next_action": {
                "display_details": {
                    "email_sent": {
                        "email_sent_at": 1234567900,
                        "email_sent_to": "customer@example.com"
                    },
                    "expires_at": 1234657890
                },
                "type": "display_details"
            },
            "status": "pending"
        }))
        .unwrap();

        assert_eq!(refund.status, RefundStatus::Pending);
        let action = refund.next_action.unwrap();
        assert_eq!(action.action_type, "display_details");
        let details = action.display_details.unwrap();
        assert_eq!(details.expires_at, Timestamp(1234657890));
        assert_eq!(
            details.email_sent.unwrap().email_sent_to,
            "customer@example.com"
        );
    }

    #[test]
    fn failed_refund_carries_failure_info() {
        let refund: Refund = serde_json::from_value(json!({
            "id": "re_failed",
            "object": "refund",
            "amount": 1500,
            "charge": null,
            "created": 1234567890,
            "currency": "usd",
            "failure_balance_transaction": "txn_fail",
            "failure_reason": "lost_or_stolen_card",
            "status": "failed"
        }))
        .unwrap();

        assert_eq!(refund.status, RefundStatus::Failed);
        assert_eq!(refund.charge, None);
        assert_eq!(refund.failure_reason.as_deref(), Some("lost_or_stolen_card"));
    }
}
